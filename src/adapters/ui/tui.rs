//! Implements InputPort. Inquire-based interactive menu.
//!
//! Main menu -> contacts, planning (tasks, meals, groceries), preview & send,
//! auto-send settings, scheduler, delivery log.

use crate::domain::locale;
use crate::domain::planning::{GroceryList, TaskList, WeeklyPlan};
use crate::domain::schedule::describe_schedule;
use crate::domain::{
    AutoSendSettings, ComposedMessage, Contact, ContactRole, DayOfWeek, DeliveryResult,
    DomainError, Frequency, GroceryItem, LanguageCode, MealEntry, MealSlot, MessageKind,
    PriorityLevel, TaskItem, TaskSelection,
};
use crate::ports::{HouseholdRepo, InputPort};
use crate::usecases::{AutoSendService, MessagingService};
use async_trait::async_trait;
use chrono::Datelike;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Confirm, Editor, InquireError, MultiSelect, Select, Text};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    SendTasks,
    SendMeals,
    SendGroceries,
    ManageTasks,
    PlanMeals,
    ManageGroceries,
    Contacts,
    AutoSend,
    Scheduler,
    DeliveryLog,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 11] = [
        MenuAction::SendTasks,
        MenuAction::SendMeals,
        MenuAction::SendGroceries,
        MenuAction::ManageTasks,
        MenuAction::PlanMeals,
        MenuAction::ManageGroceries,
        MenuAction::Contacts,
        MenuAction::AutoSend,
        MenuAction::Scheduler,
        MenuAction::DeliveryLog,
        MenuAction::Quit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SendTasks => "📋 Send tasks",
            Self::SendMeals => "🍽️  Send meal plan",
            Self::SendGroceries => "🛒 Send grocery list",
            Self::ManageTasks => "✏️  Manage tasks",
            Self::PlanMeals => "🗓️  Plan meals",
            Self::ManageGroceries => "🧺 Manage grocery list",
            Self::Contacts => "👤 Contacts",
            Self::AutoSend => "⏰ Auto-send settings",
            Self::Scheduler => "▶️  Run auto-send scheduler",
            Self::DeliveryLog => "📜 Delivery log",
            Self::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Applies the menu theme to every following inquire prompt.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("?").with_fg(Color::LightMagenta))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightCyan))
        .with_selected_checkbox(Styled::new("◉").with_fg(Color::LightGreen))
        .with_unselected_checkbox(Styled::new("○").with_fg(Color::DarkGrey));
    inquire::set_global_render_config(config);
}

fn ui_err(e: InquireError) -> DomainError {
    DomainError::Ui(e.to_string())
}

fn new_id(prefix: &str) -> String {
    format!("{}{}", prefix, chrono::Utc::now().timestamp_millis())
}

fn contact_label(contact: &Contact) -> String {
    format!(
        "{} ({}, {}, {})",
        contact.name,
        role_label(contact.role),
        contact.preferred_language,
        contact.phone
    )
}

fn role_label(role: ContactRole) -> &'static str {
    match role {
        ContactRole::Maid => "maid",
        ContactRole::Cook => "cook",
        ContactRole::Driver => "driver",
        ContactRole::Other => "other",
    }
}

fn task_label(task: &TaskItem) -> String {
    let priority = match task.priority {
        Some(PriorityLevel::Urgent) => "urgent",
        Some(PriorityLevel::High) => "high",
        Some(PriorityLevel::Medium) => "medium",
        Some(PriorityLevel::Low) => "low",
        None => "-",
    };
    let done = if task.completed { " ✓" } else { "" };
    format!("{} [{}]{}", task.title, priority, done)
}

fn delivery_summary(result: &DeliveryResult) -> String {
    match result {
        DeliveryResult::Sent {
            message_id: Some(id),
        } => format!("✅ Sent (id {})", id),
        DeliveryResult::Sent { message_id: None } => "✅ Sent".to_string(),
        DeliveryResult::LinkGenerated { url } => format!("🔗 Open to send:\n{}", url),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    repo: Arc<dyn HouseholdRepo>,
    messaging: Arc<MessagingService>,
    auto_send: Arc<AutoSendService>,
    default_language: LanguageCode,
    /// Household clock, for "today".
    offset: chrono::FixedOffset,
}

impl TuiInputPort {
    pub fn new(
        repo: Arc<dyn HouseholdRepo>,
        messaging: Arc<MessagingService>,
        auto_send: Arc<AutoSendService>,
        default_language: LanguageCode,
        offset: chrono::FixedOffset,
    ) -> Self {
        Self {
            repo,
            messaging,
            auto_send,
            default_language,
            offset,
        }
    }

    fn today(&self) -> DayOfWeek {
        DayOfWeek::from(chrono::Utc::now().with_timezone(&self.offset).weekday())
    }

    async fn handle(&self, action: MenuAction) -> Result<(), DomainError> {
        match action {
            MenuAction::SendTasks => self.send_tasks().await,
            MenuAction::SendMeals => self.send_meals().await,
            MenuAction::SendGroceries => self.send_groceries().await,
            MenuAction::ManageTasks => self.manage_tasks().await,
            MenuAction::PlanMeals => self.plan_meals().await,
            MenuAction::ManageGroceries => self.manage_groceries().await,
            MenuAction::Contacts => self.add_contact().await,
            MenuAction::AutoSend => self.edit_auto_send().await,
            MenuAction::Scheduler => self.run_scheduler().await,
            MenuAction::DeliveryLog => self.show_delivery_log().await,
            MenuAction::Quit => Ok(()),
        }
    }

    async fn pick_contact(&self) -> Result<Contact, DomainError> {
        let contacts = self.repo.list_contacts().await?;
        if contacts.is_empty() {
            return Err(DomainError::NotFound(
                "no contacts yet; add one under Contacts".into(),
            ));
        }
        let labels: Vec<String> = contacts.iter().map(contact_label).collect();
        let picked = Select::new("Contact:", labels.clone())
            .prompt()
            .map_err(ui_err)?;
        let index = labels.iter().position(|l| *l == picked).unwrap_or(0);
        Ok(contacts[index].clone())
    }

    fn pick_day(&self, prompt: &str) -> Result<DayOfWeek, DomainError> {
        let today = self.today();
        let start = DayOfWeek::ALL.iter().position(|d| *d == today).unwrap_or(0);
        let names: Vec<&str> = DayOfWeek::ALL.iter().map(|d| d.english_name()).collect();
        let picked = Select::new(prompt, names)
            .with_starting_cursor(start)
            .prompt()
            .map_err(ui_err)?;
        DayOfWeek::parse(picked).ok_or_else(|| DomainError::Ui(format!("unknown day {}", picked)))
    }

    /// Show the message, optionally edit it, then send on confirmation.
    async fn review_and_send(
        &self,
        contact: &Contact,
        kind: MessageKind,
        message: ComposedMessage,
    ) -> Result<(), DomainError> {
        println!("\n{}\n", message.text);
        if !message.is_sendable() {
            return Ok(());
        }

        let mut text = message.text;
        let edit = Confirm::new("Edit before sending?")
            .with_default(false)
            .prompt()
            .map_err(ui_err)?;
        if edit {
            let edited = Editor::new("Message:")
                .with_predefined_text(&text)
                .prompt()
                .map_err(ui_err)?;
            text = edited;
        }
        let send = Confirm::new(&format!("Send to {}?", contact.name))
            .with_default(true)
            .prompt()
            .map_err(ui_err)?;
        if !send {
            return Ok(());
        }

        let pb = spinner(&format!("Sending via {}...", self.messaging.transport_name()));
        let result = self.messaging.send(contact, kind, &text).await;
        pb.finish_and_clear();
        println!("{}", delivery_summary(&result?));
        Ok(())
    }

    async fn send_tasks(&self) -> Result<(), DomainError> {
        let contact = self.pick_contact().await?;
        let today = self.today();
        let options = vec![
            "Selected tasks".to_string(),
            format!("Tasks due today ({})", today.english_name()),
            "All tasks".to_string(),
        ];
        let picked = Select::new("Which tasks?", options.clone())
            .prompt()
            .map_err(ui_err)?;
        let selection = match options.iter().position(|o| *o == picked) {
            Some(1) => TaskSelection::DueOn(today),
            Some(2) => TaskSelection::All,
            _ => TaskSelection::Selected,
        };
        let message = self.messaging.preview_tasks(&contact, selection).await?;
        self.review_and_send(&contact, MessageKind::Tasks, message)
            .await
    }

    async fn send_meals(&self) -> Result<(), DomainError> {
        let contact = self.pick_contact().await?;
        let day = self.pick_day("Meal plan for:")?;
        let servings = Text::new("Household size (blank to skip):")
            .prompt()
            .map_err(ui_err)?
            .trim()
            .parse::<u32>()
            .ok();
        let message = self.messaging.preview_meals(&contact, day, servings).await?;
        self.review_and_send(&contact, MessageKind::Meals, message)
            .await
    }

    async fn send_groceries(&self) -> Result<(), DomainError> {
        let contact = self.pick_contact().await?;
        let message = self.messaging.preview_groceries(&contact).await?;
        self.review_and_send(&contact, MessageKind::Groceries, message)
            .await
    }

    async fn manage_tasks(&self) -> Result<(), DomainError> {
        let mut list = TaskList::new(self.repo.list_tasks().await?);
        let actions = vec![
            "Add task",
            "Choose tasks to send",
            "Mark done / not done",
            "Remove task",
        ];
        let action = Select::new("Tasks:", actions).prompt().map_err(ui_err)?;
        match action {
            "Add task" => {
                let title = Text::new("Task:").prompt().map_err(ui_err)?;
                if title.trim().is_empty() {
                    return Ok(());
                }
                let priorities = vec!["none", "low", "medium", "high", "urgent"];
                let priority = match Select::new("Priority:", priorities)
                    .prompt()
                    .map_err(ui_err)?
                {
                    "low" => Some(PriorityLevel::Low),
                    "medium" => Some(PriorityLevel::Medium),
                    "high" => Some(PriorityLevel::High),
                    "urgent" => Some(PriorityLevel::Urgent),
                    _ => None,
                };
                let remarks = Text::new("Remarks (optional):").prompt().map_err(ui_err)?;
                let days = MultiSelect::new(
                    "Repeat on (none = only when chosen):",
                    DayOfWeek::ALL.iter().map(|d| d.english_name()).collect(),
                )
                .prompt()
                .map_err(ui_err)?;
                let task = TaskItem {
                    priority,
                    remarks: Some(remarks.trim().to_string()).filter(|r| !r.is_empty()),
                    days_of_week: days.into_iter().filter_map(DayOfWeek::parse).collect(),
                    ..TaskItem::new(new_id("t"), title.trim())
                };
                list.upsert(task);
            }
            "Choose tasks to send" => {
                let labels: Vec<String> = list.items().iter().map(task_label).collect();
                let defaults: Vec<usize> = list
                    .items()
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.selected)
                    .map(|(i, _)| i)
                    .collect();
                let picked = MultiSelect::new("Send these:", labels.clone())
                    .with_default(&defaults)
                    .prompt()
                    .map_err(ui_err)?;
                let ids: Vec<String> = list.items().iter().map(|t| t.id.clone()).collect();
                list.clear_selection();
                for (id, label) in ids.iter().zip(&labels) {
                    if picked.contains(label) {
                        list.toggle_selected(id)?;
                    }
                }
            }
            "Mark done / not done" => {
                let id = self.pick_task(&list)?;
                let done = list.toggle_completed(&id)?;
                println!("{}", if done { "Marked done." } else { "Marked not done." });
            }
            _ => {
                let id = self.pick_task(&list)?;
                list.remove(&id);
            }
        }
        self.repo.save_tasks(list.items()).await?;
        info!(count = list.items().len(), "tasks saved");
        Ok(())
    }

    fn pick_task(&self, list: &TaskList) -> Result<String, DomainError> {
        if list.items().is_empty() {
            return Err(DomainError::NotFound("no tasks yet".into()));
        }
        let labels: Vec<String> = list.items().iter().map(task_label).collect();
        let picked = Select::new("Task:", labels.clone())
            .prompt()
            .map_err(ui_err)?;
        let index = labels.iter().position(|l| *l == picked).unwrap_or(0);
        Ok(list.items()[index].id.clone())
    }

    async fn load_week(&self) -> Result<WeeklyPlan, DomainError> {
        let mut week = WeeklyPlan::new();
        for day in DayOfWeek::ALL {
            week.set_day(day, self.repo.get_daily_plan(day).await?);
        }
        Ok(week)
    }

    async fn plan_meals(&self) -> Result<(), DomainError> {
        let mut week = self.load_week().await?;
        let day = self.pick_day("Day:")?;
        let current = week.day(day);
        println!(
            "\n{} has {} dish(es) planned.",
            locale::day_name(day, LanguageCode::English),
            current.len()
        );

        let actions = vec!["Add dish", "Move dish", "Remove dish"];
        let action = Select::new("Meals:", actions).prompt().map_err(ui_err)?;
        let mut touched = vec![day];
        match action {
            "Add dish" => {
                let slot = pick_slot("Meal:")?;
                let name = Text::new("Dish:").prompt().map_err(ui_err)?;
                if name.trim().is_empty() {
                    return Ok(());
                }
                week.add_meal(day, MealEntry::new(new_id("m"), name.trim(), slot));
            }
            "Move dish" => {
                let id = pick_meal(&week, day)?;
                let to = self.pick_day("Move to:")?;
                let slot = pick_slot("Meal:")?;
                week.move_meal(day, &id, to, slot)?;
                touched.push(to);
            }
            _ => {
                let id = pick_meal(&week, day)?;
                week.remove_meal(day, &id);
            }
        }
        touched.dedup();
        for d in touched {
            self.repo.save_daily_plan(d, &week.day(d)).await?;
        }
        let planned: Vec<&str> = week.planned_days().iter().map(|d| d.english_name()).collect();
        println!("Planned days: {}", planned.join(", "));
        Ok(())
    }

    async fn manage_groceries(&self) -> Result<(), DomainError> {
        let mut list = GroceryList::new(self.repo.list_grocery_items().await?);
        let actions = vec!["Add item", "Mark bought", "Clear bought items"];
        let action = Select::new("Groceries:", actions).prompt().map_err(ui_err)?;
        match action {
            "Add item" => {
                let name = Text::new("Item:").prompt().map_err(ui_err)?;
                if name.trim().is_empty() {
                    return Ok(());
                }
                let quantity = Text::new("Quantity (e.g. 2 kg, optional):")
                    .prompt()
                    .map_err(ui_err)?;
                let mut parts = quantity.split_whitespace();
                let categories: Vec<&str> = locale::GROCERY_CATEGORIES.to_vec();
                let category = Select::new("Category:", categories)
                    .prompt()
                    .map_err(ui_err)?;
                list.add(GroceryItem {
                    quantity: parts.next().map(str::to_string),
                    unit: Some(parts.collect::<Vec<_>>().join(" ")).filter(|u| !u.is_empty()),
                    category: Some(category.to_string()),
                    ..GroceryItem::new(new_id("g"), name.trim())
                });
            }
            "Mark bought" => {
                let pending: Vec<(String, String)> = list
                    .pending()
                    .iter()
                    .map(|i| (i.id.clone(), i.name.clone()))
                    .collect();
                if pending.is_empty() {
                    println!("Nothing left to buy.");
                    return Ok(());
                }
                let names: Vec<String> = pending.iter().map(|(_, n)| n.clone()).collect();
                let bought = MultiSelect::new("Bought:", names)
                    .prompt()
                    .map_err(ui_err)?;
                for (id, name) in &pending {
                    if bought.contains(name) {
                        list.mark_purchased(id, true)?;
                    }
                }
            }
            _ => {
                let removed = list.clear_purchased();
                println!("Removed {} item(s).", removed);
            }
        }
        self.repo.save_grocery_items(list.items()).await
    }

    async fn add_contact(&self) -> Result<(), DomainError> {
        let contacts = self.repo.list_contacts().await?;
        for c in &contacts {
            println!("  • {}", contact_label(c));
        }
        let add = Confirm::new("Add a contact?")
            .with_default(contacts.is_empty())
            .prompt()
            .map_err(ui_err)?;
        if !add {
            return Ok(());
        }
        let name = Text::new("Name:").prompt().map_err(ui_err)?;
        let phone = Text::new("WhatsApp number (with country code):")
            .prompt()
            .map_err(ui_err)?;
        let roles = vec![
            ContactRole::Maid,
            ContactRole::Cook,
            ContactRole::Driver,
            ContactRole::Other,
        ];
        let role_names: Vec<&str> = roles.iter().map(|r| role_label(*r)).collect();
        let role = Select::new("Role:", role_names).prompt().map_err(ui_err)?;
        let start = LanguageCode::ALL
            .iter()
            .position(|l| *l == self.default_language)
            .unwrap_or(0);
        let language = Select::new("Language:", LanguageCode::ALL.to_vec())
            .with_starting_cursor(start)
            .prompt()
            .map_err(ui_err)?;
        let contact = Contact {
            id: new_id("c"),
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            role: roles
                .into_iter()
                .find(|r| role_label(*r) == role)
                .unwrap_or_default(),
            preferred_language: language,
        };
        self.repo.save_contact(&contact).await?;
        println!("Added {}.", contact_label(&contact));
        Ok(())
    }

    async fn edit_auto_send(&self) -> Result<(), DomainError> {
        let contact = self.pick_contact().await?;
        let current = self.repo.get_auto_send_settings(&contact.id).await?;
        println!("Current: {}", describe_schedule(&current));

        let auto_send = Confirm::new("Enable auto-send?")
            .with_default(current.auto_send)
            .prompt()
            .map_err(ui_err)?;
        let mut settings = AutoSendSettings {
            auto_send,
            preferred_language: contact.preferred_language,
            ..current
        };
        if auto_send {
            let current_time = settings.send_time.clone();
            settings.send_time = Text::new("Send time (HH:MM, 24h):")
                .with_default(&current_time)
                .prompt()
                .map_err(ui_err)?;
            let frequency = Select::new("Frequency:", vec!["daily", "weekly"])
                .prompt()
                .map_err(ui_err)?;
            settings.frequency = if frequency == "weekly" {
                Frequency::Weekly
            } else {
                Frequency::Daily
            };
            if settings.frequency == Frequency::Weekly {
                let defaults: Vec<usize> = DayOfWeek::ALL
                    .iter()
                    .enumerate()
                    .filter(|(_, d)| settings.days_of_week.contains(*d))
                    .map(|(i, _)| i)
                    .collect();
                let days = MultiSelect::new(
                    "Days:",
                    DayOfWeek::ALL.iter().map(|d| d.english_name()).collect(),
                )
                .with_default(&defaults)
                .prompt()
                .map_err(ui_err)?;
                settings.days_of_week = days.into_iter().filter_map(DayOfWeek::parse).collect();
            }
        }

        let update = self.auto_send.update_settings(&contact.id, &settings).await?;
        println!("Saved: {}", update.description);
        if let Some(result) = update.confirmation {
            println!("Confirmation: {}", delivery_summary(&result));
        }
        Ok(())
    }

    async fn run_scheduler(&self) -> Result<(), DomainError> {
        println!("Scheduler running. Press Ctrl+C to return to the menu.");
        tokio::select! {
            result = self.auto_send.run_loop() => result,
            _ = tokio::signal::ctrl_c() => {
                info!("Scheduler stopped by user");
                Ok(())
            }
        }
    }

    async fn show_delivery_log(&self) -> Result<(), DomainError> {
        let records = self.messaging.recent_deliveries(10).await?;
        if records.is_empty() {
            println!("Nothing sent yet.");
        }
        for record in records {
            let when = chrono::DateTime::from_timestamp(record.sent_at, 0)
                .map(|t| t.with_timezone(&self.offset).format("%a %d %b %H:%M").to_string())
                .unwrap_or_default();
            let first_line = record.text.lines().nth(2).unwrap_or_default();
            println!(
                "{}  {:<12} {:<8} {}",
                when,
                record.contact_id,
                record.kind.as_str(),
                first_line
            );
        }
        Ok(())
    }
}

fn pick_slot(prompt: &str) -> Result<MealSlot, DomainError> {
    let names = vec!["breakfast", "lunch", "dinner", "snack"];
    let picked = Select::new(prompt, names).prompt().map_err(ui_err)?;
    Ok(MealSlot::ORDER
        .into_iter()
        .zip(["breakfast", "lunch", "dinner", "snack"])
        .find(|(_, n)| *n == picked)
        .map(|(s, _)| s)
        .unwrap_or(MealSlot::Lunch))
}

fn pick_meal(week: &WeeklyPlan, day: DayOfWeek) -> Result<String, DomainError> {
    let plan = week.day(day);
    let entries: Vec<&MealEntry> = MealSlot::ORDER
        .iter()
        .flat_map(|s| plan.slot(*s).iter())
        .collect();
    if entries.is_empty() {
        return Err(DomainError::NotFound(format!(
            "no meals planned for {}",
            day.english_name()
        )));
    }
    let labels: Vec<String> = entries
        .iter()
        .map(|e| format!("{} ({:?})", e.name, e.category).to_lowercase())
        .collect();
    let picked = Select::new("Dish:", labels.clone())
        .prompt()
        .map_err(ui_err)?;
    let index = labels.iter().position(|l| *l == picked).unwrap_or(0);
    Ok(entries[index].id.clone())
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let action = match Select::new("MaidEasy", MenuAction::ALL.to_vec()).prompt() {
                Ok(a) => a,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(());
                }
                Err(e) => return Err(ui_err(e)),
            };
            if action == MenuAction::Quit {
                return Ok(());
            }
            if let Err(e) = self.handle(action).await {
                println!("✗ {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_summary() {
        assert_eq!(
            delivery_summary(&DeliveryResult::Sent {
                message_id: Some("wamid.1".into())
            }),
            "✅ Sent (id wamid.1)"
        );
        let link = delivery_summary(&DeliveryResult::LinkGenerated {
            url: "https://wa.me/91123?text=hi".into(),
        });
        assert!(link.ends_with("https://wa.me/91123?text=hi"));
    }

    #[test]
    fn test_labels() {
        let contact = Contact {
            id: "c1".into(),
            name: "Meena".into(),
            phone: "+91 1234567".into(),
            role: ContactRole::Cook,
            preferred_language: LanguageCode::Telugu,
        };
        assert_eq!(contact_label(&contact), "Meena (cook, telugu, +91 1234567)");

        let mut task = TaskItem::new("t1", "Mop floor").with_priority(PriorityLevel::High);
        task.completed = true;
        assert_eq!(task_label(&task), "Mop floor [high] ✓");
    }

    #[test]
    fn test_menu_has_quit_last() {
        assert_eq!(MenuAction::ALL.last(), Some(&MenuAction::Quit));
    }
}

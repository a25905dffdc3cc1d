//! Message composer. Turns tasks, a day's meal plan or a grocery list into
//! WhatsApp-ready text in the contact's language.
//!
//! Every message has the same shape:
//! `Greeting\n\nHeader\n\nBody\n\nSummary\n\nClosing`.
//! Composition is pure: identical inputs always give byte-identical text, so a
//! preview is exactly what gets sent and "reset" can regenerate it.

use crate::domain::locale::{self, Localized, fill};
use crate::domain::{
    ComposedMessage, DailyPlan, DayOfWeek, GroceryItem, LanguageCode, MealSlot, PhraseDictionary,
    PriorityLevel, TaskItem,
};

/// Emoji for dishes the dictionary does not know.
const DEFAULT_MEAL_EMOJI: &str = "🍽️";
/// Emoji for grocery items the dictionary does not know.
const DEFAULT_GROCERY_EMOJI: &str = "🛍️";

/// Which tasks go into a task message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskSelection {
    /// Use the items as given; the caller already filtered them.
    #[default]
    All,
    /// Ticked in the UI and not yet done.
    Selected,
    /// Not done, and either a `daily` task or scheduled on this weekday.
    DueOn(DayOfWeek),
}

impl TaskSelection {
    pub fn includes(&self, task: &TaskItem) -> bool {
        match self {
            Self::All => true,
            Self::Selected => task.selected && !task.completed,
            Self::DueOn(day) => {
                !task.completed
                    && (task
                        .task_category
                        .as_deref()
                        .is_some_and(|c| c.trim().eq_ignore_ascii_case("daily"))
                        || task.days_of_week.contains(day))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskContext {
    /// Shown in the header ("Tasks for Monday"). `None` gives the "today" header.
    pub day_label: Option<String>,
    pub selection: TaskSelection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealContext {
    pub day_label: String,
    /// Household size used when an entry has no count of its own.
    pub servings: Option<u32>,
}

/// Composer bound to a phrase dictionary.
#[derive(Debug, Clone, Copy)]
pub struct MessageComposer<'d> {
    dictionary: &'d PhraseDictionary,
}

impl<'d> MessageComposer<'d> {
    pub fn new(dictionary: &'d PhraseDictionary) -> Self {
        Self { dictionary }
    }

    /// Task message, or the localized "no tasks" sentinel when nothing is eligible.
    pub fn compose_task_message(
        &self,
        items: &[TaskItem],
        language: LanguageCode,
        context: &TaskContext,
    ) -> ComposedMessage {
        let mut tasks: Vec<&TaskItem> = items
            .iter()
            .filter(|t| context.selection.includes(t))
            .collect();
        if tasks.is_empty() {
            return sentinel(locale::NO_TASKS, language);
        }
        // stable: equal priorities keep their input order
        tasks.sort_by_key(|t| std::cmp::Reverse(effective_priority(t)));

        let header = match context.day_label.as_deref() {
            Some(day) => fill(locale::TASKS_HEADER_DAY.get(language), &[("day", day)]),
            None => locale::TASKS_HEADER_TODAY.get(language).to_string(),
        };

        let body = tasks
            .iter()
            .enumerate()
            .map(|(i, task)| self.task_line(i + 1, task, language))
            .collect::<Vec<_>>()
            .join("\n");

        let count = tasks.len().to_string();
        let summary = fill(locale::TOTAL_TASKS.get(language), &[("count", &count)]);

        assemble(
            language,
            &header,
            &body,
            &summary,
            locale::THANKS.get(language),
            tasks.len(),
        )
    }

    fn task_line(&self, number: usize, task: &TaskItem, language: LanguageCode) -> String {
        let mut line = format!(
            "{}. {} {} {}",
            number,
            priority_dot(task.priority),
            self.dictionary.emoji_for_phrase(&task.title),
            self.dictionary.translate_phrase(&task.title, language),
        );
        if let Some(label) = task.priority.and_then(|p| locale::priority_label(p, language)) {
            line.push_str(&format!(" [{}]", label));
        }
        if let Some(remarks) = task.remarks.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            line.push_str(&format!(" ({})", remarks));
        }
        line
    }

    /// Meal message for one day. Empty slots are left out entirely.
    pub fn compose_meal_message(
        &self,
        plan: &DailyPlan,
        language: LanguageCode,
        context: &MealContext,
    ) -> ComposedMessage {
        if plan.is_empty() {
            return sentinel(locale::NO_MEALS, language);
        }

        let header = fill(
            locale::MEALS_HEADER.get(language),
            &[("day", &context.day_label)],
        );

        let mut sections = Vec::new();
        for slot in MealSlot::ORDER {
            let entries = plan.slot(slot);
            if entries.is_empty() {
                continue;
            }
            let mut section = vec![locale::slot_header(slot, language).to_string()];
            for (i, entry) in entries.iter().enumerate() {
                let mut line = format!(
                    "{}. {} {}",
                    i + 1,
                    self.dictionary.emoji_or(&entry.name, DEFAULT_MEAL_EMOJI),
                    self.dictionary.translate_phrase(&entry.name, language),
                );
                let people = entry.people_count.or(entry.servings).or(context.servings);
                if let Some(n) = people.filter(|n| *n > 0) {
                    let n = n.to_string();
                    line.push_str(&format!(
                        " ({})",
                        fill(locale::FOR_PEOPLE.get(language), &[("count", &n)])
                    ));
                }
                section.push(line);
            }
            sections.push(section.join("\n"));
        }

        let count = plan.len().to_string();
        let summary = fill(locale::TOTAL_DISHES.get(language), &[("count", &count)]);

        assemble(
            language,
            &header,
            &sections.join("\n\n"),
            &summary,
            locale::MEALS_CLOSING.get(language),
            plan.len(),
        )
    }

    /// Shopping list of items not yet purchased, grouped by category.
    pub fn compose_grocery_message(
        &self,
        items: &[GroceryItem],
        language: LanguageCode,
    ) -> ComposedMessage {
        let pending: Vec<&GroceryItem> = items.iter().filter(|i| !i.purchased).collect();
        if pending.is_empty() {
            return sentinel(locale::NO_GROCERIES, language);
        }

        let mut sections = Vec::new();
        for category in locale::GROCERY_CATEGORIES {
            let group: Vec<&&GroceryItem> = pending
                .iter()
                .filter(|i| grocery_category(i) == category)
                .collect();
            if group.is_empty() {
                continue;
            }
            let mut section = vec![locale::grocery_category_header(category, language).to_string()];
            for item in group {
                let mut line = format!(
                    "• {} {}",
                    self.dictionary.emoji_or(&item.name, DEFAULT_GROCERY_EMOJI),
                    self.dictionary.translate_phrase(&item.name, language),
                );
                let amount = [item.quantity.as_deref(), item.unit.as_deref()]
                    .into_iter()
                    .flatten()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                if !amount.is_empty() {
                    line.push_str(&format!(" - {}", amount));
                }
                section.push(line);
            }
            sections.push(section.join("\n"));
        }

        let count = pending.len().to_string();
        let summary = fill(locale::TOTAL_ITEMS.get(language), &[("count", &count)]);

        assemble(
            language,
            locale::GROCERY_HEADER.get(language),
            &sections.join("\n\n"),
            &summary,
            locale::THANKS.get(language),
            pending.len(),
        )
    }
}

/// Unset priority sorts with medium.
fn effective_priority(task: &TaskItem) -> PriorityLevel {
    task.priority.unwrap_or(PriorityLevel::Medium)
}

fn priority_dot(priority: Option<PriorityLevel>) -> &'static str {
    match priority {
        Some(PriorityLevel::Urgent) => "🔴",
        Some(PriorityLevel::High) => "🟠",
        Some(PriorityLevel::Medium) => "🟡",
        Some(PriorityLevel::Low) => "🟢",
        None => "⚪",
    }
}

/// Known category of an item; unknown or missing categories fall into "other".
fn grocery_category(item: &GroceryItem) -> &'static str {
    let category = item
        .category
        .as_deref()
        .map(|c| c.trim().to_lowercase())
        .unwrap_or_default();
    locale::GROCERY_CATEGORIES
        .iter()
        .copied()
        .find(|known| *known == category)
        .unwrap_or("other")
}

fn sentinel(table: Localized, language: LanguageCode) -> ComposedMessage {
    ComposedMessage {
        text: table.get(language).to_string(),
        item_count: 0,
    }
}

fn assemble(
    language: LanguageCode,
    header: &str,
    body: &str,
    summary: &str,
    closing: &str,
    item_count: usize,
) -> ComposedMessage {
    let text = [locale::GREETING.get(language), header, body, summary, closing].join("\n\n");
    ComposedMessage { text, item_count }
}

//! Messaging use case: preview task, meal and grocery messages for a contact
//! and send the (possibly edited) text.
//!
//! Orchestrates HouseholdRepo, MessageComposer, MessageTransport and DeliveryLogPort.

use crate::domain::locale::{self, is_sentinel};
use crate::domain::{
    ComposedMessage, Contact, DayOfWeek, DeliveryRecord, DeliveryResult, DomainError,
    MealContext, MessageComposer, MessageKind, PhraseDictionary, TaskContext, TaskSelection,
};
use crate::ports::{DeliveryLogPort, HouseholdRepo, MessageTransport};
use std::sync::Arc;
use tracing::{info, warn};

pub struct MessagingService {
    repo: Arc<dyn HouseholdRepo>,
    log: Arc<dyn DeliveryLogPort>,
    transport: Arc<dyn MessageTransport>,
    dictionary: Arc<PhraseDictionary>,
}

impl MessagingService {
    pub fn new(
        repo: Arc<dyn HouseholdRepo>,
        log: Arc<dyn DeliveryLogPort>,
        transport: Arc<dyn MessageTransport>,
        dictionary: Arc<PhraseDictionary>,
    ) -> Self {
        Self {
            repo,
            log,
            transport,
            dictionary,
        }
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// Load a contact or fail with NotFound.
    pub async fn contact(&self, id: &str) -> Result<Contact, DomainError> {
        self.repo
            .get_contact(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("contact {}", id)))
    }

    /// Task message in the contact's language. `DueOn` selections get the
    /// day-specific header.
    pub async fn preview_tasks(
        &self,
        contact: &Contact,
        selection: TaskSelection,
    ) -> Result<ComposedMessage, DomainError> {
        let tasks = self.repo.list_tasks().await?;
        let language = contact.preferred_language;
        let context = TaskContext {
            day_label: match selection {
                TaskSelection::DueOn(day) => Some(locale::day_name(day, language).to_string()),
                _ => None,
            },
            selection,
        };
        let composer = MessageComposer::new(&self.dictionary);
        Ok(composer.compose_task_message(&tasks, language, &context))
    }

    /// Meal message for one weekday in the contact's language.
    pub async fn preview_meals(
        &self,
        contact: &Contact,
        day: DayOfWeek,
        servings: Option<u32>,
    ) -> Result<ComposedMessage, DomainError> {
        let plan = self.repo.get_daily_plan(day).await?;
        let language = contact.preferred_language;
        let context = MealContext {
            day_label: locale::day_name(day, language).to_string(),
            servings,
        };
        let composer = MessageComposer::new(&self.dictionary);
        Ok(composer.compose_meal_message(&plan, language, &context))
    }

    pub async fn preview_groceries(&self, contact: &Contact) -> Result<ComposedMessage, DomainError> {
        let items = self.repo.list_grocery_items().await?;
        let composer = MessageComposer::new(&self.dictionary);
        Ok(composer.compose_grocery_message(&items, contact.preferred_language))
    }

    /// Deliver `text` to the contact and record it.
    ///
    /// Blank text and "nothing to report" sentinels are refused with
    /// `NothingToSend`, also after manual edits.
    pub async fn send(
        &self,
        contact: &Contact,
        kind: MessageKind,
        text: &str,
    ) -> Result<DeliveryResult, DomainError> {
        let text = text.trim();
        if text.is_empty() || is_sentinel(text) {
            return Err(DomainError::NothingToSend(format!(
                "{} (to {})",
                kind.as_str(),
                contact.name
            )));
        }

        let result = self.transport.send(&contact.phone, text).await?;
        info!(
            contact_id = %contact.id,
            kind = kind.as_str(),
            transport = self.transport.name(),
            "message delivered"
        );

        let record = DeliveryRecord {
            contact_id: contact.id.clone(),
            kind,
            text: text.to_string(),
            sent_at: chrono::Utc::now().timestamp(),
            reference: result.reference().map(str::to_string),
        };
        // the message is already out; a log failure must not report it as unsent
        if let Err(e) = self.log.record_delivery(&record).await {
            warn!(contact_id = %contact.id, error = %e, "Failed to record delivery");
        }
        Ok(result)
    }

    pub async fn recent_deliveries(&self, limit: usize) -> Result<Vec<DeliveryRecord>, DomainError> {
        self.log.recent_deliveries(limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::MemoryRepo;
    use crate::adapters::whatsapp::RecordingTransport;
    use crate::domain::{
        ContactRole, DailyPlan, GroceryItem, LanguageCode, MealEntry, MealSlot, PriorityLevel,
        TaskItem,
    };

    struct Fixture {
        repo: Arc<MemoryRepo>,
        transport: Arc<RecordingTransport>,
        service: MessagingService,
    }

    fn fixture() -> Fixture {
        let repo = Arc::new(MemoryRepo::new());
        let transport = Arc::new(RecordingTransport::new());
        let service = MessagingService::new(
            repo.clone(),
            repo.clone(),
            transport.clone(),
            Arc::new(PhraseDictionary::builtin()),
        );
        Fixture {
            repo,
            transport,
            service,
        }
    }

    fn maid(language: LanguageCode) -> Contact {
        Contact {
            id: "c1".into(),
            name: "Lakshmi".into(),
            phone: "+91 98765 43210".into(),
            role: ContactRole::Maid,
            preferred_language: language,
        }
    }

    #[tokio::test]
    async fn test_preview_selected_tasks_in_contact_language() {
        let f = fixture();
        f.repo
            .save_tasks(&[
                TaskItem::new("1", "Mop floor").selected(),
                TaskItem::new("2", "clean kitchen")
                    .with_priority(PriorityLevel::Urgent)
                    .selected(),
                TaskItem::new("3", "Wash clothes"),
            ])
            .await
            .unwrap();

        let msg = f
            .service
            .preview_tasks(&maid(LanguageCode::Hindi), TaskSelection::Selected)
            .await
            .unwrap();
        assert_eq!(msg.item_count, 2);
        assert!(msg.text.contains("📋 आज के काम:"));
        assert!(msg.text.contains("1. 🔴 🧽 रसोई साफ़ करें"));
    }

    #[tokio::test]
    async fn test_preview_due_tasks_uses_day_header() {
        let f = fixture();
        f.repo
            .save_tasks(&[TaskItem {
                days_of_week: vec![DayOfWeek::Friday],
                ..TaskItem::new("1", "Clean fridge")
            }])
            .await
            .unwrap();
        let msg = f
            .service
            .preview_tasks(&maid(LanguageCode::English), TaskSelection::DueOn(DayOfWeek::Friday))
            .await
            .unwrap();
        assert!(msg.text.contains("📋 Tasks for Friday:"));
    }

    #[tokio::test]
    async fn test_preview_meals_and_groceries() {
        let f = fixture();
        let mut plan = DailyPlan::default();
        plan.lunch.push(MealEntry::new("m1", "Sambar", MealSlot::Lunch));
        f.repo.save_daily_plan(DayOfWeek::Monday, &plan).await.unwrap();
        f.repo
            .save_grocery_items(&[GroceryItem::new("g1", "Milk")])
            .await
            .unwrap();

        let contact = maid(LanguageCode::English);
        let meals = f
            .service
            .preview_meals(&contact, DayOfWeek::Monday, Some(4))
            .await
            .unwrap();
        assert!(meals.text.contains("🍽️ Meal plan for Monday:"));
        assert!(meals.text.contains("1. 🍲 Sambar (for 4 people)"));

        let empty = f
            .service
            .preview_meals(&contact, DayOfWeek::Tuesday, None)
            .await
            .unwrap();
        assert!(!empty.is_sendable());

        let groceries = f.service.preview_groceries(&contact).await.unwrap();
        assert_eq!(groceries.item_count, 1);
    }

    #[tokio::test]
    async fn test_send_records_delivery() {
        let f = fixture();
        let contact = maid(LanguageCode::English);
        let result = f
            .service
            .send(&contact, MessageKind::Tasks, "  Hello! 👋\n\n1. Mop  ")
            .await
            .unwrap();
        assert_eq!(result.reference(), Some("mock-1"));

        let sent = f.transport.sent().await;
        assert_eq!(sent[0].destination, contact.phone);
        assert_eq!(sent[0].text, "Hello! 👋\n\n1. Mop");

        let log = f.service.recent_deliveries(10).await.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].kind, MessageKind::Tasks);
        assert_eq!(log[0].reference.as_deref(), Some("mock-1"));
    }

    #[tokio::test]
    async fn test_send_refuses_sentinels_and_blank_text() {
        let f = fixture();
        let contact = maid(LanguageCode::Tamil);
        let empty = f
            .service
            .preview_tasks(&contact, TaskSelection::Selected)
            .await
            .unwrap();
        for text in [empty.text.as_str(), "   ", locale::NO_GROCERIES.english] {
            assert!(matches!(
                f.service.send(&contact, MessageKind::Tasks, text).await,
                Err(DomainError::NothingToSend(_))
            ));
        }
        assert!(f.transport.sent().await.is_empty());
        assert!(f.repo.deliveries().await.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_logged() {
        let f = fixture();
        f.transport.set_failing(true);
        let contact = maid(LanguageCode::English);
        assert!(matches!(
            f.service.send(&contact, MessageKind::Meals, "Lunch: rice").await,
            Err(DomainError::Transport(_))
        ));
        assert!(f.repo.deliveries().await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_contact() {
        let f = fixture();
        assert!(matches!(
            f.service.contact("ghost").await,
            Err(DomainError::NotFound(_))
        ));
    }
}

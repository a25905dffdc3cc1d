//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{
    AutoSendSettings, Contact, DailyPlan, DayOfWeek, DeliveryRecord, DeliveryResult, DomainError,
    GroceryItem, TaskItem,
};

/// Household data store. Contacts, chores, meal plans, groceries and
/// per-contact auto-send settings.
#[async_trait::async_trait]
pub trait HouseholdRepo: Send + Sync {
    /// All contacts, in creation order.
    async fn list_contacts(&self) -> Result<Vec<Contact>, DomainError>;

    async fn get_contact(&self, id: &str) -> Result<Option<Contact>, DomainError>;

    /// Insert or replace by id.
    async fn save_contact(&self, contact: &Contact) -> Result<(), DomainError>;

    /// All tasks in list order.
    async fn list_tasks(&self) -> Result<Vec<TaskItem>, DomainError>;

    /// Replace the whole task list. Order is kept.
    async fn save_tasks(&self, tasks: &[TaskItem]) -> Result<(), DomainError>;

    /// Meal plan for a weekday. Empty when nothing was planned.
    async fn get_daily_plan(&self, day: DayOfWeek) -> Result<DailyPlan, DomainError>;

    async fn save_daily_plan(&self, day: DayOfWeek, plan: &DailyPlan) -> Result<(), DomainError>;

    async fn list_grocery_items(&self) -> Result<Vec<GroceryItem>, DomainError>;

    /// Replace the whole grocery list. Order is kept.
    async fn save_grocery_items(&self, items: &[GroceryItem]) -> Result<(), DomainError>;

    /// Auto-send settings for a contact; defaults (disabled) when never saved.
    async fn get_auto_send_settings(
        &self,
        contact_id: &str,
    ) -> Result<AutoSendSettings, DomainError>;

    async fn save_auto_send_settings(
        &self,
        contact_id: &str,
        settings: &AutoSendSettings,
    ) -> Result<(), DomainError>;
}

/// Delivery log. Every dispatched message is recorded here.
#[async_trait::async_trait]
pub trait DeliveryLogPort: Send + Sync {
    async fn record_delivery(&self, record: &DeliveryRecord) -> Result<(), DomainError>;

    /// Most recent first.
    async fn recent_deliveries(&self, limit: usize) -> Result<Vec<DeliveryRecord>, DomainError>;
}

/// Message transport. Delivers text to a phone number.
#[async_trait::async_trait]
pub trait MessageTransport: Send + Sync {
    /// Short name for logs ("link", "cloud-api").
    fn name(&self) -> &'static str;

    /// Deliver `text` to `destination` (phone number, any formatting).
    async fn send(&self, destination: &str, text: &str) -> Result<DeliveryResult, DomainError>;
}

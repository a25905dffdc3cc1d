//! In-memory household store. Implements HouseholdRepo and DeliveryLogPort.
//!
//! Used by tests and for dry runs (`MAID_EASY_DATA_DIR=:memory:`). Nothing
//! survives the process.

use crate::domain::{
    AutoSendSettings, Contact, DailyPlan, DayOfWeek, DeliveryRecord, DomainError, GroceryItem,
    TaskItem,
};
use crate::ports::{DeliveryLogPort, HouseholdRepo};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct HouseholdData {
    contacts: Vec<Contact>,
    tasks: Vec<TaskItem>,
    plans: HashMap<DayOfWeek, DailyPlan>,
    groceries: Vec<GroceryItem>,
    settings: HashMap<String, AutoSendSettings>,
    deliveries: Vec<DeliveryRecord>,
}

#[derive(Debug, Default)]
pub struct MemoryRepo {
    data: RwLock<HouseholdData>,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded delivery, oldest first.
    pub async fn deliveries(&self) -> Vec<DeliveryRecord> {
        self.data.read().await.deliveries.clone()
    }
}

#[async_trait::async_trait]
impl HouseholdRepo for MemoryRepo {
    async fn list_contacts(&self) -> Result<Vec<Contact>, DomainError> {
        Ok(self.data.read().await.contacts.clone())
    }

    async fn get_contact(&self, id: &str) -> Result<Option<Contact>, DomainError> {
        let data = self.data.read().await;
        Ok(data.contacts.iter().find(|c| c.id == id).cloned())
    }

    async fn save_contact(&self, contact: &Contact) -> Result<(), DomainError> {
        let mut data = self.data.write().await;
        match data.contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(existing) => *existing = contact.clone(),
            None => data.contacts.push(contact.clone()),
        }
        Ok(())
    }

    async fn list_tasks(&self) -> Result<Vec<TaskItem>, DomainError> {
        Ok(self.data.read().await.tasks.clone())
    }

    async fn save_tasks(&self, tasks: &[TaskItem]) -> Result<(), DomainError> {
        self.data.write().await.tasks = tasks.to_vec();
        Ok(())
    }

    async fn get_daily_plan(&self, day: DayOfWeek) -> Result<DailyPlan, DomainError> {
        let data = self.data.read().await;
        Ok(data.plans.get(&day).cloned().unwrap_or_default())
    }

    async fn save_daily_plan(&self, day: DayOfWeek, plan: &DailyPlan) -> Result<(), DomainError> {
        self.data.write().await.plans.insert(day, plan.clone());
        Ok(())
    }

    async fn list_grocery_items(&self) -> Result<Vec<GroceryItem>, DomainError> {
        Ok(self.data.read().await.groceries.clone())
    }

    async fn save_grocery_items(&self, items: &[GroceryItem]) -> Result<(), DomainError> {
        self.data.write().await.groceries = items.to_vec();
        Ok(())
    }

    async fn get_auto_send_settings(
        &self,
        contact_id: &str,
    ) -> Result<AutoSendSettings, DomainError> {
        let data = self.data.read().await;
        Ok(data.settings.get(contact_id).cloned().unwrap_or_default())
    }

    async fn save_auto_send_settings(
        &self,
        contact_id: &str,
        settings: &AutoSendSettings,
    ) -> Result<(), DomainError> {
        self.data
            .write()
            .await
            .settings
            .insert(contact_id.to_string(), settings.clone());
        Ok(())
    }
}

#[async_trait::async_trait]
impl DeliveryLogPort for MemoryRepo {
    async fn record_delivery(&self, record: &DeliveryRecord) -> Result<(), DomainError> {
        self.data.write().await.deliveries.push(record.clone());
        Ok(())
    }

    async fn recent_deliveries(&self, limit: usize) -> Result<Vec<DeliveryRecord>, DomainError> {
        let data = self.data.read().await;
        Ok(data.deliveries.iter().rev().take(limit).cloned().collect())
    }
}

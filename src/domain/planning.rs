//! Editable planning state: the weekly meal plan, the task list and the
//! grocery list. These only hold data; the composer turns them into text.

use crate::domain::{
    DailyPlan, DayOfWeek, DomainError, GroceryItem, MealEntry, MealSlot, TaskItem, TaskSelection,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Meal plan for each day of the week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    days: BTreeMap<DayOfWeek, DailyPlan>,
}

impl WeeklyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan for `day`; days never touched are empty.
    pub fn day(&self, day: DayOfWeek) -> DailyPlan {
        self.days.get(&day).cloned().unwrap_or_default()
    }

    pub fn set_day(&mut self, day: DayOfWeek, plan: DailyPlan) {
        self.days.insert(day, plan);
    }

    /// Append to the end of the entry's own slot.
    pub fn add_meal(&mut self, day: DayOfWeek, entry: MealEntry) {
        let slot = entry.category;
        self.days.entry(day).or_default().slot_mut(slot).push(entry);
    }

    pub fn remove_meal(&mut self, day: DayOfWeek, id: &str) -> Option<MealEntry> {
        let plan = self.days.get_mut(&day)?;
        for slot in MealSlot::ORDER {
            let entries = plan.slot_mut(slot);
            if let Some(pos) = entries.iter().position(|e| e.id == id) {
                return Some(entries.remove(pos));
            }
        }
        None
    }

    /// Move an entry to another day and slot, appending it there.
    pub fn move_meal(
        &mut self,
        from: DayOfWeek,
        id: &str,
        to: DayOfWeek,
        slot: MealSlot,
    ) -> Result<(), DomainError> {
        let mut entry = self
            .remove_meal(from, id)
            .ok_or_else(|| DomainError::NotFound(format!("meal {} on {}", id, from.as_str())))?;
        entry.category = slot;
        self.add_meal(to, entry);
        Ok(())
    }

    /// Days with at least one meal, Monday first.
    pub fn planned_days(&self) -> Vec<DayOfWeek> {
        self.days
            .iter()
            .filter(|(_, plan)| !plan.is_empty())
            .map(|(day, _)| *day)
            .collect()
    }
}

/// Ordered task list with selection state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    items: Vec<TaskItem>,
}

impl TaskList {
    pub fn new(items: Vec<TaskItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[TaskItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<TaskItem> {
        self.items
    }

    /// Add or replace by id. New tasks go to the end.
    pub fn upsert(&mut self, task: TaskItem) {
        match self.items.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => self.items.push(task),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<TaskItem> {
        let pos = self.items.iter().position(|t| t.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Flip the selected flag. Returns the new value.
    pub fn toggle_selected(&mut self, id: &str) -> Result<bool, DomainError> {
        let task = self.find_mut(id)?;
        task.selected = !task.selected;
        Ok(task.selected)
    }

    /// Flip the completed flag. Returns the new value.
    pub fn toggle_completed(&mut self, id: &str) -> Result<bool, DomainError> {
        let task = self.find_mut(id)?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    pub fn clear_selection(&mut self) {
        for task in &mut self.items {
            task.selected = false;
        }
    }

    /// Tasks the selection would put into a message, in list order.
    pub fn eligible(&self, selection: TaskSelection) -> Vec<TaskItem> {
        self.items
            .iter()
            .filter(|t| selection.includes(t))
            .cloned()
            .collect()
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut TaskItem, DomainError> {
        self.items
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("task {}", id)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroceryList {
    items: Vec<GroceryItem>,
}

impl GroceryList {
    pub fn new(items: Vec<GroceryItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<GroceryItem> {
        self.items
    }

    pub fn add(&mut self, item: GroceryItem) {
        self.items.push(item);
    }

    pub fn remove(&mut self, id: &str) -> Option<GroceryItem> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn mark_purchased(&mut self, id: &str, purchased: bool) -> Result<(), DomainError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("grocery item {}", id)))?;
        item.purchased = purchased;
        Ok(())
    }

    /// Drop everything already bought. Returns how many were removed.
    pub fn clear_purchased(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|i| !i.purchased);
        before - self.items.len()
    }

    pub fn pending(&self) -> Vec<&GroceryItem> {
        self.items.iter().filter(|i| !i.purchased).collect()
    }
}

//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the phrase dictionary, message composition and schedule rules
//! live here. Dependencies flow inward.

pub mod composer;
pub mod entities;
pub mod errors;
pub mod locale;
pub mod matcher;
pub mod phrasebook;
pub mod planning;
pub mod schedule;

pub use composer::{MealContext, MessageComposer, TaskContext, TaskSelection};
pub use entities::{
    AutoSendSettings, ComposedMessage, Contact, ContactRole, DailyPlan, DayOfWeek,
    DeliveryRecord, DeliveryResult, Frequency, GroceryItem, LanguageCode, MealEntry, MealSlot,
    MessageKind, PriorityLevel, TaskItem,
};
pub use errors::DomainError;
pub use phrasebook::{PhraseDictionary, PhraseEntry};

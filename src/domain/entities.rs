//! Domain entities. Pure data structures for the core business.
//!
//! No database or transport types here; adapters map their rows into these.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output language of generated messages.
///
/// Deserialization is lenient: unknown codes become `English` so a bad
/// preference never blanks a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LanguageCode {
    #[default]
    English,
    Hindi,
    Tamil,
    Telugu,
    Kannada,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 5] = [
        LanguageCode::English,
        LanguageCode::Hindi,
        LanguageCode::Tamil,
        LanguageCode::Telugu,
        LanguageCode::Kannada,
    ];

    /// Parse a language name or ISO 639-1 code, case-insensitive.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "english" | "en" => Some(Self::English),
            "hindi" | "hi" => Some(Self::Hindi),
            "tamil" | "ta" => Some(Self::Tamil),
            "telugu" | "te" => Some(Self::Telugu),
            "kannada" | "kn" => Some(Self::Kannada),
            _ => None,
        }
    }

    /// Like [`LanguageCode::parse`], but unknown codes become English.
    pub fn parse_or_default(code: &str) -> Self {
        Self::parse(code).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
            Self::Tamil => "tamil",
            Self::Telugu => "telugu",
            Self::Kannada => "kannada",
        }
    }
}

impl From<String> for LanguageCode {
    fn from(s: String) -> Self {
        Self::parse_or_default(&s)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority. Declaration order gives low < medium < high < urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
    Urgent,
}

/// Day of week, Monday first (canonical display order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Capitalized English name ("Monday").
    pub fn english_name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "monday" | "mon" => Some(Self::Monday),
            "tuesday" | "tue" => Some(Self::Tuesday),
            "wednesday" | "wed" => Some(Self::Wednesday),
            "thursday" | "thu" => Some(Self::Thursday),
            "friday" | "fri" => Some(Self::Friday),
            "saturday" | "sat" => Some(Self::Saturday),
            "sunday" | "sun" => Some(Self::Sunday),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(w: chrono::Weekday) -> Self {
        match w {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

/// A chore for the maid (or anyone receiving task lists).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub priority: Option<PriorityLevel>,
    /// Free-form category. `daily` tasks are due every day.
    #[serde(default)]
    pub task_category: Option<String>,
    #[serde(default)]
    pub days_of_week: Vec<DayOfWeek>,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub favorite: bool,
}

impl TaskItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            remarks: None,
            priority: None,
            task_category: None,
            days_of_week: Vec::new(),
            selected: false,
            completed: false,
            favorite: false,
        }
    }

    pub fn with_priority(mut self, priority: PriorityLevel) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    /// Fixed output order of slots in meal messages.
    pub const ORDER: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub people_count: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    pub category: MealSlot,
}

impl MealEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: MealSlot) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            people_count: None,
            servings: None,
            category,
        }
    }
}

/// One day's meals, bucketed by slot. Order inside a slot is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    #[serde(default)]
    pub breakfast: Vec<MealEntry>,
    #[serde(default)]
    pub lunch: Vec<MealEntry>,
    #[serde(default)]
    pub dinner: Vec<MealEntry>,
    #[serde(default)]
    pub snack: Vec<MealEntry>,
}

impl DailyPlan {
    pub fn slot(&self, slot: MealSlot) -> &[MealEntry] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snack => &self.snack,
        }
    }

    pub fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<MealEntry> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snack => &mut self.snack,
        }
    }

    pub fn is_empty(&self) -> bool {
        MealSlot::ORDER.iter().all(|s| self.slot(*s).is_empty())
    }

    pub fn len(&self) -> usize {
        MealSlot::ORDER.iter().map(|s| self.slot(*s).len()).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
}

/// Auto-send cadence configured per contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoSendSettings {
    pub auto_send: bool,
    /// 24h "HH:MM".
    pub send_time: String,
    pub frequency: Frequency,
    #[serde(default)]
    pub days_of_week: Vec<DayOfWeek>,
    #[serde(default)]
    pub preferred_language: LanguageCode,
}

impl Default for AutoSendSettings {
    fn default() -> Self {
        Self {
            auto_send: false,
            send_time: "08:00".to_string(),
            frequency: Frequency::Daily,
            days_of_week: DayOfWeek::ALL.to_vec(),
            preferred_language: LanguageCode::English,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactRole {
    #[default]
    Maid,
    Cook,
    Driver,
    Other,
}

/// Person receiving messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    /// Phone number in international format; transports normalize it.
    pub phone: String,
    #[serde(default)]
    pub role: ContactRole,
    #[serde(default)]
    pub preferred_language: LanguageCode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub purchased: bool,
}

impl GroceryItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity: None,
            unit: None,
            category: None,
            purchased: false,
        }
    }
}

/// Output of a composer. `item_count == 0` means the text is a sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedMessage {
    pub text: String,
    pub item_count: usize,
}

impl ComposedMessage {
    /// False for "nothing to report" output; callers must not send it.
    pub fn is_sendable(&self) -> bool {
        self.item_count > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Tasks,
    Meals,
    Groceries,
    Confirmation,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Meals => "meals",
            Self::Groceries => "groceries",
            Self::Confirmation => "confirmation",
        }
    }
}

/// What the transport did with a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeliveryResult {
    /// Pushed through an API; `message_id` when the provider returns one.
    Sent { message_id: Option<String> },
    /// Click-to-chat link for the user to open.
    LinkGenerated { url: String },
}

impl DeliveryResult {
    pub fn reference(&self) -> Option<&str> {
        match self {
            Self::Sent { message_id } => message_id.as_deref(),
            Self::LinkGenerated { url } => Some(url),
        }
    }
}

/// One dispatched message, for the delivery log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub contact_id: String,
    pub kind: MessageKind,
    pub text: String,
    /// Unix seconds.
    pub sent_at: i64,
    pub reference: Option<String>,
}

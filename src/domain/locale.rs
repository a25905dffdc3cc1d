//! Localized message chrome: greetings, headers, summaries, sentinels, day names.
//!
//! One table per concept, keyed by language. Adding a language means adding a
//! column here, not touching the composers. Templates use `{name}` placeholders
//! filled by [`fill`].

use crate::domain::{DayOfWeek, LanguageCode, MealSlot, PriorityLevel};

/// One string per supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub english: &'static str,
    pub hindi: &'static str,
    pub tamil: &'static str,
    pub telugu: &'static str,
    pub kannada: &'static str,
}

impl Localized {
    pub const fn get(&self, language: LanguageCode) -> &'static str {
        match language {
            LanguageCode::English => self.english,
            LanguageCode::Hindi => self.hindi,
            LanguageCode::Tamil => self.tamil,
            LanguageCode::Telugu => self.telugu,
            LanguageCode::Kannada => self.kannada,
        }
    }

    fn all(&self) -> [&'static str; 5] {
        [self.english, self.hindi, self.tamil, self.telugu, self.kannada]
    }
}

/// Replace `{name}` placeholders.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{}}}", name), value)
        })
}

pub const GREETING: Localized = Localized {
    english: "Hello! 👋",
    hindi: "नमस्ते! 🙏",
    tamil: "வணக்கம்! 🙏",
    telugu: "నమస్కారం! 🙏",
    kannada: "ನಮಸ್ಕಾರ! 🙏",
};

pub const TASKS_HEADER_TODAY: Localized = Localized {
    english: "📋 Here are today's tasks:",
    hindi: "📋 आज के काम:",
    tamil: "📋 இன்றைய வேலைகள்:",
    telugu: "📋 ఈరోజు పనులు:",
    kannada: "📋 ಇಂದಿನ ಕೆಲಸಗಳು:",
};

/// `{day}`
pub const TASKS_HEADER_DAY: Localized = Localized {
    english: "📋 Tasks for {day}:",
    hindi: "📋 {day} के काम:",
    tamil: "📋 {day} வேலைகள்:",
    telugu: "📋 {day} పనులు:",
    kannada: "📋 {day} ಕೆಲಸಗಳು:",
};

/// `{count}`
pub const TOTAL_TASKS: Localized = Localized {
    english: "Total tasks: {count}",
    hindi: "कुल काम: {count}",
    tamil: "மொத்த வேலைகள்: {count}",
    telugu: "మొత్తం పనులు: {count}",
    kannada: "ಒಟ್ಟು ಕೆಲಸಗಳು: {count}",
};

pub const THANKS: Localized = Localized {
    english: "Thank you! 🙏",
    hindi: "धन्यवाद! 🙏",
    tamil: "நன்றி! 🙏",
    telugu: "ధన్యవాదాలు! 🙏",
    kannada: "ಧನ್ಯವಾದಗಳು! 🙏",
};

/// `{day}`
pub const MEALS_HEADER: Localized = Localized {
    english: "🍽️ Meal plan for {day}:",
    hindi: "🍽️ {day} का खाना:",
    tamil: "🍽️ {day} உணவுத் திட்டம்:",
    telugu: "🍽️ {day} భోజన ప్రణాళిక:",
    kannada: "🍽️ {day} ಊಟದ ಯೋಜನೆ:",
};

/// `{count}`
pub const TOTAL_DISHES: Localized = Localized {
    english: "Total dishes: {count}",
    hindi: "कुल व्यंजन: {count}",
    tamil: "மொத்த உணவுகள்: {count}",
    telugu: "మొత్తం వంటకాలు: {count}",
    kannada: "ಒಟ್ಟು ಖಾದ್ಯಗಳು: {count}",
};

pub const MEALS_CLOSING: Localized = Localized {
    english: "Please cook accordingly. Thank you! 🙏",
    hindi: "कृपया इसके अनुसार खाना बनाएं। धन्यवाद! 🙏",
    tamil: "தயவுசெய்து இதன்படி சமைக்கவும். நன்றி! 🙏",
    telugu: "దయచేసి దీని ప్రకారం వండండి. ధన్యవాదాలు! 🙏",
    kannada: "ದಯವಿಟ್ಟು ಇದರಂತೆ ಅಡುಗೆ ಮಾಡಿ. ಧನ್ಯವಾದಗಳು! 🙏",
};

/// `{count}`
pub const FOR_PEOPLE: Localized = Localized {
    english: "for {count} people",
    hindi: "{count} लोगों के लिए",
    tamil: "{count} பேருக்கு",
    telugu: "{count} మందికి",
    kannada: "{count} ಜನರಿಗೆ",
};

pub const GROCERY_HEADER: Localized = Localized {
    english: "🛒 Grocery list:",
    hindi: "🛒 सामान की सूची:",
    tamil: "🛒 மளிகைப் பட்டியல்:",
    telugu: "🛒 కిరాణా జాబితా:",
    kannada: "🛒 ದಿನಸಿ ಪಟ್ಟಿ:",
};

/// `{count}`
pub const TOTAL_ITEMS: Localized = Localized {
    english: "Total items: {count}",
    hindi: "कुल सामान: {count}",
    tamil: "மொத்த பொருட்கள்: {count}",
    telugu: "మొత్తం వస్తువులు: {count}",
    kannada: "ಒಟ್ಟು ವಸ್ತುಗಳು: {count}",
};

// ─────────────────────────────────────────────────────────────────────────
// Sentinels: returned instead of a message when there is nothing to report
// ─────────────────────────────────────────────────────────────────────────

pub const NO_TASKS: Localized = Localized {
    english: "No tasks to send.",
    hindi: "भेजने के लिए कोई काम नहीं है।",
    tamil: "அனுப்ப வேலைகள் எதுவும் இல்லை.",
    telugu: "పంపడానికి పనులు ఏవీ లేవు.",
    kannada: "ಕಳುಹಿಸಲು ಯಾವುದೇ ಕೆಲಸಗಳಿಲ್ಲ.",
};

pub const NO_MEALS: Localized = Localized {
    english: "No meals planned.",
    hindi: "कोई खाना तय नहीं है।",
    tamil: "உணவு எதுவும் திட்டமிடப்படவில்லை.",
    telugu: "భోజనం ఏదీ ప్లాన్ చేయలేదు.",
    kannada: "ಯಾವುದೇ ಊಟ ಯೋಜಿಸಲಾಗಿಲ್ಲ.",
};

pub const NO_GROCERIES: Localized = Localized {
    english: "Nothing to buy.",
    hindi: "खरीदने के लिए कुछ नहीं है।",
    tamil: "வாங்க எதுவும் இல்லை.",
    telugu: "కొనడానికి ఏమీ లేదు.",
    kannada: "ಖರೀದಿಸಲು ಏನೂ ಇಲ್ಲ.",
};

const SENTINELS: [Localized; 3] = [NO_TASKS, NO_MEALS, NO_GROCERIES];

/// True when `text` is a "nothing to report" sentinel in any language.
pub fn is_sentinel(text: &str) -> bool {
    let text = text.trim();
    SENTINELS
        .iter()
        .flat_map(|s| s.all())
        .any(|s| s == text)
}

// ─────────────────────────────────────────────────────────────────────────
// Auto-send confirmation sentences
// ─────────────────────────────────────────────────────────────────────────

/// `{time}`
pub const CONFIRM_DAILY: Localized = Localized {
    english: "✅ Auto-send is on. I will send you the list every day at {time}.",
    hindi: "✅ ऑटो-सेंड चालू है। मैं आपको हर दिन {time} बजे सूची भेजूँगा।",
    tamil: "✅ தானியங்கி அனுப்புதல் இயக்கப்பட்டது. நான் தினமும் {time} மணிக்கு பட்டியலை அனுப்புவேன்.",
    telugu: "✅ ఆటో-సెండ్ ఆన్ చేయబడింది. నేను ప్రతిరోజు {time}కి జాబితా పంపుతాను.",
    kannada: "✅ ಸ್ವಯಂ ಕಳುಹಿಸುವಿಕೆ ಆನ್ ಆಗಿದೆ. ನಾನು ಪ್ರತಿದಿನ {time}ಕ್ಕೆ ಪಟ್ಟಿಯನ್ನು ಕಳುಹಿಸುತ್ತೇನೆ.",
};

/// `{days}`, `{time}`
pub const CONFIRM_WEEKLY: Localized = Localized {
    english: "✅ Auto-send is on. I will send you the list every {days} at {time}.",
    hindi: "✅ ऑटो-सेंड चालू है। मैं आपको हर {days} को {time} बजे सूची भेजूँगा।",
    tamil: "✅ தானியங்கி அனுப்புதல் இயக்கப்பட்டது. நான் ஒவ்வொரு {days} அன்றும் {time} மணிக்கு பட்டியலை அனுப்புவேன்.",
    telugu: "✅ ఆటో-సెండ్ ఆన్ చేయబడింది. నేను ప్రతి {days} {time}కి జాబితా పంపుతాను.",
    kannada: "✅ ಸ್ವಯಂ ಕಳುಹಿಸುವಿಕೆ ಆನ್ ಆಗಿದೆ. ನಾನು ಪ್ರತಿ {days} {time}ಕ್ಕೆ ಪಟ್ಟಿಯನ್ನು ಕಳುಹಿಸುತ್ತೇನೆ.",
};

pub const CONFIRM_DISABLED: Localized = Localized {
    english: "Auto-send is off. Scheduled messages will not be sent.",
    hindi: "ऑटो-सेंड बंद है। निर्धारित संदेश नहीं भेजे जाएंगे।",
    tamil: "தானியங்கி அனுப்புதல் நிறுத்தப்பட்டது. திட்டமிட்ட செய்திகள் அனுப்பப்படாது.",
    telugu: "ఆటో-సెండ్ ఆఫ్ చేయబడింది. షెడ్యూల్ చేసిన సందేశాలు పంపబడవు.",
    kannada: "ಸ್ವಯಂ ಕಳುಹಿಸುವಿಕೆ ಆಫ್ ಆಗಿದೆ. ನಿಗದಿತ ಸಂದೇಶಗಳನ್ನು ಕಳುಹಿಸಲಾಗುವುದಿಲ್ಲ.",
};

// ─────────────────────────────────────────────────────────────────────────
// Small keyed tables
// ─────────────────────────────────────────────────────────────────────────

pub fn day_name(day: DayOfWeek, language: LanguageCode) -> &'static str {
    let names = match day {
        DayOfWeek::Monday => Localized {
            english: "Monday",
            hindi: "सोमवार",
            tamil: "திங்கள்",
            telugu: "సోమవారం",
            kannada: "ಸೋಮವಾರ",
        },
        DayOfWeek::Tuesday => Localized {
            english: "Tuesday",
            hindi: "मंगलवार",
            tamil: "செவ்வாய்",
            telugu: "మంగళవారం",
            kannada: "ಮಂಗಳವಾರ",
        },
        DayOfWeek::Wednesday => Localized {
            english: "Wednesday",
            hindi: "बुधवार",
            tamil: "புதன்",
            telugu: "బుధవారం",
            kannada: "ಬುಧವಾರ",
        },
        DayOfWeek::Thursday => Localized {
            english: "Thursday",
            hindi: "गुरुवार",
            tamil: "வியாழன்",
            telugu: "గురువారం",
            kannada: "ಗುರುವಾರ",
        },
        DayOfWeek::Friday => Localized {
            english: "Friday",
            hindi: "शुक्रवार",
            tamil: "வெள்ளி",
            telugu: "శుక్రవారం",
            kannada: "ಶುಕ್ರವಾರ",
        },
        DayOfWeek::Saturday => Localized {
            english: "Saturday",
            hindi: "शनिवार",
            tamil: "சனி",
            telugu: "శనివారం",
            kannada: "ಶನಿವಾರ",
        },
        DayOfWeek::Sunday => Localized {
            english: "Sunday",
            hindi: "रविवार",
            tamil: "ஞாயிறு",
            telugu: "ఆదివారం",
            kannada: "ಭಾನುವಾರ",
        },
    };
    names.get(language)
}

pub fn slot_header(slot: MealSlot, language: LanguageCode) -> &'static str {
    let header = match slot {
        MealSlot::Breakfast => Localized {
            english: "🌅 Breakfast:",
            hindi: "🌅 नाश्ता:",
            tamil: "🌅 காலை உணவு:",
            telugu: "🌅 అల్పాహారం:",
            kannada: "🌅 ಉಪಾಹಾರ:",
        },
        MealSlot::Lunch => Localized {
            english: "☀️ Lunch:",
            hindi: "☀️ दोपहर का खाना:",
            tamil: "☀️ மதிய உணவு:",
            telugu: "☀️ మధ్యాహ్న భోజనం:",
            kannada: "☀️ ಮಧ್ಯಾಹ್ನದ ಊಟ:",
        },
        MealSlot::Dinner => Localized {
            english: "🌙 Dinner:",
            hindi: "🌙 रात का खाना:",
            tamil: "🌙 இரவு உணவு:",
            telugu: "🌙 రాత్రి భోజనం:",
            kannada: "🌙 ರಾತ್ರಿ ಊಟ:",
        },
        MealSlot::Snack => Localized {
            english: "🍪 Snacks:",
            hindi: "🍪 स्नैक्स:",
            tamil: "🍪 சிற்றுண்டி:",
            telugu: "🍪 స్నాక్స్:",
            kannada: "🍪 ತಿಂಡಿ:",
        },
    };
    header.get(language)
}

/// Label appended to urgent and high priority tasks; `None` for the rest.
pub fn priority_label(priority: PriorityLevel, language: LanguageCode) -> Option<&'static str> {
    let label = match priority {
        PriorityLevel::Urgent => Localized {
            english: "URGENT",
            hindi: "अति आवश्यक",
            tamil: "அவசரம்",
            telugu: "అత్యవసరం",
            kannada: "ತುರ್ತು",
        },
        PriorityLevel::High => Localized {
            english: "Important",
            hindi: "ज़रूरी",
            tamil: "முக்கியம்",
            telugu: "ముఖ్యం",
            kannada: "ಮುಖ್ಯ",
        },
        PriorityLevel::Medium | PriorityLevel::Low => return None,
    };
    Some(label.get(language))
}

/// Grocery categories in display order.
pub const GROCERY_CATEGORIES: [&str; 7] = [
    "vegetables",
    "fruits",
    "dairy",
    "staples",
    "spices",
    "cleaning",
    "other",
];

/// Header for a known grocery category (see [`GROCERY_CATEGORIES`]).
pub fn grocery_category_header(category: &str, language: LanguageCode) -> &'static str {
    let header = match category {
        "vegetables" => Localized {
            english: "🥬 Vegetables:",
            hindi: "🥬 सब्ज़ियाँ:",
            tamil: "🥬 காய்கறிகள்:",
            telugu: "🥬 కూరగాయలు:",
            kannada: "🥬 ತರಕಾರಿಗಳು:",
        },
        "fruits" => Localized {
            english: "🍎 Fruits:",
            hindi: "🍎 फल:",
            tamil: "🍎 பழங்கள்:",
            telugu: "🍎 పండ్లు:",
            kannada: "🍎 ಹಣ್ಣುಗಳು:",
        },
        "dairy" => Localized {
            english: "🥛 Dairy:",
            hindi: "🥛 डेयरी:",
            tamil: "🥛 பால் பொருட்கள்:",
            telugu: "🥛 పాల ఉత్పత్తులు:",
            kannada: "🥛 ಹಾಲಿನ ಉತ್ಪನ್ನಗಳು:",
        },
        "staples" => Localized {
            english: "🌾 Staples:",
            hindi: "🌾 राशन:",
            tamil: "🌾 மளிகை:",
            telugu: "🌾 సరుకులు:",
            kannada: "🌾 ದಿನಸಿ:",
        },
        "spices" => Localized {
            english: "🌶️ Spices:",
            hindi: "🌶️ मसाले:",
            tamil: "🌶️ மசாலா:",
            telugu: "🌶️ మసాలాలు:",
            kannada: "🌶️ ಮಸಾಲೆಗಳು:",
        },
        "cleaning" => Localized {
            english: "🧴 Cleaning supplies:",
            hindi: "🧴 सफ़ाई का सामान:",
            tamil: "🧴 சுத்தம் செய்யும் பொருட்கள்:",
            telugu: "🧴 శుభ్రపరిచే సామాగ్రి:",
            kannada: "🧴 ಸ್ವಚ್ಛತಾ ಸಾಮಗ್ರಿಗಳು:",
        },
        _ => Localized {
            english: "📦 Other:",
            hindi: "📦 अन्य:",
            tamil: "📦 மற்றவை:",
            telugu: "📦 ఇతరాలు:",
            kannada: "📦 ಇತರೆ:",
        },
    };
    header.get(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_all_placeholders() {
        assert_eq!(
            fill(CONFIRM_WEEKLY.english, &[("days", "Monday"), ("time", "07:30")]),
            "✅ Auto-send is on. I will send you the list every Monday at 07:30."
        );
        assert_eq!(fill("{count} / {count}", &[("count", "3")]), "3 / 3");
    }

    #[test]
    fn test_sentinels_recognized_in_every_language() {
        for lang in LanguageCode::ALL {
            assert!(is_sentinel(NO_TASKS.get(lang)));
            assert!(is_sentinel(NO_MEALS.get(lang)));
            assert!(is_sentinel(&format!("  {}\n", NO_GROCERIES.get(lang))));
        }
        assert!(!is_sentinel("Hello! 👋"));
    }

    #[test]
    fn test_tables_have_no_blank_cells() {
        let tables = [
            GREETING,
            TASKS_HEADER_TODAY,
            TASKS_HEADER_DAY,
            TOTAL_TASKS,
            THANKS,
            MEALS_HEADER,
            TOTAL_DISHES,
            MEALS_CLOSING,
            FOR_PEOPLE,
            GROCERY_HEADER,
            TOTAL_ITEMS,
            NO_TASKS,
            NO_MEALS,
            NO_GROCERIES,
            CONFIRM_DAILY,
            CONFIRM_WEEKLY,
            CONFIRM_DISABLED,
        ];
        for table in tables {
            for cell in table.all() {
                assert!(!cell.trim().is_empty());
            }
        }
        for lang in LanguageCode::ALL {
            for day in DayOfWeek::ALL {
                assert!(!day_name(day, lang).is_empty());
            }
            for slot in MealSlot::ORDER {
                assert!(!slot_header(slot, lang).is_empty());
            }
            for cat in GROCERY_CATEGORIES {
                assert!(!grocery_category_header(cat, lang).is_empty());
            }
        }
    }

    #[test]
    fn test_priority_label_only_for_high_and_urgent() {
        assert_eq!(
            priority_label(PriorityLevel::Urgent, LanguageCode::English),
            Some("URGENT")
        );
        assert!(priority_label(PriorityLevel::High, LanguageCode::Tamil).is_some());
        assert_eq!(priority_label(PriorityLevel::Medium, LanguageCode::Hindi), None);
        assert_eq!(priority_label(PriorityLevel::Low, LanguageCode::English), None);
    }
}

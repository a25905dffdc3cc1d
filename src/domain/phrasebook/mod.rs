//! Phrase dictionary: canonical household phrases with per-language text and an emoji tag.
//!
//! Built once at startup and shared by reference. Tests build small
//! dictionaries with [`PhraseDictionary::from_entries`].

mod data;

use crate::domain::{DomainError, LanguageCode};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A canonical phrase and its translations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub canonical_key: String,
    pub emoji: String,
    #[serde(deserialize_with = "known_languages")]
    pub translations: BTreeMap<LanguageCode, String>,
}

/// Translation maps take supported language codes only; unknown or repeated
/// codes are errors.
fn known_languages<'de, D>(deserializer: D) -> Result<BTreeMap<LanguageCode, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
    let mut translations = BTreeMap::new();
    for (code, text) in raw {
        let language = LanguageCode::parse(&code).ok_or_else(|| {
            serde::de::Error::custom(format!("unsupported language '{}'", code))
        })?;
        if translations.insert(language, text).is_some() {
            return Err(serde::de::Error::custom(format!(
                "language '{}' given twice",
                language
            )));
        }
    }
    Ok(translations)
}

impl PhraseEntry {
    pub fn new(key: &str, emoji: &str, english: &str) -> Self {
        let mut translations = BTreeMap::new();
        translations.insert(LanguageCode::English, english.to_string());
        Self {
            canonical_key: normalize(key),
            emoji: emoji.to_string(),
            translations,
        }
    }

    pub fn with(mut self, language: LanguageCode, text: &str) -> Self {
        self.translations.insert(language, text.to_string());
        self
    }

    /// Text for `language`, falling back to the English text when missing or blank.
    pub fn translation(&self, language: LanguageCode) -> &str {
        match self.translations.get(&language) {
            Some(text) if !text.trim().is_empty() => text.as_str(),
            _ => self.english(),
        }
    }

    pub fn english(&self) -> &str {
        self.translations
            .get(&LanguageCode::English)
            .map(String::as_str)
            .unwrap_or(self.canonical_key.as_str())
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.canonical_key.is_empty() {
            return Err(DomainError::Dictionary("entry with blank key".into()));
        }
        match self.translations.get(&LanguageCode::English) {
            Some(text) if !text.trim().is_empty() => Ok(()),
            _ => Err(DomainError::Dictionary(format!(
                "'{}' has no English text",
                self.canonical_key
            ))),
        }
    }
}

/// Immutable lookup table of phrases. Iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct PhraseDictionary {
    entries: Vec<PhraseEntry>,
    index: HashMap<String, usize>,
}

impl PhraseDictionary {
    /// The phrases shipped with the application.
    pub fn builtin() -> Self {
        let mut dict = Self::default();
        for raw in data::BUILTIN {
            let mut translations = BTreeMap::new();
            for (lang, text) in LanguageCode::ALL.iter().zip(raw.text) {
                translations.insert(*lang, text.to_string());
            }
            dict.insert(PhraseEntry {
                canonical_key: normalize(raw.key),
                emoji: raw.emoji.to_string(),
                translations,
            });
        }
        dict
    }

    /// Build a dictionary from explicit entries. Later duplicates replace earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = PhraseEntry>) -> Result<Self, DomainError> {
        let mut dict = Self::default();
        for entry in entries {
            let entry = PhraseEntry {
                canonical_key: normalize(&entry.canonical_key),
                ..entry
            };
            entry.validate()?;
            dict.insert(entry);
        }
        Ok(dict)
    }

    /// Merge phrases from a JSON array of [`PhraseEntry`]. Returns how many were merged.
    ///
    /// All-or-nothing: one bad entry leaves the dictionary untouched.
    pub fn extend_from_json(&mut self, json: &str) -> Result<usize, DomainError> {
        let entries: Vec<PhraseEntry> = serde_json::from_str(json)
            .map_err(|e| DomainError::Dictionary(format!("invalid phrasebook JSON: {}", e)))?;
        let entries = entries
            .into_iter()
            .map(|entry| {
                let entry = PhraseEntry {
                    canonical_key: normalize(&entry.canonical_key),
                    ..entry
                };
                entry.validate().map(|()| entry)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let count = entries.len();
        for entry in entries {
            self.insert(entry);
        }
        Ok(count)
    }

    fn insert(&mut self, entry: PhraseEntry) {
        match self.index.get(&entry.canonical_key) {
            Some(&i) => self.entries[i] = entry,
            None => {
                self.index
                    .insert(entry.canonical_key.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Exact lookup. `key` is normalized first.
    pub fn lookup(&self, key: &str) -> Option<&PhraseEntry> {
        self.index.get(&normalize(key)).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> impl Iterator<Item = &PhraseEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Canonical form: lowercase, trimmed, single spaces.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_every_language_non_blank() {
        let dict = PhraseDictionary::builtin();
        assert!(dict.len() > 50);
        for entry in dict.entries() {
            assert!(!entry.emoji.is_empty(), "{} has no emoji", entry.canonical_key);
            for lang in LanguageCode::ALL {
                let text = entry.translation(lang);
                assert!(
                    !text.trim().is_empty(),
                    "{} is blank in {}",
                    entry.canonical_key,
                    lang
                );
            }
        }
    }

    #[test]
    fn test_builtin_keys_are_normalized() {
        let dict = PhraseDictionary::builtin();
        for entry in dict.entries() {
            assert_eq!(entry.canonical_key, normalize(&entry.canonical_key));
        }
    }

    #[test]
    fn test_lookup_normalizes() {
        let dict = PhraseDictionary::builtin();
        let entry = dict.lookup("  Clean   KITCHEN ").unwrap();
        assert_eq!(entry.canonical_key, "clean kitchen");
        assert_eq!(entry.translation(LanguageCode::Hindi), "रसोई साफ़ करें");
    }

    #[test]
    fn test_missing_translation_falls_back_to_english() {
        let entry = PhraseEntry::new("mop floor", "🪣", "Mop the floor")
            .with(LanguageCode::Tamil, "  ");
        assert_eq!(entry.translation(LanguageCode::Tamil), "Mop the floor");
        assert_eq!(entry.translation(LanguageCode::Kannada), "Mop the floor");
    }

    #[test]
    fn test_from_entries_rejects_missing_english() {
        let mut entry = PhraseEntry::new("x", "❓", "X");
        entry.translations.clear();
        entry
            .translations
            .insert(LanguageCode::Hindi, "एक्स".to_string());
        assert!(matches!(
            PhraseDictionary::from_entries([entry]),
            Err(DomainError::Dictionary(_))
        ));
    }

    #[test]
    fn test_extend_from_json_replaces_existing() {
        let mut dict = PhraseDictionary::builtin();
        let before = dict.len();
        let json = r#"[
            {"canonical_key": "Clean Kitchen", "emoji": "✨", "translations": {"english": "Kitchen deep clean"}},
            {"canonical_key": "polish silver", "emoji": "🥄", "translations": {"english": "Polish silver", "hi": "चाँदी चमकाएं"}}
        ]"#;
        assert_eq!(dict.extend_from_json(json).unwrap(), 2);
        assert_eq!(dict.len(), before + 1);
        assert_eq!(dict.lookup("clean kitchen").unwrap().emoji, "✨");
        assert_eq!(
            dict.lookup("polish silver")
                .unwrap()
                .translation(LanguageCode::Hindi),
            "चाँदी चमकाएं"
        );
    }

    #[test]
    fn test_extend_from_json_invalid() {
        let mut dict = PhraseDictionary::default();
        assert!(dict.extend_from_json("{not json").is_err());
    }

    #[test]
    fn test_extend_from_json_rejects_unknown_language() {
        let mut dict = PhraseDictionary::builtin();
        let before = dict.len();
        let json = r#"[{"canonical_key": "feed cat", "emoji": "🐈",
            "translations": {"english": "Feed the cat", "fr": "Nourrir le chat"}}]"#;
        assert!(matches!(
            dict.extend_from_json(json),
            Err(DomainError::Dictionary(_))
        ));
        assert_eq!(dict.len(), before);
        assert!(dict.lookup("feed cat").is_none());
    }

    #[test]
    fn test_extend_from_json_rejects_duplicate_language() {
        let mut dict = PhraseDictionary::default();
        let json = r#"[{"canonical_key": "feed cat", "emoji": "🐈",
            "translations": {"english": "Feed the cat", "en": "Cat food"}}]"#;
        assert!(dict.extend_from_json(json).is_err());
        assert!(dict.is_empty());
    }

    #[test]
    fn test_extend_from_json_is_all_or_nothing() {
        let mut dict = PhraseDictionary::default();
        let json = r#"[
            {"canonical_key": "feed cat", "emoji": "🐈", "translations": {"english": "Feed the cat"}},
            {"canonical_key": "walk dog", "emoji": "🐕", "translations": {"hindi": "कुत्ते को घुमाएं"}}
        ]"#;
        assert!(matches!(
            dict.extend_from_json(json),
            Err(DomainError::Dictionary(_))
        ));
        assert!(dict.is_empty());
        assert!(dict.lookup("feed cat").is_none());
    }
}

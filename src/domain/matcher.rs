//! Fuzzy matching of free-text titles against the phrase dictionary.
//!
//! Resolution order, first success wins:
//! 1. exact key,
//! 2. containment (key inside input or input inside key),
//! 3. word overlap of at least 60% of the shorter phrase.
//!
//! Ties are broken explicitly so results never depend on dictionary order:
//! more matched words, then more exactly-equal words, then the longest key,
//! then the alphabetically first key.

use crate::domain::LanguageCode;
use crate::domain::phrasebook::{PhraseDictionary, PhraseEntry, normalize};
use std::cmp::Ordering;

/// Emoji used when a title matches nothing.
pub const DEFAULT_EMOJI: &str = "✅";

/// Minimum share of the shorter phrase's words that must match.
const OVERLAP_THRESHOLD: f64 = 0.6;

/// Strings shorter than this only match by equality, never by containment.
const MIN_PARTIAL_WORD_CHARS: usize = 3;

impl PhraseDictionary {
    /// Canonical key closest to `input`, or `None`.
    pub fn find_best_match(&self, input: &str) -> Option<&str> {
        self.match_entry(input).map(|e| e.canonical_key.as_str())
    }

    /// Entry closest to `input`, or `None`.
    pub fn match_entry(&self, input: &str) -> Option<&PhraseEntry> {
        let needle = normalize(input);
        if needle.is_empty() {
            return None;
        }

        if let Some(entry) = self.lookup(&needle) {
            return Some(entry);
        }

        let contained = self
            .entries()
            .filter(|e| {
                contains_phrase(&needle, &e.canonical_key)
                    || contains_phrase(&e.canonical_key, &needle)
            })
            .max_by(|a, b| prefer_longer_key(a, b));
        if contained.is_some() {
            return contained;
        }

        let input_words: Vec<&str> = needle.split_whitespace().collect();
        self.entries()
            .filter_map(|e| word_overlap(&input_words, &e.canonical_key).map(|score| (score, e)))
            .max_by(|(sa, a), (sb, b)| sa.cmp(sb).then_with(|| prefer_longer_key(a, b)))
            .map(|(_, e)| e)
    }

    /// Emoji of the matched phrase, or [`DEFAULT_EMOJI`].
    pub fn emoji_for_phrase(&self, text: &str) -> &str {
        self.emoji_or(text, DEFAULT_EMOJI)
    }

    /// Emoji of the matched phrase, or `fallback`.
    pub fn emoji_or<'a>(&'a self, text: &str, fallback: &'a str) -> &'a str {
        self.match_entry(text)
            .map(|e| e.emoji.as_str())
            .unwrap_or(fallback)
    }

    /// Translate free text.
    ///
    /// Matched phrase in `language`, else the matched phrase in English, else
    /// `text` unchanged. Custom titles the dictionary does not know stay usable.
    pub fn translate_phrase<'a>(&'a self, text: &'a str, language: LanguageCode) -> &'a str {
        match self.match_entry(text) {
            Some(entry) => entry.translation(language),
            None => text,
        }
    }
}

/// (matched words, exactly-equal words), compared lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct OverlapScore {
    matched: usize,
    exact: usize,
}

/// Score `key` against the input words; `None` when below the threshold.
fn word_overlap(input_words: &[&str], key: &str) -> Option<OverlapScore> {
    let key_words: Vec<&str> = key.split_whitespace().collect();
    if input_words.is_empty() || key_words.is_empty() {
        return None;
    }

    let mut score = OverlapScore {
        matched: 0,
        exact: 0,
    };
    for kw in &key_words {
        if input_words.iter().any(|w| w == kw) {
            score.matched += 1;
            score.exact += 1;
        } else if input_words.iter().any(|w| partial_match(w, kw)) {
            score.matched += 1;
        }
    }

    let smaller = input_words.len().min(key_words.len());
    let required = OVERLAP_THRESHOLD * smaller as f64;
    (score.matched > 0 && score.matched as f64 >= required).then_some(score)
}

/// `needle` occurs inside `haystack` and is long enough to mean something.
fn contains_phrase(haystack: &str, needle: &str) -> bool {
    needle.chars().count() >= MIN_PARTIAL_WORD_CHARS && haystack.contains(needle)
}

fn partial_match(a: &str, b: &str) -> bool {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    short.chars().count() >= MIN_PARTIAL_WORD_CHARS && long.contains(short)
}

/// Longer key is preferred; equal lengths prefer the alphabetically first key.
fn prefer_longer_key(a: &PhraseEntry, b: &PhraseEntry) -> Ordering {
    a.canonical_key
        .chars()
        .count()
        .cmp(&b.canonical_key.chars().count())
        .then_with(|| b.canonical_key.cmp(&a.canonical_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_dict() -> PhraseDictionary {
        PhraseDictionary::from_entries([
            PhraseEntry::new("clean kitchen", "🧽", "Clean kitchen")
                .with(LanguageCode::Hindi, "रसोई साफ़ करें"),
            PhraseEntry::new("rice", "🍚", "Rice").with(LanguageCode::Tamil, "சாதம்"),
            PhraseEntry::new("curd rice", "🍚", "Curd rice"),
            PhraseEntry::new("wash dishes", "🍽️", "Wash dishes"),
            PhraseEntry::new("wash clothes", "👕", "Wash clothes"),
        ])
        .unwrap()
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let dict = small_dict();
        assert_eq!(dict.find_best_match("  Clean Kitchen "), Some("clean kitchen"));
    }

    #[test]
    fn test_embedded_phrase_resolves() {
        let dict = PhraseDictionary::builtin();
        assert_eq!(
            dict.find_best_match("please clean the Kitchen now"),
            Some("clean kitchen")
        );
    }

    #[test]
    fn test_containment_prefers_longest_key() {
        let dict = small_dict();
        assert_eq!(dict.find_best_match("make curd rice today"), Some("curd rice"));
        // input inside a key
        assert_eq!(dict.find_best_match("curd ri"), Some("curd rice"));
    }

    #[test]
    fn test_word_overlap_prefers_exact_words() {
        let dict = small_dict();
        // "the" is inside "clothes" but "dishes" is an exact word.
        assert_eq!(
            dict.find_best_match("wash the dishes please"),
            Some("wash dishes")
        );
    }

    #[test]
    fn test_short_words_do_not_partially_match() {
        let dict = small_dict();
        assert_eq!(dict.find_best_match("a"), None);
        assert_eq!(dict.find_best_match("   "), None);
    }

    #[test]
    fn test_unknown_phrase_passthrough() {
        let dict = PhraseDictionary::builtin();
        assert_eq!(dict.find_best_match("Xyzzy Nonexistent Task"), None);
        assert_eq!(
            dict.translate_phrase("Xyzzy Nonexistent Task", LanguageCode::Hindi),
            "Xyzzy Nonexistent Task"
        );
    }

    #[test]
    fn test_translation_fallback_levels() {
        let dict = small_dict();
        assert_eq!(
            dict.translate_phrase("clean kitchen", LanguageCode::Hindi),
            "रसोई साफ़ करें"
        );
        // matched, but no Kannada text: English
        assert_eq!(
            dict.translate_phrase("clean kitchen", LanguageCode::Kannada),
            "Clean kitchen"
        );
        assert_eq!(dict.translate_phrase("Polish silver", LanguageCode::Tamil), "Polish silver");
    }

    #[test]
    fn test_builtin_translations_never_blank() {
        let dict = PhraseDictionary::builtin();
        for entry in dict.entries() {
            for lang in LanguageCode::ALL {
                assert!(!dict.translate_phrase(&entry.canonical_key, lang).is_empty());
            }
        }
    }

    #[test]
    fn test_emoji_fallback() {
        let dict = small_dict();
        assert_eq!(dict.emoji_for_phrase("Wash dishes"), "🍽️");
        assert_eq!(dict.emoji_for_phrase("Walk the dog"), DEFAULT_EMOJI);
        assert_eq!(dict.emoji_or("Walk the dog", "🍽️"), "🍽️");
    }

    #[test]
    fn test_deterministic() {
        let dict = PhraseDictionary::builtin();
        let first = dict.find_best_match("rice and dal for lunch");
        for _ in 0..10 {
            assert_eq!(dict.find_best_match("rice and dal for lunch"), first);
        }
    }
}

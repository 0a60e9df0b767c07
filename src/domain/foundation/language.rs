//! Supported conversation languages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language of a conversation, chosen by the visitor on first contact.
///
/// Polish is the fallback for unset sessions and unrecognized selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Polish.
    #[default]
    Pl,
    /// Ukrainian.
    Ua,
    /// Russian.
    Ru,
}

impl Language {
    /// All supported languages, in menu order.
    pub const ALL: [Language; 3] = [Language::Pl, Language::Ua, Language::Ru];

    /// Short language tag stored in sessions and persisted records.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::Ua => "ua",
            Language::Ru => "ru",
        }
    }

    /// Suffix of the structured-document identifier for this language.
    ///
    /// Ukrainian documents use the ISO `uk` suffix even though the session
    /// tag is `ua`.
    pub fn document_suffix(&self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::Ua => "uk",
            Language::Ru => "ru",
        }
    }

    /// Button label shown on the language-selection keyboard.
    pub fn flag_label(&self) -> &'static str {
        match self {
            Language::Pl => "🇵🇱 Polski",
            Language::Ua => "🇺🇦 Українська",
            Language::Ru => "🇷🇺 Русский",
        }
    }

    /// Parses a language tag (`pl`, `ua`, `ru`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "pl" => Some(Language::Pl),
            "ua" => Some(Language::Ua),
            "ru" => Some(Language::Ru),
            _ => None,
        }
    }

    /// Maps a selection-button label to a language.
    ///
    /// Labels are accepted with or without the flag emoji, since some
    /// clients strip emoji from quick-reply text.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "🇵🇱 Polski" | "Polski" => Some(Language::Pl),
            "🇺🇦 Українська" | "Українська" => Some(Language::Ua),
            "🇷🇺 Русский" | "Русский" => Some(Language::Ru),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_polish() {
        assert_eq!(Language::default(), Language::Pl);
    }

    #[test]
    fn label_with_flag_maps_to_language() {
        assert_eq!(Language::from_label("🇵🇱 Polski"), Some(Language::Pl));
        assert_eq!(Language::from_label("🇺🇦 Українська"), Some(Language::Ua));
        assert_eq!(Language::from_label("🇷🇺 Русский"), Some(Language::Ru));
    }

    #[test]
    fn label_without_flag_maps_to_language() {
        assert_eq!(Language::from_label("Polski"), Some(Language::Pl));
        assert_eq!(Language::from_label("Українська"), Some(Language::Ua));
        assert_eq!(Language::from_label("Русский"), Some(Language::Ru));
    }

    #[test]
    fn unknown_label_is_not_matched() {
        assert_eq!(Language::from_label("English"), None);
        assert_eq!(Language::from_label(""), None);
    }

    #[test]
    fn tags_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_tag(language.tag()), Some(language));
        }
        assert_eq!(Language::from_tag("en"), None);
    }

    #[test]
    fn ukrainian_document_suffix_differs_from_tag() {
        assert_eq!(Language::Ua.tag(), "ua");
        assert_eq!(Language::Ua.document_suffix(), "uk");
    }

    #[test]
    fn serializes_to_snake_case_tag() {
        assert_eq!(serde_json::to_string(&Language::Pl).unwrap(), "\"pl\"");
        assert_eq!(serde_json::to_string(&Language::Ua).unwrap(), "\"ua\"");
    }
}

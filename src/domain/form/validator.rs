//! Per-field input validation.
//!
//! Pure predicates over raw inbound text. Empty or whitespace-only input is
//! rejected for every kind; everything else is kind-specific.

use once_cell::sync::Lazy;
use regex::Regex;

/// Validation kind attached to a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Personal name: Latin (with Polish diacritics) and Cyrillic letters,
    /// space, hyphen, apostrophe, period; 2-50 characters.
    Name,
    /// Phone number: optional `+`, leading non-zero digit, then 7-15
    /// digits/spaces/hyphens/parentheses.
    Phone,
    /// Country of origin: any text, 2-50 characters trimmed.
    Country,
    /// City: any text, 2-50 characters trimmed.
    City,
    /// Yes/no answer in any supported language, case-insensitive.
    Accommodation,
    /// Free-text availability: 2-100 characters trimmed.
    Availability,
    /// Permissive default: any non-blank input is accepted.
    FreeForm,
}

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-ZąćęłńóśźżĄĆĘŁŃÓŚŹŻіїєІЇЄйцукенгшщзхъфывапролджэячсмитьбюЙЦУКЕНГШЩЗХЪФЫВАПРОЛДЖЭЯЧСМИТЬБЮ\s\-'.]{2,50}$",
    )
    .expect("name pattern is valid")
});

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][\d\s\-()]{7,15}$").expect("phone pattern is valid"));

/// Affirmative and negative answers accepted for the accommodation field,
/// across the supported languages plus English.
const ACCOMMODATION_ANSWERS: [&str; 8] = ["tak", "nie", "так", "ні", "да", "нет", "yes", "no"];

/// Validates raw text against a field kind.
///
/// Pure function of its inputs; performs no trimming of the stored value
/// (that is the sanitizer's job).
pub fn validate(kind: FieldKind, raw: &str) -> bool {
    let value = raw.trim();
    if value.is_empty() {
        return false;
    }

    match kind {
        FieldKind::Name => NAME_PATTERN.is_match(value),
        FieldKind::Phone => PHONE_PATTERN.is_match(value),
        FieldKind::Country | FieldKind::City => (2..=50).contains(&value.chars().count()),
        FieldKind::Accommodation => {
            let lowered = value.to_lowercase();
            ACCOMMODATION_ANSWERS.contains(&lowered.as_str())
        }
        FieldKind::Availability => (2..=100).contains(&value.chars().count()),
        FieldKind::FreeForm => true,
    }
}

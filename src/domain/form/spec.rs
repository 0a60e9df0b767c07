//! Form specifications: which fields are collected, in which order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::localization::Lexicon;

use super::validator::FieldKind;

/// The two form types the flow can collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    /// Application for a specific job offer.
    Application,
    /// General contact request.
    Contact,
}

impl FormKind {
    /// The fields of this form, in collection order.
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            FormKind::Application => &[
                FormField::Name,
                FormField::Country,
                FormField::Phone,
                FormField::TelegramPhone,
                FormField::Accommodation,
                FormField::City,
            ],
            FormKind::Contact => &[
                FormField::Name,
                FormField::Country,
                FormField::Phone,
                FormField::TelegramPhone,
                FormField::Accommodation,
                FormField::Availability,
            ],
        }
    }

    /// First field to prompt for when the form starts.
    pub fn first_field(&self) -> FormField {
        self.fields()[0]
    }

    /// The field collected after `current`, or None when `current` is last.
    pub fn next_field(&self, current: FormField) -> Option<FormField> {
        let fields = self.fields();
        fields
            .iter()
            .position(|f| *f == current)
            .and_then(|i| fields.get(i + 1))
            .copied()
    }

    /// Returns true if `field` belongs to this form.
    pub fn contains(&self, field: FormField) -> bool {
        self.fields().contains(&field)
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Application => write!(f, "application"),
            FormKind::Contact => write!(f, "contact"),
        }
    }
}

/// A single collectable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Country,
    Phone,
    TelegramPhone,
    Accommodation,
    City,
    Availability,
}

impl FormField {
    /// Stable field name, used as the buffer key and in logs.
    pub fn field_name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Country => "country",
            FormField::Phone => "phone",
            FormField::TelegramPhone => "telegram_phone",
            FormField::Accommodation => "accommodation",
            FormField::City => "city",
            FormField::Availability => "availability",
        }
    }

    /// Validation kind applied to raw input for this field.
    pub fn kind(&self) -> FieldKind {
        match self {
            FormField::Name => FieldKind::Name,
            FormField::Country => FieldKind::Country,
            FormField::Phone | FormField::TelegramPhone => FieldKind::Phone,
            FormField::Accommodation => FieldKind::Accommodation,
            FormField::City => FieldKind::City,
            FormField::Availability => FieldKind::Availability,
        }
    }

    /// The localized prompt asking for this field.
    pub fn prompt<'l>(&self, lex: &'l Lexicon) -> &'l str {
        match self {
            FormField::Name => lex.enter_name,
            FormField::Country => lex.enter_country,
            FormField::Phone => lex.enter_phone,
            FormField::TelegramPhone => lex.enter_telegram_phone,
            FormField::Accommodation => lex.enter_accommodation,
            FormField::City => lex.enter_city,
            FormField::Availability => lex.enter_availability,
        }
    }

    /// The localized message shown when input for this field is rejected.
    pub fn rejection<'l>(&self, lex: &'l Lexicon) -> &'l str {
        match self {
            FormField::Name => lex.invalid_name,
            FormField::Phone | FormField::TelegramPhone => lex.invalid_phone,
            _ => lex.invalid_input,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

//! Typed accumulator for an in-progress form.
//!
//! The buffer is a tagged union per form type rather than a loose string
//! map: every write names a `FormField` and is checked against the active
//! form's spec, so a value can never land in a form it does not belong to.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::spec::{FormField, FormKind};

/// Error raised when a value is written to a field outside the active form.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    #[error("field '{field}' does not belong to the {kind} form")]
    ForeignField { kind: FormKind, field: FormField },
}

/// Validated, sanitized values collected so far for one form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FormBuffer {
    Application(ApplicationFields),
    Contact(ContactFields),
}

/// Fields of the job-application form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationFields {
    pub name: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub telegram_phone: Option<String>,
    pub accommodation: Option<String>,
    pub city: Option<String>,
}

/// Fields of the general contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub telegram_phone: Option<String>,
    pub accommodation: Option<String>,
    pub availability: Option<String>,
}

impl FormBuffer {
    /// Creates an empty buffer for the given form type.
    pub fn new(kind: FormKind) -> Self {
        match kind {
            FormKind::Application => FormBuffer::Application(ApplicationFields::default()),
            FormKind::Contact => FormBuffer::Contact(ContactFields::default()),
        }
    }

    /// The form type this buffer collects.
    pub fn kind(&self) -> FormKind {
        match self {
            FormBuffer::Application(_) => FormKind::Application,
            FormBuffer::Contact(_) => FormKind::Contact,
        }
    }

    /// Stores a sanitized value under a field of the active form.
    pub fn set(&mut self, field: FormField, value: String) -> Result<(), FormError> {
        let slot = match self {
            FormBuffer::Application(fields) => match field {
                FormField::Name => &mut fields.name,
                FormField::Country => &mut fields.country,
                FormField::Phone => &mut fields.phone,
                FormField::TelegramPhone => &mut fields.telegram_phone,
                FormField::Accommodation => &mut fields.accommodation,
                FormField::City => &mut fields.city,
                FormField::Availability => {
                    return Err(FormError::ForeignField { kind: FormKind::Application, field })
                }
            },
            FormBuffer::Contact(fields) => match field {
                FormField::Name => &mut fields.name,
                FormField::Country => &mut fields.country,
                FormField::Phone => &mut fields.phone,
                FormField::TelegramPhone => &mut fields.telegram_phone,
                FormField::Accommodation => &mut fields.accommodation,
                FormField::Availability => &mut fields.availability,
                FormField::City => {
                    return Err(FormError::ForeignField { kind: FormKind::Contact, field })
                }
            },
        };
        *slot = Some(value);
        Ok(())
    }

    /// Reads a collected value, if the field belongs to this form and was set.
    pub fn get(&self, field: FormField) -> Option<&str> {
        let slot = match self {
            FormBuffer::Application(fields) => match field {
                FormField::Name => &fields.name,
                FormField::Country => &fields.country,
                FormField::Phone => &fields.phone,
                FormField::TelegramPhone => &fields.telegram_phone,
                FormField::Accommodation => &fields.accommodation,
                FormField::City => &fields.city,
                FormField::Availability => return None,
            },
            FormBuffer::Contact(fields) => match field {
                FormField::Name => &fields.name,
                FormField::Country => &fields.country,
                FormField::Phone => &fields.phone,
                FormField::TelegramPhone => &fields.telegram_phone,
                FormField::Accommodation => &fields.accommodation,
                FormField::Availability => &fields.availability,
                FormField::City => return None,
            },
        };
        slot.as_deref()
    }

    /// Returns true when every field of the form has a value.
    pub fn is_complete(&self) -> bool {
        self.kind().fields().iter().all(|f| self.get(*f).is_some())
    }
}

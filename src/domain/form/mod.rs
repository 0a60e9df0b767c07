//! Structured data-collection forms.
//!
//! A form is an ordered list of fields, each with a validation kind. Two
//! form types exist: the job application and the general contact request.
//! Raw input is validated, then sanitized, then stored in a typed buffer.

mod buffer;
mod sanitizer;
mod spec;
mod validator;

pub use buffer::{FormBuffer, FormError};
pub use sanitizer::sanitize;
pub use spec::{FormField, FormKind};
pub use validator::{validate, FieldKind};

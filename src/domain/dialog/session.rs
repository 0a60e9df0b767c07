//! Per-user conversational state.

use serde::{Deserialize, Serialize};

use crate::domain::form::{FormBuffer, FormField, FormKind};
use crate::domain::foundation::{Language, UserId};

use super::stage::DialogStage;

/// One user's mutable session record.
///
/// Created lazily on the first inbound event for a user identifier; mutated
/// in place on every event; reset to the post-language defaults on restart
/// or cancel. Sessions are volatile: the record lives until the process
/// terminates, never longer.
///
/// Invariants upheld by the engine: `language` is set before any stage other
/// than `LanguageSelection` is reached; `form` holds only validated,
/// sanitized values; `sub_step` always names a field of the active form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Stable transport-assigned identifier, the session key.
    pub user_id: UserId,
    /// Chosen conversation language, unset until first selection.
    pub language: Option<Language>,
    /// Current dialog stage.
    pub stage: DialogStage,
    /// Field currently being collected, only while a form stage is active.
    pub sub_step: Option<FormField>,
    /// Accumulated form values, only while a form stage is active.
    pub form: Option<FormBuffer>,
    /// Job chosen for application, only in the job-application flow.
    pub selected_job: Option<String>,
}

impl Session {
    /// Creates a fresh session at language selection.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            language: None,
            stage: DialogStage::default(),
            sub_step: None,
            form: None,
            selected_job: None,
        }
    }

    /// The session language, falling back to the default when unset.
    pub fn language_or_default(&self) -> Language {
        self.language.unwrap_or_default()
    }

    /// Starts collecting a form: clears any previous buffer and points
    /// `sub_step` at the form's first field.
    pub fn begin_form(&mut self, kind: FormKind) {
        self.form = Some(FormBuffer::new(kind));
        self.sub_step = Some(kind.first_field());
    }

    /// Drops all form-related state (buffer, sub-step, selected job).
    pub fn clear_form(&mut self) {
        self.form = None;
        self.sub_step = None;
        self.selected_job = None;
    }
}

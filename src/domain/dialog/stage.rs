//! Dialog stage state machine.
//!
//! Seven stages, no terminal state; a session cycles for as long as the
//! process lives. Besides the normal flow edges, the global interrupts make
//! the main menu and the language selection reachable from every stage, so
//! those two targets are valid from anywhere.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The current state of a session's dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogStage {
    /// Waiting for the visitor to pick a language.
    #[default]
    LanguageSelection,

    /// Main menu: browse jobs or contact us.
    MainMenu,

    /// Job list shown, waiting for a title or "back".
    JobSelection,

    /// One job's description shown, waiting for "apply" or "back".
    JobDescription,

    /// Collecting the job-application form, field by field.
    JobApplication,

    /// Contact sub-menu: fill form, contact info, or back.
    ContactOption,

    /// Collecting the contact form, field by field.
    ContactForm,
}

impl DialogStage {
    /// Returns true while a form is being collected.
    pub fn is_form(&self) -> bool {
        matches!(self, DialogStage::JobApplication | DialogStage::ContactForm)
    }
}

impl StateMachine for DialogStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DialogStage::*;

        // Interrupt edges: restart/menu/cancel land on the main menu (or
        // language selection when no language is set), change-language
        // re-enters language selection from anywhere.
        if matches!(target, MainMenu | LanguageSelection) {
            return true;
        }

        matches!(
            (self, target),
            (MainMenu, JobSelection)
                | (MainMenu, ContactOption)
                | (JobSelection, JobDescription)
                | (JobDescription, JobSelection)
                | (JobDescription, JobApplication)
                | (ContactOption, ContactForm)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DialogStage::*;
        let mut targets = vec![LanguageSelection, MainMenu];
        match self {
            LanguageSelection => {}
            MainMenu => targets.extend([JobSelection, ContactOption]),
            JobSelection => targets.push(JobDescription),
            JobDescription => targets.extend([JobSelection, JobApplication]),
            JobApplication => {}
            ContactOption => targets.push(ContactForm),
            ContactForm => {}
        }
        targets
    }
}

//! The dialog engine: computes stage transitions and their side effects.
//!
//! Given a session and one inbound event, the engine decides the next
//! stage, mutates the session, performs the content/persistence side
//! effects, and returns the outbound messages in emission order. Validation
//! failures, missing content, and persistence failures are handled as data;
//! `DialogError` covers only invariant breaches, which the caller recovers
//! from by resetting the session.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::content::ContentRepository;
use crate::domain::form::{sanitize, validate, FormError, FormField, FormKind};
use crate::domain::foundation::{Language, StateMachine, Timestamp, ValidationError};
use crate::domain::localization::{language_button_rows, lexicon, Lexicon, LANGUAGE_PROMPT};
use crate::ports::{RecordStore, ReplyOptions};

use super::event::{InboundEvent, Interrupt, OutboundMessage};
use super::session::Session;
use super::stage::DialogStage;

/// Names of the two sheets finalized submissions are appended to.
#[derive(Debug, Clone)]
pub struct SheetNames {
    pub applications: String,
    pub contacts: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            applications: "Applications".to_string(),
            contacts: "Contacts".to_string(),
        }
    }
}

/// Invariant breaches while computing a transition.
///
/// These never reach the visitor; the application layer resets the session
/// to the main menu and shows the generic error instead.
#[derive(Debug, Error)]
pub enum DialogError {
    #[error("stage {stage:?} is active without a form buffer")]
    MissingForm { stage: DialogStage },

    #[error("stage {stage:?} is active without a current field")]
    MissingField { stage: DialogStage },

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Transition(#[from] ValidationError),
}

/// The per-session finite-state dialog controller.
pub struct DialogEngine {
    content: ContentRepository,
    records: Arc<dyn RecordStore>,
    sheets: SheetNames,
}

impl DialogEngine {
    /// Creates an engine over its two side-effect collaborators.
    pub fn new(content: ContentRepository, records: Arc<dyn RecordStore>, sheets: SheetNames) -> Self {
        Self { content, records, sheets }
    }

    /// Processes one inbound event against a session.
    ///
    /// Returns the outbound messages to deliver, in order. The session is
    /// mutated in place.
    pub async fn handle(
        &self,
        session: &mut Session,
        event: &InboundEvent,
    ) -> Result<Vec<OutboundMessage>, DialogError> {
        if event.is_command {
            return Ok(match Interrupt::from_command(&event.text) {
                Some(interrupt) => self.apply_interrupt(session, interrupt),
                None => Vec::new(),
            });
        }

        let text = event.text.trim();
        match session.stage {
            DialogStage::LanguageSelection => self.select_language(session, text),
            DialogStage::MainMenu => self.from_main_menu(session, text),
            DialogStage::JobSelection => self.from_job_selection(session, text).await,
            DialogStage::JobDescription => self.from_job_description(session, text),
            DialogStage::JobApplication | DialogStage::ContactForm => {
                self.collect_field(session, text).await
            }
            DialogStage::ContactOption => self.from_contact_option(session, text),
        }
    }

    /// Resets a faulted session to the main menu with the generic error.
    pub fn recover(&self, session: &mut Session) -> Vec<OutboundMessage> {
        let lex = lexicon(session.language_or_default());
        session.clear_form();
        session.stage = DialogStage::MainMenu;
        vec![OutboundMessage::plain(lex.error_occurred), main_menu_message(lex)]
    }

    /// Applies a global interrupt, overriding the stage's own rules.
    fn apply_interrupt(&self, session: &mut Session, interrupt: Interrupt) -> Vec<OutboundMessage> {
        // Every interrupt leaves any form stage, so form state goes with it.
        session.clear_form();

        match interrupt {
            Interrupt::Restart | Interrupt::Menu | Interrupt::Cancel => {
                self.menu_or_language(session)
            }
            Interrupt::ContactInfo => {
                if session.language.is_none() {
                    return self.to_language_selection(session);
                }
                let lex = lexicon(session.language_or_default());
                session.stage = DialogStage::MainMenu;
                vec![OutboundMessage::plain(lex.contact_details), main_menu_message(lex)]
            }
            Interrupt::ChangeLanguage => self.to_language_selection(session),
        }
    }

    /// Main menu when a language is set, language selection otherwise.
    fn menu_or_language(&self, session: &mut Session) -> Vec<OutboundMessage> {
        if session.language.is_some() {
            let lex = lexicon(session.language_or_default());
            session.stage = DialogStage::MainMenu;
            vec![main_menu_message(lex)]
        } else {
            self.to_language_selection(session)
        }
    }

    fn to_language_selection(&self, session: &mut Session) -> Vec<OutboundMessage> {
        session.stage = DialogStage::LanguageSelection;
        vec![OutboundMessage::with_buttons(
            LANGUAGE_PROMPT,
            ReplyOptions::ButtonRows(language_button_rows()),
        )]
    }

    fn select_language(
        &self,
        session: &mut Session,
        text: &str,
    ) -> Result<Vec<OutboundMessage>, DialogError> {
        let language = Language::from_label(text).unwrap_or_default();
        session.language = Some(language);
        session.stage = session.stage.transition_to(DialogStage::MainMenu)?;
        tracing::info!(user_id = %session.user_id, %language, "language selected");

        let lex = lexicon(language);
        Ok(vec![OutboundMessage::with_buttons(lex.welcome, main_menu_rows(lex))])
    }

    fn from_main_menu(
        &self,
        session: &mut Session,
        text: &str,
    ) -> Result<Vec<OutboundMessage>, DialogError> {
        let lex = lexicon(session.language_or_default());

        if text == lex.check_jobs {
            session.stage = session.stage.transition_to(DialogStage::JobSelection)?;
            Ok(vec![job_list_message(lex)])
        } else if text == lex.contact_us {
            session.stage = session.stage.transition_to(DialogStage::ContactOption)?;
            Ok(vec![OutboundMessage::with_buttons(
                lex.contact_us,
                ReplyOptions::single_column([lex.fill_form, lex.contact_info, lex.back]),
            )])
        } else {
            Ok(Vec::new())
        }
    }

    async fn from_job_selection(
        &self,
        session: &mut Session,
        text: &str,
    ) -> Result<Vec<OutboundMessage>, DialogError> {
        let language = session.language_or_default();
        let lex = lexicon(language);

        if text == lex.back {
            session.stage = session.stage.transition_to(DialogStage::MainMenu)?;
            return Ok(vec![main_menu_message(lex)]);
        }

        if !lex.jobs.contains(&text) {
            return Ok(Vec::new());
        }

        session.selected_job = Some(text.to_string());
        match self.content.resolve(text, language).await {
            Ok(description) => {
                session.stage = session.stage.transition_to(DialogStage::JobDescription)?;
                Ok(vec![OutboundMessage::with_buttons(
                    description,
                    ReplyOptions::single_column([lex.apply_for_job, lex.back]),
                )])
            }
            Err(error) => {
                tracing::warn!(user_id = %session.user_id, job = text, %error, "description unavailable");
                Ok(vec![OutboundMessage::plain(lex.error_occurred)])
            }
        }
    }

    fn from_job_description(
        &self,
        session: &mut Session,
        text: &str,
    ) -> Result<Vec<OutboundMessage>, DialogError> {
        let lex = lexicon(session.language_or_default());

        if text == lex.back {
            session.stage = session.stage.transition_to(DialogStage::JobSelection)?;
            Ok(vec![job_list_message(lex)])
        } else if text == lex.apply_for_job {
            session.begin_form(FormKind::Application);
            session.stage = session.stage.transition_to(DialogStage::JobApplication)?;
            Ok(vec![field_prompt(lex, FormKind::Application.first_field())])
        } else {
            Ok(Vec::new())
        }
    }

    fn from_contact_option(
        &self,
        session: &mut Session,
        text: &str,
    ) -> Result<Vec<OutboundMessage>, DialogError> {
        let lex = lexicon(session.language_or_default());

        if text == lex.back {
            session.stage = session.stage.transition_to(DialogStage::MainMenu)?;
            Ok(vec![main_menu_message(lex)])
        } else if text == lex.fill_form {
            session.begin_form(FormKind::Contact);
            session.stage = session.stage.transition_to(DialogStage::ContactForm)?;
            Ok(vec![field_prompt(lex, FormKind::Contact.first_field())])
        } else if text == lex.contact_info {
            Ok(vec![OutboundMessage::with_buttons(
                lex.contact_details,
                ReplyOptions::single_row([lex.back]),
            )])
        } else {
            Ok(Vec::new())
        }
    }

    /// One step of either form: validate, sanitize, store, advance.
    async fn collect_field(
        &self,
        session: &mut Session,
        text: &str,
    ) -> Result<Vec<OutboundMessage>, DialogError> {
        let lex = lexicon(session.language_or_default());

        if text == lex.cancel {
            session.clear_form();
            return Ok(self.menu_or_language(session));
        }

        let stage = session.stage;
        let field = session.sub_step.ok_or(DialogError::MissingField { stage })?;

        if !validate(field.kind(), text) {
            tracing::debug!(user_id = %session.user_id, %field, "field input rejected");
            return Ok(vec![OutboundMessage::plain(field.rejection(lex))]);
        }

        let form = session.form.as_mut().ok_or(DialogError::MissingForm { stage })?;
        let kind = form.kind();
        form.set(field, sanitize(text))?;

        match kind.next_field(field) {
            Some(next) => {
                session.sub_step = Some(next);
                Ok(vec![field_prompt(lex, next)])
            }
            None => self.finalize(session, kind).await,
        }
    }

    /// Hands the completed form to the record store and returns to the menu.
    ///
    /// A failed append is reported with the generic error; the collected
    /// data is discarded either way (no retry, no local buffering).
    async fn finalize(
        &self,
        session: &mut Session,
        kind: FormKind,
    ) -> Result<Vec<OutboundMessage>, DialogError> {
        let language = session.language_or_default();
        let lex = lexicon(language);
        let form = session
            .form
            .as_ref()
            .ok_or(DialogError::MissingForm { stage: session.stage })?;

        let mut row = vec![
            Timestamp::now().to_row_string(),
            session.user_id.as_str().to_string(),
        ];
        if kind == FormKind::Application {
            row.push(session.selected_job.clone().unwrap_or_default());
        }
        for field in kind.fields() {
            row.push(form.get(*field).unwrap_or_default().to_string());
        }
        row.push(language.tag().to_string());

        let sheet = match kind {
            FormKind::Application => self.sheets.applications.as_str(),
            FormKind::Contact => self.sheets.contacts.as_str(),
        };

        let mut messages = Vec::new();
        match self.records.append_record(sheet, row).await {
            Ok(()) => {
                tracing::info!(user_id = %session.user_id, %kind, sheet, "submission recorded");
                messages.push(OutboundMessage::remove_keyboard(lex.thank_you));
            }
            Err(error) => {
                tracing::error!(
                    user_id = %session.user_id, %kind, sheet, %error,
                    "failed to record submission"
                );
                messages.push(OutboundMessage::remove_keyboard(lex.error_occurred));
            }
        }

        session.clear_form();
        session.stage = session.stage.transition_to(DialogStage::MainMenu)?;
        messages.push(main_menu_message(lex));
        Ok(messages)
    }
}

fn main_menu_rows(lex: &Lexicon) -> ReplyOptions {
    ReplyOptions::single_column([lex.check_jobs, lex.contact_us])
}

fn main_menu_message(lex: &Lexicon) -> OutboundMessage {
    OutboundMessage::with_buttons(lex.main_menu, main_menu_rows(lex))
}

fn job_list_message(lex: &Lexicon) -> OutboundMessage {
    let mut rows: Vec<Vec<String>> = lex.jobs.iter().map(|job| vec![job.to_string()]).collect();
    rows.push(vec![lex.back.to_string()]);
    OutboundMessage::with_buttons(lex.job_offers, ReplyOptions::ButtonRows(rows))
}

fn field_prompt(lex: &Lexicon, field: FormField) -> OutboundMessage {
    let options = match field {
        FormField::Accommodation => ReplyOptions::single_row([lex.yes, lex.no]),
        _ => ReplyOptions::single_row([lex.cancel]),
    };
    OutboundMessage::with_buttons(field.prompt(lex), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::content::InMemoryDocumentSource;
    use crate::adapters::persistence::RecordingRecordStore;
    use crate::domain::foundation::UserId;

    const PL_DOCUMENT: &str = "\
# Pracownik produkcji

Opis stanowiska.

## Co dla nas jest ważne

- Dokładność

# Kasjer do supermarketu

Inny opis.
";

    struct Fixture {
        engine: DialogEngine,
        records: Arc<RecordingRecordStore>,
    }

    fn fixture() -> Fixture {
        let source =
            InMemoryDocumentSource::new().with_document(Language::Pl, PL_DOCUMENT.to_string());
        let records = Arc::new(RecordingRecordStore::new());
        let engine = DialogEngine::new(
            ContentRepository::new(Arc::new(source)),
            Arc::clone(&records) as Arc<dyn RecordStore>,
            SheetNames::default(),
        );
        Fixture { engine, records }
    }

    fn session() -> Session {
        Session::new(UserId::new("42"))
    }

    /// Drives a fresh session to the main menu in Polish.
    async fn polish_session(fixture: &Fixture) -> Session {
        let mut session = session();
        fixture
            .engine
            .handle(&mut session, &InboundEvent::message("42", "🇵🇱 Polski"))
            .await
            .unwrap();
        session
    }

    /// Drives a session into the contact form.
    async fn contact_form_session(fixture: &Fixture) -> Session {
        let mut session = polish_session(fixture).await;
        let lex = lexicon(Language::Pl);
        for text in [lex.contact_us, lex.fill_form] {
            fixture
                .engine
                .handle(&mut session, &InboundEvent::message("42", text))
                .await
                .unwrap();
        }
        assert_eq!(session.stage, DialogStage::ContactForm);
        session
    }

    mod language_selection {
        use super::*;

        #[tokio::test]
        async fn flag_label_selects_polish_and_shows_welcome() {
            let fixture = fixture();
            let mut session = session();

            let messages = fixture
                .engine
                .handle(&mut session, &InboundEvent::message("42", "🇵🇱 Polski"))
                .await
                .unwrap();

            assert_eq!(session.language, Some(Language::Pl));
            assert_eq!(session.stage, DialogStage::MainMenu);
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].text, lexicon(Language::Pl).welcome);
        }

        #[tokio::test]
        async fn unrecognized_label_falls_back_to_default_language() {
            let fixture = fixture();
            let mut session = session();

            fixture
                .engine
                .handle(&mut session, &InboundEvent::message("42", "English please"))
                .await
                .unwrap();

            assert_eq!(session.language, Some(Language::Pl));
            assert_eq!(session.stage, DialogStage::MainMenu);
        }

        #[tokio::test]
        async fn ukrainian_label_selects_ukrainian() {
            let fixture = fixture();
            let mut session = session();

            let messages = fixture
                .engine
                .handle(&mut session, &InboundEvent::message("42", "Українська"))
                .await
                .unwrap();

            assert_eq!(session.language, Some(Language::Ua));
            assert_eq!(messages[0].text, lexicon(Language::Ua).welcome);
        }
    }

    mod main_menu {
        use super::*;

        #[tokio::test]
        async fn browse_jobs_lists_the_catalog_with_a_back_row() {
            let fixture = fixture();
            let mut session = polish_session(&fixture).await;
            let lex = lexicon(Language::Pl);

            let messages = fixture
                .engine
                .handle(&mut session, &InboundEvent::message("42", lex.check_jobs))
                .await
                .unwrap();

            assert_eq!(session.stage, DialogStage::JobSelection);
            assert_eq!(messages[0].text, lex.job_offers);
            match &messages[0].options {
                ReplyOptions::ButtonRows(rows) => {
                    assert_eq!(rows.len(), lex.jobs.len() + 1);
                    assert_eq!(rows.last().unwrap()[0], lex.back);
                }
                other => panic!("expected button rows, got {:?}", other),
            }
        }

        #[tokio::test]
        async fn contact_us_opens_the_contact_submenu() {
            let fixture = fixture();
            let mut session = polish_session(&fixture).await;
            let lex = lexicon(Language::Pl);

            fixture
                .engine
                .handle(&mut session, &InboundEvent::message("42", lex.contact_us))
                .await
                .unwrap();

            assert_eq!(session.stage, DialogStage::ContactOption);
        }

        #[tokio::test]
        async fn unrecognized_text_stays_silent() {
            let fixture = fixture();
            let mut session = polish_session(&fixture).await;

            let messages = fixture
                .engine
                .handle(&mut session, &InboundEvent::message("42", "hmm?"))
                .await
                .unwrap();

            assert_eq!(session.stage, DialogStage::MainMenu);
            assert!(messages.is_empty());
        }

        #[tokio::test]
        async fn labels_from_another_language_are_unrecognized() {
            let fixture = fixture();
            let mut session = polish_session(&fixture).await;
            // Russian wording while the session language is Polish.
            let messages = fixture
                .engine
                .handle(
                    &mut session,
                    &InboundEvent::message("42", lexicon(Language::Ru).check_jobs),
                )
                .await
                .unwrap();

            assert_eq!(session.stage, DialogStage::MainMenu);
            assert!(messages.is_empty());
        }
    }

    mod job_selection {
        use super::*;

        async fn browsing_session(fixture: &Fixture) -> Session {
            let mut session = polish_session(fixture).await;
            fixture
                .engine
                .handle(
                    &mut session,
                    &InboundEvent::message("42", lexicon(Language::Pl).check_jobs),
                )
                .await
                .unwrap();
            session
        }

        #[tokio::test]
        async fn known_job_shows_its_formatted_description() {
            let fixture = fixture();
            let mut session = browsing_session(&fixture).await;

            let messages = fixture
                .engine
                .handle(&mut session, &InboundEvent::message("42", "Pracownik produkcji"))
                .await
                .unwrap();

            assert_eq!(session.stage, DialogStage::JobDescription);
            assert_eq!(session.selected_job.as_deref(), Some("Pracownik produkcji"));
            assert!(messages[0].text.starts_with("🏭 *Pracownik produkcji*"));
        }

        #[tokio::test]
        async fn job_without_a_section_reports_an_error_and_stays() {
            let fixture = fixture();
            let mut session = browsing_session(&fixture).await;

            // In the catalog but absent from the test document.
            let messages = fixture
                .engine
                .handle(
                    &mut session,
                    &InboundEvent::message("42", "Pracownik w supermarkecie"),
                )
                .await
                .unwrap();

            assert_eq!(session.stage, DialogStage::JobSelection);
            assert_eq!(messages[0].text, lexicon(Language::Pl).error_occurred);
        }

        #[tokio::test]
        async fn reselecting_the_same_job_refetches_the_description() {
            let fixture = fixture();
            let mut session = browsing_session(&fixture).await;
            let event = InboundEvent::message("42", "Pracownik produkcji");

            let first = fixture.engine.handle(&mut session, &event).await.unwrap();
            session.stage = DialogStage::JobSelection;
            let second = fixture.engine.handle(&mut session, &event).await.unwrap();

            assert_eq!(first, second);
        }

        #[tokio::test]
        async fn back_returns_to_the_main_menu() {
            let fixture = fixture();
            let mut session = browsing_session(&fixture).await;

            fixture
                .engine
                .handle(&mut session, &InboundEvent::message("42", lexicon(Language::Pl).back))
                .await
                .unwrap();

            assert_eq!(session.stage, DialogStage::MainMenu);
        }
    }

    mod application_form {
        use super::*;

        async fn application_session(fixture: &Fixture) -> Session {
            let mut session = polish_session(fixture).await;
            let lex = lexicon(Language::Pl);
            for text in [lex.check_jobs, "Pracownik produkcji", lex.apply_for_job] {
                fixture
                    .engine
                    .handle(&mut session, &InboundEvent::message("42", text))
                    .await
                    .unwrap();
            }
            assert_eq!(session.stage, DialogStage::JobApplication);
            assert_eq!(session.sub_step, Some(FormField::Name));
            session
        }

        #[tokio::test]
        async fn invalid_phone_is_rejected_without_advancing() {
            let fixture = fixture();
            let mut session = application_session(&fixture).await;
            let lex = lexicon(Language::Pl);

            for text in ["Jan Kowalski", "Polska"] {
                fixture
                    .engine
                    .handle(&mut session, &InboundEvent::message("42", text))
                    .await
                    .unwrap();
            }
            assert_eq!(session.sub_step, Some(FormField::Phone));

            let messages = fixture
                .engine
                .handle(&mut session, &InboundEvent::message("42", "12"))
                .await
                .unwrap();

            assert_eq!(session.stage, DialogStage::JobApplication);
            assert_eq!(session.sub_step, Some(FormField::Phone));
            assert_eq!(messages[0].text, lex.invalid_phone);

            fixture
                .engine
                .handle(&mut session, &InboundEvent::message("42", "+48502202902"))
                .await
                .unwrap();
            assert_eq!(session.sub_step, Some(FormField::TelegramPhone));
            assert_eq!(
                session.form.as_ref().unwrap().get(FormField::Phone),
                Some("+48502202902")
            );
        }

        #[tokio::test]
        async fn accommodation_prompt_offers_yes_and_no() {
            let fixture = fixture();
            let mut session = application_session(&fixture).await;
            let lex = lexicon(Language::Pl);

            let mut last = Vec::new();
            for text in ["Jan Kowalski", "Polska", "+48502202902", "+48502202902"] {
                last = fixture
                    .engine
                    .handle(&mut session, &InboundEvent::message("42", text))
                    .await
                    .unwrap();
            }

            assert_eq!(session.sub_step, Some(FormField::Accommodation));
            assert_eq!(
                last[0].options,
                ReplyOptions::single_row([lex.yes, lex.no])
            );
        }

        #[tokio::test]
        async fn completing_the_form_appends_one_ten_field_row() {
            let fixture = fixture();
            let mut session = application_session(&fixture).await;

            for text in ["Jan Kowalski", "Polska", "+48502202902", "+48502202902", "Tak", "Warszawa"]
            {
                fixture
                    .engine
                    .handle(&mut session, &InboundEvent::message("42", text))
                    .await
                    .unwrap();
            }

            let appended = fixture.records.appended().await;
            assert_eq!(appended.len(), 1);
            assert_eq!(appended[0].sheet, "Applications");
            assert_eq!(appended[0].fields.len(), 10);
            assert_eq!(appended[0].fields[1], "42");
            assert_eq!(appended[0].fields[2], "Pracownik produkcji");
            assert_eq!(appended[0].fields[3], "Jan Kowalski");
            assert_eq!(appended[0].fields[9], "pl");

            assert_eq!(session.stage, DialogStage::MainMenu);
            assert_eq!(session.form, None);
            assert_eq!(session.selected_job, None);
        }
    }

    mod contact_form {
        use super::*;

        #[tokio::test]
        async fn completing_the_form_appends_one_nine_field_row() {
            let fixture = fixture();
            let mut session = contact_form_session(&fixture).await;

            for text in ["Jan Kowalski", "Polska", "+48502202902", "+48502202902", "Nie", "od zaraz"]
            {
                fixture
                    .engine
                    .handle(&mut session, &InboundEvent::message("42", text))
                    .await
                    .unwrap();
            }

            let appended = fixture.records.appended().await;
            assert_eq!(appended.len(), 1);
            assert_eq!(appended[0].sheet, "Contacts");
            assert_eq!(appended[0].fields.len(), 9);
            assert_eq!(appended[0].fields[7], "od zaraz");
            assert_eq!(appended[0].fields[8], "pl");
            assert_eq!(session.stage, DialogStage::MainMenu);
        }

        #[tokio::test]
        async fn failed_append_shows_the_generic_error_and_still_advances() {
            let fixture = fixture();
            let mut session = contact_form_session(&fixture).await;
            fixture.records.fail_next(true);

            let mut last = Vec::new();
            for text in ["Jan Kowalski", "Polska", "+48502202902", "+48502202902", "Nie", "od zaraz"]
            {
                last = fixture
                    .engine
                    .handle(&mut session, &InboundEvent::message("42", text))
                    .await
                    .unwrap();
            }

            assert_eq!(last[0].text, lexicon(Language::Pl).error_occurred);
            assert_eq!(last[0].options, ReplyOptions::RemoveKeyboard);
            assert_eq!(session.stage, DialogStage::MainMenu);
            assert_eq!(session.form, None);
        }

        #[tokio::test]
        async fn stored_values_are_sanitized() {
            let fixture = fixture();
            let mut session = contact_form_session(&fixture).await;

            fixture
                .engine
                .handle(&mut session, &InboundEvent::message("42", "Jan Kowalski"))
                .await
                .unwrap();
            // Country accepts any text; markup is stripped before storage.
            fixture
                .engine
                .handle(&mut session, &InboundEvent::message("42", "<Polska>"))
                .await
                .unwrap();

            assert_eq!(
                session.form.as_ref().unwrap().get(FormField::Country),
                Some("Polska")
            );
        }
    }

    mod interrupts {
        use super::*;

        #[tokio::test]
        async fn cancel_mid_form_clears_everything_without_persisting() {
            let fixture = fixture();
            let mut session = contact_form_session(&fixture).await;
            fixture
                .engine
                .handle(&mut session, &InboundEvent::message("42", "Jan Kowalski"))
                .await
                .unwrap();

            let messages = fixture
                .engine
                .handle(&mut session, &InboundEvent::command("42", "/cancel"))
                .await
                .unwrap();

            assert_eq!(session.stage, DialogStage::MainMenu);
            assert_eq!(session.form, None);
            assert_eq!(session.sub_step, None);
            assert!(fixture.records.appended().await.is_empty());
            assert_eq!(messages[0].text, lexicon(Language::Pl).main_menu);
        }

        #[tokio::test]
        async fn cancel_before_language_selection_re_asks_for_language() {
            let fixture = fixture();
            let mut session = session();

            let messages = fixture
                .engine
                .handle(&mut session, &InboundEvent::command("42", "/cancel"))
                .await
                .unwrap();

            assert_eq!(session.stage, DialogStage::LanguageSelection);
            assert_eq!(messages[0].text, LANGUAGE_PROMPT);
        }

        #[tokio::test]
        async fn cancel_button_behaves_like_the_cancel_command() {
            let fixture = fixture();
            let mut session = contact_form_session(&fixture).await;

            fixture
                .engine
                .handle(
                    &mut session,
                    &InboundEvent::message("42", lexicon(Language::Pl).cancel),
                )
                .await
                .unwrap();

            assert_eq!(session.stage, DialogStage::MainMenu);
            assert_eq!(session.form, None);
        }

        #[tokio::test]
        async fn contact_command_shows_details_and_returns_to_menu() {
            let fixture = fixture();
            let mut session = contact_form_session(&fixture).await;

            let messages = fixture
                .engine
                .handle(&mut session, &InboundEvent::command("42", "/contact"))
                .await
                .unwrap();

            assert_eq!(session.stage, DialogStage::MainMenu);
            assert_eq!(messages[0].text, lexicon(Language::Pl).contact_details);
            assert_eq!(messages[1].text, lexicon(Language::Pl).main_menu);
        }

        #[tokio::test]
        async fn language_command_keeps_the_language_until_reselected() {
            let fixture = fixture();
            let mut session = polish_session(&fixture).await;

            fixture
                .engine
                .handle(&mut session, &InboundEvent::command("42", "/language"))
                .await
                .unwrap();

            assert_eq!(session.stage, DialogStage::LanguageSelection);
            assert_eq!(session.language, Some(Language::Pl));

            fixture
                .engine
                .handle(&mut session, &InboundEvent::message("42", "🇷🇺 Русский"))
                .await
                .unwrap();
            assert_eq!(session.language, Some(Language::Ru));
        }

        #[tokio::test]
        async fn unknown_command_is_a_no_op() {
            let fixture = fixture();
            let mut session = polish_session(&fixture).await;

            let messages = fixture
                .engine
                .handle(&mut session, &InboundEvent::command("42", "/help"))
                .await
                .unwrap();

            assert!(messages.is_empty());
            assert_eq!(session.stage, DialogStage::MainMenu);
        }

        #[tokio::test]
        async fn restart_without_language_asks_for_language() {
            let fixture = fixture();
            let mut session = session();

            let messages = fixture
                .engine
                .handle(&mut session, &InboundEvent::command("42", "/start"))
                .await
                .unwrap();

            assert_eq!(session.stage, DialogStage::LanguageSelection);
            assert_eq!(messages[0].text, LANGUAGE_PROMPT);
            match &messages[0].options {
                ReplyOptions::ButtonRows(rows) => assert_eq!(rows[0].len(), 3),
                other => panic!("expected button rows, got {:?}", other),
            }
        }
    }

    mod recovery {
        use super::*;

        #[tokio::test]
        async fn recover_resets_to_the_main_menu_with_the_generic_error() {
            let fixture = fixture();
            let mut session = contact_form_session(&fixture).await;

            let messages = fixture.engine.recover(&mut session);

            assert_eq!(session.stage, DialogStage::MainMenu);
            assert_eq!(session.form, None);
            assert_eq!(messages[0].text, lexicon(Language::Pl).error_occurred);
            assert_eq!(messages[1].text, lexicon(Language::Pl).main_menu);
        }

        #[tokio::test]
        async fn form_stage_without_a_buffer_is_an_invariant_breach() {
            let fixture = fixture();
            let mut session = contact_form_session(&fixture).await;
            session.form = None;

            let err = fixture
                .engine
                .handle(&mut session, &InboundEvent::message("42", "Jan Kowalski"))
                .await
                .unwrap_err();

            assert!(matches!(err, DialogError::MissingForm { .. }));
        }
    }
}

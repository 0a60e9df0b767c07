//! Inbound events and outbound messages.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;
use crate::ports::ReplyOptions;

/// One text event delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    /// The user the event belongs to.
    pub user_id: UserId,
    /// Raw message text (for commands, includes the leading slash).
    pub text: String,
    /// True when the transport classified the text as a command.
    pub is_command: bool,
}

impl InboundEvent {
    /// Creates a plain text message event.
    pub fn message(user_id: impl Into<UserId>, text: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), text: text.into(), is_command: false }
    }

    /// Creates a command event.
    pub fn command(user_id: impl Into<UserId>, text: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), text: text.into(), is_command: true }
    }
}

/// One message the engine wants delivered, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub text: String,
    pub options: ReplyOptions,
}

impl OutboundMessage {
    /// Message without a keyboard change.
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), options: ReplyOptions::None }
    }

    /// Message replacing the keyboard with the given rows.
    pub fn with_buttons(text: impl Into<String>, rows: ReplyOptions) -> Self {
        Self { text: text.into(), options: rows }
    }

    /// Message removing any visible keyboard.
    pub fn remove_keyboard(text: impl Into<String>) -> Self {
        Self { text: text.into(), options: ReplyOptions::RemoveKeyboard }
    }
}

/// A command recognized in every stage, overriding the stage's own rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    /// `/start`: back to the main menu, clearing form state; asks for a
    /// language first when none is set.
    Restart,
    /// `/menu`: back to the main menu, same reset as `/start`.
    Menu,
    /// `/contact`: show static contact details, then the main menu.
    ContactInfo,
    /// `/language`: re-enter language selection, keeping the current
    /// language until a new one is picked.
    ChangeLanguage,
    /// `/cancel`: drop any form in progress and return to the main menu.
    Cancel,
}

impl Interrupt {
    /// Parses a command event's text into an interrupt.
    ///
    /// Accepts an optional `@botname` suffix and trailing arguments, the
    /// way chat transports deliver commands. Unknown commands map to None
    /// and are ignored by the engine.
    pub fn from_command(text: &str) -> Option<Self> {
        let first_token = text.trim().split_whitespace().next()?;
        let command = first_token.split('@').next()?;
        match command {
            "/start" => Some(Interrupt::Restart),
            "/menu" => Some(Interrupt::Menu),
            "/contact" => Some(Interrupt::ContactInfo),
            "/language" => Some(Interrupt::ChangeLanguage),
            "/cancel" => Some(Interrupt::Cancel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_commands_parse_to_interrupts() {
        assert_eq!(Interrupt::from_command("/start"), Some(Interrupt::Restart));
        assert_eq!(Interrupt::from_command("/menu"), Some(Interrupt::Menu));
        assert_eq!(Interrupt::from_command("/contact"), Some(Interrupt::ContactInfo));
        assert_eq!(Interrupt::from_command("/language"), Some(Interrupt::ChangeLanguage));
        assert_eq!(Interrupt::from_command("/cancel"), Some(Interrupt::Cancel));
    }

    #[test]
    fn bot_suffix_and_arguments_are_ignored() {
        assert_eq!(Interrupt::from_command("/start@recruit_bot"), Some(Interrupt::Restart));
        assert_eq!(Interrupt::from_command("/menu extra words"), Some(Interrupt::Menu));
    }

    #[test]
    fn unknown_commands_map_to_none() {
        assert_eq!(Interrupt::from_command("/help"), None);
        assert_eq!(Interrupt::from_command(""), None);
        assert_eq!(Interrupt::from_command("start"), None);
    }
}

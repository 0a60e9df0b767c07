//! Transport port - outbound message delivery.
//!
//! The transport owns inbound event delivery and outbound sending; the core
//! only calls `send`. Delivery of consecutive `send` calls is not atomic:
//! the transport may interleave messages to different users.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::UserId;

/// Interactive reply options attached to an outbound message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "rows")]
pub enum ReplyOptions {
    /// No keyboard change; any previously shown options stay visible.
    #[default]
    None,
    /// Replace the keyboard with the given rows of button labels.
    ButtonRows(Vec<Vec<String>>),
    /// Remove any visible keyboard.
    RemoveKeyboard,
}

impl ReplyOptions {
    /// Convenience constructor for a keyboard of single-button rows.
    pub fn single_column(labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        ReplyOptions::ButtonRows(labels.into_iter().map(|l| vec![l.into()]).collect())
    }

    /// Convenience constructor for a keyboard of one row.
    pub fn single_row(labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        ReplyOptions::ButtonRows(vec![labels.into_iter().map(Into::into).collect()])
    }
}

/// Errors surfaced by the transport collaborator.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The message could not be delivered.
    #[error("delivery failed: {0}")]
    Delivery(String),

    /// The transport is unreachable.
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Port for dispatching outbound messages to one user.
///
/// Implementations are expected to be slow and fallible (network-bound);
/// they own their own timeout and retry behavior.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one text message, optionally updating the reply keyboard.
    async fn send(
        &self,
        user_id: &UserId,
        text: &str,
        options: &ReplyOptions,
    ) -> Result<(), TransportError>;
}

//! Recording transport for tests and development.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::UserId;
use crate::ports::{ReplyOptions, Transport, TransportError};

/// One outbound message, as the transport received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub user_id: UserId,
    pub text: String,
    pub options: ReplyOptions,
}

/// Transport that records every send in memory.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<SentMessage>>,
    failing: AtomicBool,
}

impl RecordingTransport {
    /// Creates an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles failure mode for subsequent sends.
    pub fn fail_next(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Returns a snapshot of everything sent so far.
    pub async fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().await.clone()
    }

    /// Returns the messages sent to one user, in order.
    pub async fn sent_to(&self, user_id: &UserId) -> Vec<SentMessage> {
        self.sent
            .lock()
            .await
            .iter()
            .filter(|m| &m.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(
        &self,
        user_id: &UserId,
        text: &str,
        options: &ReplyOptions,
    ) -> Result<(), TransportError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TransportError::Unavailable("transport failing".to_string()));
        }
        self.sent.lock().await.push(SentMessage {
            user_id: user_id.clone(),
            text: text.to_string(),
            options: options.clone(),
        });
        Ok(())
    }
}

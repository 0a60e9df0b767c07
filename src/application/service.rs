//! FlowService - the per-event processing loop.

use std::sync::Arc;

use crate::domain::dialog::{DialogEngine, InboundEvent, SessionStore};
use crate::ports::Transport;

/// Drives the dialog engine for every inbound event.
///
/// Events for one user serialize in arrival order on the user's session
/// entry; events for distinct users proceed concurrently. Any unexpected
/// engine fault is recovered here by resetting the session to the main menu
/// and showing the generic error, so no session's fault can terminate or
/// corrupt another session's processing.
pub struct FlowService {
    sessions: Arc<SessionStore>,
    engine: DialogEngine,
    transport: Arc<dyn Transport>,
}

impl FlowService {
    /// Wires the service from its collaborators.
    pub fn new(
        sessions: Arc<SessionStore>,
        engine: DialogEngine,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self { sessions, engine, transport }
    }

    /// Processes one inbound event to completion.
    ///
    /// Transport failures are logged and swallowed: delivery is best-effort
    /// and owns its own retry policy, if any.
    pub async fn process_event(&self, event: InboundEvent) {
        let entry = self.sessions.entry(&event.user_id).await;
        let mut session = entry.lock().await;

        let messages = match self.engine.handle(&mut session, &event).await {
            Ok(messages) => messages,
            Err(error) => {
                tracing::error!(user_id = %event.user_id, %error, "dialog fault recovered");
                self.engine.recover(&mut session)
            }
        };

        for message in messages {
            if let Err(error) = self
                .transport
                .send(&event.user_id, &message.text, &message.options)
                .await
            {
                tracing::error!(user_id = %event.user_id, %error, "outbound delivery failed");
            }
        }
    }
}

//! Keyed in-memory session store with per-user isolation.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::UserId;

use super::session::Session;

/// Holds one mutable session per user.
///
/// The outer lock is held only long enough to fetch or insert the per-user
/// entry; each session sits behind its own `Mutex`, so one user's event
/// processing serializes in arrival order without blocking other users.
/// Sessions are created lazily and reclaimed only with the process.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<UserId, Arc<Mutex<Session>>>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session entry for a user, creating it on first contact.
    pub async fn entry(&self, user_id: &UserId) -> Arc<Mutex<Session>> {
        if let Some(entry) = self.sessions.read().await.get(user_id) {
            return Arc::clone(entry);
        }

        let mut sessions = self.sessions.write().await;
        Arc::clone(
            sessions
                .entry(user_id.clone())
                .or_insert_with(|| Arc::new(Mutex::new(Session::new(user_id.clone())))),
        )
    }

    /// Number of sessions created so far.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns true when no session exists yet.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

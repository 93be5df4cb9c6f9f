use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::backend::Principal;

/// A session transition observed through the identity backend.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SignedIn {
        principal: Principal,
        at: DateTime<Utc>,
    },
    SignedOut,
    /// A token refresh changed the identity the session presents.
    TokenRefreshed { principal: Principal },
}

/// Callback invoked on every session transition, after the transition
/// commits. Delivery is per-listener FIFO; ordering across listeners is
/// unspecified.
pub type SessionListener = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

/// Handle returned by listener registration, used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

impl ListenerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

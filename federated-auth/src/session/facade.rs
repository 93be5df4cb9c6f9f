use std::sync::Arc;

use serde_json::{Map, Value};

use crate::backend::{IdentityBackend, Principal};

use super::errors::SessionError;
use super::types::{ListenerId, SessionListener};

/// Ambient session queries and lifecycle operations, backed by the
/// identity backend. Queried independently of any sign-in flow.
pub struct SessionFacade {
    backend: Arc<dyn IdentityBackend>,
}

impl SessionFacade {
    pub fn new(backend: Arc<dyn IdentityBackend>) -> Self {
        Self { backend }
    }

    pub fn current_principal(&self) -> Option<Principal> {
        self.backend.current_principal()
    }

    pub fn is_authenticated(&self) -> bool {
        self.backend.current_principal().is_some()
    }

    /// Bearer token for the current session, or `None` when there is no
    /// session or the backend fetch fails. Token absence is a common,
    /// legitimate case callers must handle, so failures never propagate.
    pub async fn id_token(&self, force_refresh: bool) -> Option<String> {
        self.backend.current_principal()?;
        match self.backend.fetch_id_token(force_refresh).await {
            Ok(token) => Some(token),
            Err(err) => {
                tracing::debug!("Id token fetch failed, reporting absence: {err}");
                None
            }
        }
    }

    /// Claims for the current session, with the same null-on-absence
    /// contract as [`SessionFacade::id_token`].
    pub async fn claims(&self) -> Option<Map<String, Value>> {
        self.backend.current_principal()?;
        match self.backend.fetch_claims().await {
            Ok(claims) => Some(claims),
            Err(err) => {
                tracing::debug!("Claims fetch failed, reporting absence: {err}");
                None
            }
        }
    }

    /// Terminate the current session. The backend notifies registered
    /// listeners after the transition commits.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        tracing::debug!("Signing out current session");
        self.backend.sign_out().await?;
        Ok(())
    }

    pub fn add_session_listener(&self, listener: SessionListener) -> ListenerId {
        self.backend.add_session_listener(listener)
    }

    pub fn remove_session_listener(&self, id: &ListenerId) -> bool {
        self.backend.remove_session_listener(id)
    }
}

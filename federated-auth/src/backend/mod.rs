//! Capability interface to the external identity backend.
//!
//! The backend owns session state, token storage, and the actual
//! OAuth/SAML protocol execution; this crate only orchestrates calls into
//! it and normalizes what comes back.

mod errors;
mod types;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::flow::ProviderRequest;
use crate::session::{ListenerId, SessionListener};

pub use errors::BackendError;
pub use types::{BackendResult, NativeCredential, Principal};

/// The external identity/session service the core delegates to.
///
/// One instance per process; implementations must serialize their own
/// internal state. All handshake entry points resolve to a
/// [`BackendResult`] rather than panicking for expected failures.
#[async_trait]
pub trait IdentityBackend: Send + Sync {
    /// Result of a handshake that outlived a process interruption, if the
    /// backend retained one. `Some` means a continuation existed and has
    /// been driven to completion; callers must check this before starting
    /// a fresh handshake.
    async fn pending_result(&self) -> Option<BackendResult>;

    /// Execute the generic OAuth-style external handshake. The provider
    /// reference prefix on the request is the backend's sole behavioral
    /// switch between OIDC and SAML.
    async fn start_handshake(&self, request: &ProviderRequest) -> BackendResult;

    /// Exchange an already-obtained provider token for a session.
    async fn exchange_token(
        &self,
        provider_ref: &str,
        id_token: &str,
        access_token: Option<&str>,
    ) -> BackendResult;

    /// Terminate the current session and notify registered listeners.
    async fn sign_out(&self) -> Result<(), BackendError>;

    /// Local (non-dispatching) query for the current session's principal.
    fn current_principal(&self) -> Option<Principal>;

    async fn fetch_id_token(&self, force_refresh: bool) -> Result<String, BackendError>;

    async fn fetch_claims(&self) -> Result<Map<String, Value>, BackendError>;

    /// Register a listener invoked on every session transition, after the
    /// transition commits. Delivery is per-listener FIFO.
    fn add_session_listener(&self, listener: SessionListener) -> ListenerId;

    /// Unregister a listener; returns false if the id was unknown.
    fn remove_session_listener(&self, id: &ListenerId) -> bool;
}

/// Platform-native credential retrieval (e.g. a system account picker for
/// the native Google flow). Consumed, never implemented, by the core.
#[async_trait]
pub trait NativeCredentialSource: Send + Sync {
    async fn retrieve(&self, client_id: &str) -> Result<NativeCredential, BackendError>;
}

use std::sync::{Arc, Mutex};

use crate::backend::{BackendResult, IdentityBackend, NativeCredentialSource};
use crate::config::AuthConfig;

use super::classify::classify_backend_error;
use super::request::build_provider_request;
use super::types::{FlowState, SignInFailureKind, SignInOutcome};

/// Drives sign-in attempts against the identity backend.
///
/// One logical instance per process. A flow suspends while the external
/// handshake runs (possibly across a process interruption); the
/// pending-result check at the top of [`SignInFlowController::start_sign_in`]
/// reconciles a resumed process with flow state that outlived the
/// interruption. That check happens before any new request is built —
/// starting a second handshake while one is pending corrupts provider-side
/// redirect state.
pub struct SignInFlowController {
    backend: Arc<dyn IdentityBackend>,
    config: Arc<AuthConfig>,
    state: Mutex<FlowState>,
}

impl SignInFlowController {
    pub fn new(backend: Arc<dyn IdentityBackend>, config: Arc<AuthConfig>) -> Self {
        Self {
            backend,
            config,
            state: Mutex::new(FlowState::Idle),
        }
    }

    /// Where the state machine last was. Terminal states (`Completed`,
    /// `Failed`) persist until the next attempt begins.
    pub fn flow_state(&self) -> FlowState {
        *self.state.lock().expect("flow state lock")
    }

    fn set_state(&self, state: FlowState) {
        *self.state.lock().expect("flow state lock") = state;
    }

    /// Start (or resume) an external-redirect sign-in flow.
    pub async fn start_sign_in(&self, provider_ref: &str) -> SignInOutcome {
        // Pending check first: the backend may hold the continuation of a
        // handshake interrupted while this process was backgrounded.
        if let Some(pending) = self.backend.pending_result().await {
            tracing::debug!("Resuming pending sign-in flow");
            self.set_state(FlowState::Resuming);
            return self.finish(provider_ref, pending);
        }

        let effective = match self.resolve_provider_ref(provider_ref) {
            Ok(effective) => effective,
            Err(outcome) => {
                self.set_state(FlowState::Failed);
                return outcome;
            }
        };
        let request = build_provider_request(&effective, &self.config);

        tracing::debug!("Dispatching handshake for {effective}");
        self.set_state(FlowState::AwaitingExternalRedirect);
        let result = self.backend.start_handshake(&request).await;
        self.finish(&effective, result)
    }

    /// Exchange an already-obtained provider token for a session. Bypasses
    /// the redirect branch of the state machine entirely.
    pub async fn sign_in_with_token(
        &self,
        provider_ref: &str,
        id_token: &str,
        access_token: Option<&str>,
    ) -> SignInOutcome {
        tracing::debug!("Exchanging externally obtained token for {provider_ref}");
        let result = self
            .backend
            .exchange_token(provider_ref, id_token, access_token)
            .await;
        self.finish(provider_ref, result)
    }

    /// Retrieve a credential from a platform-native source (e.g. a system
    /// account picker), then exchange its token like
    /// [`SignInFlowController::sign_in_with_token`].
    pub async fn sign_in_with_native_credential(
        &self,
        source: &dyn NativeCredentialSource,
        client_id: &str,
    ) -> SignInOutcome {
        let credential = match source.retrieve(client_id).await {
            Ok(credential) => credential,
            Err(err) => {
                self.set_state(FlowState::Failed);
                return SignInOutcome::failure(
                    classify_backend_error(&err),
                    err.to_string(),
                    None,
                );
            }
        };
        self.sign_in_with_token(
            &credential.provider_ref,
            &credential.id_token,
            credential.access_token.as_deref(),
        )
        .await
    }

    /// Same shape as [`SignInFlowController::start_sign_in`], but requires
    /// an authenticated principal. Fails immediately, without dispatching
    /// to the backend, when there is none.
    pub async fn reauthenticate(&self, provider_ref: &str) -> SignInOutcome {
        match self.require_session("reauthenticate", provider_ref) {
            Ok(()) => self.start_sign_in(provider_ref).await,
            Err(outcome) => outcome,
        }
    }

    /// Link an additional provider to the signed-in principal. Same
    /// precondition as [`SignInFlowController::reauthenticate`].
    pub async fn link_provider(&self, provider_ref: &str) -> SignInOutcome {
        match self.require_session("link", provider_ref) {
            Ok(()) => self.start_sign_in(provider_ref).await,
            Err(outcome) => outcome,
        }
    }

    fn require_session(&self, operation: &str, provider_ref: &str) -> Result<(), SignInOutcome> {
        if self.backend.current_principal().is_some() {
            return Ok(());
        }
        tracing::warn!("Rejecting {operation} for {provider_ref}: no active session");
        Err(SignInOutcome::failure(
            SignInFailureKind::NoActiveSession,
            format!("cannot {operation}: no active session"),
            Some(provider_ref),
        ))
    }

    /// Which provider reference the attempt actually uses. In development
    /// mode the caller's reference is taken verbatim; otherwise it must
    /// name a configured provider. An unconfigured override is rejected
    /// before any request is built — dispatching to a provider the caller
    /// never asked for is not an acceptable fallback.
    fn resolve_provider_ref(&self, requested: &str) -> Result<String, SignInOutcome> {
        if self.config.development_mode || self.config.is_configured(requested) {
            return Ok(requested.to_string());
        }
        tracing::warn!(
            "Provider override {requested} not permitted outside development mode"
        );
        Err(SignInOutcome::failure(
            SignInFailureKind::ProviderNotConfigured,
            format!("provider {requested} is not configured"),
            Some(requested),
        ))
    }

    /// Normalize the backend result into the outcome the caller renders.
    /// A success-shaped result with no principal is a failure, never a
    /// success.
    fn finish(&self, provider_ref: &str, result: BackendResult) -> SignInOutcome {
        match result {
            Ok(Some(principal)) => {
                tracing::debug!("Sign-in completed for {}", principal.id);
                self.set_state(FlowState::Completed);
                SignInOutcome::Success { principal }
            }
            Ok(None) => {
                tracing::warn!("Backend reported success without a principal");
                self.set_state(FlowState::Failed);
                SignInOutcome::failure(
                    SignInFailureKind::NullPrincipal,
                    "backend returned no user for a completed flow",
                    Some(provider_ref),
                )
            }
            Err(err) => {
                tracing::warn!("Sign-in failed for {provider_ref}: {err}");
                self.set_state(FlowState::Failed);
                SignInOutcome::failure(classify_backend_error(&err), err.to_string(), Some(provider_ref))
            }
        }
    }
}

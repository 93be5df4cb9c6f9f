//! federated-auth - Sign-in flow orchestration for federated identity backends
//!
//! This crate brokers sign-in flows between an application and a federated
//! identity backend, supporting OIDC and SAML providers plus a native
//! Google credential path behind one interface. The backend itself is an
//! external capability ([`IdentityBackend`]); this crate resolves which
//! provider to use, constructs provider-specific requests, drives the
//! multi-step handshake (including resumption of a flow that outlived a
//! process interruption), and normalizes heterogeneous provider responses
//! into one principal/session model.

mod backend;
mod config;
mod flow;
mod session;


use std::sync::Arc;

pub use backend::{
    BackendError, BackendResult, IdentityBackend, NativeCredential, NativeCredentialSource,
    Principal,
};

pub use config::{AUTH_CONFIG_FILE_ENV, AuthConfig, ConfigError, ConfigStore};

pub use flow::{
    FlowState, ProviderRequest, SignInFailureKind, SignInOutcome, build_provider_request,
    SignInFlowController,
};

pub use session::{ListenerId, SessionEvent, SessionFacade, SessionListener, SessionError};

/// Explicitly constructed process-wide context: one flow controller and
/// one session facade sharing the backend handle, with the validated
/// configuration they were built from.
pub struct AuthContext {
    config: Arc<AuthConfig>,
    flows: SignInFlowController,
    session: SessionFacade,
}

impl AuthContext {
    pub fn config(&self) -> &Arc<AuthConfig> {
        &self.config
    }

    pub fn flows(&self) -> &SignInFlowController {
        &self.flows
    }

    pub fn session(&self) -> &SessionFacade {
        &self.session
    }
}

/// Initialize the orchestration layer: eagerly load and validate the
/// provider configuration, then wire the controller and facade to the
/// given backend. Configuration errors here are fatal to startup; the UI
/// layer is expected to disable its sign-in controls on failure.
pub async fn init(
    backend: Arc<dyn IdentityBackend>,
    store: &ConfigStore,
) -> Result<AuthContext, ConfigError> {
    let config = store.load().await?;
    Ok(AuthContext {
        config: config.clone(),
        flows: SignInFlowController::new(backend.clone(), config),
        session: SessionFacade::new(backend),
    })
}

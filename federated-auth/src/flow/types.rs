use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::backend::Principal;

/// Provider-specific authentication request, built per sign-in attempt
/// and discarded once the flow resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRequest {
    pub provider_ref: String,
    pub custom_parameters: BTreeMap<String, String>,
    pub scopes: Vec<String>,
}

/// Classification of a failed sign-in attempt, for UI messaging only.
/// Never used to gate control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignInFailureKind {
    /// The backend rejected the provider reference as unknown/disabled.
    ProviderNotConfigured,
    NetworkError,
    UserCancelled,
    /// The backend reported success but returned no user.
    NullPrincipal,
    /// Reauthentication or linking attempted with no signed-in principal.
    NoActiveSession,
    Unknown,
}

/// Result of one sign-in attempt, consumed by the caller to render state.
/// Expected failures are values, not panics or propagated errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SignInOutcome {
    Success {
        principal: Principal,
    },
    Failure {
        kind: SignInFailureKind,
        message: String,
        provider_ref: Option<String>,
    },
}

impl SignInOutcome {
    pub(crate) fn failure(
        kind: SignInFailureKind,
        message: impl Into<String>,
        provider_ref: Option<&str>,
    ) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
            provider_ref: provider_ref.map(str::to_string),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Self::Success { principal } => Some(principal),
            Self::Failure { .. } => None,
        }
    }
}

/// Where the controller last was in its sign-in state machine.
/// `Completed` and `Failed` are terminal per attempt; a new
/// `start_sign_in` begins from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    AwaitingExternalRedirect,
    Resuming,
    Completed,
    Failed,
}

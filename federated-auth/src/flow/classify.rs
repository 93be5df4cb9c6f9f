use crate::backend::BackendError;

use super::types::SignInFailureKind;

/// Backend codes that signal a provider the operator never enabled.
const PROVIDER_REJECTION_CODES: &[&str] = &[
    "operation-not-allowed",
    "invalid-provider-id",
    "provider-not-enabled",
];

const NETWORK_CODES: &[&str] = &["network-request-failed", "timeout"];

const CANCELLED_CODES: &[&str] = &["web-context-cancelled", "user-cancelled"];

/// Map a backend error signal onto an advisory failure kind.
///
/// Backends differ in how much structure they give us: some set a stable
/// error code, others only a message. Codes are matched first, then
/// well-known message fragments; anything unrecognized is `Unknown`.
pub(super) fn classify_backend_error(err: &BackendError) -> SignInFailureKind {
    match err {
        BackendError::Network(_) => SignInFailureKind::NetworkError,
        BackendError::Cancelled(_) => SignInFailureKind::UserCancelled,
        BackendError::Code { code, message } => classify_coded(code, message),
        BackendError::TokenExchange(_) | BackendError::Internal(_) => SignInFailureKind::Unknown,
    }
}

fn classify_coded(code: &str, message: &str) -> SignInFailureKind {
    let code = code.to_ascii_lowercase();
    if PROVIDER_REJECTION_CODES.contains(&code.as_str()) {
        return SignInFailureKind::ProviderNotConfigured;
    }
    if NETWORK_CODES.contains(&code.as_str()) {
        return SignInFailureKind::NetworkError;
    }
    if CANCELLED_CODES.contains(&code.as_str()) {
        return SignInFailureKind::UserCancelled;
    }

    let message = message.to_ascii_lowercase();
    if message.contains("not enabled") || message.contains("disabled") {
        SignInFailureKind::ProviderNotConfigured
    } else if message.contains("cancel") {
        SignInFailureKind::UserCancelled
    } else {
        SignInFailureKind::Unknown
    }
}

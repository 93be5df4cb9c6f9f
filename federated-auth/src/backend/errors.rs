use thiserror::Error;

/// Errors surfaced by the identity backend.
///
/// The flow controller inspects these to classify failures for UI
/// messaging; classification is advisory and never gates control flow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Transport-level failure reaching the backend or the provider.
    #[error("Network error: {0}")]
    Network(String),

    /// The user abandoned or dismissed the external handshake.
    #[error("Cancelled by user: {0}")]
    Cancelled(String),

    /// Provider-coded rejection carrying the backend's own error code.
    #[error("Backend error {code}: {message}")]
    Code { code: String, message: String },

    /// Token exchange rejected by the backend.
    #[error("Token exchange error: {0}")]
    TokenExchange(String),

    /// Anything the backend could not attribute.
    #[error("Internal error: {0}")]
    Internal(String),
}

use thiserror::Error;

use crate::backend::BackendError;

/// Errors from session lifecycle operations.
///
/// Token and claim fetches are not represented here: their absence is a
/// legitimate state the facade reports as `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Sign out failed: {0}")]
    SignOut(String),
}

impl From<BackendError> for SessionError {
    fn from(err: BackendError) -> Self {
        let error = Self::SignOut(err.to_string());
        tracing::error!("{}", error);
        error
    }
}

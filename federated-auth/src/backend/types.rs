use serde::{Deserialize, Serialize};

use super::errors::BackendError;

/// Normalized authenticated-user identity exposed by the core.
///
/// A read-only projection of whatever user record the identity backend
/// holds; valid only while the backing session exists. Token and claim
/// fetches go through `SessionFacade`, never through this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            email: None,
            photo_url: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }
}

/// Outcome of a backend-executed handshake or token exchange.
///
/// `Ok(None)` is the success-shaped-but-empty case: the backend reported
/// completion without a user. The flow controller never surfaces it as
/// success.
pub type BackendResult = Result<Option<Principal>, BackendError>;

/// Credential obtained out of band from a platform-native source
/// (e.g. a system account picker), ready for token exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCredential {
    pub provider_ref: String,
    pub id_token: String,
    pub access_token: Option<String>,
}

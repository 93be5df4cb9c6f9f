use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Validated provider configuration, produced once per store lifetime and
/// shared immutably. Construction goes through `ConfigStore::load`; the
/// invariants below are enforced there.
///
/// Invariant: at least one of `oidc_provider_ref` / `saml_provider_ref`
/// is present, and each present reference carries its family prefix
/// (`oidc.` / `saml.`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub oidc_provider_ref: Option<String>,
    pub saml_provider_ref: Option<String>,
    pub custom_parameters: BTreeMap<String, String>,
    pub scopes: Vec<String>,
    pub development_mode: bool,
}

impl AuthConfig {
    /// The configured reference the controller falls back to when the
    /// caller-supplied one is not honored: OIDC preferred over SAML.
    pub fn default_provider_ref(&self) -> &str {
        self.oidc_provider_ref
            .as_deref()
            .or(self.saml_provider_ref.as_deref())
            .unwrap_or_default()
    }

    /// Whether `provider_ref` names one of the configured providers.
    pub fn is_configured(&self, provider_ref: &str) -> bool {
        self.oidc_provider_ref.as_deref() == Some(provider_ref)
            || self.saml_provider_ref.as_deref() == Some(provider_ref)
    }
}

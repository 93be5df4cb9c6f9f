use crate::config::AuthConfig;

use super::types::ProviderRequest;

/// Build the provider-specific request for one sign-in attempt.
///
/// Pure: copies the configured custom parameters and scopes verbatim.
/// The provider reference is deliberately not re-validated here —
/// operators may configure references outside the `oidc.`/`saml.` family,
/// and the backend rejects unknown ones at dispatch time.
pub fn build_provider_request(provider_ref: &str, config: &AuthConfig) -> ProviderRequest {
    ProviderRequest {
        provider_ref: provider_ref.to_string(),
        custom_parameters: config.custom_parameters.clone(),
        scopes: config.scopes.clone(),
    }
}

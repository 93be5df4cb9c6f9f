use thiserror::Error;

/// Errors from loading and validating the provider configuration.
///
/// All of these are fatal to startup: the UI layer is expected to disable
/// its sign-in controls when construction fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration source is missing or unreadable.
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    /// A value is present but violates its format contract.
    #[error("Invalid configuration format: {0}")]
    InvalidFormat(String),

    /// Neither an OIDC nor a SAML provider reference is configured.
    #[error("No identity provider configured")]
    NoProviderConfigured,
}

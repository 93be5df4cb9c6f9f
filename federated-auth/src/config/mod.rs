//! Provider configuration: parsing, validation, and process-lifetime
//! caching of the `key=value` configuration source.

mod errors;
mod parse;
mod store;
mod types;

pub use errors::ConfigError;
pub use store::{AUTH_CONFIG_FILE_ENV, ConfigStore};
pub use types::AuthConfig;

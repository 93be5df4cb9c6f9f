use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use super::errors::ConfigError;
use super::parse::parse_auth_config;
use super::types::AuthConfig;

/// Environment variable naming the configuration source file.
pub const AUTH_CONFIG_FILE_ENV: &str = "AUTH_CONFIG_FILE";

/// Loads, validates, and memoizes the provider configuration.
///
/// The parsed [`AuthConfig`] is cached for the lifetime of the store;
/// [`ConfigStore::reload`] is the only supported mutation path (it clears
/// the memo so the next load re-reads the source). Concurrent loads are
/// safe: reads take the lock briefly and never hold it across I/O.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    cached: RwLock<Option<Arc<AuthConfig>>>,
}

impl ConfigStore {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: RwLock::new(None),
        }
    }

    /// Resolve the source path from `AUTH_CONFIG_FILE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var(AUTH_CONFIG_FILE_ENV).map_err(|_| {
            ConfigError::MissingRequired(format!("{AUTH_CONFIG_FILE_ENV} is not set"))
        })?;
        Ok(Self::from_path(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse and validate the source, memoizing the result. Subsequent
    /// calls return the cached config without touching the filesystem.
    pub async fn load(&self) -> Result<Arc<AuthConfig>, ConfigError> {
        if let Some(cached) = self.cached.read().expect("config cache lock").clone() {
            return Ok(cached);
        }

        tracing::debug!("Loading auth configuration from {}", self.path.display());
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ConfigError::MissingRequired(format!(
                "cannot read {}: {e}",
                self.path.display()
            ))
        })?;

        let config = Arc::new(parse_auth_config(&text)?);

        // First write wins under concurrent loads; both parsed the same
        // source so the loser's value is interchangeable.
        let mut guard = self.cached.write().expect("config cache lock");
        let cached = guard.get_or_insert_with(|| config.clone()).clone();
        Ok(cached)
    }

    /// Drop the memoized config so the next [`ConfigStore::load`] re-reads
    /// the source. Intended for test and development cycles.
    pub fn reload(&self) {
        tracing::debug!("Invalidating cached auth configuration");
        self.cached.write().expect("config cache lock").take();
    }
}

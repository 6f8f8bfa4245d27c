//! Backend selection for the secret store.
//!
//! Release builds talk to AWS Secrets Manager. Builds with the `test-store`
//! feature read secrets from a fixture directory instead, so the CLI can be
//! exercised end to end without credentials or network access.

use tracing::debug;

use super::SecretStore;
use crate::core::domain::SyncConfig;
use crate::error::Result;

/// Open a session against the secret store for `config`.
///
/// # Errors
///
/// Returns `StoreError` if the client cannot be set up.
#[cfg(not(feature = "test-store"))]
pub fn connect(config: &SyncConfig) -> Result<Box<dyn SecretStore>> {
    debug!(region = %config.region(), "using AWS Secrets Manager backend");
    Ok(Box::new(super::AwsSecretsManager::connect(config)?))
}

/// Open a session against the fixture store named by `ENVPULL_FIXTURE_DIR`.
///
/// # Errors
///
/// Returns `StoreError` if the fixture directory is not configured.
#[cfg(feature = "test-store")]
pub fn connect(config: &SyncConfig) -> Result<Box<dyn SecretStore>> {
    debug!(region = %config.region(), "using fixture secret store");
    Ok(Box::new(super::FixtureStore::from_env(config)?))
}

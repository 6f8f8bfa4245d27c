//! Secret sync operation.
//!
//! One pull is `NotStarted → Fetched → Written`: resolve the inputs, fetch
//! and validate the payload, then write it. Any failure before the write
//! leaves the output file as it was.

use tracing::info;

use crate::core::config::ProjectConfig;
use crate::core::domain::{Payload, SyncConfig, SyncReport};
use crate::core::resolve::{resolve, PullInput};
use crate::core::store::{SecretRequest, SecretStore};
use crate::error::Result;

/// Fetch the current version of the configured secret.
///
/// # Errors
///
/// Returns `StoreError` if the fetch fails or the response has no string
/// payload.
pub fn fetch<S: SecretStore + ?Sized>(store: &S, config: &SyncConfig) -> Result<Payload> {
    info!(secret = %config.secret_name(), "pulling secret");

    let request = SecretRequest::current(config.secret_name());
    let response = store.get_secret_value(&request)?;

    info!("parsing secret");
    Payload::from_response(config.secret_name(), response)
}

/// Fetch the secret and write it to the configured output path.
///
/// # Errors
///
/// Returns `StoreError` from the fetch or `Error::Write` from the write.
pub fn sync<S: SecretStore + ?Sized>(store: &S, config: &SyncConfig) -> Result<SyncReport> {
    let payload = fetch(store, config)?;

    info!(path = %config.output_path().display(), "writing secret");
    let bytes = payload.write_to(config.output_path())?;

    Ok(SyncReport {
        secret: config.secret_name().to_string(),
        path: config.output_path().to_path_buf(),
        bytes,
        version_id: payload.version_id().map(str::to_string),
    })
}

/// Resolve inputs, open the store and sync.
///
/// `connect` is only called once the inputs are valid, so a missing value
/// never reaches the network.
///
/// # Errors
///
/// Returns `ConfigError` for invalid inputs, otherwise whatever `connect`
/// or [`sync`] returns.
pub fn pull<S, F>(input: PullInput, project: Option<&ProjectConfig>, connect: F) -> Result<SyncReport>
where
    S: SecretStore,
    F: FnOnce(&SyncConfig) -> Result<S>,
{
    let config = resolve(input, project)?;
    let store = connect(&config)?;
    sync(&store, &config)
}

//! Sync configuration and result types.

use std::fmt;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::core::types::{Region, SecretId, VersionId};

/// Validated inputs for one pull.
///
/// Only [`crate::core::resolve`] builds this, after every field has been
/// checked to be non-empty.
#[derive(Clone)]
pub struct SyncConfig {
    pub(crate) credential_id: String,
    pub(crate) credential_key: Zeroizing<String>,
    pub(crate) secret_name: SecretId,
    pub(crate) region: Region,
    pub(crate) output_path: PathBuf,
}

impl SyncConfig {
    /// AWS access key id.
    pub fn credential_id(&self) -> &str {
        &self.credential_id
    }

    /// AWS secret access key.
    pub fn credential_key(&self) -> &str {
        self.credential_key.as_str()
    }

    /// Name or ARN of the secret to pull.
    pub fn secret_name(&self) -> &str {
        &self.secret_name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Where the payload is written.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncConfig")
            .field("credential_id", &self.credential_id)
            .field("credential_key", &"<redacted>")
            .field("secret_name", &self.secret_name)
            .field("region", &self.region)
            .field("output_path", &self.output_path)
            .finish()
    }
}

/// Result of a completed pull.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Secret that was fetched
    pub secret: SecretId,
    /// File the payload was written to
    pub path: PathBuf,
    /// Number of bytes written
    pub bytes: usize,
    /// Version id reported by the store, if any
    pub version_id: Option<VersionId>,
}

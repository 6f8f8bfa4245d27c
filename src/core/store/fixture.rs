//! Fixture-backed secret store for CLI integration tests.
//!
//! Layout of the directory named by `ENVPULL_FIXTURE_DIR`:
//!
//! ```text
//! <dir>/<secret-id>.txt   string payload
//! <dir>/<secret-id>.bin   binary-only secret
//! <dir>/calls.log         one line appended per connect and per fetch
//! ```
//!
//! A secret id such as `prod/db` maps to `<dir>/prod/db.txt`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use super::{SecretRequest, SecretStore, SecretValue};
use crate::core::domain::SyncConfig;
use crate::error::{Result, StoreError};

/// Environment variable naming the fixture directory.
pub const FIXTURE_DIR_ENV: &str = "ENVPULL_FIXTURE_DIR";

/// Reads secrets from files instead of AWS.
#[derive(Debug)]
pub struct FixtureStore {
    dir: PathBuf,
}

impl FixtureStore {
    /// Open the fixture directory from the environment and log the connect.
    pub fn from_env(config: &SyncConfig) -> Result<Self> {
        let dir = std::env::var_os(FIXTURE_DIR_ENV).ok_or_else(|| StoreError::Fetch {
            secret: config.secret_name().to_string(),
            message: format!("{} is not set", FIXTURE_DIR_ENV),
        })?;

        let store = Self {
            dir: PathBuf::from(dir),
        };
        store.record(&format!("connect {} {}", config.region(), config.credential_id()))?;
        Ok(store)
    }

    fn record(&self, line: &str) -> Result<()> {
        let mut log = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.dir.join("calls.log"))?;
        writeln!(log, "{}", line)?;
        Ok(())
    }
}

impl SecretStore for FixtureStore {
    fn get_secret_value(&self, request: &SecretRequest) -> Result<SecretValue> {
        self.record(&format!(
            "get {} {}",
            request.secret_id, request.version_stage
        ))?;

        let text = self.dir.join(format!("{}.txt", request.secret_id));
        if text.exists() {
            return Ok(SecretValue {
                version_id: Some("fixture".to_string()),
                ..SecretValue::text(std::fs::read_to_string(&text)?)
            });
        }

        if self.dir.join(format!("{}.bin", request.secret_id)).exists() {
            return Ok(SecretValue::binary());
        }

        Err(StoreError::NotFound(request.secret_id.clone()).into())
    }
}

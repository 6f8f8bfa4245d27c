//! Project configuration file.
//!
//! Handles reading the optional `.envpull.toml`, which supplies defaults for
//! the non-credential `pull` inputs:
//!
//! ```toml
//! [pull]
//! secret = "prod/db"
//! region = "us-west-2"
//! output = ".env.production"
//! ```
//!
//! Unknown keys are rejected, so access keys cannot end up committed here.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.envpull.toml`
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Defaults for `envpull pull`
    #[serde(default)]
    pub pull: PullDefaults,
}

/// The `[pull]` section.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PullDefaults {
    /// Secret name or ARN
    pub secret: Option<String>,
    /// AWS region
    pub region: Option<String>,
    /// Output file path
    pub output: Option<PathBuf>,
}

impl ProjectConfig {
    /// Path to the configuration file in the current directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load the project file.
    ///
    /// With an explicit path the file must exist. Without one,
    /// `.envpull.toml` in the current directory is used if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if an explicit path is missing,
    /// `ConfigError::ReadFile` or `ConfigError::Parse` if the file is
    /// unreadable or malformed.
    pub fn load(explicit: Option<&Path>) -> Result<Option<Self>> {
        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::default_path();
                if !path.exists() {
                    debug!("no project config");
                    return Ok(None);
                }
                path
            }
        };

        Self::load_from(&path).map(Some)
    }

    /// Parse a specific file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading project config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            secret = config.pull.secret.is_some(),
            region = config.pull.region.is_some(),
            output = config.pull.output.is_some(),
            "project config loaded"
        );

        Ok(config)
    }
}

//! Argument resolution.
//!
//! Turns raw `pull` inputs into a validated [`SyncConfig`]. Each field is
//! taken from the first source that provides a non-blank value: command-line
//! flag or environment variable (merged by clap), then the project file,
//! then the built-in default.

use std::path::PathBuf;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::ProjectConfig;
use crate::core::constants::{self, env, flag};
use crate::core::domain::SyncConfig;
use crate::error::{ConfigError, Result};

/// Raw inputs for one pull, before validation.
#[derive(Default, Clone)]
pub struct PullInput {
    pub access_id: Option<String>,
    pub access_key: Option<Zeroizing<String>>,
    pub secret: Option<String>,
    pub region: Option<String>,
    pub output: Option<PathBuf>,
}

/// Validate inputs and apply defaults.
///
/// # Errors
///
/// Returns `ConfigError::MissingValue` for the first required value that is
/// absent or blank.
pub fn resolve(input: PullInput, project: Option<&ProjectConfig>) -> Result<SyncConfig> {
    let defaults = project.map(|p| &p.pull);

    let credential_id = required(input.access_id, flag::ACCESS_ID, env::ACCESS_ID)?;

    let credential_key = input
        .access_key
        .filter(|k| !k.trim().is_empty())
        .ok_or(ConfigError::MissingValue {
            flag: flag::ACCESS_KEY,
            env: env::ACCESS_KEY,
        })?;

    let secret_name = required(
        non_blank(input.secret).or_else(|| defaults.and_then(|d| d.secret.clone())),
        flag::SECRET,
        env::SECRET,
    )?;

    let region = non_blank(input.region)
        .or_else(|| non_blank(defaults.and_then(|d| d.region.clone())))
        .unwrap_or_else(|| constants::DEFAULT_REGION.to_string());

    let output_path = input
        .output
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| defaults.and_then(|d| d.output.clone()))
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_OUTPUT));

    let config = SyncConfig {
        credential_id,
        credential_key,
        secret_name,
        region,
        output_path,
    };

    debug!(
        secret = %config.secret_name(),
        region = %config.region(),
        output = %config.output_path().display(),
        "resolved pull configuration"
    );

    Ok(config)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(value: Option<String>, flag: &'static str, env: &'static str) -> Result<String> {
    non_blank(value).ok_or_else(|| ConfigError::MissingValue { flag, env }.into())
}

//! Error types.
//!
//! One enum per failure domain, wrapped by the crate-wide [`Error`].

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for every envpull operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The output file could not be written after a successful fetch.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems resolving the pull configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required value was supplied by neither flag, environment nor project file.
    #[error("missing required value: {flag} (or set {env})")]
    MissingValue {
        flag: &'static str,
        env: &'static str,
    },

    /// An explicitly requested project file does not exist.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Failures talking to the secret store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to start async runtime: {0}")]
    Runtime(String),

    #[error("secret not found: {0}")]
    NotFound(String),

    #[error("failed to fetch secret '{secret}': {message}")]
    Fetch { secret: String, message: String },

    /// The store answered but there is no string payload to write.
    #[error("empty payload: secret '{secret}' has no string value{}", binary_note(.binary))]
    EmptyPayload { secret: String, binary: bool },
}

fn binary_note(binary: &bool) -> &'static str {
    if *binary {
        " (binary secrets are not supported)"
    } else {
        ""
    }
}

pub type Result<T> = std::result::Result<T, Error>;

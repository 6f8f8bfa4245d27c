//! Constants used throughout envpull.
//!
//! Centralizes defaults, file names and environment variable names.

/// Region used when none is given.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "./.env";

/// Optional project file in the current directory (.envpull.toml).
pub const CONFIG_FILE: &str = ".envpull.toml";

/// Version stage label of the live secret version.
pub const CURRENT_VERSION_STAGE: &str = "AWSCURRENT";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "ENVPULL_LOG";

/// Environment variables consulted by `pull` when a flag is absent.
pub mod env {
    pub const ACCESS_ID: &str = "AWS_ACCESS_KEY_ID";
    pub const ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
    pub const SECRET: &str = "ENVPULL_SECRET";
    pub const REGION: &str = "AWS_REGION";
    pub const OUTPUT: &str = "ENVPULL_OUTPUT";
}

/// Flag names as printed in error messages.
pub mod flag {
    pub const ACCESS_ID: &str = "--awsAccessId";
    pub const ACCESS_KEY: &str = "--awsAccessKey";
    pub const SECRET: &str = "--secret";
}

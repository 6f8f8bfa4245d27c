//! envpull - Pull a secret from AWS Secrets Manager into a local .env file.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── pull          # Fetch a secret and write it to disk
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # .envpull.toml project defaults
//!     ├── resolve       # Flag/env/file resolution into SyncConfig
//!     ├── domain/       # SyncConfig, SyncReport, Payload
//!     ├── store/        # SecretStore trait
//!     │   └── aws       # AWS Secrets Manager implementation
//!     └── sync          # Fetch-then-write operation
//! ```
//!
//! # Behavior
//!
//! - Fetches the `AWSCURRENT` version of one secret
//! - Writes the string payload verbatim, replacing the output file atomically
//! - Never touches the output file when the fetch fails or the secret is binary

pub mod cli;
pub mod core;
pub mod error;

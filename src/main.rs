//! envpull - Pull a secret from AWS Secrets Manager into a local .env file.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envpull::cli::output;
use envpull::cli::{execute, Cli, LogFormat};
use envpull::core::constants::LOG_ENV;
use envpull::error::{ConfigError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // ENVPULL_LOG wins over --verbose
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envpull=debug")
        } else {
            EnvFilter::new("envpull=warn")
        }
    });

    let registry = tracing_subscriber::registry().with(filter);
    match cli.log_format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingValue { .. }) => Some("run: envpull pull --help"),
            Error::Config(ConfigError::Parse { .. }) => {
                Some(".envpull.toml only accepts secret, region and output under [pull]")
            }
            Error::Store(StoreError::NotFound(_)) => Some("check the secret name and --region"),
            Error::Store(StoreError::EmptyPayload { binary: true, .. }) => {
                Some("store the secret as a string (SecretString) to pull it")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

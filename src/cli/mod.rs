//! Command-line interface.

pub mod completions;
pub mod output;
pub mod pull;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// envpull - Pull a secret from AWS Secrets Manager into a local .env file.
#[derive(Parser)]
#[command(
    name = "envpull",
    about = "Pull a secret from AWS Secrets Manager into a local .env file",
    version
)]
pub struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log line format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output formats.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Fetch a secret and write it to a local file
    Pull(PullArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Flags for `envpull pull`.
#[derive(Args)]
pub struct PullArgs {
    /// AWS access key id
    #[arg(
        long = "awsAccessId",
        visible_alias = "aws-access-id",
        env = "AWS_ACCESS_KEY_ID",
        hide_env_values = true
    )]
    pub aws_access_id: Option<String>,

    /// AWS secret access key
    #[arg(
        long = "awsAccessKey",
        visible_alias = "aws-access-key",
        env = "AWS_SECRET_ACCESS_KEY",
        hide_env_values = true
    )]
    pub aws_access_key: Option<String>,

    /// Secret name or ARN in AWS Secrets Manager
    #[arg(long, env = "ENVPULL_SECRET")]
    pub secret: Option<String>,

    /// AWS region [default: us-east-1]
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Output file path [default: ./.env]
    #[arg(short, long, env = "ENVPULL_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Project file with defaults [default: ./.envpull.toml if present]
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Supported shells for completions.
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    match command {
        Command::Pull(args) => pull::execute(args),
        Command::Completions { shell } => completions::execute(shell),
    }
}

//! Pull command - fetch a secret and write it to a local file.

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::PullArgs;
use crate::core::config::ProjectConfig;
use crate::core::resolve::PullInput;
use crate::core::{store, sync};
use crate::error::Result;

impl From<PullArgs> for PullInput {
    fn from(args: PullArgs) -> Self {
        Self {
            access_id: args.aws_access_id,
            access_key: args.aws_access_key.map(Zeroizing::new),
            secret: args.secret,
            region: args.region,
            output: args.output,
        }
    }
}

/// Pull the configured secret into its output file.
pub fn execute(args: PullArgs) -> Result<()> {
    info!("running pull");

    let project = ProjectConfig::load(args.config.as_deref())?;
    let report = sync::pull(PullInput::from(args), project.as_ref(), store::connect)?;

    output::success(&format!(
        "pulled {} → {} ({} bytes)",
        output::key(&report.secret),
        output::path(&report.path.display().to_string()),
        report.bytes
    ));
    if let Some(version) = &report.version_id {
        output::dimmed(&format!("  version {}", version));
    }

    Ok(())
}

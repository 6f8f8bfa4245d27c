//! Command helper methods for Test.

use super::{Test, ACCESS_ID, ACCESS_KEY};
use assert_cmd::Command;
use std::process::Output;

/// Variables the CLI reads, cleared so the host environment can't leak in.
const CLEARED_ENV: &[&str] = &[
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_REGION",
    "ENVPULL_SECRET",
    "ENVPULL_OUTPUT",
    "ENVPULL_LOG",
];

impl Test {
    /// Create an envpull command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test working directory
    /// - The fixture store pointed at the test store directory
    /// - Colors disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("envpull").expect("failed to find envpull binary");
        for var in CLEARED_ENV {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("ENVPULL_FIXTURE_DIR", self.store.path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// `envpull pull` with the test credentials and extra arguments.
    pub fn pull(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(["pull", "--awsAccessId", ACCESS_ID, "--awsAccessKey", ACCESS_KEY])
            .args(args)
            .output()
            .expect("failed to run envpull pull")
    }

    /// `envpull pull --secret <name> --output <output>`.
    pub fn pull_to(&self, secret: &str, output: &str) -> Output {
        self.pull(&["--secret", secret, "--output", output])
    }
}

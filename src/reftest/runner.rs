//! Reftest runner
//!
//! Runs the headless harness with its stdout captured in the log file. On a
//! clean exit the success message is printed; otherwise the analyzer page is
//! opened on the log.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

use super::{program, viewer};
use crate::common::config::Config;
use crate::common::{Error, Result};

/// Printed to stdout when the harness exits successfully
pub const SUCCESS_MESSAGE: &str = "All tests passed.";

/// Resolved settings for a single run
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Harness executable
    pub harness: String,
    /// Arguments passed to the harness before the suite name
    pub harness_args: Vec<String>,
    /// Suite name, the harness's last argument
    pub suite: String,
    /// Log file receiving the harness's stdout
    pub log_file: PathBuf,
    /// Browser opened on failure
    pub browser: String,
    /// Arguments passed to the browser before the analyzer URL
    pub browser_args: Vec<String>,
    /// Analyzer page the log URL is attached to
    pub analyzer_page: String,
    /// Whether to open the browser on failure
    pub open_on_failure: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for RunnerConfig {
    fn from(config: &Config) -> Self {
        Self {
            harness: config.harness.program.clone(),
            harness_args: config.harness.args.clone(),
            suite: config.harness.suite.clone(),
            log_file: config.harness.log_file.clone(),
            browser: config.viewer.browser.clone(),
            browser_args: config.viewer.args.clone(),
            analyzer_page: config.viewer.analyzer_page.clone(),
            open_on_failure: config.viewer.open_on_failure,
        }
    }
}

impl RunnerConfig {
    /// URL handed to the browser on failure
    pub fn analyzer_url(&self) -> String {
        viewer::analyzer_url(&self.analyzer_page, &self.log_file)
    }
}

/// How a run ended, when it ended normally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Harness exited with status zero
    Passed,
    /// Harness failed and the analyzer was shown
    FailureViewed { code: Option<i32> },
    /// Harness failed and opening the analyzer was disabled
    Failed { code: Option<i32> },
}

impl RunOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Runs the harness and reacts to its result
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Execute one run, writing the success message to `out`
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunOutcome> {
        let status = self.run_harness().await?;

        if status.success() {
            tracing::info!("Harness passed");
            writeln!(out, "{}", SUCCESS_MESSAGE)?;
            out.flush()?;
            return Ok(RunOutcome::Passed);
        }

        let code = status.code();
        let reason =
            code.map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {c}"));

        // Without the analyzer the log path is the only pointer to the failures
        if !self.config.open_on_failure {
            tracing::warn!(
                "Harness failed ({}), log written to {}",
                reason,
                self.config.log_file.display()
            );
            return Ok(RunOutcome::Failed { code });
        }

        tracing::info!(
            "Harness failed ({}), opening analyzer on {}",
            reason,
            self.config.log_file.display()
        );
        viewer::open(
            &self.config.browser,
            &self.config.browser_args,
            &self.config.analyzer_url(),
        )
        .await?;

        Ok(RunOutcome::FailureViewed { code })
    }

    /// Run the harness with stdout going to a freshly truncated log file
    ///
    /// The log handle lives inside this call and is closed before it returns.
    async fn run_harness(&self) -> Result<ExitStatus> {
        let log = File::create(&self.config.log_file).map_err(|source| Error::LogFile {
            path: self.config.log_file.clone(),
            source,
        })?;

        let program = program::resolve(&self.config.harness)?;
        tracing::debug!(
            "Running {} {:?} {} > {}",
            program.display(),
            self.config.harness_args,
            self.config.suite,
            self.config.log_file.display()
        );

        let mut command = Command::new(&program);
        command
            .args(&self.config.harness_args)
            .arg(&self.config.suite)
            .stdout(Stdio::from(log));

        command
            .status()
            .await
            .map_err(|e| Error::harness_launch(&self.config.harness, e))
    }
}

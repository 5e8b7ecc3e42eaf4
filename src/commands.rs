//! CLI argument definitions
//!
//! Every option is optional; running with no arguments uses the config file,
//! or the built-in defaults when there is none.

use clap::Parser;
use std::path::PathBuf;

use crate::common::config::Config;
use crate::common::Result;

#[derive(Parser, Debug)]
#[command(name = "reftest-debugger")]
#[command(version, about = "Run the headless reftests and open the analyzer on failure")]
#[command(long_about = None)]
pub struct Args {
    /// Test suite passed to the harness (default: reftest)
    pub suite: Option<String>,

    /// Harness executable (default: ./headless.py)
    #[arg(long)]
    pub harness: Option<String>,

    /// Browser used to show failures (default: firefox)
    #[arg(long)]
    pub browser: Option<String>,

    /// Analyzer page opened on failure (default: reftest-analyzer.xhtml)
    #[arg(long)]
    pub analyzer: Option<String>,

    /// File receiving the harness output (default: reftest.log)
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Don't open the browser when tests fail
    #[arg(long)]
    pub no_open: bool,

    /// Exit with status 1 when tests fail
    #[arg(long)]
    pub exit_code: bool,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl Args {
    /// Load the config file selected by these arguments and apply overrides
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Command-line values win over the config file
    pub fn apply(&self, config: &mut Config) {
        if let Some(suite) = &self.suite {
            config.harness.suite = suite.clone();
        }
        if let Some(harness) = &self.harness {
            config.harness.program = harness.clone();
        }
        if let Some(log) = &self.log {
            config.harness.log_file = log.clone();
        }
        if let Some(browser) = &self.browser {
            config.viewer.browser = browser.clone();
        }
        if let Some(analyzer) = &self.analyzer {
            config.viewer.analyzer_page = analyzer.clone();
        }
        if self.no_open {
            config.viewer.open_on_failure = false;
        }
        if self.exit_code {
            config.run.exit_code = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_keeps_config() {
        let args = Args::try_parse_from(["reftest-debugger"]).unwrap();
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.harness.suite, "reftest");
        assert_eq!(config.viewer.browser, "firefox");
        assert!(config.viewer.open_on_failure);
        assert!(!config.run.exit_code);
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from([
            "reftest-debugger",
            "perf",
            "--harness",
            "./wrench-headless",
            "--browser",
            "chromium",
            "--log",
            "out.log",
            "--no-open",
            "--exit-code",
        ])
        .unwrap();
        let mut config = Config::parse("[viewer]\nbrowser = \"epiphany\"\n").unwrap();
        args.apply(&mut config);

        assert_eq!(config.harness.suite, "perf");
        assert_eq!(config.harness.program, "./wrench-headless");
        assert_eq!(config.harness.log_file, PathBuf::from("out.log"));
        assert_eq!(config.viewer.browser, "chromium");
        assert!(!config.viewer.open_on_failure);
        assert!(config.run.exit_code);
    }
}

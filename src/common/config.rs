//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::config_path;
use super::{Error, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Test harness settings
    #[serde(default)]
    pub harness: HarnessConfig,

    /// Failure viewer settings
    #[serde(default)]
    pub viewer: ViewerConfig,

    /// Run-level settings
    #[serde(default)]
    pub run: RunConfig,
}

/// Headless test harness settings
#[derive(Debug, Deserialize)]
pub struct HarnessConfig {
    /// Harness executable, relative to the working directory or found on PATH
    #[serde(default = "default_harness_program")]
    pub program: String,

    /// Extra arguments passed before the suite name
    #[serde(default)]
    pub args: Vec<String>,

    /// Test suite to run
    #[serde(default = "default_suite")]
    pub suite: String,

    /// File receiving the harness's standard output
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            program: default_harness_program(),
            args: Vec::new(),
            suite: default_suite(),
            log_file: default_log_file(),
        }
    }
}

fn default_harness_program() -> String {
    "./headless.py".to_string()
}

fn default_suite() -> String {
    "reftest".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("reftest.log")
}

/// Settings for the browser opened on failure
#[derive(Debug, Deserialize)]
pub struct ViewerConfig {
    /// Browser executable
    #[serde(default = "default_browser")]
    pub browser: String,

    /// Extra arguments passed before the analyzer URL
    #[serde(default)]
    pub args: Vec<String>,

    /// Analyzer page the log URL is appended to
    #[serde(default = "default_analyzer_page")]
    pub analyzer_page: String,

    /// Launch the browser when the harness fails
    #[serde(default = "default_true")]
    pub open_on_failure: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            browser: default_browser(),
            args: Vec::new(),
            analyzer_page: default_analyzer_page(),
            open_on_failure: true,
        }
    }
}

fn default_browser() -> String {
    "firefox".to_string()
}

fn default_analyzer_page() -> String {
    "reftest-analyzer.xhtml".to_string()
}

fn default_true() -> bool {
    true
}

/// Run-level settings
#[derive(Debug, Deserialize, Default)]
pub struct RunConfig {
    /// Exit with status 1 when the harness reports failure
    #[serde(default)]
    pub exit_code: bool,
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "config file '{}' does not exist",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }
}

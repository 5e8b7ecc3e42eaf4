//! Error types for reftest-debugger
//!
//! Only launch-level problems are errors. A harness that runs and reports
//! failing tests is an outcome, not an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for reftest-debugger
#[derive(Error, Debug)]
pub enum Error {
    // === Process Launch Errors ===
    #[error("Program '{name}' not found on PATH. Pass a path or set it in the config file")]
    ProgramNotFound { name: String },

    #[error("Failed to start test harness '{program}': {source}")]
    HarnessLaunch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to start browser '{program}': {source}")]
    ViewerLaunch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Browser '{program}' exited with {}", describe_code(*code))]
    ViewerFailed { program: String, code: Option<i32> },

    // === Log File Errors ===
    #[error("Failed to create log file '{}': {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl Error {
    pub fn harness_launch(program: &str, source: io::Error) -> Self {
        Self::HarnessLaunch {
            program: program.to_string(),
            source,
        }
    }

    pub fn viewer_launch(program: &str, source: io::Error) -> Self {
        Self::ViewerLaunch {
            program: program.to_string(),
            source,
        }
    }
}

//! reftest-debugger - run the headless reftests and inspect failures
//!
//! Runs the headless reftest harness with its output captured in a log
//! file and, when the harness reports failure, opens the reftest analyzer
//! page on that log in a browser.

pub mod commands;
pub mod common;
pub mod reftest;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use reftest::{RunOutcome, Runner, RunnerConfig, SUCCESS_MESSAGE};

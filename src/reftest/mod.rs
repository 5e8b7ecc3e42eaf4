//! Reftest run-and-view workflow

pub mod program;
mod runner;
pub mod viewer;

pub use runner::{RunOutcome, Runner, RunnerConfig, SUCCESS_MESSAGE};

//! SIMP demo driver.
//!
//! Builds sample programs, runs each under the small-step machine, the
//! big-step evaluator and the denotational compiler, and reports whether the
//! three agree.

pub mod config;
pub mod error;
pub mod output;
pub mod programs;
pub mod runner;

pub use config::{RunConfig, Strategy};
pub use error::CliError;
pub use runner::{run_program, run_strategy, ScenarioReport};

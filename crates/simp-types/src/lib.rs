//! Shared types for the SIMP execution engine.
//!
//! This crate defines the AST node types, runtime values, the immutable
//! environment, the error taxonomy and the step budget used by every
//! execution strategy (small-step, big-step, denotational).

mod env;
mod error;
mod gas;
mod value;
pub mod ast;
pub mod ops;

pub use env::Environment;
pub use error::{EvalError, EvalResult};
pub use gas::Gas;
pub use value::Value;

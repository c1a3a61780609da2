//! SIMP big-step evaluator.
//!
//! Maps a program directly to its final value or environment by structural
//! recursion, without rewriting the AST.

mod evaluator;

pub use evaluator::{evaluate_expression, evaluate_statement, Evaluator};

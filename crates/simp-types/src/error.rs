//! Runtime error types shared by all execution strategies.

use thiserror::Error;

/// Evaluation error. Every variant aborts the current run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Lookup of a name with no binding in the environment.
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),

    /// Arithmetic on a boolean, comparison of booleans, or a number used as a
    /// condition.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// `+` or `*` left the range of a 64-bit signed integer.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(String),

    /// The configured step budget ran out before the program finished.
    #[error("step limit exceeded after {limit} steps")]
    StepLimitExceeded { limit: u64 },

    /// A reduction was requested for a term already in normal form.
    #[error("cannot reduce normal form: {0}")]
    Irreducible(String),
}

/// Result alias for evaluation operations.
pub type EvalResult<T> = Result<T, EvalError>;

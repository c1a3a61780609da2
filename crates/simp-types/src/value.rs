use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EvalError, EvalResult};

/// A runtime value. Numbers are 64-bit signed integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(i64),
    Boolean(bool),
}

impl Value {
    /// Human-readable type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
        }
    }

    /// Interpret this value as a branch or loop condition.
    ///
    /// Only booleans are accepted; a number is a type mismatch.
    pub fn as_condition(&self) -> EvalResult<bool> {
        match self {
            Value::Boolean(true) => Ok(true),
            Value::Boolean(false) => Ok(false),
            Value::Number(n) => Err(EvalError::TypeMismatch(format!(
                "condition must be boolean, got number {n}"
            ))),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_accepts_booleans_only() {
        assert_eq!(Value::Boolean(true).as_condition(), Ok(true));
        assert_eq!(Value::Boolean(false).as_condition(), Ok(false));
        assert!(matches!(
            Value::Number(1).as_condition(),
            Err(EvalError::TypeMismatch(_))
        ));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Number(-7).to_string(), "-7");
        assert_eq!(Value::Boolean(false).to_string(), "false");
    }

    #[test]
    fn test_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Value::Number(9)).unwrap(), "9");
        assert_eq!(serde_json::to_string(&Value::Boolean(true)).unwrap(), "true");
    }
}

//! Operator semantics shared by every strategy.

use crate::error::{EvalError, EvalResult};
use crate::Value;

/// `left + right`.
pub fn add(left: &Value, right: &Value) -> EvalResult<Value> {
    let (a, b) = numbers(left, right, "+")?;
    a.checked_add(b)
        .map(Value::Number)
        .ok_or_else(|| EvalError::ArithmeticOverflow(format!("{a} + {b}")))
}

/// `left * right`.
pub fn multiply(left: &Value, right: &Value) -> EvalResult<Value> {
    let (a, b) = numbers(left, right, "*")?;
    a.checked_mul(b)
        .map(Value::Number)
        .ok_or_else(|| EvalError::ArithmeticOverflow(format!("{a} * {b}")))
}

/// `left < right`. Only numbers are ordered.
pub fn less_than(left: &Value, right: &Value) -> EvalResult<Value> {
    let (a, b) = numbers(left, right, "<")?;
    Ok(Value::Boolean(a < b))
}

fn numbers(left: &Value, right: &Value, symbol: &str) -> EvalResult<(i64, i64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(EvalError::TypeMismatch(format!(
            "cannot apply '{symbol}' to {} and {}",
            left.type_name(),
            right.type_name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(add(&Value::Number(1), &Value::Number(1)), Ok(Value::Number(2)));
        assert_eq!(
            multiply(&Value::Number(3), &Value::Number(-4)),
            Ok(Value::Number(-12))
        );
        assert_eq!(
            less_than(&Value::Number(2), &Value::Number(1)),
            Ok(Value::Boolean(false))
        );
    }

    #[test]
    fn test_boolean_operand_is_type_mismatch() {
        let err = add(&Value::Boolean(true), &Value::Number(1)).unwrap_err();
        assert_eq!(
            err,
            EvalError::TypeMismatch("cannot apply '+' to boolean and number".into())
        );
        assert!(matches!(
            less_than(&Value::Number(1), &Value::Boolean(false)),
            Err(EvalError::TypeMismatch(_))
        ));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(matches!(
            multiply(&Value::Number(i64::MAX), &Value::Number(2)),
            Err(EvalError::ArithmeticOverflow(_))
        ));
        assert!(matches!(
            add(&Value::Number(i64::MAX), &Value::Number(1)),
            Err(EvalError::ArithmeticOverflow(_))
        ));
    }
}

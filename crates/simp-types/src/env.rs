//! Immutable variable environment.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EvalError, EvalResult};
use crate::Value;

/// Immutable mapping from variable name to [`Value`].
///
/// Bindings are a persistent ordered map: cloning shares the whole map and
/// [`Environment::with`] copies only the path to the changed key, leaving the
/// receiver and every other holder of it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment {
    bindings: OrdMap<String, Value>,
}

impl Environment {
    /// The environment with no bindings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Return a new environment equal to this one plus `name → value`.
    /// An existing binding for `name` is overwritten in the result only.
    pub fn with(&self, name: impl Into<String>, value: Value) -> Self {
        Self {
            bindings: self.bindings.update(name.into(), value),
        }
    }

    /// Look up a variable. A missing name is an error, never a default.
    pub fn lookup(&self, name: &str) -> EvalResult<Value> {
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UndefinedVariable(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// True when both environments share the same underlying map.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.bindings.ptr_eq(&other.bindings)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_leaves_original_unchanged() {
        let before = Environment::empty().with("x", Value::Number(1));
        let after = before.with("x", Value::Number(2)).with("y", Value::Boolean(true));

        assert_eq!(before.lookup("x"), Ok(Value::Number(1)));
        assert_eq!(before.get("y"), None);
        assert_eq!(after.lookup("x"), Ok(Value::Number(2)));
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn test_lookup_missing_is_error() {
        assert_eq!(
            Environment::empty().lookup("z"),
            Err(EvalError::UndefinedVariable("z".into()))
        );
    }

    #[test]
    fn test_display_is_name_ordered() {
        let env: Environment = [("y", Value::Number(2)), ("x", Value::Number(1))]
            .into_iter()
            .collect();
        assert_eq!(env.to_string(), "{x: 1, y: 2}");
        assert_eq!(Environment::empty().to_string(), "{}");
    }

    #[test]
    fn test_structural_equality() {
        let a = Environment::empty().with("x", Value::Number(1));
        let b: Environment = [("x", Value::Number(1))].into_iter().collect();
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert!(a.ptr_eq(&a.clone()));
    }

    #[test]
    fn test_many_versions_coexist() {
        let mut versions = vec![Environment::empty()];
        for i in 0..5_000i64 {
            let next = versions[versions.len() - 1].with(format!("v{i}"), Value::Number(i));
            versions.push(next);
        }
        assert_eq!(versions[5_000].len(), 5_000);
        assert_eq!(versions[2_500].len(), 2_500);
        assert_eq!(versions[2_500].get("v2500"), None);
        assert_eq!(versions[5_000].lookup("v2500"), Ok(Value::Number(2_500)));
    }

    #[test]
    fn test_serializes_as_object() {
        let env = Environment::empty()
            .with("x", Value::Number(9))
            .with("done", Value::Boolean(true));
        assert_eq!(
            serde_json::to_string(&env).unwrap(),
            r#"{"done":true,"x":9}"#
        );
    }
}

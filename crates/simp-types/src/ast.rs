//! AST node types for SIMP.
//!
//! The node set is closed and carries no behavior beyond construction,
//! normal-form tests and rendering. Each execution strategy lives in its own
//! crate and matches on these variants directly.
//!
//! Rendering follows the trace format: binary operators print without
//! parentheses, statements print as `x = e`, `do-nothing`,
//! `if (c) {a} else {b}`, `a; b` and `while (c) {b}`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Value;

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// An expression. Expressions read the environment but never change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    Literal(Value),
    Variable(String),
    Add(Box<Expr>, Box<Expr>),
    Multiply(Box<Expr>, Box<Expr>),
    LessThan(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn number(n: i64) -> Self {
        Expr::Literal(Value::Number(n))
    }

    pub fn boolean(b: bool) -> Self {
        Expr::Literal(Value::Boolean(b))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::Add(Box::new(left), Box::new(right))
    }

    pub fn multiply(left: Expr, right: Expr) -> Self {
        Expr::Multiply(Box::new(left), Box::new(right))
    }

    pub fn less_than(left: Expr, right: Expr) -> Self {
        Expr::LessThan(Box::new(left), Box::new(right))
    }

    /// Anything but a literal can still take a reduction step.
    pub fn is_reducible(&self) -> bool {
        !matches!(self, Expr::Literal(_))
    }

    /// The literal's value, if this expression is in normal form.
    pub fn as_value(&self) -> Option<Value> {
        match self {
            Expr::Literal(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{value}"),
            Expr::Variable(name) => write!(f, "{name}"),
            Expr::Add(left, right) => write!(f, "{left} + {right}"),
            Expr::Multiply(left, right) => write!(f, "{left} * {right}"),
            Expr::LessThan(left, right) => write!(f, "{left} < {right}"),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

/// A statement. Running one yields a new environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
    Assign(String, Expr),
    DoNothing,
    If(Expr, Box<Stmt>, Box<Stmt>),
    Sequence(Box<Stmt>, Box<Stmt>),
    While(Expr, Box<Stmt>),
}

impl Stmt {
    pub fn assign(name: impl Into<String>, expression: Expr) -> Self {
        Stmt::Assign(name.into(), expression)
    }

    pub fn do_nothing() -> Self {
        Stmt::DoNothing
    }

    pub fn if_else(condition: Expr, consequence: Stmt, alternative: Stmt) -> Self {
        Stmt::If(condition, Box::new(consequence), Box::new(alternative))
    }

    pub fn sequence(first: Stmt, second: Stmt) -> Self {
        Stmt::Sequence(Box::new(first), Box::new(second))
    }

    pub fn while_loop(condition: Expr, body: Stmt) -> Self {
        Stmt::While(condition, Box::new(body))
    }

    /// Right-nested sequence of `stmts`; `do-nothing` when empty.
    pub fn block(stmts: impl IntoIterator<Item = Stmt>) -> Self {
        let mut stmts: Vec<Stmt> = stmts.into_iter().collect();
        let Some(mut acc) = stmts.pop() else {
            return Stmt::DoNothing;
        };
        while let Some(stmt) = stmts.pop() {
            acc = Stmt::sequence(stmt, acc);
        }
        acc
    }

    /// `do-nothing` is the only statement in normal form.
    pub fn is_reducible(&self) -> bool {
        !matches!(self, Stmt::DoNothing)
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Assign(name, expression) => write!(f, "{name} = {expression}"),
            Stmt::DoNothing => write!(f, "do-nothing"),
            Stmt::If(condition, consequence, alternative) => {
                write!(f, "if ({condition}) {{{consequence}}} else {{{alternative}}}")
            }
            Stmt::Sequence(first, second) => write!(f, "{first}; {second}"),
            Stmt::While(condition, body) => write!(f, "while ({condition}) {{{body}}}"),
        }
    }
}

//! One-step reduction relations for expressions and statements.

use simp_types::ast::{Expr, Stmt};
use simp_types::{ops, Environment, EvalError, EvalResult, Value};

/// Reduce a reducible expression by one step.
///
/// Operands reduce strictly left to right. Once both are literals the node
/// collapses to a single literal.
pub fn reduce_expression(expr: &Expr, env: &Environment) -> EvalResult<Expr> {
    match expr {
        Expr::Literal(_) => Err(EvalError::Irreducible(expr.to_string())),
        Expr::Variable(name) => Ok(Expr::Literal(env.lookup(name)?)),
        Expr::Add(left, right) => reduce_binary(left, right, env, Expr::Add, ops::add),
        Expr::Multiply(left, right) => {
            reduce_binary(left, right, env, Expr::Multiply, ops::multiply)
        }
        Expr::LessThan(left, right) => {
            reduce_binary(left, right, env, Expr::LessThan, ops::less_than)
        }
    }
}

fn reduce_binary(
    left: &Expr,
    right: &Expr,
    env: &Environment,
    rebuild: fn(Box<Expr>, Box<Expr>) -> Expr,
    apply: fn(&Value, &Value) -> EvalResult<Value>,
) -> EvalResult<Expr> {
    match (left, right) {
        (Expr::Literal(a), Expr::Literal(b)) => Ok(Expr::Literal(apply(a, b)?)),
        (Expr::Literal(_), _) => Ok(rebuild(
            Box::new(left.clone()),
            Box::new(reduce_expression(right, env)?),
        )),
        _ => Ok(rebuild(
            Box::new(reduce_expression(left, env)?),
            Box::new(right.clone()),
        )),
    }
}

/// Reduce a reducible statement by one step, returning the rewritten
/// statement and the environment after the step.
///
/// Only `Assign` ever produces a different environment.
pub fn reduce_statement(stmt: &Stmt, env: &Environment) -> EvalResult<(Stmt, Environment)> {
    match stmt {
        Stmt::DoNothing => Err(EvalError::Irreducible(stmt.to_string())),

        Stmt::Assign(name, expression) => match expression {
            Expr::Literal(value) => Ok((Stmt::DoNothing, env.with(name.clone(), *value))),
            _ => Ok((
                Stmt::Assign(name.clone(), reduce_expression(expression, env)?),
                env.clone(),
            )),
        },

        Stmt::If(condition, consequence, alternative) => match condition {
            Expr::Literal(value) => {
                let branch = if value.as_condition()? {
                    consequence
                } else {
                    alternative
                };
                Ok(((**branch).clone(), env.clone()))
            }
            _ => Ok((
                Stmt::If(
                    reduce_expression(condition, env)?,
                    consequence.clone(),
                    alternative.clone(),
                ),
                env.clone(),
            )),
        },

        Stmt::Sequence(first, second) => match &**first {
            Stmt::DoNothing => Ok(((**second).clone(), env.clone())),
            _ => {
                let (first, env) = reduce_statement(first, env)?;
                Ok((Stmt::Sequence(Box::new(first), second.clone()), env))
            }
        },

        // The loop never iterates here: it unrolls into one `if` check that
        // re-enters the loop after the body.
        Stmt::While(condition, body) => Ok((
            Stmt::if_else(
                condition.clone(),
                Stmt::sequence((**body).clone(), stmt.clone()),
                Stmt::DoNothing,
            ),
            env.clone(),
        )),
    }
}

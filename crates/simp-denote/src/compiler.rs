//! Expression and statement compilation.

use std::fmt;
use std::sync::Arc;

use simp_types::ast::{Expr, Stmt};
use simp_types::{ops, Environment, EvalResult, Gas, Value};

type ExprFn = dyn Fn(&Environment) -> EvalResult<Value> + Send + Sync;
type StmtFn = dyn Fn(Environment, &mut Gas) -> EvalResult<Environment> + Send + Sync;

/// The meaning of an expression: a function from environment to value.
#[derive(Clone)]
pub struct CompiledExpr(Arc<ExprFn>);

impl CompiledExpr {
    fn new(f: impl Fn(&Environment) -> EvalResult<Value> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, env: &Environment) -> EvalResult<Value> {
        (self.0)(env)
    }
}

impl fmt::Debug for CompiledExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CompiledExpr(..)")
    }
}

/// The meaning of a statement: a function from environment to environment.
#[derive(Clone)]
pub struct CompiledStmt(Arc<StmtFn>);

impl CompiledStmt {
    fn new(
        f: impl Fn(Environment, &mut Gas) -> EvalResult<Environment> + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(f))
    }

    /// Run against `env` with no step limit.
    pub fn call(&self, env: Environment) -> EvalResult<Environment> {
        self.call_with_gas(env, &mut Gas::unlimited())
    }

    /// Run with a budget of `limit` units: one per statement executed plus
    /// one per loop iteration.
    pub fn call_with_gas_limit(&self, env: Environment, limit: u64) -> EvalResult<Environment> {
        self.call_with_gas(env, &mut Gas::limited(limit))
    }

    pub fn call_with_gas(&self, env: Environment, gas: &mut Gas) -> EvalResult<Environment> {
        (self.0)(env, gas)
    }
}

impl fmt::Debug for CompiledStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CompiledStmt(..)")
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// Compile an expression.
pub fn compile_expression(expr: &Expr) -> CompiledExpr {
    match expr {
        Expr::Literal(value) => {
            let value = *value;
            CompiledExpr::new(move |_| Ok(value))
        }
        Expr::Variable(name) => {
            let name = name.clone();
            CompiledExpr::new(move |env| env.lookup(&name))
        }
        Expr::Add(left, right) => compile_binary(left, right, ops::add),
        Expr::Multiply(left, right) => compile_binary(left, right, ops::multiply),
        Expr::LessThan(left, right) => compile_binary(left, right, ops::less_than),
    }
}

fn compile_binary(
    left: &Expr,
    right: &Expr,
    apply: fn(&Value, &Value) -> EvalResult<Value>,
) -> CompiledExpr {
    let left = compile_expression(left);
    let right = compile_expression(right);
    CompiledExpr::new(move |env| apply(&left.call(env)?, &right.call(env)?))
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

/// Compile a statement.
pub fn compile_statement(stmt: &Stmt) -> CompiledStmt {
    match stmt {
        Stmt::Assign(name, expression) => {
            let name = name.clone();
            let expression = compile_expression(expression);
            CompiledStmt::new(move |env, gas| {
                gas.tick()?;
                let value = expression.call(&env)?;
                Ok(env.with(name.clone(), value))
            })
        }

        Stmt::DoNothing => CompiledStmt::new(|env, gas| {
            gas.tick()?;
            Ok(env)
        }),

        Stmt::If(condition, consequence, alternative) => {
            let condition = compile_expression(condition);
            let consequence = compile_statement(consequence);
            let alternative = compile_statement(alternative);
            CompiledStmt::new(move |env, gas| {
                gas.tick()?;
                if condition.call(&env)?.as_condition()? {
                    consequence.call_with_gas(env, gas)
                } else {
                    alternative.call_with_gas(env, gas)
                }
            })
        }

        Stmt::Sequence(..) => {
            // A right-nested block compiles to one flat list of steps.
            let mut steps = Vec::new();
            let mut rest = stmt;
            while let Stmt::Sequence(first, second) = rest {
                steps.push(compile_statement(first));
                rest = second;
            }
            let last = compile_statement(rest);
            CompiledStmt::new(move |mut env, gas| {
                for step in &steps {
                    gas.tick()?;
                    env = step.call_with_gas(env, gas)?;
                }
                last.call_with_gas(env, gas)
            })
        }

        Stmt::While(condition, body) => {
            let condition = compile_expression(condition);
            let body = compile_statement(body);
            CompiledStmt::new(move |mut env, gas| {
                gas.tick()?;
                while condition.call(&env)?.as_condition()? {
                    gas.tick()?;
                    env = body.call_with_gas(env, gas)?;
                    tracing::trace!(%env, "while iteration");
                }
                Ok(env)
            })
        }
    }
}

//! Core expression and statement evaluator.

use simp_types::ast::{Expr, Stmt};
use simp_types::{ops, Environment, EvalResult, Gas, Value};

/// Evaluate an expression to a value with an unlimited evaluator.
pub fn evaluate_expression(expr: &Expr, env: &Environment) -> EvalResult<Value> {
    Evaluator::new().eval_expr(expr, env)
}

/// Evaluate a statement to its final environment with an unlimited
/// evaluator. A loop whose condition never becomes false never returns.
pub fn evaluate_statement(stmt: &Stmt, env: &Environment) -> EvalResult<Environment> {
    Evaluator::new().eval_stmt(stmt, env)
}

/// The big-step evaluator. Holds only the gas counter; environments are
/// passed in and returned, never stored.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    gas: Gas,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the run to `limit` units: one per statement evaluated plus one
    /// per loop iteration.
    pub fn with_gas_limit(limit: u64) -> Self {
        Self {
            gas: Gas::limited(limit),
        }
    }

    pub fn gas_used(&self) -> u64 {
        self.gas.used()
    }

    // ══════════════════════════════════════════════════════════════════════
    // Expression evaluation
    // ══════════════════════════════════════════════════════════════════════

    pub fn eval_expr(&self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        match expr {
            Expr::Literal(value) => Ok(*value),
            Expr::Variable(name) => env.lookup(name),
            Expr::Add(left, right) => {
                ops::add(&self.eval_expr(left, env)?, &self.eval_expr(right, env)?)
            }
            Expr::Multiply(left, right) => {
                ops::multiply(&self.eval_expr(left, env)?, &self.eval_expr(right, env)?)
            }
            Expr::LessThan(left, right) => {
                ops::less_than(&self.eval_expr(left, env)?, &self.eval_expr(right, env)?)
            }
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Statement evaluation
    // ══════════════════════════════════════════════════════════════════════

    pub fn eval_stmt(&mut self, stmt: &Stmt, env: &Environment) -> EvalResult<Environment> {
        self.gas.tick()?;
        match stmt {
            Stmt::Assign(name, expression) => {
                let value = self.eval_expr(expression, env)?;
                Ok(env.with(name.clone(), value))
            }
            Stmt::DoNothing => Ok(env.clone()),
            Stmt::If(condition, consequence, alternative) => {
                if self.eval_expr(condition, env)?.as_condition()? {
                    self.eval_stmt(consequence, env)
                } else {
                    self.eval_stmt(alternative, env)
                }
            }
            Stmt::Sequence(first, second) => {
                // Walk the right spine in place so long blocks stay shallow.
                let mut env = self.eval_stmt(first, env)?;
                let mut rest: &Stmt = second;
                while let Stmt::Sequence(first, second) = rest {
                    self.gas.tick()?;
                    env = self.eval_stmt(first, &env)?;
                    rest = second;
                }
                self.eval_stmt(rest, &env)
            }
            Stmt::While(condition, body) => self.eval_while(condition, body, env),
        }
    }

    /// `while` re-enters itself on the body's result until the condition
    /// is false. The self call is a tail call, so it runs as a loop.
    fn eval_while(
        &mut self,
        condition: &Expr,
        body: &Stmt,
        env: &Environment,
    ) -> EvalResult<Environment> {
        let mut env = env.clone();
        let mut iterations = 0u64;
        while self.eval_expr(condition, &env)?.as_condition()? {
            self.gas.tick()?;
            env = self.eval_stmt(body, &env)?;
            iterations += 1;
            tracing::trace!(iterations, %env, "while iteration");
        }
        Ok(env)
    }
}

//! The reduction machine: repeatedly steps a statement to `do-nothing`.

use simp_types::ast::Stmt;
use simp_types::{Environment, EvalResult, Gas};

use crate::reduce::reduce_statement;
use crate::trace::TraceSink;

/// Holds the current statement and environment of a small-step run.
#[derive(Debug, Clone)]
pub struct Machine {
    statement: Stmt,
    environment: Environment,
    gas: Gas,
    steps: u64,
    trace: TraceSink,
}

impl Machine {
    /// A machine with no step limit that traces to stdout.
    pub fn new(statement: Stmt, environment: Environment) -> Self {
        Self {
            statement,
            environment,
            gas: Gas::unlimited(),
            steps: 0,
            trace: TraceSink::default(),
        }
    }

    /// Fail with `StepLimitExceeded` after `limit` reduction steps.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.gas = Gas::limited(limit);
        self
    }

    pub fn with_gas(mut self, gas: Gas) -> Self {
        self.gas = gas;
        self
    }

    pub fn with_trace(mut self, trace: TraceSink) -> Self {
        self.trace = trace;
        self
    }

    pub fn statement(&self) -> &Stmt {
        &self.statement
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Reduction steps taken so far. A step that fails is not counted.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn into_environment(self) -> Environment {
        self.environment
    }

    /// Apply one reduction step. On error the machine keeps its prior state.
    pub fn step(&mut self) -> EvalResult<()> {
        self.gas.tick()?;
        let (statement, environment) = reduce_statement(&self.statement, &self.environment)?;
        self.steps += 1;
        tracing::trace!(step = self.steps, %statement, %environment, "reduced");
        self.statement = statement;
        self.environment = environment;
        Ok(())
    }

    /// Step until the statement is `do-nothing`, tracing every state
    /// including the first and the last. Returns the final environment.
    ///
    /// Without a step limit a program that never reaches `do-nothing`
    /// never returns.
    pub fn run(&mut self) -> EvalResult<Environment> {
        tracing::debug!(statement = %self.statement, limit = ?self.gas.limit(), "machine run");
        self.emit();
        while self.statement.is_reducible() {
            self.step()?;
            self.emit();
        }
        tracing::debug!(steps = self.steps, "machine halted");
        Ok(self.environment.clone())
    }

    fn emit(&self) {
        self.trace
            .emit(&format!("{}, {}", self.statement, self.environment));
    }
}

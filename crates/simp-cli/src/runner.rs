//! Runs a program under each strategy and compares the outcomes.

use serde::Serialize;
use std::fmt;

use simp_denote::compile_statement;
use simp_eval::Evaluator;
use simp_machine::{Machine, TraceSink};
use simp_types::ast::Stmt;
use simp_types::{Environment, EvalError, EvalResult, Gas};

use crate::config::{RunConfig, Strategy};
use crate::programs::SampleProgram;

/// Final state of one strategy run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Finished { environment: Environment },
    Failed { error: String },
}

impl From<&EvalResult<Environment>> for Outcome {
    fn from(result: &EvalResult<Environment>) -> Self {
        match result {
            Ok(environment) => Outcome::Finished {
                environment: environment.clone(),
            },
            Err(e) => Outcome::Failed {
                error: e.to_string(),
            },
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Finished { environment } => write!(f, "{environment}"),
            Outcome::Failed { error } => write!(f, "error: {error}"),
        }
    }
}

/// Result of running a program under one strategy.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyRun {
    pub strategy: Strategy,
    pub outcome: Outcome,
    /// Small-step trace lines; empty for the other strategies.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<String>,
    #[serde(skip)]
    pub result: EvalResult<Environment>,
}

/// Everything learned from running one sample program.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub program: String,
    pub initial: Environment,
    pub step_limit: Option<u64>,
    pub runs: Vec<StrategyRun>,
    /// All runs that finished within budget ended in the same state.
    pub agree: bool,
    /// Every run that finished within budget matched the program's
    /// documented outcome. Always true for programs without one.
    pub expected: bool,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.agree && self.expected
    }
}

/// Run `stmt` from `env` under one strategy with an optional step budget.
///
/// The small-step trace is captured, never printed.
pub fn run_strategy(
    strategy: Strategy,
    stmt: &Stmt,
    env: &Environment,
    limit: Option<u64>,
) -> StrategyRun {
    let _span = tracing::debug_span!("run", %strategy).entered();
    let (result, trace) = match strategy {
        Strategy::SmallStep => {
            let (sink, buffer) = TraceSink::buffer();
            let mut machine = Machine::new(stmt.clone(), env.clone())
                .with_gas(Gas::from(limit))
                .with_trace(sink);
            (machine.run(), buffer.lines())
        }
        Strategy::BigStep => {
            let mut evaluator = limit.map_or_else(Evaluator::new, Evaluator::with_gas_limit);
            (evaluator.eval_stmt(stmt, env), Vec::new())
        }
        Strategy::Denotational => {
            let program = compile_statement(stmt);
            (
                program.call_with_gas(env.clone(), &mut Gas::from(limit)),
                Vec::new(),
            )
        }
    };
    if let Err(e) = &result {
        tracing::debug!(error = %e, "run failed");
    }
    StrategyRun {
        strategy,
        outcome: Outcome::from(&result),
        trace,
        result,
    }
}

/// Run a sample program under every configured strategy.
pub fn run_program(program: &SampleProgram, config: &RunConfig) -> ScenarioReport {
    let limit = config.budget_for(program.diverges());
    let runs: Vec<StrategyRun> = config
        .strategies
        .iter()
        .map(|&strategy| run_strategy(strategy, &program.statement, &program.environment, limit))
        .collect();

    let agree = outcomes_agree(runs.iter().map(|run| &run.result));
    let expected = match &program.expected {
        Some(expected) => settled(runs.iter().map(|run| &run.result)).all(|r| r == expected),
        None => true,
    };
    if !agree {
        tracing::warn!(program = program.name, "strategies disagree");
    }

    ScenarioReport {
        name: program.name.to_string(),
        program: program.statement.to_string(),
        initial: program.environment.clone(),
        step_limit: limit,
        runs,
        agree,
        expected,
    }
}

/// True when every outcome that is not a budget exhaustion is the same.
///
/// Strategies count steps in different units, so one may run out of budget
/// where another finishes; that is not a disagreement.
pub fn outcomes_agree<'a>(results: impl IntoIterator<Item = &'a EvalResult<Environment>>) -> bool {
    let mut settled = settled(results);
    match settled.next() {
        Some(first) => settled.all(|r| r == first),
        None => true,
    }
}

/// Outcomes that did not run out of budget.
fn settled<'a>(
    results: impl IntoIterator<Item = &'a EvalResult<Environment>>,
) -> impl Iterator<Item = &'a EvalResult<Environment>> {
    results
        .into_iter()
        .filter(|r| !matches!(r, Err(EvalError::StepLimitExceeded { .. })))
}

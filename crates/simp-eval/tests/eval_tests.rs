//! Integration tests for the big-step evaluator.

use pretty_assertions::assert_eq;
use simp_eval::{evaluate_expression, evaluate_statement, Evaluator};
use simp_types::ast::{Expr, Stmt};
use simp_types::{Environment, EvalError, Value};

fn env(bindings: &[(&str, i64)]) -> Environment {
    bindings
        .iter()
        .map(|(name, n)| (*name, Value::Number(*n)))
        .collect()
}

// ══════════════════════════════════════════════════════════════════════════════
// Scenarios
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn assign_sum() {
    let stmt = Stmt::assign("x", Expr::add(Expr::number(1), Expr::number(1)));
    assert_eq!(
        evaluate_statement(&stmt, &Environment::empty()).unwrap(),
        env(&[("x", 2)])
    );
}

#[test]
fn while_triples_until_five() {
    let stmt = Stmt::while_loop(
        Expr::less_than(Expr::variable("x"), Expr::number(5)),
        Stmt::assign("x", Expr::multiply(Expr::variable("x"), Expr::number(3))),
    );
    assert_eq!(
        evaluate_statement(&stmt, &env(&[("x", 1)])).unwrap(),
        env(&[("x", 9)])
    );
}

#[test]
fn if_takes_alternative() {
    let stmt = Stmt::if_else(
        Expr::less_than(Expr::number(2), Expr::number(1)),
        Stmt::assign("x", Expr::number(1)),
        Stmt::assign("x", Expr::number(2)),
    );
    assert_eq!(
        evaluate_statement(&stmt, &Environment::empty()).unwrap(),
        env(&[("x", 2)])
    );
}

#[test]
fn sequence_threads_environment() {
    let stmt = Stmt::sequence(
        Stmt::assign("x", Expr::number(1)),
        Stmt::assign("y", Expr::add(Expr::variable("x"), Expr::number(1))),
    );
    assert_eq!(
        evaluate_statement(&stmt, &Environment::empty()).unwrap(),
        env(&[("x", 1), ("y", 2)])
    );
}

#[test]
fn undefined_variable() {
    assert_eq!(
        evaluate_expression(&Expr::variable("z"), &Environment::empty()),
        Err(EvalError::UndefinedVariable("z".into()))
    );
}

// ══════════════════════════════════════════════════════════════════════════════
// Properties
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn only_the_taken_branch_runs() {
    // The untaken branch would fail on an undefined variable.
    let stmt = Stmt::if_else(
        Expr::boolean(true),
        Stmt::assign("x", Expr::number(1)),
        Stmt::assign("x", Expr::variable("missing")),
    );
    assert_eq!(
        evaluate_statement(&stmt, &Environment::empty()).unwrap(),
        env(&[("x", 1)])
    );
}

#[test]
fn input_environment_is_not_modified() {
    let start = env(&[("x", 1)]);
    let out = evaluate_statement(&Stmt::assign("x", Expr::number(5)), &start).unwrap();
    assert_eq!(start, env(&[("x", 1)]));
    assert_eq!(out, env(&[("x", 5)]));
}

#[test]
fn factorial() {
    // n = 5; acc = 1; while (1 < n) {acc = acc * n; n = n + -1}
    let stmt = Stmt::block([
        Stmt::assign("n", Expr::number(5)),
        Stmt::assign("acc", Expr::number(1)),
        Stmt::while_loop(
            Expr::less_than(Expr::number(1), Expr::variable("n")),
            Stmt::block([
                Stmt::assign("acc", Expr::multiply(Expr::variable("acc"), Expr::variable("n"))),
                Stmt::assign("n", Expr::add(Expr::variable("n"), Expr::number(-1))),
            ]),
        ),
    ]);
    assert_eq!(
        evaluate_statement(&stmt, &Environment::empty()).unwrap(),
        env(&[("acc", 120), ("n", 1)])
    );
}

#[test]
fn long_loop_does_not_overflow_the_stack() {
    let stmt = Stmt::while_loop(
        Expr::less_than(Expr::variable("i"), Expr::number(200_000)),
        Stmt::assign("i", Expr::add(Expr::variable("i"), Expr::number(1))),
    );
    assert_eq!(
        evaluate_statement(&stmt, &env(&[("i", 0)])).unwrap(),
        env(&[("i", 200_000)])
    );
}

/// `v0 = 0; v1 = 1; ...` as one right-nested block.
fn numbered_assignments(n: i64) -> Stmt {
    Stmt::block((0..n).map(|i| Stmt::assign(format!("v{i}"), Expr::number(i))))
}

#[test]
fn long_block_runs_without_deep_recursion() {
    let out = evaluate_statement(&numbered_assignments(10_000), &Environment::empty()).unwrap();
    assert_eq!(out.len(), 10_000);
    assert_eq!(out.lookup("v9999"), Ok(Value::Number(9_999)));
}

#[test]
fn block_gas_counts_each_sequence_node() {
    let mut evaluator = Evaluator::new();
    evaluator
        .eval_stmt(&numbered_assignments(3), &Environment::empty())
        .unwrap();
    // 2 sequences + 3 assigns
    assert_eq!(evaluator.gas_used(), 5);
}

#[test]
fn divergent_loop_hits_gas_limit() {
    let stmt = Stmt::while_loop(Expr::boolean(true), Stmt::DoNothing);
    let mut evaluator = Evaluator::with_gas_limit(50);
    assert_eq!(
        evaluator.eval_stmt(&stmt, &Environment::empty()),
        Err(EvalError::StepLimitExceeded { limit: 50 })
    );
}

#[test]
fn overflow_is_an_error() {
    let stmt = Stmt::assign(
        "x",
        Expr::multiply(Expr::number(i64::MAX), Expr::number(2)),
    );
    assert!(matches!(
        evaluate_statement(&stmt, &Environment::empty()),
        Err(EvalError::ArithmeticOverflow(_))
    ));
}

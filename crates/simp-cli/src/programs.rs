//! Sample programs shipped with the demo driver.

use simp_types::ast::{Expr, Stmt};
use simp_types::{Environment, EvalError, EvalResult, Value};

/// A named program, its starting environment and the outcome every
/// strategy must produce.
#[derive(Debug, Clone)]
pub struct SampleProgram {
    pub name: &'static str,
    pub description: &'static str,
    pub statement: Stmt,
    pub environment: Environment,
    /// `None` for programs that never terminate.
    pub expected: Option<EvalResult<Environment>>,
}

impl SampleProgram {
    pub fn diverges(&self) -> bool {
        self.expected.is_none()
    }
}

fn numbers(bindings: &[(&str, i64)]) -> Environment {
    bindings
        .iter()
        .map(|(name, n)| (*name, Value::Number(*n)))
        .collect()
}

/// Every sample program, in display order.
pub fn catalog() -> Vec<SampleProgram> {
    vec![
        SampleProgram {
            name: "assign",
            description: "assignment of a sum",
            statement: Stmt::assign("x", Expr::add(Expr::number(1), Expr::number(1))),
            environment: Environment::empty(),
            expected: Some(Ok(numbers(&[("x", 2)]))),
        },
        SampleProgram {
            name: "while",
            description: "triple x until it reaches 5",
            statement: Stmt::while_loop(
                Expr::less_than(Expr::variable("x"), Expr::number(5)),
                Stmt::assign("x", Expr::multiply(Expr::variable("x"), Expr::number(3))),
            ),
            environment: numbers(&[("x", 1)]),
            expected: Some(Ok(numbers(&[("x", 9)]))),
        },
        SampleProgram {
            name: "if",
            description: "branch on a false comparison",
            statement: Stmt::if_else(
                Expr::less_than(Expr::number(2), Expr::number(1)),
                Stmt::assign("x", Expr::number(1)),
                Stmt::assign("x", Expr::number(2)),
            ),
            environment: Environment::empty(),
            expected: Some(Ok(numbers(&[("x", 2)]))),
        },
        SampleProgram {
            name: "sequence",
            description: "second statement reads the first one's binding",
            statement: Stmt::sequence(
                Stmt::assign("x", Expr::number(1)),
                Stmt::assign("y", Expr::add(Expr::variable("x"), Expr::number(1))),
            ),
            environment: Environment::empty(),
            expected: Some(Ok(numbers(&[("x", 1), ("y", 2)]))),
        },
        SampleProgram {
            name: "undefined",
            description: "read of an unbound variable",
            statement: Stmt::assign("x", Expr::variable("z")),
            environment: Environment::empty(),
            expected: Some(Err(EvalError::UndefinedVariable("z".into()))),
        },
        SampleProgram {
            name: "factorial",
            description: "5! by repeated multiplication",
            statement: Stmt::block([
                Stmt::assign("acc", Expr::number(1)),
                Stmt::while_loop(
                    Expr::less_than(Expr::number(1), Expr::variable("n")),
                    Stmt::block([
                        Stmt::assign(
                            "acc",
                            Expr::multiply(Expr::variable("acc"), Expr::variable("n")),
                        ),
                        Stmt::assign("n", Expr::add(Expr::variable("n"), Expr::number(-1))),
                    ]),
                ),
            ]),
            environment: numbers(&[("n", 5)]),
            expected: Some(Ok(numbers(&[("acc", 120), ("n", 1)]))),
        },
        SampleProgram {
            name: "type-mismatch",
            description: "arithmetic on a boolean",
            statement: Stmt::assign(
                "x",
                Expr::add(Expr::variable("flag"), Expr::number(1)),
            ),
            environment: Environment::empty().with("flag", Value::Boolean(true)),
            expected: Some(Err(EvalError::TypeMismatch(
                "cannot apply '+' to boolean and number".into(),
            ))),
        },
        SampleProgram {
            name: "forever",
            description: "a loop whose condition never becomes false",
            statement: Stmt::while_loop(Expr::boolean(true), Stmt::DoNothing),
            environment: Environment::empty(),
            expected: None,
        },
    ]
}

/// Look up a sample program by name.
pub fn find(name: &str) -> Option<SampleProgram> {
    catalog().into_iter().find(|p| p.name == name)
}

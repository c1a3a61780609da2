//! SIMP denotational compiler: compiles the AST to composed closures.
//!
//! # Architecture
//!
//! Compilation walks the tree once, bottom-up, turning every node into a
//! closure built from the closures of its children:
//!
//! - an expression becomes `&Environment → Value`
//! - a statement becomes `Environment → Environment`
//!
//! The result holds no reference to the AST. It can be invoked any number
//! of times, against any environment, without walking the tree again.
//! Compiled programs are `Send + Sync` and cheap to clone.

pub mod compiler;

pub use compiler::{compile_expression, compile_statement, CompiledExpr, CompiledStmt};

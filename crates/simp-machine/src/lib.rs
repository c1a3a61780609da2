//! SIMP small-step reduction machine.
//!
//! Evaluation is a sequence of elementary rewrites. [`reduce_expression`] and
//! [`reduce_statement`] each perform exactly one step; [`Machine`] applies
//! them until the program reaches `do-nothing`, reporting every intermediate
//! state to a [`TraceSink`].

pub mod machine;
pub mod reduce;
pub mod trace;

pub use machine::Machine;
pub use reduce::{reduce_expression, reduce_statement};
pub use trace::{BufferTrace, TraceSink};

//! Step budget for bounding non-terminating programs.
//!
//! The reference semantics have no budget: a `while (true)` loop runs
//! forever. Hosts that cannot accept that attach a limit, and every strategy
//! calls [`Gas::tick`] once per unit of work it performs.

use crate::error::{EvalError, EvalResult};

/// Gas counter with an optional limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gas {
    used: u64,
    limit: Option<u64>,
}

impl Gas {
    /// A counter that never runs out.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// A counter that fails once more than `limit` units are consumed.
    pub fn limited(limit: u64) -> Self {
        Self {
            used: 0,
            limit: Some(limit),
        }
    }

    /// Consume one unit of gas. Returns error if exhausted.
    pub fn tick(&mut self) -> EvalResult<()> {
        self.used += 1;
        match self.limit {
            Some(limit) if self.used > limit => Err(EvalError::StepLimitExceeded { limit }),
            _ => Ok(()),
        }
    }

    /// Units consumed so far.
    pub fn used(&self) -> u64 {
        self.used
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }
}

impl From<Option<u64>> for Gas {
    fn from(limit: Option<u64>) -> Self {
        limit.map_or_else(Gas::unlimited, Gas::limited)
    }
}

//! Fleet query errors
//!
//! Two kinds with different batch semantics: invalid arguments abort
//! the whole batch, infeasible totals are a normal per-case outcome
//! reported as the `-1` sentinel.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    #[error("propulsion units cannot be negative, got {got}")]
    Negative { got: i64 },

    #[error("cannot build a fleet from zero propulsion units")]
    ZeroUnits,

    #[error("no fleet sums to an odd total of {got} units")]
    OddTotal { got: u64 },

    #[error("{got} units is below the smallest craft size of 4")]
    BelowMinimum { got: u64 },
}

impl FleetError {
    /// True for well-formed totals that simply have no decomposition.
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            FleetError::OddTotal { .. } | FleetError::BelowMinimum { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FleetError>;

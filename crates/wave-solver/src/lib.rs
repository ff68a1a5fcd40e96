//! wave-solver: total energy of an alternating wave sequence
//!
//! A caster releases n waves of energy x, -x, x, -x, ... The total
//! collapses to a parity check: adjacent waves cancel pairwise, so the
//! answer is x for odd n and 0 for even n. The batch driver reads a
//! case count followed by `x n` lines and prints one total per line.

mod batch;
mod energy;
mod error;

pub use batch::{solve_batch, BatchRunError, CaseResult, MAX_CASES, MIN_CASES};
pub use energy::{total_energy, WaveQuery, MAX_WAVES, MIN_BASE};
pub use error::{Result, WaveError};

//! Closed-form total for the alternating wave sequence

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaveError};

/// Smallest allowed base energy. There is no upper bound.
pub const MIN_BASE: u64 = 1;

/// Largest allowed wave count.
pub const MAX_WAVES: u64 = 10;

/// A validated wave query: base energy and wave count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveQuery {
    pub base: u64,
    pub waves: u64,
}

impl WaveQuery {
    /// Validate raw inputs into a query.
    ///
    /// Requires `base >= 1` and `1 <= waves <= 10`.
    pub fn new(base: i64, waves: i64) -> Result<Self> {
        if base < MIN_BASE as i64 {
            return Err(WaveError::BaseOutOfRange { got: base });
        }
        if waves < 1 || waves > MAX_WAVES as i64 {
            return Err(WaveError::WaveCountOutOfRange { got: waves });
        }
        Ok(Self {
            base: base as u64,
            waves: waves as u64,
        })
    }

    /// Total energy after all waves.
    ///
    /// The sequence is x, -x, x, ... so adjacent waves cancel pairwise
    /// and only the parity of the count survives.
    pub fn total_energy(&self) -> u64 {
        if self.waves % 2 == 0 {
            0
        } else {
            self.base
        }
    }
}

/// Validate and solve in one call.
pub fn total_energy(base: i64, waves: i64) -> Result<u64> {
    Ok(WaveQuery::new(base, waves)?.total_energy())
}

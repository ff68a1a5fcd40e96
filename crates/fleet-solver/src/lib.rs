//! fleet-solver: fleet size bounds for a propulsion-unit total
//!
//! A fleet mixes light crafts (4 propulsion units) and heavy crafts
//! (6 units). Given a total, find the fewest and the most crafts whose
//! units sum exactly to it, or report that no mix works. Both bounds
//! are closed-form remainder arithmetic; the batch driver reads a case
//! count followed by one total per line and prints `min max` or `-1`.

mod batch;
mod error;
mod range;

pub use batch::{solve_batch, BatchRunError, CaseOutcome, CaseResult, MAX_CASES, MIN_CASES};
pub use error::{FleetError, Result};
pub use range::{fleet_range, FleetRange, HEAVY_CRAFT_UNITS, LIGHT_CRAFT_UNITS};

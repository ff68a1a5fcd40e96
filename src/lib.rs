//! craft-solvers: batch solvers for two arithmetic coding-test problems
//!
//! - [`wave_solver`]: total energy of an alternating wave sequence.
//! - [`fleet_solver`]: min/max fleet sizes for a propulsion-unit total.
//! - [`batch_core`]: the line-oriented batch frame both drivers share.

pub use batch_core;
pub use fleet_solver;
pub use wave_solver;

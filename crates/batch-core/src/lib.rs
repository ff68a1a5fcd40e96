//! batch-core: line-oriented batch input shared by the solvers
//!
//! Both coding-test problems share the same outer format: a header line
//! with the number of cases, then one line per case. This crate parses
//! that frame and the integer fields inside it, with errors that name
//! the case number and field so a failed batch is diagnosable from the
//! message alone.

mod batch;
mod error;

pub use batch::{parse_int, split_fields, Batch};
pub use error::{BatchError, Result};

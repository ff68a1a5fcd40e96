//! Batch driver: a case count, then one total per line
//!
//! Infeasible totals print the `-1` sentinel and the batch continues;
//! invalid arguments (negative or zero totals, malformed lines) abort
//! the whole batch before any output is committed.

use batch_core::{parse_int, split_fields, Batch, BatchError};
use thiserror::Error;

use crate::error::FleetError;
use crate::range::{fleet_range, FleetRange};

/// Header bounds for a fleet batch.
pub const MIN_CASES: u64 = 1;
pub const MAX_CASES: u64 = 1000;

/// Outcome of one case. Infeasibility is output, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOutcome {
    Feasible(FleetRange),
    Infeasible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseResult {
    pub case: usize,
    pub outcome: CaseOutcome,
}

impl CaseResult {
    /// The plain-text output line: `"<min> <max>"` or `"-1"`.
    pub fn line(&self) -> String {
        match self.outcome {
            CaseOutcome::Feasible(range) => {
                format!("{} {}", range.min_crafts, range.max_crafts)
            }
            CaseOutcome::Infeasible => "-1".to_string(),
        }
    }

    /// The JSON output line for machine consumers.
    pub fn to_json(&self) -> serde_json::Value {
        match self.outcome {
            CaseOutcome::Feasible(range) => serde_json::json!({
                "case": self.case,
                "min": range.min_crafts,
                "max": range.max_crafts,
            }),
            CaseOutcome::Infeasible => serde_json::json!({
                "case": self.case,
                "feasible": false,
            }),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchRunError {
    #[error(transparent)]
    Parse(#[from] BatchError),

    #[error("case {case}: {source}")]
    Case {
        case: usize,
        #[source]
        source: FleetError,
    },
}

/// Parse and solve a whole batch.
pub fn solve_batch(input: &str) -> std::result::Result<Vec<CaseResult>, BatchRunError> {
    let batch = Batch::parse(input, MIN_CASES, MAX_CASES)?;

    let mut results = Vec::with_capacity(batch.len());
    for (case, line) in batch.cases() {
        let fields = split_fields(case, line, 1)?;
        let total: i64 = parse_int(case, "n", fields[0])?;
        let outcome = match fleet_range(total) {
            Ok(range) => CaseOutcome::Feasible(range),
            Err(err) if err.is_infeasible() => CaseOutcome::Infeasible,
            Err(source) => return Err(BatchRunError::Case { case, source }),
        };
        results.push(CaseResult { case, outcome });
    }
    Ok(results)
}

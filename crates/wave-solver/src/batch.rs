//! Batch driver: a case count, then one `x n` line per case

use batch_core::{parse_int, split_fields, Batch, BatchError};
use serde::Serialize;
use thiserror::Error;

use crate::energy::total_energy;
use crate::error::WaveError;

/// Header bounds for a wave batch.
pub const MIN_CASES: u64 = 1;
pub const MAX_CASES: u64 = 100;

/// One solved case. Serializes for the JSON output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    pub case: usize,
    pub energy: u64,
}

/// Any failure aborts the whole batch; there are no per-case sentinel
/// outcomes for waves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchRunError {
    #[error(transparent)]
    Parse(#[from] BatchError),

    #[error("case {case}: {source}")]
    Case {
        case: usize,
        #[source]
        source: WaveError,
    },
}

/// Parse and solve a whole batch.
///
/// All parsing and validation happens before the first case is solved,
/// so a malformed batch produces no partial results.
pub fn solve_batch(input: &str) -> std::result::Result<Vec<CaseResult>, BatchRunError> {
    let batch = Batch::parse(input, MIN_CASES, MAX_CASES)?;

    let mut results = Vec::with_capacity(batch.len());
    for (case, line) in batch.cases() {
        let fields = split_fields(case, line, 2)?;
        let base: i64 = parse_int(case, "x", fields[0])?;
        let waves: i64 = parse_int(case, "n", fields[1])?;
        let energy =
            total_energy(base, waves).map_err(|source| BatchRunError::Case { case, source })?;
        results.push(CaseResult { case, energy });
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_batch() {
        let results = solve_batch("3\n1 4\n2 5\n4 7\n").unwrap();
        let energies: Vec<u64> = results.iter().map(|r| r.energy).collect();
        assert_eq!(energies, vec![0, 2, 4]);
        assert_eq!(results[0].case, 1);
        assert_eq!(results[2].case, 3);
    }

    #[test]
    fn test_precondition_violation_names_case() {
        let err = solve_batch("2\n1 4\n3 11\n").unwrap_err();
        assert_eq!(
            err,
            BatchRunError::Case {
                case: 2,
                source: WaveError::WaveCountOutOfRange { got: 11 }
            }
        );
    }

    #[test]
    fn test_malformed_line_aborts() {
        let err = solve_batch("2\n1 4\n2\n").unwrap_err();
        assert!(matches!(
            err,
            BatchRunError::Parse(BatchError::FieldCount { case: 2, .. })
        ));

        let err = solve_batch("1\nx 4\n").unwrap_err();
        assert!(matches!(
            err,
            BatchRunError::Parse(BatchError::FieldNotInteger {
                case: 1,
                field: "x",
                ..
            })
        ));
    }

    #[test]
    fn test_count_mismatch_yields_no_results() {
        assert!(matches!(
            solve_batch("5\n1 1\n2 2\n").unwrap_err(),
            BatchRunError::Parse(BatchError::MissingCases {
                expected: 5,
                got: 2
            })
        ));
    }

    #[test]
    fn test_json_shape() {
        let result = CaseResult { case: 1, energy: 2 };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"case":1,"energy":2}"#
        );
    }
}

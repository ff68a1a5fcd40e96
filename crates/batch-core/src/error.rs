//! Batch parsing error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("empty input: expected a case count on the first line")]
    EmptyInput,

    #[error("invalid case count: expected an integer, got {token:?}")]
    CaseCountNotInteger { token: String },

    #[error("case count {got} out of range: must be between {min} and {max}")]
    CaseCountOutOfRange { got: i64, min: u64, max: u64 },

    #[error("expected {expected} cases, got only {got}")]
    MissingCases { expected: usize, got: usize },

    #[error("unexpected trailing input after {expected} cases: {line:?}")]
    TrailingInput { expected: usize, line: String },

    #[error("case {case}: expected {expected} fields, got {got}")]
    FieldCount {
        case: usize,
        expected: usize,
        got: usize,
    },

    #[error("case {case}: field '{field}': expected an integer, got {token:?}")]
    FieldNotInteger {
        case: usize,
        field: &'static str,
        token: String,
    },
}

pub type Result<T> = std::result::Result<T, BatchError>;

//! Batch frame parsing: header count plus one line per case

use std::str::FromStr;

use crate::error::{BatchError, Result};

/// A fully validated batch: exactly the declared number of case lines.
///
/// Parsing consumes the whole input up front, so a count mismatch or
/// trailing garbage is caught before any case is solved.
#[derive(Debug, Clone)]
pub struct Batch {
    cases: Vec<String>,
}

impl Batch {
    /// Parse a batch from raw text.
    ///
    /// The first line must hold the case count, bounded by
    /// `min_cases..=max_cases`. Exactly that many case lines must
    /// follow; blank lines after the last case are tolerated, anything
    /// else trailing is an error.
    pub fn parse(input: &str, min_cases: u64, max_cases: u64) -> Result<Self> {
        let mut lines = input.lines();

        let header = lines.next().map(str::trim).unwrap_or("");
        if header.is_empty() {
            return Err(BatchError::EmptyInput);
        }
        let count: i64 = header
            .parse()
            .map_err(|_| BatchError::CaseCountNotInteger {
                token: header.to_string(),
            })?;
        if count < min_cases as i64 || count > max_cases as i64 {
            return Err(BatchError::CaseCountOutOfRange {
                got: count,
                min: min_cases,
                max: max_cases,
            });
        }
        let expected = count as usize;

        let mut cases = Vec::with_capacity(expected);
        for line in lines {
            let line = line.trim();
            if cases.len() == expected {
                if line.is_empty() {
                    continue;
                }
                return Err(BatchError::TrailingInput {
                    expected,
                    line: line.to_string(),
                });
            }
            cases.push(line.to_string());
        }
        if cases.len() < expected {
            return Err(BatchError::MissingCases {
                expected,
                got: cases.len(),
            });
        }

        Ok(Self { cases })
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterate cases with their 1-based case numbers.
    pub fn cases(&self) -> impl Iterator<Item = (usize, &str)> {
        self.cases
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.as_str()))
    }
}

/// Split a case line into exactly `expected` whitespace-separated fields.
pub fn split_fields(case: usize, line: &str, expected: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != expected {
        return Err(BatchError::FieldCount {
            case,
            expected,
            got: fields.len(),
        });
    }
    Ok(fields)
}

/// Parse one integer field, reporting the case and field name on failure.
///
/// Overflowing tokens fail the same way as non-numeric ones.
pub fn parse_int<T>(case: usize, field: &'static str, token: &str) -> Result<T>
where
    T: FromStr,
{
    token.parse().map_err(|_| BatchError::FieldNotInteger {
        case,
        field,
        token: token.to_string(),
    })
}

//! Wave query validation errors

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveError {
    #[error("base energy must be at least 1, got {got}")]
    BaseOutOfRange { got: i64 },

    #[error("wave count must be between 1 and 10, got {got}")]
    WaveCountOutOfRange { got: i64 },
}

pub type Result<T> = std::result::Result<T, WaveError>;

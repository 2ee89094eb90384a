//! Error taxonomy shared by every stage of a generator run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FreqGenError {
    /// The station file needs more unique frequencies than the pool holds.
    #[error("ran out of frequencies to assign")]
    ExhaustedPool,
    #[error("radiomap line {line}: expected 3 comma-separated fields, found {fields}")]
    MalformedRadiomapRecord { line: usize, fields: usize },
    #[error("station line {line}: expected at least {min} fields, found {fields}")]
    MalformedStationLine {
        line: usize,
        fields: usize,
        min: usize,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FreqGenError>;

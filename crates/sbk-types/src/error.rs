use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid ball coordinate: over {over}, ball {ball}")]
    InvalidCoordinate { over: u32, ball: u8 },

    #[error("identifier must not be empty or whitespace")]
    EmptyIdentifier,

    #[error("unparseable coordinate: {0}")]
    UnparseableCoordinate(String),
}

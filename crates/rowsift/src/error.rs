//! Error types for the rowsift crate.

use thiserror::Error;

use crate::op::Op;

/// Errors that can occur when building or applying queries.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// Offset below zero.
    #[error("offset must be non-negative, got {0}")]
    NegativeOffset(i64),

    /// Limit below -1 (-1 means unbounded).
    #[error("limit must be -1 or greater, got {0}")]
    InvalidLimit(i64),

    /// A column name that the header does not contain.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// A positional column reference outside the header's extent.
    #[error("column index {index} out of range for {width}-column header")]
    ColumnOutOfRange { index: usize, width: usize },

    /// An operator paired with an operand shape it cannot evaluate, such as
    /// `In` with a plain literal.
    #[error("operator '{0}' cannot be evaluated against this operand")]
    OperandMismatch(Op),
}

/// Result type for rowsift operations.
pub type Result<T> = std::result::Result<T, QueryError>;

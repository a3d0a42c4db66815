//! Error types for the flocking engine.
//!
//! Every failure in this crate is a local precondition violation: the
//! engine never retries or self-heals, it reports the violation to the
//! caller of the offending operation.

use std::fmt;

/// Errors raised by vector algebra and world operations.
#[derive(Debug, Clone, PartialEq)]
pub enum FlockError {
    /// A binary vector operation was given operands of unequal dimension.
    DimensionMismatch { left: usize, right: usize },
    /// A scalar or constructor argument violated its contract.
    InvalidArgument(String),
    /// A component index fell outside `[0, dimension)`.
    IndexOutOfRange { index: usize, dimension: usize },
}

impl fmt::Display for FlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlockError::DimensionMismatch { left, right } => {
                write!(f, "vector dimensions differ: {} vs {}", left, right)
            }
            FlockError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            FlockError::IndexOutOfRange { index, dimension } => {
                write!(
                    f,
                    "component index {} out of range for dimension {}",
                    index, dimension
                )
            }
        }
    }
}

impl std::error::Error for FlockError {}

pub type Result<T> = std::result::Result<T, FlockError>;

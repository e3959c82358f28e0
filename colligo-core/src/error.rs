//! Core error types (deterministic only)

use core::fmt;

/// Core precondition failures (no I/O, no external failures)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreError {
    /// Removal or inspection on a container holding no elements
    EmptyContainer,
    /// Aggregate that needs at least one element received none
    EmptySequence,
    /// Arithmetic overflow in a checked aggregate
    Overflow,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::EmptyContainer => write!(f, "container is empty"),
            CoreError::EmptySequence => write!(f, "sequence is empty"),
            CoreError::Overflow => write!(f, "arithmetic overflow in aggregate"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;

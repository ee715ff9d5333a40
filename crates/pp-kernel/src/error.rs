//! Kernel error types

use thiserror::Error;

/// Error type for kernel operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    /// The plane normal does not have unit length
    #[error("Precondition violated: expected normalised plane normal, got length {length}")]
    PreconditionViolation {
        /// Length of the rejected normal
        length: f64,
    },

    /// The normal cannot be normalised (zero length or non-finite)
    #[error("Degenerate plane normal: {0:?}")]
    DegenerateNormal([f64; 3]),

    /// Input that cannot be projected
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

//! CLI errors

use pp_kernel::KernelError;

/// Errors surfaced to the command line
#[derive(Debug, Clone, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Kernel error: {0}")]
    Kernel(#[from] KernelError),
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

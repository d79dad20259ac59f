//! CLI-specific error types and exit code mapping.

use release_assets_core::UploadError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or environment validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The upload run failed.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// Writing the step output failed.
    #[error("Failed to write output: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// A failed run exits with 1; misuse of the command line exits with 2.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Upload(_) | Self::Output(_) => 1,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err.to_string())
    }
}

//! Fatal error type shared by every pipeline step.
//!
//! Every failure in the pipeline is terminal: steps return [`Result`] and
//! the driver handles the error exactly once, after cleanup has run. The
//! exit code separates configuration problems (sysexits EX_USAGE, 64)
//! from tool and runtime failures (1).

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BuildError>;

/// The single fatal error type for a build run.
#[derive(Debug, Error)]
pub enum BuildError {
    /// User or environment configuration problem: missing paths, an
    /// unreadable changelog, absent host tools.
    #[error("{0}")]
    Config(String),

    /// An external tool could not be started at all.
    #[error("failed to start {program}: {source}")]
    Spawn { program: String, source: io::Error },

    /// An external tool ran and reported failure.
    #[error("{program} failed with {status}")]
    ToolFailed { program: String, status: ExitStatus },

    /// A filesystem operation failed mid-pipeline.
    #[error("{context}: {source}")]
    Io { context: String, source: io::Error },
}

impl BuildError {
    /// Configuration error from any displayable message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// I/O failure with a human-readable context.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Process exit code for this failure: 64 for configuration and
    /// validation problems, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 64,
            Self::Spawn { .. } | Self::ToolFailed { .. } | Self::Io { .. } => 1,
        }
    }
}

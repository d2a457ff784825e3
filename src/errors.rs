//! Error taxonomy for the front end
//!
//! Workflows return `anyhow::Result` and raise a [`GtError`] wherever the
//! failure decides the process exit status. The binary downcasts at the
//! boundary through [`exit_code`].

use crate::artifacts::objects::primitive::Primitive;
use std::path::PathBuf;

/// Exit status for usage errors, preflight errors and anything untyped
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum GtError {
    /// Malformed invocation; nothing was executed
    #[error("{message}")]
    Usage { message: String },

    /// Primitive executables are missing from the exec path
    #[error("missing primitives in {}: {}", exec_path.display(), missing.join(", "))]
    Preflight {
        exec_path: PathBuf,
        missing: Vec<String>,
    },

    /// A primitive ran and exited with a non-zero status
    #[error("{primitive} exited with status {status}")]
    PrimitiveFailure { primitive: Primitive, status: i32 },

    /// A primitive could not be started at all
    #[error("failed to spawn {primitive} from {}", path.display())]
    PrimitiveSpawn {
        primitive: Primitive,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The commit object exists but HEAD could not be advanced to it
    #[error("commit {commit_id} was created but HEAD could not be updated")]
    HeadWrite {
        commit_id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl GtError {
    pub fn usage(message: impl Into<String>) -> Self {
        GtError::Usage {
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            // primitive statuses are passed through untouched
            GtError::PrimitiveFailure { status, .. } => *status,
            GtError::Usage { .. }
            | GtError::Preflight { .. }
            | GtError::PrimitiveSpawn { .. }
            | GtError::HeadWrite { .. } => EXIT_FAILURE,
        }
    }
}

/// Resolve the process exit status for a failed workflow
pub fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<GtError>()
        .map(GtError::exit_code)
        .unwrap_or(EXIT_FAILURE)
}

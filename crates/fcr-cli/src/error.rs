//! CLI error type and its exit codes.

use std::path::PathBuf;

use thiserror::Error;

use fcr_core::StoreError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("unknown kind '{0}'")]
    UnknownKind(String),

    #[error("failed to read state file '{}': {source}", .path.display())]
    ReadState {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write state file '{}': {source}", .path.display())]
    WriteState {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("state file '{}' is not a JSON array of objects: {source}", .path.display())]
    ParseState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    /// 0 success, 1 store error, 2 usage or kind error, 3 I/O error,
    /// 4 not found.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Store(err) if err.is_not_found() => 4,
            CliError::Store(_) | CliError::Render(_) => 1,
            CliError::UnknownKind(_) => 2,
            CliError::ReadState { .. } | CliError::WriteState { .. } | CliError::ParseState { .. } => 3,
        }
    }
}

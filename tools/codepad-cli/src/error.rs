use std::path::PathBuf;

use codepad_highlight::{ParseProfileError, ParseThemeError};

/// Everything that can stop a `codepad` command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Theme(#[from] ParseThemeError),

    #[error(transparent)]
    Profile(#[from] ParseProfileError),

    #[error("failed to serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

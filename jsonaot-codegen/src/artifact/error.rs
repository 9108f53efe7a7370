use std::path::PathBuf;

use thiserror::Error;

use super::Anchor;

/// Failure to produce or update the artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Append mode could not find an insertion point. The file is left untouched.
    #[error("anchor '{anchor}' not found in '{path}'")]
    MissingAnchor { path: PathBuf, anchor: Anchor },

    #[error("failed to read '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ArtifactError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::MissingAnchor { path, .. } | Self::Read { path, .. } | Self::Write { path, .. } => {
                path
            }
        }
    }
}

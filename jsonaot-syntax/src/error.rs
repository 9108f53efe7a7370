use std::path::PathBuf;

use thiserror::Error;

/// Result type for scanning operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The bundled grammar is incompatible with the tree-sitter runtime.
    #[error("failed to load the C# grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The scan root is missing or not a directory.
    #[error("source root '{path}' is not a directory")]
    MissingRoot { path: PathBuf },

    #[error("failed to read '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory entry could not be visited during discovery.
    #[error("failed to visit '{path}'")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The parser produced no tree at all.
    #[error("failed to parse '{path}'")]
    Parse { path: PathBuf },
}

impl Error {
    /// The file this error is about, when it concerns a single file.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::Language(_) => None,
            Error::MissingRoot { path }
            | Error::Read { path, .. }
            | Error::Walk { path, .. }
            | Error::Parse { path } => Some(path),
        }
    }
}

use std::path::{Path, PathBuf};

use super::{Manifest, parse::parse_manifest};
use crate::{Error, Result};

/// Represents a jsonaot.toml file and its parsed manifest.
#[derive(Debug)]
pub struct JsonAotToml {
    path: PathBuf,
    manifest: Manifest,
    loaded: bool,
}

impl JsonAotToml {
    /// Open and parse a jsonaot.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let manifest = parse_manifest(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            manifest,
            loaded: true,
        })
    }

    /// Open a jsonaot.toml file, falling back to defaults when it does not exist.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                manifest: Manifest::default(),
                loaded: false,
            })
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Whether the manifest came from disk rather than defaults.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::WriteMode;

    #[test]
    fn test_open_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let toml = JsonAotToml::open_or_default(temp.path().join("jsonaot.toml")).unwrap();

        assert!(!toml.is_loaded());
        assert_eq!(toml.manifest(), &Manifest::default());
    }

    #[test]
    fn test_open_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("jsonaot.toml");
        std::fs::write(&path, "[output]\nmode = \"append\"\n").unwrap();

        let toml = JsonAotToml::open_or_default(&path).unwrap();

        assert!(toml.is_loaded());
        assert_eq!(toml.manifest().output.mode, WriteMode::Append);
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = JsonAotToml::open(temp.path().join("missing.toml")).unwrap_err();

        assert!(matches!(*err, Error::Io { .. }));
    }
}

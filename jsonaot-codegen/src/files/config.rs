//! Default `jsonaot.toml`.

use std::path::{Path, PathBuf};

use jsonaot_core::{FileRules, GeneratedFile, Overwrite};
use jsonaot_manifest::DEFAULT_FILENAME;

/// A commented `jsonaot.toml` listing every key with its default.
pub struct ConfigFile {
    pub file_name: PathBuf,
    pub overwrite: Overwrite,
}

impl ConfigFile {
    pub fn new() -> Self {
        Self {
            file_name: PathBuf::from(DEFAULT_FILENAME),
            overwrite: Overwrite::IfMissing,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<PathBuf>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratedFile for ConfigFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
        }
    }

    fn render(&self) -> String {
        r#"# jsonaot configuration. Every key is optional.

[scan]
# Directory scanned recursively for source files
root = "."
# File extensions to scan, without the leading dot
extensions = ["cs"]
# Directory names skipped anywhere in the tree
exclude = ["bin", "obj"]
# Attributes whose name contains this token opt a type in (case-insensitive)
marker = "JsonA"

[output]
# Generated handler
artifact = "JSONHandler.cs"
# File that receives the global using lines with `jsonaot setup -s`
entry_point = "Program.cs"
# Default for `jsonaot run`: "overwrite" or "append"
mode = "overwrite"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use jsonaot_core::WriteResult;
    use jsonaot_manifest::Manifest;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_rendered_config_parses_to_defaults() {
        let manifest = Manifest::from_str(&ConfigFile::new().render()).unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_existing_config_is_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_FILENAME);
        std::fs::write(&path, "[scan]\nmarker = \"Custom\"\n").unwrap();

        let result = ConfigFile::new().write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[scan]\nmarker = \"Custom\"\n"
        );
    }

    #[test]
    fn test_config_written_when_missing() {
        let temp = TempDir::new().unwrap();

        let result = ConfigFile::new().write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert!(temp.path().join(DEFAULT_FILENAME).exists());
    }
}

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use tempfile::NamedTempFile;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let rules = self.rules();

        if rules.overwrite == Overwrite::IfMissing && path.exists() {
            return Ok(WriteResult::Skipped);
        }

        write_atomic(&path, &self.render())
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        Ok(WriteResult::Written)
    }
}

/// Replace `path` with `content` without leaving a half-written file behind.
///
/// The content is staged in a temporary file next to the target and renamed
/// over it. If the platform refuses the rename because the target exists, the
/// previous file is removed (a failure there is only logged) and the rename is
/// attempted once more.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(content.as_bytes())?;
    staged.as_file().sync_all()?;
    carry_permissions(path, staged.path())?;

    match staged.persist(path) {
        Ok(_) => Ok(()),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err.error, "rename over target refused");
            if let Err(remove_err) = fs::remove_file(path) {
                tracing::warn!(
                    path = %path.display(),
                    error = %remove_err,
                    "could not remove previous file, attempting to rewrite"
                );
            }
            err.file.persist(path).map(|_| ()).map_err(|e| e.error)
        }
    }
}

/// Temporary files are created private; give the staged file the target's
/// permissions, or ordinary read/write permissions for a new file.
fn carry_permissions(target: &Path, staged: &Path) -> io::Result<()> {
    match fs::metadata(target) {
        Ok(meta) => fs::set_permissions(staged, meta.permissions()),
        Err(_) => {
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(staged, fs::Permissions::from_mode(0o644))
            }
            #[cfg(not(unix))]
            {
                Ok(())
            }
        }
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules for files the generator owns completely.
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Rules for files that are only created once and then belong to the user.
    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist (user-owned configuration)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self::always_overwrite()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Note {
        rules: FileRules,
        body: &'static str,
    }

    impl GeneratedFile for Note {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("notes").join("note.txt")
        }

        fn rules(&self) -> FileRules {
            self.rules
        }

        fn render(&self) -> String {
            self.body.to_string()
        }
    }

    #[test]
    fn test_write_atomic_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_atomic(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_atomic_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_atomic(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_atomic(&path, "a much longer first version").unwrap();
        write_atomic(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_atomic_leaves_no_staging_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_atomic(&path, "one").unwrap();
        write_atomic(&path, "two").unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().flatten().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_new_file_is_not_private() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_atomic(&path, "content").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_generated_file_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let note = Note {
            rules: FileRules::always_overwrite(),
            body: "updated",
        };
        let path = note.path(temp.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "original").unwrap();

        let result = note.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_generated_file_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let note = Note {
            rules: FileRules::if_missing(),
            body: "new content",
        };

        let result = note.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(note.path(temp.path())).unwrap(),
            "new content"
        );
    }

    #[test]
    fn test_generated_file_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let note = Note {
            rules: FileRules::if_missing(),
            body: "should not write",
        };
        let path = note.path(temp.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "original").unwrap();

        let result = note.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }
}

//! Source discovery.
//!
//! The whole tree is read into memory before any parsing starts. Files that
//! cannot be read are reported next to the files that could, so one bad file
//! never hides the rest of the project.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use jsonaot_core::eq_ignore_case;
use walkdir::{DirEntry, WalkDir};

use crate::{Error, Result};

/// A source file read from disk, not yet decoded or parsed.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Which files take part in a scan.
#[derive(Debug, Clone)]
pub struct SourceFilter {
    extensions: Vec<String>,
    exclude: Vec<String>,
}

impl SourceFilter {
    /// Create a filter accepting `extensions` (without dots) and skipping
    /// directories named in `exclude`.
    pub fn new(extensions: Vec<String>, exclude: Vec<String>) -> Self {
        Self {
            extensions,
            exclude,
        }
    }

    /// Check whether a file path has one of the accepted extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| self.extensions.iter().any(|e| eq_ignore_case(e, ext)))
    }

    /// Check whether a directory name is excluded.
    pub fn skips_dir(&self, name: &OsStr) -> bool {
        name.to_str()
            .is_some_and(|name| self.exclude.iter().any(|e| e == name))
    }

    fn keeps(&self, entry: &DirEntry) -> bool {
        entry.depth() == 0 || !entry.file_type().is_dir() || !self.skips_dir(entry.file_name())
    }
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self::new(
            vec!["cs".to_string()],
            vec!["bin".to_string(), "obj".to_string()],
        )
    }
}

/// Files read during discovery, plus the entries that could not be read.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<SourceFile>,
    pub failures: Vec<Error>,
}

/// Read every accepted file under `root` in file-name order.
///
/// # Errors
///
/// Fails only when `root` itself is not a directory; per-entry problems are
/// collected in [`Discovery::failures`].
pub fn discover(root: &Path, filter: &SourceFilter) -> Result<Discovery> {
    if !root.is_dir() {
        return Err(Error::MissingRoot {
            path: root.to_path_buf(),
        });
    }

    let mut discovery = Discovery::default();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| filter.keeps(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                let path = source.path().unwrap_or(root).to_path_buf();
                tracing::warn!(path = %path.display(), error = %source, "skipping unreadable entry");
                discovery.failures.push(Error::Walk { path, source });
                continue;
            }
        };

        if !entry.file_type().is_file() || !filter.accepts(entry.path()) {
            continue;
        }

        let path = entry.into_path();
        match std::fs::read(&path) {
            Ok(bytes) => {
                tracing::debug!(path = %path.display(), bytes = bytes.len(), "discovered source file");
                discovery.files.push(SourceFile { path, bytes });
            }
            Err(source) => {
                tracing::warn!(path = %path.display(), error = %source, "skipping unreadable file");
                discovery.failures.push(Error::Read { path, source });
            }
        }
    }

    Ok(discovery)
}

//! Writing the artifact to disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use jsonaot_core::write_atomic;
use jsonaot_manifest::WriteMode;

use super::{ArtifactError, merge::splice, render::render_fresh};
use crate::Fragments;

/// Writes fragments into the artifact at a fixed path.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    path: PathBuf,
}

impl ArtifactWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Compute the artifact text `mode` would write, without touching the file.
    ///
    /// # Errors
    ///
    /// In append mode, fails if the artifact cannot be read or lacks an anchor.
    pub fn preview(&self, mode: WriteMode, fragments: &Fragments) -> Result<String, ArtifactError> {
        match mode {
            WriteMode::Overwrite => Ok(render_fresh(fragments)),
            WriteMode::Append => {
                let existing =
                    fs::read_to_string(&self.path).map_err(|source| ArtifactError::Read {
                        path: self.path.clone(),
                        source,
                    })?;
                splice(&existing, fragments).map_err(|anchor| ArtifactError::MissingAnchor {
                    path: self.path.clone(),
                    anchor,
                })
            }
        }
    }

    /// Write `fragments` into the artifact.
    ///
    /// Overwrite mode replaces the file; append mode splices into the existing
    /// content. Either way the new content is staged and renamed into place,
    /// so a failed merge leaves the previous file as it was.
    pub fn write(&self, mode: WriteMode, fragments: &Fragments) -> Result<(), ArtifactError> {
        let content = self.preview(mode, fragments)?;
        write_atomic(&self.path, &content).map_err(|source| ArtifactError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(
            path = %self.path.display(),
            mode = %mode,
            types = fragments.len(),
            "wrote artifact"
        );
        Ok(())
    }
}

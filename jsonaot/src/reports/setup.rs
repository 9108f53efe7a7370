//! Setup command report.

use std::path::PathBuf;

use jsonaot_codegen::files::ImportOutcome;
use jsonaot_core::WriteResult;

use super::output::{Output, Report};

/// Report data from `jsonaot setup`.
#[derive(Debug)]
pub struct SetupReport {
    /// The artifact that was written.
    pub artifact: PathBuf,
    /// Entry point and what happened to it, when imports were requested.
    pub imports: Option<(PathBuf, ImportOutcome)>,
    /// Config file and whether it was written, when requested.
    pub config: Option<(PathBuf, WriteResult)>,
}

impl Report for SetupReport {
    fn render(&self, out: &mut dyn Output) {
        out.added_item(&format!("{} created", self.artifact.display()));

        if let Some((path, outcome)) = &self.imports {
            match outcome {
                ImportOutcome::Added => {
                    out.added_item(&format!("{} now imports JSONHandler", path.display()))
                }
                ImportOutcome::AlreadyPresent => {
                    out.list_item(&format!("{} already imports JSONHandler", path.display()))
                }
                ImportOutcome::Missing => out.warning(&format!(
                    "{} not found, imports not added",
                    path.display()
                )),
            }
        }

        if let Some((path, result)) = &self.config {
            match result {
                WriteResult::Written => out.added_item(&format!("{} created", path.display())),
                WriteResult::Skipped => {
                    out.list_item(&format!("{} exists, left unchanged", path.display()))
                }
            }
        }
    }
}

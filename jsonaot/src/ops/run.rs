//! Run operation - scan the tree and merge registrations into the handler.

use std::path::PathBuf;

use eyre::{Context, Result};
use jsonaot_codegen::{
    ArtifactWriter,
    pipeline::{LoggingPlugin, Pipeline},
};
use jsonaot_manifest::{ScanConfig, WriteMode};

use crate::reports::RunReport;

/// Options for the run operation.
pub struct RunOptions {
    pub artifact: PathBuf,
    pub mode: WriteMode,
    /// Render the artifact without writing it.
    pub dry_run: bool,
}

/// Execute the run operation.
///
/// Runs the scan pipeline and writes (or previews) the artifact in the
/// requested mode. In append mode a missing anchor fails the operation
/// and the artifact is left as it was.
pub fn run(scan: ScanConfig, opts: RunOptions) -> Result<RunReport> {
    let pipeline = Pipeline::new().plugin(LoggingPlugin::new());
    let mut ctx = pipeline.run(scan).wrap_err("Pipeline failed")?;

    let fragments = ctx.take_fragments()?;
    let writer = ArtifactWriter::new(&opts.artifact);

    let preview = if opts.dry_run {
        Some(
            writer
                .preview(opts.mode, &fragments)
                .wrap_err("Failed to render the handler file")?,
        )
    } else {
        writer
            .write(opts.mode, &fragments)
            .wrap_err("Failed to update the handler file")?;
        None
    };

    Ok(RunReport {
        artifact: opts.artifact,
        mode: opts.mode,
        files: ctx.units.len(),
        names: ctx.names,
        diagnostics: ctx.diagnostics,
        preview,
    })
}

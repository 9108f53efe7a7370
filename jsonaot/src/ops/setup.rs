//! Setup operation - write the empty handler and wire up the entry point.

use std::path::Path;

use eyre::{Context, Result};
use jsonaot_codegen::{
    ArtifactWriter, Fragments,
    files::{ConfigFile, add_imports},
};
use jsonaot_core::GeneratedFile;
use jsonaot_manifest::{Manifest, WriteMode};

use crate::reports::SetupReport;

/// Options for the setup operation.
pub struct SetupOptions<'a> {
    /// Artifact path, overriding the manifest.
    pub artifact: Option<&'a Path>,
    /// Prepend the import lines to the entry point.
    pub entry_point: bool,
    /// Also write a default `jsonaot.toml` here when none exists.
    pub config: Option<&'a Path>,
}

/// Execute the setup operation.
///
/// The artifact is rendered with no registered types, so a later append
/// finds both anchors in place.
pub fn setup(manifest: &Manifest, opts: SetupOptions) -> Result<SetupReport> {
    let artifact = opts
        .artifact
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest.output.artifact.clone());

    ArtifactWriter::new(&artifact)
        .write(WriteMode::Overwrite, &Fragments::default())
        .wrap_err("Failed to write the handler file")?;

    let imports = if opts.entry_point {
        let path = manifest.output.entry_point.clone();
        let outcome = add_imports(&path)?;
        Some((path, outcome))
    } else {
        None
    };

    let config = match opts.config {
        Some(path) => {
            let file = ConfigFile::new().with_file_name(path);
            let result = file
                .write(Path::new(""))
                .wrap_err("Failed to write the config file")?;
            Some((file.path(Path::new("")), result))
        }
        None => None,
    };

    Ok(SetupReport {
        artifact,
        imports,
        config,
    })
}

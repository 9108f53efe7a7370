//! Run command report.

use std::path::PathBuf;

use jsonaot_codegen::pipeline::{Diagnostic, Severity};
use jsonaot_manifest::WriteMode;

use super::output::{Output, Report};

/// Report data from `jsonaot run`.
#[derive(Debug)]
pub struct RunReport {
    pub artifact: PathBuf,
    pub mode: WriteMode,
    /// Number of files parsed.
    pub files: usize,
    /// Registered type names, in artifact order.
    pub names: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
    /// Artifact text when running with `--dry-run`.
    pub preview: Option<String>,
}

impl Report for RunReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(&self.diagnostics, out);

        if let Some(text) = &self.preview {
            out.divider(&self.artifact.display().to_string());
            out.preformatted(text);
            out.divider("Summary");
            out.preformatted(&format!(
                "{} type(s) would be written ({} mode)",
                self.names.len(),
                self.mode
            ));
            return;
        }

        out.key_value("Scanned", &format!("{} file(s)", self.files));
        if self.names.is_empty() {
            out.preformatted("No [JsonAot] types found.");
        } else {
            out.section("Registered");
            for name in &self.names {
                out.added_item(name);
            }
        }
        out.newline();
        out.preformatted(&format!(
            "{} updated successfully ({} mode)",
            self.artifact.display(),
            self.mode
        ));
    }
}

/// Warnings go to the warning channel; informational notes are listed.
pub(super) fn render_diagnostics(diagnostics: &[Diagnostic], out: &mut dyn Output) {
    for diag in diagnostics.iter().filter(|d| d.severity.is_warning()) {
        out.warning(&located(diag));
    }

    let notes: Vec<_> = diagnostics
        .iter()
        .filter(|d| matches!(d.severity, Severity::Info))
        .collect();
    if !notes.is_empty() {
        out.section("Notes");
        for diag in notes {
            out.list_item(&located(diag));
        }
        out.newline();
    }
}

fn located(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}: {}", loc, diag.message),
        None => diag.message.clone(),
    }
}

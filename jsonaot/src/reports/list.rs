//! List command report.

use jsonaot_codegen::pipeline::{Diagnostic, FoundType};
use serde::Serialize;

use super::{
    output::{Output, Report},
    run::render_diagnostics,
};

/// Report data from `jsonaot list`.
#[derive(Debug, Serialize)]
pub struct ListReport {
    /// Number of files parsed.
    pub files: usize,
    /// Every annotated type, including case-insensitive duplicates.
    pub types: Vec<FoundType>,
    /// Names that would be registered.
    pub names: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ListReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(&self.diagnostics, out);

        if self.types.is_empty() {
            out.preformatted(&format!("No [JsonAot] types found in {} file(s)", self.files));
            return;
        }

        out.section(&format!("Types ({})", self.types.len()));
        for ty in &self.types {
            let qualified = if ty.namespace.is_empty() {
                ty.name.clone()
            } else {
                format!("{}.{}", ty.namespace, ty.name)
            };
            out.list_item(&format!(
                "{} {} [{}] ({})",
                ty.kind,
                qualified,
                ty.annotation,
                ty.location()
            ));
        }
        out.newline();
        out.key_value("Registered names", &self.names.join(", "));
    }
}

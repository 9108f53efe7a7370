//! Compilation context passed through pipeline phases.

use std::path::PathBuf;

use eyre::{Result, eyre};
use jsonaot_manifest::ScanConfig;
use jsonaot_syntax::{Marker, SourceFile, SourceUnit};
use serde::Serialize;

use super::diagnostic::{Diagnostic, Severity};
use crate::Fragments;

/// A marker-annotated type found during collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundType {
    /// Type name as declared.
    pub name: String,
    /// Dotted namespace path, empty for the global namespace.
    pub namespace: String,
    /// Declaration keyword (`class`, `record`, ...).
    pub kind: &'static str,
    /// The attribute that matched the marker, as written.
    pub annotation: String,
    pub path: PathBuf,
    /// 1-based line of the declaration.
    pub line: usize,
}

impl FoundType {
    /// `path:line` of the declaration.
    pub fn location(&self) -> String {
        format!("{}:{}", self.path.display(), self.line)
    }
}

/// Context passed through all pipeline phases.
///
/// Each phase fills in its part and leaves the earlier parts in place, so a
/// finished context can be inspected for every intermediate result.
#[derive(Debug)]
pub struct CompilationContext {
    /// Scan settings the pipeline was started with.
    pub scan: ScanConfig,
    /// Marker built from `scan.marker`.
    pub marker: Marker,
    /// Files read from disk (populated by LoadPhase, drained by ParsePhase).
    pub sources: Vec<SourceFile>,
    /// Parsed files (populated by ParsePhase).
    pub units: Vec<SourceUnit>,
    /// Annotated types in discovery order (populated by CollectPhase).
    pub found: Vec<FoundType>,
    /// Unique type names (populated by DedupPhase).
    pub names: Vec<String>,
    /// Generated fragments (populated by SynthesizePhase).
    pub fragments: Option<Fragments>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from scan settings.
    pub fn new(scan: ScanConfig) -> Self {
        let marker = Marker::new(scan.marker.clone());
        Self {
            scan,
            marker,
            sources: Vec::new(),
            units: Vec::new(),
            found: Vec::new(),
            names: Vec::new(),
            fragments: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the fragments out of the context.
    ///
    /// # Errors
    ///
    /// Fails if SynthesizePhase has not run.
    pub fn take_fragments(&mut self) -> Result<Fragments> {
        self.fragments
            .take()
            .ok_or_else(|| eyre!("fragments not set - did SynthesizePhase run?"))
    }
}

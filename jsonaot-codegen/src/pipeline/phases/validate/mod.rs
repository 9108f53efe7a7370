//! Validate phase - runs lints on the collected types.

mod lint;
mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{DuplicateNameLint, NearMissLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that checks the collected types using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self::empty()
            .with_lint(NearMissLint)
            .with_lint(DuplicateNameLint)
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check collected types and report suspicious matches"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        tracing::debug!(lints = ?self.lint_names(), types = ctx.found.len(), "running lints");
        for lint in &self.lints {
            lint.check(&ctx.found, &mut ctx.diagnostics);
        }

        // Fail if there are any errors (warnings are allowed)
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

//! Load phase - reads source files from disk.

use eyre::{Result, WrapErr};
use jsonaot_syntax::{SourceFilter, discover};

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Phase that reads every accepted file under the scan root.
///
/// Entries that cannot be read become warnings; only a missing root is fatal.
pub struct LoadPhase;

impl Phase for LoadPhase {
    fn name(&self) -> &'static str {
        "load"
    }

    fn description(&self) -> &'static str {
        "Read source files from the scan root"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let filter = SourceFilter::new(ctx.scan.extensions.clone(), ctx.scan.exclude.clone());
        let discovery = discover(&ctx.scan.root, &filter)
            .wrap_err_with(|| format!("failed to scan '{}'", ctx.scan.root.display()))?;

        for failure in discovery.failures {
            let mut diagnostic = Diagnostic::warning(self.name(), failure.to_string());
            if let Some(path) = failure.path() {
                diagnostic = diagnostic.at(path.display().to_string());
            }
            ctx.add_diagnostic(diagnostic);
        }

        ctx.sources = discovery.files;
        Ok(())
    }
}

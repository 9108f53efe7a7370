use eyre::Result;

use super::CompilationContext;

/// One step of the scan pipeline.
///
/// A phase reads what earlier phases left in the [`CompilationContext`] and
/// adds its own results. Per-file problems belong in `ctx.diagnostics`; an
/// `Err` stops the whole run.
pub trait Phase: Send + Sync {
    /// Short identifier, reported in diagnostics and to plugins.
    fn name(&self) -> &'static str;

    /// One-line summary, logged at debug level when the phase starts.
    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}

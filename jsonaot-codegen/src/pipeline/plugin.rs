use eyre::Result;

use super::CompilationContext;

/// Observer around every phase of a [`Pipeline`](super::Pipeline).
///
/// Both hooks default to doing nothing. Returning `Err` from either one
/// aborts the run.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}

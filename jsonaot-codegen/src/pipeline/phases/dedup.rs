//! Dedup phase - one name per case-insensitive value.

use eyre::Result;

use crate::{
    names::dedup,
    pipeline::{CompilationContext, Phase},
};

pub struct DedupPhase;

impl Phase for DedupPhase {
    fn name(&self) -> &'static str {
        "dedup"
    }

    fn description(&self) -> &'static str {
        "Remove case-insensitive duplicate type names"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.names = dedup(ctx.found.iter().map(|f| f.name.as_str()));
        tracing::debug!(found = ctx.found.len(), unique = ctx.names.len(), "deduplicated names");
        Ok(())
    }
}

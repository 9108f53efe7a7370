//! Synthesize phase - generates fragments for every name.

use eyre::Result;

use crate::{
    Fragments,
    pipeline::{CompilationContext, Phase},
};

pub struct SynthesizePhase;

impl Phase for SynthesizePhase {
    fn name(&self) -> &'static str {
        "synthesize"
    }

    fn description(&self) -> &'static str {
        "Generate context and lookup table fragments"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.fragments = Some(Fragments::synthesize(&ctx.names));
        Ok(())
    }
}

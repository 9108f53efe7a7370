//! Plugin that logs phase progress.

use std::{sync::Mutex, time::Instant};

use eyre::Result;

use super::{CompilationContext, Plugin};

/// Logs the start and end of every phase with its duration and the state of
/// the context afterwards.
#[derive(Debug, Default)]
pub struct LoggingPlugin {
    started: Mutex<Option<Instant>>,
}

impl LoggingPlugin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plugin for LoggingPlugin {
    fn name(&self) -> &'static str {
        "logging"
    }

    fn on_before_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        tracing::info!(phase, "phase started");
        if let Ok(mut started) = self.started.lock() {
            *started = Some(Instant::now());
        }
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let elapsed = self
            .started
            .lock()
            .ok()
            .and_then(|mut started| started.take())
            .map(|start| start.elapsed());

        tracing::info!(
            phase,
            elapsed = ?elapsed,
            files = ctx.units.len(),
            found = ctx.found.len(),
            names = ctx.names.len(),
            diagnostics = ctx.diagnostics.len(),
            "phase finished"
        );
        Ok(())
    }
}

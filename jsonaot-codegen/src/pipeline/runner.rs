//! Pipeline orchestrator.

use eyre::Result;
use jsonaot_manifest::ScanConfig;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{CollectPhase, DedupPhase, LoadPhase, ParsePhase, SynthesizePhase, ValidatePhase},
};

/// Runs load, parse, collect, validate, dedup and synthesize in order.
/// Plugins see every phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(LoggingPlugin::new());
///
/// let ctx = pipeline.run(scan)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Append a phase after the built-in ones.
    #[cfg(test)]
    pub(crate) fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline over the tree described by `scan`.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally, e.g. when the scan root
    /// does not exist. Unreadable or unparsable files are not errors.
    pub fn run(&self, scan: ScanConfig) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(scan);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(LoadPhase),
            Box::new(ParsePhase),
            Box::new(CollectPhase),
            Box::new(ValidatePhase::new()),
            Box::new(DedupPhase),
            Box::new(SynthesizePhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::debug!(phase = phase_name, "{}", phase.description());

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use tempfile::TempDir;

    use super::*;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl CountingPlugin {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let before = Arc::new(AtomicUsize::new(0));
            let after = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    before_count: before.clone(),
                    after_count: after.clone(),
                },
                before,
                after,
            )
        }
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct MarkPhase;

    impl Phase for MarkPhase {
        fn name(&self) -> &'static str {
            "mark"
        }

        fn description(&self) -> &'static str {
            "Record that user phases run last"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            let synthesized = ctx.fragments.is_some();
            ctx.add_warning("mark", format!("synthesized={}", synthesized));
            Ok(())
        }
    }

    fn scan_of(temp: &TempDir) -> ScanConfig {
        ScanConfig {
            root: temp.path().to_path_buf(),
            ..ScanConfig::default()
        }
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("Order.cs"),
            "[JsonAot] public class Order { }",
        )
        .unwrap();

        let ctx = Pipeline::new().run(scan_of(&temp)).unwrap();

        assert!(ctx.sources.is_empty());
        assert_eq!(ctx.units.len(), 1);
        assert_eq!(ctx.names, vec!["Order"]);
        assert_eq!(ctx.fragments.map(|f| f.len()), Some(1));
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let temp = TempDir::new().unwrap();
        let (plugin, before_count, after_count) = CountingPlugin::new();

        let pipeline = Pipeline::new().plugin(plugin);
        let _ = pipeline.run(scan_of(&temp)).unwrap();

        // 6 built-in phases = 6 before + 6 after hooks
        assert_eq!(before_count.load(Ordering::SeqCst), 6);
        assert_eq!(after_count.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_user_phase_runs_after_builtins() {
        let temp = TempDir::new().unwrap();

        let ctx = Pipeline::new().phase(MarkPhase).run(scan_of(&temp)).unwrap();

        let marks: Vec<_> = ctx.warnings().map(|d| d.message.as_str()).collect();
        assert_eq!(marks, vec!["synthesized=true"]);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let scan = ScanConfig {
            root: temp.path().join("missing"),
            ..ScanConfig::default()
        };

        assert!(Pipeline::new().run(scan).is_err());
    }
}

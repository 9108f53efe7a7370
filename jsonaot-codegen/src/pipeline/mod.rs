//! Scan pipeline.
//!
//! A [`Pipeline`] runs the built-in phases over a scan configuration and
//! returns the [`CompilationContext`] they filled in:
//!
//! - load → read every accepted source file under the root
//! - parse → build a declaration tree per file
//! - collect → walk the trees for marker-annotated types
//! - validate → lint the collected types
//! - dedup → one name per case-insensitive value
//! - synthesize → context and entry fragments per name
//!
//! Problems with single files never stop the pipeline; they are recorded as
//! diagnostics and the file is skipped.
//!
//! # Example
//!
//! ```ignore
//! use jsonaot_codegen::pipeline::{LoggingPlugin, Pipeline};
//!
//! let mut ctx = Pipeline::new().plugin(LoggingPlugin::new()).run(scan)?;
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//! let fragments = ctx.take_fragments()?;
//! ```

mod context;
mod diagnostic;
mod logging;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::{CompilationContext, FoundType};
pub use diagnostic::{Diagnostic, Severity};
pub use logging::LoggingPlugin;
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;

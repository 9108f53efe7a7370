//! Built-in pipeline phases.
//!
//! - [`LoadPhase`] - reads accepted source files from the scan root
//! - [`ParsePhase`] - parses each file into a declaration tree
//! - [`CollectPhase`] - walks the trees for marker-annotated types
//! - [`ValidatePhase`] - lints the collected types
//! - [`DedupPhase`] - reduces the names to one per case-insensitive value
//! - [`SynthesizePhase`] - generates the fragments for every name

mod collect;
mod dedup;
mod load;
mod parse;
mod synthesize;
mod validate;

pub use collect::CollectPhase;
pub use dedup::DedupPhase;
pub use load::LoadPhase;
pub use parse::ParsePhase;
pub use synthesize::SynthesizePhase;
pub use validate::{DuplicateNameLint, Lint, NearMissLint, ValidatePhase};

//! Scan pipeline and code generation for the jsonaot generator.
//!
//! # Module Organization
//!
//! - [`pipeline`] - Phases from source discovery to synthesized fragments
//! - [`fragment`] - Template synthesis: per-type context and entry fragments
//! - [`names`] - Case-insensitive, order-preserving name deduplication
//! - [`artifact`] - The generated handler file: fresh render and append merge
//! - [`files`] - Other project files (entry point imports, default config)
//! - [`builder`] - Indented code building

pub mod artifact;
pub mod builder;
pub mod files;
pub mod fragment;
pub mod names;
pub mod pipeline;

pub use artifact::{Anchor, ArtifactError, ArtifactWriter};
pub use fragment::{Fragment, FragmentKind, Fragments};

//! The generated `JSONHandler.cs` artifact.
//!
//! - [`render_fresh`] - overwrite mode, the whole file from templates
//! - [`splice`] - append mode, fragments inserted after the [`Anchor`] lines
//! - [`ArtifactWriter`] - either mode against a file on disk

mod anchor;
mod error;
mod merge;
mod render;
pub mod template;
mod writer;

pub use anchor::Anchor;
pub use error::ArtifactError;
pub use merge::splice;
pub use render::render_fresh;
pub use writer::ArtifactWriter;

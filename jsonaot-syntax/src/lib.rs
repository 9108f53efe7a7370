//! C# source scanning for the jsonaot generator.
//!
//! # Module Organization
//!
//! - [`source`] - Source discovery: which files are read from the project tree
//! - [`decl`] - Declaration model: namespaces, type declarations, attributes
//! - [`parser`] - Source parser: C# text to a [`SourceUnit`] via tree-sitter
//! - [`walker`] - Declaration walker: marker-annotated types in document order

pub mod decl;
mod error;
pub mod parser;
pub mod source;
pub mod walker;

pub use decl::{Annotation, Member, Namespace, TypeDecl, TypeKind};
pub use error::{Error, Result};
pub use parser::{SourceParser, SourceUnit};
pub use source::{Discovery, SourceFile, SourceFilter, discover};
pub use walker::{Marker, Match, Walk, walk};

//! Core utilities and types for the jsonaot generator.
//!
//! This crate provides the file-writing rules and string helpers shared
//! by the scanner, the code generator and the CLI.

mod file;
mod text;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult, write_atomic};
// String utilities
pub use text::{contains_ignore_case, eq_ignore_case, fold_case, simple_name};

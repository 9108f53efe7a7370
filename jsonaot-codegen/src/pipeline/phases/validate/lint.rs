//! Lint trait for collected types.

use crate::pipeline::{Diagnostic, FoundType};

/// A lint that checks the collected types for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the collected types and add any diagnostics.
    fn check(&self, found: &[FoundType], diagnostics: &mut Vec<Diagnostic>);
}

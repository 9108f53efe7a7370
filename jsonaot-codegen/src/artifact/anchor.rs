//! Insertion anchors of an existing artifact.

use std::fmt;

use jsonaot_core::contains_ignore_case;

/// A line of the artifact after which fragments are inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Start of the contextualization region; context fragments follow it.
    Context,
    /// Lookup table opener; entry fragments follow it.
    Table,
}

impl Anchor {
    pub const ALL: [Anchor; 2] = [Anchor::Context, Anchor::Table];

    /// The text searched for, case-insensitively, in each line.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Context => "#region ContextualizationOfClasses",
            Self::Table => "static readonly Dictionary<Type, JsonTypeInfo>",
        }
    }

    /// Index of the first line containing this anchor.
    pub fn find(&self, lines: &[&str]) -> Option<usize> {
        lines
            .iter()
            .position(|line| contains_ignore_case(line, self.marker()))
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

//! Artifact write modes.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How `jsonaot run` merges new registrations into the handler file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Regenerate the whole file from the scan results
    #[default]
    Overwrite,
    /// Insert new registrations into the existing file's marked regions
    Append,
}

impl WriteMode {
    /// Returns the mode identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteMode::Overwrite => "overwrite",
            WriteMode::Append => "append",
        }
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WriteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overwrite" | "o" => Ok(WriteMode::Overwrite),
            "append" | "a" => Ok(WriteMode::Append),
            _ => Err(format!(
                "unknown write mode '{}', expected 'overwrite' or 'append'",
                s
            )),
        }
    }
}

//! Configuration types and parsing for jsonaot.toml files.

mod file;
mod mode;
mod parse;

use std::path::PathBuf;

pub use file::JsonAotToml;
pub use mode::WriteMode;
pub use parse::parse_manifest;
use serde::Deserialize;

/// Conventional name of the configuration file.
pub const DEFAULT_FILENAME: &str = "jsonaot.toml";

/// Root manifest for jsonaot.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Which files are scanned and which attribute opts a type in
    #[serde(default)]
    pub scan: ScanConfig,

    /// Where generated code goes
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[scan]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Directory scanned recursively
    pub root: PathBuf,

    /// File extensions (without the leading dot)
    pub extensions: Vec<String>,

    /// Directory names skipped wherever they appear in the tree
    pub exclude: Vec<String>,

    /// Token an attribute name must contain (case-insensitive)
    pub marker: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: vec!["cs".to_string()],
            exclude: vec!["bin".to_string(), "obj".to_string()],
            marker: "JsonA".to_string(),
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Generated handler file
    pub artifact: PathBuf,

    /// Program file that receives the global using lines during setup
    pub entry_point: PathBuf,

    /// Default write mode for `jsonaot run`
    pub mode: WriteMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            artifact: PathBuf::from("JSONHandler.cs"),
            entry_point: PathBuf::from("Program.cs"),
            mode: WriteMode::default(),
        }
    }
}

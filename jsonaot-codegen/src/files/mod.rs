//! Project files written alongside the artifact.

mod config;
mod entry_point;

pub use config::ConfigFile;
pub use entry_point::{IMPORT_LINES, ImportOutcome, add_imports};

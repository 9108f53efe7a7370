// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration for the jsonaot generator.
//!
//! The configuration lives in an optional `jsonaot.toml` next to the project.
//! Every key has a default, so a missing file behaves like an empty one.

mod config;
mod error;

pub use config::{
    DEFAULT_FILENAME, JsonAotToml, Manifest, OutputConfig, ScanConfig, WriteMode, parse_manifest,
};
pub use error::{Error, Result};

//! Core operations.
//!
//! This module contains the business logic for jsonaot commands,
//! separated from CLI argument parsing and output rendering.

pub mod list;
pub mod run;
pub mod setup;

pub use list::list;
pub use run::run;
pub use setup::setup;

//! Indented text building for the generated C#.

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;

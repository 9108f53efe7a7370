//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod list;
mod output;
mod run;
mod setup;

pub use list::ListReport;
pub use output::{Output, Report, TerminalOutput};
pub use run::RunReport;
pub use setup::SetupReport;

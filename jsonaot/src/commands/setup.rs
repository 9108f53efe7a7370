use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::Cli;
use crate::{
    ops::{self, setup::SetupOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct SetupCommand {
    /// Add the global using lines to the entry point (Program.cs)
    #[arg(short = 's', long)]
    pub entry_point: bool,

    /// Handler file to create (overrides jsonaot.toml)
    #[arg(long)]
    pub artifact: Option<PathBuf>,

    /// Also write a commented jsonaot.toml when none exists
    #[arg(long)]
    pub with_config: bool,
}

impl SetupCommand {
    pub fn run(&self, cli: &Cli) -> Result<()> {
        let config = cli.load_config();
        let config_path = self.with_config.then(|| config.path().to_path_buf());

        let report = ops::setup(
            config.manifest(),
            SetupOptions {
                artifact: self.artifact.as_deref(),
                entry_point: self.entry_point,
                config: config_path.as_deref(),
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

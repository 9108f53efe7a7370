use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};

use super::Cli;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ListCommand {
    /// Directory to scan (overrides jsonaot.toml)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: Format,
}

impl ListCommand {
    pub fn run(&self, cli: &Cli) -> Result<()> {
        let config = cli.load_config();

        let mut scan = config.manifest().scan.clone();
        if let Some(root) = &self.root {
            scan.root = root.clone();
        }

        let report = ops::list(scan)?;

        match self.format {
            Format::Text => report.render(&mut TerminalOutput::new()),
            Format::Json => {
                let json = report.to_json().wrap_err("Failed to serialize the type list")?;
                println!("{}", json);
            }
        }
        Ok(())
    }
}

use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use jsonaot_manifest::WriteMode;

use super::Cli;
use crate::{
    ops::{self, run::RunOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RunCommand {
    /// Insert new registrations into the existing handler file
    #[arg(short, long, conflicts_with = "overwrite")]
    pub append: bool,

    /// Regenerate the handler file from scratch
    #[arg(short, long)]
    pub overwrite: bool,

    /// Directory to scan (overrides jsonaot.toml)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Handler file to update (overrides jsonaot.toml)
    #[arg(long)]
    pub artifact: Option<PathBuf>,

    /// Print the handler file instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl RunCommand {
    pub fn run(&self, cli: &Cli) -> Result<()> {
        let config = cli.load_config();
        let manifest = config.manifest();

        let mut scan = manifest.scan.clone();
        if let Some(root) = &self.root {
            scan.root = root.clone();
        }

        let report = ops::run(
            scan,
            RunOptions {
                artifact: self
                    .artifact
                    .clone()
                    .unwrap_or_else(|| manifest.output.artifact.clone()),
                mode: self.mode(manifest.output.mode),
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Write mode from the flags, falling back to `default`.
    fn mode(&self, default: WriteMode) -> WriteMode {
        if self.append {
            WriteMode::Append
        } else if self.overwrite {
            WriteMode::Overwrite
        } else {
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn mode_for(args: &[&str], default: WriteMode) -> WriteMode {
        let cli = Cli::try_parse_from(args).unwrap();
        match &cli.command {
            crate::commands::Commands::Run(cmd) => cmd.mode(default),
            _ => unreachable!("expected run"),
        }
    }

    #[test]
    fn test_mode_flags_override_config() {
        assert_eq!(
            mode_for(&["jsonaot", "run", "-a"], WriteMode::Overwrite),
            WriteMode::Append
        );
        assert_eq!(
            mode_for(&["jsonaot", "run", "--overwrite"], WriteMode::Append),
            WriteMode::Overwrite
        );
        assert_eq!(
            mode_for(&["jsonaot", "run"], WriteMode::Append),
            WriteMode::Append
        );
    }
}

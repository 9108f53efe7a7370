mod completions;
mod list;
mod run;
mod setup;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use jsonaot_manifest::{DEFAULT_FILENAME, JsonAotToml};
use list::ListCommand;
use run::RunCommand;
use setup::SetupCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for jsonaot_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "jsonaot")]
#[command(version)]
#[command(about = "Generate ahead-of-time JSON serialization contexts for C# projects")]
#[command(arg_required_else_help = true)]
pub(crate) struct Cli {
    /// Path to jsonaot.toml (defaults to ./jsonaot.toml when present)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Setup(cmd) => cmd.run(self),
            Commands::Run(cmd) => cmd.run(self),
            Commands::List(cmd) => cmd.run(self),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    /// Load the config file named on the command line, or the default one
    /// when it exists.
    pub(crate) fn load_config(&self) -> JsonAotToml {
        let config = match &self.config {
            Some(path) => JsonAotToml::open(path).unwrap_or_exit(),
            None => JsonAotToml::open_or_default(DEFAULT_FILENAME).unwrap_or_exit(),
        };
        if config.is_loaded() {
            tracing::debug!(path = %config.path().display(), "loaded config");
        } else {
            tracing::debug!("no config file, using defaults");
        }
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty JSONHandler.cs
    Setup(SetupCommand),

    /// Scan sources and register [JsonAot] types in JSONHandler.cs
    Run(RunCommand),

    /// List [JsonAot] types without writing anything
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

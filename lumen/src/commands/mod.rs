mod accessors;
mod fixtures;
mod header;

use accessors::AccessorsCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use fixtures::FixturesCommand;
use header::HeaderCommand;

#[derive(Parser)]
#[command(name = "lumen")]
#[command(version)]
#[command(about = "Developer tools for the Lumen renderer")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Accessors(cmd) => cmd.run(),
            Commands::Fixtures(cmd) => cmd.run(),
            Commands::Header(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the generated find_one_* accessors for ParamSet
    Accessors(AccessorsCommand),

    /// Print the generated testutils fixture module
    Fixtures(FixturesCommand),

    /// Check or insert license headers in source files
    Header(HeaderCommand),
}

mod completions;
mod new;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use new::NewCommand;

/// Extension trait for exiting on generation errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crudgen_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "Scaffold a CRUD web service for a single entity")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Running without a subcommand is the same as `crudgen new`.
    #[command(flatten)]
    new: NewCommand,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Some(Commands::New(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
            None => self.new.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively describe an entity and generate its scaffold
    New(NewCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

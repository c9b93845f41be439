use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use clap::Args;
use crudgen_codegen::{EntityRequest, Generator};
use crudgen_core::DEFAULT_OUTPUT_DIR;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    input::{LinePrompter, TerminalPrompter, collect_request},
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct NewCommand {
    /// Output directory for the generated scaffold
    #[arg(short, long, env = "CRUDGEN_OUTPUT", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl NewCommand {
    /// Run the new command
    pub fn run(&self) -> Result<()> {
        // Templates are compiled before the first prompt.
        let generator = Generator::new().unwrap_or_exit();
        let request = Self::prompt_request()?;

        let report = ops::generate(
            &generator,
            &request,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn prompt_request() -> Result<EntityRequest> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            collect_request(&mut TerminalPrompter::new())
        } else {
            collect_request(&mut LinePrompter::new(stdin.lock(), io::stdout()))
        }
    }
}

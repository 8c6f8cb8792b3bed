//! Interactive generate command.

use crate::app::{collect_keymap, Prompter};
use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::FINISH_MESSAGE;
use crate::firmware::CodeGenerator;
use crate::services::{KeymapBuilder, PinMap};
use clap::Args;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

/// Ask for the keyboard's matrix and layers, then write keymap.rb
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Output file (defaults to output.path from config, then ./keymap.rb)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Execute the generate command on the process's stdin and stdout
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let stdin = std::io::stdin();
        self.execute_with(config, stdin.lock(), std::io::stdout())
    }

    /// Execute the generate command against arbitrary streams
    pub fn execute_with<R: BufRead, W: Write>(
        &self,
        config: &Config,
        input: R,
        output: W,
    ) -> CliResult<()> {
        let mut prompter = Prompter::new(input, output);
        let raw = collect_keymap(&mut prompter)
            .map_err(|e| CliError::io(format!("Failed to read answers: {e}")))?;

        // Resolve pins and pad rows; nothing is written if this fails
        let pins = PinMap::pro_micro();
        let keymap = KeymapBuilder::new(&pins)
            .build(
                raw.is_split,
                raw.row_pins.as_slice(),
                raw.col_pins.as_slice(),
                raw.layers,
            )
            .map_err(|e| CliError::validation(format!("Failed to resolve pins: {e}")))?;

        let path = self.output.as_ref().unwrap_or(&config.output.path);
        info!(path = %path.display(), "generating keymap script");

        CodeGenerator::new(&keymap)
            .save(path)
            .map_err(|e| CliError::io(format!("Failed to write {}: {e:#}", path.display())))?;

        let mut output = prompter.into_output();
        writeln!(output, "{FINISH_MESSAGE}")
            .map_err(|e| CliError::io(format!("Failed to write to stdout: {e}")))?;

        Ok(())
    }
}

//! PRK Keymap Generator - interactive keymap.rb generator
//!
//! Asks for the split flag, matrix pins, and layers of a keyboard and writes
//! a `keymap.rb` for PRK Firmware.

use clap::Parser;
use prk_keymap_generator::cli::{ExitCode, GenerateArgs};
use prk_keymap_generator::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// PRK Keymap Generator - build a PRK Firmware keymap.rb from QMK settings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,
}

/// Logs go to stderr so they never mix with the prompts on stdout.
fn init_tracing(verbose: bool, configured_level: &str) {
    let filter = if verbose { "debug" } else { configured_level };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config: {e:#}");
            std::process::exit(ExitCode::IoError.code());
        }
    };

    init_tracing(cli.generate.verbose, &config.logging.level);

    if let Err(e) = cli.generate.execute(&config) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }
}

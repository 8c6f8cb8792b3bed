//! CLI command handlers.
//!
//! The tool has a single interactive command; its handler is written
//! against generic streams so it can be scripted and tested.

pub mod common;
pub mod generate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliErrorKind, CliResult, ExitCode};
pub use generate::GenerateArgs;

//! Firmware script generation.
//!
//! This module turns a `KeymapConfig` into the `keymap.rb` script run by
//! PRK Firmware.

pub mod generator;

// Re-export firmware types
pub use generator::CodeGenerator;

//! Application-wide constants.
//!
//! This module defines the application name and the fixed literals that
//! appear in every generated `keymap.rb`.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "PRK Keymap Generator";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "prk-keymap-generator";

/// Keycode placed in matrix cells that hold no key.
pub const PADDING_TOKEN: &str = "KC_NO";

/// Default file name of the generated script.
pub const DEFAULT_OUTPUT_FILE: &str = "keymap.rb";

/// Tap threshold (ms) passed to every `define_mod_key`.
pub const MOD_KEY_TAP_THRESHOLD_MS: u32 = 120;

/// Repush threshold (ms) passed to every `define_mod_key`.
pub const MOD_KEY_REPUSH_THRESHOLD_MS: u32 = 150;

/// Message printed once the script has been written.
pub const FINISH_MESSAGE: &str = "finish!";

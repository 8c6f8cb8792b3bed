//! Interactive collection of keymap data.
//!
//! This module asks the questions that describe a keyboard (split flag,
//! matrix pins, layers) and returns the raw answers without interpreting
//! them.

/// Question sequence for a new keymap
pub mod collect;

pub mod prompt;

// Re-export commonly used functions for convenience
pub use collect::{collect_keymap, RawKeymapInput};
pub use prompt::{PromptError, Prompter};

//! Data models for keymap generation.
//!
//! This module contains the data structures passed between the collector,
//! the builder, and the script generator. Models carry no I/O logic.

pub mod keymap;
pub mod layer;

// Re-export all model types
pub use keymap::KeymapConfig;
pub use layer::{Layer, LayerSet, Row};

//! Service layer for keymap assembly.
//!
//! This module turns the raw answers gathered by the collector into a
//! `KeymapConfig`: pin names are resolved, layer rows are padded into a
//! rectangular matrix, and layers are ordered.

pub mod builder;
pub mod normalizer;
pub mod pins;

// Re-export commonly used types and functions
pub use builder::{KeymapBuilder, LayerInput};
pub use pins::{PinMap, PinResolutionError, PinResolver};

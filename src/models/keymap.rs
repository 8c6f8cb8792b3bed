//! Complete keymap configuration consumed by the script generator.

use crate::models::LayerSet;

/// Everything needed to render one `keymap.rb`.
///
/// Built once by `KeymapBuilder`, consumed once by `CodeGenerator`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeymapConfig {
    /// Whether the keyboard is split into two halves
    pub is_split: bool,
    /// Resolved MATRIX_ROW_PINS, in input order
    pub row_pins: Vec<u8>,
    /// Resolved MATRIX_COL_PINS, in input order
    pub col_pins: Vec<u8>,
    /// Normalized layers; the first one is the base layer
    pub layers: LayerSet,
}

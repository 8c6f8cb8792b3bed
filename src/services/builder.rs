//! Assembly of a complete `KeymapConfig` from raw collected answers.

use tracing::{debug, warn};

use crate::models::{KeymapConfig, Layer, LayerSet, Row};
use crate::services::normalizer;
use crate::services::pins::{PinMap, PinResolutionError, PinResolver};

/// Raw answers for one layer, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerInput {
    /// Layer name as typed
    pub name: String,
    /// Rows as typed; widths may differ
    pub rows: Vec<Row>,
}

impl LayerInput {
    /// Creates a new layer input.
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

/// Builds keymap configurations against a fixed pin map.
#[derive(Debug, Clone)]
pub struct KeymapBuilder<'a> {
    resolver: PinResolver<'a>,
}

impl<'a> KeymapBuilder<'a> {
    /// Creates a builder that resolves pins through `pins`.
    #[must_use]
    pub const fn new(pins: &'a PinMap) -> Self {
        Self {
            resolver: PinResolver::new(pins),
        }
    }

    /// Resolves pins, normalizes every layer, and collects the result.
    ///
    /// Layers keep the order they are given in. A later layer whose name
    /// lower-cases to the same symbol replaces the earlier one but not its
    /// position. Pin counts are not checked against the matrix size.
    pub fn build<S: AsRef<str>>(
        &self,
        is_split: bool,
        row_pin_names: &[S],
        col_pin_names: &[S],
        layer_inputs: Vec<LayerInput>,
    ) -> Result<KeymapConfig, PinResolutionError> {
        let row_pins = self.resolver.resolve(row_pin_names)?;
        let col_pins = self.resolver.resolve(col_pin_names)?;
        debug!(?row_pins, ?col_pins, "resolved matrix pins");

        let mut layers = LayerSet::new();
        for input in layer_inputs {
            let layer = Layer::new(input.name, normalizer::normalized(input.rows));
            if !layer.has_identifier_name() {
                warn!(
                    name = %layer.name,
                    "layer name is not a plain identifier; generated symbol may not parse"
                );
            }
            debug!(name = %layer.name, rows = layer.rows.len(), width = layer.width(), "normalized layer");
            if let Some(previous) = layers.insert(layer) {
                warn!(
                    name = %previous.name,
                    symbol = %previous.symbol(),
                    "duplicate layer symbol; keeping the later definition"
                );
            }
        }
        debug!(base = ?layers.base().map(|l| l.symbol()), "base layer has no mod key");

        Ok(KeymapConfig {
            is_split,
            row_pins,
            col_pins,
            layers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(tokens: &[&str]) -> Row {
        tokens.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn test_build_resolves_and_normalizes() {
        let pins = PinMap::pro_micro();
        let config = KeymapBuilder::new(&pins)
            .build(
                true,
                &["D4", "C6"],
                &["F4", "F5", "F6"],
                vec![LayerInput::new(
                    "default",
                    vec![row(&["KC_A", "KC_B", "KC_C"]), row(&["KC_SPC"])],
                )],
            )
            .unwrap();

        assert!(config.is_split);
        assert_eq!(config.row_pins, vec![4, 5]);
        assert_eq!(config.col_pins, vec![29, 28, 27]);
        let layer = config.layers.get("default").unwrap();
        assert_eq!(layer.rows[1], row(&["KC_NO", "KC_SPC", "KC_NO"]));
    }

    #[test]
    fn test_build_preserves_layer_order() {
        let pins = PinMap::pro_micro();
        let inputs = ["default", "raise", "lower", "adjust"]
            .into_iter()
            .map(|name| LayerInput::new(name, vec![row(&["KC_A"])]))
            .collect();

        let config = KeymapBuilder::new(&pins)
            .build(false, &["D1"], &["D0"], inputs)
            .unwrap();

        assert_eq!(
            config.layers.names(),
            vec!["default", "raise", "lower", "adjust"]
        );
    }

    #[test]
    fn test_build_duplicate_layer_last_write_wins() {
        let pins = PinMap::pro_micro();
        let inputs = vec![
            LayerInput::new("base", vec![row(&["OLD"])]),
            LayerInput::new("fn", vec![row(&["F"])]),
            LayerInput::new("base", vec![row(&["NEW"])]),
        ];

        let config = KeymapBuilder::new(&pins)
            .build(false, &["D1"], &["D0"], inputs)
            .unwrap();

        assert_eq!(config.layers.names(), vec!["base", "fn"]);
        assert_eq!(config.layers.get("base").unwrap().rows, vec![row(&["NEW"])]);
    }

    #[test]
    fn test_build_names_differing_in_case_collapse() {
        let pins = PinMap::pro_micro();
        let inputs = vec![
            LayerInput::new("base", vec![row(&["KC_A"])]),
            LayerInput::new("Fn", vec![row(&["KC_1"])]),
            LayerInput::new("fn", vec![row(&["KC_2"])]),
        ];

        let config = KeymapBuilder::new(&pins)
            .build(false, &["D1"], &["D0"], inputs)
            .unwrap();

        assert_eq!(config.layers.names(), vec!["base", "fn"]);
        assert_eq!(config.layers.get("fn").unwrap().rows, vec![row(&["KC_2"])]);
    }

    #[test]
    fn test_build_fails_on_unknown_row_pin() {
        let pins = PinMap::pro_micro();
        let err = KeymapBuilder::new(&pins)
            .build(false, &["D1", "X9"], &["D0"], vec![])
            .unwrap_err();

        assert_eq!(
            err,
            PinResolutionError::UnknownPin {
                name: "X9".to_string(),
                position: 1,
            }
        );
    }

    #[test]
    fn test_build_fails_on_unknown_col_pin() {
        let pins = PinMap::pro_micro();
        let result = KeymapBuilder::new(&pins).build(false, &["D1"], &["Q0"], vec![]);
        assert!(matches!(
            result,
            Err(PinResolutionError::UnknownPin { ref name, position: 0 }) if name == "Q0"
        ));
    }

    #[test]
    fn test_build_without_layers() {
        let pins = PinMap::pro_micro();
        let config = KeymapBuilder::new(&pins)
            .build(false, &["D1"], &["D0"], vec![])
            .unwrap();
        assert!(config.layers.is_empty());
    }
}

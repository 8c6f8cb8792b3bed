//! Pin name resolution.
//!
//! QMK `config.h` files name matrix pins after the AVR ports of a Pro Micro
//! (e.g. `D1`, `F4`). PRK Firmware running on an RP2040 board in the same
//! footprint wants GPIO numbers instead. `PinMap` holds that translation and
//! `PinResolver` applies it.

use std::collections::HashMap;
use thiserror::Error;

/// Pro Micro pin labels and the GPIO numbers they map to.
const PRO_MICRO_PINS: [(&str, u8); 16] = [
    ("D1", 2),
    ("D0", 3),
    ("D4", 4),
    ("C6", 5),
    ("D7", 6),
    ("E6", 7),
    ("B4", 8),
    ("B5", 9),
    ("F4", 29),
    ("F5", 28),
    ("F6", 27),
    ("F7", 26),
    ("B1", 22),
    ("B3", 20),
    ("B2", 23),
    ("B6", 21),
];

/// Error raised when a pin name cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinResolutionError {
    /// The pin name is not present in the pin map.
    #[error("unknown pin '{name}' at position {position}")]
    UnknownPin {
        /// The offending pin name
        name: String,
        /// 0-based index of the name in the input list
        position: usize,
    },
}

/// Immutable mapping from pin name to pin number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinMap {
    pins: HashMap<String, u8>,
}

impl PinMap {
    /// Builds a pin map from `(name, number)` pairs.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        Self {
            pins: entries
                .into_iter()
                .map(|(name, pin)| (name.into(), pin))
                .collect(),
        }
    }

    /// The built-in Pro Micro footprint table.
    #[must_use]
    pub fn pro_micro() -> Self {
        Self::new(PRO_MICRO_PINS)
    }

    /// Looks up a single pin name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u8> {
        self.pins.get(name).copied()
    }

    /// Number of known pins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Returns true if the map has no entries.
    #[allow(dead_code)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

impl Default for PinMap {
    fn default() -> Self {
        Self::pro_micro()
    }
}

/// Resolves pin name lists against an injected `PinMap`.
#[derive(Debug, Clone, Copy)]
pub struct PinResolver<'a> {
    map: &'a PinMap,
}

impl<'a> PinResolver<'a> {
    /// Creates a resolver backed by `map`.
    #[must_use]
    pub const fn new(map: &'a PinMap) -> Self {
        Self { map }
    }

    /// Resolves every name in order.
    ///
    /// Names are expected to be trimmed already. The first unknown name
    /// aborts resolution.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<u8>, PinResolutionError> {
        names
            .iter()
            .enumerate()
            .map(|(position, name)| {
                let name = name.as_ref();
                self.map
                    .get(name)
                    .ok_or_else(|| PinResolutionError::UnknownPin {
                        name: name.to_string(),
                        position,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pro_micro_table_complete() {
        let map = PinMap::pro_micro();
        assert_eq!(map.len(), 16);
        assert_eq!(map.get("D1"), Some(2));
        assert_eq!(map.get("F4"), Some(29));
        assert_eq!(map.get("B6"), Some(21));
        assert_eq!(map.get("A0"), None);
    }

    #[test]
    fn test_resolve_preserves_order() {
        let map = PinMap::pro_micro();
        let resolver = PinResolver::new(&map);

        assert_eq!(resolver.resolve(&["D1", "D0"]), Ok(vec![2, 3]));
        assert_eq!(
            resolver.resolve(&["F7", "F6", "F5", "F4"]),
            Ok(vec![26, 27, 28, 29])
        );
    }

    #[test]
    fn test_resolve_empty_list() {
        let map = PinMap::pro_micro();
        let names: [&str; 0] = [];
        assert_eq!(PinResolver::new(&map).resolve(&names), Ok(vec![]));
    }

    #[test]
    fn test_resolve_unknown_pin_reports_name_and_position() {
        let map = PinMap::pro_micro();
        let err = PinResolver::new(&map)
            .resolve(&["D1", "GP0", "D0"])
            .unwrap_err();

        assert_eq!(
            err,
            PinResolutionError::UnknownPin {
                name: "GP0".to_string(),
                position: 1,
            }
        );
        assert_eq!(err.to_string(), "unknown pin 'GP0' at position 1");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let map = PinMap::pro_micro();
        assert!(PinResolver::new(&map).resolve(&["d1"]).is_err());
    }

    #[test]
    fn test_resolver_uses_injected_map() {
        let map = PinMap::new([("GP0", 0), ("GP1", 1)]);
        let resolver = PinResolver::new(&map);
        assert_eq!(resolver.resolve(&["GP1", "GP0"]), Ok(vec![1, 0]));
        assert!(resolver.resolve(&["D1"]).is_err());
    }

    #[test]
    fn test_empty_map_resolves_only_empty_lists() {
        let map = PinMap::new(Vec::<(&str, u8)>::new());
        assert!(map.is_empty());
        assert!(!PinMap::pro_micro().is_empty());

        let resolver = PinResolver::new(&map);
        assert_eq!(resolver.resolve::<&str>(&[]), Ok(vec![]));
        assert!(resolver.resolve(&["D1"]).is_err());
    }
}

//! Layer data structures.

/// One matrix row: keycode tokens from left to right.
pub type Row = Vec<String>;

/// A named keymap layer.
///
/// # Validation
///
/// - Rows may have different lengths until they pass through the normalizer
/// - After normalization all rows share the width of the widest row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Layer name as entered by the user (e.g., "default", "raise")
    pub name: String,
    /// Key matrix rows in input order
    pub rows: Vec<Row>,
}

impl Layer {
    /// Creates a new layer with the given name and rows.
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Returns the symbol used to reference this layer in the generated script.
    #[must_use]
    pub fn symbol(&self) -> String {
        self.name.to_lowercase()
    }

    /// Returns the constant-style name used for the layer's mod key.
    #[must_use]
    pub fn mod_key_name(&self) -> String {
        self.name.to_uppercase()
    }

    /// Returns the width of the widest row, or 0 for a layer without rows.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns true if the name can be emitted as a bare symbol.
    ///
    /// A valid name is non-empty, made of ASCII letters, digits and `_`,
    /// and does not start with a digit.
    #[must_use]
    pub fn has_identifier_name(&self) -> bool {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }
}

/// Insertion-ordered collection of layers keyed by symbol.
///
/// Two names are the same layer when their symbols match ("Fn" and "fn"),
/// since that is how the script refers to them. Inserting a layer whose
/// symbol already exists replaces that layer but keeps its original
/// position, so the first inserted layer stays the base layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerSet {
    layers: Vec<Layer>,
}

impl LayerSet {
    /// Creates an empty layer set.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Inserts a layer, replacing any existing layer with the same symbol.
    ///
    /// Returns the replaced layer, if there was one.
    pub fn insert(&mut self, layer: Layer) -> Option<Layer> {
        let symbol = layer.symbol();
        match self.layers.iter_mut().find(|l| l.symbol() == symbol) {
            Some(existing) => Some(std::mem::replace(existing, layer)),
            None => {
                self.layers.push(layer);
                None
            }
        }
    }

    /// Looks up a layer by name, ignoring case like `insert` does.
    #[allow(dead_code)]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Layer> {
        let symbol = name.to_lowercase();
        self.layers.iter().find(|l| l.symbol() == symbol)
    }

    /// Returns the base layer (the first one inserted).
    #[must_use]
    pub fn base(&self) -> Option<&Layer> {
        self.layers.first()
    }

    /// Iterates over every layer after the base layer, in insertion order.
    pub fn non_base(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().skip(1)
    }

    /// Iterates over all layers in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Layer> {
        self.layers.iter()
    }

    /// Returns layer names in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name.as_str()).collect()
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if no layers have been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl<'a> IntoIterator for &'a LayerSet {
    type Item = &'a Layer;
    type IntoIter = std::slice::Iter<'a, Layer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Layer> for LayerSet {
    fn from_iter<I: IntoIterator<Item = Layer>>(iter: I) -> Self {
        let mut set = Self::new();
        for layer in iter {
            set.insert(layer);
        }
        set
    }
}

use crate::backend::Symbol;

/// Reads values from the symbol tree by dotted path
pub trait SymbolReader: Send + Sync {
    /// Read the value at `path` below `root` as text.
    fn read_string(&self, root: &dyn Symbol, path: &str) -> Option<String>;

    /// Read the value at `path` below `root` as a number.
    ///
    /// Handles locale-specific decimal commas ("0,25").
    fn read_f64(&self, root: &dyn Symbol, path: &str) -> Option<f64>;
}

/// Default [`SymbolReader`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolPathReader;

impl SymbolPathReader {
    /// Create a new reader
    pub fn new() -> Self {
        Self
    }

    /// Parse a symbol value as a number, independent of the host locale.
    ///
    /// `NaN` and infinities are rejected.
    pub fn parse_number(value: &str) -> Option<f64> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite())
    }
}

impl SymbolReader for SymbolPathReader {
    fn read_string(&self, root: &dyn Symbol, path: &str) -> Option<String> {
        root.find_child(path)?.current_value()
    }

    fn read_f64(&self, root: &dyn Symbol, path: &str) -> Option<f64> {
        let value = self.read_string(root, path)?;
        Self::parse_number(&value)
    }
}

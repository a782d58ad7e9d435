use log::debug;

use crate::backend::Symbol;

use super::{ColumnDetails, SymbolPathReader, SymbolReader};

/// Serial number reported when no vendor path resolves
pub const UNKNOWN_SERIAL_NUMBER: &str = "N/A";

/// Manufacturer reported when no vendor branch is present
pub const UNKNOWN_MANUFACTURER: &str = "Unknown";

/// Instrument metadata lookups used by the device and column mappers
pub trait InstrumentDataProvider: Send + Sync {
    /// Equipment serial number, or [`UNKNOWN_SERIAL_NUMBER`]
    fn serial_number(&self, root: Option<&dyn Symbol>) -> String;

    /// Manufacturer inferred from the tree layout, or [`UNKNOWN_MANUFACTURER`]
    fn manufacturer(&self, root: Option<&dyn Symbol>) -> String;

    /// Column metadata, or `None` when no column branch is present
    fn column_details(&self, root: Option<&dyn Symbol>) -> Option<ColumnDetails>;
}

/// Vendor-specific symbol paths, in priority order.
///
/// The first candidate that resolves wins; later candidates are not consulted.
#[derive(Debug, Clone)]
pub struct VendorPaths {
    /// Candidate paths to the equipment serial number
    pub serial_number: Vec<String>,

    /// Candidate base paths of the column branch
    pub column_base: Vec<String>,

    /// `(top-level branch, manufacturer name)` pairs
    pub manufacturers: Vec<(String, String)>,
}

impl Default for VendorPaths {
    fn default() -> Self {
        let owned = |paths: &[&str]| paths.iter().map(|p| p.to_string()).collect();
        Self {
            serial_number: owned(&[
                "Agilent.GC.SerialNo",
                "GC.SerialNo",
                "System.SerialNo",
                "HP.GC.SerialNo",
            ]),
            column_base: owned(&[
                "Agilent.GC.FrontColumn",
                "Agilent.GC.BackColumn",
                "GC.FrontColumn",
                "GC.Column",
            ]),
            manufacturers: vec![
                ("Agilent".to_string(), "Agilent".to_string()),
                ("Thermo".to_string(), "Thermo Fisher Scientific".to_string()),
            ],
        }
    }
}

// Leaf names below a column base path
const COLUMN_DESCRIPTION: &str = "Description";
const COLUMN_LENGTH: &str = "Length";
const COLUMN_INNER_DIAMETER: &str = "NominalID";
const COLUMN_FILM_THICKNESS: &str = "FilmThickness";

/// [`InstrumentDataProvider`] that probes several vendor layouts
#[derive(Debug, Clone, Default)]
pub struct MultiVendorResolver<R = SymbolPathReader> {
    reader: R,
    paths: VendorPaths,
}

impl MultiVendorResolver<SymbolPathReader> {
    /// Create a resolver with the default reader and vendor paths
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: SymbolReader> MultiVendorResolver<R> {
    /// Create a resolver with a custom reader and vendor paths
    pub fn with_reader(reader: R, paths: VendorPaths) -> Self {
        Self { reader, paths }
    }

    fn first_non_blank(&self, root: &dyn Symbol, candidates: &[String]) -> Option<String> {
        candidates
            .iter()
            .filter_map(|path| self.reader.read_string(root, path))
            .find(|value| !value.trim().is_empty())
    }

    fn column_base<'a>(&'a self, root: &dyn Symbol) -> Option<&'a str> {
        self.paths
            .column_base
            .iter()
            .find(|base| {
                self.reader
                    .read_string(root, &format!("{}.{}", base, COLUMN_DESCRIPTION))
                    .is_some()
                    || self
                        .reader
                        .read_string(root, &format!("{}.{}", base, COLUMN_LENGTH))
                        .is_some()
            })
            .map(String::as_str)
    }
}

impl<R: SymbolReader> InstrumentDataProvider for MultiVendorResolver<R> {
    fn serial_number(&self, root: Option<&dyn Symbol>) -> String {
        root.and_then(|root| self.first_non_blank(root, &self.paths.serial_number))
            .unwrap_or_else(|| UNKNOWN_SERIAL_NUMBER.to_string())
    }

    fn manufacturer(&self, root: Option<&dyn Symbol>) -> String {
        let Some(root) = root else {
            return UNKNOWN_MANUFACTURER.to_string();
        };
        self.paths
            .manufacturers
            .iter()
            .find(|(branch, _)| root.child(branch).is_some())
            .map(|(_, name)| name.clone())
            .unwrap_or_else(|| UNKNOWN_MANUFACTURER.to_string())
    }

    fn column_details(&self, root: Option<&dyn Symbol>) -> Option<ColumnDetails> {
        let root = root?;
        let base = self.column_base(root)?;
        debug!("Column metadata found under '{}'", base);

        let leaf = |name: &str| format!("{}.{}", base, name);
        Some(ColumnDetails {
            description: self.reader.read_string(root, &leaf(COLUMN_DESCRIPTION)),
            length_m: self.reader.read_f64(root, &leaf(COLUMN_LENGTH)),
            internal_diameter_mm: self.reader.read_f64(root, &leaf(COLUMN_INNER_DIAMETER)),
            film_thickness_um: self.reader.read_f64(root, &leaf(COLUMN_FILM_THICKNESS)),
        })
    }
}

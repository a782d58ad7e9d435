//! # Instrument Metadata
//!
//! This module reads device and column metadata out of the instrument method
//! symbol tree.
//!
//! Different GC vendors lay that tree out differently, so lookups go through
//! two layers:
//!
//! 1. [`SymbolReader`] resolves a single dotted path to a string or a number,
//!    tolerating decimal commas and missing nodes.
//! 2. [`InstrumentDataProvider`] probes an ordered list of vendor-specific path
//!    candidates ([`VendorPaths`]) and reports the first match. Candidates are
//!    never merged.
//!
//! Nothing in this module fails: an unresolvable value is `None`, or the
//! documented default (`"N/A"` for serial numbers, `"Unknown"` for
//! manufacturers).

mod column;
mod instrument;
mod reader;


pub use column::ColumnDetails;
pub use instrument::{
    InstrumentDataProvider, MultiVendorResolver, VendorPaths, UNKNOWN_MANUFACTURER,
    UNKNOWN_SERIAL_NUMBER,
};
pub use reader::{SymbolPathReader, SymbolReader};

//! # Document Mapping
//!
//! Pure functions turning backend views and normalised records into ASM
//! document fragments. Mappers never fail: missing optional data becomes an
//! absent field, and only identifiers required by the schema fall back to
//! placeholders (`"N/A"`, `"Unknown"`, `"arb"`).

mod chromatogram;
mod instrument;
mod peaks;
mod run;


pub use chromatogram::{map_data_cube, TimeUnit, RETENTION_TIME_CONCEPT};
pub use instrument::{detector_name, map_column, map_device, map_device_control};
pub use peaks::{map_peak, map_processed_data};
pub use run::{map_injection, map_sample};

use crate::asm::units;
use crate::backend::Signal;

/// Unit of the signal axis, `"arb"` when the signal does not declare one
pub fn signal_unit(signal: &Signal) -> &str {
    signal
        .metadata
        .signal_unit
        .as_deref()
        .filter(|unit| !unit.trim().is_empty())
        .unwrap_or(units::ARBITRARY)
}

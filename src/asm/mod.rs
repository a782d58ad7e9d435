//! # Allotrope Simple Model (ASM) output
//!
//! Serde model of the gas chromatography ASM document. Field names follow the
//! ASM JSON schema (space-separated words); optional values are omitted from
//! the output when absent, never written as `null` or zero.
//!
//! ```text
//! AsmDocument
//! └── gas chromatography aggregate document
//!     ├── device system document
//!     └── gas chromatography document[1]
//!         └── measurement aggregate document
//!             └── measurement document[one per signal]
//!                 ├── chromatogram data cube
//!                 ├── chromatography column document
//!                 ├── sample document
//!                 ├── processed data aggregate document → peak list
//!                 ├── device control aggregate document
//!                 └── injection document
//! ```

mod data_cube;
mod document;
mod peak;
mod quantity;


pub use data_cube::{
    ChromatogramDataCube, CubeComponent, CubeData, CubeStructure, COMPONENT_DATATYPE_DOUBLE,
};
pub use document::{
    AsmDocument, ChromatographyColumnDocument, DeviceControlAggregateDocument,
    DeviceControlDocument, DeviceSystemDocument, GasChromatographyAggregateDocument,
    GasChromatographyDocument, InjectionDocument, MeasurementAggregateDocument,
    MeasurementDocument, SampleDocument,
};
pub use peak::{Peak, PeakList, ProcessedDataAggregateDocument, ProcessedDataDocument};
pub use quantity::{units, Quantity};

/// Manifest of the gas chromatography tabular ASM schema
pub const ASM_MANIFEST: &str =
    "http://purl.allotrope.org/manifests/gas-chromatography/REC/2025/06/gas-chromatography.tabular.manifest";

/// Placeholder for identifiers the data system does not provide
pub const NOT_APPLICABLE: &str = "N/A";

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChromatogramDataCube, ProcessedDataAggregateDocument, Quantity, ASM_MANIFEST};

/// Root of a gas chromatography ASM document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsmDocument {
    /// Schema manifest URL
    #[serde(rename = "$asm.manifest")]
    pub manifest: String,

    /// Aggregate of all runs in this document
    #[serde(rename = "gas chromatography aggregate document")]
    pub aggregate: GasChromatographyAggregateDocument,
}

impl AsmDocument {
    /// Wrap an aggregate document under the gas chromatography manifest
    pub fn new(aggregate: GasChromatographyAggregateDocument) -> Self {
        Self {
            manifest: ASM_MANIFEST.to_string(),
            aggregate,
        }
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Measurements of all gas chromatography documents, in order
    pub fn measurements(&self) -> impl Iterator<Item = &MeasurementDocument> {
        self.aggregate
            .documents
            .iter()
            .flat_map(|doc| doc.measurement_aggregate.measurements.iter())
    }
}

/// Device system and the analytical runs performed on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasChromatographyAggregateDocument {
    /// Instrument identification
    #[serde(rename = "device system document")]
    pub device_system: DeviceSystemDocument,

    /// One document per injection
    #[serde(rename = "gas chromatography document")]
    pub documents: Vec<GasChromatographyDocument>,
}

/// Instrument identification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSystemDocument {
    /// Asset management identifier
    #[serde(rename = "asset management identifier")]
    pub asset_management_identifier: String,

    /// Equipment serial number
    #[serde(rename = "equipment serial number")]
    pub equipment_serial_number: String,

    /// Device identifier
    #[serde(rename = "device identifier")]
    pub device_identifier: String,

    /// Brand name
    #[serde(rename = "brand name")]
    pub brand_name: String,

    /// Product manufacturer
    #[serde(rename = "product manufacturer")]
    pub product_manufacturer: String,
}

/// One injection and its measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasChromatographyDocument {
    /// User who acquired the data
    pub analyst: String,

    /// Instrument method name
    #[serde(
        rename = "device method identifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub device_method_identifier: Option<String>,

    /// Measurements, one per signal
    #[serde(rename = "measurement aggregate document")]
    pub measurement_aggregate: MeasurementAggregateDocument,
}

/// List wrapper for measurement documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementAggregateDocument {
    /// Measurements in signal order
    #[serde(rename = "measurement document")]
    pub measurements: Vec<MeasurementDocument>,
}

/// One detector signal of an injection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementDocument {
    /// Signal identifier
    #[serde(rename = "measurement identifier")]
    pub measurement_identifier: String,

    /// Detector device
    #[serde(rename = "detection type")]
    pub detection_type: String,

    /// Raw chromatogram
    #[serde(rename = "chromatogram data cube")]
    pub chromatogram_data_cube: ChromatogramDataCube,

    /// Column used for the separation
    #[serde(rename = "chromatography column document")]
    pub column: ChromatographyColumnDocument,

    /// Injected sample
    #[serde(rename = "sample document")]
    pub sample: SampleDocument,

    /// Integration results
    #[serde(rename = "processed data aggregate document")]
    pub processed_data: ProcessedDataAggregateDocument,

    /// Detector settings
    #[serde(rename = "device control aggregate document")]
    pub device_control: DeviceControlAggregateDocument,

    /// Injection settings
    #[serde(rename = "injection document")]
    pub injection: InjectionDocument,
}

/// Chromatography column metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChromatographyColumnDocument {
    /// Column serial number, `"N/A"` when unknown
    #[serde(rename = "chromatography column serial number")]
    pub serial_number: String,

    /// Stationary phase description
    #[serde(
        rename = "chromatography column chemistry type",
        skip_serializing_if = "Option::is_none"
    )]
    pub chemistry_type: Option<String>,

    /// Product manufacturer
    #[serde(
        rename = "product manufacturer",
        skip_serializing_if = "Option::is_none"
    )]
    pub product_manufacturer: Option<String>,

    /// Column length (m)
    #[serde(
        rename = "chromatography column length",
        skip_serializing_if = "Option::is_none"
    )]
    pub length: Option<Quantity>,

    /// Inner diameter (mm)
    #[serde(
        rename = "column inner diameter",
        skip_serializing_if = "Option::is_none"
    )]
    pub inner_diameter: Option<Quantity>,

    /// Film thickness or particle size (μm)
    #[serde(
        rename = "chromatography column particle size",
        skip_serializing_if = "Option::is_none"
    )]
    pub particle_size: Option<Quantity>,
}

/// Sample identification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleDocument {
    /// Sample identifier
    #[serde(rename = "sample identifier")]
    pub sample_identifier: String,

    /// Written name
    #[serde(rename = "written name")]
    pub written_name: String,

    /// Batch identifier
    #[serde(rename = "batch identifier")]
    pub batch_identifier: String,

    /// Free-text comment on the sample
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// List wrapper for device control documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceControlAggregateDocument {
    /// Detectors, one per measurement
    #[serde(rename = "device control document")]
    pub documents: Vec<DeviceControlDocument>,
}

/// Detector used for one measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceControlDocument {
    /// Device type
    #[serde(rename = "device type")]
    pub device_type: String,

    /// Equipment serial number
    #[serde(
        rename = "equipment serial number",
        skip_serializing_if = "Option::is_none"
    )]
    pub equipment_serial_number: Option<String>,

    /// Product manufacturer
    #[serde(
        rename = "product manufacturer",
        skip_serializing_if = "Option::is_none"
    )]
    pub product_manufacturer: Option<String>,
}

/// Injection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjectionDocument {
    /// Injection identifier
    #[serde(rename = "injection identifier")]
    pub injection_identifier: String,

    /// Injection time
    #[serde(rename = "injection time", skip_serializing_if = "Option::is_none")]
    pub injection_time: Option<DateTime<Utc>>,

    /// Injection volume setting
    #[serde(
        rename = "injection volume setting",
        skip_serializing_if = "Option::is_none"
    )]
    pub injection_volume_setting: Option<Quantity>,
}

use serde::{Deserialize, Serialize};

use super::Quantity;

/// List wrapper for processed data documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessedDataAggregateDocument {
    /// Processed data documents (exactly one per measurement)
    #[serde(rename = "processed data document")]
    pub documents: Vec<ProcessedDataDocument>,
}

/// Integration results of one signal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessedDataDocument {
    /// Integrated peaks
    #[serde(rename = "peak list")]
    pub peak_list: PeakList,
}

/// Integrated peaks of one signal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeakList {
    /// Peaks in elution order
    pub peak: Vec<Peak>,
}

/// One integrated peak.
///
/// Values the data system could not compute are `None` and left out of the
/// serialized document.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    /// 1-based peak number within the signal
    pub identifier: String,

    /// Component name, or `"Peak <n>"` for unidentified peaks
    #[serde(rename = "written name")]
    pub written_name: String,

    #[serde(rename = "retention time", skip_serializing_if = "Option::is_none")]
    pub retention_time: Option<Quantity>,

    #[serde(rename = "peak start", skip_serializing_if = "Option::is_none")]
    pub peak_start: Option<Quantity>,

    #[serde(rename = "peak end", skip_serializing_if = "Option::is_none")]
    pub peak_end: Option<Quantity>,

    #[serde(rename = "peak area", skip_serializing_if = "Option::is_none")]
    pub peak_area: Option<Quantity>,

    #[serde(rename = "peak height", skip_serializing_if = "Option::is_none")]
    pub peak_height: Option<Quantity>,

    #[serde(
        rename = "peak width at baseline",
        skip_serializing_if = "Option::is_none"
    )]
    pub peak_width_at_baseline: Option<Quantity>,

    #[serde(
        rename = "peak width at half height",
        skip_serializing_if = "Option::is_none"
    )]
    pub peak_width_at_half_height: Option<Quantity>,

    #[serde(
        rename = "peak width at 5 % of height",
        skip_serializing_if = "Option::is_none"
    )]
    pub peak_width_at_5_percent_of_height: Option<Quantity>,

    #[serde(
        rename = "asymmetry factor measured at 5 % height",
        skip_serializing_if = "Option::is_none"
    )]
    pub asymmetry_factor: Option<Quantity>,

    #[serde(
        rename = "statistical skew (chromatography)",
        skip_serializing_if = "Option::is_none"
    )]
    pub statistical_skew: Option<Quantity>,

    #[serde(
        rename = "number of theoretical plates by tangent method",
        skip_serializing_if = "Option::is_none"
    )]
    pub plates_by_tangent_method: Option<Quantity>,

    #[serde(
        rename = "number of theoretical plates by peak width at half height",
        skip_serializing_if = "Option::is_none"
    )]
    pub plates_by_half_height: Option<Quantity>,

    #[serde(
        rename = "chromatographic peak resolution using baseline peak widths",
        skip_serializing_if = "Option::is_none"
    )]
    pub resolution_using_baseline_widths: Option<Quantity>,

    #[serde(
        rename = "chromatographic peak resolution using peak width at half height",
        skip_serializing_if = "Option::is_none"
    )]
    pub resolution_using_half_height_width: Option<Quantity>,

    #[serde(
        rename = "chromatographic peak resolution using statistical moments",
        skip_serializing_if = "Option::is_none"
    )]
    pub resolution_using_statistical_moments: Option<Quantity>,

    #[serde(
        rename = "capacity factor (chromatography)",
        skip_serializing_if = "Option::is_none"
    )]
    pub capacity_factor: Option<Quantity>,

    #[serde(
        rename = "relative peak height",
        skip_serializing_if = "Option::is_none"
    )]
    pub relative_peak_height: Option<Quantity>,

    #[serde(
        rename = "relative peak area",
        skip_serializing_if = "Option::is_none"
    )]
    pub relative_peak_area: Option<Quantity>,
}

//! Reporting formulas queried for every peak.
//!
//! Time-valued formulas (`peak.retention_time`, `peak.start_time`,
//! `peak.stop_time` and the `peak.width` family) are reported in minutes.

/// Sentinel: evaluates to an error result once the index is past the last peak
pub const PEAK_NUMBER: &str = "peak.number";

/// Peak (component) name
pub const NAME: &str = "peak.name";

/// Retention time (min)
pub const RETENTION_TIME: &str = "peak.retention_time";
/// Peak start time (min)
pub const START_TIME: &str = "peak.start_time";
/// Peak end time (min)
pub const STOP_TIME: &str = "peak.stop_time";

/// Peak area
pub const AREA: &str = "peak.area";
/// Peak height
pub const HEIGHT: &str = "peak.height";

/// Width at baseline (min)
pub const WIDTH_BASELINE: &str = "peak.width";
/// Width at 50% height (min)
pub const WIDTH_HALF_HEIGHT: &str = "peak.width(50)";
/// Width at 5% height (min)
pub const WIDTH_5_PERCENT: &str = "peak.width(5)";

/// Resolution from baseline peak widths
pub const RESOLUTION_BASELINE: &str = "peak.resolution(\"pre2022-usp\")";
/// Resolution from peak widths at half height
pub const RESOLUTION_HALF_HEIGHT: &str = "peak.resolution(\"ep/usp\")";
/// Resolution from statistical moments
pub const RESOLUTION_STATISTICAL_MOMENTS: &str = "peak.resolution(\"sm\")";

/// Theoretical plates, tangent method
pub const PLATES_TANGENT: &str = "peak.theoretical_plates(\"pre2022-usp\")";
/// Theoretical plates, half height method
pub const PLATES_HALF_HEIGHT: &str = "peak.theoretical_plates(\"ep/usp\")";

/// Asymmetry factor
pub const ASYMMETRY: &str = "peak.asymmetry";
/// Capacity factor (k')
pub const CAPACITY_FACTOR: &str = "peak.kValue";
/// Height relative to the total of all peaks (%)
pub const RELATIVE_HEIGHT: &str = "peak.rel_height(\"total\")";
/// Area relative to the total of all peaks (%)
pub const RELATIVE_AREA: &str = "peak.rel_area(\"total\")";
/// Statistical skewness
pub const SKEWNESS: &str = "peak.skewness";

use serde::{Deserialize, Serialize};

/// Normalised result record for one chromatographic peak.
///
/// Times are in seconds. Area is in signal unit x seconds, height in the
/// signal unit. Any value the data system cannot compute for this peak is
/// `None`, the core results included; the peak itself is always kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeakData {
    /// 1-based position of the peak in its signal
    pub index: usize,

    /// Component name, when the peak is identified
    pub name: Option<String>,

    /// Retention time in s
    pub retention_time_s: Option<f64>,

    /// Peak start in s
    pub start_time_s: Option<f64>,

    /// Peak end in s
    pub end_time_s: Option<f64>,

    /// Peak area
    pub area: Option<f64>,

    /// Peak height
    pub height: Option<f64>,

    /// Width at baseline in s
    pub width_baseline_s: Option<f64>,

    /// Width at 50% height in s
    pub width_half_height_s: Option<f64>,

    /// Width at 5% height in s
    pub width_5_percent_s: Option<f64>,

    /// Resolution using baseline peak widths
    pub resolution_baseline: Option<f64>,

    /// Resolution using peak widths at half height
    pub resolution_half_height: Option<f64>,

    /// Resolution using statistical moments
    pub resolution_statistical_moments: Option<f64>,

    /// Theoretical plates by tangent method
    pub plates_tangent: Option<f64>,

    /// Theoretical plates by width at half height
    pub plates_half_height: Option<f64>,

    /// Asymmetry factor
    pub asymmetry: Option<f64>,

    /// Capacity factor
    pub capacity_factor: Option<f64>,

    /// Relative height in %
    pub relative_height: Option<f64>,

    /// Relative area in %
    pub relative_area: Option<f64>,

    /// Statistical skew
    pub skewness: Option<f64>,
}

impl PeakData {
    /// Create a peak with all core results present; statistics are `None`.
    pub fn new(
        index: usize,
        retention_time_s: f64,
        start_time_s: f64,
        end_time_s: f64,
        area: f64,
        height: f64,
    ) -> Self {
        Self {
            index,
            retention_time_s: Some(retention_time_s),
            start_time_s: Some(start_time_s),
            end_time_s: Some(end_time_s),
            area: Some(area),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Set the component name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name used in reports: the component name, or `"Peak <index>"`
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Peak {}", self.index),
        }
    }
}

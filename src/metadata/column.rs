use serde::{Deserialize, Serialize};

/// Normalized chromatography column metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnDetails {
    /// Column description or chemistry type
    pub description: Option<String>,

    /// Column length in m
    pub length_m: Option<f64>,

    /// Column internal diameter in mm
    pub internal_diameter_mm: Option<f64>,

    /// Film thickness (or particle size) in um
    pub film_thickness_um: Option<f64>,
}

impl ColumnDetails {
    /// Create empty column details
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no field could be resolved
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.length_m.is_none()
            && self.internal_diameter_mm.is_none()
            && self.film_thickness_um.is_none()
    }
}

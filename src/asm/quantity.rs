use serde::{Deserialize, Serialize};

/// Unit tokens used in the output document
pub mod units {
    /// Seconds
    pub const SECONDS: &str = "s";
    /// Meters
    pub const METERS: &str = "m";
    /// Millimeters
    pub const MILLIMETERS: &str = "mm";
    /// Micrometers
    pub const MICROMETERS: &str = "μm";
    /// Microliters
    pub const MICROLITERS: &str = "μL";
    /// Percent
    pub const PERCENT: &str = "%";
    /// Dimensionless values
    pub const UNITLESS: &str = "(unitless)";
    /// Detector response without a declared unit
    pub const ARBITRARY: &str = "arb";
}

/// A value with its unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Numeric value
    pub value: f64,
    /// Unit token
    pub unit: String,
}

impl Quantity {
    /// Create a quantity
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Quantity in seconds
    pub fn seconds(value: f64) -> Self {
        Self::new(value, units::SECONDS)
    }

    /// Dimensionless quantity
    pub fn unitless(value: f64) -> Self {
        Self::new(value, units::UNITLESS)
    }

    /// Percentage
    pub fn percent(value: f64) -> Self {
        Self::new(value, units::PERCENT)
    }
}

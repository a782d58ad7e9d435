use serde::{Deserialize, Serialize};

/// Component data type of every cube axis
pub const COMPONENT_DATATYPE_DOUBLE: &str = "double";

/// Chromatogram as a data cube: one time dimension, one response measure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChromatogramDataCube {
    /// Cube label (signal name)
    pub label: String,

    /// Axis description
    #[serde(rename = "cube-structure")]
    pub cube_structure: CubeStructure,

    /// Axis values
    pub data: CubeData,
}

/// Dimensions and measures of a data cube
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CubeStructure {
    /// Independent axes
    pub dimensions: Vec<CubeComponent>,
    /// Dependent axes
    pub measures: Vec<CubeComponent>,
}

/// One axis of a data cube
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeComponent {
    /// Value type of the axis
    #[serde(rename = "@componentDatatype")]
    pub component_datatype: String,

    /// Quantity carried by the axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,

    /// Unit of the axis values
    pub unit: String,
}

impl CubeComponent {
    /// Axis of doubles
    pub fn double(concept: Option<&str>, unit: impl Into<String>) -> Self {
        Self {
            component_datatype: COMPONENT_DATATYPE_DOUBLE.to_string(),
            concept: concept.map(str::to_string),
            unit: unit.into(),
        }
    }
}

/// Values of a data cube, one array per axis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CubeData {
    /// Dimension values
    pub dimensions: Vec<Vec<f64>>,
    /// Measure values
    pub measures: Vec<Vec<f64>>,
}

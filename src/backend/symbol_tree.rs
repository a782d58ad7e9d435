//! In-memory symbol tree.
//!
//! [`SymbolNode`] is the owned form of an instrument method symbol tree. It is
//! what injection exports deserialize into and what tests build by hand:
//!
//! ```
//! use chromasm::backend::{Symbol, SymbolNode};
//!
//! let root = SymbolNode::new("Root").with_child(
//!     SymbolNode::new("GC").with_child(SymbolNode::leaf("SerialNo", "US1234")),
//! );
//! assert_eq!(
//!     root.find_child("GC.SerialNo").and_then(|s| s.current_value()),
//!     Some("US1234".to_string())
//! );
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use super::Symbol;

/// Owned symbol tree node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolNode {
    /// Node name (one path segment)
    pub name: String,

    /// Value stored in the instrument method
    #[serde(
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub offline_value: Option<String>,

    /// Value reported by the running instrument
    #[serde(
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub online_value: Option<String>,

    /// Untyped fallback value
    #[serde(
        default,
        rename = "value",
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub generic_value: Option<String>,

    /// Child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SymbolNode>,
}

impl SymbolNode {
    /// Create a branch node without values
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a leaf carrying a generic value
    pub fn leaf(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generic_value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Set the offline value
    pub fn with_offline_value(mut self, value: impl Into<String>) -> Self {
        self.offline_value = Some(value.into());
        self
    }

    /// Set the online value
    pub fn with_online_value(mut self, value: impl Into<String>) -> Self {
        self.online_value = Some(value.into());
        self
    }

    /// Append a child node
    pub fn with_child(mut self, child: SymbolNode) -> Self {
        self.children.push(child);
        self
    }
}

impl Symbol for SymbolNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn child(&self, name: &str) -> Option<&dyn Symbol> {
        self.children
            .iter()
            .find(|c| c.name == name)
            .map(|c| c as &dyn Symbol)
    }

    fn offline_value(&self) -> Option<String> {
        self.offline_value.clone()
    }

    fn online_value(&self) -> Option<String> {
        self.online_value.clone()
    }

    fn generic_value(&self) -> Option<String> {
        self.generic_value.clone()
    }
}

/// Accept strings, numbers and booleans for symbol values.
///
/// Instrument methods store most values as numbers; the tree keeps them as the
/// text the instrument would display.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }))
}

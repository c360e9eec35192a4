//! Design variables as returned by the lookup collaborator, and the records
//! collected for the ones a conversion actually used.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::paint::RgbaColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableType {
    Color,
    Float,
    String,
    Boolean,
}

/// A per-mode variable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Color(RgbaColor),
    Alias { id: String },
    Float(f64),
    Boolean(bool),
    String(String),
}

/// A variable exposed by the design document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    pub name: String,
    pub resolved_type: VariableType,
    #[serde(default)]
    pub values_by_mode: BTreeMap<String, VariableValue>,
}

impl Variable {
    pub fn default_value(&self) -> Option<&VariableValue> {
        self.values_by_mode.get("default")
    }
}

/// A variable referenced by the converted tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<VariableValue>,
}

impl VariableRecord {
    /// Record for a color variable; falls back to the paint color when the
    /// variable has no default-mode value.
    pub fn color(id: &str, variable: &Variable, paint_color: Option<RgbaColor>) -> Self {
        Self {
            id: id.to_string(),
            name: variable.name.clone(),
            kind: "color".to_string(),
            value: variable
                .default_value()
                .cloned()
                .or_else(|| paint_color.map(VariableValue::Color)),
        }
    }
}

//! Font records collected from text nodes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSource {
    Google,
    System,
}

/// A font family used by the converted tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRecord {
    #[serde(rename = "type")]
    pub source: FontSource,
    pub family: String,
    /// Distinct numeric weights, ascending.
    pub weights: Vec<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

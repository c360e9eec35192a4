//! Versioned output envelope written by the CLI.

use serde::{Deserialize, Serialize};

use crate::error::ErrorPayload;
use crate::result::ConversionResult;

pub const FWW_OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum FwwOutput {
    Convert(ConvertOutput),
    Error(ErrorOutput),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertOutput {
    pub version: String,
    /// Where the selection was read from.
    pub input: String,
    pub node_count: usize,
    pub result: ConversionResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: ErrorPayload,
}

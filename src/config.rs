//! Conversion policy loaded from TOML.
//!
//! Every section is optional; omitted values fall back to the built-in
//! heuristics.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{FwwError, Result};

pub const DEFAULT_WEB_FONTS: [&str; 10] = [
    "Roboto",
    "Open Sans",
    "Inter",
    "Poppins",
    "Montserrat",
    "Lato",
    "Raleway",
    "Nunito",
    "Work Sans",
    "Playfair Display",
];

pub const DEFAULT_FONT_REQUEST_BASE: &str = "https://fonts.googleapis.com/css2";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sizing: SizingPolicy,
    pub margin: MarginPolicy,
    pub responsive: ResponsivePolicy,
    pub fonts: FontPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingPolicy {
    /// Width/parent-width ratio at or above which a node becomes `100%`.
    pub full_width_ratio: f64,
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self {
            full_width_ratio: 0.95,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginPolicy {
    /// Max distance in px between node and parent centers to count as centered.
    pub center_tolerance: f64,
}

impl Default for MarginPolicy {
    fn default() -> Self {
        Self {
            center_tolerance: 5.0,
        }
    }
}

/// One row of the tablet padding reduction table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddingStep {
    pub min: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsivePolicy {
    /// Fixed widths above this collapse to `maxWidth: 100%` on tablet.
    pub max_width_threshold: f64,
    /// Checked in order; the first step whose `min` the padding reaches wins.
    pub padding_steps: Vec<PaddingStep>,
}

impl Default for ResponsivePolicy {
    fn default() -> Self {
        Self {
            max_width_threshold: 768.0,
            padding_steps: vec![
                PaddingStep {
                    min: 40.0,
                    value: 24.0,
                },
                PaddingStep {
                    min: 32.0,
                    value: 20.0,
                },
                PaddingStep {
                    min: 24.0,
                    value: 16.0,
                },
                PaddingStep {
                    min: 16.0,
                    value: 12.0,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontPolicy {
    /// Families served by the web-font endpoint.
    pub web_fonts: Vec<String>,
    pub request_base: String,
}

impl Default for FontPolicy {
    fn default() -> Self {
        Self {
            web_fonts: DEFAULT_WEB_FONTS.iter().map(|s| s.to_string()).collect(),
            request_base: DEFAULT_FONT_REQUEST_BASE.to_string(),
        }
    }
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| FwwError::Config(e.to_string()))
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        let ratio = self.sizing.full_width_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(FwwError::Config(format!(
                "sizing.full_width_ratio must be in (0, 1], got {ratio}"
            )));
        }
        if !(self.margin.center_tolerance >= 0.0) {
            return Err(FwwError::Config(format!(
                "margin.center_tolerance must be >= 0, got {}",
                self.margin.center_tolerance
            )));
        }
        if !(self.responsive.max_width_threshold > 0.0) {
            return Err(FwwError::Config(format!(
                "responsive.max_width_threshold must be > 0, got {}",
                self.responsive.max_width_threshold
            )));
        }
        for pair in self.responsive.padding_steps.windows(2) {
            if pair[1].min >= pair[0].min {
                return Err(FwwError::Config(format!(
                    "responsive.padding_steps must be strictly descending by min ({} then {})",
                    pair[0].min, pair[1].min
                )));
            }
        }
        if let Some(step) = self
            .responsive
            .padding_steps
            .iter()
            .find(|s| s.value < 0.0 || s.min <= 0.0)
        {
            return Err(FwwError::Config(format!(
                "responsive.padding_steps entries need min > 0 and value >= 0 (min {}, value {})",
                step.min, step.value
            )));
        }
        Url::parse(&self.fonts.request_base)?;
        Ok(())
    }
}

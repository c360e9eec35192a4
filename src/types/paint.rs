//! Paint, color and effect types.
//!
//! Colors use the plugin API convention of normalized `0.0..=1.0` channels.

use serde::{Deserialize, Serialize};

fn default_alpha() -> f64 {
    1.0
}

fn default_visible() -> bool {
    true
}

/// An RGBA color with normalized channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbaColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

impl RgbaColor {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

/// Reference from a paint property to a design variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableAlias {
    pub id: String,
}

/// Variables bound to the properties of a paint or effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundVariables {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<VariableAlias>,
}

/// Paint kinds; only `Solid` produces CSS output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Video,
    /// Any paint type without a CSS mapping.
    #[serde(other)]
    Other,
}

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<RgbaColor>,
    /// Paint-level opacity; overrides the color's own alpha when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound_variables: Option<BoundVariables>,
}

impl Paint {
    pub fn solid(color: RgbaColor) -> Self {
        Self {
            kind: PaintKind::Solid,
            visible: true,
            color: Some(color),
            opacity: None,
            bound_variables: None,
        }
    }

    /// Binds the paint color to the variable with `id`.
    pub fn with_variable(mut self, id: impl Into<String>) -> Self {
        self.bound_variables = Some(BoundVariables {
            color: Some(VariableAlias { id: id.into() }),
        });
        self
    }

    pub fn is_visible_solid(&self) -> bool {
        self.kind == PaintKind::Solid && self.visible
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// A node effect (shadow or blur).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    #[serde(rename = "type")]
    pub kind: EffectKind,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<RgbaColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Vector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound_variables: Option<BoundVariables>,
}

/// Anything the color resolver can format: paints and shadow effects.
pub trait ColorSource {
    fn color(&self) -> Option<RgbaColor>;
    fn opacity(&self) -> Option<f64>;
    fn bound_color_variable(&self) -> Option<&str>;
}

impl ColorSource for Paint {
    fn color(&self) -> Option<RgbaColor> {
        self.color
    }

    fn opacity(&self) -> Option<f64> {
        self.opacity
    }

    fn bound_color_variable(&self) -> Option<&str> {
        self.bound_variables
            .as_ref()
            .and_then(|b| b.color.as_ref())
            .map(|alias| alias.id.as_str())
    }
}

impl ColorSource for Effect {
    fn color(&self) -> Option<RgbaColor> {
        self.color
    }

    // Effects carry alpha on the color itself.
    fn opacity(&self) -> Option<f64> {
        None
    }

    fn bound_color_variable(&self) -> Option<&str> {
        self.bound_variables
            .as_ref()
            .and_then(|b| b.color.as_ref())
            .map(|alias| alias.id.as_str())
    }
}

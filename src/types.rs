//! Data types used throughout the library.
//!
//! - [`node`] - Input scene graph (tagged by node type)
//! - [`paint`] - Colors, paints, effects and bound variables
//! - [`component`] - Output component tree and style maps
//! - [`variable`] - Design variables and collected variable records
//! - [`font`] - Collected font records

pub mod component;
pub mod font;
pub mod node;
pub mod paint;
pub mod variable;

pub use component::{Component, FigmaAttrs, Props, Slots, StyleMap, Styles, Tag};
pub use font::{FontRecord, FontSource};
pub use node::{
    AutoLayout, CounterAxisAlign, FontName, FrameNode, GroupNode, LayoutAlign, LayoutMode,
    LayoutPositioning, LayoutSizing, LayoutWrap, NodeCommon, NodeKind, PaddingSide, PaintProps,
    ParentContext, PrimaryAxisAlign, SceneNode, SectionNode, ShapeNode, TextNode, TextProps,
};
pub use paint::{
    BoundVariables, ColorSource, Effect, EffectKind, Paint, PaintKind, RgbaColor, VariableAlias,
    Vector,
};
pub use variable::{Variable, VariableRecord, VariableType, VariableValue};

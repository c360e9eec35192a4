//! Input scene graph.
//!
//! Nodes mirror the JSON a design plugin exports for its selection: camelCase
//! keys, a `type` discriminant and per-type optional attributes. The converter
//! only ever reads them.

use serde::{Deserialize, Serialize};

use super::paint::{Effect, Paint};

/// Auto-layout direction of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    None,
    Horizontal,
    Vertical,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    Min,
    Center,
    Max,
    Stretch,
    Baseline,
}

/// How a child aligns itself on its parent's counter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutAlign {
    Min,
    Center,
    Max,
    Stretch,
    Inherit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutSizing {
    Fixed,
    Hug,
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutWrap {
    NoWrap,
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutPositioning {
    Auto,
    Absolute,
}

/// What a child sees of its parent: nothing but width and layout mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<LayoutMode>,
}

/// Attributes shared by every node type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeCommon {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_sizing_horizontal: Option<LayoutSizing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_sizing_vertical: Option<LayoutSizing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_grow: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_align: Option<LayoutAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_positioning: Option<LayoutPositioning>,
    /// Caller-supplied parent context; only consulted for the root node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentContext>,
}

/// Auto-layout and padding attributes of frame-like nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<LayoutMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_axis_align_items: Option<PrimaryAxisAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_axis_align_items: Option<CounterAxisAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_wrap: Option<LayoutWrap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_axis_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_axis_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
}

impl AutoLayout {
    pub fn is_wrapped(&self) -> bool {
        self.layout_wrap == Some(LayoutWrap::Wrap)
    }

    /// Padding sides in CSS order: top, right, bottom, left.
    pub fn padding_sides(&self) -> [(PaddingSide, Option<f64>); 4] {
        [
            (PaddingSide::Top, self.padding_top),
            (PaddingSide::Right, self.padding_right),
            (PaddingSide::Bottom, self.padding_bottom),
            (PaddingSide::Left, self.padding_left),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl PaddingSide {
    pub fn style_key(self) -> &'static str {
        match self {
            PaddingSide::Top => "paddingTop",
            PaddingSide::Right => "paddingRight",
            PaddingSide::Bottom => "paddingBottom",
            PaddingSide::Left => "paddingLeft",
        }
    }
}

/// Fills, strokes, effects and corner radius.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintProps {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<FontName>,
}

/// FRAME, COMPONENT and INSTANCE nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameNode {
    #[serde(flatten)]
    pub common: NodeCommon,
    #[serde(flatten)]
    pub layout: AutoLayout,
    #[serde(flatten)]
    pub paint: PaintProps,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    #[serde(flatten)]
    pub common: NodeCommon,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionNode {
    #[serde(flatten)]
    pub common: NodeCommon,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    #[serde(flatten)]
    pub common: NodeCommon,
    #[serde(flatten)]
    pub paint: PaintProps,
    #[serde(flatten)]
    pub text: TextProps,
}

/// RECTANGLE, ELLIPSE and LINE nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeNode {
    #[serde(flatten)]
    pub common: NodeCommon,
    #[serde(flatten)]
    pub paint: PaintProps,
}

/// A node of the design scene graph, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SceneNode {
    Frame(FrameNode),
    Component(FrameNode),
    Instance(FrameNode),
    Group(GroupNode),
    Section(SectionNode),
    Text(TextNode),
    Rectangle(ShapeNode),
    Ellipse(ShapeNode),
    Line(ShapeNode),
}

/// The `type` discriminant of a [`SceneNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Frame,
    Component,
    Instance,
    Group,
    Section,
    Text,
    Rectangle,
    Ellipse,
    Line,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Frame => "FRAME",
            NodeKind::Component => "COMPONENT",
            NodeKind::Instance => "INSTANCE",
            NodeKind::Group => "GROUP",
            NodeKind::Section => "SECTION",
            NodeKind::Text => "TEXT",
            NodeKind::Rectangle => "RECTANGLE",
            NodeKind::Ellipse => "ELLIPSE",
            NodeKind::Line => "LINE",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SceneNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            SceneNode::Frame(_) => NodeKind::Frame,
            SceneNode::Component(_) => NodeKind::Component,
            SceneNode::Instance(_) => NodeKind::Instance,
            SceneNode::Group(_) => NodeKind::Group,
            SceneNode::Section(_) => NodeKind::Section,
            SceneNode::Text(_) => NodeKind::Text,
            SceneNode::Rectangle(_) => NodeKind::Rectangle,
            SceneNode::Ellipse(_) => NodeKind::Ellipse,
            SceneNode::Line(_) => NodeKind::Line,
        }
    }

    pub fn common(&self) -> &NodeCommon {
        match self {
            SceneNode::Frame(n) | SceneNode::Component(n) | SceneNode::Instance(n) => &n.common,
            SceneNode::Group(n) => &n.common,
            SceneNode::Section(n) => &n.common,
            SceneNode::Text(n) => &n.common,
            SceneNode::Rectangle(n) | SceneNode::Ellipse(n) | SceneNode::Line(n) => &n.common,
        }
    }

    pub fn id(&self) -> &str {
        &self.common().id
    }

    pub fn name(&self) -> &str {
        &self.common().name
    }

    pub fn width(&self) -> Option<f64> {
        self.common().width
    }

    /// Auto-layout attributes; only frame-like nodes have them.
    pub fn auto_layout(&self) -> Option<&AutoLayout> {
        match self {
            SceneNode::Frame(n) | SceneNode::Component(n) | SceneNode::Instance(n) => {
                Some(&n.layout)
            }
            _ => None,
        }
    }

    pub fn layout_mode(&self) -> Option<LayoutMode> {
        self.auto_layout().and_then(|layout| layout.layout_mode)
    }

    fn paint_props(&self) -> Option<&PaintProps> {
        match self {
            SceneNode::Frame(n) | SceneNode::Component(n) | SceneNode::Instance(n) => {
                Some(&n.paint)
            }
            SceneNode::Text(n) => Some(&n.paint),
            SceneNode::Rectangle(n) | SceneNode::Ellipse(n) | SceneNode::Line(n) => Some(&n.paint),
            SceneNode::Group(_) | SceneNode::Section(_) => None,
        }
    }

    pub fn fills(&self) -> &[Paint] {
        match self {
            SceneNode::Section(n) => &n.fills,
            _ => self.paint_props().map(|p| p.fills.as_slice()).unwrap_or(&[]),
        }
    }

    pub fn strokes(&self) -> &[Paint] {
        self.paint_props()
            .map(|p| p.strokes.as_slice())
            .unwrap_or(&[])
    }

    pub fn stroke_weight(&self) -> Option<f64> {
        self.paint_props().and_then(|p| p.stroke_weight)
    }

    pub fn effects(&self) -> &[Effect] {
        match self {
            SceneNode::Group(n) => &n.effects,
            _ => self
                .paint_props()
                .map(|p| p.effects.as_slice())
                .unwrap_or(&[]),
        }
    }

    pub fn corner_radius(&self) -> Option<f64> {
        self.paint_props().and_then(|p| p.corner_radius)
    }

    pub fn text(&self) -> Option<&TextProps> {
        match self {
            SceneNode::Text(n) => Some(&n.text),
            _ => None,
        }
    }

    pub fn children(&self) -> &[SceneNode] {
        match self {
            SceneNode::Frame(n) | SceneNode::Component(n) | SceneNode::Instance(n) => &n.children,
            SceneNode::Group(n) => &n.children,
            SceneNode::Section(n) => &n.children,
            SceneNode::Text(_)
            | SceneNode::Rectangle(_)
            | SceneNode::Ellipse(_)
            | SceneNode::Line(_) => &[],
        }
    }

    /// Container types always get a `children` slot, even when empty.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            SceneNode::Frame(_) | SceneNode::Component(_) | SceneNode::Instance(_) | SceneNode::Group(_)
        )
    }

    /// The context this node hands down to its children.
    pub fn as_parent(&self) -> ParentContext {
        ParentContext {
            width: self.width(),
            layout_mode: self.layout_mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_frame_with_layout_and_children() {
        let node: SceneNode = serde_json::from_value(json!({
            "type": "FRAME",
            "id": "1:2",
            "name": "Card",
            "width": 320,
            "layoutMode": "VERTICAL",
            "paddingTop": 12,
            "fills": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1}}],
            "children": [
                {"type": "TEXT", "id": "1:3", "name": "Title", "characters": "Hi", "fontSize": 16}
            ]
        }))
        .unwrap();

        assert_eq!(node.kind(), NodeKind::Frame);
        assert_eq!(node.layout_mode(), Some(LayoutMode::Vertical));
        assert_eq!(node.auto_layout().unwrap().padding_top, Some(12.0));
        assert_eq!(node.fills().len(), 1);
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].kind(), NodeKind::Text);
        assert_eq!(
            node.children()[0].text().unwrap().characters.as_deref(),
            Some("Hi")
        );
    }

    #[test]
    fn group_and_frame_are_containers_but_text_is_not() {
        let group: SceneNode =
            serde_json::from_value(json!({"type": "GROUP", "id": "g"})).unwrap();
        let text: SceneNode = serde_json::from_value(json!({"type": "TEXT", "id": "t"})).unwrap();
        let section: SceneNode =
            serde_json::from_value(json!({"type": "SECTION", "id": "s"})).unwrap();
        assert!(group.is_container());
        assert!(!text.is_container());
        assert!(!section.is_container());
        assert!(group.children().is_empty());
    }

    #[test]
    fn unknown_node_type_is_rejected() {
        let result: Result<SceneNode, _> =
            serde_json::from_value(json!({"type": "STICKY", "id": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn as_parent_carries_width_and_layout_mode_only() {
        let node: SceneNode = serde_json::from_value(json!({
            "type": "INSTANCE",
            "id": "i",
            "width": 200,
            "x": 40,
            "layoutMode": "HORIZONTAL"
        }))
        .unwrap();
        assert_eq!(
            node.as_parent(),
            ParentContext {
                width: Some(200.0),
                layout_mode: Some(LayoutMode::Horizontal),
            }
        );
    }

    #[test]
    fn rectangle_has_no_layout_mode() {
        let node: SceneNode = serde_json::from_value(json!({
            "type": "RECTANGLE",
            "id": "r",
            "width": 10,
            "cornerRadius": 4
        }))
        .unwrap();
        assert_eq!(node.as_parent().layout_mode, None);
        assert_eq!(node.corner_radius(), Some(4.0));
    }
}

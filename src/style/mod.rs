//! Per-node style extraction.
//!
//! Each concern lives in its own module and is a function of the node and
//! the [`ParentContext`] only. [`StyleResolver::resolve`] layers them in a
//! fixed order into the default-breakpoint style map.

mod flex;
mod margin;
mod paint;
mod sizing;
mod text;

pub use flex::layout_styles;
pub use margin::margin_styles;
pub use paint::{background_styles, border_styles, box_shadow_styles};
pub use sizing::{padding_styles, size_styles};
pub use text::text_styles;

use crate::color::ColorResolver;
use crate::config::{Config, MarginPolicy, SizingPolicy};
use crate::types::{ParentContext, SceneNode, StyleMap};

/// Formats a length as CSS pixels. Negative zero prints as `0px`.
pub fn px(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}px")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StyleResolver {
    sizing: SizingPolicy,
    margin: MarginPolicy,
}

impl StyleResolver {
    pub fn new(sizing: SizingPolicy, margin: MarginPolicy) -> Self {
        Self { sizing, margin }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.sizing, config.margin)
    }

    /// Default-breakpoint styles for `node`.
    pub fn resolve(
        &self,
        node: &SceneNode,
        parent: &ParentContext,
        colors: &mut dyn ColorResolver,
    ) -> StyleMap {
        let mut styles = size_styles(node, parent, &self.sizing);
        styles.merge(padding_styles(node));
        styles.merge(layout_styles(node));
        styles.merge(background_styles(node, colors));
        styles.merge(border_styles(node, colors));
        styles.merge(box_shadow_styles(node, colors));
        styles.merge(margin_styles(node, parent, &self.margin));
        styles.merge(text_styles(node, colors));
        styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::VariableColorResolver;
    use crate::types::LayoutMode;
    use crate::variables::NoVariables;
    use serde_json::json;

    #[test]
    fn px_drops_trailing_zero_fraction() {
        assert_eq!(px(12.0), "12px");
        assert_eq!(px(0.5), "0.5px");
        assert_eq!(px(-0.0), "0px");
        assert_eq!(px(-2.0), "-2px");
    }

    #[test]
    fn resolve_layers_every_concern() {
        let node: SceneNode = serde_json::from_value(json!({
            "type": "FRAME",
            "id": "f",
            "width": 1440,
            "height": 600,
            "layoutMode": "VERTICAL",
            "paddingTop": 12,
            "primaryAxisAlignItems": "CENTER",
            "counterAxisAlignItems": "CENTER",
            "cornerRadius": 4,
            "layoutAlign": "CENTER",
            "fills": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1}}]
        }))
        .unwrap();
        let parent = ParentContext {
            width: Some(1440.0),
            layout_mode: Some(LayoutMode::Vertical),
        };
        let styles = StyleResolver::default().resolve(
            &node,
            &parent,
            &mut VariableColorResolver::new(&NoVariables),
        );

        let expected = StyleMap::from([
            ("width", "100%"),
            ("height", "600px"),
            ("paddingTop", "12px"),
            ("display", "flex"),
            ("flexDirection", "column"),
            ("justifyContent", "center"),
            ("alignItems", "center"),
            ("alignSelf", "center"),
            ("background", "#FFF"),
            ("borderRadius", "4px"),
            ("marginLeft", "auto"),
            ("marginRight", "auto"),
        ]);
        assert_eq!(styles, expected);
    }
}

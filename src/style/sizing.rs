use crate::config::SizingPolicy;
use crate::types::{LayoutSizing, ParentContext, SceneNode, StyleMap};

use super::px;

/// Width, min/max width and height.
///
/// FILL sizing always wins. Otherwise a width close enough to the parent's
/// (see [`SizingPolicy::full_width_ratio`]) is promoted to `100%`; without a
/// known parent width the literal width is kept.
pub fn size_styles(node: &SceneNode, parent: &ParentContext, policy: &SizingPolicy) -> StyleMap {
    let common = node.common();
    let mut styles = StyleMap::new();

    if common.layout_sizing_horizontal == Some(LayoutSizing::Fill) {
        styles.set("width", "100%");
    } else if let Some(width) = common.width {
        match parent.width {
            Some(parent_width) => {
                let ratio = width / parent_width;
                if ratio == 1.0 || ratio >= policy.full_width_ratio {
                    styles.set("width", "100%");
                } else {
                    styles.set("width", px(width));
                }
            }
            None => styles.set("width", px(width)),
        }
    }

    if let Some(max_width) = common.max_width.filter(|w| *w > 0.0) {
        styles.set("maxWidth", px(max_width));
    }
    if let Some(min_width) = common.min_width.filter(|w| *w > 0.0) {
        styles.set("minWidth", px(min_width));
    }

    // HUG lets the content decide the height.
    if common.layout_sizing_vertical != Some(LayoutSizing::Hug) {
        if let Some(height) = common.height {
            styles.set("height", px(height));
        }
    }

    styles
}

/// Positive padding sides only.
pub fn padding_styles(node: &SceneNode) -> StyleMap {
    let mut styles = StyleMap::new();
    let Some(layout) = node.auto_layout() else {
        return styles;
    };
    for (side, value) in layout.padding_sides() {
        if let Some(value) = value.filter(|v| *v > 0.0) {
            styles.set(side.style_key(), px(value));
        }
    }
    styles
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> SceneNode {
        serde_json::from_value(value).unwrap()
    }

    fn parent(width: f64) -> ParentContext {
        ParentContext {
            width: Some(width),
            layout_mode: None,
        }
    }

    fn width_of(node_width: f64, parent_width: f64) -> String {
        let n = node(json!({"type": "FRAME", "id": "n", "width": node_width}));
        size_styles(&n, &parent(parent_width), &SizingPolicy::default())
            .get("width")
            .unwrap()
            .to_string()
    }

    #[test]
    fn ratio_boundary_is_exact() {
        assert_eq!(width_of(95.0, 100.0), "100%");
        assert_eq!(width_of(94.99999, 100.0), "94.99999px");
        assert_eq!(width_of(100.0, 100.0), "100%");
        assert_eq!(width_of(120.0, 100.0), "100%");
        assert_eq!(width_of(50.0, 100.0), "50px");
    }

    #[test]
    fn no_parent_keeps_literal_width() {
        let n = node(json!({"type": "RECTANGLE", "id": "r", "width": 1440, "height": 20}));
        let styles = size_styles(&n, &ParentContext::default(), &SizingPolicy::default());
        assert_eq!(styles.get("width"), Some("1440px"));
        assert_eq!(styles.get("height"), Some("20px"));
    }

    #[test]
    fn fill_wins_and_constraints_pass_through() {
        let n = node(json!({
            "type": "FRAME",
            "id": "f",
            "width": 10,
            "layoutSizingHorizontal": "FILL",
            "maxWidth": 1200,
            "minWidth": 0
        }));
        let styles = size_styles(&n, &parent(1000.0), &SizingPolicy::default());
        assert_eq!(styles.get("width"), Some("100%"));
        assert_eq!(styles.get("maxWidth"), Some("1200px"));
        assert!(!styles.contains_key("minWidth"));
    }

    #[test]
    fn hug_height_is_omitted() {
        let n = node(json!({
            "type": "FRAME",
            "id": "f",
            "height": 300,
            "layoutSizingVertical": "HUG"
        }));
        let styles = size_styles(&n, &ParentContext::default(), &SizingPolicy::default());
        assert!(!styles.contains_key("height"));
        assert!(!styles.contains_key("width"));
    }

    #[test]
    fn custom_ratio_policy_is_honored() {
        let n = node(json!({"type": "FRAME", "id": "n", "width": 90}));
        let policy = SizingPolicy {
            full_width_ratio: 0.9,
        };
        let styles = size_styles(&n, &parent(100.0), &policy);
        assert_eq!(styles.get("width"), Some("100%"));
    }

    #[test]
    fn only_positive_padding_is_emitted() {
        let n = node(json!({
            "type": "FRAME",
            "id": "f",
            "paddingTop": 12,
            "paddingRight": 0,
            "paddingLeft": 8.5
        }));
        let styles = padding_styles(&n);
        assert_eq!(styles.get("paddingTop"), Some("12px"));
        assert_eq!(styles.get("paddingLeft"), Some("8.5px"));
        assert!(!styles.contains_key("paddingRight"));
        assert!(!styles.contains_key("paddingBottom"));
    }
}

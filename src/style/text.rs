use crate::color::ColorResolver;
use crate::types::{PaintKind, SceneNode, StyleMap};

use super::px;

/// Font size, family and color of text nodes; empty for anything else.
///
/// The color comes from the first fill when it is solid and is `inherit`
/// otherwise.
pub fn text_styles(node: &SceneNode, colors: &mut dyn ColorResolver) -> StyleMap {
    let mut styles = StyleMap::new();
    let Some(text) = node.text() else {
        return styles;
    };

    if let Some(size) = text.font_size {
        styles.set("fontSize", px(size));
    }
    if let Some(font) = &text.font_name {
        styles.set("fontFamily", format!("\"{}\"", font.family));
    }

    let color = match node.fills().first() {
        Some(fill) if fill.kind == PaintKind::Solid => colors.resolve(fill),
        _ => "inherit".to_string(),
    };
    styles.set("color", color);

    styles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::VariableColorResolver;
    use crate::variables::NoVariables;
    use serde_json::json;

    fn styles_for(value: serde_json::Value) -> StyleMap {
        let node: SceneNode = serde_json::from_value(value).unwrap();
        text_styles(&node, &mut VariableColorResolver::new(&NoVariables))
    }

    #[test]
    fn text_gets_size_family_and_color() {
        let styles = styles_for(json!({
            "type": "TEXT",
            "id": "t",
            "fontSize": 16,
            "fontName": {"family": "Open Sans", "style": "Bold"},
            "fills": [{"type": "SOLID", "color": {"r": 0.2, "g": 0.2, "b": 0.2}}]
        }));
        assert_eq!(styles.get("fontSize"), Some("16px"));
        assert_eq!(styles.get("fontFamily"), Some("\"Open Sans\""));
        assert_eq!(styles.get("color"), Some("#333"));
    }

    #[test]
    fn color_defaults_to_inherit() {
        let styles = styles_for(json!({"type": "TEXT", "id": "t"}));
        assert_eq!(styles, StyleMap::from([("color", "inherit")]));

        let styles = styles_for(json!({
            "type": "TEXT",
            "id": "t",
            "fills": [{"type": "IMAGE"}]
        }));
        assert_eq!(styles.get("color"), Some("inherit"));
    }

    #[test]
    fn non_text_nodes_are_untouched() {
        let styles = styles_for(json!({"type": "FRAME", "id": "f", "fontSize": 16}));
        assert!(styles.is_empty());
    }
}

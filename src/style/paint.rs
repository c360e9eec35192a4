use crate::color::ColorResolver;
use crate::types::{EffectKind, NodeKind, SceneNode, StyleMap};

use super::px;

/// Background from the first fill, when it is a visible solid.
///
/// Text nodes use their fill as the text color instead.
pub fn background_styles(node: &SceneNode, colors: &mut dyn ColorResolver) -> StyleMap {
    let mut styles = StyleMap::new();
    if node.kind() == NodeKind::Text {
        return styles;
    }
    if let Some(fill) = node.fills().first().filter(|f| f.is_visible_solid()) {
        styles.set("background", colors.resolve(fill));
    }
    styles
}

/// Border from the first stroke plus corner radius.
pub fn border_styles(node: &SceneNode, colors: &mut dyn ColorResolver) -> StyleMap {
    let mut styles = StyleMap::new();

    if let Some(stroke) = node.strokes().first().filter(|s| s.is_visible_solid()) {
        let weight = node.stroke_weight().filter(|w| *w != 0.0).unwrap_or(1.0);
        let color = colors.resolve(stroke);
        styles.set("border", format!("{} solid {}", px(weight), color));
    }

    if let Some(radius) = node.corner_radius().filter(|r| *r > 0.0) {
        styles.set("borderRadius", px(radius));
    }

    styles
}

/// Visible drop shadows, comma-joined in effect order.
pub fn box_shadow_styles(node: &SceneNode, colors: &mut dyn ColorResolver) -> StyleMap {
    let mut styles = StyleMap::new();

    let shadows: Vec<String> = node
        .effects()
        .iter()
        .filter(|effect| effect.kind == EffectKind::DropShadow && effect.visible)
        .map(|shadow| {
            let offset = shadow.offset.unwrap_or_default();
            format!(
                "{} {} {} {} {}",
                px(offset.x),
                px(offset.y),
                px(shadow.radius.unwrap_or(0.0)),
                px(shadow.spread.unwrap_or(0.0)),
                colors.resolve(shadow)
            )
        })
        .collect();

    if !shadows.is_empty() {
        styles.set("boxShadow", shadows.join(", "));
    }
    styles
}

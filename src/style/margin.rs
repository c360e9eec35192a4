use crate::config::MarginPolicy;
use crate::types::{LayoutAlign, LayoutMode, LayoutPositioning, ParentContext, SceneNode, StyleMap};

fn auto_vertical(styles: &mut StyleMap) {
    styles.set("marginTop", "auto");
    styles.set("marginBottom", "auto");
}

fn auto_horizontal(styles: &mut StyleMap) {
    styles.set("marginLeft", "auto");
    styles.set("marginRight", "auto");
}

/// Auto margins that re-create centering inside an auto-layout parent.
///
/// Only applies when the parent's layout mode is known. The rules are
/// cumulative, so a node can end up with auto margins on both axes.
pub fn margin_styles(node: &SceneNode, parent: &ParentContext, policy: &MarginPolicy) -> StyleMap {
    let mut styles = StyleMap::new();
    let Some(parent_mode) = parent.layout_mode else {
        return styles;
    };
    let common = node.common();
    let centered = common.layout_align == Some(LayoutAlign::Center);

    if parent_mode == LayoutMode::Horizontal && centered {
        auto_vertical(&mut styles);
    }
    if parent_mode == LayoutMode::Vertical && centered {
        auto_horizontal(&mut styles);
    }
    if parent_mode == LayoutMode::Horizontal {
        if let (Some(x), Some(width), Some(parent_width)) = (common.x, common.width, parent.width) {
            let parent_center = parent_width / 2.0;
            let node_center = x + width / 2.0;
            if (parent_center - node_center).abs() < policy.center_tolerance {
                auto_horizontal(&mut styles);
            }
        }
    }
    if parent_mode == LayoutMode::Horizontal
        && common.layout_positioning == Some(LayoutPositioning::Auto)
    {
        auto_vertical(&mut styles);
    }

    styles
}

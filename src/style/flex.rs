use crate::types::{
    AutoLayout, CounterAxisAlign, LayoutAlign, LayoutMode, PrimaryAxisAlign, SceneNode, StyleMap,
};

use super::px;

fn justify_content(align: PrimaryAxisAlign) -> Option<&'static str> {
    match align {
        PrimaryAxisAlign::Min => Some("flex-start"),
        PrimaryAxisAlign::Center => Some("center"),
        PrimaryAxisAlign::Max => Some("flex-end"),
        PrimaryAxisAlign::SpaceBetween => Some("space-between"),
    }
}

fn align_items(align: CounterAxisAlign) -> Option<&'static str> {
    match align {
        CounterAxisAlign::Min => Some("flex-start"),
        CounterAxisAlign::Center => Some("center"),
        CounterAxisAlign::Max => Some("flex-end"),
        CounterAxisAlign::Stretch => Some("stretch"),
        CounterAxisAlign::Baseline => None,
    }
}

fn align_self(align: LayoutAlign) -> Option<&'static str> {
    match align {
        LayoutAlign::Min => Some("flex-start"),
        LayoutAlign::Center => Some("center"),
        LayoutAlign::Max => Some("flex-end"),
        LayoutAlign::Stretch => Some("stretch"),
        LayoutAlign::Inherit => None,
    }
}

/// Gap for an auto-layout frame.
///
/// Wrapped layouts get a `row column` pair, falling back from the primary
/// axis spacing to the item spacing; unwrapped ones a single value.
fn gap(layout: &AutoLayout) -> Option<String> {
    if layout.is_wrapped() {
        let primary = layout
            .primary_axis_spacing
            .filter(|v| *v != 0.0)
            .or(layout.item_spacing)
            .unwrap_or(0.0);
        let counter = layout.counter_axis_spacing.unwrap_or(0.0);
        (primary > 0.0 || counter > 0.0).then(|| format!("{} {}", px(primary), px(counter)))
    } else {
        layout.item_spacing.filter(|v| *v > 0.0).map(px)
    }
}

/// Flex container and flex item styles.
pub fn layout_styles(node: &SceneNode) -> StyleMap {
    let mut styles = StyleMap::new();

    if let Some(layout) = node.auto_layout() {
        // Frame-like nodes stack their children even without auto-layout.
        styles.set("display", "flex");
        styles.set("flexDirection", "column");
        styles.set("alignItems", "stretch");

        if let Some(mode) = layout.layout_mode.filter(|m| *m != LayoutMode::None) {
            let direction = if mode == LayoutMode::Horizontal {
                "row"
            } else {
                "column"
            };
            styles.set("flexDirection", direction);

            if let Some(value) = layout.primary_axis_align_items.and_then(justify_content) {
                styles.set("justifyContent", value);
            }
            if let Some(value) = layout.counter_axis_align_items.and_then(align_items) {
                styles.set("alignItems", value);
            }
            if layout.is_wrapped() {
                styles.set("flexWrap", "wrap");
            }
            if let Some(gap) = gap(layout) {
                styles.set("gap", gap);
            }
        }
    }

    let common = node.common();
    if common.layout_grow == Some(1.0) {
        styles.set("flex", "1");
        styles.set("flexShrink", "1");
        styles.set("flexBasis", "0%");
    }
    if let Some(value) = common.layout_align.and_then(align_self) {
        styles.set("alignSelf", value);
    }

    styles
}

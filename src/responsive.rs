//! Tablet breakpoint overrides.
//!
//! Derived from the node's own attributes only: large or fluid containers
//! collapse to the viewport and generous padding steps down.

use crate::config::{PaddingStep, ResponsivePolicy};
use crate::style::px;
use crate::types::{LayoutSizing, SceneNode, StyleMap};

#[derive(Debug, Clone, Default)]
pub struct ResponsiveDeriver {
    policy: ResponsivePolicy,
}

impl ResponsiveDeriver {
    pub fn new(policy: ResponsivePolicy) -> Self {
        Self { policy }
    }

    /// Tablet overrides for `node`; empty when nothing changes.
    pub fn derive_tablet(&self, node: &SceneNode) -> StyleMap {
        let mut styles = StyleMap::new();

        if self.needs_fluid_width(node) {
            styles.set("maxWidth", "100%");
        }

        if let Some(layout) = node.auto_layout() {
            for (side, value) in layout.padding_sides() {
                let Some(value) = value.filter(|v| *v > 0.0) else {
                    continue;
                };
                if let Some(reduced) = self.tablet_padding(value) {
                    styles.set(side.style_key(), reduced);
                }
            }
        }

        styles
    }

    fn needs_fluid_width(&self, node: &SceneNode) -> bool {
        let common = node.common();
        common
            .width
            .is_some_and(|w| w > self.policy.max_width_threshold)
            || common.max_width.is_some_and(|w| w > 0.0)
            || common.layout_sizing_horizontal == Some(LayoutSizing::Fill)
    }

    /// Reduced padding for the tablet breakpoint, `None` when it would not
    /// differ from `padding`.
    pub fn tablet_padding(&self, padding: f64) -> Option<String> {
        let step: &PaddingStep = self
            .policy
            .padding_steps
            .iter()
            .find(|step| padding >= step.min)?;
        let reduced = px(step.value);
        (reduced != px(padding)).then_some(reduced)
    }
}

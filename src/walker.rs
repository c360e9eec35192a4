//! Recursive node walker.
//!
//! A [`NodeWalker`] is created for a single conversion and consumed by
//! [`NodeWalker::finish`], so the variables and fonts it collects can never
//! leak into another run.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::color::VariableColorResolver;
use crate::config::Config;
use crate::fonts::FontTracker;
use crate::responsive::ResponsiveDeriver;
use crate::style::StyleResolver;
use crate::types::{
    Component, FigmaAttrs, FontRecord, NodeKind, ParentContext, Props, SceneNode, Slots, Styles,
    Tag, VariableRecord,
};
use crate::variables::VariableLookup;

/// Observer for coarse progress messages.
pub type ProgressFn = dyn Fn(&str) + Send + Sync;

/// What a finished walk collected besides the component tree.
#[derive(Debug, Clone, Default)]
pub struct Collected {
    pub variables: BTreeMap<String, VariableRecord>,
    pub fonts: Vec<FontRecord>,
}

pub struct NodeWalker<'a, L: ?Sized> {
    styles: StyleResolver,
    responsive: ResponsiveDeriver,
    colors: VariableColorResolver<'a, L>,
    fonts: FontTracker<'a>,
    progress: Option<Arc<ProgressFn>>,
    visited: usize,
}

impl<'a, L: VariableLookup + ?Sized> NodeWalker<'a, L> {
    pub fn new(config: &'a Config, lookup: &'a L) -> Self {
        Self {
            styles: StyleResolver::from_config(config),
            responsive: ResponsiveDeriver::new(config.responsive.clone()),
            colors: VariableColorResolver::new(lookup),
            fonts: FontTracker::new(&config.fonts),
            progress: None,
            visited: 0,
        }
    }

    pub fn with_progress(mut self, progress: Option<Arc<ProgressFn>>) -> Self {
        self.progress = progress;
        self
    }

    fn report(&self, message: &str) {
        if let Some(progress) = &self.progress {
            progress(message);
        }
    }

    /// Converts `node` and its subtree.
    ///
    /// `parent` is the walker-computed context; when absent (the root call)
    /// the node's own caller-supplied `parent` is used instead.
    pub fn visit(&mut self, node: &SceneNode, parent: Option<ParentContext>) -> Component {
        let parent = parent
            .or(node.common().parent)
            .unwrap_or_default();
        self.visited += 1;
        debug!(
            id = %node.id(),
            kind = %node.kind(),
            parent_width = ?parent.width,
            parent_layout = ?parent.layout_mode,
            "Visiting node"
        );

        let mut component = base_component(node);
        component.styles.default = self.styles.resolve(node, &parent, &mut self.colors);
        let tablet = self.responsive.derive_tablet(node);
        if !tablet.is_empty() {
            component.styles.tablet = Some(tablet);
        }
        self.apply_props(&mut component, node);

        let children = node.children();
        if !children.is_empty() {
            self.report(&format!(
                "Converting {} children of {}...",
                children.len(),
                node.name()
            ));
            let context = node.as_parent();
            let converted = children
                .iter()
                .map(|child| self.visit(child, Some(context)))
                .collect();
            component.slots = Some(Slots {
                children: converted,
            });
        } else if node.is_container() {
            component.slots = Some(Slots::default());
        }

        component
    }

    fn apply_props(&mut self, component: &mut Component, node: &SceneNode) {
        let Some(text) = node.text() else {
            return;
        };
        component.props.default.insert(
            "text".to_string(),
            text.characters.clone().unwrap_or_default(),
        );
        if let Some(font) = &text.font_name {
            self.fonts.track(&font.family, &font.style);
        }
    }

    /// Number of nodes visited so far.
    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn finish(self) -> Collected {
        Collected {
            variables: self.colors.into_used(),
            fonts: self.fonts.into_records(),
        }
    }
}

fn tag_for(node: &SceneNode) -> Tag {
    match node.kind() {
        NodeKind::Text => Tag::Text,
        // TODO: emit Tag::Img once image fills are exported as assets.
        _ => Tag::Div,
    }
}

fn base_component(node: &SceneNode) -> Component {
    let common = node.common();
    Component {
        tag: tag_for(node),
        name: (!common.name.is_empty()).then(|| common.name.clone()),
        attrs: FigmaAttrs {
            id: common.id.clone(),
            name: common.name.clone(),
            node_type: node.kind().as_str().to_string(),
        },
        props: Props::default(),
        styles: Styles::default(),
        slots: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LayoutMode;
    use crate::variables::NoVariables;
    use serde_json::json;
    use std::sync::Mutex;

    fn node(value: serde_json::Value) -> SceneNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_containers_get_empty_children_slot() {
        let config = Config::default();
        for kind in ["FRAME", "COMPONENT", "INSTANCE", "GROUP"] {
            let mut walker = NodeWalker::new(&config, &NoVariables);
            let component = walker.visit(&node(json!({"type": kind, "id": "c"})), None);
            assert_eq!(component.slots, Some(Slots::default()), "{kind}");
        }
    }

    #[test]
    fn leaves_have_no_slot() {
        let config = Config::default();
        let mut walker = NodeWalker::new(&config, &NoVariables);
        let component = walker.visit(&node(json!({"type": "RECTANGLE", "id": "r"})), None);
        assert!(component.slots.is_none());
        assert_eq!(component.tag, Tag::Div);
        assert!(component.name.is_none());
    }

    #[test]
    fn section_with_children_gets_slot() {
        let config = Config::default();
        let mut walker = NodeWalker::new(&config, &NoVariables);
        let component = walker.visit(
            &node(json!({
                "type": "SECTION",
                "id": "s",
                "children": [{"type": "ELLIPSE", "id": "e"}]
            })),
            None,
        );
        assert_eq!(component.children().len(), 1);
    }

    #[test]
    fn children_see_only_their_direct_parent() {
        let config = Config::default();
        let mut walker = NodeWalker::new(&config, &NoVariables);
        let tree = node(json!({
            "type": "FRAME",
            "id": "root",
            "width": 1000,
            "layoutMode": "VERTICAL",
            "children": [{
                "type": "FRAME",
                "id": "row",
                "width": 400,
                "layoutMode": "HORIZONTAL",
                "children": [
                    {"type": "RECTANGLE", "id": "a", "width": 390},
                    {"type": "RECTANGLE", "id": "b", "width": 100, "layoutAlign": "CENTER"}
                ]
            }]
        }));
        let root = walker.visit(&tree, None);
        let row = &root.children()[0];
        assert_eq!(row.styles.default.get("width"), Some("400px"));
        let a = &row.children()[0];
        let b = &row.children()[1];
        assert_eq!(a.styles.default.get("width"), Some("100%"));
        assert_eq!(b.styles.default.get("marginTop"), Some("auto"));
        assert!(!b.styles.default.contains_key("marginLeft"));
        assert_eq!(walker.visited(), 4);
    }

    #[test]
    fn root_uses_caller_supplied_parent() {
        let config = Config::default();
        let mut walker = NodeWalker::new(&config, &NoVariables);
        let root = node(json!({
            "type": "FRAME",
            "id": "root",
            "width": 1400,
            "parent": {"width": 1440, "layoutMode": "VERTICAL"}
        }));
        let component = walker.visit(&root, None);
        assert_eq!(component.styles.default.get("width"), Some("100%"));

        let explicit = ParentContext {
            width: Some(2000.0),
            layout_mode: Some(LayoutMode::Vertical),
        };
        let component = walker.visit(&root, Some(explicit));
        assert_eq!(component.styles.default.get("width"), Some("1400px"));
    }

    #[test]
    fn text_nodes_carry_text_prop_and_track_fonts() {
        let config = Config::default();
        let mut walker = NodeWalker::new(&config, &NoVariables);
        let tree = node(json!({
            "type": "FRAME",
            "id": "f",
            "children": [
                {"type": "TEXT", "id": "t1", "name": "Title", "characters": "Hello",
                 "fontName": {"family": "Inter", "style": "Bold"}},
                {"type": "TEXT", "id": "t2", "name": "Empty",
                 "fontName": {"family": "Inter", "style": "Regular"}}
            ]
        }));
        let component = walker.visit(&tree, None);
        let title = &component.children()[0];
        assert_eq!(title.tag, Tag::Text);
        assert_eq!(title.props.default.get("text").map(String::as_str), Some("Hello"));
        assert_eq!(
            component.children()[1].props.default.get("text").map(String::as_str),
            Some("")
        );
        assert!(component.props.default.is_empty());

        let collected = walker.finish();
        assert_eq!(collected.fonts.len(), 1);
        assert_eq!(collected.fonts[0].weights, vec![400, 700]);
    }

    #[test]
    fn reports_child_progress() {
        let config = Config::default();
        let messages = Arc::new(Mutex::new(Vec::new()));
        let sink = messages.clone();
        let progress: Arc<ProgressFn> = Arc::new(move |msg: &str| {
            sink.lock().unwrap().push(msg.to_string());
        });
        let mut walker = NodeWalker::new(&config, &NoVariables).with_progress(Some(progress));
        walker.visit(
            &node(json!({
                "type": "GROUP",
                "id": "g",
                "name": "Icons",
                "children": [{"type": "LINE", "id": "l1"}, {"type": "LINE", "id": "l2"}]
            })),
            None,
        );
        assert_eq!(
            messages.lock().unwrap().as_slice(),
            ["Converting 2 children of Icons...".to_string()]
        );
    }
}

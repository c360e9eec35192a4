//! Output component tree consumed by the web-app builder.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Builder element a node turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "ww-div")]
    Div,
    #[serde(rename = "ww-text")]
    Text,
    #[serde(rename = "ww-img")]
    Img,
}

/// CSS-like property map keyed by camelCase property name.
///
/// A missing key means the property does not apply; rules never insert
/// empty placeholders. Keys are kept sorted so serialization is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Overlays `other` on top of `self`; later values win.
    pub fn merge(&mut self, other: StyleMap) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<const N: usize> From<[(&str, &str); N]> for StyleMap {
    fn from(entries: [(&str, &str); N]) -> Self {
        let mut map = StyleMap::new();
        for (key, value) in entries {
            map.set(key, value);
        }
        map
    }
}

/// The three fixed data-attributes linking a component back to its node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigmaAttrs {
    #[serde(rename = "data-figma-id")]
    pub id: String,
    #[serde(rename = "data-figma-name")]
    pub name: String,
    #[serde(rename = "data-figma-type")]
    pub node_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Props {
    pub default: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Styles {
    pub default: StyleMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<StyleMap>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slots {
    pub children: Vec<Component>,
}

/// A converted node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub tag: Tag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub attrs: FigmaAttrs,
    pub props: Props,
    pub styles: Styles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<Slots>,
}

impl Component {
    /// Child components, empty when the component has no slot.
    pub fn children(&self) -> &[Component] {
        self.slots
            .as_ref()
            .map(|s| s.children.as_slice())
            .unwrap_or(&[])
    }

    /// Number of components in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Component::count).sum::<usize>()
    }
}

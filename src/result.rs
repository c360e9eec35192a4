//! Final conversion result handed to the builder.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::types::{Component, FontRecord, VariableRecord};
use crate::walker::Collected;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakpointName {
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub name: BreakpointName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionContext {
    pub variables: BTreeMap<String, VariableRecord>,
    pub fonts: Vec<FontRecord>,
    pub assets: BTreeMap<String, String>,
    pub selected_node_ids: BTreeSet<String>,
    pub used_variable_ids: BTreeSet<String>,
    pub breakpoints: Vec<Breakpoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub component: Component,
    pub used_variables: BTreeMap<String, VariableRecord>,
    pub fonts: Vec<FontRecord>,
    /// Always empty until images are exported.
    pub assets: BTreeMap<String, String>,
    pub context: ConversionContext,
}

impl ConversionResult {
    /// Packages a finished walk of the root `root_id`.
    pub fn assemble(component: Component, root_id: &str, collected: Collected) -> Self {
        let Collected { variables, fonts } = collected;
        let used_variable_ids = variables.keys().cloned().collect();
        Self {
            component,
            used_variables: variables.clone(),
            fonts: fonts.clone(),
            assets: BTreeMap::new(),
            context: ConversionContext {
                variables,
                fonts,
                assets: BTreeMap::new(),
                selected_node_ids: BTreeSet::from([root_id.to_string()]),
                used_variable_ids,
                breakpoints: vec![Breakpoint {
                    name: BreakpointName::Default,
                }],
            },
        }
    }
}

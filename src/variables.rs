//! Variable lookup collaborator.
//!
//! The converter never crawls the document for variables itself; the caller
//! hands it something that answers "which variable has this id".

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::types::Variable;

/// Synchronous, read-only variable lookup.
pub trait VariableLookup {
    fn lookup(&self, id: &str) -> Option<Variable>;
}

/// Lookup that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVariables;

impl VariableLookup for NoVariables {
    fn lookup(&self, _id: &str) -> Option<Variable> {
        None
    }
}

/// In-memory variable table keyed by variable id.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    by_id: HashMap<String, Variable>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, variable: Variable) {
        self.by_id.insert(variable.id.clone(), variable);
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Parses either an array of variables or an id-keyed object.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        if let Value::Array(_) = value {
            let list: Vec<Variable> = serde_json::from_value(value)?;
            return Ok(list.into_iter().collect());
        }
        let map: HashMap<String, Variable> = serde_json::from_value(value)?;
        // The map key wins over whatever id the value carries.
        Ok(Self {
            by_id: map
                .into_iter()
                .map(|(id, mut variable)| {
                    variable.id = id.clone();
                    (id, variable)
                })
                .collect(),
        })
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

impl FromIterator<Variable> for VariableTable {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut table = VariableTable::new();
        for variable in iter {
            table.insert(variable);
        }
        table
    }
}

impl VariableLookup for VariableTable {
    fn lookup(&self, id: &str) -> Option<Variable> {
        self.by_id.get(id).cloned()
    }
}

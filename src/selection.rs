//! Loading the exported selection from JSON.

use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::types::SceneNode;

/// Parses a single node object or an array of nodes.
///
/// The shape is decided up front so node errors keep serde's own message.
pub fn parse_selection(raw: &str) -> Result<Vec<SceneNode>> {
    let value: Value = serde_json::from_str(raw)?;
    let nodes = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(nodes)
}

pub fn load_selection(path: &Path) -> Result<Vec<SceneNode>> {
    let raw = std::fs::read_to_string(path)?;
    parse_selection(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_node_and_arrays() {
        let one = parse_selection(r#"{"type":"FRAME","id":"1"}"#).unwrap();
        assert_eq!(one.len(), 1);
        let many = parse_selection(r#"[{"type":"FRAME","id":"1"},{"type":"TEXT","id":"2"}]"#)
            .unwrap();
        assert_eq!(many.len(), 2);
        let none = parse_selection("[]").unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn rejects_unknown_shapes() {
        assert!(parse_selection(r#"{"type":"WIDGET","id":"1"}"#).is_err());
        assert!(parse_selection("not json").is_err());
    }

    #[test]
    fn nested_errors_name_the_bad_value() {
        let raw = r#"{"type":"FRAME","id":"1","children":[
            {"type":"FRAME","id":"2","children":[
                {"type":"FRAME","id":"3","layoutMode":"VERTICLE"}
            ]}
        ]}"#;
        let err = parse_selection(raw).unwrap_err().to_string();
        assert!(err.contains("VERTICLE"), "{err}");
        assert!(!err.contains("untagged"), "{err}");

        let err = parse_selection(r#"[{"type":"WIDGET","id":"1"}]"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("WIDGET"), "{err}");
    }
}

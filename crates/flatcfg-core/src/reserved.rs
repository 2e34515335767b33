//! Reserved-key discovery across nested option trees
//!
//! The merge engine treats the `rules` and `overrides` keys specially: their
//! mapping values are merged shallowly no matter how deep they sit in the
//! option tree. This module locates those keys and writes merged values back
//! to their original positions.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Keys whose mapping values merge shallowly at any nesting depth
pub const RESERVED_KEYS: [&str; 2] = ["rules", "overrides"];

/// Location of a reserved key inside an option tree.
///
/// `parent` holds the key chain of the node carrying the reserved key; a
/// reserved key at the tree root has an empty parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReservedPath {
    /// Key chain from the root to the node that owns the reserved key
    pub parent: Vec<String>,
    /// The reserved key itself (`rules` or `overrides`)
    pub key: String,
}

impl fmt::Display for ReservedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parent.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}.{}", self.parent.join("."), self.key)
        }
    }
}

/// Check whether a key name is reserved
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Collect every reserved-key value in `tree`, keyed by its location.
///
/// Traversal descends through nested objects only; it does not look inside
/// arrays, and it does not descend into a reserved key's own value (settings
/// under `rules`/`overrides` are opaque to the walk).
pub fn collect_reserved(tree: &Map<String, Value>) -> IndexMap<ReservedPath, Value> {
    let mut found = IndexMap::new();
    let mut path = Vec::new();
    walk(tree, &mut path, &mut found);
    found
}

fn walk(
    node: &Map<String, Value>,
    path: &mut Vec<String>,
    found: &mut IndexMap<ReservedPath, Value>,
) {
    for (key, value) in node {
        if is_reserved(key) {
            found.insert(
                ReservedPath {
                    parent: path.clone(),
                    key: key.clone(),
                },
                value.clone(),
            );
        } else if let Value::Object(child) = value {
            path.push(key.clone());
            walk(child, path, found);
            path.pop();
        }
    }
}

/// Write `value` at `path` in `result`, creating intermediate objects as
/// needed and replacing non-object nodes along the way.
pub fn write_reserved(result: &mut Map<String, Value>, path: &ReservedPath, value: Value) {
    let mut current = result;
    for segment in &path.parent {
        if !matches!(current.get(segment), Some(Value::Object(_))) {
            current.insert(segment.clone(), Value::Object(Map::new()));
        }
        current = match current.get_mut(segment) {
            Some(Value::Object(map)) => map,
            // The segment was made an object just above
            _ => return,
        };
    }
    current.insert(path.key.clone(), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    fn path(parent: &[&str], key: &str) -> ReservedPath {
        ReservedPath {
            parent: parent.iter().map(ToString::to_string).collect(),
            key: key.to_string(),
        }
    }

    #[test]
    fn collects_root_level_rules() {
        let tree = as_map(json!({
            "rules": { "no-console": "error" },
            "unicorn": true,
        }));

        let found = collect_reserved(&tree);

        assert_eq!(found.len(), 1);
        assert_eq!(
            found.get(&path(&[], "rules")),
            Some(&json!({ "no-console": "error" }))
        );
    }

    #[test]
    fn collects_overrides_at_arbitrary_depth() {
        let tree = as_map(json!({
            "react": { "overrides": { "react/prop-types": "off" } },
            "jsx": { "a11y": { "overrides": { "jsx-a11y/alt-text": "warn" } } },
        }));

        let found = collect_reserved(&tree);

        assert_eq!(found.len(), 2);
        assert_eq!(
            found.get(&path(&["react"], "overrides")),
            Some(&json!({ "react/prop-types": "off" }))
        );
        assert_eq!(
            found.get(&path(&["jsx", "a11y"], "overrides")),
            Some(&json!({ "jsx-a11y/alt-text": "warn" }))
        );
    }

    #[test]
    fn does_not_descend_into_reserved_values() {
        // An `overrides` object nested inside a rules value belongs to the
        // rule settings, not to the tree structure.
        let tree = as_map(json!({
            "rules": { "overrides": { "inner": true } },
        }));

        let found = collect_reserved(&tree);

        assert_eq!(found.len(), 1);
        assert!(found.contains_key(&path(&[], "rules")));
    }

    #[test]
    fn does_not_traverse_arrays() {
        let tree = as_map(json!({
            "items": [{ "rules": { "hidden": "error" } }],
        }));

        assert!(collect_reserved(&tree).is_empty());
    }

    #[test]
    fn write_creates_intermediate_objects() {
        let mut result = Map::new();
        write_reserved(
            &mut result,
            &path(&["jsx", "a11y"], "overrides"),
            json!({ "jsx-a11y/alt-text": "warn" }),
        );

        assert_eq!(
            Value::Object(result),
            json!({ "jsx": { "a11y": { "overrides": { "jsx-a11y/alt-text": "warn" } } } })
        );
    }

    #[test]
    fn write_replaces_non_object_nodes_on_the_path() {
        let mut result = as_map(json!({ "react": 7 }));
        write_reserved(
            &mut result,
            &path(&["react"], "overrides"),
            json!({ "react/prop-types": "off" }),
        );

        assert_eq!(
            Value::Object(result),
            json!({ "react": { "overrides": { "react/prop-types": "off" } } })
        );
    }

    #[test]
    fn display_joins_path_segments_with_dots() {
        assert_eq!(path(&[], "rules").to_string(), "rules");
        assert_eq!(
            path(&["jsx", "a11y"], "overrides").to_string(),
            "jsx.a11y.overrides"
        );
    }
}

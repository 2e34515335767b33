//! Option-tree merging logic
//!
//! This module combines layered option trees into one. Layers are ordered by
//! increasing precedence: for conflicting scalars the rightmost layer wins,
//! arrays concatenate in layer order, and nested objects merge recursively.
//!
//! Two keys are special-cased. `rules` and `overrides` mappings merge
//! *shallowly* at any nesting depth: a later layer's entry replaces an
//! earlier one wholesale, with no recursion into the setting value. This is
//! done in three passes — a generic deep merge, a reserved-key scan over the
//! inputs, and a write-back of the shallow-merged mappings — so the general
//! merge stays free of special cases.
//!
//! Inputs are never mutated and the result shares no structure with them.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::reserved::{ReservedPath, collect_reserved, write_reserved};

/// Merge option trees left-to-right with reserved-key shallow-merge policy.
///
/// Layers that are not objects (`null`, absent placeholders, scalars) are
/// skipped. Zero usable layers produce an empty tree.
pub fn merge_options(layers: &[&Value]) -> Value {
    let objects: Vec<&Map<String, Value>> =
        layers.iter().filter_map(|layer| layer.as_object()).collect();

    let mut merged = Map::new();
    for object in &objects {
        deep_merge_into(&mut merged, object);
    }

    // Accumulate reserved-key mappings across layers, shallow-merging on
    // collision, then write them back over whatever deep merge produced.
    let mut reserved: IndexMap<ReservedPath, Value> = IndexMap::new();
    for object in &objects {
        for (path, value) in collect_reserved(object) {
            match reserved.get_mut(&path) {
                Some(existing) => shallow_merge_into(existing, &value),
                None => {
                    reserved.insert(path, value);
                }
            }
        }
    }

    for (path, value) in reserved {
        tracing::trace!("shallow-merged reserved key at {path}");
        write_reserved(&mut merged, &path, value);
    }

    Value::Object(merged)
}

/// Generic recursive deep merge of one layer into the accumulated target.
///
/// Object meets object: recurse. Array meets array: concatenate. Anything
/// else: the incoming value replaces the existing one.
fn deep_merge_into(target: &mut Map<String, Value>, layer: &Map<String, Value>) {
    for (key, incoming) in layer {
        match (target.get_mut(key), incoming) {
            (Some(Value::Object(existing)), Value::Object(source)) => {
                deep_merge_into(existing, source);
            }
            (Some(Value::Array(existing)), Value::Array(source)) => {
                existing.extend(source.iter().cloned());
            }
            _ => {
                target.insert(key.clone(), incoming.clone());
            }
        }
    }
}

/// Shallow merge of a reserved-key mapping: later entries replace earlier
/// ones key-by-key with no recursion into the entry values. A non-object on
/// either side degenerates to whole-value replacement by the later layer.
fn shallow_merge_into(existing: &mut Value, incoming: &Value) {
    if let (Value::Object(target), Value::Object(source)) = (&mut *existing, incoming) {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
        return;
    }
    *existing = incoming.clone();
}

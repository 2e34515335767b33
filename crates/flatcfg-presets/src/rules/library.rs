//! Root-level rule seed for the library preset

use serde_json::{Value, json};

use super::js_override_fragment;

/// Rules seeded at the option-tree root by the library preset.
///
/// Combines the JavaScript override table with the TypeScript additions the
/// library layer pins down. Seeding these at the root (rather than in a
/// fragment) lets callers replace individual entries through the shallow
/// `rules` merge.
pub fn lib_override_rules() -> Value {
    let mut rules = js_override_fragment().rules.unwrap_or_default();

    let additions = json!({
        "ts/explicit-function-return-type": "off",
        "ts/explicit-module-boundary-types": "error",
        "ts/default-param-last": ["error"],
        "ts/no-empty-function": [
            "error",
            { "allow": ["constructors", "arrowFunctions"] },
        ],
        "ts/no-invalid-this": "off",
        "ts/no-loop-func": "error",
        "ts/no-shadow": "error",
    });
    if let Value::Object(map) = additions {
        rules.extend(map);
    }

    Value::Object(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_spans_both_rule_families() {
        let rules = lib_override_rules();

        assert_eq!(rules["curly"], json!(["error", "multi-line"]));
        assert_eq!(rules["ts/no-shadow"], json!("error"));
        assert_eq!(rules["ts/explicit-module-boundary-types"], json!("error"));
    }
}

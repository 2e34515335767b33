//! React and accessibility override tables seeded by the react layer

use flatcfg_core::Fragment;
use serde_json::{Value, json};

use super::js_override_fragment;

/// Overrides seeded under `react.overrides`
pub fn react_overrides() -> Value {
    json!({
        "react/prop-types": "off",
        "react/require-default-props": "off",
        "react/no-unused-prop-types": ["error", { "skipShapeProps": true }],
        "react/jsx-uses-vars": "error",
        "react/jsx-no-useless-fragment": ["error", { "allowExpressions": true }],
        "react/function-component-definition": [
            "error",
            {
                "namedComponents": "arrow-function",
                "unnamedComponents": "arrow-function",
            },
        ],
        "react/jsx-props-no-spreading": "off",
        "react/self-closing-comp": "error",
    })
}

/// Overrides seeded under `jsx.a11y.overrides`
pub fn jsx_a11y_overrides() -> Value {
    json!({
        "jsx-a11y/alt-text": "warn",
        "jsx-a11y/anchor-is-valid": "warn",
        "jsx-a11y/click-events-have-key-events": "error",
        "jsx-a11y/no-static-element-interactions": "error",
        "jsx-a11y/no-autofocus": ["warn", { "ignoreNonDOM": true }],
        "jsx-a11y/label-has-associated-control": "error",
    })
}

/// JavaScript tweaks for React projects.
///
/// Extends the base `no-underscore-dangle` configuration to allow the Redux
/// devtools global, keeping the rest of the rule's options intact.
pub fn js_tweaks_fragment() -> Fragment {
    Fragment::named("flatcfg/react-js-tweaks")
        .with_rules(json!({ "no-underscore-dangle": underscore_dangle_rule() }))
}

fn underscore_dangle_rule() -> Value {
    const REDUX_DEVTOOLS: &str = "__REDUX_DEVTOOLS_EXTENSION_COMPOSE__";

    let base = js_override_fragment()
        .rules
        .and_then(|rules| rules.get("no-underscore-dangle").cloned());

    if let Some(Value::Array(mut entry)) = base {
        if let Some(Value::Object(options)) = entry.get_mut(1) {
            let allow = options
                .entry("allow".to_string())
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(names) = allow {
                names.push(Value::from(REDUX_DEVTOOLS));
            }
            return Value::Array(entry);
        }
    }

    json!(["error", { "allow": [REDUX_DEVTOOLS] }])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underscore_dangle_keeps_base_options_and_adds_redux_allowance() {
        let rule = underscore_dangle_rule();

        assert_eq!(rule[0], json!("error"));
        assert_eq!(rule[1]["allowAfterThis"], json!(true));
        assert_eq!(
            rule[1]["allow"],
            json!(["__REDUX_DEVTOOLS_EXTENSION_COMPOSE__"])
        );
    }
}

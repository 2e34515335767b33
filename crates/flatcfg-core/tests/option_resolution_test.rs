//! End-to-end tests for option resolution through the public API

use std::fs;

use flatcfg_core::{
    Assembler, BasicAssembler, ExecutionEnv, Fragment, ResolveContext, merge_options,
    resolve_options,
};
use serde_json::{Value, json};
use tempfile::TempDir;

#[test]
fn layered_presets_compose_through_repeated_merges() {
    // A derived layer seeds nested overrides, the base layer seeds toggles
    // and root rules, and the user tweaks both.
    let react_defaults = json!({
        "type": "app",
        "react": { "overrides": { "react/prop-types": "off" } },
    });
    let base_defaults = json!({
        "jsonc": true,
        "unicorn": true,
        "rules": { "no-console": "error", "curly": ["error", "multi-line"] },
    });
    let user = json!({
        "jsonc": false,
        "rules": { "no-console": "off" },
        "react": { "overrides": { "react/jsx-uses-vars": "error" } },
    });

    let layer = merge_options(&[&react_defaults, &user]);
    let resolved = merge_options(&[&base_defaults, &layer]);

    assert_eq!(resolved["type"], json!("app"));
    assert_eq!(resolved["jsonc"], json!(false));
    assert_eq!(resolved["unicorn"], json!(true));
    // Root rules shallow-merge: curly survives, no-console is replaced
    assert_eq!(
        resolved["rules"],
        json!({ "no-console": "off", "curly": ["error", "multi-line"] })
    );
    // Nested overrides shallow-merge to the union of both layers
    assert_eq!(
        resolved["react"]["overrides"],
        json!({ "react/prop-types": "off", "react/jsx-uses-vars": "error" })
    );
}

#[test]
fn merge_then_resolve_respects_discovery_gating() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tsconfig.json"), "{}").unwrap();

    let defaults = json!({ "jsonc": true, "unicorn": true });

    // Production: the probe result is injected.
    let production = resolve_options(
        &defaults,
        &json!({}),
        &ResolveContext::new(dir.path(), ExecutionEnv::Production),
    );
    assert!(production["typescript"]["tsconfigPath"].is_string());

    // Test context: the same disk state yields no injection.
    let test = resolve_options(
        &defaults,
        &json!({}),
        &ResolveContext::new(dir.path(), ExecutionEnv::Test),
    );
    assert_eq!(test.get("typescript"), None);

    // Explicit user value: appears verbatim regardless of context.
    let explicit = resolve_options(
        &defaults,
        &json!({ "typescript": { "tsconfigPath": "./tsconfig.lint.json" } }),
        &ResolveContext::new(dir.path(), ExecutionEnv::Test),
    );
    assert_eq!(
        explicit["typescript"],
        json!({ "tsconfigPath": "./tsconfig.lint.json" })
    );
}

#[tokio::test]
async fn assembler_output_preserves_fragment_order() {
    let options = json!({ "rules": { "no-console": "error" } });
    let fragments = vec![
        Fragment::named("first").with_files(["**/*.ts"]),
        Fragment::named("second"),
    ];

    let assembled = BasicAssembler.assemble(options, fragments).await.unwrap();

    let names: Vec<_> = assembled
        .iter()
        .filter_map(|fragment| fragment.name.as_deref())
        .collect();
    assert_eq!(names, ["flatcfg/base-rules", "first", "second"]);
}

#[test]
fn fragments_round_trip_as_engine_config() {
    let fragments = vec![
        Fragment::named("flatcfg/test-overrides")
            .with_files(["**/*.test.*", "**/__tests__/**/*"])
            .with_rules(json!({ "no-magic-numbers": "off" })),
        Fragment::named("flatcfg/turbo")
            .with_files(["**/*.js", "**/*.ts", "**/*.tsx"])
            .with_plugins(json!({ "turbo": {} })),
    ];

    let wire = serde_json::to_value(&fragments).unwrap();
    let back: Vec<Fragment> = serde_json::from_value(wire).unwrap();
    assert_eq!(back, fragments);
}

#[test]
fn merge_never_aliases_inputs() {
    let a = json!({ "nested": { "arr": [1, 2] } });
    let b = json!({ "nested": { "arr": [3] } });

    let mut merged = merge_options(&[&a, &b]);
    // Mutating the output must not be observable through the inputs.
    if let Some(arr) = merged["nested"]["arr"].as_array_mut() {
        arr.push(Value::from(99));
    }

    assert_eq!(a["nested"]["arr"], json!([1, 2]));
    assert_eq!(b["nested"]["arr"], json!([3]));
}

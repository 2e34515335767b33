//! TypeScript override rules applied when TypeScript support is enabled

use flatcfg_core::Fragment;
use serde_json::json;

/// Rules for TypeScript sources.
///
/// `ts/explicit-module-boundary-types` is enabled here and switched off
/// again for TSX files by [`tsx_override_fragment`].
pub fn ts_override_fragment() -> Fragment {
    Fragment::named("flatcfg/ts-overrides")
        .with_files(["**/*.ts", "**/*.tsx"])
        .with_rules(json!({
            "ts/default-param-last": ["error"],
            "ts/no-empty-function": [
                "error",
                { "allow": ["constructors", "arrowFunctions"] },
            ],
            "ts/no-invalid-this": "off",
            "ts/no-loop-func": "error",
            "ts/no-shadow": "error",
            "ts/explicit-function-return-type": "off",
            "ts/explicit-module-boundary-types": "error",
        }))
}

/// TSX relaxation of the TypeScript rules
pub fn tsx_override_fragment() -> Fragment {
    Fragment::named("flatcfg/tsx-overrides")
        .with_files(["**/*.tsx"])
        .with_rules(json!({
            "ts/explicit-module-boundary-types": "off",
        }))
}

//! JavaScript override rules applied by the base layer

use flatcfg_core::Fragment;
use serde_json::json;

/// Stricter JavaScript rules layered over the engine's defaults
pub fn js_override_fragment() -> Fragment {
    Fragment::named("flatcfg/js-overrides").with_rules(json!({
        "arrow-body-style": [
            "error",
            "as-needed",
            { "requireReturnForObjectLiteral": false },
        ],
        "style/arrow-parens": ["error", "always"],
        "complexity": ["off", 20],
        "consistent-return": ["error"],
        "curly": ["error", "multi-line"],
        "style/dot-location": ["error", "property"],
        "for-direction": "error",
        "getter-return": ["error", { "allowImplicit": true }],
        "grouped-accessor-pairs": "error",
        "guard-for-in": "error",
        "max-classes-per-file": ["error", 6],
        "no-await-in-loop": "error",
        "no-bitwise": "error",
        "no-constructor-return": "error",
        "no-continue": "error",
        "no-else-return": ["error", { "allowElseIf": false }],
        "no-implicit-coercion": ["error"],
        "no-implicit-globals": ["error"],
        "no-label-var": "error",
        "no-lonely-if": "error",
        "no-magic-numbers": [
            "warn",
            {
                "enforceConst": true,
                "ignore": [-1, 0, 1],
                "ignoreArrayIndexes": true,
                "ignoreEnums": true,
            },
        ],
        "no-multi-assign": "error",
        "no-nested-ternary": "error",
        "no-param-reassign": [
            "error",
            {
                "ignorePropertyModificationsFor": [
                    "acc",
                    "accumulator",
                    "ctx",
                    "context",
                    "req",
                    "request",
                    "res",
                    "response",
                    "staticContext",
                ],
                "props": true,
            },
        ],
        "no-promise-executor-return": "error",
        "no-restricted-exports": [
            "error",
            { "restrictedNamedExports": ["default", "then"] },
        ],
        "no-return-assign": ["error", "always"],
        "no-underscore-dangle": [
            "error",
            {
                "allowAfterSuper": true,
                "allowAfterThis": true,
                "allowFunctionParams": true,
                "allowInArrayDestructuring": true,
                "allowInObjectDestructuring": true,
            },
        ],
        "no-unsafe-optional-chaining": [
            "error",
            { "disallowArithmeticOperators": true },
        ],
        "no-useless-concat": "error",
        "no-void": "error",
        "prefer-named-capture-group": "error",
        "prefer-object-has-own": "error",
        "prefer-object-spread": "error",
        "radix": "error",
        "require-unicode-regexp": "error",
        "node/global-require": "error",
        "no-unused-private-class-members": "error",
    }))
}

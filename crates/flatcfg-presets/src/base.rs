//! Base preset layer
//!
//! Resolves the stock option tree against user overrides, collects the
//! auxiliary fragments those options call for and hands everything to the
//! assembler. Derived layers (react, next) merge their own defaults first
//! and then delegate here.

use flatcfg_core::{Assembler, Fragment, ResolveContext, Result, resolve_options};
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::rules;

/// Stock preset: sensible defaults for a TypeScript-first repository
#[derive(Debug, Clone)]
pub struct BasePreset {
    ctx: ResolveContext,
}

impl Default for BasePreset {
    fn default() -> Self {
        Self::new()
    }
}

impl BasePreset {
    /// Create a preset resolving against the process working directory and
    /// environment
    pub fn new() -> Self {
        Self {
            ctx: ResolveContext::current(),
        }
    }

    /// Create a preset with an explicit resolution context
    pub fn with_context(ctx: ResolveContext) -> Self {
        Self { ctx }
    }

    /// The layer's fixed default option tree
    pub fn default_options() -> Value {
        json!({
            "jsonc": true,
            "yaml": true,
            "gitignore": true,
            "unicorn": true,
            "imports": true,
            "markdown": true,
            "regexp": true,
            "autoRenamePlugins": true,
            "prettier": true,
            "stylistic": true,
            "test": { "relaxed": true },
        })
    }

    /// Resolve options, build auxiliary fragments and run the assembler.
    ///
    /// Fragment order is fixed: JS overrides, then TS/TSX overrides when
    /// TypeScript is enabled, then test relaxations, formatter
    /// compatibility and turbo wiring as the resolved flags call for them,
    /// then `extra_fragments` last. The assembler's result (or error) is
    /// returned unchanged.
    pub async fn invoke(
        &self,
        assembler: &dyn Assembler,
        user_options: Option<Value>,
        extra_fragments: Vec<Fragment>,
    ) -> Result<Vec<Fragment>> {
        let user = user_options.unwrap_or_else(|| Value::Object(Map::new()));
        let mut options = resolve_options(&Self::default_options(), &user, &self.ctx);

        // prettier and test are consumed by this layer, not the engine
        let (prettier, test) = match options.as_object_mut() {
            Some(map) => (map.remove("prettier"), map.remove("test")),
            None => (None, None),
        };

        let mut fragments = vec![rules::js_override_fragment()];

        if typescript_enabled(&options) {
            fragments.push(rules::ts_override_fragment());
            fragments.push(rules::tsx_override_fragment());
        }

        let relaxed_tests = test
            .as_ref()
            .and_then(|test| test.get("relaxed"))
            .is_some_and(|relaxed| *relaxed == Value::Bool(true));
        if relaxed_tests {
            fragments.push(rules::test_override_fragment());
        }

        if prettier.as_ref().is_some_and(is_truthy) {
            fragments.push(rules::prettier_fragment().await);
        }

        if options.get("turbo").is_some_and(is_truthy) {
            fragments.push(rules::turbo_fragment().await);
        }

        fragments.extend(extra_fragments);
        debug!("base preset assembled {} fragments", fragments.len());

        assembler.assemble(options, fragments).await
    }
}

/// TypeScript support is on unless the option is absent or `false`
fn typescript_enabled(options: &Value) -> bool {
    options
        .get("typescript")
        .is_some_and(|value| *value != Value::Bool(false))
}

/// Loose truthiness for feature toggles that accept both boolean and
/// structured forms
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typescript_gate_matches_the_option_shape() {
        assert!(!typescript_enabled(&json!({})));
        assert!(!typescript_enabled(&json!({ "typescript": false })));
        assert!(typescript_enabled(&json!({ "typescript": true })));
        assert!(typescript_enabled(
            &json!({ "typescript": { "tsconfigPath": "./tsconfig.json" } })
        ));
    }

    #[test]
    fn truthiness_covers_boolean_and_structured_toggles() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!({ "mode": "strict" })));
        assert!(is_truthy(&json!("on")));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
    }
}

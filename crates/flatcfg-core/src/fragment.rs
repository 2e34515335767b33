//! Configuration fragment types
//!
//! A fragment is one unit in the ordered sequence handed to the rule-checking
//! engine's configuration loader. Fragments scope a set of rules and plugins
//! to file glob patterns; any further engine-specific properties (language
//! options, settings blocks) ride along in the flattened remainder map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One unit of assembled lint configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    /// Optional fragment name, for diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Glob patterns this fragment applies to; absent means all files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// Glob patterns excluded from this fragment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignores: Option<Vec<String>>,

    /// Rule identifier to severity/settings mapping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Map<String, Value>>,

    /// Plugin name to plugin definition mapping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Map<String, Value>>,

    /// Any further engine-specific properties
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Fragment {
    /// Create an empty fragment with a diagnostic name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Scope this fragment to the given glob patterns
    #[must_use]
    pub fn with_files<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Attach a rules mapping. A non-object value is ignored.
    #[must_use]
    pub fn with_rules(mut self, rules: Value) -> Self {
        if let Value::Object(map) = rules {
            self.rules = Some(map);
        }
        self
    }

    /// Attach a plugins mapping. A non-object value is ignored.
    #[must_use]
    pub fn with_plugins(mut self, plugins: Value) -> Self {
        if let Value::Object(map) = plugins {
            self.plugins = Some(map);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_without_absent_fields() {
        let fragment = Fragment::named("demo").with_rules(json!({ "no-console": "off" }));
        let value = serde_json::to_value(&fragment).unwrap();

        assert_eq!(value, json!({ "name": "demo", "rules": { "no-console": "off" } }));
    }

    #[test]
    fn unknown_properties_round_trip_through_rest() {
        let raw = json!({
            "files": ["**/*.ts"],
            "rules": { "ts/no-shadow": "error" },
            "languageOptions": { "ecmaVersion": 2022 },
        });

        let fragment: Fragment = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(fragment.rest["languageOptions"], json!({ "ecmaVersion": 2022 }));
        assert_eq!(serde_json::to_value(&fragment).unwrap(), raw);
    }

    #[test]
    fn non_object_rules_are_ignored_by_the_builder() {
        let fragment = Fragment::named("demo").with_rules(json!("all"));
        assert_eq!(fragment.rules, None);
    }
}

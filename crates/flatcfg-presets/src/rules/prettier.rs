//! Formatter compatibility fragment
//!
//! When the formatter toggle is on, stylistic rules that fight an external
//! formatter are switched off wholesale. The rule list is loaded through an
//! async constructor because the compatibility table ships with the
//! formatter integration and is resolved lazily by the host engine.

use flatcfg_core::Fragment;
use serde_json::json;

/// Rules disabled for compatibility with an external formatter
pub async fn prettier_fragment() -> Fragment {
    Fragment::named("flatcfg/prettier-compat").with_rules(json!({
        "style/arrow-parens": "off",
        "style/brace-style": "off",
        "style/comma-dangle": "off",
        "style/dot-location": "off",
        "style/indent": "off",
        "style/max-len": "off",
        "style/no-extra-semi": "off",
        "style/no-floating-decimal": "off",
        "style/no-mixed-spaces-and-tabs": "off",
        "style/no-multi-spaces": "off",
        "style/quotes": "off",
        "style/semi": "off",
        "style/wrap-iife": "off",
        "antfu/if-newline": "off",
        "antfu/curly": "off",
        "antfu/indent-unindent": "off",
        "antfu/consistent-list-newline": "off",
        "antfu/consistent-chaining": "off",
    }))
}

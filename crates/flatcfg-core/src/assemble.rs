//! Assembly seam between preset layers and the rule-checking engine
//!
//! Preset layers hand a resolved option tree plus an ordered fragment list
//! to an [`Assembler`], which turns them into the final configuration
//! sequence the engine loads. The real assembler lives with the engine and
//! is opaque to this crate; [`BasicAssembler`] covers tests and standalone
//! use. Errors from an assembler propagate to the caller unchanged.

use async_trait::async_trait;
use serde_json::Value;

use crate::fragment::Fragment;
use crate::result::Result;

/// External assembly function consuming resolved options and fragments
#[async_trait]
pub trait Assembler: Send + Sync {
    /// Produce the final ordered fragment sequence.
    ///
    /// Implementations receive the fully resolved option tree and the
    /// fragments collected by the preset layers, in precedence order.
    async fn assemble(&self, options: Value, fragments: Vec<Fragment>) -> Result<Vec<Fragment>>;
}

/// Minimal assembler: one leading fragment from the option tree's root
/// `rules` mapping (when present), then the given fragments in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicAssembler;

#[async_trait]
impl Assembler for BasicAssembler {
    async fn assemble(&self, options: Value, fragments: Vec<Fragment>) -> Result<Vec<Fragment>> {
        let mut assembled = Vec::with_capacity(fragments.len() + 1);
        if let Some(rules) = options.get("rules").and_then(Value::as_object) {
            let mut base = Fragment::named("flatcfg/base-rules");
            base.rules = Some(rules.clone());
            assembled.push(base);
        }
        assembled.extend(fragments);
        Ok(assembled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn emits_base_rules_fragment_first() {
        let options = json!({ "rules": { "no-console": "error" }, "unicorn": true });
        let fragments = vec![Fragment::named("extra")];

        let assembled = BasicAssembler.assemble(options, fragments).await.unwrap();

        assert_eq!(assembled.len(), 2);
        assert_eq!(assembled[0].name.as_deref(), Some("flatcfg/base-rules"));
        assert_eq!(
            assembled[0].rules.as_ref().map(|rules| rules.len()),
            Some(1)
        );
        assert_eq!(assembled[1].name.as_deref(), Some("extra"));
    }

    #[tokio::test]
    async fn passes_fragments_through_without_root_rules() {
        let assembled = BasicAssembler
            .assemble(json!({ "unicorn": true }), vec![Fragment::named("only")])
            .await
            .unwrap();

        assert_eq!(assembled.len(), 1);
        assert_eq!(assembled[0].name.as_deref(), Some("only"));
    }
}

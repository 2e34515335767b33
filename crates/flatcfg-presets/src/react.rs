//! React preset layer

use flatcfg_core::{Assembler, Fragment, ResolveContext, Result, merge_options};
use serde_json::{Map, Value, json};

use crate::base::BasePreset;
use crate::rules;

/// React applications: framework rule overrides, accessibility overrides
/// and an app project classifier, layered over [`BasePreset`]
#[derive(Debug, Clone, Default)]
pub struct ReactPreset {
    base: BasePreset,
}

impl ReactPreset {
    /// Create a preset resolving against the process working directory and
    /// environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a preset with an explicit resolution context
    pub fn with_context(ctx: ResolveContext) -> Self {
        Self {
            base: BasePreset::with_context(ctx),
        }
    }

    /// The layer's fixed default option tree
    pub fn default_options() -> Value {
        json!({
            "react": { "overrides": rules::react_overrides() },
            "type": "app",
            "jsx": { "a11y": { "overrides": rules::jsx_a11y_overrides() } },
        })
    }

    /// Merge the react defaults under the user's options and delegate to
    /// the base layer, contributing the react JS tweaks before any
    /// caller-supplied fragments.
    pub async fn invoke(
        &self,
        assembler: &dyn Assembler,
        user_options: Option<Value>,
        extra_fragments: Vec<Fragment>,
    ) -> Result<Vec<Fragment>> {
        let user = user_options.unwrap_or_else(|| Value::Object(Map::new()));
        let options = merge_options(&[&Self::default_options(), &user]);

        let mut fragments = vec![rules::js_tweaks_fragment()];
        fragments.extend(extra_fragments);

        self.base.invoke(assembler, Some(options), fragments).await
    }
}

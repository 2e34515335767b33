//! Library preset layer

use flatcfg_core::{Assembler, Fragment, ResolveContext, Result, merge_options};
use serde_json::{Map, Value, json};

use crate::base::{BasePreset, is_truthy};
use crate::rules;

/// Reusable libraries: a `lib` project classifier and a root-level `rules`
/// seed, layered over [`BasePreset`].
///
/// Unlike the other layers this one appends its formatter-compatibility
/// fragment *after* assembly, so it lands behind everything the assembler
/// produced.
#[derive(Debug, Clone, Default)]
pub struct LibPreset {
    base: BasePreset,
}

impl LibPreset {
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
            "type": "lib",
            "prettier": true,
            "rules": rules::lib_override_rules(),
        })
    }

    /// Merge the library defaults under the user's options and delegate to
    /// the base layer, contributing the TSX relaxation before any
    /// caller-supplied fragments. Formatter compatibility is handled here
    /// rather than in the base layer: when the resolved toggle is on, the
    /// compat fragment is appended to the assembled sequence.
    pub async fn invoke(
        &self,
        assembler: &dyn Assembler,
        user_options: Option<Value>,
        extra_fragments: Vec<Fragment>,
    ) -> Result<Vec<Fragment>> {
        let user = user_options.unwrap_or_else(|| Value::Object(Map::new()));
        let mut options = merge_options(&[&Self::default_options(), &user]);

        let prettier = options.get("prettier").is_some_and(is_truthy);
        // The base layer must not emit its own compat fragment
        if let Some(map) = options.as_object_mut() {
            map.insert("prettier".to_string(), Value::Bool(false));
        }

        let mut fragments = vec![rules::tsx_override_fragment()];
        fragments.extend(extra_fragments);

        let mut assembled = self.base.invoke(assembler, Some(options), fragments).await?;
        if prettier {
            assembled.push(rules::prettier_fragment().await);
        }

        Ok(assembled)
    }
}

//! Next.js preset layer

use flatcfg_core::{Assembler, Fragment, ResolveContext, Result, merge_options};
use serde_json::{Map, Value, json};

use crate::react::ReactPreset;

/// Next.js applications: the react preset plus the nextjs rule family
#[derive(Debug, Clone, Default)]
pub struct NextPreset {
    react: ReactPreset,
}

impl NextPreset {
    /// Create a preset resolving against the process working directory and
    /// environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a preset with an explicit resolution context
    pub fn with_context(ctx: ResolveContext) -> Self {
        Self {
            react: ReactPreset::with_context(ctx),
        }
    }

    /// The layer's fixed default option tree
    pub fn default_options() -> Value {
        json!({
            "type": "app",
            "nextjs": true,
        })
    }

    /// Merge the Next.js defaults under the user's options and delegate to
    /// the react layer.
    pub async fn invoke(
        &self,
        assembler: &dyn Assembler,
        user_options: Option<Value>,
        extra_fragments: Vec<Fragment>,
    ) -> Result<Vec<Fragment>> {
        let user = user_options.unwrap_or_else(|| Value::Object(Map::new()));
        let options = merge_options(&[&Self::default_options(), &user]);

        self.react
            .invoke(assembler, Some(options), extra_fragments)
            .await
    }
}

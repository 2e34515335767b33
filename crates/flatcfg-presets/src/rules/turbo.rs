//! Build-orchestration plugin wiring

use flatcfg_core::Fragment;
use serde_json::json;

/// Wire the turbo plugin into script sources.
///
/// The plugin definition itself is resolved by the host engine; the
/// fragment only declares its presence and scope.
pub async fn turbo_fragment() -> Fragment {
    Fragment::named("flatcfg/turbo")
        .with_files(["**/*.js", "**/*.ts", "**/*.tsx"])
        .with_plugins(json!({ "turbo": {} }))
}

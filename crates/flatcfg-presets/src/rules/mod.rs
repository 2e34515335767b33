//! Fragment and override tables used by the preset layers
//!
//! These modules are data: each exposes constructors for the auxiliary
//! fragments a layer forwards to the assembler, or the override mappings a
//! layer seeds into its default option tree.

mod js;
mod library;
mod prettier;
mod react;
mod test_files;
mod turbo;
mod typescript;

pub use js::js_override_fragment;
pub use library::lib_override_rules;
pub use prettier::prettier_fragment;
pub use react::{js_tweaks_fragment, jsx_a11y_overrides, react_overrides};
pub use test_files::test_override_fragment;
pub use turbo::turbo_fragment;
pub use typescript::{ts_override_fragment, tsx_override_fragment};

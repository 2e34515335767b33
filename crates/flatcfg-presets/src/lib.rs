//! flatcfg presets
//!
//! Framework-specific configuration factories built on the flatcfg core.
//! Each preset layer carries a fixed default option tree, resolves it
//! against caller overrides through the core's merge engine, and forwards
//! the result plus its auxiliary fragments to an [`Assembler`].
//!
//! Layers compose by delegation: [`NextPreset`] merges its defaults and
//! hands off to [`ReactPreset`], which does the same and hands off to
//! [`BasePreset`], where option resolution (including the TypeScript
//! project probe) happens exactly once. [`LibPreset`] layers directly over
//! the base with a root-level rules seed for library projects.

pub mod base;
pub mod library;
pub mod next;
pub mod react;
pub mod rules;

pub use base::BasePreset;
pub use library::LibPreset;
pub use next::NextPreset;
pub use react::ReactPreset;

// Re-export the core surface preset consumers need
pub use flatcfg_core::{
    Assembler, BasicAssembler, ExecutionEnv, FlatcfgError, Fragment, ResolveContext, Result,
    merge_options, resolve_options,
};

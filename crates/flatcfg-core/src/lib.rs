//! flatcfg core
//!
//! Option-resolution and merge engine for composing flat lint
//! configurations. This crate provides the fundamental pieces preset layers
//! are built from:
//!
//! - a deterministic deep merge over layered option trees, with the
//!   reserved `rules` and `overrides` keys shallow-merged at any depth
//! - an option resolver with environment-aware TypeScript project discovery
//! - the [`Fragment`] output model and the [`Assembler`] seam to the
//!   rule-checking engine

pub mod assemble;
pub mod error;
pub mod fragment;
pub mod merge;
pub mod reserved;
pub mod resolver;
pub mod result;

// Re-export commonly used types
pub use assemble::{Assembler, BasicAssembler};
pub use error::FlatcfgError;
pub use fragment::Fragment;
pub use merge::merge_options;
pub use reserved::{RESERVED_KEYS, ReservedPath, collect_reserved, write_reserved};
pub use resolver::{
    ExecutionEnv, ResolveContext, TSCONFIG_CANDIDATES, find_tsconfig, resolve_options,
    should_set_tsconfig_path,
};
pub use result::Result;

//! Option resolution with TypeScript project discovery
//!
//! Preset layers resolve their default option trees against user-supplied
//! overrides before handing them to an assembler. Resolution has one
//! environment-aware wrinkle: when the user has not opted out of TypeScript
//! support, the resolver probes the working directory for a TypeScript
//! project file and injects its path into the defaults. The injection is
//! suppressed under the test execution context so that fixture directories
//! do not leak host paths into expected output, unless the user explicitly
//! supplied a structured `typescript` value of their own.

use std::env;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use tracing::debug;

use crate::merge::merge_options;

/// Environment variable consulted by [`ExecutionEnv::from_env`]
pub const ENV_VAR: &str = "FLATCFG_ENV";

/// TypeScript project file candidates, in priority order
pub const TSCONFIG_CANDIDATES: [&str; 4] = [
    "tsconfig.json",
    "tsconfig.eslint.json",
    "tsconfig.lint.json",
    // JavaScript projects with TypeScript-style configuration
    "jsconfig.json",
];

/// Execution context the resolver is running under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionEnv {
    /// Normal operation; discovery results are injected
    Production,
    /// Test runs; discovery results are suppressed
    Test,
}

impl ExecutionEnv {
    /// Read the execution context from the process environment.
    ///
    /// This is the only place the ambient environment is consulted; the
    /// resolver itself takes the context as an explicit parameter.
    pub fn from_env() -> Self {
        match env::var(ENV_VAR) {
            Ok(value) if value == "test" => Self::Test,
            _ => Self::Production,
        }
    }
}

/// Explicit context for one resolution pass
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// Directory probed for TypeScript project files
    pub cwd: PathBuf,
    /// Execution context controlling discovery suppression
    pub env: ExecutionEnv,
}

impl ResolveContext {
    /// Create a context with an explicit directory and environment
    pub fn new(cwd: impl Into<PathBuf>, env: ExecutionEnv) -> Self {
        Self {
            cwd: cwd.into(),
            env,
        }
    }

    /// Build a context from the process working directory and environment
    pub fn current() -> Self {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            cwd,
            env: ExecutionEnv::from_env(),
        }
    }
}

/// Decide whether the resolver should look for a TypeScript project file.
///
/// The `typescript` option is tri-state: `false` opts out entirely; an
/// object that carries a `tsconfigPath` key — even one set to `null` — has
/// made its choice and needs no discovery; anything else (absent, `true`,
/// an object without the key) enables the probe.
pub fn should_set_tsconfig_path(options: &Value) -> bool {
    match options.get("typescript") {
        Some(Value::Bool(false)) => false,
        Some(Value::Object(typescript)) => typescript.get("tsconfigPath").is_none(),
        _ => true,
    }
}

/// Locate a TypeScript project file in `cwd`.
///
/// Candidates are checked in [`TSCONFIG_CANDIDATES`] order; the first that
/// exists wins. Absence is a normal outcome, not an error.
pub fn find_tsconfig(cwd: &Path) -> Option<PathBuf> {
    for candidate in TSCONFIG_CANDIDATES {
        let path = cwd.join(candidate);
        if path.is_file() {
            debug!("Found TypeScript project file: {}", path.display());
            return Some(path);
        }
    }
    None
}

/// Resolve `defaults` against user-supplied overrides.
///
/// Performs the discovery probe when enabled, injects or suppresses its
/// result per the execution context, honors an explicit user-supplied
/// `typescript` object over both, and finally merges the user options over
/// the adjusted defaults with [`merge_options`].
pub fn resolve_options(defaults: &Value, user: &Value, ctx: &ResolveContext) -> Value {
    let mut resolved = defaults.clone();

    if should_set_tsconfig_path(user) {
        if let Some(tsconfig) = find_tsconfig(&ctx.cwd) {
            if ctx.env == ExecutionEnv::Test {
                debug!("Suppressing tsconfig injection in test context");
            } else {
                set_field(
                    &mut resolved,
                    "typescript",
                    json!({ "tsconfigPath": tsconfig.to_string_lossy() }),
                );
            }
        }
    }

    // An explicit structured typescript value from the user always wins,
    // even under the test context.
    if let Some(typescript @ Value::Object(_)) = user.get("typescript") {
        set_field(&mut resolved, "typescript", typescript.clone());
    }

    merge_options(&[&resolved, user])
}

fn set_field(tree: &mut Value, key: &str, value: Value) {
    match tree {
        Value::Object(map) => {
            map.insert(key.to_string(), value);
        }
        other => {
            let mut map = Map::new();
            map.insert(key.to_string(), value);
            *other = Value::Object(map);
        }
    }
}

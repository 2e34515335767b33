//! Relaxed rules for test files

use flatcfg_core::Fragment;
use serde_json::json;

/// Glob patterns identifying test files
pub const TEST_FILE_GLOBS: [&str; 8] = [
    "**/*.spec.?([cm])[jt]s?(x)",
    "**/*.test.?([cm])[jt]s?(x)",
    "**/test/**/*",
    "**/tests/**/*",
    "**/*.test.*",
    "**/__tests__/**/*",
    "__mocks__/**/*",
    "__mock__/**/*",
];

/// Relaxations applied to test files when `test.relaxed` is enabled
pub fn test_override_fragment() -> Fragment {
    Fragment::named("flatcfg/test-overrides")
        .with_files(TEST_FILE_GLOBS)
        .with_rules(json!({
            "ts/no-unsafe-assignment": "off",
            "ts/no-unsafe-member-access": "off",
            "ts/no-unsafe-argument": "off",
            "ts/strict-boolean-expressions": "off",
            "ts/no-unsafe-return": "off",
            "ts/no-unsafe-call": "off",
            "ts/no-explicit-any": "off",
            "ts/ban-ts-comment": "off",
            "ts/unbound-method": "off",
            "ts/typedef": "off",
            "ts/explicit-module-boundary-types": "off",
            "no-console": "off",
            "prefer-const": "off",
            "no-magic-numbers": "off",
            "no-await-in-loop": "off",
            "no-underscore-dangle": "off",
            "import/no-extraneous-dependencies": "off",
        }))
}

//! Configuration types deserialized from `rdl.toml`.

use serde::{Deserialize, Serialize};

/// Nesting depth used when `parser.max_nesting_depth` is not given.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// The top-level configuration parsed from `rdl.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RdlConfig {
    /// Settings for the constant-expression parser.
    #[serde(default)]
    pub parser: ParserConfig,
}

/// Knobs for the constant-expression parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Deepest allowed nesting of parenthesised, concatenated, cast or
    /// referenced sub-expressions before parsing fails.
    pub max_nesting_depth: usize,
    /// Reject struct literals that assign the same member twice instead of
    /// keeping the last assignment.
    pub reject_duplicate_struct_members: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            reject_duplicate_struct_members: false,
        }
    }
}

//! The tsconfig-style compiler option block.

use serde::{Deserialize, Serialize};

use crate::LuaTarget;

/// The subset of the project configuration the transformation passes read.
///
/// Field names deserialize in camelCase, so the block maps one-to-one onto
/// the JSON configuration users write. Every field has a default and unknown
/// fields are ignored, which lets the block live inside a larger config
/// object without a filtering step.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerOptions {
    /// Output Lua dialect.
    pub lua_target: LuaTarget,
    /// Treat functions without a `this` parameter type as `this: void`.
    pub no_implicit_self: bool,
    /// Forbid assignments that would create implicit global variables.
    pub no_implicit_global_variables: bool,
    /// Rewrite runtime tracebacks through the source map.
    pub source_map_traceback: bool,
}

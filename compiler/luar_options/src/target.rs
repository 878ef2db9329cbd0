//! Output Lua target identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error when parsing a Lua target identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown Lua target '{0}', expected one of: universal, 5.0, 5.1, 5.2, 5.3, 5.4, JIT")]
pub struct TargetParseError(pub String);

/// Output Lua dialect the compiler emits for.
///
/// The serialized identifiers are the ones accepted in the JSON
/// configuration (`"universal"`, `"5.0"` through `"5.4"`, `"JIT"`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum LuaTarget {
    /// Emit code that runs unmodified on every supported dialect.
    #[serde(rename = "universal")]
    #[default]
    Universal,
    /// Lua 5.0
    #[serde(rename = "5.0")]
    Lua50,
    /// Lua 5.1
    #[serde(rename = "5.1")]
    Lua51,
    /// Lua 5.2
    #[serde(rename = "5.2")]
    Lua52,
    /// Lua 5.3
    #[serde(rename = "5.3")]
    Lua53,
    /// Lua 5.4
    #[serde(rename = "5.4")]
    Lua54,
    /// LuaJIT
    #[serde(rename = "JIT")]
    LuaJit,
}

impl LuaTarget {
    /// All target variants, for exhaustive testing.
    pub const ALL: &[LuaTarget] = &[
        LuaTarget::Universal,
        LuaTarget::Lua50,
        LuaTarget::Lua51,
        LuaTarget::Lua52,
        LuaTarget::Lua53,
        LuaTarget::Lua54,
        LuaTarget::LuaJit,
    ];

    /// The configuration identifier (e.g., `"5.1"`).
    pub fn identifier(&self) -> &'static str {
        match self {
            LuaTarget::Universal => "universal",
            LuaTarget::Lua50 => "5.0",
            LuaTarget::Lua51 => "5.1",
            LuaTarget::Lua52 => "5.2",
            LuaTarget::Lua53 => "5.3",
            LuaTarget::Lua54 => "5.4",
            LuaTarget::LuaJit => "JIT",
        }
    }

    /// Human-readable target name for diagnostic text.
    ///
    /// `LuaJit` is the one aliased name; every other target renders as
    /// `Lua` followed by its configuration identifier.
    pub fn display_name(&self) -> &'static str {
        match self {
            LuaTarget::Universal => "Lua universal",
            LuaTarget::Lua50 => "Lua 5.0",
            LuaTarget::Lua51 => "Lua 5.1",
            LuaTarget::Lua52 => "Lua 5.2",
            LuaTarget::Lua53 => "Lua 5.3",
            LuaTarget::Lua54 => "Lua 5.4",
            LuaTarget::LuaJit => "LuaJIT",
        }
    }
}

impl fmt::Display for LuaTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for LuaTarget {
    type Err = TargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "universal" => Ok(LuaTarget::Universal),
            "5.0" => Ok(LuaTarget::Lua50),
            "5.1" => Ok(LuaTarget::Lua51),
            "5.2" => Ok(LuaTarget::Lua52),
            "5.3" => Ok(LuaTarget::Lua53),
            "5.4" => Ok(LuaTarget::Lua54),
            "JIT" => Ok(LuaTarget::LuaJit),
            _ => Err(TargetParseError(s.to_owned())),
        }
    }
}

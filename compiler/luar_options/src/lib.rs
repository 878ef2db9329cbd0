//! Compiler configuration for the Luar compiler.
//!
//! This crate contains the options the transformation passes read:
//! - [`LuaTarget`] - closed set of output-target identifiers
//! - [`CompilerOptions`] - the tsconfig-style option block
//!
//! Options are deserialized straight out of the project's JSON configuration
//! with camelCase field names, so the compiler's block inside `tsconfig.json`
//! maps onto [`CompilerOptions`] without any renaming layer.

mod options;
mod target;

pub use options::CompilerOptions;
pub use target::{LuaTarget, TargetParseError};

//! Position-query capability.
//!
//! Diagnostic factories need exactly one thing from the AST: where a node
//! sits in its source file. `Positioned` is that single capability, so the
//! tree itself never has to enter the diagnostic crates.

use crate::SourceSpan;

/// Trait for values that know their source location.
pub trait Positioned {
    /// Source span of this value.
    ///
    /// A cheap, pure query with no failure mode: every node belongs to a
    /// known source file with a valid offset and width.
    fn source_span(&self) -> SourceSpan;
}

/// A span can stand in for a node wherever only the position matters.
impl Positioned for SourceSpan {
    fn source_span(&self) -> SourceSpan {
        self.clone()
    }
}

//! Core diagnostic value types.
//!
//! Defines [`Severity`] and [`DiagnosticRecord`] - the immutable values every
//! compiler pass hands to the diagnostic sink.

use std::fmt;

use luar_source::SourceSpan;

/// Severity category for diagnostics.
///
/// Fixed per factory at construction time. Whether a compilation with
/// warnings still succeeds is the sink's policy, not this crate's.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One reported diagnostic, ready for the sink.
///
/// Fully self-describing: the span, severity, and rendered message are all
/// the record carries, with no reference back to the AST or any compiler
/// internals. That is what makes it safe to queue, copy, or send to another
/// thread. A record has no identity beyond its content - two invocations
/// with the same inputs produce field-for-field equal values.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "diagnostics should be handed to a sink, not silently dropped"]
pub struct DiagnosticRecord {
    /// Source region the diagnostic points at.
    pub span: SourceSpan,
    /// Severity category.
    pub severity: Severity,
    /// Rendered, human-readable message text.
    pub message: String,
}

impl DiagnosticRecord {
    /// Check if this is an error (vs warning).
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Check if this is a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

impl fmt::Display for DiagnosticRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.span, self.severity, self.message)
    }
}

//! Diagnostic factories: reusable, serialization-safe record constructors.
//!
//! A factory pairs a fixed severity with a message provider. The provider is
//! constant text or a plain `fn` pointer to a named renderer - never a
//! capturing closure - so a factory holds no environment state and can be
//! declared in a `static`, shared read-only by every call site, and invoked
//! concurrently without synchronization. Only the records it produces ever
//! need to cross a worker boundary.

use std::fmt;

use luar_source::Positioned;

use crate::{DiagnosticRecord, Severity};

/// Message text source for one diagnostic kind.
pub enum MessageProvider<A = ()> {
    /// Fixed text, independent of call-site arguments.
    Static(&'static str),
    /// Pure renderer computing the text from the call-site arguments.
    ///
    /// Must be a named function with no side effects; it may not retain its
    /// arguments beyond the call. Enforced by convention, not at runtime.
    Computed(fn(A) -> String),
}

impl<A> MessageProvider<A> {
    /// Render the message for one invocation.
    pub fn render(&self, args: A) -> String {
        match self {
            MessageProvider::Static(text) => (*text).to_owned(),
            MessageProvider::Computed(render) => render(args),
        }
    }
}

impl<A> Clone for MessageProvider<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for MessageProvider<A> {}

impl<A> fmt::Debug for MessageProvider<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageProvider::Static(text) => f.debug_tuple("Static").field(text).finish(),
            MessageProvider::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A reusable constructor for one diagnostic kind.
///
/// One factory exists per catalog entry, built once in a `static` and reused
/// for the life of the process. Invoking it resolves the node's span, renders
/// the message, and returns a fresh [`DiagnosticRecord`]; nothing is mutated,
/// no I/O happens, and the invocation unconditionally completes.
///
/// The argument list is typed per kind, so an arity or type mismatch at a
/// call site is a compile error rather than a runtime check.
pub struct DiagnosticFactory<A = ()> {
    severity: Severity,
    provider: MessageProvider<A>,
}

impl<A> DiagnosticFactory<A> {
    /// Create a factory with an explicit severity.
    pub const fn new(severity: Severity, provider: MessageProvider<A>) -> Self {
        DiagnosticFactory { severity, provider }
    }

    /// Create an error factory.
    pub const fn error(provider: MessageProvider<A>) -> Self {
        Self::new(Severity::Error, provider)
    }

    /// Create a warning factory.
    pub const fn warning(provider: MessageProvider<A>) -> Self {
        Self::new(Severity::Warning, provider)
    }

    /// Severity this factory stamps on every record.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Build a record positioned at `node` from the given arguments.
    #[cold]
    pub fn create_with(&self, node: &impl Positioned, args: A) -> DiagnosticRecord {
        DiagnosticRecord {
            span: node.source_span(),
            severity: self.severity,
            message: self.provider.render(args),
        }
    }
}

impl DiagnosticFactory<()> {
    /// Build a record positioned at `node` (argument-free kinds).
    #[cold]
    pub fn create(&self, node: &impl Positioned) -> DiagnosticRecord {
        self.create_with(node, ())
    }
}

impl<A> Clone for DiagnosticFactory<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for DiagnosticFactory<A> {}

impl<A> fmt::Debug for DiagnosticFactory<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticFactory")
            .field("severity", &self.severity)
            .field("provider", &self.provider)
            .finish()
    }
}

// Factories and records are shared between compilation workers; keep that a
// compile-time guarantee.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DiagnosticFactory<String>>();
    assert_send_sync::<MessageProvider<(String, usize)>>();
    assert_send_sync::<DiagnosticRecord>();
};

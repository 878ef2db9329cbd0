//! Diagnostic reporting for the Luar compiler.
//!
//! Transformation passes report every condition they detect through a
//! catalog of pre-built diagnostic factories:
//! - One named factory per detectable condition ([`catalog`])
//! - Typed argument lists, checked at compile time
//! - Records anchored to precise source locations
//!
//! # Worker-Boundary Safety
//!
//! A factory is pure data: a severity plus a message provider, where the
//! provider is constant text or a named rendering function - never a closure
//! over live compiler state. Invoking a factory reads its arguments, queries
//! the node's span, and returns an owned [`DiagnosticRecord`] that carries no
//! reference back to the AST. Records therefore cross thread and process
//! boundaries as plain values; with the `serialize` feature they round-trip
//! through serde unchanged.
//!
//! ```text
//! // Argument-free kind
//! sink.accept(catalog::FORBIDDEN_FOR_IN.create(&node));
//!
//! // Parameterized kind; arity and types are checked at compile time
//! sink.accept(catalog::ANNOTATION_INVALID_ARGUMENT_COUNT.create_with(
//!     &node,
//!     (AnnotationKind::ForRange, args.len(), 1),
//! ));
//! ```

mod annotation;
pub mod catalog;
mod factory;
mod record;
mod sink;

pub use annotation::AnnotationKind;
pub use factory::{DiagnosticFactory, MessageProvider};
pub use record::{DiagnosticRecord, Severity};
pub use sink::{DiagnosticCollector, DiagnosticSink};

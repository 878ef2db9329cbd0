//! Luar source identity and location model.
//!
//! This crate contains the location types every other compiler crate anchors
//! diagnostics to:
//! - [`SourceFileRef`] - opaque, by-value-copyable file identifier
//! - [`SourceSpan`] - half-open source region within one file
//! - [`Positioned`] - position-query capability implemented by AST nodes
//!
//! # Worker-Boundary Safety
//!
//! All types here capture information by value. A [`SourceSpan`] holds a
//! shared path handle rather than an open file or a reference into the tree,
//! so values built from it can be queued, copied, or sent to another thread
//! without synchronization. With the `serialize` feature they also cross
//! process boundaries as plain data.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod file;
mod span;
mod traits;

pub use file::SourceFileRef;
pub use span::{SourceSpan, SpanError};
pub use traits::Positioned;

//! Opaque source file references.

use std::fmt;
use std::sync::Arc;

/// Opaque identifier of a source file.
///
/// A cheap shared handle over the file path. It carries no file contents and
/// no open handle, so cloning is a reference-count bump and the value can be
/// embedded in diagnostic records that leave the compilation thread.
///
/// With the `serialize` feature the reference serializes as its path string.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct SourceFileRef(Arc<str>);

impl SourceFileRef {
    /// Create a reference from a file path.
    pub fn new(path: impl Into<Arc<str>>) -> Self {
        SourceFileRef(path.into())
    }

    /// The file path this reference identifies.
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SourceFileRef {
    fn from(path: &str) -> Self {
        SourceFileRef::new(path)
    }
}

impl From<String> for SourceFileRef {
    fn from(path: String) -> Self {
        SourceFileRef::new(path)
    }
}

impl From<SourceFileRef> for String {
    fn from(file: SourceFileRef) -> String {
        file.0.as_ref().to_owned()
    }
}

impl fmt::Display for SourceFileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Compiler-annotation tags consumed by diagnostic messages.
//!
//! Annotations are `@tag` markers read from documentation comments in the
//! input source. The diagnostic catalog only names them in message text; it
//! never drives behavior from them.

use std::fmt;

/// A recognized compiler-annotation tag.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AnnotationKind {
    /// Class members compile as assignments to an existing global.
    Extension,
    /// Class members compile as assignments to an existing metatable.
    MetaExtension,
    /// Instances are created through a user-named constructor function.
    CustomConstructor,
    /// Enum members are inlined at use sites; the declaration emits nothing.
    CompileMembersOnly,
    /// Import path is emitted verbatim, skipping module resolution.
    NoResolution,
    /// Class exists for type checking only and emits no code.
    PureAbstract,
    /// Namespace is erased; its members resolve to globals.
    Phantom,
    /// Function returns multiple values instead of a wrapped tuple.
    TupleReturn,
    /// Function is usable directly as a Lua iterator in `for ... in`.
    LuaIterator,
    /// Interface maps onto a raw Lua table with `get`/`set` access.
    LuaTable,
    /// Function takes no implicit `self` parameter.
    NoSelf,
    /// Every function in the file takes no implicit `self` parameter.
    NoSelfInFile,
    /// Array parameter maps onto Lua `...` varargs.
    Vararg,
    /// Function call compiles to a numeric `for` loop.
    ForRange,
}

impl AnnotationKind {
    /// All annotation tags, for lookup and exhaustive testing.
    pub const ALL: &[AnnotationKind] = &[
        AnnotationKind::Extension,
        AnnotationKind::MetaExtension,
        AnnotationKind::CustomConstructor,
        AnnotationKind::CompileMembersOnly,
        AnnotationKind::NoResolution,
        AnnotationKind::PureAbstract,
        AnnotationKind::Phantom,
        AnnotationKind::TupleReturn,
        AnnotationKind::LuaIterator,
        AnnotationKind::LuaTable,
        AnnotationKind::NoSelf,
        AnnotationKind::NoSelfInFile,
        AnnotationKind::Vararg,
        AnnotationKind::ForRange,
    ];

    /// The tag as written in source, without the leading `@`.
    pub fn as_str(self) -> &'static str {
        match self {
            AnnotationKind::Extension => "extension",
            AnnotationKind::MetaExtension => "metaExtension",
            AnnotationKind::CustomConstructor => "customConstructor",
            AnnotationKind::CompileMembersOnly => "compileMembersOnly",
            AnnotationKind::NoResolution => "noResolution",
            AnnotationKind::PureAbstract => "pureAbstract",
            AnnotationKind::Phantom => "phantom",
            AnnotationKind::TupleReturn => "tupleReturn",
            AnnotationKind::LuaIterator => "luaIterator",
            AnnotationKind::LuaTable => "luaTable",
            AnnotationKind::NoSelf => "noSelf",
            AnnotationKind::NoSelfInFile => "noSelfInFile",
            AnnotationKind::Vararg => "vararg",
            AnnotationKind::ForRange => "forRange",
        }
    }

    /// Look up a tag by its source form. Matching is case-sensitive and
    /// exact; unknown tags are not diagnosed, they are ignored.
    pub fn from_name(name: &str) -> Option<AnnotationKind> {
        AnnotationKind::ALL
            .iter()
            .find(|kind| kind.as_str() == name)
            .copied()
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! The diagnostic registry: one `pub static` factory per reportable
//! condition.
//!
//! Entries are first-class values. A lowering pass holds a reference to the
//! entry it reports and calls [`create`](DiagnosticFactory::create) or
//! [`create_with`](DiagnosticFactory::create_with) at the offending node;
//! the argument list is typed per entry, so a wrong arity or argument type
//! fails to compile. Message text lives here and nowhere else.

// Renderers must match the `fn(Args) -> String` provider shape, so they take
// owned arguments even where the text only borrows them.
#![allow(clippy::needless_pass_by_value)]

use luar_options::LuaTarget;

use crate::{AnnotationKind, DiagnosticFactory, MessageProvider};

/// Inserts ` 'name'` when a name is known, nothing otherwise.
fn name_reference(name: Option<String>) -> String {
    match name {
        Some(name) => format!(" '{name}'"),
        None => String::new(),
    }
}

/// Documentation link for an annotation tag. The anchor fragment is the only
/// place a tag is ever lower-cased.
fn annotation_doc_url(kind: AnnotationKind) -> String {
    format!(
        "https://luar-lang.github.io/docs/compiler-annotations#{}",
        kind.as_str().to_lowercase()
    )
}

/// Lowering reached a node kind no transformer handles.
pub static UNSUPPORTED_NODE_KIND: DiagnosticFactory<String> =
    DiagnosticFactory::error(MessageProvider::Computed(unsupported_node_kind_message));

fn unsupported_node_kind_message(kind: String) -> String {
    format!("Unsupported node kind {kind}.")
}

/// `for ... in` over a value of array type.
pub static FORBIDDEN_FOR_IN: DiagnosticFactory = DiagnosticFactory::error(MessageProvider::Static(
    "Iterating over arrays with 'for ... in' is not allowed.",
));

// Conversions between self-taking and self-free function types. The optional
// argument is the function's name when one is known at the conversion site.

/// A function typed with `this` flows into a position typed without it.
pub static UNSUPPORTED_NO_SELF_FUNCTION_CONVERSION: DiagnosticFactory<Option<String>> =
    DiagnosticFactory::error(MessageProvider::Computed(
        unsupported_no_self_function_conversion_message,
    ));

fn unsupported_no_self_function_conversion_message(name: Option<String>) -> String {
    format!(
        "Unable to convert function with a 'this' parameter to function{} with no 'this'. \
         To fix, wrap in an arrow function, or declare with 'this: void'.",
        name_reference(name)
    )
}

/// A function typed without `this` flows into a position typed with it.
pub static UNSUPPORTED_SELF_FUNCTION_CONVERSION: DiagnosticFactory<Option<String>> =
    DiagnosticFactory::error(MessageProvider::Computed(
        unsupported_self_function_conversion_message,
    ));

fn unsupported_self_function_conversion_message(name: Option<String>) -> String {
    format!(
        "Unable to convert function with no 'this' parameter to function{} with 'this'. \
         To fix, wrap in an arrow function, or declare with 'this: any'.",
        name_reference(name)
    )
}

/// Assignment target has overloads that disagree about `this`.
pub static UNSUPPORTED_OVERLOAD_ASSIGNMENT: DiagnosticFactory<Option<String>> =
    DiagnosticFactory::error(MessageProvider::Computed(
        unsupported_overload_assignment_message,
    ));

fn unsupported_overload_assignment_message(name: Option<String>) -> String {
    format!(
        "Unsupported assignment of function{} with different overloaded types for 'this'. \
         Overloads should either all have a 'this' parameter or none.",
        name_reference(name)
    )
}

pub static DECORATOR_INVALID_CONTEXT: DiagnosticFactory = DiagnosticFactory::error(
    MessageProvider::Static("Decorator function cannot have 'this: void'."),
);

/// An annotation was written with the wrong number of arguments.
pub static ANNOTATION_INVALID_ARGUMENT_COUNT: DiagnosticFactory<(AnnotationKind, usize, usize)> =
    DiagnosticFactory::error(MessageProvider::Computed(
        annotation_invalid_argument_count_message,
    ));

fn annotation_invalid_argument_count_message(
    (kind, got, expected): (AnnotationKind, usize, usize),
) -> String {
    format!("'@{kind}' expects {expected} arguments, but got {got}.")
}

// Restrictions on extension classes. An extension class describes values
// that already exist on the Lua side, so it has no constructible identity
// of its own.

pub static EXTENSION_CANNOT_CONSTRUCT: DiagnosticFactory = DiagnosticFactory::error(
    MessageProvider::Static("Cannot construct classes with '@extension' or '@metaExtension' annotation."),
);

pub static EXTENSION_CANNOT_EXTEND: DiagnosticFactory = DiagnosticFactory::error(
    MessageProvider::Static("Cannot extend classes with '@extension' or '@metaExtension' annotation."),
);

pub static EXTENSION_CANNOT_EXPORT: DiagnosticFactory = DiagnosticFactory::error(
    MessageProvider::Static("Cannot export classes with '@extension' or '@metaExtension' annotation."),
);

pub static EXTENSION_INVALID_INSTANCE_OF: DiagnosticFactory = DiagnosticFactory::error(
    MessageProvider::Static(
        "Cannot use instanceof on classes with '@extension' or '@metaExtension' annotation.",
    ),
);

pub static EXTENSION_AND_META_EXTENSION_CONFLICT: DiagnosticFactory =
    DiagnosticFactory::error(MessageProvider::Static(
        "Cannot use both '@extension' and '@metaExtension' annotations on the same class.",
    ));

pub static META_EXTENSION_MISSING_EXTENDS: DiagnosticFactory =
    DiagnosticFactory::error(MessageProvider::Static(
        "'@metaExtension' annotation requires the extension of the metatable class.",
    ));

/// A `@forRange` call site broke one of the range-call rules; the argument
/// names the broken rule.
pub static INVALID_FOR_RANGE_CALL: DiagnosticFactory<String> =
    DiagnosticFactory::error(MessageProvider::Computed(invalid_for_range_call_message));

fn invalid_for_range_call_message(message: String) -> String {
    format!("Invalid @forRange call: {message}.")
}

/// A language feature has no lowering for the configured Lua target.
pub static UNSUPPORTED_FOR_TARGET: DiagnosticFactory<(String, LuaTarget)> =
    DiagnosticFactory::error(MessageProvider::Computed(unsupported_for_target_message));

fn unsupported_for_target_message((functionality, target): (String, LuaTarget)) -> String {
    format!(
        "{functionality} is/are not supported for target {}.",
        target.display_name()
    )
}

/// A known built-in has this property, but no lowering exists for it.
pub static UNSUPPORTED_PROPERTY: DiagnosticFactory<(String, String)> =
    DiagnosticFactory::error(MessageProvider::Computed(unsupported_property_message));

fn unsupported_property_message((parent, property): (String, String)) -> String {
    format!("{parent}.{property} is unsupported.")
}

/// Ambient declarations emit no code, so their names must already be valid
/// on the Lua side.
pub static INVALID_AMBIENT_IDENTIFIER_NAME: DiagnosticFactory<String> = DiagnosticFactory::error(
    MessageProvider::Computed(invalid_ambient_identifier_name_message),
);

fn invalid_ambient_identifier_name_message(text: String) -> String {
    format!(
        "Invalid ambient identifier name '{text}'. \
         Ambient identifiers must be valid lua identifiers."
    )
}

pub static UNSUPPORTED_VAR_DECLARATION: DiagnosticFactory =
    DiagnosticFactory::error(MessageProvider::Static(
        "'var' declarations are not supported. Use 'let' or 'const' instead.",
    ));

// Multiple-return values. `$multi` and the LuaMultiReturn type compile to
// Lua's native multiple returns, which only exist in restricted syntactic
// positions.

pub static INVALID_MULTI_FUNCTION_USE: DiagnosticFactory = DiagnosticFactory::error(
    MessageProvider::Static("The $multi function must be called in a return statement."),
);

pub static INVALID_MULTI_FUNCTION_RETURN_TYPE: DiagnosticFactory = DiagnosticFactory::error(
    MessageProvider::Static("The $multi function must return a $multi tuple."),
);

pub static INVALID_MULTI_TYPE_TO_NON_ARRAY_BINDING_PATTERN: DiagnosticFactory =
    DiagnosticFactory::error(MessageProvider::Static(
        "The LuaMultiReturn type can only be destructured with an array binding pattern.",
    ));

pub static INVALID_MULTI_TYPE_ARRAY_BINDING_PATTERN_ELEMENT_INITIALIZER: DiagnosticFactory =
    DiagnosticFactory::error(MessageProvider::Static(
        "The elements of a LuaMultiReturn type in an array binding pattern cannot have initializers.",
    ));

pub static INVALID_MULTI_TYPE_TO_EMPTY_PATTERN_OR_ARRAY_LITERAL: DiagnosticFactory =
    DiagnosticFactory::error(MessageProvider::Static(
        "The LuaMultiReturn type cannot be destructured with an empty array binding pattern \
         or assigned to an empty array literal.",
    ));

pub static INVALID_MULTI_RETURN_ACCESS: DiagnosticFactory =
    DiagnosticFactory::error(MessageProvider::Static(
        "The LuaMultiReturn type can only be accessed via an element access expression \
         with a numeric type.",
    ));

pub static INVALID_RANGE_USE: DiagnosticFactory = DiagnosticFactory::error(
    MessageProvider::Static("$range can only be used in a for...of loop."),
);

pub static INVALID_VARARG_USE: DiagnosticFactory = DiagnosticFactory::error(
    MessageProvider::Static("$vararg can only be used in a spread element in the global scope."),
);

// Annotation lifecycle. Retired tags stay recognized so their uses can point
// at the migration docs instead of being silently ignored.

/// The tag was retired and its behavior no longer exists.
pub static ANNOTATION_REMOVED: DiagnosticFactory<AnnotationKind> =
    DiagnosticFactory::error(MessageProvider::Computed(annotation_removed_message));

fn annotation_removed_message(kind: AnnotationKind) -> String {
    format!(
        "'@{kind}' is no longer supported. See {} for more information.",
        annotation_doc_url(kind)
    )
}

/// The tag still works but is scheduled for removal. The only warning in the
/// registry.
pub static ANNOTATION_DEPRECATED: DiagnosticFactory<AnnotationKind> =
    DiagnosticFactory::warning(MessageProvider::Computed(annotation_deprecated_message));

fn annotation_deprecated_message(kind: AnnotationKind) -> String {
    format!(
        "'@{kind}' is deprecated and will be removed in a future update. \
         Please update the code to use the new syntax: {}",
        annotation_doc_url(kind)
    )
}

// Call extensions are functions that only exist as compile-time rewrites,
// so a reference to one has no value to compile.

pub static INVALID_CALL_EXTENSION_USE: DiagnosticFactory = DiagnosticFactory::error(
    MessageProvider::Static("This function must be called directly and cannot be referred to."),
);

pub static INVALID_SPREAD_IN_CALL_EXTENSION: DiagnosticFactory = DiagnosticFactory::error(
    MessageProvider::Static("Spread elements are not supported in call extension arguments."),
);

pub static UNSUPPORTED_BUILTIN_OPTIONAL_CALL: DiagnosticFactory =
    DiagnosticFactory::error(MessageProvider::Static(
        "Optional calls are not supported for builtin or language extension functions.",
    ));

#[cfg(test)]
mod tests;

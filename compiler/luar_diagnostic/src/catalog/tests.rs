use pretty_assertions::assert_eq;

use luar_options::LuaTarget;
use luar_source::{SourceFileRef, SourceSpan};

use crate::{AnnotationKind, Severity};

use super::*;

fn span(start: u32, length: u32) -> SourceSpan {
    SourceSpan::new(SourceFileRef::new("main.ts"), start, length)
}

#[test]
fn static_entries_render_fixed_text() {
    let record = FORBIDDEN_FOR_IN.create(&span(0, 7));

    assert_eq!(
        record.message,
        "Iterating over arrays with 'for ... in' is not allowed."
    );
    assert_eq!(record.severity, Severity::Error);
}

#[test]
fn static_entries_render_identically_on_every_invocation() {
    let first = INVALID_RANGE_USE.create(&span(0, 6));
    let second = INVALID_RANGE_USE.create(&span(90, 6));

    assert_eq!(first.message, second.message);
}

#[test]
fn record_is_positioned_at_the_reported_node() {
    let node = span(120, 16);
    let record = UNSUPPORTED_VAR_DECLARATION.create(&node);

    assert_eq!(record.span, node);
}

#[test]
fn node_kind_is_interpolated() {
    let record = UNSUPPORTED_NODE_KIND.create_with(&span(0, 1), "WithStatement".to_owned());

    assert_eq!(record.message, "Unsupported node kind WithStatement.");
}

#[test]
fn known_function_name_is_quoted_with_one_leading_space() {
    let record = UNSUPPORTED_NO_SELF_FUNCTION_CONVERSION
        .create_with(&span(3, 9), Some("useCallback".to_owned()));

    assert_eq!(
        record.message,
        "Unable to convert function with a 'this' parameter to function 'useCallback' \
         with no 'this'. To fix, wrap in an arrow function, or declare with 'this: void'."
    );
}

#[test]
fn missing_function_name_leaves_no_gap() {
    let record = UNSUPPORTED_SELF_FUNCTION_CONVERSION.create_with(&span(3, 9), None);

    assert_eq!(
        record.message,
        "Unable to convert function with no 'this' parameter to function with 'this'. \
         To fix, wrap in an arrow function, or declare with 'this: any'."
    );
}

#[test]
fn overload_assignment_names_the_function_when_known() {
    let named = UNSUPPORTED_OVERLOAD_ASSIGNMENT.create_with(&span(1, 2), Some("connect".to_owned()));
    let anonymous = UNSUPPORTED_OVERLOAD_ASSIGNMENT.create_with(&span(1, 2), None);

    assert!(named
        .message
        .starts_with("Unsupported assignment of function 'connect' with"));
    assert!(anonymous
        .message
        .starts_with("Unsupported assignment of function with"));
}

#[test]
fn argument_counts_are_not_pluralized() {
    let record = ANNOTATION_INVALID_ARGUMENT_COUNT
        .create_with(&span(5, 9), (AnnotationKind::ForRange, 2, 1));

    assert_eq!(record.message, "'@forRange' expects 1 arguments, but got 2.");
}

#[test]
fn target_names_use_the_jit_alias_only() {
    let jit = UNSUPPORTED_FOR_TARGET
        .create_with(&span(0, 4), ("Relative imports".to_owned(), LuaTarget::LuaJit));
    let lua50 = UNSUPPORTED_FOR_TARGET
        .create_with(&span(0, 4), ("Bitwise operations".to_owned(), LuaTarget::Lua50));
    let universal = UNSUPPORTED_FOR_TARGET
        .create_with(&span(0, 4), ("Continue statements".to_owned(), LuaTarget::Universal));

    assert_eq!(
        jit.message,
        "Relative imports is/are not supported for target LuaJIT."
    );
    assert_eq!(
        lua50.message,
        "Bitwise operations is/are not supported for target Lua 5.0."
    );
    assert_eq!(
        universal.message,
        "Continue statements is/are not supported for target Lua universal."
    );
}

#[test]
fn property_rendering_joins_parent_and_member() {
    let record = UNSUPPORTED_PROPERTY
        .create_with(&span(7, 3), ("Symbol".to_owned(), "hasInstance".to_owned()));

    assert_eq!(record.message, "Symbol.hasInstance is unsupported.");
}

#[test]
fn for_range_call_embeds_the_reason() {
    let record = INVALID_FOR_RANGE_CALL
        .create_with(&span(0, 8), "@forRange function must return a number".to_owned());

    assert_eq!(
        record.message,
        "Invalid @forRange call: @forRange function must return a number."
    );
}

#[test]
fn ambient_identifier_message_quotes_the_offender() {
    let record = INVALID_AMBIENT_IDENTIFIER_NAME.create_with(&span(0, 5), "$$dollar".to_owned());

    assert_eq!(
        record.message,
        "Invalid ambient identifier name '$$dollar'. \
         Ambient identifiers must be valid lua identifiers."
    );
}

#[test]
fn deprecation_lower_cases_only_the_anchor() {
    let record = ANNOTATION_DEPRECATED.create_with(&span(2, 14), AnnotationKind::MetaExtension);

    assert!(record.message.contains("'@metaExtension'"));
    assert!(record.message.contains("#metaextension"));
    assert!(!record.message.contains("#metaExtension"));
    assert_eq!(record.severity, Severity::Warning);
}

#[test]
fn removed_annotation_links_to_docs() {
    let record = ANNOTATION_REMOVED.create_with(&span(2, 12), AnnotationKind::PureAbstract);

    assert_eq!(
        record.message,
        "'@pureAbstract' is no longer supported. See \
         https://luar-lang.github.io/docs/compiler-annotations#pureabstract for more information."
    );
    assert_eq!(record.severity, Severity::Error);
}

#[test]
fn identical_invocations_produce_equal_records() {
    let node = span(44, 6);
    let first = ANNOTATION_INVALID_ARGUMENT_COUNT
        .create_with(&node, (AnnotationKind::Vararg, 3, 0));
    let second = ANNOTATION_INVALID_ARGUMENT_COUNT
        .create_with(&node, (AnnotationKind::Vararg, 3, 0));

    assert_eq!(first, second);
}

#[test]
fn deprecation_is_the_only_warning() {
    assert_eq!(ANNOTATION_DEPRECATED.severity(), Severity::Warning);
    assert_eq!(ANNOTATION_REMOVED.severity(), Severity::Error);
    assert_eq!(FORBIDDEN_FOR_IN.severity(), Severity::Error);
    assert_eq!(UNSUPPORTED_BUILTIN_OPTIONAL_CALL.severity(), Severity::Error);
}

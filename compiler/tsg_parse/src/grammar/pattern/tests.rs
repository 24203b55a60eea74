#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::{ForHead, ObjectPatternProp, Pattern, PatternKind, StmtKind};
use tsg_ir::StringInterner;

use crate::{parse_str, ParseOptions, ParseResult};

fn parse(source: &str) -> ParseResult {
    parse_str(source, &StringInterner::new(), ParseOptions::default())
}

fn codes(result: &ParseResult) -> Vec<ErrorCode> {
    result.errors.iter().map(|error| error.code).collect()
}

/// The pattern of the first declarator of a clean variable statement.
fn declared(source: &str) -> Pattern {
    let result = parse(source);
    assert!(
        !result.has_errors(),
        "unexpected errors for {source:?}: {:?}",
        result.errors
    );
    let mut items = result.file.items;
    match items.remove(0).kind {
        StmtKind::Var(mut decl) => decl.declarators.remove(0).pattern,
        other => panic!("expected variable statement, got {other:?}"),
    }
}

#[test]
fn object_binding_forms() {
    let PatternKind::Object(props) = declared("let { a, b: c, d = 1 } = x;").kind else {
        panic!("expected object pattern");
    };
    assert_eq!(props.len(), 3);
    assert!(matches!(props[0], ObjectPatternProp::Shorthand { default: None, .. }));
    assert!(matches!(props[1], ObjectPatternProp::KeyValue { .. }));
    assert!(matches!(props[2], ObjectPatternProp::Shorthand { default: Some(_), .. }));
}

#[test]
fn array_binding_with_holes_and_rest() {
    let PatternKind::Array { elements, rest } = declared("let [a, , b, ...tail] = x;").kind
    else {
        panic!("expected array pattern");
    };
    assert_eq!(elements.len(), 3);
    assert!(elements[1].is_none());
    assert!(rest.is_some());
}

#[test]
fn trailing_comma_in_array_binding_is_not_a_hole() {
    let PatternKind::Array { elements, .. } = declared("let [a,] = x;").kind else {
        panic!("expected array pattern");
    };
    assert_eq!(elements.len(), 1);
}

#[test]
fn nested_binding_patterns() {
    let PatternKind::Object(props) = declared("let { a: [b, { c }] = [] } = x;").kind else {
        panic!("expected object pattern");
    };
    let ObjectPatternProp::KeyValue { value, .. } = &props[0] else {
        panic!("expected key-value property");
    };
    let PatternKind::Assign { target, .. } = &value.kind else {
        panic!("expected defaulted element");
    };
    assert!(matches!(target.kind, PatternKind::Array { .. }));
}

#[test]
fn destructuring_declaration_needs_an_initializer() {
    let result = parse("let { a };");
    assert_eq!(codes(&result), vec![ErrorCode::E1008]);
}

#[test]
fn const_needs_an_initializer() {
    let result = parse("const x;");
    assert_eq!(codes(&result), vec![ErrorCode::E1001]);
}

#[test]
fn rest_element_must_be_last() {
    let result = parse("[...a, b] = c;");
    assert_eq!(codes(&result), vec![ErrorCode::E1008]);
}

#[test]
fn methods_are_not_destructuring_targets() {
    let result = parse("({ m() {} } = x);");
    assert_eq!(codes(&result), vec![ErrorCode::E1008]);
}

#[test]
fn invalid_arrow_parameters() {
    assert_eq!(parse("(a + b) => 1;").errors[0].code, ErrorCode::E1006);
    assert_eq!(parse("(a.b) => 1;").errors[0].code, ErrorCode::E1006);
}

#[test]
fn parenthesized_reference_is_an_assignment_target() {
    assert!(!parse("(a) = 1;").has_errors());
    assert!(!parse("(a.b) = 1;").has_errors());
    assert_eq!(codes(&parse("(a + b) = 1;")), vec![ErrorCode::E1007]);
}

#[test]
fn for_of_head_is_reclassified() {
    let result = parse("for ([a, b] of pairs) {}");
    assert!(!result.has_errors());
    let StmtKind::ForOf { left, .. } = &result.file.items[0].kind else {
        panic!("expected for-of");
    };
    assert!(matches!(
        left,
        ForHead::Pattern(Pattern {
            kind: PatternKind::Array { .. },
            ..
        })
    ));
}

#[test]
fn for_in_head_accepts_member_targets() {
    let result = parse("for (a.b in obj) {}");
    assert!(!result.has_errors());
}

#[test]
fn yield_binding_depends_on_generator_context() {
    assert!(!parse("let yield = 1;").has_errors());
    let result = parse("function* g() { let yield = 1; }");
    assert_eq!(result.errors[0].code, ErrorCode::E1004);
}

#[test]
fn catch_parameter_pattern() {
    let result = parse("try {} catch ({ message }) {}");
    assert!(!result.has_errors());
}

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::{ArrayElement, ExprKind, StmtKind};
use tsg_ir::StringInterner;

use crate::{parse_str, ParseOptions, ParseResult};

fn parse(source: &str) -> ParseResult {
    parse_str(source, &StringInterner::new(), ParseOptions::default())
}

fn codes(result: &ParseResult) -> Vec<ErrorCode> {
    result.errors.iter().map(|error| error.code).collect()
}

#[test]
fn empty_source() {
    let result = parse("");
    assert!(result.file.items.is_empty());
    assert!(!result.has_errors());
}

#[test]
fn statements_split_on_line_breaks() {
    let result = parse("a\nb\nc");
    assert!(!result.has_errors());
    assert_eq!(result.file.items.len(), 3);
}

#[test]
fn missing_semicolon_on_one_line() {
    let result = parse("a b");
    assert_eq!(codes(&result), vec![ErrorCode::E1009]);
    assert_eq!(result.file.items.len(), 2);
}

#[test]
fn failed_statement_becomes_error_node() {
    let result = parse("let x = ;\nlet y = 1;");
    assert_eq!(result.file.items.len(), 2);
    assert!(result.file.items[0].is_error());
    assert!(matches!(result.file.items[1].kind, StmtKind::Var(_)));
    assert_eq!(codes(&result), vec![ErrorCode::E1002]);
}

#[test]
fn stray_closer_is_skipped() {
    let result = parse("} a;");
    assert!(result.has_errors());
    assert!(result
        .file
        .items
        .iter()
        .any(|stmt| matches!(stmt.kind, StmtKind::Expr(_))));
}

#[test]
fn element_error_keeps_the_list() {
    let result = parse("f(a, +, c);");
    assert_eq!(result.errors.len(), 1);
    let StmtKind::Expr(expr) = &result.file.items[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Call { args, .. } = &expr.kind else {
        panic!("expected call");
    };
    assert_eq!(args.len(), 3);
    assert!(args[1].expr.is_error());
}

#[test]
fn array_holes() {
    let result = parse("[1, , 3];");
    assert!(!result.has_errors());
    let StmtKind::Expr(expr) = &result.file.items[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Array(elements) = &expr.kind else {
        panic!("expected array literal");
    };
    assert!(matches!(
        elements.as_slice(),
        [ArrayElement::Item(_), ArrayElement::Hole(_), ArrayElement::Item(_)]
    ));
}

#[test]
fn unclosed_delimiter_points_at_opener() {
    let result = parse("f(a, b");
    let error = &result.errors[0];
    assert_eq!(error.code, ErrorCode::E1003);
    assert_eq!(error.span.start, 1);
    assert_eq!(error.context.as_deref(), Some("opened here"));
}

#[test]
fn trailing_comma_is_configurable() {
    let interner = StringInterner::new();
    let allowed = parse_str("f(a, b,);", &interner, ParseOptions::default());
    assert!(!allowed.has_errors());

    let denied = parse_str(
        "f(a, b,);",
        &interner,
        ParseOptions::default().with_trailing_commas(false),
    );
    assert_eq!(codes(&denied), vec![ErrorCode::E1013]);
}

#[test]
fn trailing_comma_always_allowed_in_literals() {
    let interner = StringInterner::new();
    let result = parse_str(
        "x = [1, 2,]; y = { a: 1, };",
        &interner,
        ParseOptions::default().with_trailing_commas(false),
    );
    assert!(!result.has_errors());
}

#[test]
fn keyword_property_names() {
    let result = parse("x = { default: 1, if: 2, 'str': 3, 4: 5 };");
    assert!(!result.has_errors());
}

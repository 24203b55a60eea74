//! Property-based tests for the printer.
//!
//! Generated expressions and statements must survive a print/reparse cycle
//! with the same tree shape, and printing must be idempotent. Arbitrary
//! input, including input that does not parse, must print without panicking.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use tsg_fmt::print_source_file;
use tsg_ir::syntax::SyntaxNode;
use tsg_ir::{StringInterner, TokenKind};
use tsg_parse::{parse_str, ParseOptions};

// -- Code Generation Strategies --

/// Identifier that is not a keyword, contextual ones included.
fn arb_ident() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,6}")
        .expect("valid regex")
        .prop_filter("not a keyword", |s| TokenKind::from_keyword(s).is_none())
}

fn arb_literal() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..100, 0u32..100).prop_map(|(whole, frac)| format!("{whole}.{frac}")),
        prop::string::string_regex("[a-z ]{0,8}")
            .expect("valid regex")
            .prop_map(|s| format!("\"{s}\"")),
        Just("true".to_string()),
        Just("null".to_string()),
        Just("this".to_string()),
    ]
}

fn arb_binop() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("%"),
        Just("<"),
        Just(">"),
        Just("<="),
        Just(">="),
        Just("=="),
        Just("!=="),
        Just("&&"),
        Just("||"),
        Just("&"),
        Just("|"),
        Just("^"),
        Just("<<"),
        Just(">>"),
        Just(">>>"),
        Just("in"),
        Just("instanceof"),
    ]
}

fn arb_unop() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("-"),
        Just("+"),
        Just("!"),
        Just("~"),
        Just("typeof"),
        Just("void"),
    ]
}

/// Expression source text that parses cleanly on its own.
fn arb_expr() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        arb_ident(),
        arb_literal(),
        (arb_ident(), arb_ident()).prop_map(|(object, property)| format!("{object}.{property}")),
    ];
    leaf.prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), arb_binop(), inner.clone())
                .prop_map(|(left, op, right)| format!("{left} {op} {right}")),
            (arb_unop(), inner.clone()).prop_map(|(op, operand)| format!("{op} {operand}")),
            inner.clone().prop_map(|expr| format!("({expr})")),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(test, yes, no)| format!("{test} ? {yes} : {no}")),
            (arb_ident(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(callee, args)| format!("{callee}({})", args.join(", "))),
            prop::collection::vec(inner.clone(), 0..3)
                .prop_map(|items| format!("[{}]", items.join(", "))),
            (arb_ident(), inner.clone())
                .prop_map(|(param, body)| format!("(({param}) => {body})")),
            (arb_ident(), inner).prop_map(|(key, value)| format!("({{ {key}: {value} }})")),
        ]
    })
}

/// Statement source text that parses cleanly on its own.
fn arb_stmt() -> impl Strategy<Value = String> {
    prop_oneof![
        (arb_ident(), arb_expr()).prop_map(|(name, init)| format!("let {name} = {init};")),
        (arb_ident(), arb_expr()).prop_map(|(name, value)| format!("{name} = {value};")),
        (arb_expr(), arb_ident())
            .prop_map(|(test, callee)| format!("if ({test}) {callee}(); else {{}}")),
        (arb_expr(), arb_expr()).prop_map(|(test, body)| format!("while ({test}) {{ {body}; }}")),
        (arb_ident(), arb_expr()).prop_map(|(name, value)| {
            format!("function {name}(a: number, b?: string): void {{ return {value}; }}")
        }),
    ]
}

fn shape_and_print(source: &str) -> (String, String) {
    let interner = StringInterner::new();
    let result = parse_str(source, &interner, ParseOptions::default());
    assert!(
        !result.has_errors(),
        "unexpected errors for {source:?}: {:?}",
        result.errors
    );
    let shape = SyntaxNode::lower(&result.file, &interner).shape();
    (shape, print_source_file(&result.file, &interner))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn printed_expressions_reparse_to_the_same_tree(expr in arb_expr()) {
        let source = format!("x = {expr};");
        let (shape, printed) = shape_and_print(&source);
        let (reshape, reprinted) = shape_and_print(&printed);
        prop_assert_eq!(shape, reshape);
        prop_assert_eq!(printed, reprinted);
    }

    #[test]
    fn printed_statements_reparse_to_the_same_tree(
        stmts in prop::collection::vec(arb_stmt(), 1..6)
    ) {
        let source = stmts.join("\n");
        let (shape, printed) = shape_and_print(&source);
        let (reshape, reprinted) = shape_and_print(&printed);
        prop_assert_eq!(shape, reshape);
        prop_assert_eq!(printed, reprinted);
    }

    #[test]
    fn printing_never_panics(source in "\\PC{0,120}") {
        let interner = StringInterner::new();
        let result = parse_str(&source, &interner, ParseOptions::default());
        let _ = print_source_file(&result.file, &interner);
    }
}

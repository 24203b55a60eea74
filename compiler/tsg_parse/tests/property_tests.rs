//! Property-based tests for the parser.
//!
//! 1. Robustness: any input, valid or not, parses without panicking and
//!    yields a tree that lowers.
//! 2. Precedence: in `a op1 b op2 c` the looser operator ends up at the
//!    root, with ties going to the left-associative reading.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use tsg_ir::syntax::{NodeKind, SyntaxNode};
use tsg_ir::StringInterner;
use tsg_parse::{parse_str, ParseOptions};

/// Binary operators with their binding power, loosest first.
const OPERATORS: &[(&str, u8)] = &[
    ("||", 1),
    ("&&", 2),
    ("|", 3),
    ("^", 4),
    ("&", 5),
    ("==", 6),
    ("!=", 6),
    ("===", 6),
    ("!==", 6),
    ("<", 7),
    (">", 7),
    ("<=", 7),
    (">=", 7),
    ("instanceof", 7),
    ("in", 7),
    ("<<", 8),
    (">>", 8),
    (">>>", 8),
    ("+", 9),
    ("-", 9),
    ("*", 10),
    ("/", 10),
    ("%", 10),
];

fn arb_operator() -> impl Strategy<Value = (&'static str, u8)> {
    prop::sample::select(OPERATORS)
}

/// Fragments that exercise most productions when glued together.
const TOKENS: &[&str] = &[
    "a", "b", "1", "\"s\"", "`t${x}`", "/r/g", "(", ")", "{", "}", "[", "]", "<", ">", "=>",
    "=", ",", ";", ":", "?", ".", "...", "+", "-", "*", "!", "new", "function", "class",
    "interface", "type", "declare", "namespace", "module", "import", "export", "let", "var",
    "const", "if", "else", "for", "of", "in", "while", "return", "yield", "number", "string",
    "extends", "implements", "public", "static", "get", "set", "\n",
];

fn arb_token() -> impl Strategy<Value = &'static str> {
    prop::sample::select(TOKENS)
}

fn assert_survives(source: &str, options: ParseOptions) {
    let interner = StringInterner::new();
    let result = parse_str(source, &interner, options);
    let tree = SyntaxNode::lower(&result.file, &interner);
    assert_eq!(tree.kind, NodeKind::SourceFile);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn arbitrary_text_never_panics(source in "\\PC{0,200}") {
        assert_survives(&source, ParseOptions::default());
    }

    #[test]
    fn token_soup_never_panics(
        tokens in prop::collection::vec(arb_token(), 0..60),
        declaration in any::<bool>(),
    ) {
        let options = if declaration {
            ParseOptions::declaration()
        } else {
            ParseOptions::module()
        };
        assert_survives(&tokens.join(" "), options);
    }

    #[test]
    fn looser_operator_is_the_root(
        (first, first_power) in arb_operator(),
        (second, second_power) in arb_operator(),
    ) {
        let source = format!("a {first} b {second} c;");
        let interner = StringInterner::new();
        let result = parse_str(&source, &interner, ParseOptions::default());
        prop_assert!(!result.has_errors(), "{:?}", result.errors);

        let tree = SyntaxNode::lower(&result.file, &interner);
        let root = tree.child(0).and_then(|stmt| stmt.child(0)).unwrap();
        prop_assert_eq!(root.kind, NodeKind::BinaryExpression);
        let expected = if second_power > first_power { first } else { second };
        prop_assert_eq!(root.text, Some(expected));
    }
}

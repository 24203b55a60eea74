#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use tsg_ir::{StringInterner, TokenKind};
use tsg_lexer::lex;

proptest! {
    #[test]
    fn never_panics_and_ends_in_eof(source in "\\PC{0,200}") {
        let interner = StringInterner::new();
        let output = lex(&source, &interner);
        let last = output.tokens.as_slice().last().copied().unwrap();
        prop_assert_eq!(last.kind, TokenKind::Eof);
    }

    #[test]
    fn spans_are_ordered_and_in_bounds(source in "[a-z0-9 +*/=<>(){}`$'\"\\n.;]{0,120}") {
        let interner = StringInterner::new();
        let output = lex(&source, &interner);
        let mut last_end = 0;
        for token in output.tokens.as_slice() {
            prop_assert!(token.span.start >= last_end);
            prop_assert!(token.span.end as usize <= source.len());
            last_end = token.span.end;
        }
    }

    #[test]
    fn identifiers_round_trip(words in prop::collection::vec("[a-z_$][a-z0-9_$]{0,8}", 1..10)) {
        let source = words.join(" ");
        let interner = StringInterner::new();
        let output = lex(&source, &interner);
        let texts: Vec<&str> = output
            .tokens
            .as_slice()
            .iter()
            .filter(|t| t.kind != TokenKind::Eof)
            .map(|t| interner.lookup(t.value))
            .collect();
        prop_assert_eq!(texts, words.iter().map(String::as_str).collect::<Vec<_>>());
    }
}

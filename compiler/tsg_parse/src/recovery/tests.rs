#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use tsg_ir::StringInterner;

use super::*;

fn with_cursor(source: &str, f: impl FnOnce(&mut Cursor<'_>)) {
    let interner = StringInterner::new();
    let output = tsg_lexer::lex(source, &interner);
    let mut cursor = Cursor::new(&output.tokens, &interner);
    f(&mut cursor);
}

#[test]
fn token_set_membership() {
    let set = TokenSet::new().with(TokenKind::Comma).with(TokenKind::Eof);
    assert!(set.contains(TokenKind::Comma));
    assert!(set.contains(TokenKind::Eof));
    assert!(!set.contains(TokenKind::Semicolon));
    assert_eq!(set.count(), 2);
    assert!(TokenSet::new().is_empty());
    assert_eq!(TokenSet::single(TokenKind::Ident).count(), 1);
    assert_eq!(set.union(TokenSet::single(TokenKind::Ident)).count(), 3);
}

#[test]
fn type_lists_also_stop_at_greater() {
    assert!(TYPE_LIST_FOLLOW.contains(TokenKind::Gt));
    assert!(!LIST_FOLLOW.contains(TokenKind::Gt));
}

#[test]
fn synchronize_skips_nested_groups() {
    with_cursor("a b(c, d) [e, f], g", |cursor| {
        assert!(synchronize(cursor, LIST_FOLLOW));
        assert_eq!(cursor.current_kind(), TokenKind::Comma);
        assert_eq!(cursor.current_span().start, 16);
    });
}

#[test]
fn synchronize_stops_at_unmatched_closer() {
    with_cursor("a b ) c", |cursor| {
        assert!(!synchronize(cursor, TokenSet::single(TokenKind::Comma)));
        assert_eq!(cursor.current_kind(), TokenKind::RParen);
    });
}

#[test]
fn statement_sync_consumes_semicolon() {
    with_cursor("a b c; d", |cursor| {
        synchronize_statement(cursor);
        assert_eq!(cursor.current_text(), "d");
    });
}

#[test]
fn statement_sync_stops_before_block_close() {
    with_cursor("a { b; } c }", |cursor| {
        synchronize_statement(cursor);
        assert_eq!(cursor.current_kind(), TokenKind::RBrace);
        assert_eq!(cursor.current_span().start, 11);
    });
}

#[test]
fn statement_sync_stops_at_keyword_on_new_line() {
    with_cursor("a b\nreturn c", |cursor| {
        synchronize_statement(cursor);
        assert_eq!(cursor.current_kind(), TokenKind::Return);
    });
    with_cursor("a return c", |cursor| {
        synchronize_statement(cursor);
        assert!(cursor.is_at_end());
    });
}

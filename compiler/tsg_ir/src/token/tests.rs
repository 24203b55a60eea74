use super::*;

#[test]
fn keyword_lookup_round_trips() {
    for word in ["function", "instanceof", "namespace", "yield", "of"] {
        let kind = TokenKind::from_keyword(word);
        assert_eq!(kind.and_then(TokenKind::keyword_text), Some(word));
    }
    assert_eq!(TokenKind::from_keyword("foo"), None);
}

#[test]
fn contextual_keywords_are_identifier_like() {
    assert!(TokenKind::Of.is_identifier_like());
    assert!(TokenKind::Namespace.is_identifier_like());
    assert!(TokenKind::Ident.is_identifier_like());
    assert!(!TokenKind::Function.is_identifier_like());
    assert!(TokenKind::Function.is_word());
    assert!(!TokenKind::LBrace.is_word());
}

#[test]
fn flags_set_and_query() {
    let mut flags = TokenFlags::EMPTY;
    assert!(!flags.has_newline_before());
    flags.set(TokenFlags::NEWLINE_BEFORE);
    flags.set(TokenFlags::ADJACENT);
    assert!(flags.has_newline_before());
    assert!(flags.is_adjacent());
    assert!(!flags.has_trivia_before());
}

#[test]
fn token_list_keeps_flags_parallel() {
    let mut list = TokenList::new();
    list.push(Token::new(TokenKind::Return, Span::new(0, 6)), TokenFlags::EMPTY);
    list.push(
        Token::new(TokenKind::Number, Span::new(7, 8)),
        TokenFlags::from_bits(TokenFlags::NEWLINE_BEFORE),
    );
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].kind, TokenKind::Number);
    assert!(list.flags(1).has_newline_before());
    assert_eq!(list.flags(9), TokenFlags::EMPTY);
}

#[test]
fn display_names() {
    assert_eq!(TokenKind::Arrow.to_string(), "=>");
    assert_eq!(TokenKind::Instanceof.to_string(), "instanceof");
    assert_eq!(TokenKind::Eof.to_string(), "end of file");
}

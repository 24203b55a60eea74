#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use tsg_ir::{CommentKind, Span, StringInterner, TokenFlags, TokenKind};

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    let interner = StringInterner::new();
    lex(source, &interner)
        .tokens
        .iter()
        .map(|(token, _)| token.kind)
        .collect()
}

fn texts(source: &str) -> Vec<String> {
    let interner = StringInterner::new();
    let output = lex(source, &interner);
    output
        .tokens
        .as_slice()
        .iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| t.span.text(source).to_owned())
        .collect()
}

#[test]
fn keywords_identifiers_and_eof() {
    use TokenKind::*;
    assert_eq!(
        kinds("let x = typeof y;"),
        vec![Let, Ident, Eq, Typeof, Ident, Semicolon, Eof]
    );
    assert_eq!(kinds(""), vec![Eof]);
}

#[test]
fn word_tokens_keep_their_text() {
    let interner = StringInterner::new();
    let output = lex("a.default $b _c", &interner);
    let values: Vec<&str> = output
        .tokens
        .as_slice()
        .iter()
        .filter(|t| t.kind != TokenKind::Dot && t.kind != TokenKind::Eof)
        .map(|t| interner.lookup(t.value))
        .collect();
    assert_eq!(values, vec!["a", "default", "$b", "_c"]);
}

#[test]
fn greater_than_is_never_merged() {
    use TokenKind::*;
    assert_eq!(
        kinds("a >>= b >= c >>> d"),
        vec![Ident, Gt, Gt, Eq, Ident, Gt, Eq, Ident, Gt, Gt, Gt, Ident, Eof]
    );
    assert_eq!(
        kinds("A<B<C>>"),
        vec![Ident, Lt, Ident, Lt, Ident, Gt, Gt, Eof]
    );
}

#[test]
fn adjacency_flags() {
    let interner = StringInterner::new();
    let output = lex("a >> b > > c", &interner);
    let flags: Vec<bool> = output
        .tokens
        .iter()
        .map(|(_, flags)| flags.is_adjacent())
        .collect();
    // a  >  >  b  >  >  c  eof
    assert_eq!(flags, vec![false, false, true, false, false, false, false, true]);
}

#[test]
fn multi_char_punctuators() {
    use TokenKind::*;
    assert_eq!(
        kinds("=> ... === !== <<= ++ -- && || ^= |= &= %="),
        vec![
            Arrow, DotDotDot, EqEqEq, NotEqEq, ShlEq, PlusPlus, MinusMinus, AmpAmp, PipePipe,
            CaretEq, PipeEq, AmpEq, PercentEq, Eof
        ]
    );
}

#[test]
fn numeric_literals() {
    assert_eq!(
        texts("0 42 3.14 .5 1e10 2E-3 0xFF 0o17 0b101"),
        vec!["0", "42", "3.14", ".5", "1e10", "2E-3", "0xFF", "0o17", "0b101"]
    );
    assert!(kinds("1 2").iter().take(2).all(|k| *k == TokenKind::Number));
}

#[test]
fn number_glued_to_identifier_is_an_error() {
    let interner = StringInterner::new();
    let output = lex("3in", &interner);
    assert_eq!(output.tokens[0].kind, TokenKind::Error);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::InvalidNumber);
    assert_eq!(output.errors[0].span, Span::new(0, 3));
}

#[test]
fn string_literals() {
    let interner = StringInterner::new();
    let output = lex(r#""a\"b" 'c\'d'"#, &interner);
    assert_eq!(output.tokens[0].kind, TokenKind::String);
    assert_eq!(interner.lookup(output.tokens[0].value), r#""a\"b""#);
    assert_eq!(interner.lookup(output.tokens[1].value), r"'c\'d'");
    assert!(!output.has_errors());
}

#[test]
fn unterminated_string() {
    let interner = StringInterner::new();
    let output = lex("\"abc\nx", &interner);
    assert_eq!(output.tokens[0].kind, TokenKind::Error);
    assert!(output.tokens.flags(0).has_error());
    assert_eq!(output.errors[0].kind, LexErrorKind::UnterminatedString);
    assert_eq!(output.tokens[1].kind, TokenKind::Ident);
}

#[test]
fn newline_flags() {
    let interner = StringInterner::new();
    let output = lex("a\nb c /* x\n */ d /* y */ e", &interner);
    let newline: Vec<bool> = output
        .tokens
        .iter()
        .map(|(_, f)| f.has_newline_before())
        .collect();
    assert_eq!(newline, vec![false, true, false, true, false, false]);
    assert!(output.tokens.flags(0).contains(TokenFlags::LINE_START));
    assert!(output.tokens.flags(4).has_trivia_before());
}

#[test]
fn comments_are_collected() {
    let interner = StringInterner::new();
    let output = lex("// one\nx /* two */", &interner);
    assert_eq!(output.comments.len(), 2);
    assert_eq!(output.comments[0].kind, CommentKind::Line);
    assert_eq!(output.comments[0].span, Span::new(0, 6));
    assert_eq!(output.comments[1].kind, CommentKind::Block);
    assert!(!output.comments[1].spans_lines);
    assert_eq!(kinds("// one\nx /* two */"), vec![TokenKind::Ident, TokenKind::Eof]);
}

#[test]
fn unterminated_block_comment() {
    let interner = StringInterner::new();
    let output = lex("x /* never closed", &interner);
    assert_eq!(output.errors[0].kind, LexErrorKind::UnterminatedComment);
    assert_eq!(output.comments[0].span, Span::new(2, 17));
}

#[test]
fn regex_or_division_by_previous_token() {
    use TokenKind::*;
    assert_eq!(kinds("a / b / c"), vec![Ident, Slash, Ident, Slash, Ident, Eof]);
    assert_eq!(kinds("x = /ab+c/gi;"), vec![Ident, Eq, Regex, Semicolon, Eof]);
    assert_eq!(kinds("f(/=/)"), vec![Ident, LParen, Regex, RParen, Eof]);
    assert_eq!(kinds("(a) / 2"), vec![LParen, Ident, RParen, Slash, Number, Eof]);
    assert_eq!(texts("return /[/]x/.test(s)")[1], "/[/]x/");
}

#[test]
fn unterminated_regex() {
    let interner = StringInterner::new();
    let output = lex("x = /abc\ny", &interner);
    assert_eq!(output.errors[0].kind, LexErrorKind::UnterminatedRegex);
    assert_eq!(output.errors[0].span, Span::new(4, 8));
    assert_eq!(output.tokens[3].kind, TokenKind::Ident);
}

#[test]
fn template_pieces() {
    use TokenKind::*;
    assert_eq!(kinds("`plain`"), vec![NoSubstitutionTemplate, Eof]);
    assert_eq!(
        kinds("`a${b}c${d}e`"),
        vec![TemplateHead, Ident, TemplateMiddle, Ident, TemplateTail, Eof]
    );
    assert_eq!(
        texts("`a${b}c${d}e`"),
        vec!["`a${", "b", "}c${", "d", "}e`"]
    );
}

#[test]
fn braces_inside_substitutions() {
    use TokenKind::*;
    assert_eq!(
        kinds("`${ {a: 1}.a }` }"),
        vec![
            TemplateHead, LBrace, Ident, Colon, Number, RBrace, Dot, Ident, TemplateTail, RBrace,
            Eof
        ]
    );
    assert_eq!(
        kinds("`x${`y${z}`}`"),
        vec![TemplateHead, TemplateHead, Ident, TemplateTail, TemplateTail, Eof]
    );
}

#[test]
fn unterminated_template() {
    let interner = StringInterner::new();
    let output = lex("`abc", &interner);
    assert_eq!(output.tokens[0].kind, TokenKind::Error);
    assert_eq!(output.errors[0].kind, LexErrorKind::UnterminatedTemplate);
}

#[test]
fn invalid_character() {
    let interner = StringInterner::new();
    let output = lex("a # b", &interner);
    assert_eq!(output.tokens[1].kind, TokenKind::Error);
    assert_eq!(output.errors[0].kind, LexErrorKind::InvalidCharacter('#'));
    assert_eq!(output.errors[0].to_diagnostic().code.as_str(), "E0002");
    assert_eq!(output.tokens[2].kind, TokenKind::Ident);
}

#[test]
fn eof_span_is_end_of_input() {
    let interner = StringInterner::new();
    let output = lex("ab  ", &interner);
    let eof = output.tokens[output.tokens.len() - 1];
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.span, Span::point(4));
}

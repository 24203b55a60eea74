//! First-pass tokens recognized by logos.
//!
//! Whitespace, line breaks and comments are real variants here rather than
//! skipped, because the cooking pass turns them into per-token flags.
//! Regular expressions and template literals need context logos cannot
//! see, so only their first character is matched here and the cooker scans
//! the rest by hand.

use logos::{Lexer, Logos};
use tsg_ir::TokenKind;

/// Outcome of scanning a `/* ... */` comment body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct BlockComment {
    pub terminated: bool,
    pub spans_lines: bool,
}

pub(crate) fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn block_comment(lex: &mut Lexer<'_, RawToken>) -> BlockComment {
    let rest = lex.remainder();
    let (body_len, consumed, terminated) = match rest.find("*/") {
        Some(end) => (end, end + 2, true),
        None => (rest.len(), rest.len(), false),
    };
    let spans_lines = rest[..body_len].contains(is_line_terminator);
    lex.bump(consumed);
    BlockComment {
        terminated,
        spans_lines,
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\x0B\x0C\u{A0}\u{FEFF}]+")]
    Whitespace,

    #[regex(r"\r\n|\n|\r|\u{2028}|\u{2029}")]
    Newline,

    #[regex(r"//[^\n\r\u{2028}\u{2029}]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment(BlockComment),

    /// Identifier or keyword; the cooker looks the text up.
    #[regex(r"[a-zA-Z_$\p{L}][a-zA-Z0-9_$\p{L}\p{Nd}]*")]
    Word,

    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    #[regex(r"0[oO][0-7]+")]
    #[regex(r"0[bB][01]+")]
    Number,

    #[regex(r#""([^"\\\n\r]|\\[^\r\n]|\\\r?\n)*""#)]
    #[regex(r#"'([^'\\\n\r]|\\[^\r\n]|\\\r?\n)*'"#)]
    String,

    /// String that reaches a line break or the end of input first.
    #[regex(r#""([^"\\\n\r]|\\[^\r\n]|\\\r?\n)*"#)]
    #[regex(r#"'([^'\\\n\r]|\\[^\r\n]|\\\r?\n)*"#)]
    UnterminatedString,

    #[token("`")]
    Backtick,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(".")]
    Dot,
    #[token("...")]
    DotDotDot,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("===")]
    EqEqEq,
    #[token("!==")]
    NotEqEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("<<")]
    Shl,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("=")]
    Eq,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("<<=")]
    ShlEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,
    #[token("=>")]
    Arrow,
}

impl RawToken {
    /// Token kind of a punctuator; `None` for every variant the cooker
    /// handles itself.
    pub(crate) fn punctuator(self) -> Option<TokenKind> {
        let kind = match self {
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Dot => TokenKind::Dot,
            RawToken::DotDotDot => TokenKind::DotDotDot,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::EqEqEq => TokenKind::EqEqEq,
            RawToken::NotEqEq => TokenKind::NotEqEq,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::PlusPlus => TokenKind::PlusPlus,
            RawToken::MinusMinus => TokenKind::MinusMinus,
            RawToken::Shl => TokenKind::Shl,
            RawToken::Amp => TokenKind::Amp,
            RawToken::Pipe => TokenKind::Pipe,
            RawToken::Caret => TokenKind::Caret,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Tilde => TokenKind::Tilde,
            RawToken::AmpAmp => TokenKind::AmpAmp,
            RawToken::PipePipe => TokenKind::PipePipe,
            RawToken::Question => TokenKind::Question,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Eq => TokenKind::Eq,
            RawToken::PlusEq => TokenKind::PlusEq,
            RawToken::MinusEq => TokenKind::MinusEq,
            RawToken::StarEq => TokenKind::StarEq,
            RawToken::SlashEq => TokenKind::SlashEq,
            RawToken::PercentEq => TokenKind::PercentEq,
            RawToken::ShlEq => TokenKind::ShlEq,
            RawToken::AmpEq => TokenKind::AmpEq,
            RawToken::PipeEq => TokenKind::PipeEq,
            RawToken::CaretEq => TokenKind::CaretEq,
            RawToken::Arrow => TokenKind::Arrow,
            RawToken::Whitespace
            | RawToken::Newline
            | RawToken::LineComment
            | RawToken::BlockComment(_)
            | RawToken::Word
            | RawToken::Number
            | RawToken::String
            | RawToken::UnterminatedString
            | RawToken::Backtick => return None,
        };
        Some(kind)
    }
}

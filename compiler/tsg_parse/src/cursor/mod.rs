//! Token cursor for navigating the token stream.
//!
//! Provides token access, bounded lookahead, and consumption. The token
//! list always ends in `Eof`, so every lookahead past the end reads `Eof`.

use tracing::trace;
use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::Ident;
use tsg_ir::{Name, Span, StringInterner, Token, TokenFlags, TokenKind, TokenList};

use crate::error::quoted;
use crate::ParseError;

/// Operators the lexer leaves as separate `>` and `=` tokens.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GreaterOp {
    Gt,
    GtEq,
    Shr,
    ShrEq,
    UShr,
    UShrEq,
}

impl GreaterOp {
    /// Number of tokens the operator is composed from.
    pub const fn token_len(self) -> usize {
        match self {
            GreaterOp::Gt => 1,
            GreaterOp::GtEq | GreaterOp::Shr => 2,
            GreaterOp::ShrEq | GreaterOp::UShr => 3,
            GreaterOp::UShrEq => 4,
        }
    }
}

pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        debug_assert!(
            tokens.as_slice().last().map(|t| t.kind) == Some(TokenKind::Eof),
            "token list must end in Eof"
        );
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    #[inline]
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Roll back to an earlier position. Used by snapshot restore.
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos < self.tokens.len(),
            "cursor position {pos} out of bounds"
        );
        self.pos = pos;
    }

    #[inline]
    fn token_at(&self, index: usize) -> Token {
        let last = self.tokens.len().saturating_sub(1);
        self.tokens
            .get(index.min(last))
            .copied()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, Span::DUMMY))
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.token_at(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub fn current_flags(&self) -> TokenFlags {
        self.tokens.flags(self.pos)
    }

    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.token_at(self.pos - 1).span
        } else {
            Span::DUMMY
        }
    }

    /// Kind of the token `n` positions ahead; `peek_kind(0)` is the current one.
    #[inline]
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.token_at(self.pos + n).kind
    }

    /// Interned text of the token `n` positions ahead.
    #[inline]
    pub fn peek_value(&self, n: usize) -> Name {
        self.token_at(self.pos + n).value
    }

    #[inline]
    pub fn peek_flags(&self, n: usize) -> TokenFlags {
        self.tokens.flags(self.pos + n)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Identifier or contextual keyword.
    #[inline]
    pub fn check_ident(&self) -> bool {
        self.current_kind().is_identifier_like()
    }

    /// A line break separates the current token from the previous one.
    #[inline]
    pub fn has_newline_before(&self) -> bool {
        self.current_flags().has_newline_before()
    }

    /// Source text of a word or literal token.
    #[inline]
    pub fn text(&self, token: Token) -> &'static str {
        self.interner.lookup(token.value)
    }

    #[inline]
    pub fn current_text(&self) -> &'static str {
        self.text(self.current())
    }

    pub fn advance(&mut self) -> Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume `n` tokens and return their combined span.
    pub fn advance_by(&mut self, n: usize) -> Span {
        let start = self.current_span();
        let mut end = start;
        for _ in 0..n {
            end = self.advance().span;
        }
        start.merge(end)
    }

    /// Consume the current token if it is `kind`.
    #[inline]
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Split into an inline happy path and a cold error path so the
    /// message formatting stays out of the hot loop.
    #[inline]
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: TokenKind) -> ParseError {
        ParseError::unexpected(&quoted(kind), self.current_kind(), self.current_span())
    }

    /// Consume an identifier or contextual keyword.
    #[inline]
    pub fn expect_ident(&mut self) -> Result<Ident, ParseError> {
        if self.check_ident() {
            let token = self.advance();
            Ok(Ident::new(token.value, token.span))
        } else {
            Err(self.make_expect_ident_error())
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_ident_error(&self) -> ParseError {
        ParseError::new(
            ErrorCode::E1004,
            format!("expected identifier, found {}", quoted(self.current_kind())),
            self.current_span(),
        )
    }

    /// Kind of the token `n` ahead when nothing separates it from the token
    /// before it.
    fn adjacent_kind(&self, n: usize) -> Option<TokenKind> {
        self.peek_flags(n)
            .is_adjacent()
            .then_some(self.peek_kind(n))
    }

    /// Compose `>`, `>=`, `>>`, `>>=`, `>>>` or `>>>=` from the adjacent
    /// tokens starting at the current `>`.
    pub fn greater_op(&self) -> Option<GreaterOp> {
        if !self.check(TokenKind::Gt) {
            return None;
        }
        let op = match (self.adjacent_kind(1), self.adjacent_kind(2), self.adjacent_kind(3)) {
            (Some(TokenKind::Gt), Some(TokenKind::Gt), Some(TokenKind::Eq)) => GreaterOp::UShrEq,
            (Some(TokenKind::Gt), Some(TokenKind::Gt), _) => GreaterOp::UShr,
            (Some(TokenKind::Gt), Some(TokenKind::Eq), _) => GreaterOp::ShrEq,
            (Some(TokenKind::Gt), _, _) => GreaterOp::Shr,
            (Some(TokenKind::Eq), _, _) => GreaterOp::GtEq,
            _ => GreaterOp::Gt,
        };
        Some(op)
    }

    /// Index of the token after the bracket matching the current opener,
    /// relative to the current position. Used for bounded lookahead only.
    pub fn matching_close_offset(&self, open: TokenKind, close: TokenKind) -> Option<usize> {
        let mut depth = 0usize;
        let mut n = 0;
        loop {
            let kind = self.peek_kind(n);
            if kind == TokenKind::Eof {
                return None;
            }
            if kind == open {
                depth += 1;
            } else if kind == close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(n + 1);
                }
            }
            n += 1;
        }
    }
}

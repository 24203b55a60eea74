//! Token model the grammar is defined over.

mod flags;
mod kind;
mod list;

pub use flags::TokenFlags;
pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::{Name, Span};

/// A token with its span in the source.
///
/// `value` holds the raw source text for literals (quotes, slashes and flags
/// included) and for every word token, keywords included, so that a keyword
/// used as a property name keeps its spelling. Punctuators carry
/// `Name::EMPTY`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Name,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            value: Name::EMPTY,
            span,
        }
    }

    #[inline]
    pub fn with_value(kind: TokenKind, value: Name, span: Span) -> Self {
        Token { kind, value, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.has_value() {
            write!(f, "{:?}({:?}) @ {}", self.kind, self.value, self.span)
        } else {
            write!(f, "{:?} @ {}", self.kind, self.span)
        }
    }
}

#[cfg(test)]
mod tests;

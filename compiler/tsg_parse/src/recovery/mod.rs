//! Error recovery for the parser.
//!
//! Token sets with O(1) membership and synchronization routines that skip
//! to the next list separator or statement boundary after an error.
//! Bracketed groups are skipped whole, so a `,` inside a nested call does
//! not end an element of the enclosing list.

use tsg_ir::TokenKind;

use crate::cursor::Cursor;

/// A set of token kinds, one bit per kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u128 << kind as u8)
    }

    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind as u8))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind as u8)) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

/// Keywords that can only begin a statement or declaration. A line break
/// before one of these ends a statement being skipped.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Var)
    .with(TokenKind::Const)
    .with(TokenKind::Function)
    .with(TokenKind::Class)
    .with(TokenKind::If)
    .with(TokenKind::For)
    .with(TokenKind::While)
    .with(TokenKind::Do)
    .with(TokenKind::Switch)
    .with(TokenKind::Try)
    .with(TokenKind::Return)
    .with(TokenKind::Throw)
    .with(TokenKind::Break)
    .with(TokenKind::Continue)
    .with(TokenKind::Debugger)
    .with(TokenKind::With)
    .with(TokenKind::Import)
    .with(TokenKind::Export)
    .with(TokenKind::Enum)
    .with(TokenKind::Interface)
    .with(TokenKind::Declare)
    .with(TokenKind::Namespace);

/// Separators and closers of comma lists.
pub const LIST_FOLLOW: TokenSet = TokenSet::new()
    .with(TokenKind::Comma)
    .with(TokenKind::RParen)
    .with(TokenKind::RBracket)
    .with(TokenKind::RBrace);

/// Separators and closers of type parameter and type argument lists.
pub const TYPE_LIST_FOLLOW: TokenSet = LIST_FOLLOW.with(TokenKind::Gt);

/// Member separators of object types, interfaces and class bodies.
pub const MEMBER_FOLLOW: TokenSet = TokenSet::new()
    .with(TokenKind::Semicolon)
    .with(TokenKind::Comma)
    .with(TokenKind::RBrace);

/// Slot separators of a `for` head.
pub const FOR_SLOT_FOLLOW: TokenSet = TokenSet::new()
    .with(TokenKind::Semicolon)
    .with(TokenKind::RParen);

const OPENERS: TokenSet = TokenSet::new()
    .with(TokenKind::LParen)
    .with(TokenKind::LBracket)
    .with(TokenKind::LBrace);

const CLOSERS: TokenSet = TokenSet::new()
    .with(TokenKind::RParen)
    .with(TokenKind::RBracket)
    .with(TokenKind::RBrace);

/// Skip a bracketed group starting at the current opener. Stops early at
/// end of input.
fn skip_group(cursor: &mut Cursor<'_>) {
    let mut depth = 0usize;
    while !cursor.is_at_end() {
        let kind = cursor.advance().kind;
        if OPENERS.contains(kind) {
            depth += 1;
        } else if CLOSERS.contains(kind) {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return;
            }
        }
    }
}

/// Advance until a token in `recovery` or an unmatched closer. Nothing is
/// consumed at the stopping token.
///
/// Returns `true` if a token of `recovery` was found.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    while !cursor.is_at_end() {
        let kind = cursor.current_kind();
        if recovery.contains(kind) {
            return true;
        }
        if CLOSERS.contains(kind) {
            return false;
        }
        if OPENERS.contains(kind) {
            skip_group(cursor);
        } else {
            cursor.advance();
        }
    }
    false
}

/// Skip the rest of a statement: through the next `;`, or up to a `}` that
/// closes the enclosing block, or up to a statement keyword on a new line.
pub fn synchronize_statement(cursor: &mut Cursor<'_>) {
    let start = cursor.position();
    while !cursor.is_at_end() {
        let kind = cursor.current_kind();
        if kind == TokenKind::Semicolon {
            cursor.advance();
            return;
        }
        if kind == TokenKind::RBrace {
            return;
        }
        if cursor.position() != start
            && cursor.has_newline_before()
            && STMT_START.contains(kind)
        {
            return;
        }
        if OPENERS.contains(kind) {
            skip_group(cursor);
        } else {
            cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests;

//! Per-token metadata flags.

/// Whitespace and trivia context preceding a token, packed into one byte.
///
/// `NEWLINE_BEFORE` is what the parser consults for automatic statement
/// termination; `ADJACENT` lets it compose `>>`/`>=` from single `>` tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TokenFlags(u8);

impl TokenFlags {
    /// Whitespace preceded this token (spaces or tabs).
    pub const SPACE_BEFORE: u8 = 1 << 0;
    /// A line terminator preceded this token, including one inside a
    /// block comment.
    pub const NEWLINE_BEFORE: u8 = 1 << 1;
    /// A comment preceded this token.
    pub const TRIVIA_BEFORE: u8 = 1 << 2;
    /// Token is the first non-trivia token on its line.
    pub const LINE_START: u8 = 1 << 3;
    /// The lexer reported an error for this token.
    pub const HAS_ERROR: u8 = 1 << 4;
    /// Nothing at all separates this token from the previous one.
    pub const ADJACENT: u8 = 1 << 5;

    pub const EMPTY: Self = TokenFlags(0);

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        TokenFlags(bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    #[inline]
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    #[inline]
    pub const fn has_newline_before(self) -> bool {
        self.contains(Self::NEWLINE_BEFORE)
    }

    #[inline]
    pub const fn has_trivia_before(self) -> bool {
        self.contains(Self::TRIVIA_BEFORE)
    }

    #[inline]
    pub const fn has_error(self) -> bool {
        self.contains(Self::HAS_ERROR)
    }

    #[inline]
    pub const fn is_adjacent(self) -> bool {
        self.contains(Self::ADJACENT)
    }
}

const _: () = assert!(size_of::<TokenFlags>() == 1);

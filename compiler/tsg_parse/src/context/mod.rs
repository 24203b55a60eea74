//! Parse context flags for context-sensitive parsing.
//!
//! A handful of productions change meaning depending on where they appear:
//! `yield` is an operator only inside a generator body, `in` is not a
//! binary operator in the head of a `for` statement, and declarations in a
//! declaration source or a `declare` block are signature-only.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseContext(u8);

impl ParseContext {
    pub const NONE: Self = Self(0);

    /// Inside a generator body: `yield` is an operator.
    pub const IN_GENERATOR: Self = Self(1 << 0);

    /// `in` is not a relational operator (first slot of a `for` head).
    pub const NO_IN: Self = Self(1 << 1);

    /// Declarations are ambient: no executable bodies, no initializers.
    pub const IN_AMBIENT: Self = Self(1 << 2);

    /// Items of a parenthesized cover whose reading is not decided yet;
    /// cover-initialized names are not reported here.
    pub const IN_COVER: Self = Self(1 << 3);

    /// Inside a namespace or ambient module body: `export` marks a member
    /// rather than a module export.
    pub const IN_NAMESPACE: Self = Self(1 << 4);

    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }

    #[inline]
    pub const fn in_generator(self) -> bool {
        self.has(Self::IN_GENERATOR)
    }

    #[inline]
    pub const fn allows_in(self) -> bool {
        !self.has(Self::NO_IN)
    }

    #[inline]
    pub const fn in_ambient(self) -> bool {
        self.has(Self::IN_AMBIENT)
    }

    #[inline]
    pub const fn in_cover(self) -> bool {
        self.has(Self::IN_COVER)
    }

    #[inline]
    pub const fn in_namespace(self) -> bool {
        self.has(Self::IN_NAMESPACE)
    }
}

#[cfg(test)]
mod tests;

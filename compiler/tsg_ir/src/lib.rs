//! Shared data types for the typed-ECMAScript grammar engine.
//!
//! - [`Span`] byte ranges and interned [`Name`]s
//! - [`Token`]s, per-token [`TokenFlags`] and the [`TokenList`] the lexer
//!   produces
//! - the typed syntax tree in [`ast`]
//! - the uniform (kind, span, children) view of that tree in [`syntax`]
//!
//! Identifier and literal text is interned once by the lexer. Every later
//! stage compares `Name`s instead of strings.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod comment;
mod interner;
mod name;
mod span;
pub mod syntax;
mod token;

pub use comment::{Comment, CommentKind};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenFlags, TokenKind, TokenList};

//! Tokenizer for the typed-ECMAScript grammar engine.
//!
//! [`lex`] turns source text into a [`TokenList`] that always ends in
//! `Eof`, plus the comments and lexical errors found on the way. Lexing
//! never fails: a byte sequence that matches no terminal becomes an `Error`
//! token and a [`LexError`], and the parser reports it as an unexpected
//! token.
//!
//! Line breaks and comments are not tokens. They surface as flags on the
//! following token (`NEWLINE_BEFORE` drives automatic statement
//! termination) and, for comments, in [`LexOutput::comments`].

mod cooker;
mod lex_error;
mod raw_token;

pub use lex_error::{LexError, LexErrorKind};

use tsg_ir::{Comment, StringInterner, TokenList};

#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub comments: Vec<Comment>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    fn with_capacity(tokens: usize) -> Self {
        LexOutput {
            tokens: TokenList::with_capacity(tokens),
            comments: Vec::new(),
            errors: Vec::new(),
        }
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex `source`, interning identifier and literal text into `interner`.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let output = cooker::TokenCooker::new(source, interner).run();
    tracing::debug!(
        tokens = output.tokens.len(),
        comments = output.comments.len(),
        errors = output.errors.len(),
        "lexed"
    );
    output
}

#[cfg(test)]
mod tests;

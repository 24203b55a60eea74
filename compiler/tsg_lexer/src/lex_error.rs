//! Lexical errors.

use tsg_diagnostic::{Diagnostic, ErrorCode};
use tsg_ir::Span;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LexErrorKind {
    UnterminatedString,
    /// No terminal starts with this character.
    InvalidCharacter(char),
    /// A numeric literal runs straight into identifier characters (`3in`).
    InvalidNumber,
    UnterminatedComment,
    UnterminatedRegex,
    UnterminatedTemplate,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidCharacter(_) => ErrorCode::E0002,
            LexErrorKind::InvalidNumber => ErrorCode::E0003,
            LexErrorKind::UnterminatedComment => ErrorCode::E0004,
            LexErrorKind::UnterminatedRegex => ErrorCode::E0005,
            LexErrorKind::UnterminatedTemplate => ErrorCode::E0006,
        }
    }

    pub fn message(&self) -> String {
        match self.kind {
            LexErrorKind::InvalidCharacter(c) => {
                format!("invalid character `{}`", c.escape_debug())
            }
            LexErrorKind::InvalidNumber => {
                "identifier starts immediately after numeric literal".to_owned()
            }
            _ => self.code().description().to_owned(),
        }
    }

    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.kind {
            LexErrorKind::UnterminatedString => "string starts here",
            LexErrorKind::InvalidCharacter(_) => "not valid here",
            LexErrorKind::InvalidNumber => "separate the number from the name",
            LexErrorKind::UnterminatedComment => "comment starts here",
            LexErrorKind::UnterminatedRegex => "regular expression starts here",
            LexErrorKind::UnterminatedTemplate => "template starts here",
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.message())
            .with_label(self.span, label);
        match self.kind {
            LexErrorKind::UnterminatedString => {
                diag.with_note("a string literal cannot contain an unescaped line break")
            }
            LexErrorKind::UnterminatedRegex => {
                diag.with_note("a regular expression literal must end on the same line")
            }
            _ => diag,
        }
    }
}

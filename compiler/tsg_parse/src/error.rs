//! Parse errors.

use tsg_diagnostic::{Diagnostic, ErrorCode};
use tsg_ir::{Span, TokenKind};

/// Parse error with error code for rich diagnostics.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// What the parser was in the middle of, e.g. "in parameter list".
    pub context: Option<String>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
        }
    }

    #[cold]
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[cold]
    pub fn unexpected(expected: &str, found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {expected}, found {}", quoted(found)),
            span,
        )
    }

    #[cold]
    pub fn expected_expression(found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1002,
            format!("expected expression, found {}", quoted(found)),
            span,
        )
    }

    #[cold]
    pub fn expected_type(found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1005,
            format!("expected type, found {}", quoted(found)),
            span,
        )
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = self
            .context
            .clone()
            .unwrap_or_else(|| self.code.description().to_owned());
        Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, label)
    }
}

/// Token kind as it appears in messages: punctuators and keywords in
/// backticks, literal classes spelled out.
pub(crate) fn quoted(kind: TokenKind) -> String {
    if (kind.has_value() && !kind.is_word()) || matches!(kind, TokenKind::Eof | TokenKind::Error) {
        kind.display_name().to_owned()
    } else if kind == TokenKind::Ident {
        "identifier".to_owned()
    } else {
        format!("`{}`", kind.display_name())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn quoting() {
        assert_eq!(quoted(TokenKind::Semicolon), "`;`");
        assert_eq!(quoted(TokenKind::Return), "`return`");
        assert_eq!(quoted(TokenKind::Ident), "identifier");
        assert_eq!(quoted(TokenKind::String), "string literal");
        assert_eq!(quoted(TokenKind::Eof), "end of file");
    }

    #[test]
    fn diagnostic_uses_context_as_label() {
        let error = ParseError::unexpected("`)`", TokenKind::Semicolon, Span::new(4, 5))
            .with_context("in argument list");
        let diagnostic = error.to_diagnostic();
        assert_eq!(diagnostic.code, ErrorCode::E1001);
        assert_eq!(diagnostic.message, "expected `)`, found `;`");
        assert_eq!(diagnostic.primary_span(), Some(Span::new(4, 5)));
        assert_eq!(diagnostic.labels[0].message, "in argument list");
    }
}

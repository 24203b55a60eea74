//! Comments captured alongside the token stream.
//!
//! Comments never take part in grammar matching. They are kept so that
//! consumers can see them and so the lexer can decide whether a multi-line
//! block comment counts as a line break for statement termination.

use super::Span;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Comment {
    pub kind: CommentKind,
    /// Span covering the delimiters.
    pub span: Span,
    /// The comment contains a line terminator (always false for line comments).
    pub spans_lines: bool,
}

impl Comment {
    #[inline]
    pub fn line(span: Span) -> Self {
        Comment {
            kind: CommentKind::Line,
            span,
            spans_lines: false,
        }
    }

    #[inline]
    pub fn block(span: Span, spans_lines: bool) -> Self {
        Comment {
            kind: CommentKind::Block,
            span,
            spans_lines,
        }
    }
}

//! Binding and assignment patterns.
//!
//! Patterns are produced either directly (declarations, parameters) or by
//! reclassifying an already-parsed object/array literal once an `=` or `=>`
//! shows that the literal was a destructuring target.

use crate::{Name, Span};

use super::{Expr, Ident, PropertyName};

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Pattern {
    pub kind: PatternKind,
    pub span: Span,
}

impl Pattern {
    #[inline]
    pub fn new(kind: PatternKind, span: Span) -> Self {
        Pattern { kind, span }
    }

    #[inline]
    pub fn ident(ident: Ident) -> Self {
        Pattern {
            kind: PatternKind::Ident(ident.name),
            span: ident.span,
        }
    }

    /// The bound name when this is a plain identifier.
    pub fn as_ident(&self) -> Option<Ident> {
        match self.kind {
            PatternKind::Ident(name) => Some(Ident::new(name, self.span)),
            _ => None,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum PatternKind {
    Ident(Name),
    Object(Vec<ObjectPatternProp>),
    Array {
        /// `None` entries are elisions.
        elements: Vec<Option<Pattern>>,
        rest: Option<Box<Pattern>>,
    },
    /// Target with a default value: `a = 1` inside a pattern or parameter.
    Assign {
        target: Box<Pattern>,
        default: Box<Expr>,
    },
    /// Simple assignment target that is not a binding: `a.b`, `a[0]`.
    Expr(Box<Expr>),
    Error,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ObjectPatternProp {
    KeyValue {
        key: PropertyName,
        value: Pattern,
        span: Span,
    },
    Shorthand {
        name: Ident,
        default: Option<Expr>,
        span: Span,
    },
}

//! Binding patterns and reclassification of literals into patterns.
//!
//! Declarations and parameters parse patterns directly. Assignment targets,
//! `for-in`/`for-of` heads and arrow parameters are first parsed as
//! expressions and converted here once the following token shows that the
//! expression was a target.

use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::{
    ArrayElement, AssignOp, Expr, ExprKind, ObjectPatternProp, Pattern, PatternKind,
    PropertyKind, PropertyName, PropertyNameKind,
};
use tsg_ir::{Name, Span, TokenKind};

use super::Trailing;
use crate::grammar_table::conflict::{AmbiguitySite, Production};
use crate::recovery::LIST_FOLLOW;
use crate::{ParseError, Parser};

/// What a reclassified expression must be.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Target {
    /// Left of `=`, or a `for-in`/`for-of` head: member expressions allowed.
    Assignment,
    /// Left of a compound assignment or an update: identifiers and member
    /// expressions only.
    Simple,
    /// Arrow parameter: binding identifiers and destructuring only.
    Binding,
}

impl Target {
    fn error_code(self) -> ErrorCode {
        match self {
            Target::Assignment | Target::Simple => ErrorCode::E1007,
            Target::Binding => ErrorCode::E1006,
        }
    }
}

impl Parser<'_> {
    /// Identifier, object pattern or array pattern.
    pub(crate) fn parse_binding_pattern(&mut self) -> Result<Pattern, ParseError> {
        self.nested(|p| match p.current_kind() {
            TokenKind::LBrace => p.parse_object_binding(),
            TokenKind::LBracket => p.parse_array_binding(),
            _ => {
                if p.check(TokenKind::Yield) && p.context.in_generator() {
                    return Err(ParseError::new(
                        ErrorCode::E1004,
                        "`yield` cannot name a binding inside a generator",
                        p.current_span(),
                    ));
                }
                if p.check(TokenKind::Yield) {
                    p.resolve(AmbiguitySite::Yield, Production::BindingIdentifier);
                }
                p.cursor.expect_ident().map(Pattern::ident)
            }
        })
    }

    /// Pattern with an optional `= default`.
    fn parse_binding_element(&mut self) -> Result<Pattern, ParseError> {
        let pattern = self.parse_binding_pattern()?;
        if self.eat(TokenKind::Eq) {
            let default = self.parse_assignment()?;
            let span = pattern.span.merge(default.span);
            return Ok(Pattern::new(
                PatternKind::Assign {
                    target: Box::new(pattern),
                    default: Box::new(default),
                },
                span,
            ));
        }
        Ok(pattern)
    }

    fn parse_object_binding(&mut self) -> Result<Pattern, ParseError> {
        let open = self.expect(TokenKind::LBrace)?.span;
        let props = self.comma_list(
            open,
            TokenKind::RBrace,
            LIST_FOLLOW,
            Trailing::Allowed,
            Self::parse_binding_property,
            |span| ObjectPatternProp::KeyValue {
                key: PropertyName {
                    kind: PropertyNameKind::Ident,
                    name: Name::EMPTY,
                    span,
                },
                value: Pattern::new(PatternKind::Error, span),
                span,
            },
        )?;
        Ok(Pattern::new(PatternKind::Object(props), self.span_from(open)))
    }

    fn parse_binding_property(&mut self) -> Result<ObjectPatternProp, ParseError> {
        let start = self.current_span();
        if self.check_ident() && self.peek_kind(1) != TokenKind::Colon {
            let name = self.cursor.expect_ident()?;
            let default = if self.eat(TokenKind::Eq) {
                Some(self.parse_assignment()?)
            } else {
                None
            };
            return Ok(ObjectPatternProp::Shorthand {
                name,
                default,
                span: self.span_from(start),
            });
        }
        let key = self.parse_property_name()?;
        self.expect(TokenKind::Colon)?;
        let value = self.parse_binding_element()?;
        Ok(ObjectPatternProp::KeyValue {
            key,
            value,
            span: self.span_from(start),
        })
    }

    fn parse_array_binding(&mut self) -> Result<Pattern, ParseError> {
        let open = self.expect(TokenKind::LBracket)?.span;
        let mut elements = Vec::new();
        let mut rest = None;
        loop {
            while self.eat(TokenKind::Comma) {
                elements.push(None);
            }
            if self.check(TokenKind::RBracket) || self.is_at_end() {
                break;
            }
            if self.eat(TokenKind::DotDotDot) {
                rest = Some(Box::new(self.parse_binding_pattern()?));
                break;
            }
            elements.push(Some(self.parse_binding_element()?));
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect_closing(TokenKind::RBracket, open)?;
        Ok(Pattern::new(
            PatternKind::Array { elements, rest },
            self.span_from(open),
        ))
    }

    /// Convert a parsed expression into a pattern of the given kind.
    pub(crate) fn expr_to_pattern(
        &mut self,
        expr: Expr,
        target: Target,
    ) -> Result<Pattern, ParseError> {
        let span = expr.span;
        let kind = match expr.kind {
            ExprKind::Ident(name) => PatternKind::Ident(name),
            ExprKind::Member { .. } | ExprKind::Index { .. } if target != Target::Binding => {
                PatternKind::Expr(Box::new(expr))
            }
            ExprKind::Paren(inner) if target != Target::Binding => {
                return match inner.kind {
                    ExprKind::Ident(_) | ExprKind::Member { .. } | ExprKind::Index { .. } => {
                        Ok(Pattern::new(PatternKind::Expr(Box::new(Expr::new(
                            ExprKind::Paren(inner),
                            span,
                        ))), span))
                    }
                    _ => Err(invalid_target(target, span)),
                };
            }
            ExprKind::Array(elements) if target != Target::Simple => {
                self.resolve(AmbiguitySite::ArrayCover, Production::ArrayBindingPattern);
                self.array_to_pattern(elements, target)?
            }
            ExprKind::Object(props) if target != Target::Simple => {
                self.resolve(AmbiguitySite::ObjectCover, Production::ObjectBindingPattern);
                let mut out = Vec::with_capacity(props.len());
                for prop in props {
                    out.push(self.property_to_pattern(prop.kind, prop.span, target)?);
                }
                PatternKind::Object(out)
            }
            _ => return Err(invalid_target(target, span)),
        };
        Ok(Pattern::new(kind, span))
    }

    fn array_to_pattern(
        &mut self,
        elements: Vec<ArrayElement>,
        target: Target,
    ) -> Result<PatternKind, ParseError> {
        let count = elements.len();
        let mut out = Vec::with_capacity(count);
        let mut rest = None;
        for (index, element) in elements.into_iter().enumerate() {
            match element {
                ArrayElement::Hole(_) => out.push(None),
                ArrayElement::Item(expr) => out.push(Some(self.element_to_pattern(expr, target)?)),
                ArrayElement::Spread(expr, span) => {
                    if index + 1 != count {
                        return Err(ParseError::new(
                            ErrorCode::E1008,
                            "rest element must be last",
                            span,
                        ));
                    }
                    rest = Some(Box::new(self.expr_to_pattern(expr, target)?));
                }
            }
        }
        Ok(PatternKind::Array {
            elements: out,
            rest,
        })
    }

    /// Destructuring element: a target with an optional default.
    fn element_to_pattern(&mut self, expr: Expr, target: Target) -> Result<Pattern, ParseError> {
        match expr.kind {
            ExprKind::Assign {
                op: AssignOp::Assign,
                target: inner,
                value,
            } => {
                let inner = validate_pattern(*inner, target)?;
                Ok(Pattern::new(
                    PatternKind::Assign {
                        target: Box::new(inner),
                        default: value,
                    },
                    expr.span,
                ))
            }
            kind => self.expr_to_pattern(Expr::new(kind, expr.span), target),
        }
    }

    fn property_to_pattern(
        &mut self,
        kind: PropertyKind,
        span: Span,
        target: Target,
    ) -> Result<ObjectPatternProp, ParseError> {
        match kind {
            PropertyKind::KeyValue { key, value } => Ok(ObjectPatternProp::KeyValue {
                key,
                value: self.element_to_pattern(value, target)?,
                span,
            }),
            PropertyKind::Shorthand(name) => Ok(ObjectPatternProp::Shorthand {
                name,
                default: None,
                span,
            }),
            PropertyKind::CoverInitialized { name, default } => Ok(ObjectPatternProp::Shorthand {
                name,
                default: Some(default),
                span,
            }),
            PropertyKind::Method { .. }
            | PropertyKind::Getter { .. }
            | PropertyKind::Setter { .. }
            | PropertyKind::Error => Err(ParseError::new(
                ErrorCode::E1008,
                "methods and accessors cannot be destructuring targets",
                span,
            )),
        }
    }

    /// Report `{ a = 1 }` shorthand defaults in a literal that stayed a
    /// literal. Walks only the positions that would have become pattern
    /// elements.
    pub(crate) fn report_cover_initialized(&mut self, expr: &Expr) {
        let mut spans = Vec::new();
        collect_cover_initialized(expr, &mut spans);
        for span in spans {
            self.record(ParseError::new(
                ErrorCode::E1008,
                "shorthand property with a default is only valid in a destructuring target",
                span,
            ));
        }
    }
}

/// An assignment inside a literal has already reclassified its left side
/// as an assignment target; binding targets are stricter.
fn validate_pattern(pattern: Pattern, target: Target) -> Result<Pattern, ParseError> {
    if target == Target::Binding && matches!(pattern.kind, PatternKind::Expr(_)) {
        return Err(invalid_target(target, pattern.span));
    }
    Ok(pattern)
}

fn collect_cover_initialized(expr: &Expr, spans: &mut Vec<Span>) {
    match &expr.kind {
        ExprKind::Array(elements) => {
            for element in elements {
                match element {
                    ArrayElement::Item(item) | ArrayElement::Spread(item, _) => {
                        collect_cover_initialized(item, spans);
                    }
                    ArrayElement::Hole(_) => {}
                }
            }
        }
        ExprKind::Object(props) => {
            for prop in props {
                match &prop.kind {
                    PropertyKind::CoverInitialized { .. } => spans.push(prop.span),
                    PropertyKind::KeyValue { value, .. } => collect_cover_initialized(value, spans),
                    _ => {}
                }
            }
        }
        _ => {}
    }
}

#[cold]
fn invalid_target(target: Target, span: Span) -> ParseError {
    let message = match target {
        Target::Assignment | Target::Simple => "invalid assignment target",
        Target::Binding => "invalid arrow parameter",
    };
    ParseError::new(target.error_code(), message, span)
}

#[cfg(test)]
mod tests;

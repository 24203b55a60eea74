//! The parenthesized cover.
//!
//! `( items )` is parsed once as a list of cover items, each an assignment
//! expression that may also carry the forms only a parameter list accepts:
//! `...rest`, an optional marker `?`, a type annotation and a default after
//! the annotation. The token after `)` picks the reading:
//!
//! - `=>` on the same line: arrow parameters;
//! - `:` followed by a type and `=>`: arrow parameters with a return type
//!   (tried under a snapshot, since `c ? (a) : b` has the same prefix);
//! - anything else: a parenthesized expression, in which the
//!   parameter-only forms are errors.

use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::{
    AssignOp, CallSignature, Expr, ExprKind, Modifiers, Param, Pattern, PatternKind, Type,
};
use tsg_ir::{Span, TokenKind};

use super::pattern::Target;
use super::Trailing;
use crate::context::ParseContext;
use crate::grammar_table::conflict::{AmbiguitySite, Production};
use crate::recovery::LIST_FOLLOW;
use crate::{ParseError, Parser};

/// Reading chosen for a parenthesized cover.
pub(crate) enum Cover {
    Paren(Expr),
    Arrow(Expr),
}

enum CoverTarget {
    Expr(Expr),
    /// `...pattern`, only valid as the last arrow parameter.
    Rest(Pattern),
}

struct CoverItem {
    target: CoverTarget,
    optional: bool,
    ty: Option<Type>,
    default: Option<Expr>,
    span: Span,
}

impl CoverItem {
    fn error(span: Span) -> Self {
        CoverItem {
            target: CoverTarget::Expr(Expr::error(span)),
            optional: false,
            ty: None,
            default: None,
            span,
        }
    }

    /// Carries something a parenthesized expression cannot.
    fn is_parameter_only(&self) -> bool {
        matches!(self.target, CoverTarget::Rest(_))
            || self.optional
            || self.ty.is_some()
            || self.default.is_some()
    }
}

impl Parser<'_> {
    /// `( items )` at a `(`, resolved to a parenthesized expression or an
    /// arrow function.
    pub(crate) fn parse_paren_cover(&mut self) -> Result<Cover, ParseError> {
        let open = self.expect(TokenKind::LParen)?.span;
        let items = self.without_context(ParseContext::NO_IN, |p| {
            p.comma_list(
                open,
                TokenKind::RParen,
                LIST_FOLLOW,
                Trailing::Configurable,
                Self::parse_cover_item,
                CoverItem::error,
            )
        })?;
        let close = self.previous_span();

        if self.check(TokenKind::Arrow) && !self.has_newline_before() {
            self.advance();
            self.resolve(AmbiguitySite::ParenthesizedCover, Production::ArrowParameters);
            return self.finish_cover_arrow(items, None, open.merge(close));
        }
        if self.check(TokenKind::Colon) {
            let return_type = self.try_parse(|p| {
                p.advance();
                let ty = p.parse_type()?;
                if p.check(TokenKind::Arrow) && !p.has_newline_before() {
                    p.advance();
                    Ok(ty)
                } else {
                    Err(ParseError::unexpected(
                        "`=>`",
                        p.current_kind(),
                        p.current_span(),
                    ))
                }
            });
            if let Some(return_type) = return_type {
                self.resolve(AmbiguitySite::ArrowReturnType, Production::ArrowParameters);
                let span = open.merge(return_type.span);
                return self.finish_cover_arrow(items, Some(return_type), span);
            }
            self.resolve(AmbiguitySite::ArrowReturnType, Production::ParenthesizedExpression);
        }

        self.resolve(
            AmbiguitySite::ParenthesizedCover,
            Production::ParenthesizedExpression,
        );
        self.finish_cover_paren(items, open.merge(close))
            .map(Cover::Paren)
    }

    fn parse_cover_item(&mut self) -> Result<CoverItem, ParseError> {
        let start = self.current_span();
        let target = if self.eat(TokenKind::DotDotDot) {
            self.resolve(AmbiguitySite::CoverRest, Production::RestParameter);
            CoverTarget::Rest(self.parse_binding_pattern()?)
        } else {
            CoverTarget::Expr(self.with_context(ParseContext::IN_COVER, Self::parse_assignment)?)
        };
        let optional = self.eat(TokenKind::Question);
        let ty = self.parse_type_annotation_opt()?;
        let default = if (optional || ty.is_some()) && self.eat(TokenKind::Eq) {
            Some(self.parse_assignment()?)
        } else {
            None
        };
        Ok(CoverItem {
            target,
            optional,
            ty,
            default,
            span: self.span_from(start),
        })
    }

    fn finish_cover_paren(&mut self, items: Vec<CoverItem>, span: Span) -> Result<Expr, ParseError> {
        if items.is_empty() {
            return Err(ParseError::expected_expression(
                self.current_kind(),
                self.current_span(),
            )
            .with_context("empty parentheses are only valid before `=>`"));
        }
        let mut exprs = Vec::with_capacity(items.len());
        for item in items {
            if item.is_parameter_only() {
                self.record(ParseError::new(
                    ErrorCode::E1006,
                    "rest elements, optional markers and type annotations are only valid in arrow parameters",
                    item.span,
                ));
            }
            match item.target {
                CoverTarget::Expr(expr) => {
                    self.report_cover_initialized(&expr);
                    exprs.push(expr);
                }
                CoverTarget::Rest(_) => exprs.push(Expr::error(item.span)),
            }
        }
        let inner = if exprs.len() == 1 {
            exprs.remove(0)
        } else {
            let first = exprs[0].span;
            let last = exprs[exprs.len() - 1].span;
            Expr::new(ExprKind::Sequence(exprs), first.merge(last))
        };
        Ok(Expr::new(ExprKind::Paren(Box::new(inner)), span))
    }

    fn finish_cover_arrow(
        &mut self,
        items: Vec<CoverItem>,
        return_type: Option<Type>,
        span: Span,
    ) -> Result<Cover, ParseError> {
        let count = items.len();
        let mut params = Vec::with_capacity(count);
        for (index, item) in items.into_iter().enumerate() {
            if matches!(item.target, CoverTarget::Rest(_)) && index + 1 != count {
                self.record(ParseError::new(
                    ErrorCode::E1006,
                    "rest parameter must be last",
                    item.span,
                ));
            }
            params.push(self.cover_item_to_param(item));
        }
        let signature = CallSignature {
            type_params: Vec::new(),
            params,
            return_type,
            span,
        };
        self.finish_arrow(signature).map(Cover::Arrow)
    }

    fn cover_item_to_param(&mut self, item: CoverItem) -> Param {
        let CoverItem {
            target,
            optional,
            ty,
            mut default,
            span,
        } = item;
        let (rest, pattern) = match target {
            CoverTarget::Rest(pattern) => (true, pattern),
            CoverTarget::Expr(expr) if expr.is_error() => {
                (false, Pattern::new(PatternKind::Error, expr.span))
            }
            CoverTarget::Expr(expr) => {
                let expr_span = expr.span;
                let converted = match expr.kind {
                    ExprKind::Assign {
                        op: AssignOp::Assign,
                        target,
                        value,
                    } if default.is_none() => {
                        default = Some(*value);
                        if matches!(target.kind, PatternKind::Expr(_)) {
                            Err(ParseError::new(
                                ErrorCode::E1006,
                                "invalid arrow parameter",
                                target.span,
                            ))
                        } else {
                            Ok(*target)
                        }
                    }
                    kind => self.expr_to_pattern(Expr::new(kind, expr_span), Target::Binding),
                };
                let pattern = converted.unwrap_or_else(|error| {
                    self.record(error);
                    Pattern::new(PatternKind::Error, expr_span)
                });
                (false, pattern)
            }
        };
        Param {
            modifiers: Modifiers::empty(),
            rest,
            pattern,
            optional,
            ty,
            default,
            span,
        }
    }
}

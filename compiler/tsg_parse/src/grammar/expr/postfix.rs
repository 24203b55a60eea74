//! Member access, calls, `new` and tagged templates.

use tsg_ir::ast::{Argument, Expr, ExprKind, Ident, Type};
use tsg_ir::TokenKind;

use crate::context::ParseContext;
use crate::grammar::Trailing;
use crate::grammar_table::conflict::{AmbiguitySite, Production};
use crate::recovery::LIST_FOLLOW;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Left-hand-side expression: a primary or `new` expression followed by
    /// member accesses and calls.
    pub(crate) fn parse_lhs(&mut self) -> Result<Expr, ParseError> {
        let expr = if self.check(TokenKind::New) {
            self.parse_new()?
        } else {
            self.parse_primary()?
        };
        self.parse_call_tail(expr, true)
    }

    /// Member accesses, and calls when `calls` is set. The callee of `new`
    /// takes member accesses only, so `new a.b()` binds the arguments to
    /// `new`.
    pub(crate) fn parse_call_tail(&mut self, mut expr: Expr, calls: bool) -> Result<Expr, ParseError> {
        loop {
            let start = expr.span;
            let kind = match self.current_kind() {
                TokenKind::Dot => {
                    self.advance();
                    if !self.current_kind().is_word() {
                        return Err(ParseError::unexpected(
                            "property name",
                            self.current_kind(),
                            self.current_span(),
                        ));
                    }
                    let token = self.advance();
                    ExprKind::Member {
                        object: Box::new(expr),
                        property: Ident::new(token.value, token.span),
                    }
                }
                TokenKind::LBracket => {
                    let open = self.advance().span;
                    let index =
                        self.without_context(ParseContext::NO_IN, Self::parse_expression)?;
                    self.expect_closing(TokenKind::RBracket, open)?;
                    ExprKind::Index {
                        object: Box::new(expr),
                        index: Box::new(index),
                    }
                }
                TokenKind::NoSubstitutionTemplate | TokenKind::TemplateHead => {
                    let quasi = self.parse_template()?;
                    ExprKind::TaggedTemplate {
                        tag: Box::new(expr),
                        quasi,
                    }
                }
                TokenKind::LParen if calls => ExprKind::Call {
                    callee: Box::new(expr),
                    type_args: None,
                    args: self.parse_arguments()?,
                },
                TokenKind::Lt if calls => {
                    let Some(type_args) = self.try_call_type_arguments() else {
                        break;
                    };
                    ExprKind::Call {
                        callee: Box::new(expr),
                        type_args: Some(type_args),
                        args: self.parse_arguments()?,
                    }
                }
                _ => break,
            };
            self.chain_link()?;
            expr = Expr::new(kind, self.span_from(start));
        }
        Ok(expr)
    }

    /// `<T>` after a callee, committed only if a `(` follows the `>`.
    /// Otherwise the `<` is a relational operator.
    fn try_call_type_arguments(&mut self) -> Option<Vec<Type>> {
        let type_args = self.try_parse(|p| {
            let args = p.parse_type_arguments()?;
            if p.check(TokenKind::LParen) {
                Ok(args)
            } else {
                Err(ParseError::unexpected(
                    "`(`",
                    p.current_kind(),
                    p.current_span(),
                ))
            }
        });
        let chosen = if type_args.is_some() {
            Production::TypeArguments
        } else {
            Production::RelationalExpression
        };
        self.resolve(AmbiguitySite::CallTypeArguments, chosen);
        type_args
    }

    /// `new callee<T>(args)`, `new callee` or `new.target`.
    fn parse_new(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect(TokenKind::New)?.span;
        if self.check(TokenKind::Dot)
            && self.peek_kind(1).is_word()
            && self.interner().lookup(self.cursor.peek_value(1)) == "target"
        {
            self.cursor.advance_by(2);
            return Ok(Expr::new(ExprKind::NewTarget, self.span_from(start)));
        }
        let callee = if self.check(TokenKind::New) {
            self.nested(Self::parse_new)?
        } else {
            self.parse_primary()?
        };
        let callee = self.parse_call_tail(callee, false)?;
        let type_args = if self.check(TokenKind::Lt) {
            self.try_call_type_arguments()
        } else {
            None
        };
        let args = if self.check(TokenKind::LParen) {
            Some(self.parse_arguments()?)
        } else {
            None
        };
        Ok(Expr::new(
            ExprKind::New {
                callee: Box::new(callee),
                type_args,
                args,
            },
            self.span_from(start),
        ))
    }

    /// `( args )` at a `(`.
    pub(crate) fn parse_arguments(&mut self) -> Result<Vec<Argument>, ParseError> {
        let open = self.expect(TokenKind::LParen)?.span;
        self.without_context(ParseContext::NO_IN, |p| {
            p.comma_list(
                open,
                TokenKind::RParen,
                LIST_FOLLOW,
                Trailing::Configurable,
                Self::parse_argument,
                |span| Argument {
                    spread: false,
                    expr: Expr::error(span),
                    span,
                },
            )
        })
    }

    fn parse_argument(&mut self) -> Result<Argument, ParseError> {
        let start = self.current_span();
        let spread = self.eat(TokenKind::DotDotDot);
        let expr = self.parse_assignment()?;
        Ok(Argument {
            spread,
            expr,
            span: self.span_from(start),
        })
    }
}

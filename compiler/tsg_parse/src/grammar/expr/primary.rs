//! Primary expressions: literals, identifiers, templates, array and object
//! literals, function and class expressions.

use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::{
    ArrayElement, Expr, ExprKind, Property, PropertyKind, PropertyNameKind, Template,
};
use tsg_ir::TokenKind;

use crate::context::ParseContext;
use crate::grammar::cover::Cover;
use crate::grammar::Trailing;
use crate::grammar_table::conflict::{AmbiguitySite, Production};
use crate::recovery::{synchronize, LIST_FOLLOW};
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current();
        let start = token.span;
        let kind = match token.kind {
            TokenKind::This => {
                self.resolve(AmbiguitySite::ThisInType, Production::PrimaryExpression);
                ExprKind::This
            }
            TokenKind::Super => ExprKind::Super,
            TokenKind::Null => ExprKind::Null,
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Number => ExprKind::Number(token.value),
            TokenKind::String => ExprKind::String(token.value),
            TokenKind::Regex => ExprKind::Regex(token.value),
            TokenKind::NoSubstitutionTemplate | TokenKind::TemplateHead => {
                let template = self.parse_template()?;
                return Ok(Expr::new(ExprKind::Template(template), self.span_from(start)));
            }
            TokenKind::LBracket => return self.parse_array_literal(),
            TokenKind::LBrace => return self.parse_object_literal(),
            TokenKind::LParen => {
                return match self.parse_paren_cover()? {
                    Cover::Paren(expr) => Ok(expr),
                    Cover::Arrow(arrow) => {
                        self.record(ParseError::new(
                            ErrorCode::E1001,
                            "arrow function must be parenthesized when used as an operand",
                            arrow.span,
                        ));
                        Ok(arrow)
                    }
                };
            }
            TokenKind::Function => {
                let function = self.parse_function_expression()?;
                return Ok(Expr::new(
                    ExprKind::Function(Box::new(function)),
                    self.span_from(start),
                ));
            }
            TokenKind::Class => {
                let class = self.parse_class(false)?;
                return Ok(Expr::new(
                    ExprKind::Class(Box::new(class)),
                    self.span_from(start),
                ));
            }
            TokenKind::Yield => {
                self.resolve(AmbiguitySite::Yield, Production::IdentifierReference);
                ExprKind::Ident(token.value)
            }
            kind if kind.is_identifier_like() => ExprKind::Ident(token.value),
            TokenKind::Error => {
                return Err(ParseError::new(ErrorCode::E1001, "invalid token", start));
            }
            found => return Err(ParseError::expected_expression(found, start)),
        };
        self.advance();
        Ok(Expr::new(kind, start))
    }

    /// Template literal at a `NoSubstitutionTemplate` or `TemplateHead`.
    pub(crate) fn parse_template(&mut self) -> Result<Template, ParseError> {
        let first = self.advance();
        let mut quasis = vec![first.value];
        let mut exprs = Vec::new();
        if first.kind == TokenKind::TemplateHead {
            loop {
                let expr = self.without_context(ParseContext::NO_IN, Self::parse_expression)?;
                exprs.push(expr);
                match self.current_kind() {
                    TokenKind::TemplateMiddle => quasis.push(self.advance().value),
                    TokenKind::TemplateTail => {
                        quasis.push(self.advance().value);
                        break;
                    }
                    found => {
                        return Err(ParseError::unexpected(
                            "`}` closing the template substitution",
                            found,
                            self.current_span(),
                        ));
                    }
                }
            }
        }
        Ok(Template {
            quasis,
            exprs,
            span: self.span_from(first.span),
        })
    }

    /// `[a, , ...b]`. Elisions become holes; elements are parsed as covers
    /// since the literal may turn out to be a destructuring target.
    fn parse_array_literal(&mut self) -> Result<Expr, ParseError> {
        let open = self.expect(TokenKind::LBracket)?.span;
        let mut elements = Vec::new();
        self.without_context(ParseContext::NO_IN, |p| -> Result<(), ParseError> {
            loop {
                if p.check(TokenKind::RBracket) || p.is_at_end() {
                    break;
                }
                if p.check(TokenKind::Comma) {
                    elements.push(ArrayElement::Hole(p.current_span()));
                    p.advance();
                    continue;
                }
                let start_pos = p.cursor.position();
                let start = p.current_span();
                let element = p.with_context(ParseContext::IN_COVER, |p| {
                    if p.eat(TokenKind::DotDotDot) {
                        let expr = p.parse_assignment()?;
                        Ok(ArrayElement::Spread(expr, p.span_from(start)))
                    } else {
                        p.parse_assignment().map(ArrayElement::Item)
                    }
                });
                match element {
                    Ok(element) => elements.push(element),
                    Err(error) => {
                        p.record(error);
                        synchronize(&mut p.cursor, LIST_FOLLOW);
                        elements.push(ArrayElement::Item(Expr::error(
                            p.error_span(start_pos, start),
                        )));
                    }
                }
                if p.eat(TokenKind::Comma) {
                    continue;
                }
                if !p.check(TokenKind::RBracket) && !p.is_at_end() {
                    p.record(ParseError::unexpected(
                        "`,` or `]`",
                        p.current_kind(),
                        p.current_span(),
                    ));
                    if !synchronize(&mut p.cursor, LIST_FOLLOW) || !p.eat(TokenKind::Comma) {
                        break;
                    }
                }
            }
            Ok(())
        })?;
        self.expect_closing(TokenKind::RBracket, open)?;
        Ok(Expr::new(ExprKind::Array(elements), self.span_from(open)))
    }

    fn parse_object_literal(&mut self) -> Result<Expr, ParseError> {
        let open = self.expect(TokenKind::LBrace)?.span;
        let props = self.without_context(ParseContext::NO_IN, |p| {
            p.comma_list(
                open,
                TokenKind::RBrace,
                LIST_FOLLOW,
                Trailing::Allowed,
                Self::parse_property_definition,
                |span| Property {
                    kind: PropertyKind::Error,
                    span,
                },
            )
        })?;
        Ok(Expr::new(ExprKind::Object(props), self.span_from(open)))
    }

    fn parse_property_definition(&mut self) -> Result<Property, ParseError> {
        let start = self.current_span();
        let kind = if self.is_accessor_start() {
            if self.eat(TokenKind::Get) {
                let (key, return_type, body) = self.parse_getter_rest()?;
                PropertyKind::Getter {
                    key,
                    return_type,
                    body,
                }
            } else {
                self.expect(TokenKind::Set)?;
                let (key, param, body) = self.parse_setter_rest()?;
                PropertyKind::Setter {
                    key,
                    param: Box::new(param),
                    body,
                }
            }
        } else if self.eat(TokenKind::Star) {
            let key = self.parse_property_name()?;
            let function = self.parse_function_rest(start, None, true, true)?;
            PropertyKind::Method {
                key,
                function: Box::new(function),
            }
        } else if self.check_ident()
            && matches!(
                self.peek_kind(1),
                TokenKind::Comma | TokenKind::RBrace | TokenKind::Eq
            )
        {
            self.resolve(AmbiguitySite::ShorthandProperty, Production::IdentifierReference);
            let name = self.cursor.expect_ident()?;
            if self.eat(TokenKind::Eq) {
                let default = self.parse_assignment()?;
                PropertyKind::CoverInitialized { name, default }
            } else {
                PropertyKind::Shorthand(name)
            }
        } else {
            let key = self.parse_property_name()?;
            if key.kind == PropertyNameKind::Ident {
                self.resolve(AmbiguitySite::ShorthandProperty, Production::PropertyName);
            } else {
                self.resolve(AmbiguitySite::LiteralKey, Production::PropertyName);
            }
            if self.check(TokenKind::LParen) || self.check(TokenKind::Lt) {
                let function = self.parse_function_rest(start, None, false, true)?;
                PropertyKind::Method {
                    key,
                    function: Box::new(function),
                }
            } else {
                self.expect(TokenKind::Colon)?;
                let value = self.with_context(ParseContext::IN_COVER, Self::parse_assignment)?;
                PropertyKind::KeyValue { key, value }
            }
        };
        Ok(Property {
            kind,
            span: self.span_from(start),
        })
    }

    /// `get`/`set` followed by a property name, as opposed to a property
    /// or method named `get`/`set`.
    pub(crate) fn is_accessor_start(&self) -> bool {
        if !matches!(self.current_kind(), TokenKind::Get | TokenKind::Set) {
            return false;
        }
        let next = self.peek_kind(1);
        next.is_word() || matches!(next, TokenKind::String | TokenKind::Number)
    }
}

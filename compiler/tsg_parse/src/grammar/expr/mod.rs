//! Expression parsing.
//!
//! - `mod.rs`: assignment, conditional and binary precedence climbing
//! - `unary.rs`: prefix operators, type assertions, postfix update
//! - `postfix.rs`: member access, calls, `new`, tagged templates
//! - `primary.rs`: literals, identifiers, array/object literals, templates
//!
//! Binary operators are not one method per level: a single loop consults
//! [`STANDARD`] for the level and associativity of the operator at the
//! cursor and recurses with the next tighter level for left-associative
//! operators.

mod postfix;
mod primary;
mod unary;

use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::{
    ArrowBody, ArrowFunction, AssignOp, BinaryOp, CallSignature, Expr, ExprKind, Modifiers, Param,
    Pattern, PatternKind, UpdateOp,
};
use tsg_ir::TokenKind;

use super::cover::Cover;
use super::pattern::Target;
use crate::context::ParseContext;
use crate::cursor::GreaterOp;
use crate::grammar_table::conflict::{AmbiguitySite, Production};
use crate::grammar_table::precedence::{Assoc, Operator, Precedence};
use crate::grammar_table::STANDARD;
use crate::{ParseError, Parser};

/// Operators handled by the climbing loop.
#[derive(Copy, Clone, Debug)]
enum Infix {
    Binary(BinaryOp),
    /// `expr as T`: the right operand is a type.
    As,
}

impl Parser<'_> {
    /// Full expression, comma operator included.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_span();
        let first = self.parse_assignment()?;
        if !self.check(TokenKind::Comma) {
            return Ok(first);
        }
        let mut exprs = vec![first];
        while self.eat(TokenKind::Comma) {
            exprs.push(self.parse_assignment()?);
        }
        Ok(Expr::new(ExprKind::Sequence(exprs), self.span_from(start)))
    }

    /// Assignment expression: arrows, `yield`, conditional and assignment.
    ///
    /// `IN_COVER` applies to this expression only, not to the expressions
    /// nested inside it.
    pub(crate) fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let covered = self.context.in_cover();
        self.nested(|p| {
            p.without_context(ParseContext::IN_COVER, |p| p.parse_assignment_inner(covered))
        })
    }

    fn parse_assignment_inner(&mut self, covered: bool) -> Result<Expr, ParseError> {
        if self.check(TokenKind::Yield) && self.context.in_generator() {
            return self.parse_yield();
        }
        if self.check_ident()
            && self.peek_kind(1) == TokenKind::Arrow
            && !self.cursor.peek_flags(1).has_newline_before()
        {
            return self.parse_simple_arrow();
        }
        if self.check(TokenKind::Lt) {
            if let Some(arrow) = self.try_parse(Self::parse_generic_arrow) {
                self.resolve(AmbiguitySite::PrefixAngle, Production::TypeParameters);
                return Ok(arrow);
            }
        }

        let start = self.current_span();
        let lhs = if self.check(TokenKind::LParen) {
            match self.parse_paren_cover()? {
                Cover::Arrow(arrow) => return Ok(arrow),
                Cover::Paren(expr) => {
                    let expr = self.parse_call_tail(expr, true)?;
                    let expr = self.parse_postfix_update(expr);
                    let expr = self.parse_binary_from(expr, Precedence::LogicalOr)?;
                    self.parse_conditional_from(expr)?
                }
            }
        } else {
            self.parse_conditional()?
        };

        let Some((op, token_len)) = self.assign_operator() else {
            if !covered {
                self.report_cover_initialized(&lhs);
            }
            return Ok(lhs);
        };
        let target_kind = if op == AssignOp::Assign {
            Target::Assignment
        } else {
            Target::Simple
        };
        let lhs_span = lhs.span;
        let target = match self.expr_to_pattern(lhs, target_kind) {
            Ok(pattern) => pattern,
            Err(error) => {
                self.record(error);
                Pattern::new(PatternKind::Error, lhs_span)
            }
        };
        self.cursor.advance_by(token_len);
        let value = self.parse_assignment()?;
        Ok(Expr::new(
            ExprKind::Assign {
                op,
                target: Box::new(target),
                value: Box::new(value),
            },
            self.span_from(start),
        ))
    }

    /// Assignment operator at the cursor and the number of tokens it spans.
    fn assign_operator(&self) -> Option<(AssignOp, usize)> {
        let op = match self.current_kind() {
            TokenKind::Eq => AssignOp::Assign,
            TokenKind::StarEq => AssignOp::Mul,
            TokenKind::SlashEq => AssignOp::Div,
            TokenKind::PercentEq => AssignOp::Mod,
            TokenKind::PlusEq => AssignOp::Add,
            TokenKind::MinusEq => AssignOp::Sub,
            TokenKind::ShlEq => AssignOp::Shl,
            TokenKind::AmpEq => AssignOp::BitAnd,
            TokenKind::CaretEq => AssignOp::BitXor,
            TokenKind::PipeEq => AssignOp::BitOr,
            TokenKind::Gt => {
                let greater = self.cursor.greater_op()?;
                let op = match greater {
                    GreaterOp::ShrEq => AssignOp::Shr,
                    GreaterOp::UShrEq => AssignOp::UShr,
                    _ => return None,
                };
                return Some((op, greater.token_len()));
            }
            _ => return None,
        };
        Some((op, 1))
    }

    fn parse_conditional(&mut self) -> Result<Expr, ParseError> {
        let test = self.parse_binary(Precedence::LogicalOr)?;
        self.parse_conditional_from(test)
    }

    /// `test ? a : b` after an already parsed `test`.
    ///
    /// A `?` directly followed by `,`, `)`, `:` or `=` is the optional
    /// marker of an arrow parameter and is left for the cover.
    fn parse_conditional_from(&mut self, test: Expr) -> Result<Expr, ParseError> {
        if !self.check(TokenKind::Question)
            || matches!(
                self.peek_kind(1),
                TokenKind::Comma | TokenKind::RParen | TokenKind::Colon | TokenKind::Eq
            )
        {
            return Ok(test);
        }
        self.advance();
        let consequent =
            self.without_context(ParseContext::NO_IN, Self::parse_assignment)?;
        self.expect(TokenKind::Colon)?;
        let alternate = self.parse_assignment()?;
        let span = test.span.merge(alternate.span);
        Ok(Expr::new(
            ExprKind::Conditional {
                test: Box::new(test),
                consequent: Box::new(consequent),
                alternate: Box::new(alternate),
            },
            span,
        ))
    }

    /// Binary expression whose operators all bind at least as tightly as
    /// `min`.
    fn parse_binary(&mut self, min: Precedence) -> Result<Expr, ParseError> {
        self.nested(|p| {
            let left = p.parse_unary()?;
            p.parse_binary_from(left, min)
        })
    }

    fn parse_binary_from(&mut self, mut left: Expr, min: Precedence) -> Result<Expr, ParseError> {
        while let Some((infix, token_len)) = self.binary_operator() {
            let operator = match infix {
                Infix::Binary(op) => Operator::Binary(op),
                Infix::As => Operator::As,
            };
            let Some(entry) = STANDARD.precedence_of(operator) else {
                break;
            };
            if entry.precedence < min {
                break;
            }
            let next_min = match entry.assoc {
                Assoc::Right => entry.precedence,
                Assoc::Left | Assoc::None => entry.precedence.tighter(),
            };
            self.cursor.advance_by(token_len);

            left = match infix {
                Infix::As => {
                    let ty = self.parse_type()?;
                    self.chain_link()?;
                    let span = left.span.merge(ty.span);
                    Expr::new(
                        ExprKind::As {
                            expr: Box::new(left),
                            ty: Box::new(ty),
                        },
                        span,
                    )
                }
                Infix::Binary(op) => {
                    let right = self.parse_binary(next_min)?;
                    self.chain_link()?;
                    let span = left.span.merge(right.span);
                    Expr::new(
                        ExprKind::Binary {
                            op,
                            left: Box::new(left),
                            right: Box::new(right),
                        },
                        span,
                    )
                }
            };
        }
        Ok(left)
    }

    /// Binary operator (or `as`) at the cursor and the number of tokens it
    /// spans. `>`-family operators are composed from adjacent tokens.
    fn binary_operator(&self) -> Option<(Infix, usize)> {
        let op = match self.current_kind() {
            TokenKind::PipePipe => BinaryOp::Or,
            TokenKind::AmpAmp => BinaryOp::And,
            TokenKind::Pipe => BinaryOp::BitOr,
            TokenKind::Caret => BinaryOp::BitXor,
            TokenKind::Amp => BinaryOp::BitAnd,
            TokenKind::EqEq => BinaryOp::Eq,
            TokenKind::NotEq => BinaryOp::NotEq,
            TokenKind::EqEqEq => BinaryOp::StrictEq,
            TokenKind::NotEqEq => BinaryOp::StrictNotEq,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::LtEq => BinaryOp::LtEq,
            TokenKind::Instanceof => BinaryOp::Instanceof,
            TokenKind::In if self.context.allows_in() => BinaryOp::In,
            TokenKind::Shl => BinaryOp::Shl,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Percent => BinaryOp::Mod,
            TokenKind::As if !self.has_newline_before() => return Some((Infix::As, 1)),
            TokenKind::Gt => {
                let greater = self.cursor.greater_op()?;
                let op = match greater {
                    GreaterOp::Gt => BinaryOp::Gt,
                    GreaterOp::GtEq => BinaryOp::GtEq,
                    GreaterOp::Shr => BinaryOp::Shr,
                    GreaterOp::UShr => BinaryOp::UShr,
                    GreaterOp::ShrEq | GreaterOp::UShrEq => return None,
                };
                return Some((Infix::Binary(op), greater.token_len()));
            }
            _ => return None,
        };
        Some((Infix::Binary(op), 1))
    }

    /// `yield`, `yield expr` or `yield* expr` inside a generator.
    fn parse_yield(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect(TokenKind::Yield)?.span;
        self.resolve(AmbiguitySite::Yield, Production::YieldExpression);
        let ends_here = self.has_newline_before()
            || matches!(
                self.current_kind(),
                TokenKind::RParen
                    | TokenKind::RBracket
                    | TokenKind::RBrace
                    | TokenKind::Comma
                    | TokenKind::Semicolon
                    | TokenKind::Colon
                    | TokenKind::Eof
            );
        if ends_here {
            return Ok(Expr::new(
                ExprKind::Yield {
                    delegate: false,
                    argument: None,
                },
                start,
            ));
        }
        let delegate = self.eat(TokenKind::Star);
        let argument = self.parse_assignment()?;
        Ok(Expr::new(
            ExprKind::Yield {
                delegate,
                argument: Some(Box::new(argument)),
            },
            self.span_from(start),
        ))
    }

    /// `x => body`
    fn parse_simple_arrow(&mut self) -> Result<Expr, ParseError> {
        let name = self.cursor.expect_ident()?;
        self.expect(TokenKind::Arrow)?;
        let param = Param {
            modifiers: Modifiers::empty(),
            rest: false,
            pattern: Pattern::ident(name),
            optional: false,
            ty: None,
            default: None,
            span: name.span,
        };
        let signature = CallSignature {
            type_params: Vec::new(),
            params: vec![param],
            return_type: None,
            span: name.span,
        };
        self.finish_arrow(signature)
    }

    /// `<T>(params): R => body`. Run under `try_parse`: anything that is
    /// not a complete arrow head falls back to a type assertion.
    fn parse_generic_arrow(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_span();
        let type_params = self.parse_type_parameters()?;
        let params = self.parse_parameter_list()?;
        let return_type = self.parse_type_annotation_opt()?;
        if !self.check(TokenKind::Arrow) || self.has_newline_before() {
            return Err(ParseError::unexpected(
                "`=>`",
                self.current_kind(),
                self.current_span(),
            ));
        }
        self.advance();
        let signature = CallSignature {
            type_params,
            params,
            return_type,
            span: self.span_from(start),
        };
        self.finish_arrow(signature)
    }

    /// Arrow body after `=>`. Arrows are never generators.
    pub(crate) fn finish_arrow(&mut self, signature: CallSignature) -> Result<Expr, ParseError> {
        let start = signature.span;
        let body = if self.check(TokenKind::LBrace) {
            ArrowBody::Block(self.parse_function_body(false)?)
        } else {
            let expr =
                self.without_context(ParseContext::IN_GENERATOR, Self::parse_assignment)?;
            ArrowBody::Expr(Box::new(expr))
        };
        let span = self.span_from(start);
        Ok(Expr::new(
            ExprKind::Arrow(Box::new(ArrowFunction {
                signature,
                body,
                span,
            })),
            span,
        ))
    }

    /// Whether `expr` may be the operand of `++`/`--`.
    fn check_update_operand(&mut self, expr: &Expr, op: UpdateOp) {
        let valid = match &expr.kind {
            ExprKind::Ident(_) | ExprKind::Member { .. } | ExprKind::Index { .. } => true,
            ExprKind::Paren(inner) => matches!(
                inner.kind,
                ExprKind::Ident(_) | ExprKind::Member { .. } | ExprKind::Index { .. }
            ),
            _ => false,
        };
        if !valid {
            self.record(ParseError::new(
                ErrorCode::E1007,
                format!("invalid operand for `{}`", op.as_str()),
                expr.span,
            ));
        }
    }
}

//! Prefix operators, `<T>expr` type assertions and postfix `++`/`--`.

use tsg_ir::ast::{Expr, ExprKind, UnaryOp, UpdateOp};
use tsg_ir::TokenKind;

use crate::grammar_table::conflict::{AmbiguitySite, Production};
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        self.nested(|p| {
            let start = p.current_span();
            let unary = match p.current_kind() {
                TokenKind::Delete => Some(UnaryOp::Delete),
                TokenKind::Void => Some(UnaryOp::Void),
                TokenKind::Typeof => Some(UnaryOp::Typeof),
                TokenKind::Plus => Some(UnaryOp::Plus),
                TokenKind::Minus => Some(UnaryOp::Minus),
                TokenKind::Tilde => Some(UnaryOp::BitNot),
                TokenKind::Bang => Some(UnaryOp::Not),
                _ => None,
            };
            if let Some(op) = unary {
                p.advance();
                let operand = p.parse_unary()?;
                return Ok(Expr::new(
                    ExprKind::Unary {
                        op,
                        operand: Box::new(operand),
                    },
                    p.span_from(start),
                ));
            }

            let update = match p.current_kind() {
                TokenKind::PlusPlus => Some(UpdateOp::Increment),
                TokenKind::MinusMinus => Some(UpdateOp::Decrement),
                _ => None,
            };
            if let Some(op) = update {
                p.advance();
                let operand = p.parse_unary()?;
                p.check_update_operand(&operand, op);
                return Ok(Expr::new(
                    ExprKind::Update {
                        op,
                        prefix: true,
                        operand: Box::new(operand),
                    },
                    p.span_from(start),
                ));
            }

            if p.check(TokenKind::Lt) {
                return p.parse_type_assertion();
            }
            let expr = p.parse_lhs()?;
            Ok(p.parse_postfix_update(expr))
        })
    }

    /// `<T>expr`. Only reached where a generic arrow head did not parse.
    fn parse_type_assertion(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect(TokenKind::Lt)?.span;
        self.resolve(AmbiguitySite::PrefixAngle, Production::TypeAssertion);
        let ty = self.parse_type()?;
        self.expect(TokenKind::Gt)?;
        let expr = self.parse_unary()?;
        Ok(Expr::new(
            ExprKind::TypeAssertion {
                ty: Box::new(ty),
                expr: Box::new(expr),
            },
            self.span_from(start),
        ))
    }

    /// Postfix `++`/`--`. Restricted: a line break before the operator
    /// ends the expression, so `a\n++b` is two statements.
    pub(crate) fn parse_postfix_update(&mut self, expr: Expr) -> Expr {
        let op = match self.current_kind() {
            TokenKind::PlusPlus => UpdateOp::Increment,
            TokenKind::MinusMinus => UpdateOp::Decrement,
            _ => return expr,
        };
        if self.has_newline_before() {
            return expr;
        }
        self.check_update_operand(&expr, op);
        self.advance();
        let span = self.span_from(expr.span);
        Expr::new(
            ExprKind::Update {
                op,
                prefix: false,
                operand: Box::new(expr),
            },
            span,
        )
    }
}

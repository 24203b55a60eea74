//! Control-flow statements and the `for` family.
//!
//! `return`, `throw`, `break` and `continue` are restricted productions: a
//! line break after the keyword ends the statement (`throw` must have an
//! operand, so there it is an error).

use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::{
    CatchClause, Expr, ForHead, ForInit, Pattern, PatternKind, StmtKind, SwitchCase, VarDecl,
};
use tsg_ir::{Span, TokenKind};

use crate::context::ParseContext;
use crate::grammar::pattern::Target;
use crate::recovery::{synchronize, TokenSet, FOR_SLOT_FOLLOW};
use crate::{ParseError, Parser};

/// Tokens that end a switch clause body.
const CASE_END: TokenSet = TokenSet::new()
    .with(TokenKind::Case)
    .with(TokenKind::Default)
    .with(TokenKind::RBrace);

/// End of a `for` head.
const FOR_HEAD_CLOSE: TokenSet = TokenSet::new().with(TokenKind::RParen);

/// First slot of a classic `for` head: `for (init; ...`.
const FOR_INIT: ParseContext = ParseContext::NO_IN.with(ParseContext::IN_COVER);

impl Parser<'_> {
    /// `( expression )`
    fn parse_condition(&mut self) -> Result<Expr, ParseError> {
        let open = self.expect(TokenKind::LParen)?.span;
        let expr = self.without_context(ParseContext::NO_IN, Self::parse_expression)?;
        self.expect_closing(TokenKind::RParen, open)?;
        Ok(expr)
    }

    pub(super) fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(TokenKind::If)?;
        let test = self.parse_condition()?;
        let consequent = self.parse_statement()?;
        let alternate = if self.eat(TokenKind::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(StmtKind::If {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate,
        })
    }

    pub(super) fn parse_while(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(TokenKind::While)?;
        let test = self.parse_condition()?;
        let body = self.parse_statement()?;
        Ok(StmtKind::While {
            test: Box::new(test),
            body: Box::new(body),
        })
    }

    /// `do body while (test)`. The `;` after the condition is optional even
    /// on the same line.
    pub(super) fn parse_do_while(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(TokenKind::Do)?;
        let body = self.parse_statement()?;
        self.expect(TokenKind::While)?;
        let test = self.parse_condition()?;
        self.eat(TokenKind::Semicolon);
        Ok(StmtKind::DoWhile {
            body: Box::new(body),
            test: Box::new(test),
        })
    }

    pub(super) fn parse_with(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(TokenKind::With)?;
        let object = self.parse_condition()?;
        let body = self.parse_statement()?;
        Ok(StmtKind::With {
            object: Box::new(object),
            body: Box::new(body),
        })
    }

    pub(super) fn parse_switch(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(TokenKind::Switch)?;
        let discriminant = self.parse_condition()?;
        let open = self.expect(TokenKind::LBrace)?.span;
        let mut cases = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            let start = self.current_span();
            let test = match self.current_kind() {
                TokenKind::Case => {
                    self.advance();
                    Some(self.parse_expression()?)
                }
                TokenKind::Default => {
                    self.advance();
                    None
                }
                found => {
                    return Err(ParseError::unexpected(
                        "`case` or `default`",
                        found,
                        self.current_span(),
                    ));
                }
            };
            self.expect(TokenKind::Colon)?;
            let body = self.parse_statements_until(CASE_END);
            cases.push(SwitchCase {
                test,
                body,
                span: self.span_from(start),
            });
        }
        self.expect_closing(TokenKind::RBrace, open)?;
        Ok(StmtKind::Switch {
            discriminant: Box::new(discriminant),
            cases,
        })
    }

    /// `try` with `catch`, `finally` or both. With neither, the error is
    /// reported and the block is kept.
    pub(super) fn parse_try(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(TokenKind::Try)?;
        let block = self.parse_block()?;
        let handler = if self.check(TokenKind::Catch) {
            let start = self.advance().span;
            let open = self.expect(TokenKind::LParen)?.span;
            let param = self.parse_binding_pattern()?;
            self.expect_closing(TokenKind::RParen, open)?;
            let body = self.parse_block()?;
            Some(CatchClause {
                param,
                body,
                span: self.span_from(start),
            })
        } else {
            None
        };
        let finalizer = if self.eat(TokenKind::Finally) {
            Some(self.parse_block()?)
        } else {
            None
        };
        if handler.is_none() && finalizer.is_none() {
            self.record(ParseError::unexpected(
                "`catch` or `finally`",
                self.current_kind(),
                self.current_span(),
            ));
        }
        Ok(StmtKind::Try {
            block,
            handler,
            finalizer,
        })
    }

    /// Whether a restricted production ends before the current token.
    fn at_restricted_end(&self) -> bool {
        self.has_newline_before()
            || self.is_at_end()
            || matches!(
                self.current_kind(),
                TokenKind::Semicolon | TokenKind::RBrace
            )
    }

    pub(super) fn parse_return(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(TokenKind::Return)?;
        let argument = if self.at_restricted_end() {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };
        self.consume_semicolon();
        Ok(StmtKind::Return(argument))
    }

    pub(super) fn parse_throw(&mut self) -> Result<StmtKind, ParseError> {
        let keyword = self.expect(TokenKind::Throw)?.span;
        if self.has_newline_before() {
            return Err(ParseError::new(
                ErrorCode::E1015,
                "line break not allowed between `throw` and its operand",
                keyword,
            ));
        }
        let argument = self.parse_expression()?;
        self.consume_semicolon();
        Ok(StmtKind::Throw(Box::new(argument)))
    }

    /// `break label?` or `continue label?`.
    pub(super) fn parse_jump(&mut self) -> Result<StmtKind, ParseError> {
        let keyword = self.advance().kind;
        let label = if !self.at_restricted_end() && self.check_ident() {
            Some(self.cursor.expect_ident()?)
        } else {
            None
        };
        self.consume_semicolon();
        Ok(if keyword == TokenKind::Break {
            StmtKind::Break(label)
        } else {
            StmtKind::Continue(label)
        })
    }

    /// `for (init; test; update)`, `for (left in right)` or
    /// `for (left of right)`.
    ///
    /// Each slot of the head is tolerant: an error in one becomes an error
    /// expression and the parse resumes at the next `;` or `)`.
    pub(super) fn parse_for(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(TokenKind::For)?;
        let open = self.expect(TokenKind::LParen)?.span;
        let init = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.for_slot(Self::parse_for_init, |span| {
                ForInit::Expr(Box::new(Expr::error(span)))
            }))
        };

        if let Some(init) = init {
            if matches!(self.current_kind(), TokenKind::In | TokenKind::Of) {
                return self.parse_for_in_of(open, init);
            }
            match &init {
                ForInit::Var(decl) => self.check_var_initializers(decl),
                ForInit::Expr(expr) => self.report_cover_initialized(expr),
            }
            return self.parse_for_classic(open, Some(init));
        }
        self.parse_for_classic(open, None)
    }

    fn parse_for_init(&mut self) -> Result<ForInit, ParseError> {
        let declaration = match self.current_kind() {
            TokenKind::Var | TokenKind::Const => true,
            TokenKind::Let => {
                self.peek_kind(1).is_identifier_like()
                    || matches!(self.peek_kind(1), TokenKind::LBracket | TokenKind::LBrace)
            }
            _ => false,
        };
        if declaration {
            let decl = self.with_context(ParseContext::NO_IN, Self::parse_var_decl)?;
            return Ok(ForInit::Var(decl));
        }
        let expr = self.with_context(FOR_INIT, Self::parse_expression)?;
        Ok(ForInit::Expr(Box::new(expr)))
    }

    fn parse_for_classic(
        &mut self,
        open: Span,
        init: Option<ForInit>,
    ) -> Result<StmtKind, ParseError> {
        self.expect_for_separator();
        let test = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(Box::new(self.for_slot(Self::parse_expression, Expr::error)))
        };
        self.expect_for_separator();
        let update = if self.check(TokenKind::RParen) {
            None
        } else {
            Some(Box::new(self.for_slot(Self::parse_expression, Expr::error)))
        };
        self.finish_for_head(open)?;
        let body = self.parse_statement()?;
        Ok(StmtKind::For {
            init,
            test,
            update,
            body: Box::new(body),
        })
    }

    fn parse_for_in_of(&mut self, open: Span, init: ForInit) -> Result<StmtKind, ParseError> {
        let of = self.advance().kind == TokenKind::Of;
        let left = match init {
            ForInit::Var(decl) => {
                self.check_for_binding(&decl);
                ForHead::Var(decl)
            }
            ForInit::Expr(expr) => {
                let span = expr.span;
                let pattern = if expr.is_error() {
                    Pattern::new(PatternKind::Error, span)
                } else {
                    self.expr_to_pattern(*expr, Target::Assignment)
                        .unwrap_or_else(|error| {
                            self.record(error);
                            Pattern::new(PatternKind::Error, span)
                        })
                };
                ForHead::Pattern(pattern)
            }
        };
        let right = if of {
            self.for_slot(Self::parse_assignment, Expr::error)
        } else {
            self.for_slot(Self::parse_expression, Expr::error)
        };
        self.finish_for_head(open)?;
        let body = Box::new(self.parse_statement()?);
        let right = Box::new(right);
        Ok(if of {
            StmtKind::ForOf { left, right, body }
        } else {
            StmtKind::ForIn { left, right, body }
        })
    }

    /// The declaration of a `for-in`/`for-of` head binds exactly one name
    /// or pattern, without an initializer.
    fn check_for_binding(&mut self, decl: &VarDecl) {
        if decl.declarators.len() != 1 {
            self.record(ParseError::new(
                ErrorCode::E1001,
                "only a single declaration is allowed in a `for-in` or `for-of` head",
                decl.span,
            ));
        }
        for declarator in &decl.declarators {
            if let Some(init) = &declarator.init {
                self.record(ParseError::new(
                    ErrorCode::E1001,
                    "initializer not allowed in a `for-in` or `for-of` head",
                    init.span,
                ));
            }
        }
    }

    /// One slot of a `for` head; on error, an error node up to the next `;`
    /// or `)`.
    fn for_slot<T>(
        &mut self,
        slot: impl FnOnce(&mut Self) -> Result<T, ParseError>,
        placeholder: impl FnOnce(Span) -> T,
    ) -> T {
        let start_pos = self.cursor.position();
        let start = self.current_span();
        match slot(self) {
            Ok(value) => value,
            Err(error) => {
                self.record(error);
                synchronize(&mut self.cursor, FOR_SLOT_FOLLOW);
                placeholder(self.error_span(start_pos, start))
            }
        }
    }

    /// `)` after the last slot. Tokens the slot left behind are reported
    /// and skipped.
    fn finish_for_head(&mut self, open: Span) -> Result<(), ParseError> {
        if !self.check(TokenKind::RParen) && !self.is_at_end() {
            self.record(ParseError::unexpected(
                "`)`",
                self.current_kind(),
                self.current_span(),
            ));
            synchronize(&mut self.cursor, FOR_HEAD_CLOSE);
        }
        self.expect_closing(TokenKind::RParen, open)
    }

    /// `;` between slots. A missing one is reported and the rest of the
    /// slot skipped.
    fn expect_for_separator(&mut self) {
        if self.eat(TokenKind::Semicolon) {
            return;
        }
        self.record(ParseError::unexpected(
            "`;`",
            self.current_kind(),
            self.current_span(),
        ));
        if synchronize(&mut self.cursor, FOR_SLOT_FOLLOW) {
            self.eat(TokenKind::Semicolon);
        }
    }
}

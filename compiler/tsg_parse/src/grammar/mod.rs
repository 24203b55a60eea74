//! Grammar productions.
//!
//! Each module extends `Parser` with the methods for one family of
//! productions:
//!
//! - [`expr`]: precedence climbing, unary and postfix operators, primaries
//! - [`cover`]: the parenthesized cover shared by arrows and grouping
//! - [`pattern`]: binding patterns and literal-to-pattern reclassification
//! - [`stmt`]: statements, variable declarations and the `for` family
//! - [`ty`]: type expressions, type parameters and object-type members
//! - [`item`]: functions, classes, interfaces, enums, namespaces, modules
//!   and the ambient declaration family
//!
//! Helpers shared by all of them live here: comma-separated lists with
//! per-element recovery, property names and statement termination.

mod cover;
mod expr;
mod item;
mod pattern;
mod stmt;
mod ty;

use tracing::debug;
use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::{PropertyName, PropertyNameKind, SourceFile, Stmt, StmtKind};
use tsg_ir::{Span, TokenKind};

use crate::error::quoted;
use crate::recovery::{synchronize, synchronize_statement, TokenSet};
use crate::{ParseError, Parser};

/// Whether a comma may follow the last element of a list.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Trailing {
    /// Always accepted (array and object literals, enums).
    Allowed,
    /// Governed by `ParseOptions::trailing_commas`.
    Configurable,
}

impl Parser<'_> {
    pub(crate) fn parse_source_file(&mut self) -> SourceFile {
        let start = self.current_span();
        let items = self.parse_statement_list(TokenKind::Eof);
        SourceFile {
            kind: self.options.source_kind,
            goal: self.options.goal,
            items,
            span: start.merge(self.current_span()),
        }
    }

    /// Statements up to `close` (not consumed) or end of input.
    ///
    /// This is where fatal errors are caught: a statement that fails is
    /// replaced by an error node and the parser skips to the next
    /// statement boundary of this list.
    pub(crate) fn parse_statement_list(&mut self, close: TokenKind) -> Vec<Stmt> {
        self.parse_statements_until(TokenSet::single(close))
    }

    /// Statements up to any token of `stop`. Switch cases end at `case`,
    /// `default` or `}`.
    pub(crate) fn parse_statements_until(&mut self, stop: TokenSet) -> Vec<Stmt> {
        let mut stmts = Vec::new();
        while !stop.contains(self.current_kind()) && !self.is_at_end() {
            let start_pos = self.cursor.position();
            let start = self.current_span();
            match self.parse_statement_list_item() {
                Ok(stmt) => stmts.push(stmt),
                Err(error) => {
                    self.record(error);
                    synchronize_statement(&mut self.cursor);
                    if self.cursor.position() == start_pos {
                        self.advance();
                    }
                    debug!(skipped_to = self.current_span().start, "statement abandoned");
                    let span = self.error_span(start_pos, start);
                    stmts.push(Stmt::new(StmtKind::Error, span));
                }
            }
        }
        stmts
    }

    /// Span of whatever was consumed since `start_pos`, or an empty span at
    /// `start` if nothing was.
    pub(crate) fn error_span(&self, start_pos: usize, start: Span) -> Span {
        if self.cursor.position() == start_pos {
            Span::point(start.start)
        } else {
            self.span_from(start)
        }
    }

    /// Comma-separated elements up to and including `close`; the opener has
    /// been consumed.
    ///
    /// An element that fails is recorded, the parser skips to the next
    /// token in `follow`, and `placeholder` stands in for the element.
    fn comma_list<T>(
        &mut self,
        open_span: Span,
        close: TokenKind,
        follow: TokenSet,
        trailing: Trailing,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
        mut placeholder: impl FnMut(Span) -> T,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = Vec::new();
        while !self.check(close) && !self.is_at_end() {
            let start_pos = self.cursor.position();
            let start = self.current_span();
            match item(self) {
                Ok(value) => items.push(value),
                Err(error) => {
                    self.record(error);
                    synchronize(&mut self.cursor, follow);
                    items.push(placeholder(self.error_span(start_pos, start)));
                }
            }

            if !self.check(TokenKind::Comma) && !self.check(close) {
                if self.is_at_end() {
                    break;
                }
                self.record(ParseError::unexpected(
                    &format!("`,` or {}", quoted(close)),
                    self.current_kind(),
                    self.current_span(),
                ));
                if !synchronize(&mut self.cursor, follow) {
                    break;
                }
            }
            if !self.eat(TokenKind::Comma) {
                break;
            }
            if self.check(close) && trailing == Trailing::Configurable && !self.options.trailing_commas
            {
                self.record(ParseError::new(
                    ErrorCode::E1013,
                    "trailing comma not allowed",
                    self.previous_span(),
                ));
            }
        }
        self.expect_closing(close, open_span)?;
        Ok(items)
    }

    /// Consume the closer of a bracketed group opened at `open_span`.
    pub(crate) fn expect_closing(
        &mut self,
        close: TokenKind,
        open_span: Span,
    ) -> Result<(), ParseError> {
        if self.eat(close) {
            return Ok(());
        }
        if self.is_at_end() {
            return Err(ParseError::new(
                ErrorCode::E1003,
                format!("unclosed delimiter, expected {}", quoted(close)),
                open_span,
            )
            .with_context("opened here"));
        }
        Err(ParseError::unexpected(
            &quoted(close),
            self.current_kind(),
            self.current_span(),
        ))
    }

    /// End a statement: `;`, or an inserted one before `}`, end of input or
    /// a line break.
    pub(crate) fn consume_semicolon(&mut self) {
        if self.eat(TokenKind::Semicolon)
            || self.check(TokenKind::RBrace)
            || self.is_at_end()
            || self.has_newline_before()
        {
            return;
        }
        self.record(ParseError::new(
            ErrorCode::E1009,
            format!("expected `;`, found {}", quoted(self.current_kind())),
            self.current_span(),
        ));
    }

    /// Identifier (any keyword included), string or number key.
    pub(crate) fn parse_property_name(&mut self) -> Result<PropertyName, ParseError> {
        let kind = match self.current_kind() {
            TokenKind::String => PropertyNameKind::String,
            TokenKind::Number => PropertyNameKind::Number,
            kind if kind.is_word() => PropertyNameKind::Ident,
            found => {
                return Err(ParseError::unexpected(
                    "property name",
                    found,
                    self.current_span(),
                ));
            }
        };
        let token = self.advance();
        Ok(PropertyName {
            kind,
            name: token.value,
            span: token.span,
        })
    }
}

#[cfg(test)]
mod tests;

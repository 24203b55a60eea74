//! Statements and declarations in statement position.
//!
//! [`Parser::parse_statement_list_item`] is the entry for every statement
//! list (source file, block, function body, namespace, case clause). It
//! routes declaration keywords to `item` and everything else to
//! [`Parser::parse_statement`]. In a declaration context the declaration
//! keywords route to the ambient family instead, and an executable
//! statement is reported but still parsed.

mod control;

use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::{Block, PatternKind, Stmt, StmtKind, VarDecl, VarDeclarator, VarKind};
use tsg_ir::TokenKind;

use crate::context::ParseContext;
use crate::grammar_table::conflict::{AmbiguitySite, Production};
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_statement_list_item(&mut self) -> Result<Stmt, ParseError> {
        self.nested(|p| {
            if p.context.in_ambient() && p.is_ambient_declaration_start() {
                return p.parse_implicit_ambient();
            }
            let start = p.current_span();
            let kind = match p.current_kind() {
                TokenKind::Function => return p.parse_function_declaration(),
                TokenKind::Import => return p.parse_import(),
                TokenKind::Export => return p.parse_export(),
                TokenKind::Declare if p.is_declare_start() => return p.parse_declare(),
                TokenKind::Class => StmtKind::Class(Box::new(p.parse_class(true)?)),
                TokenKind::Enum => StmtKind::Enum(Box::new(p.parse_enum()?)),
                TokenKind::Const if p.peek_kind(1) == TokenKind::Enum => {
                    StmtKind::Enum(Box::new(p.parse_enum()?))
                }
                TokenKind::Interface if p.peek_kind(1).is_identifier_like() => {
                    StmtKind::Interface(Box::new(p.parse_interface()?))
                }
                TokenKind::Type
                    if p.peek_kind(1).is_identifier_like()
                        && matches!(p.peek_kind(2), TokenKind::Eq | TokenKind::Lt) =>
                {
                    StmtKind::TypeAlias(Box::new(p.parse_type_alias()?))
                }
                TokenKind::Namespace | TokenKind::Module if p.is_namespace_start() => {
                    StmtKind::Namespace(Box::new(p.parse_namespace()?))
                }
                _ if p.context.in_ambient() => {
                    let stmt = p.without_context(ParseContext::IN_AMBIENT, Self::parse_statement)?;
                    if is_executable(&stmt.kind) {
                        p.record(ParseError::new(
                            ErrorCode::E1012,
                            "statement not allowed in an ambient context",
                            stmt.span,
                        ));
                    }
                    return Ok(stmt);
                }
                _ => return p.parse_statement(),
            };
            Ok(Stmt::new(kind, p.span_from(start)))
        })
    }

    /// `declare` followed on the same line by a declaration keyword.
    fn is_declare_start(&self) -> bool {
        !self.cursor.peek_flags(1).has_newline_before()
            && matches!(
                self.peek_kind(1),
                TokenKind::Var
                    | TokenKind::Let
                    | TokenKind::Const
                    | TokenKind::Function
                    | TokenKind::Class
                    | TokenKind::Enum
                    | TokenKind::Namespace
                    | TokenKind::Module
                    | TokenKind::Interface
                    | TokenKind::Type
            )
    }

    /// A statement proper: no declarations beyond variable statements.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        self.nested(|p| {
            let start = p.current_span();
            let kind = match p.current_kind() {
                TokenKind::LBrace => StmtKind::Block(p.parse_block()?),
                TokenKind::Semicolon => {
                    p.advance();
                    StmtKind::Empty
                }
                TokenKind::Var | TokenKind::Const => p.parse_variable_statement()?,
                TokenKind::Let
                    if p.peek_kind(1).is_identifier_like()
                        || matches!(p.peek_kind(1), TokenKind::LBracket | TokenKind::LBrace) =>
                {
                    p.parse_variable_statement()?
                }
                TokenKind::If => p.parse_if()?,
                TokenKind::For => p.parse_for()?,
                TokenKind::While => p.parse_while()?,
                TokenKind::Do => p.parse_do_while()?,
                TokenKind::Switch => p.parse_switch()?,
                TokenKind::Try => p.parse_try()?,
                TokenKind::With => p.parse_with()?,
                TokenKind::Debugger => {
                    p.advance();
                    p.consume_semicolon();
                    StmtKind::Debugger
                }
                TokenKind::Return => p.parse_return()?,
                TokenKind::Throw => p.parse_throw()?,
                TokenKind::Break | TokenKind::Continue => p.parse_jump()?,
                _ if p.check_ident() && p.peek_kind(1) == TokenKind::Colon => p.parse_labeled()?,
                _ => {
                    let expr = p.parse_expression()?;
                    p.consume_semicolon();
                    StmtKind::Expr(Box::new(expr))
                }
            };
            Ok(Stmt::new(kind, p.span_from(start)))
        })
    }

    /// `{ statements }` at a `{`.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let open = self.expect(TokenKind::LBrace)?.span;
        let stmts = self.parse_statement_list(TokenKind::RBrace);
        self.expect_closing(TokenKind::RBrace, open)?;
        Ok(Block {
            stmts,
            span: self.span_from(open),
        })
    }

    fn parse_variable_statement(&mut self) -> Result<StmtKind, ParseError> {
        let decl = self.parse_var_decl()?;
        self.check_var_initializers(&decl);
        self.consume_semicolon();
        Ok(StmtKind::Var(decl))
    }

    /// `var`/`let`/`const` and its declarators. Initializer requirements
    /// depend on the position and are checked by the caller.
    pub(crate) fn parse_var_decl(&mut self) -> Result<VarDecl, ParseError> {
        let start = self.current_span();
        let kind = match self.advance().kind {
            TokenKind::Var => VarKind::Var,
            TokenKind::Let => VarKind::Let,
            _ => VarKind::Const,
        };
        let mut declarators = vec![self.parse_var_declarator()?];
        while self.eat(TokenKind::Comma) {
            declarators.push(self.parse_var_declarator()?);
        }
        Ok(VarDecl {
            kind,
            declarators,
            span: self.span_from(start),
        })
    }

    fn parse_var_declarator(&mut self) -> Result<VarDeclarator, ParseError> {
        let start = self.current_span();
        let pattern = self.parse_binding_pattern()?;
        let ty = self.parse_type_annotation_opt()?;
        let init = if self.eat(TokenKind::Eq) {
            Some(self.parse_assignment()?)
        } else {
            None
        };
        Ok(VarDeclarator {
            pattern,
            ty,
            init,
            span: self.span_from(start),
        })
    }

    /// Outside a `for-in`/`for-of` head, `const` and destructuring
    /// declarators need an initializer.
    pub(crate) fn check_var_initializers(&mut self, decl: &VarDecl) {
        for declarator in decl.declarators.iter().filter(|d| d.init.is_none()) {
            if !matches!(declarator.pattern.kind, PatternKind::Ident(_)) {
                self.record(ParseError::new(
                    ErrorCode::E1008,
                    "destructuring declaration must have an initializer",
                    declarator.span,
                ));
            } else if decl.kind == VarKind::Const {
                self.record(ParseError::new(
                    ErrorCode::E1001,
                    "`const` declaration must have an initializer",
                    declarator.span,
                ));
            }
        }
    }

    fn parse_labeled(&mut self) -> Result<StmtKind, ParseError> {
        let label = self.cursor.expect_ident()?;
        self.expect(TokenKind::Colon)?;
        self.resolve(AmbiguitySite::Label, Production::LabelIdentifier);
        let body = self.parse_statement()?;
        match body.kind {
            StmtKind::For { .. }
            | StmtKind::ForIn { .. }
            | StmtKind::ForOf { .. }
            | StmtKind::While { .. }
            | StmtKind::DoWhile { .. } => {
                self.resolve(AmbiguitySite::LoopStatement, Production::IterationStatement);
            }
            StmtKind::Switch { .. } => {
                self.resolve(AmbiguitySite::LoopStatement, Production::BreakableStatement);
            }
            _ => {}
        }
        Ok(StmtKind::Labeled {
            label,
            body: Box::new(body),
        })
    }
}

/// Statements with run-time behaviour, which a declaration context does
/// not admit.
fn is_executable(kind: &StmtKind) -> bool {
    matches!(
        kind,
        StmtKind::Block(_)
            | StmtKind::Expr(_)
            | StmtKind::Var(_)
            | StmtKind::If { .. }
            | StmtKind::For { .. }
            | StmtKind::ForIn { .. }
            | StmtKind::ForOf { .. }
            | StmtKind::While { .. }
            | StmtKind::DoWhile { .. }
            | StmtKind::Switch { .. }
            | StmtKind::Try { .. }
            | StmtKind::Labeled { .. }
            | StmtKind::With { .. }
            | StmtKind::Debugger
            | StmtKind::Return(_)
            | StmtKind::Throw(_)
            | StmtKind::Break(_)
            | StmtKind::Continue(_)
    )
}

#[cfg(test)]
mod tests;

//! `import` and `export`.
//!
//! The `=` forms (`import a = require("m")`, `import a = A.B`, `export = a`)
//! are valid under either goal. The ES forms are module items: under the
//! script goal they are reported, except inside a namespace or ambient
//! module body where `export` marks a member.

use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::{
    Export, ExportDefault, Ident, ImportClause, ImportDecl, ImportSpecifier, Stmt, StmtKind,
};
use tsg_ir::{Name, Span, TokenKind};

use crate::grammar::Trailing;
use crate::recovery::LIST_FOLLOW;
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_import(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(TokenKind::Import)?.span;
        if self.check_ident() && self.peek_kind(1) == TokenKind::Eq {
            let name = self.cursor.expect_ident()?;
            self.advance();
            let kind = if self.check(TokenKind::Require) && self.peek_kind(1) == TokenKind::LParen
            {
                self.advance();
                let open = self.advance().span;
                let module = self.expect(TokenKind::String)?.value;
                self.expect_closing(TokenKind::RParen, open)?;
                StmtKind::ImportRequire { name, module }
            } else {
                StmtKind::ImportAlias {
                    name,
                    target: self.parse_entity_name()?,
                }
            };
            self.consume_semicolon();
            return Ok(Stmt::new(kind, self.span_from(start)));
        }

        let clause = if self.check(TokenKind::String) {
            None
        } else {
            let clause = self.parse_import_clause()?;
            self.expect(TokenKind::From)?;
            Some(clause)
        };
        let source = self.expect(TokenKind::String)?.value;
        self.consume_semicolon();
        let span = self.span_from(start);
        self.check_module_item("import", span);
        Ok(Stmt::new(
            StmtKind::Import(Box::new(ImportDecl {
                clause,
                source,
                span,
            })),
            span,
        ))
    }

    /// `a`, `a, * as ns`, `a, { x }`, `* as ns` or `{ x, y as z }`.
    fn parse_import_clause(&mut self) -> Result<ImportClause, ParseError> {
        let mut clause = ImportClause {
            default: None,
            namespace: None,
            named: None,
        };
        if self.check_ident() {
            clause.default = Some(self.cursor.expect_ident()?);
            if !self.eat(TokenKind::Comma) {
                return Ok(clause);
            }
        }
        if self.eat(TokenKind::Star) {
            self.expect(TokenKind::As)?;
            clause.namespace = Some(self.cursor.expect_ident()?);
        } else if self.check(TokenKind::LBrace) {
            clause.named = Some(self.parse_specifiers()?);
        } else {
            return Err(ParseError::unexpected(
                "`*` or `{`",
                self.current_kind(),
                self.current_span(),
            ));
        }
        Ok(clause)
    }

    fn parse_specifiers(&mut self) -> Result<Vec<ImportSpecifier>, ParseError> {
        let open = self.expect(TokenKind::LBrace)?.span;
        self.comma_list(
            open,
            TokenKind::RBrace,
            LIST_FOLLOW,
            Trailing::Allowed,
            Self::parse_specifier,
            |span| ImportSpecifier {
                name: Ident::new(Name::EMPTY, span),
                alias: None,
                span,
            },
        )
    }

    fn parse_specifier(&mut self) -> Result<ImportSpecifier, ParseError> {
        let name = self.expect_word()?;
        let alias = if self.eat(TokenKind::As) {
            Some(self.expect_word()?)
        } else {
            None
        };
        Ok(ImportSpecifier {
            name,
            alias,
            span: self.span_from(name.span),
        })
    }

    /// Identifier or any keyword, as in `export { x as default }`.
    fn expect_word(&mut self) -> Result<Ident, ParseError> {
        if self.current_kind().is_word() {
            let token = self.advance();
            Ok(Ident::new(token.value, token.span))
        } else {
            self.cursor.expect_ident()
        }
    }

    pub(crate) fn parse_export(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(TokenKind::Export)?.span;
        let export = match self.current_kind() {
            TokenKind::Eq => {
                self.advance();
                let name = self.cursor.expect_ident()?;
                self.consume_semicolon();
                Export::Assignment(name)
            }
            TokenKind::Default => {
                self.advance();
                Export::Default(self.parse_export_default()?)
            }
            TokenKind::Star => {
                self.advance();
                self.expect(TokenKind::From)?;
                let source = self.expect(TokenKind::String)?.value;
                self.consume_semicolon();
                Export::All { source }
            }
            TokenKind::LBrace => {
                let specifiers = self.parse_specifiers()?;
                let source = if self.eat(TokenKind::From) {
                    Some(self.expect(TokenKind::String)?.value)
                } else {
                    None
                };
                self.consume_semicolon();
                Export::Named { specifiers, source }
            }
            _ => {
                let decl = self.parse_statement_list_item()?;
                if !is_exportable(&decl.kind) {
                    self.record(ParseError::new(
                        ErrorCode::E1001,
                        "expected a declaration after `export`",
                        decl.span,
                    ));
                }
                Export::Decl(decl)
            }
        };
        let span = self.span_from(start);
        if !matches!(export, Export::Assignment(_)) {
            self.check_module_item("export", span);
        }
        Ok(Stmt::new(StmtKind::Export(Box::new(export)), span))
    }

    fn parse_export_default(&mut self) -> Result<ExportDefault, ParseError> {
        let ambient = self.context.in_ambient();
        match self.current_kind() {
            TokenKind::Function if ambient => {
                self.parse_ambient_function().map(ExportDefault::AmbientFunction)
            }
            TokenKind::Class if ambient => self
                .parse_ambient_class()
                .map(|class| ExportDefault::AmbientClass(Box::new(class))),
            TokenKind::Function => self
                .parse_function_expression()
                .map(|function| ExportDefault::Function(Box::new(function))),
            TokenKind::Class => {
                let class = self.parse_class(false)?;
                Ok(ExportDefault::Class(Box::new(class)))
            }
            _ => {
                let expr = self.parse_assignment()?;
                self.consume_semicolon();
                Ok(ExportDefault::Expr(Box::new(expr)))
            }
        }
    }

    /// Report an ES module item under the script goal, outside a namespace
    /// or ambient module body.
    fn check_module_item(&mut self, keyword: &str, span: Span) {
        if self.options.is_module() || self.context.in_namespace() {
            return;
        }
        self.record(ParseError::new(
            ErrorCode::E1012,
            format!("`{keyword}` declarations are only allowed in a module"),
            span,
        ));
    }
}

fn is_exportable(kind: &StmtKind) -> bool {
    matches!(
        kind,
        StmtKind::Var(_)
            | StmtKind::Function(_)
            | StmtKind::Class(_)
            | StmtKind::Interface(_)
            | StmtKind::TypeAlias(_)
            | StmtKind::Enum(_)
            | StmtKind::Namespace(_)
            | StmtKind::Ambient(_)
            | StmtKind::ImportAlias { .. }
    )
}

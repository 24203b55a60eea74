//! Ambient declarations.
//!
//! `declare` and every declaration of a `.d.ts` source parse into the
//! `Ambient*` node family, which has no place to put a body or an
//! initializer. Where one is written anyway it is parsed, reported and
//! dropped, so the rest of the declaration survives.

use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::{
    AmbientBinding, AmbientClass, AmbientClassMember, AmbientDecl, AmbientElementKind,
    AmbientFunction, AmbientKind, AmbientMemberKind, AmbientModuleDecl, AmbientNamespace,
    AmbientNamespaceElement, Modifiers, Stmt, StmtKind, VarKind,
};
use tsg_ir::TokenKind;

use crate::context::ParseContext;
use crate::recovery::synchronize_statement;
use crate::{ParseError, Parser};

/// Context of a `declare module "m"` body.
const AMBIENT_MODULE: ParseContext = ParseContext::IN_AMBIENT.with(ParseContext::IN_NAMESPACE);

impl Parser<'_> {
    /// `declare ...` at a `declare`.
    pub(crate) fn parse_declare(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(TokenKind::Declare)?.span;
        let kind = match self.current_kind() {
            TokenKind::Module if self.peek_kind(1) == TokenKind::String => {
                self.advance();
                let name = self.advance().value;
                let open = self.expect(TokenKind::LBrace)?.span;
                let body = self.with_context(AMBIENT_MODULE, |p| {
                    p.parse_statement_list(TokenKind::RBrace)
                });
                self.expect_closing(TokenKind::RBrace, open)?;
                let span = self.span_from(start);
                StmtKind::AmbientModule(Box::new(AmbientModuleDecl { name, body, span }))
            }
            TokenKind::Interface => StmtKind::Interface(Box::new(self.parse_interface()?)),
            TokenKind::Type => StmtKind::TypeAlias(Box::new(self.parse_type_alias()?)),
            _ => {
                let kind = self.parse_ambient_kind()?;
                StmtKind::Ambient(Box::new(AmbientDecl {
                    kind,
                    span: self.span_from(start),
                }))
            }
        };
        Ok(Stmt::new(kind, self.span_from(start)))
    }

    /// Declaration keywords that are implicitly ambient in a declaration
    /// context.
    pub(crate) fn is_ambient_declaration_start(&self) -> bool {
        match self.current_kind() {
            TokenKind::Function
            | TokenKind::Class
            | TokenKind::Var
            | TokenKind::Const
            | TokenKind::Enum => true,
            TokenKind::Let => self.peek_kind(1).is_identifier_like(),
            TokenKind::Namespace | TokenKind::Module => self.is_namespace_start(),
            _ => false,
        }
    }

    /// A declaration in a declaration context, without `declare`.
    pub(crate) fn parse_implicit_ambient(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        let kind = self.parse_ambient_kind()?;
        let span = self.span_from(start);
        Ok(Stmt::new(
            StmtKind::Ambient(Box::new(AmbientDecl { kind, span })),
            span,
        ))
    }

    fn parse_ambient_kind(&mut self) -> Result<AmbientKind, ParseError> {
        self.nested(|p| match p.current_kind() {
            TokenKind::Var | TokenKind::Let => p.parse_ambient_var(),
            TokenKind::Const if p.peek_kind(1) == TokenKind::Enum => {
                Ok(AmbientKind::Enum(Box::new(p.parse_enum()?)))
            }
            TokenKind::Const => p.parse_ambient_var(),
            TokenKind::Enum => Ok(AmbientKind::Enum(Box::new(p.parse_enum()?))),
            TokenKind::Function => p.parse_ambient_function().map(AmbientKind::Function),
            TokenKind::Class => p
                .parse_ambient_class()
                .map(|class| AmbientKind::Class(Box::new(class))),
            TokenKind::Namespace | TokenKind::Module => p
                .parse_ambient_namespace()
                .map(|namespace| AmbientKind::Namespace(Box::new(namespace))),
            found => Err(ParseError::unexpected(
                "ambient declaration",
                found,
                p.current_span(),
            )),
        })
    }

    fn parse_ambient_var(&mut self) -> Result<AmbientKind, ParseError> {
        let kind = match self.advance().kind {
            TokenKind::Var => VarKind::Var,
            TokenKind::Let => VarKind::Let,
            _ => VarKind::Const,
        };
        let mut bindings = Vec::new();
        loop {
            let name = self.cursor.expect_ident()?;
            let ty = self.parse_type_annotation_opt()?;
            if self.check(TokenKind::Eq) {
                let start = self.advance().span;
                self.parse_assignment()?;
                self.record(ParseError::new(
                    ErrorCode::E1011,
                    "initializer not allowed in an ambient context",
                    self.span_from(start),
                ));
            }
            bindings.push(AmbientBinding {
                name,
                ty,
                span: self.span_from(name.span),
            });
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.consume_semicolon();
        Ok(AmbientKind::Var { kind, bindings })
    }

    /// `function name<T>(params): R;`
    pub(crate) fn parse_ambient_function(&mut self) -> Result<AmbientFunction, ParseError> {
        let start = self.expect(TokenKind::Function)?.span;
        let name = self.cursor.expect_ident()?;
        let signature = self.parse_call_signature()?;
        self.end_signature()?;
        Ok(AmbientFunction {
            name,
            signature,
            span: self.span_from(start),
        })
    }

    /// End of a signature: `;` or its inserted form. A body is parsed,
    /// reported and dropped.
    fn end_signature(&mut self) -> Result<(), ParseError> {
        if !self.check(TokenKind::LBrace) {
            self.consume_semicolon();
            return Ok(());
        }
        let start = self.current_span();
        self.parse_function_body(false)?;
        self.record(ParseError::new(
            ErrorCode::E1011,
            "implementation not allowed in an ambient context",
            self.span_from(start),
        ));
        Ok(())
    }

    pub(crate) fn parse_ambient_class(&mut self) -> Result<AmbientClass, ParseError> {
        let start = self.expect(TokenKind::Class)?.span;
        let name = self.cursor.expect_ident()?;
        let type_params = self.parse_type_parameters_opt()?;
        let (extends, implements) = self.parse_class_heritage()?;
        let members = self.member_list(false, Self::parse_ambient_class_member, |span| {
            AmbientClassMember {
                modifiers: Modifiers::empty(),
                kind: AmbientMemberKind::Error,
                span,
            }
        })?;
        Ok(AmbientClass {
            name,
            type_params,
            extends,
            implements,
            members,
            span: self.span_from(start),
        })
    }

    fn parse_ambient_class_member(&mut self) -> Result<AmbientClassMember, ParseError> {
        let start = self.current_span();
        let modifiers = self.parse_member_modifiers();
        let kind = if self.is_constructor_start() {
            self.advance();
            let params = self.parse_parameter_list()?;
            self.end_signature()?;
            AmbientMemberKind::Constructor { params }
        } else if self.is_index_signature_start() {
            let index = self.parse_index_signature()?;
            self.consume_semicolon();
            AmbientMemberKind::Index(index)
        } else if self.is_accessor_start() {
            if self.eat(TokenKind::Get) {
                self.parse_getter_rest()?;
            } else {
                self.expect(TokenKind::Set)?;
                self.parse_setter_rest()?;
            }
            self.record(ParseError::new(
                ErrorCode::E1011,
                "accessors not allowed in an ambient context",
                self.span_from(start),
            ));
            AmbientMemberKind::Error
        } else {
            let key = self.parse_property_name()?;
            let optional = self.eat(TokenKind::Question);
            if matches!(self.current_kind(), TokenKind::LParen | TokenKind::Lt) {
                let signature = self.parse_call_signature()?;
                self.end_signature()?;
                AmbientMemberKind::Method {
                    key,
                    optional,
                    signature,
                }
            } else {
                let ty = self.parse_type_annotation_opt()?;
                if self.check(TokenKind::Eq) {
                    let init = self.advance().span;
                    self.parse_assignment()?;
                    self.record(ParseError::new(
                        ErrorCode::E1011,
                        "initializer not allowed in an ambient context",
                        self.span_from(init),
                    ));
                }
                self.consume_semicolon();
                AmbientMemberKind::Property { key, optional, ty }
            }
        };
        Ok(AmbientClassMember {
            modifiers,
            kind,
            span: self.span_from(start),
        })
    }

    fn parse_ambient_namespace(&mut self) -> Result<AmbientNamespace, ParseError> {
        let start = self.advance().span;
        let path = self.parse_namespace_path()?;
        let open = self.expect(TokenKind::LBrace)?.span;
        let mut elements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            let start_pos = self.cursor.position();
            let element_start = self.current_span();
            match self.parse_ambient_element() {
                Ok(element) => elements.push(element),
                Err(error) => {
                    self.record(error);
                    synchronize_statement(&mut self.cursor);
                    if self.cursor.position() == start_pos {
                        self.advance();
                    }
                    elements.push(AmbientNamespaceElement {
                        exported: false,
                        kind: AmbientElementKind::Error,
                        span: self.error_span(start_pos, element_start),
                    });
                }
            }
        }
        self.expect_closing(TokenKind::RBrace, open)?;
        Ok(AmbientNamespace {
            path,
            elements,
            span: self.span_from(start),
        })
    }

    fn parse_ambient_element(&mut self) -> Result<AmbientNamespaceElement, ParseError> {
        let start = self.current_span();
        let exported = self.eat(TokenKind::Export);
        if self.check(TokenKind::Declare) && !self.cursor.peek_flags(1).has_newline_before() {
            self.advance();
        }
        let kind = match self.current_kind() {
            TokenKind::Interface => AmbientElementKind::Interface(Box::new(self.parse_interface()?)),
            TokenKind::Type => AmbientElementKind::TypeAlias(Box::new(self.parse_type_alias()?)),
            TokenKind::Import => {
                self.advance();
                let name = self.cursor.expect_ident()?;
                self.expect(TokenKind::Eq)?;
                let target = self.parse_entity_name()?;
                self.consume_semicolon();
                AmbientElementKind::ImportAlias { name, target }
            }
            _ => AmbientElementKind::Decl(self.parse_ambient_kind()?),
        };
        Ok(AmbientNamespaceElement {
            exported,
            kind,
            span: self.span_from(start),
        })
    }
}

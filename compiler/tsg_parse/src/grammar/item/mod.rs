//! Declarations: functions, parameters, classes, interfaces, type aliases,
//! enums and namespaces.
//!
//! Imports and exports are in [`module`]; the signature-only `declare`
//! family is in [`ambient`].

mod ambient;
mod module;

use smallvec::SmallVec;
use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::{
    Block, CallSignature, Class, ClassMember, ClassMemberKind, EnumDecl, EnumMember, Function,
    Ident, InterfaceDecl, Modifiers, NamespaceDecl, Param, Pattern, PatternKind, PropertyName,
    PropertyNameKind, Stmt, StmtKind, Type, TypeAliasDecl, TypeReference,
};
use tsg_ir::{Name, Span, TokenKind};

use super::Trailing;
use crate::context::ParseContext;
use crate::grammar_table::conflict::{AmbiguitySite, Production};
use crate::recovery::LIST_FOLLOW;
use crate::{ParseError, Parser};

/// Contexts that do not reach into a parameter list.
const PARAMETER_CLEARS: ParseContext = ParseContext::NO_IN.with(ParseContext::IN_COVER);

/// Contexts that do not reach into a function body.
const BODY_CLEARS: ParseContext = PARAMETER_CLEARS
    .with(ParseContext::IN_GENERATOR)
    .with(ParseContext::IN_AMBIENT)
    .with(ParseContext::IN_NAMESPACE);

impl Parser<'_> {
    /// `( params )` at a `(`.
    pub(crate) fn parse_parameter_list(&mut self) -> Result<Vec<Param>, ParseError> {
        let open = self.expect(TokenKind::LParen)?.span;
        let params = self.without_context(PARAMETER_CLEARS, |p| {
            p.comma_list(
                open,
                TokenKind::RParen,
                LIST_FOLLOW,
                Trailing::Configurable,
                Self::parse_param,
                |span| Param {
                    modifiers: Modifiers::empty(),
                    rest: false,
                    pattern: Pattern::new(PatternKind::Error, span),
                    optional: false,
                    ty: None,
                    default: None,
                    span,
                },
            )
        })?;
        if let Some(position) = params.iter().position(|param| param.rest) {
            if position + 1 != params.len() {
                self.record(ParseError::new(
                    ErrorCode::E1006,
                    "rest parameter must be last",
                    params[position].span,
                ));
            }
        }
        Ok(params)
    }

    fn parse_param(&mut self) -> Result<Param, ParseError> {
        let start = self.current_span();
        let modifiers = match self.current_kind() {
            TokenKind::Public => Modifiers::PUBLIC,
            TokenKind::Private => Modifiers::PRIVATE,
            TokenKind::Protected => Modifiers::PROTECTED,
            _ => Modifiers::empty(),
        };
        let next = self.peek_kind(1);
        let modifiers = if !modifiers.is_empty()
            && (next.is_identifier_like() || matches!(next, TokenKind::LBrace | TokenKind::LBracket))
        {
            self.advance();
            modifiers
        } else {
            Modifiers::empty()
        };
        let rest = self.eat(TokenKind::DotDotDot);
        let pattern = self.parse_binding_pattern()?;
        let optional = self.eat(TokenKind::Question);
        let ty = self.parse_type_annotation_opt()?;
        let default = if self.eat(TokenKind::Eq) {
            let value = self.parse_assignment()?;
            if rest {
                self.record(ParseError::new(
                    ErrorCode::E1006,
                    "rest parameter cannot have a default",
                    value.span,
                ));
            }
            Some(value)
        } else {
            None
        };
        Ok(Param {
            modifiers,
            rest,
            pattern,
            optional,
            ty,
            default,
            span: self.span_from(start),
        })
    }

    /// `<T>(params): R`, the type parameters and return type optional.
    pub(crate) fn parse_call_signature(&mut self) -> Result<CallSignature, ParseError> {
        let start = self.current_span();
        let type_params = self.parse_type_parameters_opt()?;
        let params = self.parse_parameter_list()?;
        let return_type = self.parse_type_annotation_opt()?;
        Ok(CallSignature {
            type_params,
            params,
            return_type,
            span: self.span_from(start),
        })
    }

    /// Signature and body of a function whose `function` keyword and name,
    /// if any, have been consumed. Without `body_required` a missing body
    /// makes an overload signature.
    pub(crate) fn parse_function_rest(
        &mut self,
        start: Span,
        name: Option<Ident>,
        generator: bool,
        body_required: bool,
    ) -> Result<Function, ParseError> {
        let signature = if generator {
            self.with_context(ParseContext::IN_GENERATOR, Self::parse_call_signature)?
        } else {
            self.without_context(ParseContext::IN_GENERATOR, Self::parse_call_signature)?
        };
        let body = if self.check(TokenKind::LBrace) || body_required {
            Some(self.parse_function_body(generator)?)
        } else {
            self.consume_semicolon();
            None
        };
        Ok(Function {
            name,
            generator,
            signature,
            body,
            span: self.span_from(start),
        })
    }

    /// `{ statements }` of a function. Only the generator flag is carried
    /// in; everything else starts clear.
    pub(crate) fn parse_function_body(&mut self, generator: bool) -> Result<Block, ParseError> {
        self.without_context(BODY_CLEARS, |p| {
            if generator {
                p.with_context(ParseContext::IN_GENERATOR, Self::parse_block)
            } else {
                p.parse_block()
            }
        })
    }

    /// `function *? name? ...` in expression position.
    pub(crate) fn parse_function_expression(&mut self) -> Result<Function, ParseError> {
        let start = self.expect(TokenKind::Function)?.span;
        let generator = self.eat(TokenKind::Star);
        let name = if self.check_ident() {
            Some(self.cursor.expect_ident()?)
        } else {
            None
        };
        self.parse_function_rest(start, name, generator, true)
    }

    /// `function` at the start of a statement is always a declaration.
    pub(crate) fn parse_function_declaration(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(TokenKind::Function)?.span;
        let generator = self.eat(TokenKind::Star);
        if generator {
            self.resolve(AmbiguitySite::GeneratorStatement, Production::HoistableDeclaration);
        } else {
            self.resolve(AmbiguitySite::FunctionStatement, Production::FunctionDeclaration);
        }
        let name = self.cursor.expect_ident()?;
        let function = self.parse_function_rest(start, Some(name), generator, false)?;
        Ok(Stmt::new(
            StmtKind::Function(Box::new(function)),
            self.span_from(start),
        ))
    }

    /// `class Name<T> extends B implements I, J { members }`.
    pub(crate) fn parse_class(&mut self, name_required: bool) -> Result<Class, ParseError> {
        let start = self.expect(TokenKind::Class)?.span;
        let name = if name_required
            || (self.check_ident() && !self.check(TokenKind::Implements))
        {
            Some(self.cursor.expect_ident()?)
        } else {
            None
        };
        let type_params = self.parse_type_parameters_opt()?;
        let (extends, implements) = self.parse_class_heritage()?;
        let members = self.member_list(false, Self::parse_class_member, |span| ClassMember {
            modifiers: Modifiers::empty(),
            kind: ClassMemberKind::Error,
            span,
        })?;
        Ok(Class {
            name,
            type_params,
            extends,
            implements,
            members,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_class_heritage(
        &mut self,
    ) -> Result<(Option<TypeReference>, Vec<TypeReference>), ParseError> {
        let extends = if self.eat(TokenKind::Extends) {
            Some(self.parse_type_reference()?)
        } else {
            None
        };
        let implements = if self.eat(TokenKind::Implements) {
            self.parse_type_reference_list()?
        } else {
            Vec::new()
        };
        Ok((extends, implements))
    }

    fn parse_type_reference_list(&mut self) -> Result<Vec<TypeReference>, ParseError> {
        let mut refs = vec![self.parse_type_reference()?];
        while self.eat(TokenKind::Comma) {
            refs.push(self.parse_type_reference()?);
        }
        Ok(refs)
    }

    /// Modifiers in front of a class member. A modifier keyword not
    /// followed by the rest of a member is the member's name: `static()`.
    pub(crate) fn parse_member_modifiers(&mut self) -> Modifiers {
        let mut modifiers = Modifiers::empty();
        loop {
            let flag = match self.current_kind() {
                TokenKind::Public => Modifiers::PUBLIC,
                TokenKind::Private => Modifiers::PRIVATE,
                TokenKind::Protected => Modifiers::PROTECTED,
                TokenKind::Static => Modifiers::STATIC,
                _ => break,
            };
            let next = self.peek_kind(1);
            if !(next.is_word()
                || matches!(
                    next,
                    TokenKind::String | TokenKind::Number | TokenKind::LBracket | TokenKind::Star
                ))
            {
                break;
            }
            self.advance();
            modifiers |= flag;
        }
        modifiers
    }

    /// `constructor(`
    pub(crate) fn is_constructor_start(&self) -> bool {
        self.check_ident()
            && self.cursor.current_text() == "constructor"
            && self.peek_kind(1) == TokenKind::LParen
    }

    fn parse_class_member(&mut self) -> Result<ClassMember, ParseError> {
        let start = self.current_span();
        let modifiers = self.parse_member_modifiers();
        let kind = if self.is_constructor_start() {
            self.advance();
            let params = self.parse_parameter_list()?;
            let body = if self.check(TokenKind::LBrace) {
                Some(self.parse_function_body(false)?)
            } else {
                self.consume_semicolon();
                None
            };
            ClassMemberKind::Constructor { params, body }
        } else if self.is_index_signature_start() {
            let index = self.parse_index_signature()?;
            self.consume_semicolon();
            ClassMemberKind::Index(index)
        } else if self.is_accessor_start() {
            if self.eat(TokenKind::Get) {
                let (key, return_type, body) = self.parse_getter_rest()?;
                ClassMemberKind::Getter {
                    key,
                    return_type,
                    body,
                }
            } else {
                self.expect(TokenKind::Set)?;
                let (key, param, body) = self.parse_setter_rest()?;
                ClassMemberKind::Setter {
                    key,
                    param: Box::new(param),
                    body,
                }
            }
        } else if self.eat(TokenKind::Star) {
            let key = self.parse_property_name()?;
            let function = self.parse_function_rest(key.span, None, true, false)?;
            ClassMemberKind::Method {
                key,
                optional: false,
                function: Box::new(function),
            }
        } else {
            let key = self.parse_property_name()?;
            let optional = self.eat(TokenKind::Question);
            if matches!(self.current_kind(), TokenKind::LParen | TokenKind::Lt) {
                let function = self.parse_function_rest(key.span, None, false, false)?;
                ClassMemberKind::Method {
                    key,
                    optional,
                    function: Box::new(function),
                }
            } else {
                let ty = self.parse_type_annotation_opt()?;
                let init = if self.eat(TokenKind::Eq) {
                    Some(self.without_context(PARAMETER_CLEARS, Self::parse_assignment)?)
                } else {
                    None
                };
                self.consume_semicolon();
                ClassMemberKind::Property {
                    key,
                    optional,
                    ty,
                    init,
                }
            }
        };
        Ok(ClassMember {
            modifiers,
            kind,
            span: self.span_from(start),
        })
    }

    /// Getter after `get`: `name(): T { body }`.
    pub(crate) fn parse_getter_rest(
        &mut self,
    ) -> Result<(PropertyName, Option<Type>, Block), ParseError> {
        let key = self.parse_property_name()?;
        let open = self.expect(TokenKind::LParen)?.span;
        self.expect_closing(TokenKind::RParen, open)?;
        let return_type = self.parse_type_annotation_opt()?;
        let body = self.parse_function_body(false)?;
        Ok((key, return_type, body))
    }

    /// Setter after `set`: `name(param) { body }`.
    pub(crate) fn parse_setter_rest(&mut self) -> Result<(PropertyName, Param, Block), ParseError> {
        let key = self.parse_property_name()?;
        let open = self.expect(TokenKind::LParen)?.span;
        let param = self.without_context(PARAMETER_CLEARS, Self::parse_param)?;
        self.expect_closing(TokenKind::RParen, open)?;
        let body = self.parse_function_body(false)?;
        Ok((key, param, body))
    }

    pub(crate) fn parse_interface(&mut self) -> Result<InterfaceDecl, ParseError> {
        let start = self.expect(TokenKind::Interface)?.span;
        let name = self.cursor.expect_ident()?;
        let type_params = self.parse_type_parameters_opt()?;
        let extends = if self.eat(TokenKind::Extends) {
            self.parse_type_reference_list()?
        } else {
            Vec::new()
        };
        let members = self.parse_object_type_members()?;
        Ok(InterfaceDecl {
            name,
            type_params,
            extends,
            members,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_type_alias(&mut self) -> Result<TypeAliasDecl, ParseError> {
        let start = self.expect(TokenKind::Type)?.span;
        let name = self.cursor.expect_ident()?;
        let type_params = self.parse_type_parameters_opt()?;
        self.expect(TokenKind::Eq)?;
        let ty = self.parse_type()?;
        self.consume_semicolon();
        Ok(TypeAliasDecl {
            name,
            type_params,
            ty,
            span: self.span_from(start),
        })
    }

    /// `const? enum Name { A, B = expr }`. Initializers are kept as written.
    pub(crate) fn parse_enum(&mut self) -> Result<EnumDecl, ParseError> {
        let start = self.current_span();
        let is_const = self.eat(TokenKind::Const);
        self.expect(TokenKind::Enum)?;
        let name = self.cursor.expect_ident()?;
        let open = self.expect(TokenKind::LBrace)?.span;
        let members = self.without_context(PARAMETER_CLEARS, |p| {
            p.comma_list(
                open,
                TokenKind::RBrace,
                LIST_FOLLOW,
                Trailing::Allowed,
                Self::parse_enum_member,
                |span| EnumMember {
                    name: PropertyName {
                        kind: PropertyNameKind::Ident,
                        name: Name::EMPTY,
                        span,
                    },
                    init: None,
                    span,
                },
            )
        })?;
        Ok(EnumDecl {
            is_const,
            name,
            members,
            span: self.span_from(start),
        })
    }

    fn parse_enum_member(&mut self) -> Result<EnumMember, ParseError> {
        let name = self.parse_property_name()?;
        let init = if self.eat(TokenKind::Eq) {
            Some(self.parse_assignment()?)
        } else {
            None
        };
        Ok(EnumMember {
            name,
            init,
            span: self.span_from(name.span),
        })
    }

    /// `namespace A.B { ... }` or `module A { ... }`.
    pub(crate) fn parse_namespace(&mut self) -> Result<NamespaceDecl, ParseError> {
        let start = self.advance().span;
        let path = self.parse_namespace_path()?;
        let open = self.expect(TokenKind::LBrace)?.span;
        let body = self.with_context(ParseContext::IN_NAMESPACE, |p| {
            p.parse_statement_list(TokenKind::RBrace)
        });
        self.expect_closing(TokenKind::RBrace, open)?;
        Ok(NamespaceDecl {
            path,
            body,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_namespace_path(&mut self) -> Result<SmallVec<[Ident; 2]>, ParseError> {
        let mut path = SmallVec::new();
        path.push(self.cursor.expect_ident()?);
        while self.eat(TokenKind::Dot) {
            path.push(self.cursor.expect_ident()?);
        }
        if path.len() > 1 {
            self.resolve(AmbiguitySite::QualifiedName, Production::NamespaceName);
        }
        Ok(path)
    }

    /// `namespace`/`module` followed by a name on the same line.
    pub(crate) fn is_namespace_start(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Namespace | TokenKind::Module
        ) && self.peek_kind(1).is_identifier_like()
            && !self.cursor.peek_flags(1).has_newline_before()
    }
}

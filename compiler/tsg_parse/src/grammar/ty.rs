//! Type expressions.
//!
//! ```text
//! type         = function_type | constructor_type | union
//! union        = intersection ('|' intersection)*
//! intersection = postfix ('&' postfix)*
//! postfix      = primary ('[' ']')*
//! ```
//!
//! A `(` starts a function type only when the matching `)` is followed by
//! `=>`; otherwise it is a parenthesized type. The check is a bracket scan
//! over the token list, not a speculative parse.

use smallvec::SmallVec;
use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::{
    EntityName, FunctionType, Ident, IndexKeyType, IndexSignature, LiteralType, PredefinedType,
    Type, TypeKind, TypeMember, TypeMemberKind, TypeParam, TypeReference,
};
use tsg_ir::{Name, Span, TokenKind};

use super::Trailing;
use crate::error::quoted;
use crate::grammar_table::conflict::{AmbiguitySite, Production};
use crate::recovery::{synchronize, MEMBER_FOLLOW, TYPE_LIST_FOLLOW};
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_type(&mut self) -> Result<Type, ParseError> {
        self.nested(|p| {
            let start = p.current_span();
            match p.current_kind() {
                TokenKind::Lt => {
                    let type_params = p.parse_type_parameters()?;
                    p.parse_function_type_rest(start, type_params, false)
                }
                TokenKind::New => {
                    p.advance();
                    let type_params = p.parse_type_parameters_opt()?;
                    p.parse_function_type_rest(start, type_params, true)
                }
                TokenKind::LParen if p.is_function_type_start() => {
                    p.parse_function_type_rest(start, Vec::new(), false)
                }
                _ => p.parse_union_type(),
            }
        })
    }

    /// `(` whose matching `)` is followed by `=>`.
    fn is_function_type_start(&self) -> bool {
        self.cursor
            .matching_close_offset(TokenKind::LParen, TokenKind::RParen)
            .is_some_and(|offset| self.peek_kind(offset) == TokenKind::Arrow)
    }

    fn parse_function_type_rest(
        &mut self,
        start: Span,
        type_params: Vec<TypeParam>,
        constructor: bool,
    ) -> Result<Type, ParseError> {
        let params = self.parse_parameter_list()?;
        self.expect(TokenKind::Arrow)?;
        let return_type = self.parse_type()?;
        let function = Box::new(FunctionType {
            type_params,
            params,
            return_type,
        });
        let kind = if constructor {
            TypeKind::Constructor(function)
        } else {
            TypeKind::Function(function)
        };
        Ok(Type::new(kind, self.span_from(start)))
    }

    fn parse_union_type(&mut self) -> Result<Type, ParseError> {
        let start = self.current_span();
        let first = self.parse_intersection_type()?;
        if !self.check(TokenKind::Pipe) {
            return Ok(first);
        }
        let mut members = vec![first];
        while self.eat(TokenKind::Pipe) {
            members.push(self.parse_intersection_type()?);
        }
        Ok(Type::new(TypeKind::Union(members), self.span_from(start)))
    }

    fn parse_intersection_type(&mut self) -> Result<Type, ParseError> {
        let start = self.current_span();
        let first = self.parse_postfix_type()?;
        if !self.check(TokenKind::Amp) {
            return Ok(first);
        }
        let mut members = vec![first];
        while self.eat(TokenKind::Amp) {
            members.push(self.parse_postfix_type()?);
        }
        Ok(Type::new(TypeKind::Intersection(members), self.span_from(start)))
    }

    /// Primary type followed by any number of `[]`. A `[` on a new line
    /// does not continue the type.
    fn parse_postfix_type(&mut self) -> Result<Type, ParseError> {
        self.nested(|p| {
            let start = p.current_span();
            let mut ty = p.parse_primary_type()?;
            while p.check(TokenKind::LBracket)
                && !p.has_newline_before()
                && p.peek_kind(1) == TokenKind::RBracket
            {
                p.cursor.advance_by(2);
                p.chain_link()?;
                ty = Type::new(TypeKind::Array(Box::new(ty)), p.span_from(start));
            }
            Ok(ty)
        })
    }

    fn parse_primary_type(&mut self) -> Result<Type, ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_type()?;
                self.expect_closing(TokenKind::RParen, start)?;
                TypeKind::Paren(Box::new(inner))
            }
            TokenKind::Void => {
                self.advance();
                TypeKind::Predefined(PredefinedType::Void)
            }
            TokenKind::Null => {
                self.advance();
                TypeKind::Predefined(PredefinedType::Null)
            }
            TokenKind::This => {
                self.advance();
                self.resolve(AmbiguitySite::ThisInType, Production::ThisType);
                TypeKind::This
            }
            TokenKind::Typeof => {
                self.advance();
                let name = self.parse_entity_name()?;
                self.resolve(AmbiguitySite::TypeQuery, Production::TypeQueryExpression);
                TypeKind::Query(name)
            }
            TokenKind::LBrace => TypeKind::Object(self.parse_object_type_members()?),
            TokenKind::LBracket => {
                self.advance();
                let elements = self.comma_list(
                    start,
                    TokenKind::RBracket,
                    TYPE_LIST_FOLLOW,
                    Trailing::Configurable,
                    Self::parse_type,
                    Type::error,
                )?;
                TypeKind::Tuple(elements)
            }
            TokenKind::String => TypeKind::Literal(LiteralType::String(self.advance().value)),
            TokenKind::Number => TypeKind::Literal(LiteralType::Number(self.advance().value)),
            TokenKind::True | TokenKind::False => {
                let value = self.advance().kind == TokenKind::True;
                TypeKind::Literal(LiteralType::Bool(value))
            }
            _ if self.check_ident() => {
                if self.peek_kind(1) != TokenKind::Dot {
                    if let Some(predefined) = PredefinedType::from_word(self.cursor.current_text())
                    {
                        self.advance();
                        return Ok(Type::new(TypeKind::Predefined(predefined), start));
                    }
                }
                TypeKind::Reference(self.parse_type_reference()?)
            }
            found => return Err(ParseError::expected_type(found, start)),
        };
        Ok(Type::new(kind, self.span_from(start)))
    }

    /// Dotted name. Whether it names a type or a namespace is left to the
    /// consumer.
    pub(crate) fn parse_entity_name(&mut self) -> Result<EntityName, ParseError> {
        let first = self.cursor.expect_ident()?;
        let mut segments: SmallVec<[Ident; 2]> = SmallVec::new();
        segments.push(first);
        while self.check(TokenKind::Dot) && self.peek_kind(1).is_word() {
            self.advance();
            let token = self.advance();
            segments.push(Ident::new(token.value, token.span));
        }
        if segments.len() > 1 {
            self.resolve(AmbiguitySite::QualifiedName, Production::TypeName);
        }
        Ok(EntityName {
            segments,
            span: self.span_from(first.span),
        })
    }

    /// Entity name with optional type arguments.
    pub(crate) fn parse_type_reference(&mut self) -> Result<TypeReference, ParseError> {
        let name = self.parse_entity_name()?;
        let type_args = if self.check(TokenKind::Lt) && !self.has_newline_before() {
            self.parse_type_arguments()?
        } else {
            if self.options.require_type_arguments {
                self.record(ParseError::new(
                    ErrorCode::E1014,
                    "type reference without a type argument list",
                    name.span,
                ));
            }
            Vec::new()
        };
        Ok(TypeReference {
            span: self.span_from(name.span),
            name,
            type_args,
        })
    }

    /// `<T, U>` at a `<`.
    pub(crate) fn parse_type_arguments(&mut self) -> Result<Vec<Type>, ParseError> {
        let open = self.expect(TokenKind::Lt)?.span;
        self.comma_list(
            open,
            TokenKind::Gt,
            TYPE_LIST_FOLLOW,
            Trailing::Configurable,
            Self::parse_type,
            Type::error,
        )
    }

    pub(crate) fn parse_type_parameters_opt(&mut self) -> Result<Vec<TypeParam>, ParseError> {
        if self.check(TokenKind::Lt) {
            self.parse_type_parameters()
        } else {
            Ok(Vec::new())
        }
    }

    /// `<T, U extends V>` at a `<`.
    pub(crate) fn parse_type_parameters(&mut self) -> Result<Vec<TypeParam>, ParseError> {
        let open = self.expect(TokenKind::Lt)?.span;
        self.comma_list(
            open,
            TokenKind::Gt,
            TYPE_LIST_FOLLOW,
            Trailing::Configurable,
            Self::parse_type_parameter,
            |span| TypeParam {
                name: Ident::new(Name::EMPTY, span),
                constraint: None,
                span,
            },
        )
    }

    fn parse_type_parameter(&mut self) -> Result<TypeParam, ParseError> {
        let name = self.cursor.expect_ident()?;
        let constraint = if self.eat(TokenKind::Extends) {
            Some(self.parse_type()?)
        } else {
            None
        };
        Ok(TypeParam {
            name,
            constraint,
            span: self.span_from(name.span),
        })
    }

    /// `: T` if present.
    pub(crate) fn parse_type_annotation_opt(&mut self) -> Result<Option<Type>, ParseError> {
        if self.eat(TokenKind::Colon) {
            self.parse_type().map(Some)
        } else {
            Ok(None)
        }
    }

    /// `{ member* }` at a `{`.
    pub(crate) fn parse_object_type_members(&mut self) -> Result<Vec<TypeMember>, ParseError> {
        self.member_list(true, Self::parse_type_member, |span| TypeMember {
            kind: TypeMemberKind::Error,
            span,
        })
    }

    /// Braced members. With `require_separator`, members are separated by
    /// `;`, `,` or a line break (object types, interfaces); class bodies
    /// end each member themselves.
    pub(crate) fn member_list<T>(
        &mut self,
        require_separator: bool,
        mut member: impl FnMut(&mut Self) -> Result<T, ParseError>,
        mut placeholder: impl FnMut(Span) -> T,
    ) -> Result<Vec<T>, ParseError> {
        let open = self.expect(TokenKind::LBrace)?.span;
        let mut members = Vec::new();
        loop {
            while self.eat(TokenKind::Semicolon) || self.eat(TokenKind::Comma) {}
            if self.check(TokenKind::RBrace) || self.is_at_end() {
                break;
            }
            let start_pos = self.cursor.position();
            let start = self.current_span();
            match member(self) {
                Ok(value) => members.push(value),
                Err(error) => {
                    self.record(error);
                    let found = synchronize(&mut self.cursor, MEMBER_FOLLOW);
                    members.push(placeholder(self.error_span(start_pos, start)));
                    if !found {
                        break;
                    }
                    continue;
                }
            }
            if !require_separator
                || self.check(TokenKind::Semicolon)
                || self.check(TokenKind::Comma)
                || self.check(TokenKind::RBrace)
                || self.has_newline_before()
            {
                continue;
            }
            self.record(ParseError::unexpected(
                "`;`",
                self.current_kind(),
                self.current_span(),
            ));
            if !synchronize(&mut self.cursor, MEMBER_FOLLOW) {
                break;
            }
        }
        self.expect_closing(TokenKind::RBrace, open)?;
        Ok(members)
    }

    fn parse_type_member(&mut self) -> Result<TypeMember, ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::LParen | TokenKind::Lt => {
                TypeMemberKind::Call(self.parse_call_signature()?)
            }
            TokenKind::New if matches!(self.peek_kind(1), TokenKind::LParen | TokenKind::Lt) => {
                self.advance();
                TypeMemberKind::Construct(self.parse_call_signature()?)
            }
            TokenKind::LBracket if self.is_index_signature_start() => {
                TypeMemberKind::Index(self.parse_index_signature()?)
            }
            _ => {
                let key = self.parse_property_name()?;
                let optional = self.eat(TokenKind::Question);
                if matches!(self.current_kind(), TokenKind::LParen | TokenKind::Lt) {
                    TypeMemberKind::Method {
                        key,
                        optional,
                        signature: self.parse_call_signature()?,
                    }
                } else {
                    TypeMemberKind::Property {
                        key,
                        optional,
                        ty: self.parse_type_annotation_opt()?,
                    }
                }
            }
        };
        Ok(TypeMember {
            kind,
            span: self.span_from(start),
        })
    }

    /// `[` identifier `:`
    pub(crate) fn is_index_signature_start(&self) -> bool {
        self.check(TokenKind::LBracket)
            && self.peek_kind(1).is_identifier_like()
            && self.peek_kind(2) == TokenKind::Colon
    }

    /// `[key: string]: T` or `[key: number]: T`.
    pub(crate) fn parse_index_signature(&mut self) -> Result<IndexSignature, ParseError> {
        let open = self.expect(TokenKind::LBracket)?.span;
        let param = self.cursor.expect_ident()?;
        self.expect(TokenKind::Colon)?;
        let key_type = match self.cursor.current_text() {
            "string" if self.check_ident() => IndexKeyType::String,
            "number" if self.check_ident() => IndexKeyType::Number,
            _ => {
                return Err(ParseError::new(
                    ErrorCode::E1005,
                    format!(
                        "index signature key must be `string` or `number`, found {}",
                        quoted(self.current_kind())
                    ),
                    self.current_span(),
                ));
            }
        };
        self.advance();
        self.expect_closing(TokenKind::RBracket, open)?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        Ok(IndexSignature {
            param,
            key_type,
            ty,
            span: self.span_from(open),
        })
    }
}

#[cfg(test)]
mod tests;

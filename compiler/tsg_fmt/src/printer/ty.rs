//! Type annotations.

use tsg_ir::ast::{
    FunctionType, IndexSignature, LiteralType, Type, TypeKind, TypeMember, TypeMemberKind,
    TypeParam, TypeReference,
};

use super::Printer;
use crate::emitter::Emitter;

impl<E: Emitter> Printer<'_, E> {
    pub fn ty(&mut self, ty: &Type) {
        match &ty.kind {
            TypeKind::Predefined(predefined) => self.text(predefined.as_str()),
            TypeKind::Reference(reference) => self.type_reference(reference),
            TypeKind::Object(members) => self.object_type(members),
            TypeKind::Array(element) => {
                self.ty(element);
                self.text("[]");
            }
            TypeKind::Tuple(items) => {
                self.text("[");
                self.comma_list(items, Self::ty);
                self.text("]");
            }
            TypeKind::Union(members) => self.separated(members, " | "),
            TypeKind::Intersection(members) => self.separated(members, " & "),
            TypeKind::Function(function) => self.function_type(function),
            TypeKind::Constructor(function) => {
                self.text("new ");
                self.function_type(function);
            }
            TypeKind::Query(name) => {
                self.text("typeof ");
                self.dotted(&name.segments);
            }
            TypeKind::This => self.text("this"),
            TypeKind::Paren(inner) => {
                self.text("(");
                self.ty(inner);
                self.text(")");
            }
            TypeKind::Literal(LiteralType::String(raw) | LiteralType::Number(raw)) => {
                self.name(*raw);
            }
            TypeKind::Literal(LiteralType::Bool(value)) => {
                self.text(if *value { "true" } else { "false" });
            }
            TypeKind::Error => {}
        }
    }

    /// `: T` when a type was written.
    pub(super) fn type_annotation(&mut self, ty: Option<&Type>) {
        if let Some(ty) = ty {
            self.text(": ");
            self.ty(ty);
        }
    }

    pub(super) fn type_reference(&mut self, reference: &TypeReference) {
        self.dotted(&reference.name.segments);
        if !reference.type_args.is_empty() {
            self.type_args(&reference.type_args);
        }
    }

    pub(super) fn type_args(&mut self, args: &[Type]) {
        self.text("<");
        self.comma_list(args, Self::ty);
        self.text(">");
    }

    pub(super) fn type_params(&mut self, params: &[TypeParam]) {
        if params.is_empty() {
            return;
        }
        self.text("<");
        self.comma_list(params, |this, param| {
            this.ident(param.name);
            if let Some(constraint) = &param.constraint {
                this.text(" extends ");
                this.ty(constraint);
            }
        });
        self.text(">");
    }

    /// `<T> extends Base implements A, B` after a class name.
    pub(super) fn heritage(
        &mut self,
        type_params: &[TypeParam],
        extends: Option<&TypeReference>,
        implements: &[TypeReference],
    ) {
        self.type_params(type_params);
        if let Some(base) = extends {
            self.text(" extends ");
            self.type_reference(base);
        }
        if !implements.is_empty() {
            self.text(" implements ");
            self.comma_list(implements, Self::type_reference);
        }
    }

    fn separated(&mut self, members: &[Type], separator: &str) {
        for (index, member) in members.iter().enumerate() {
            if index > 0 {
                self.text(separator);
            }
            self.ty(member);
        }
    }

    fn function_type(&mut self, function: &FunctionType) {
        self.type_params(&function.type_params);
        self.params(&function.params);
        self.text(" => ");
        self.ty(&function.return_type);
    }

    fn object_type(&mut self, members: &[TypeMember]) {
        let mut members = members
            .iter()
            .filter(|member| !matches!(member.kind, TypeMemberKind::Error))
            .peekable();
        if members.peek().is_none() {
            self.text("{}");
            return;
        }
        self.text("{ ");
        let mut first = true;
        for member in members {
            if !first {
                self.text("; ");
            }
            first = false;
            self.type_member(member);
        }
        self.text(" }");
    }

    /// A member of an object type or interface, without its separator.
    pub(super) fn type_member(&mut self, member: &TypeMember) {
        match &member.kind {
            TypeMemberKind::Property { key, optional, ty } => {
                self.property_name(*key);
                if *optional {
                    self.text("?");
                }
                self.type_annotation(ty.as_ref());
            }
            TypeMemberKind::Call(signature) => self.signature(signature),
            TypeMemberKind::Construct(signature) => {
                self.text("new ");
                self.signature(signature);
            }
            TypeMemberKind::Index(index) => self.index_signature(index),
            TypeMemberKind::Method {
                key,
                optional,
                signature,
            } => {
                self.property_name(*key);
                if *optional {
                    self.text("?");
                }
                self.signature(signature);
            }
            TypeMemberKind::Error => {}
        }
    }

    pub(super) fn index_signature(&mut self, index: &IndexSignature) {
        self.text("[");
        self.ident(index.param);
        self.text(": ");
        self.text(index.key_type.as_str());
        self.text("]: ");
        self.ty(&index.ty);
    }
}

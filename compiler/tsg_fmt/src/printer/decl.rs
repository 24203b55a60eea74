//! Type-level, module and ambient declarations.

use tsg_ir::ast::{
    AmbientClass, AmbientClassMember, AmbientElementKind, AmbientFunction, AmbientKind,
    AmbientMemberKind, AmbientNamespaceElement, EnumDecl, Export, ExportDefault, ImportDecl,
    ImportSpecifier, InterfaceDecl, TypeAliasDecl, TypeMemberKind,
};

use super::Printer;
use crate::emitter::Emitter;

impl<E: Emitter> Printer<'_, E> {
    pub(super) fn interface(&mut self, decl: &InterfaceDecl) {
        self.text("interface ");
        self.ident(decl.name);
        self.type_params(&decl.type_params);
        if !decl.extends.is_empty() {
            self.text(" extends ");
            self.comma_list(&decl.extends, Self::type_reference);
        }
        self.space();
        let members = decl
            .members
            .iter()
            .filter(|member| !matches!(member.kind, TypeMemberKind::Error));
        self.braced_lines(members, |this, member| {
            this.type_member(member);
            this.text(";");
        });
    }

    pub(super) fn type_alias(&mut self, decl: &TypeAliasDecl) {
        self.text("type ");
        self.ident(decl.name);
        self.type_params(&decl.type_params);
        self.text(" = ");
        self.ty(&decl.ty);
        self.text(";");
    }

    pub(super) fn enum_decl(&mut self, decl: &EnumDecl) {
        if decl.is_const {
            self.text("const ");
        }
        self.text("enum ");
        self.ident(decl.name);
        if decl.members.is_empty() {
            self.text(" {}");
            return;
        }
        self.text(" { ");
        self.comma_list(&decl.members, |this, member| {
            this.property_name(member.name);
            if let Some(init) = &member.init {
                this.text(" = ");
                this.expr(init);
            }
        });
        self.text(" }");
    }

    pub(super) fn import(&mut self, decl: &ImportDecl) {
        self.text("import ");
        if let Some(clause) = &decl.clause {
            let mut parts = 0;
            if let Some(default) = clause.default {
                self.ident(default);
                parts += 1;
            }
            if let Some(namespace) = clause.namespace {
                if parts > 0 {
                    self.text(", ");
                }
                self.text("* as ");
                self.ident(namespace);
                parts += 1;
            }
            if let Some(named) = &clause.named {
                if parts > 0 {
                    self.text(", ");
                }
                self.specifiers(named);
            }
            self.text(" from ");
        }
        self.name(decl.source);
        self.text(";");
    }

    /// `{ a, b as c }`
    fn specifiers(&mut self, specifiers: &[ImportSpecifier]) {
        if specifiers.is_empty() {
            self.text("{}");
            return;
        }
        self.text("{ ");
        self.comma_list(specifiers, |this, specifier| {
            this.ident(specifier.name);
            if let Some(alias) = specifier.alias {
                this.text(" as ");
                this.ident(alias);
            }
        });
        self.text(" }");
    }

    pub(super) fn export(&mut self, export: &Export) {
        self.text("export ");
        match export {
            Export::Decl(stmt) => self.stmt(stmt),
            Export::Default(default) => {
                self.text("default ");
                match default {
                    ExportDefault::Function(function) => self.function(function),
                    ExportDefault::Class(class) => self.class(class),
                    ExportDefault::Expr(expr) => {
                        self.expr(expr);
                        self.text(";");
                    }
                    ExportDefault::AmbientFunction(function) => self.ambient_function(function),
                    ExportDefault::AmbientClass(class) => self.ambient_class(class),
                }
            }
            Export::All { source } => {
                self.text("* from ");
                self.name(*source);
                self.text(";");
            }
            Export::Named { specifiers, source } => {
                self.specifiers(specifiers);
                if let Some(source) = source {
                    self.text(" from ");
                    self.name(*source);
                }
                self.text(";");
            }
            Export::Assignment(name) => {
                self.text("= ");
                self.ident(*name);
                self.text(";");
            }
        }
    }

    /// An ambient declaration without its `declare` keyword.
    pub(super) fn ambient(&mut self, kind: &AmbientKind) {
        match kind {
            AmbientKind::Var { kind, bindings } => {
                self.text(kind.as_str());
                self.space();
                self.comma_list(bindings, |this, binding| {
                    this.ident(binding.name);
                    this.type_annotation(binding.ty.as_ref());
                });
                self.text(";");
            }
            AmbientKind::Function(function) => self.ambient_function(function),
            AmbientKind::Class(class) => self.ambient_class(class),
            AmbientKind::Enum(decl) => self.enum_decl(decl),
            AmbientKind::Namespace(namespace) => {
                self.text("namespace ");
                self.dotted(&namespace.path);
                self.space();
                let elements = namespace
                    .elements
                    .iter()
                    .filter(|element| !matches!(element.kind, AmbientElementKind::Error));
                self.braced_lines(elements, Self::ambient_element);
            }
        }
    }

    fn ambient_function(&mut self, function: &AmbientFunction) {
        self.text("function ");
        self.ident(function.name);
        self.signature(&function.signature);
        self.text(";");
    }

    fn ambient_class(&mut self, class: &AmbientClass) {
        self.text("class ");
        self.ident(class.name);
        self.heritage(&class.type_params, class.extends.as_ref(), &class.implements);
        self.space();
        let members = class
            .members
            .iter()
            .filter(|member| !matches!(member.kind, AmbientMemberKind::Error));
        self.braced_lines(members, Self::ambient_member);
    }

    fn ambient_member(&mut self, member: &AmbientClassMember) {
        self.modifiers(member.modifiers);
        match &member.kind {
            AmbientMemberKind::Constructor { params } => {
                self.text("constructor");
                self.params(params);
            }
            AmbientMemberKind::Property { key, optional, ty } => {
                self.property_name(*key);
                if *optional {
                    self.text("?");
                }
                self.type_annotation(ty.as_ref());
            }
            AmbientMemberKind::Method {
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
            AmbientMemberKind::Index(index) => self.index_signature(index),
            AmbientMemberKind::Error => {}
        }
        self.text(";");
    }

    fn ambient_element(&mut self, element: &AmbientNamespaceElement) {
        if element.exported {
            self.text("export ");
        }
        match &element.kind {
            AmbientElementKind::Decl(kind) => self.ambient(kind),
            AmbientElementKind::Interface(decl) => self.interface(decl),
            AmbientElementKind::TypeAlias(decl) => self.type_alias(decl),
            AmbientElementKind::ImportAlias { name, target } => {
                self.text("import ");
                self.ident(*name);
                self.text(" = ");
                self.dotted(&target.segments);
                self.text(";");
            }
            AmbientElementKind::Error => {}
        }
    }
}

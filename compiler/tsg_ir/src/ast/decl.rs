//! Declaration nodes: parameters, classes, interfaces, enums, namespaces,
//! imports/exports and the ambient (`declare`) family.
//!
//! Ambient declarations have their own node types. None of them has a field
//! that can hold an executable body, so a signature-only declaration can
//! never carry a function body.

use smallvec::SmallVec;

use crate::{Name, Span};

use super::{
    Block, CallSignature, EntityName, Expr, Function, Ident, IndexSignature, Pattern, Stmt,
    Type, TypeMember, TypeParam, TypeReference, VarKind,
};

bitflags::bitflags! {
    /// Member and parameter-property modifiers.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Modifiers: u8 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const STATIC = 1 << 3;
    }
}

impl Modifiers {
    /// Keywords in canonical order.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        [
            (Modifiers::PUBLIC, "public"),
            (Modifiers::PRIVATE, "private"),
            (Modifiers::PROTECTED, "protected"),
            (Modifiers::STATIC, "static"),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, word)| word)
    }
}

/// Formal parameter.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Param {
    /// Accessibility modifier on a constructor parameter property.
    pub modifiers: Modifiers,
    pub rest: bool,
    pub pattern: Pattern,
    pub optional: bool,
    pub ty: Option<Type>,
    pub default: Option<Expr>,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PropertyNameKind {
    /// Identifier or any keyword.
    Ident,
    String,
    Number,
}

/// Property key in object literals, types, classes and enums. `name` holds
/// the raw text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct PropertyName {
    pub kind: PropertyNameKind,
    pub name: Name,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Class {
    pub name: Option<Ident>,
    pub type_params: Vec<TypeParam>,
    pub extends: Option<TypeReference>,
    pub implements: Vec<TypeReference>,
    pub members: Vec<ClassMember>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ClassMember {
    pub modifiers: Modifiers,
    pub kind: ClassMemberKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ClassMemberKind {
    /// `body` is `None` for an overload signature.
    Constructor {
        params: Vec<Param>,
        body: Option<Block>,
    },
    Property {
        key: PropertyName,
        optional: bool,
        ty: Option<Type>,
        init: Option<Expr>,
    },
    Method {
        key: PropertyName,
        optional: bool,
        function: Box<Function>,
    },
    Getter {
        key: PropertyName,
        return_type: Option<Type>,
        body: Block,
    },
    Setter {
        key: PropertyName,
        param: Box<Param>,
        body: Block,
    },
    Index(IndexSignature),
    Error,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct InterfaceDecl {
    pub name: Ident,
    pub type_params: Vec<TypeParam>,
    pub extends: Vec<TypeReference>,
    pub members: Vec<TypeMember>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeAliasDecl {
    pub name: Ident,
    pub type_params: Vec<TypeParam>,
    pub ty: Type,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EnumDecl {
    pub is_const: bool,
    pub name: Ident,
    pub members: Vec<EnumMember>,
    pub span: Span,
}

/// Enum member. Initializers are kept as written, constant or not.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EnumMember {
    pub name: PropertyName,
    pub init: Option<Expr>,
    pub span: Span,
}

/// `namespace A.B { ... }` (also written `module A { ... }`).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct NamespaceDecl {
    pub path: SmallVec<[Ident; 2]>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ImportDecl {
    /// `None` for a side-effect import: `import "m";`
    pub clause: Option<ImportClause>,
    /// Raw string literal text.
    pub source: Name,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ImportClause {
    pub default: Option<Ident>,
    pub namespace: Option<Ident>,
    pub named: Option<Vec<ImportSpecifier>>,
}

/// `a` or `a as b`, in import and export lists alike.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ImportSpecifier {
    pub name: Ident,
    pub alias: Option<Ident>,
    pub span: Span,
}

pub type ExportSpecifier = ImportSpecifier;

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Export {
    /// `export` followed by a declaration or variable statement.
    Decl(Stmt),
    Default(ExportDefault),
    /// `export * from "m";`
    All { source: Name },
    /// `export { a, b as c } (from "m")?;`
    Named {
        specifiers: Vec<ExportSpecifier>,
        source: Option<Name>,
    },
    /// `export = a;`
    Assignment(Ident),
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ExportDefault {
    Function(Box<Function>),
    Class(Box<Class>),
    Expr(Box<Expr>),
    AmbientFunction(AmbientFunction),
    AmbientClass(Box<AmbientClass>),
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AmbientDecl {
    pub kind: AmbientKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum AmbientKind {
    Var {
        kind: VarKind,
        bindings: Vec<AmbientBinding>,
    },
    Function(AmbientFunction),
    Class(Box<AmbientClass>),
    Enum(Box<EnumDecl>),
    Namespace(Box<AmbientNamespace>),
}

/// `name: T` with no initializer.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AmbientBinding {
    pub name: Ident,
    pub ty: Option<Type>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AmbientFunction {
    pub name: Ident,
    pub signature: CallSignature,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AmbientClass {
    pub name: Ident,
    pub type_params: Vec<TypeParam>,
    pub extends: Option<TypeReference>,
    pub implements: Vec<TypeReference>,
    pub members: Vec<AmbientClassMember>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AmbientClassMember {
    pub modifiers: Modifiers,
    pub kind: AmbientMemberKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum AmbientMemberKind {
    Constructor {
        params: Vec<Param>,
    },
    Property {
        key: PropertyName,
        optional: bool,
        ty: Option<Type>,
    },
    Method {
        key: PropertyName,
        optional: bool,
        signature: CallSignature,
    },
    Index(IndexSignature),
    Error,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AmbientNamespace {
    pub path: SmallVec<[Ident; 2]>,
    pub elements: Vec<AmbientNamespaceElement>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AmbientNamespaceElement {
    pub exported: bool,
    pub kind: AmbientElementKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum AmbientElementKind {
    Decl(AmbientKind),
    Interface(Box<InterfaceDecl>),
    TypeAlias(Box<TypeAliasDecl>),
    ImportAlias { name: Ident, target: EntityName },
    Error,
}

/// `declare module "name" { ... }`: a declaration-module body.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AmbientModuleDecl {
    /// Raw string literal text.
    pub name: Name,
    pub body: Vec<Stmt>,
    pub span: Span,
}

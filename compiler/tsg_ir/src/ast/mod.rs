//! Typed syntax tree.
//!
//! One sum type per nonterminal. Every node owns its children (`Box`/`Vec`,
//! no sharing) and carries the span of the text it was parsed from.

mod decl;
mod expr;
mod operators;
mod pattern;
mod stmt;
mod ty;

pub use decl::{
    AmbientBinding, AmbientClass, AmbientClassMember, AmbientDecl, AmbientElementKind,
    AmbientFunction, AmbientKind, AmbientMemberKind, AmbientModuleDecl, AmbientNamespace,
    AmbientNamespaceElement, Class, ClassMember, ClassMemberKind, EnumDecl, EnumMember, Export,
    ExportDefault, ExportSpecifier, ImportClause, ImportDecl, ImportSpecifier, InterfaceDecl,
    Modifiers, NamespaceDecl, Param, PropertyName, PropertyNameKind, TypeAliasDecl,
};
pub use expr::{
    Argument, ArrayElement, ArrowBody, ArrowFunction, Expr, ExprKind, Function, Property,
    PropertyKind, Template,
};
pub use operators::{AssignOp, BinaryOp, UnaryOp, UpdateOp};
pub use pattern::{ObjectPatternProp, Pattern, PatternKind};
pub use stmt::{
    Block, CatchClause, ForHead, ForInit, Stmt, StmtKind, SwitchCase, VarDecl, VarDeclarator,
    VarKind,
};
pub use ty::{
    CallSignature, EntityName, FunctionType, IndexKeyType, IndexSignature, LiteralType,
    PredefinedType, Type, TypeKind, TypeMember, TypeMemberKind, TypeParam, TypeReference,
};

use crate::{Name, Span};

/// Identifier occurrence.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Ident {
    pub name: Name,
    pub span: Span,
}

impl Ident {
    #[inline]
    pub const fn new(name: Name, span: Span) -> Self {
        Ident { name, span }
    }
}

/// Implementation (`.ts`) or declaration (`.d.ts`) source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum SourceKind {
    #[default]
    Implementation,
    Declaration,
}

/// Script or module goal symbol.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Goal {
    #[default]
    Script,
    Module,
}

/// Root of every parse.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SourceFile {
    pub kind: SourceKind,
    pub goal: Goal,
    pub items: Vec<Stmt>,
    pub span: Span,
}

//! Statement nodes.

use crate::{Name, Span};

use super::{
    AmbientDecl, AmbientModuleDecl, Class, EntityName, EnumDecl, Export, Expr, Function, Ident,
    ImportDecl, InterfaceDecl, NamespaceDecl, Pattern, Type, TypeAliasDecl,
};

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, StmtKind::Error)
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum StmtKind {
    Block(Block),
    Empty,
    Expr(Box<Expr>),
    Var(VarDecl),
    If {
        test: Box<Expr>,
        consequent: Box<Stmt>,
        alternate: Option<Box<Stmt>>,
    },
    /// Each head slot is optional; a malformed slot holds an error expression.
    For {
        init: Option<ForInit>,
        test: Option<Box<Expr>>,
        update: Option<Box<Expr>>,
        body: Box<Stmt>,
    },
    ForIn {
        left: ForHead,
        right: Box<Expr>,
        body: Box<Stmt>,
    },
    ForOf {
        left: ForHead,
        right: Box<Expr>,
        body: Box<Stmt>,
    },
    While {
        test: Box<Expr>,
        body: Box<Stmt>,
    },
    DoWhile {
        body: Box<Stmt>,
        test: Box<Expr>,
    },
    Switch {
        discriminant: Box<Expr>,
        cases: Vec<SwitchCase>,
    },
    Try {
        block: Block,
        handler: Option<CatchClause>,
        finalizer: Option<Block>,
    },
    Labeled {
        label: Ident,
        body: Box<Stmt>,
    },
    With {
        object: Box<Expr>,
        body: Box<Stmt>,
    },
    Debugger,
    Return(Option<Box<Expr>>),
    Throw(Box<Expr>),
    Break(Option<Ident>),
    Continue(Option<Ident>),
    Function(Box<Function>),
    Class(Box<Class>),
    Interface(Box<InterfaceDecl>),
    TypeAlias(Box<TypeAliasDecl>),
    Enum(Box<EnumDecl>),
    Namespace(Box<NamespaceDecl>),
    /// `declare ...`, or an implicitly ambient declaration in a declaration
    /// source.
    Ambient(Box<AmbientDecl>),
    /// `declare module "name" { ... }`
    AmbientModule(Box<AmbientModuleDecl>),
    /// `import a = A.B;`
    ImportAlias {
        name: Ident,
        target: EntityName,
    },
    /// `import a = require("m");`
    ImportRequire {
        name: Ident,
        /// Raw string literal text.
        module: Name,
    },
    Import(Box<ImportDecl>),
    Export(Box<Export>),
    /// A statement abandoned after a fatal parse error.
    Error,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum VarKind {
    Var,
    Let,
    Const,
}

impl VarKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            VarKind::Var => "var",
            VarKind::Let => "let",
            VarKind::Const => "const",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct VarDecl {
    pub kind: VarKind,
    pub declarators: Vec<VarDeclarator>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct VarDeclarator {
    pub pattern: Pattern,
    pub ty: Option<Type>,
    pub init: Option<Expr>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ForInit {
    Var(VarDecl),
    Expr(Box<Expr>),
}

/// Left side of `for-in`/`for-of`: a single-binding declaration or one
/// assignment target.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ForHead {
    Var(VarDecl),
    Pattern(Pattern),
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SwitchCase {
    /// `None` for `default:`.
    pub test: Option<Expr>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CatchClause {
    pub param: Pattern,
    pub body: Block,
    pub span: Span,
}

//! Expression nodes.

use crate::{Name, Span};

use super::{
    AssignOp, BinaryOp, Block, CallSignature, Class, Ident, Param, Pattern, PropertyName, Type,
    UnaryOp, UpdateOp,
};

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Error marker left behind by a tolerant slot.
    #[inline]
    pub fn error(span: Span) -> Self {
        Expr {
            kind: ExprKind::Error,
            span,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, ExprKind::Error)
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ExprKind {
    This,
    Super,
    Ident(Name),
    Null,
    Bool(bool),
    /// Raw numeric literal text.
    Number(Name),
    /// Raw string literal text, quotes included.
    String(Name),
    /// Raw regular expression text, slashes and flags included.
    Regex(Name),
    Template(Template),
    TaggedTemplate {
        tag: Box<Expr>,
        quasi: Template,
    },
    Array(Vec<ArrayElement>),
    Object(Vec<Property>),
    Function(Box<Function>),
    Arrow(Box<ArrowFunction>),
    Class(Box<Class>),
    /// A parenthesized expression kept as a node so that printing preserves
    /// grouping.
    Paren(Box<Expr>),
    /// Comma operator.
    Sequence(Vec<Expr>),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Update {
        op: UpdateOp,
        prefix: bool,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Assign {
        op: AssignOp,
        target: Box<Pattern>,
        value: Box<Expr>,
    },
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        type_args: Option<Vec<Type>>,
        args: Vec<Argument>,
    },
    New {
        callee: Box<Expr>,
        type_args: Option<Vec<Type>>,
        /// `None` for `new Foo` without an argument list.
        args: Option<Vec<Argument>>,
    },
    Member {
        object: Box<Expr>,
        property: Ident,
    },
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    /// `new.target`
    NewTarget,
    Yield {
        delegate: bool,
        argument: Option<Box<Expr>>,
    },
    /// `<T>expr`
    TypeAssertion {
        ty: Box<Type>,
        expr: Box<Expr>,
    },
    /// `expr as T`
    As {
        expr: Box<Expr>,
        ty: Box<Type>,
    },
    Error,
}

/// Template literal.
///
/// `quasis` holds the raw text of each template token including its
/// delimiters (`` `a${ ``, `}b${`, `` }c` ``), so `quasis.len() == exprs.len() + 1`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Template {
    pub quasis: Vec<Name>,
    pub exprs: Vec<Expr>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ArrayElement {
    /// Elided slot: the middle of `[1, , 3]`.
    Hole(Span),
    Item(Expr),
    Spread(Expr, Span),
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Argument {
    pub spread: bool,
    pub expr: Expr,
    pub span: Span,
}

/// Object literal member.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Property {
    pub kind: PropertyKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum PropertyKind {
    KeyValue {
        key: PropertyName,
        value: Expr,
    },
    Shorthand(Ident),
    /// `{ a = 1 }`: only valid once the literal is reclassified as a pattern.
    CoverInitialized {
        name: Ident,
        default: Expr,
    },
    Method {
        key: PropertyName,
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
    Error,
}

/// Function declaration, expression or method.
///
/// `body` is `None` for overload signatures (`function f(): void;`).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Function {
    pub name: Option<Ident>,
    pub generator: bool,
    pub signature: CallSignature,
    pub body: Option<Block>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ArrowFunction {
    pub signature: CallSignature,
    pub body: ArrowBody,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ArrowBody {
    Block(Block),
    Expr(Box<Expr>),
}

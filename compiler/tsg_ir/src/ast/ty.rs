//! Type expression nodes.

use smallvec::SmallVec;

use crate::{Name, Span};

use super::{Ident, Param, PropertyName};

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Type {
    pub kind: TypeKind,
    pub span: Span,
}

impl Type {
    #[inline]
    pub fn new(kind: TypeKind, span: Span) -> Self {
        Type { kind, span }
    }

    #[inline]
    pub fn error(span: Span) -> Self {
        Type {
            kind: TypeKind::Error,
            span,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypeKind {
    Predefined(PredefinedType),
    Reference(TypeReference),
    Object(Vec<TypeMember>),
    /// `T[]`
    Array(Box<Type>),
    Tuple(Vec<Type>),
    /// Two or more members.
    Union(Vec<Type>),
    /// Two or more members.
    Intersection(Vec<Type>),
    /// `<T>(a: T) => U`
    Function(Box<FunctionType>),
    /// `new (a: T) => U`
    Constructor(Box<FunctionType>),
    /// `typeof a.b`
    Query(EntityName),
    This,
    Paren(Box<Type>),
    Literal(LiteralType),
    Error,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PredefinedType {
    Any,
    Number,
    Boolean,
    String,
    Symbol,
    Void,
    Never,
    Undefined,
    Null,
    Object,
    Unknown,
}

impl PredefinedType {
    pub fn from_word(word: &str) -> Option<Self> {
        Some(match word {
            "any" => PredefinedType::Any,
            "number" => PredefinedType::Number,
            "boolean" => PredefinedType::Boolean,
            "string" => PredefinedType::String,
            "symbol" => PredefinedType::Symbol,
            "void" => PredefinedType::Void,
            "never" => PredefinedType::Never,
            "undefined" => PredefinedType::Undefined,
            "null" => PredefinedType::Null,
            "object" => PredefinedType::Object,
            "unknown" => PredefinedType::Unknown,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PredefinedType::Any => "any",
            PredefinedType::Number => "number",
            PredefinedType::Boolean => "boolean",
            PredefinedType::String => "string",
            PredefinedType::Symbol => "symbol",
            PredefinedType::Void => "void",
            PredefinedType::Never => "never",
            PredefinedType::Undefined => "undefined",
            PredefinedType::Null => "null",
            PredefinedType::Object => "object",
            PredefinedType::Unknown => "unknown",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LiteralType {
    /// Raw string text, quotes included.
    String(Name),
    /// Raw numeric text.
    Number(Name),
    Bool(bool),
}

/// Dotted name shared by the type-name and namespace-name readings.
///
/// The grammar never decides which of the two a qualified name denotes;
/// that is left to whoever resolves names.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EntityName {
    pub segments: SmallVec<[Ident; 2]>,
    pub span: Span,
}

impl EntityName {
    pub fn single(ident: Ident) -> Self {
        let span = ident.span;
        let mut segments = SmallVec::new();
        segments.push(ident);
        EntityName { segments, span }
    }

    #[inline]
    pub fn is_qualified(&self) -> bool {
        self.segments.len() > 1
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeReference {
    pub name: EntityName,
    /// Empty when no argument list was written.
    pub type_args: Vec<Type>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeParam {
    pub name: Ident,
    pub constraint: Option<Type>,
    pub span: Span,
}

/// Optional type parameters, a parameter list and an optional return type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CallSignature {
    pub type_params: Vec<TypeParam>,
    pub params: Vec<Param>,
    pub return_type: Option<Type>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionType {
    pub type_params: Vec<TypeParam>,
    pub params: Vec<Param>,
    pub return_type: Type,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeMember {
    pub kind: TypeMemberKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypeMemberKind {
    Property {
        key: PropertyName,
        optional: bool,
        ty: Option<Type>,
    },
    Call(CallSignature),
    Construct(CallSignature),
    Index(IndexSignature),
    Method {
        key: PropertyName,
        optional: bool,
        signature: CallSignature,
    },
    Error,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IndexKeyType {
    String,
    Number,
}

impl IndexKeyType {
    pub const fn as_str(self) -> &'static str {
        match self {
            IndexKeyType::String => "string",
            IndexKeyType::Number => "number",
        }
    }
}

/// `[key: string]: T` / `[key: number]: T`
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct IndexSignature {
    pub param: Ident,
    pub key_type: IndexKeyType,
    pub ty: Type,
    pub span: Span,
}

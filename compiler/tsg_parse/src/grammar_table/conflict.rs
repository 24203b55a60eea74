//! Declared conflicts.
//!
//! A few productions share a prefix that bounded lookahead cannot split.
//! Each such group is declared here by name, and every place in the parser
//! that picks between readings is an [`AmbiguitySite`] naming the
//! productions it chooses among. A site whose candidates are not all in
//! one declared conflict is a grammar-construction error.

use Production as P;

/// Productions that take part in a declared conflict.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Production {
    TypeName,
    NamespaceName,
    ThisType,
    PrimaryExpression,
    YieldExpression,
    BindingIdentifier,
    IdentifierReference,
    ParenthesizedExpression,
    ArrowParameters,
    RestParameter,
    TypeQueryExpression,
    PropertyName,
    LabelIdentifier,
    Literal,
    EqualityExpression,
    RelationalExpression,
    ArrayBindingPattern,
    ArrayLiteral,
    ShiftExpression,
    AdditiveExpression,
    BreakableStatement,
    IterationStatement,
    FunctionExpression,
    FunctionDeclaration,
    HoistableDeclaration,
    GeneratorExpression,
    ObjectLiteral,
    ObjectBindingPattern,
    TypeAssertion,
    TypeArguments,
    TypeParameters,
}

impl Production {
    pub const fn name(self) -> &'static str {
        match self {
            Production::TypeName => "type_name",
            Production::NamespaceName => "namespace_name",
            Production::ThisType => "this_type",
            Production::PrimaryExpression => "primary_expression",
            Production::YieldExpression => "yield_expression",
            Production::BindingIdentifier => "binding_identifier",
            Production::IdentifierReference => "identifier_reference",
            Production::ParenthesizedExpression => "parenthesized_expression",
            Production::ArrowParameters => "arrow_parameters",
            Production::RestParameter => "rest_parameter",
            Production::TypeQueryExpression => "type_query_expression",
            Production::PropertyName => "property_name",
            Production::LabelIdentifier => "label_identifier",
            Production::Literal => "literal",
            Production::EqualityExpression => "equality_expression",
            Production::RelationalExpression => "relational_expression",
            Production::ArrayBindingPattern => "array_binding_pattern",
            Production::ArrayLiteral => "array_literal",
            Production::ShiftExpression => "shift_expression",
            Production::AdditiveExpression => "additive_expression",
            Production::BreakableStatement => "breakable_statement",
            Production::IterationStatement => "iteration_statement",
            Production::FunctionExpression => "function_expression",
            Production::FunctionDeclaration => "function_declaration",
            Production::HoistableDeclaration => "hoistable_declaration",
            Production::GeneratorExpression => "generator_expression",
            Production::ObjectLiteral => "object_literal",
            Production::ObjectBindingPattern => "object_binding_pattern",
            Production::TypeAssertion => "type_assertion",
            Production::TypeArguments => "type_arguments",
            Production::TypeParameters => "type_parameters",
        }
    }
}

/// A named set of productions allowed to share a prefix.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ConflictDecl {
    pub name: &'static str,
    pub productions: &'static [Production],
}

impl ConflictDecl {
    pub const fn includes(&self, production: Production) -> bool {
        let mut i = 0;
        while i < self.productions.len() {
            if self.productions[i] as u8 == production as u8 {
                return true;
            }
            i += 1;
        }
        false
    }

    /// All of `productions` belong to this conflict.
    pub const fn covers(&self, productions: &[Production]) -> bool {
        let mut i = 0;
        while i < productions.len() {
            if !self.includes(productions[i]) {
                return false;
            }
            i += 1;
        }
        true
    }
}

const fn decl(name: &'static str, productions: &'static [Production]) -> ConflictDecl {
    ConflictDecl { name, productions }
}

/// The closed list of conflicts the grammar declares.
pub const STANDARD_CONFLICTS: &[ConflictDecl] = &[
    decl("type_name/namespace_name", &[P::TypeName, P::NamespaceName]),
    decl(
        "this_type/primary_expression",
        &[P::ThisType, P::PrimaryExpression],
    ),
    decl(
        "yield_expression/binding_identifier/identifier_reference",
        &[
            P::YieldExpression,
            P::BindingIdentifier,
            P::IdentifierReference,
        ],
    ),
    decl(
        "cover_parenthesized_expression_and_arrow_parameter_list/rest_parameter",
        &[P::ParenthesizedExpression, P::ArrowParameters, P::RestParameter],
    ),
    decl(
        "type_query_expression/type_name/namespace_name/primary_expression",
        &[
            P::TypeQueryExpression,
            P::TypeName,
            P::NamespaceName,
            P::PrimaryExpression,
        ],
    ),
    decl(
        "property_name/identifier_reference",
        &[P::PropertyName, P::IdentifierReference],
    ),
    decl(
        "label_identifier/property_name",
        &[P::LabelIdentifier, P::PropertyName],
    ),
    decl("literal/property_name", &[P::Literal, P::PropertyName]),
    decl(
        "equality_expression/relational_expression",
        &[P::EqualityExpression, P::RelationalExpression],
    ),
    decl(
        "array_binding_pattern/array_literal",
        &[P::ArrayBindingPattern, P::ArrayLiteral],
    ),
    decl(
        "shift_expression/additive_expression",
        &[P::ShiftExpression, P::AdditiveExpression],
    ),
    decl(
        "breakable_statement/iteration_statement",
        &[P::BreakableStatement, P::IterationStatement],
    ),
    decl(
        "function_expression/function_declaration",
        &[P::FunctionExpression, P::FunctionDeclaration],
    ),
    decl(
        "hoistable_declaration/generator_expression",
        &[P::HoistableDeclaration, P::GeneratorExpression],
    ),
    decl(
        "object_literal/object_binding_pattern",
        &[P::ObjectLiteral, P::ObjectBindingPattern],
    ),
    // Readings of `<`: assertion or generic arrow head in prefix position,
    // argument list or comparison after a callee.
    decl(
        "type_assertion/type_arguments",
        &[
            P::TypeAssertion,
            P::TypeArguments,
            P::TypeParameters,
            P::RelationalExpression,
        ],
    ),
];

/// A place in the parser that chooses between productions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AmbiguitySite {
    /// Dotted name in a type: type or namespace.
    QualifiedName,
    /// `this` in type position.
    ThisInType,
    /// `yield` inside or outside a generator.
    Yield,
    /// `( ... )` followed by `=>`, or not.
    ParenthesizedCover,
    /// `( ... ) :` tried as an arrow return type.
    ArrowReturnType,
    /// `...` inside a parenthesized cover.
    CoverRest,
    /// `typeof a.b` in a type.
    TypeQuery,
    /// `{ a }` shorthand property.
    ShorthandProperty,
    /// `a:` at the start of a statement.
    Label,
    /// String or number used as a key.
    LiteralKey,
    /// `[ ... ]` as literal or pattern.
    ArrayCover,
    /// `{ ... }` as literal or pattern.
    ObjectCover,
    /// `function` at the start of a statement.
    FunctionStatement,
    /// `function*` at the start of a statement.
    GeneratorStatement,
    /// `<` in prefix position.
    PrefixAngle,
    /// `<` after a callee.
    CallTypeArguments,
    /// `for`, `while` or `do`: an iteration statement that is also
    /// breakable.
    LoopStatement,
}

impl AmbiguitySite {
    pub const ALL: &'static [AmbiguitySite] = &[
        AmbiguitySite::QualifiedName,
        AmbiguitySite::ThisInType,
        AmbiguitySite::Yield,
        AmbiguitySite::ParenthesizedCover,
        AmbiguitySite::ArrowReturnType,
        AmbiguitySite::CoverRest,
        AmbiguitySite::TypeQuery,
        AmbiguitySite::ShorthandProperty,
        AmbiguitySite::Label,
        AmbiguitySite::LiteralKey,
        AmbiguitySite::ArrayCover,
        AmbiguitySite::ObjectCover,
        AmbiguitySite::FunctionStatement,
        AmbiguitySite::GeneratorStatement,
        AmbiguitySite::PrefixAngle,
        AmbiguitySite::CallTypeArguments,
        AmbiguitySite::LoopStatement,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            AmbiguitySite::QualifiedName => "qualified name",
            AmbiguitySite::ThisInType => "this in type",
            AmbiguitySite::Yield => "yield",
            AmbiguitySite::ParenthesizedCover => "parenthesized cover",
            AmbiguitySite::ArrowReturnType => "arrow return type",
            AmbiguitySite::CoverRest => "rest in parenthesized cover",
            AmbiguitySite::TypeQuery => "type query",
            AmbiguitySite::ShorthandProperty => "shorthand property",
            AmbiguitySite::Label => "label",
            AmbiguitySite::LiteralKey => "literal key",
            AmbiguitySite::ArrayCover => "array cover",
            AmbiguitySite::ObjectCover => "object cover",
            AmbiguitySite::FunctionStatement => "function statement",
            AmbiguitySite::GeneratorStatement => "generator statement",
            AmbiguitySite::PrefixAngle => "prefix angle bracket",
            AmbiguitySite::CallTypeArguments => "call type arguments",
            AmbiguitySite::LoopStatement => "loop statement",
        }
    }

    /// Productions this site chooses among.
    pub const fn candidates(self) -> &'static [Production] {
        match self {
            AmbiguitySite::QualifiedName => &[P::TypeName, P::NamespaceName],
            AmbiguitySite::ThisInType => &[P::ThisType, P::PrimaryExpression],
            AmbiguitySite::Yield => &[
                P::YieldExpression,
                P::BindingIdentifier,
                P::IdentifierReference,
            ],
            AmbiguitySite::ParenthesizedCover | AmbiguitySite::ArrowReturnType => {
                &[P::ParenthesizedExpression, P::ArrowParameters]
            }
            AmbiguitySite::CoverRest => &[P::ArrowParameters, P::RestParameter],
            AmbiguitySite::TypeQuery => &[
                P::TypeQueryExpression,
                P::TypeName,
                P::NamespaceName,
                P::PrimaryExpression,
            ],
            AmbiguitySite::ShorthandProperty => &[P::PropertyName, P::IdentifierReference],
            AmbiguitySite::Label => &[P::LabelIdentifier, P::PropertyName],
            AmbiguitySite::LiteralKey => &[P::Literal, P::PropertyName],
            AmbiguitySite::ArrayCover => &[P::ArrayLiteral, P::ArrayBindingPattern],
            AmbiguitySite::ObjectCover => &[P::ObjectLiteral, P::ObjectBindingPattern],
            AmbiguitySite::FunctionStatement => {
                &[P::FunctionDeclaration, P::FunctionExpression]
            }
            AmbiguitySite::GeneratorStatement => {
                &[P::HoistableDeclaration, P::GeneratorExpression]
            }
            AmbiguitySite::PrefixAngle => &[P::TypeAssertion, P::TypeParameters],
            AmbiguitySite::CallTypeArguments => &[P::TypeArguments, P::RelationalExpression],
            AmbiguitySite::LoopStatement => &[P::IterationStatement, P::BreakableStatement],
        }
    }
}

//! Node kinds of the uniform syntax view, named after the productions they
//! come from.

use std::fmt;

macro_rules! node_kinds {
    ($($variant:ident => $name:literal,)*) => {
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum NodeKind {
            $($variant,)*
        }

        impl NodeKind {
            /// Production name in `snake_case`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => $name,)*
                }
            }
        }
    };
}

node_kinds! {
    SourceFile => "source_file",
    Error => "error",

    // Statements
    BlockStatement => "block_statement",
    EmptyStatement => "empty_statement",
    ExpressionStatement => "expression_statement",
    VariableDeclaration => "variable_declaration",
    VariableDeclarator => "variable_declarator",
    IfStatement => "if_statement",
    ForStatement => "for_statement",
    EmptySlot => "empty_slot",
    ForInStatement => "for_in_statement",
    ForOfStatement => "for_of_statement",
    WhileStatement => "while_statement",
    DoWhileStatement => "do_while_statement",
    SwitchStatement => "switch_statement",
    CaseClause => "case_clause",
    DefaultClause => "default_clause",
    TryStatement => "try_statement",
    CatchClause => "catch_clause",
    FinallyClause => "finally_clause",
    LabelledStatement => "labelled_statement",
    WithStatement => "with_statement",
    DebuggerStatement => "debugger_statement",
    ReturnStatement => "return_statement",
    ThrowStatement => "throw_statement",
    BreakStatement => "break_statement",
    ContinueStatement => "continue_statement",
    LabelIdentifier => "label_identifier",

    // Declarations
    FunctionDeclaration => "function_declaration",
    ClassDeclaration => "class_declaration",
    InterfaceDeclaration => "interface_declaration",
    InterfaceExtends => "interface_extends_clause",
    TypeAliasDeclaration => "type_alias_declaration",
    EnumDeclaration => "enum_declaration",
    EnumMember => "enum_member",
    NamespaceDeclaration => "namespace_declaration",
    IdentifierPath => "identifier_path",
    ImportAliasDeclaration => "import_alias_declaration",
    ImportRequireDeclaration => "import_require_declaration",
    ImportDeclaration => "import_declaration",
    NamespaceImport => "namespace_import",
    NamedImports => "named_imports",
    ImportSpecifier => "import_specifier",
    ExportDeclaration => "export_declaration",
    ExportDefault => "export_default",
    ExportAll => "export_all",
    ExportClause => "export_clause",
    ExportSpecifier => "export_specifier",
    ExportAssignment => "export_assignment",
    ModuleSpecifier => "module_specifier",

    // Ambient declarations
    AmbientVariableDeclaration => "ambient_variable_declaration",
    AmbientBinding => "ambient_binding",
    AmbientFunctionDeclaration => "ambient_function_declaration",
    AmbientClassDeclaration => "ambient_class_declaration",
    AmbientConstructorDeclaration => "ambient_constructor_declaration",
    AmbientPropertyMember => "ambient_property_member",
    AmbientMethodMember => "ambient_method_member",
    AmbientEnumDeclaration => "ambient_enum_declaration",
    AmbientNamespaceDeclaration => "ambient_namespace_declaration",
    AmbientNamespaceElement => "ambient_namespace_element",
    AmbientModuleDeclaration => "ambient_module_declaration",

    // Classes
    ClassHeritage => "class_heritage",
    ClassExtends => "class_extends",
    ImplementsClause => "implements_clause",
    ClassBody => "class_body",
    ConstructorDeclaration => "constructor_declaration",
    MemberVariableDeclaration => "member_variable_declaration",
    MemberFunctionDeclaration => "member_function_declaration",
    GetAccessor => "get_accessor",
    SetAccessor => "set_accessor",
    IndexMemberDeclaration => "index_member_declaration",
    Modifier => "modifier",
    OptionalMarker => "optional",

    // Functions and parameters
    CallSignature => "call_signature",
    FormalParameters => "formal_parameters",
    FormalParameter => "formal_parameter",
    RestParameter => "rest_parameter",
    TypeParameters => "type_parameters",
    TypeParameter => "type_parameter",
    Constraint => "constraint",
    TypeAnnotation => "type_annotation",
    Initializer => "initializer",
    FunctionBody => "function_body",

    // Expressions
    This => "this",
    Super => "super",
    Identifier => "identifier",
    NullLiteral => "null",
    BooleanLiteral => "boolean_literal",
    NumberLiteral => "number_literal",
    StringLiteral => "string_literal",
    RegexLiteral => "regex_literal",
    TemplateLiteral => "template_literal",
    TemplateChunk => "template_chunk",
    TaggedTemplate => "tagged_template",
    ArrayLiteral => "array_literal",
    Elision => "elision",
    SpreadElement => "spread_element",
    ObjectLiteral => "object_literal",
    PropertyAssignment => "property_assignment",
    ShorthandProperty => "shorthand_property",
    CoverInitializedName => "cover_initialized_name",
    MethodDefinition => "method_definition",
    PropertyName => "property_name",
    FunctionExpression => "function_expression",
    ArrowFunction => "arrow_function",
    ClassExpression => "class_expression",
    ParenthesizedExpression => "parenthesized_expression",
    SequenceExpression => "sequence_expression",
    UnaryExpression => "unary_expression",
    PrefixUpdateExpression => "prefix_update_expression",
    PostfixUpdateExpression => "postfix_update_expression",
    BinaryExpression => "binary_expression",
    AssignmentExpression => "assignment_expression",
    ConditionalExpression => "conditional_expression",
    CallExpression => "call_expression",
    NewExpression => "new_expression",
    Arguments => "arguments",
    TypeArguments => "type_arguments",
    MemberExpression => "member_expression",
    IndexExpression => "index_expression",
    NewTarget => "new_target",
    YieldExpression => "yield_expression",
    TypeAssertion => "type_assertion",
    AsExpression => "as_expression",

    // Patterns
    BindingIdentifier => "binding_identifier",
    ObjectBindingPattern => "object_binding_pattern",
    BindingProperty => "binding_property",
    ShorthandBindingProperty => "shorthand_binding_property",
    ArrayBindingPattern => "array_binding_pattern",
    RestElement => "rest_element",
    AssignmentPattern => "assignment_pattern",

    // Types
    PredefinedType => "predefined_type",
    TypeReference => "type_reference",
    EntityName => "entity_name",
    ObjectType => "object_type",
    ArrayType => "array_type",
    TupleType => "tuple_type",
    UnionType => "union_type",
    IntersectionType => "intersection_type",
    FunctionType => "function_type",
    ConstructorType => "constructor_type",
    TypeQuery => "type_query",
    ThisType => "this_type",
    ParenthesizedType => "parenthesized_type",
    LiteralType => "literal_type",
    PropertySignature => "property_signature",
    CallSignatureMember => "call_signature_member",
    ConstructSignature => "construct_signature",
    IndexSignature => "index_signature",
    MethodSignature => "method_signature",
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

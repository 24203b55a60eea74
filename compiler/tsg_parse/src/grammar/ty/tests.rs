#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::{
    IndexKeyType, LiteralType, PredefinedType, StmtKind, Type, TypeKind, TypeMemberKind,
};
use tsg_ir::StringInterner;

use crate::{parse_str, ParseOptions, ParseResult};

fn parse(source: &str) -> ParseResult {
    parse_str(source, &StringInterner::new(), ParseOptions::default())
}

/// The aliased type of `type A = <ty>;`.
fn alias(ty: &str) -> Type {
    let source = format!("type A = {ty};");
    let result = parse(&source);
    assert!(
        !result.has_errors(),
        "unexpected errors for {source:?}: {:?}",
        result.errors
    );
    let mut items = result.file.items;
    match items.remove(0).kind {
        StmtKind::TypeAlias(decl) => decl.ty,
        other => panic!("expected type alias, got {other:?}"),
    }
}

#[test]
fn predefined_types() {
    assert_eq!(
        alias("number").kind,
        TypeKind::Predefined(PredefinedType::Number)
    );
    assert_eq!(alias("void").kind, TypeKind::Predefined(PredefinedType::Void));
    assert_eq!(alias("any").kind, TypeKind::Predefined(PredefinedType::Any));
}

#[test]
fn array_suffix_binds_tighter_than_union() {
    let TypeKind::Union(members) = alias("string[] | number").kind else {
        panic!("expected union");
    };
    assert_eq!(members.len(), 2);
    assert!(matches!(members[0].kind, TypeKind::Array(_)));
}

#[test]
fn intersection_binds_tighter_than_union() {
    let TypeKind::Union(members) = alias("A & B | C").kind else {
        panic!("expected union");
    };
    assert!(matches!(&members[0].kind, TypeKind::Intersection(inner) if inner.len() == 2));
    assert!(matches!(members[1].kind, TypeKind::Reference(_)));
}

#[test]
fn parenthesized_type_is_not_a_function_type() {
    let TypeKind::Array(element) = alias("(string | number)[]").kind else {
        panic!("expected array type");
    };
    assert!(matches!(element.kind, TypeKind::Paren(_)));
}

#[test]
fn function_and_constructor_types() {
    let TypeKind::Function(function) = alias("(a: number, b?: string) => void").kind else {
        panic!("expected function type");
    };
    assert_eq!(function.params.len(), 2);
    assert!(function.params[1].optional);

    let TypeKind::Function(generic) = alias("<T>(x: T) => T").kind else {
        panic!("expected generic function type");
    };
    assert_eq!(generic.type_params.len(), 1);

    assert!(matches!(alias("new () => Foo").kind, TypeKind::Constructor(_)));
}

#[test]
fn nested_type_arguments_close_on_adjacent_angles() {
    let TypeKind::Reference(outer) = alias("Array<Array<number>>").kind else {
        panic!("expected type reference");
    };
    assert_eq!(outer.type_args.len(), 1);
    let TypeKind::Reference(inner) = &outer.type_args[0].kind else {
        panic!("expected nested type reference");
    };
    assert_eq!(inner.type_args.len(), 1);
}

#[test]
fn qualified_type_name() {
    let TypeKind::Reference(reference) = alias("A.B.C").kind else {
        panic!("expected type reference");
    };
    assert_eq!(reference.name.segments.len(), 3);
    assert!(reference.name.is_qualified());
}

#[test]
fn tuple_and_query_types() {
    assert!(matches!(&alias("[string, number]").kind, TypeKind::Tuple(items) if items.len() == 2));
    assert!(matches!(&alias("typeof a.b").kind, TypeKind::Query(name) if name.segments.len() == 2));
}

#[test]
fn literal_types() {
    let TypeKind::Union(members) = alias("\"a\" | 1 | true").kind else {
        panic!("expected union");
    };
    assert!(matches!(members[0].kind, TypeKind::Literal(LiteralType::String(_))));
    assert!(matches!(members[1].kind, TypeKind::Literal(LiteralType::Number(_))));
    assert_eq!(members[2].kind, TypeKind::Literal(LiteralType::Bool(true)));
}

#[test]
fn object_type_members() {
    let TypeKind::Object(members) =
        alias("{ a: number; b?: string, c(): void; [k: string]: any; new (): T; (x): y }").kind
    else {
        panic!("expected object type");
    };
    let kinds: Vec<_> = members
        .iter()
        .map(|member| match &member.kind {
            TypeMemberKind::Property { optional, .. } => {
                if *optional {
                    "optional property"
                } else {
                    "property"
                }
            }
            TypeMemberKind::Method { .. } => "method",
            TypeMemberKind::Index(index) => {
                assert_eq!(index.key_type, IndexKeyType::String);
                "index"
            }
            TypeMemberKind::Construct(_) => "construct",
            TypeMemberKind::Call(_) => "call",
            TypeMemberKind::Error => "error",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "property",
            "optional property",
            "method",
            "index",
            "construct",
            "call"
        ]
    );
}

#[test]
fn object_type_members_split_on_line_breaks() {
    let TypeKind::Object(members) = alias("{\n  a: number\n  b: string\n}").kind else {
        panic!("expected object type");
    };
    assert_eq!(members.len(), 2);
}

#[test]
fn object_type_members_need_a_separator_on_one_line() {
    let result = parse("type A = { a: number b: string };");
    let codes: Vec<_> = result.errors.iter().map(|e| e.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1001]);
}

#[test]
fn index_signature_key_must_be_string_or_number() {
    let result = parse("type A = { [k: boolean]: T };");
    assert_eq!(result.errors[0].code, ErrorCode::E1005);
}

#[test]
fn missing_type_after_colon() {
    let result = parse("let x: ;\nlet y = 1;");
    assert_eq!(result.errors[0].code, ErrorCode::E1005);
    assert!(matches!(result.file.items[1].kind, StmtKind::Var(_)));
}

#[test]
fn required_type_arguments() {
    let interner = StringInterner::new();
    let options = ParseOptions::default().with_required_type_arguments(true);
    let result = parse_str("let x: Foo; let y: number;", &interner, options);
    let codes: Vec<_> = result.errors.iter().map(|e| e.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1014]);

    let result = parse_str("let x: Foo<number>;", &interner, options);
    assert!(!result.has_errors());
}

#[test]
fn type_parameter_constraints() {
    let result = parse("type Box<T extends object, U> = T | U;");
    assert!(!result.has_errors());
    let StmtKind::TypeAlias(decl) = &result.file.items[0].kind else {
        panic!("expected type alias");
    };
    assert_eq!(decl.type_params.len(), 2);
    assert!(decl.type_params[0].constraint.is_some());
    assert!(decl.type_params[1].constraint.is_none());
}

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;
use crate::ast::{
    BinaryOp, Expr, ExprKind, Goal, Ident, Pattern, SourceKind, Stmt, StmtKind, VarDecl,
    VarDeclarator, VarKind,
};

fn ident_expr(interner: &StringInterner, text: &str, start: u32) -> Expr {
    let len = u32::try_from(text.len()).unwrap();
    Expr::new(
        ExprKind::Ident(interner.intern(text)),
        Span::new(start, start + len),
    )
}

/// `let x = a + b;`
fn let_sum(interner: &StringInterner) -> SourceFile {
    let left = ident_expr(interner, "a", 8);
    let right = ident_expr(interner, "b", 12);
    let sum = Expr::new(
        ExprKind::Binary {
            op: BinaryOp::Add,
            left: Box::new(left),
            right: Box::new(right),
        },
        Span::new(8, 13),
    );
    let x = Ident::new(interner.intern("x"), Span::new(4, 5));
    let decl = VarDecl {
        kind: VarKind::Let,
        declarators: vec![VarDeclarator {
            pattern: Pattern::ident(x),
            ty: None,
            init: Some(sum),
            span: Span::new(4, 13),
        }],
        span: Span::new(0, 14),
    };
    SourceFile {
        kind: SourceKind::Implementation,
        goal: Goal::Script,
        items: vec![Stmt::new(StmtKind::Var(decl), Span::new(0, 14))],
        span: Span::new(0, 14),
    }
}

#[test]
fn lowers_variable_statement() {
    let interner = StringInterner::new();
    let tree = SyntaxNode::lower(&let_sum(&interner), &interner);
    assert_eq!(
        tree.shape(),
        "(source_file \"implementation script\" \
         (variable_declaration \"let\" \
         (variable_declarator (binding_identifier \"x\") \
         (initializer (binary_expression \"+\" (identifier \"a\") (identifier \"b\"))))))"
    );
}

#[test]
fn descendants_are_preorder() {
    let interner = StringInterner::new();
    let tree = SyntaxNode::lower(&let_sum(&interner), &interner);
    let kinds: Vec<NodeKind> = tree.descendants().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::SourceFile,
            NodeKind::VariableDeclaration,
            NodeKind::VariableDeclarator,
            NodeKind::BindingIdentifier,
            NodeKind::Initializer,
            NodeKind::BinaryExpression,
            NodeKind::Identifier,
            NodeKind::Identifier,
        ]
    );
}

#[test]
fn find_and_count() {
    let interner = StringInterner::new();
    let tree = SyntaxNode::lower(&let_sum(&interner), &interner);
    assert_eq!(tree.count(NodeKind::Identifier), 2);
    let binary = tree.find(NodeKind::BinaryExpression).unwrap();
    assert_eq!(binary.span, Span::new(8, 13));
    assert_eq!(binary.text, Some("+"));
    assert_eq!(binary.child(1).and_then(|c| c.text), Some("b"));
    assert!(tree.find(NodeKind::CallExpression).is_none());
}

#[test]
fn shape_ignores_spans() {
    let interner = StringInterner::new();
    let mut file = let_sum(&interner);
    let a = SyntaxNode::lower(&file, &interner);
    file.span = Span::new(0, 40);
    file.items[0].span = Span::new(2, 16);
    let b = SyntaxNode::lower(&file, &interner);
    assert_ne!(a, b);
    assert_eq!(a.shape(), b.shape());
}

#[test]
fn display_indents_children() {
    let interner = StringInterner::new();
    let tree = SyntaxNode::lower(&let_sum(&interner), &interner);
    let rendered = tree.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "source_file 0..14 \"implementation script\"");
    assert_eq!(lines[1], "  variable_declaration 0..14 \"let\"");
    assert!(lines[6].starts_with("          identifier 8..9"));
}

#[test]
fn empty_for_slots_are_explicit() {
    let interner = StringInterner::new();
    let body = Stmt::new(StmtKind::Empty, Span::new(8, 9));
    let for_stmt = Stmt::new(
        StmtKind::For {
            init: None,
            test: None,
            update: None,
            body: Box::new(body),
        },
        Span::new(0, 9),
    );
    let file = SourceFile {
        kind: SourceKind::Declaration,
        goal: Goal::Module,
        items: vec![for_stmt],
        span: Span::new(0, 9),
    };
    let tree = SyntaxNode::lower(&file, &interner);
    assert_eq!(
        tree.shape(),
        "(source_file \"declaration module\" \
         (for_statement (empty_slot) (empty_slot) (empty_slot) (empty_statement)))"
    );
}

#[test]
fn node_names_are_snake_case() {
    for kind in [
        NodeKind::AmbientNamespaceElement,
        NodeKind::CoverInitializedName,
        NodeKind::IndexMemberDeclaration,
        NodeKind::TypeAssertion,
    ] {
        let name = kind.name();
        assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '_'), "{name}");
        assert_eq!(kind.to_string(), name);
    }
}

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::{ExprKind, ForHead, ForInit, Stmt, StmtKind, VarKind};
use tsg_ir::StringInterner;

use crate::{parse_str, ParseOptions, ParseResult};

fn parse(source: &str) -> ParseResult {
    parse_str(source, &StringInterner::new(), ParseOptions::default())
}

fn codes(result: &ParseResult) -> Vec<ErrorCode> {
    result.errors.iter().map(|error| error.code).collect()
}

fn clean(source: &str) -> Vec<Stmt> {
    let result = parse(source);
    assert!(
        !result.has_errors(),
        "unexpected errors for {source:?}: {:?}",
        result.errors
    );
    result.file.items
}

#[test]
fn variable_statements() {
    let items = clean("var a; let b = 1, c: string; const d = 2;");
    let kinds: Vec<_> = items
        .iter()
        .map(|stmt| match &stmt.kind {
            StmtKind::Var(decl) => (decl.kind, decl.declarators.len()),
            other => panic!("expected variable statement, got {other:?}"),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![(VarKind::Var, 1), (VarKind::Let, 2), (VarKind::Const, 1)]
    );
}

#[test]
fn let_as_identifier() {
    let items = clean("let = 1;\nlet;");
    assert!(matches!(items[0].kind, StmtKind::Expr(_)));
    assert!(matches!(items[1].kind, StmtKind::Expr(_)));
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    let items = clean("if (a) if (b) x(); else y();");
    let StmtKind::If {
        consequent,
        alternate,
        ..
    } = &items[0].kind
    else {
        panic!("expected if");
    };
    assert!(alternate.is_none());
    assert!(matches!(
        consequent.kind,
        StmtKind::If {
            alternate: Some(_),
            ..
        }
    ));
}

#[test]
fn loops() {
    let items = clean("while (a) b();\ndo c(); while (d)\nfor (;;) {}");
    assert!(matches!(items[0].kind, StmtKind::While { .. }));
    assert!(matches!(items[1].kind, StmtKind::DoWhile { .. }));
    assert!(matches!(
        items[2].kind,
        StmtKind::For {
            init: None,
            test: None,
            update: None,
            ..
        }
    ));
}

#[test]
fn do_while_semicolon_is_optional_on_one_line() {
    let items = clean("do x(); while (y) z();");
    assert_eq!(items.len(), 2);
}

#[test]
fn classic_for_with_declaration() {
    let items = clean("for (var i = 0, n = a.length; i < n; i++) {}");
    let StmtKind::For {
        init: Some(ForInit::Var(decl)),
        test: Some(_),
        update: Some(_),
        ..
    } = &items[0].kind
    else {
        panic!("expected classic for");
    };
    assert_eq!(decl.declarators.len(), 2);
}

#[test]
fn for_in_and_for_of() {
    let items = clean("for (var k in o) {}\nfor (const v of list) {}\nfor (x in o);");
    assert!(matches!(
        items[0].kind,
        StmtKind::ForIn {
            left: ForHead::Var(_),
            ..
        }
    ));
    assert!(matches!(
        items[1].kind,
        StmtKind::ForOf {
            left: ForHead::Var(_),
            ..
        }
    ));
    assert!(matches!(
        items[2].kind,
        StmtKind::ForIn {
            left: ForHead::Pattern(_),
            ..
        }
    ));
}

#[test]
fn for_in_head_binds_one_name_without_initializer() {
    assert_eq!(
        codes(&parse("for (var a, b in o) {}")),
        vec![ErrorCode::E1001]
    );
    assert_eq!(
        codes(&parse("for (var a = 1 of o) {}")),
        vec![ErrorCode::E1001]
    );
}

#[test]
fn const_in_for_of_needs_no_initializer() {
    clean("for (const [k, v] of entries) {}");
}

#[test]
fn for_head_slot_error_is_contained() {
    let result = parse("for (a +; i < n; i++) { body(); }");
    assert_eq!(result.errors.len(), 1);
    let StmtKind::For {
        init: Some(ForInit::Expr(init)),
        test: Some(_),
        update: Some(_),
        body,
    } = &result.file.items[0].kind
    else {
        panic!("expected classic for");
    };
    assert!(init.is_error());
    assert!(matches!(&body.kind, StmtKind::Block(block) if block.stmts.len() == 1));
}

#[test]
fn for_head_missing_separator() {
    let result = parse("for (i = 0 i < n; i++) {}\nnext();");
    assert_eq!(result.errors[0].code, ErrorCode::E1001);
    assert_eq!(result.file.items.len(), 2);
    assert!(matches!(result.file.items[0].kind, StmtKind::For { .. }));
}

#[test]
fn for_head_last_slot_leftovers_keep_the_loop() {
    for source in [
        "for (;; i++ j) x;\nvar after = 1;",
        "for (x of y z) x;\nvar after = 1;",
        "for (k in o p) x;\nvar after = 1;",
    ] {
        let result = parse(source);
        assert_eq!(result.errors.len(), 1, "{source}: {:?}", result.errors);
        assert_eq!(result.errors[0].code, ErrorCode::E1001);
        assert_eq!(result.file.items.len(), 2, "{source}");
        assert!(
            matches!(
                result.file.items[0].kind,
                StmtKind::For { .. } | StmtKind::ForIn { .. } | StmtKind::ForOf { .. }
            ),
            "{source}: {:?}",
            result.file.items[0].kind
        );
        assert!(matches!(result.file.items[1].kind, StmtKind::Var(_)));
    }
}

#[test]
fn switch_clauses() {
    let items = clean("switch (x) { case 1: case 2: a(); break; default: b(); }");
    let StmtKind::Switch { cases, .. } = &items[0].kind else {
        panic!("expected switch");
    };
    let shape: Vec<_> = cases
        .iter()
        .map(|case| (case.test.is_some(), case.body.len()))
        .collect();
    assert_eq!(shape, vec![(true, 0), (true, 2), (false, 1)]);
}

#[test]
fn try_forms() {
    let items = clean("try {} catch (e) {}\ntry {} finally {}\ntry {} catch (e) {} finally {}");
    let shape: Vec<_> = items
        .iter()
        .map(|stmt| match &stmt.kind {
            StmtKind::Try {
                handler, finalizer, ..
            } => (handler.is_some(), finalizer.is_some()),
            other => panic!("expected try, got {other:?}"),
        })
        .collect();
    assert_eq!(shape, vec![(true, false), (false, true), (true, true)]);
}

#[test]
fn try_without_handler_is_reported() {
    let result = parse("try {}\nx();");
    assert_eq!(codes(&result), vec![ErrorCode::E1001]);
    assert_eq!(result.file.items.len(), 2);
}

#[test]
fn return_is_restricted() {
    let result = parse("function f() { return\n5; }");
    assert!(!result.has_errors());
    let StmtKind::Function(function) = &result.file.items[0].kind else {
        panic!("expected function");
    };
    let body = &function.body.as_ref().unwrap().stmts;
    assert_eq!(body.len(), 2);
    assert!(matches!(body[0].kind, StmtKind::Return(None)));
}

#[test]
fn throw_operand_must_be_on_the_same_line() {
    let result = parse("throw\nnew Error();");
    assert_eq!(result.errors[0].code, ErrorCode::E1015);
    assert!(!clean("throw new Error('x');").is_empty());
}

#[test]
fn break_and_continue_labels() {
    let items = clean("outer: for (;;) { for (;;) { continue outer; break\nouter; } }");
    let StmtKind::Labeled { body, .. } = &items[0].kind else {
        panic!("expected labeled statement");
    };
    let StmtKind::For { body, .. } = &body.kind else {
        panic!("expected for");
    };
    let StmtKind::Block(outer) = &body.kind else {
        panic!("expected block");
    };
    let StmtKind::For { body, .. } = &outer.stmts[0].kind else {
        panic!("expected inner for");
    };
    let StmtKind::Block(inner) = &body.kind else {
        panic!("expected block");
    };
    assert!(matches!(inner.stmts[0].kind, StmtKind::Continue(Some(_))));
    // The line break ends `break`, leaving `outer;` as its own statement.
    assert!(matches!(inner.stmts[1].kind, StmtKind::Break(None)));
    assert!(matches!(inner.stmts[2].kind, StmtKind::Expr(_)));
}

#[test]
fn with_debugger_and_empty_statements() {
    let items = clean("with (o) x;\ndebugger;\n;");
    assert!(matches!(items[0].kind, StmtKind::With { .. }));
    assert!(matches!(items[1].kind, StmtKind::Debugger));
    assert!(matches!(items[2].kind, StmtKind::Empty));
}

#[test]
fn nested_error_recovers_at_innermost_statement() {
    let result = parse("function f() {\n  let x = ;\n  g();\n}\nh();");
    assert_eq!(codes(&result), vec![ErrorCode::E1002]);
    assert_eq!(result.file.items.len(), 2);
    let StmtKind::Function(function) = &result.file.items[0].kind else {
        panic!("expected function");
    };
    let body = &function.body.as_ref().unwrap().stmts;
    assert_eq!(body.len(), 2);
    assert!(body[0].is_error());
    assert!(matches!(&body[1].kind, StmtKind::Expr(expr) if matches!(expr.kind, ExprKind::Call { .. })));
}

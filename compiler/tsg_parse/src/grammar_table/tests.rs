#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use tsg_diagnostic::ErrorCode;
use tsg_ir::ast::{AssignOp, BinaryOp, UnaryOp};

use super::conflict::{ConflictDecl, Production};
use super::precedence::{Assoc, Precedence};
use super::*;

fn level(op: BinaryOp) -> Precedence {
    STANDARD
        .precedence_of(Operator::Binary(op))
        .unwrap()
        .precedence
}

#[test]
fn every_binary_operator_has_a_level() {
    for op in BinaryOp::ALL {
        assert!(STANDARD.precedence_of(Operator::Binary(op)).is_some(), "{op:?}");
    }
}

#[test]
fn relative_order() {
    let chain = [
        BinaryOp::Or,
        BinaryOp::And,
        BinaryOp::BitOr,
        BinaryOp::BitXor,
        BinaryOp::BitAnd,
        BinaryOp::StrictEq,
        BinaryOp::Instanceof,
        BinaryOp::UShr,
        BinaryOp::Sub,
        BinaryOp::Mod,
    ];
    for pair in chain.windows(2) {
        assert!(level(pair[0]) < level(pair[1]), "{pair:?}");
    }
    let assign = STANDARD
        .precedence_of(Operator::Assign(AssignOp::Add))
        .unwrap();
    let conditional = STANDARD.precedence_of(Operator::Conditional).unwrap();
    let unary = STANDARD
        .precedence_of(Operator::Unary(UnaryOp::Typeof))
        .unwrap();
    assert!(assign.precedence < conditional.precedence);
    assert!(conditional.precedence < level(BinaryOp::Or));
    assert!(level(BinaryOp::Mul) < unary.precedence);
}

#[test]
fn as_sits_with_relational_operators() {
    let entry = STANDARD.precedence_of(Operator::As).unwrap();
    assert_eq!(entry.precedence, level(BinaryOp::In));
    assert_eq!(entry.assoc, Assoc::Left);
}

#[test]
fn assignment_and_conditional_are_right_associative() {
    assert_eq!(
        STANDARD
            .precedence_of(Operator::Assign(AssignOp::Assign))
            .unwrap()
            .assoc,
        Assoc::Right
    );
    assert_eq!(
        STANDARD.precedence_of(Operator::Conditional).unwrap().assoc,
        Assoc::Right
    );
}

#[test]
fn tighter_walks_the_levels() {
    assert_eq!(Precedence::Comma.tighter(), Precedence::Assignment);
    assert_eq!(Precedence::Multiplicative.tighter(), Precedence::Unary);
    assert_eq!(Precedence::Member.tighter(), Precedence::Member);
}

#[test]
fn every_site_has_a_conflict() {
    for site in AmbiguitySite::ALL {
        let conflict = STANDARD.conflict_for(*site).unwrap();
        for production in site.candidates() {
            assert!(conflict.includes(*production), "{site:?}");
        }
    }
}

#[test]
fn duplicate_operator() {
    let operators = [
        OperatorEntry {
            operator: Operator::Binary(BinaryOp::Add),
            precedence: Precedence::Additive,
            assoc: Assoc::Left,
        },
        OperatorEntry {
            operator: Operator::Binary(BinaryOp::Add),
            precedence: Precedence::Multiplicative,
            assoc: Assoc::Left,
        },
    ];
    let error = Grammar::new(&operators, STANDARD_CONFLICTS, &[]).unwrap_err();
    assert_eq!(error, GrammarError::DuplicateOperator { operator: "+" });
    assert_eq!(error.code(), ErrorCode::E9001);
}

#[test]
fn mixed_associativity() {
    let operators = [
        OperatorEntry {
            operator: Operator::Binary(BinaryOp::Add),
            precedence: Precedence::Additive,
            assoc: Assoc::Left,
        },
        OperatorEntry {
            operator: Operator::Binary(BinaryOp::Sub),
            precedence: Precedence::Additive,
            assoc: Assoc::Right,
        },
    ];
    let error = Grammar::new(&operators, &[], &[]).unwrap_err();
    assert_eq!(error, GrammarError::MixedAssociativity { level: "additive" });
    assert_eq!(
        error.to_string(),
        "precedence level `additive` mixes associativities"
    );
}

#[test]
fn undeclared_ambiguity() {
    let conflicts = [ConflictDecl {
        name: "type_name/namespace_name",
        productions: &[Production::TypeName, Production::NamespaceName],
    }];
    let error = Grammar::new(
        STANDARD_OPERATORS,
        &conflicts,
        &[AmbiguitySite::QualifiedName, AmbiguitySite::ObjectCover],
    )
    .unwrap_err();
    assert_eq!(
        error,
        GrammarError::UndeclaredAmbiguity {
            site: "object cover"
        }
    );
    assert_eq!(error.to_diagnostic().code, ErrorCode::E9003);
}

#[test]
fn degenerate_conflict() {
    let conflicts = [ConflictDecl {
        name: "lonely",
        productions: &[Production::Literal],
    }];
    let error = Grammar::new(STANDARD_OPERATORS, &conflicts, &[]).unwrap_err();
    assert_eq!(error, GrammarError::DegenerateConflict { conflict: "lonely" });
    assert_eq!(error.code(), ErrorCode::E9004);
}

#[test]
fn standard_tables_are_exposed() {
    assert_eq!(STANDARD.operators().len(), STANDARD_OPERATORS.len());
    assert_eq!(STANDARD.conflicts().len(), 16);
    assert!(Grammar::new(STANDARD_OPERATORS, STANDARD_CONFLICTS, AmbiguitySite::ALL).is_ok());
}

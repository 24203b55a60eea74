//! Operator precedence table.
//!
//! One process-wide constant lists every operator with its level and
//! associativity, loosest level first. The expression parser climbs this
//! table; it never hard-codes a level.

use tsg_ir::ast::{AssignOp, BinaryOp, UnaryOp, UpdateOp};

/// Precedence levels, loosest first. Declaration order is the ordering.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Precedence {
    Comma,
    Assignment,
    Conditional,
    LogicalOr,
    LogicalAnd,
    BitOr,
    BitXor,
    BitAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Unary,
    Update,
    New,
    Call,
    Member,
}

impl Precedence {
    /// The next tighter level; `Member` is the tightest.
    pub const fn tighter(self) -> Self {
        match self {
            Precedence::Comma => Precedence::Assignment,
            Precedence::Assignment => Precedence::Conditional,
            Precedence::Conditional => Precedence::LogicalOr,
            Precedence::LogicalOr => Precedence::LogicalAnd,
            Precedence::LogicalAnd => Precedence::BitOr,
            Precedence::BitOr => Precedence::BitXor,
            Precedence::BitXor => Precedence::BitAnd,
            Precedence::BitAnd => Precedence::Equality,
            Precedence::Equality => Precedence::Relational,
            Precedence::Relational => Precedence::Shift,
            Precedence::Shift => Precedence::Additive,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::Unary,
            Precedence::Unary => Precedence::Update,
            Precedence::Update => Precedence::New,
            Precedence::New => Precedence::Call,
            Precedence::Call | Precedence::Member => Precedence::Member,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Precedence::Comma => "comma",
            Precedence::Assignment => "assignment",
            Precedence::Conditional => "conditional",
            Precedence::LogicalOr => "logical or",
            Precedence::LogicalAnd => "logical and",
            Precedence::BitOr => "bitwise or",
            Precedence::BitXor => "bitwise xor",
            Precedence::BitAnd => "bitwise and",
            Precedence::Equality => "equality",
            Precedence::Relational => "relational",
            Precedence::Shift => "shift",
            Precedence::Additive => "additive",
            Precedence::Multiplicative => "multiplicative",
            Precedence::Unary => "unary",
            Precedence::Update => "update",
            Precedence::New => "new",
            Precedence::Call => "call",
            Precedence::Member => "member",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Assoc {
    Left,
    Right,
    /// Operators that do not chain (postfix update).
    None,
}

/// Every operator the expression grammar knows, including the ones that
/// are not parsed by precedence climbing but still need a level.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    Comma,
    Assign(AssignOp),
    Conditional,
    Binary(BinaryOp),
    /// `expr as T`
    As,
    Unary(UnaryOp),
    /// `<T>expr`
    TypeAssertion,
    Update(UpdateOp),
    New,
    Call,
    Member,
}

impl Operator {
    /// Distinct number per operator, for const comparisons.
    const fn key(self) -> u16 {
        match self {
            Operator::Comma => 0,
            Operator::Assign(op) => 10 + op as u16,
            Operator::Conditional => 30,
            Operator::Binary(op) => 40 + op as u16,
            Operator::As => 70,
            Operator::Unary(op) => 80 + op as u16,
            Operator::TypeAssertion => 90,
            Operator::Update(op) => 100 + op as u16,
            Operator::New => 110,
            Operator::Call => 111,
            Operator::Member => 112,
        }
    }

    pub const fn same_as(self, other: Operator) -> bool {
        self.key() == other.key()
    }

    pub const fn spelling(self) -> &'static str {
        match self {
            Operator::Comma => ",",
            Operator::Assign(op) => op.as_str(),
            Operator::Conditional => "?:",
            Operator::Binary(op) => op.as_str(),
            Operator::As => "as",
            Operator::Unary(op) => op.as_str(),
            Operator::TypeAssertion => "<T>",
            Operator::Update(op) => op.as_str(),
            Operator::New => "new",
            Operator::Call => "()",
            Operator::Member => ".",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct OperatorEntry {
    pub operator: Operator,
    pub precedence: Precedence,
    pub assoc: Assoc,
}

const fn entry(operator: Operator, precedence: Precedence, assoc: Assoc) -> OperatorEntry {
    OperatorEntry {
        operator,
        precedence,
        assoc,
    }
}

const fn binary(op: BinaryOp, precedence: Precedence) -> OperatorEntry {
    entry(Operator::Binary(op), precedence, Assoc::Left)
}

const fn assign(op: AssignOp) -> OperatorEntry {
    entry(Operator::Assign(op), Precedence::Assignment, Assoc::Right)
}

const fn unary(op: UnaryOp) -> OperatorEntry {
    entry(Operator::Unary(op), Precedence::Unary, Assoc::Right)
}

pub const STANDARD_OPERATORS: &[OperatorEntry] = &[
    entry(Operator::Comma, Precedence::Comma, Assoc::Left),
    assign(AssignOp::Assign),
    assign(AssignOp::Mul),
    assign(AssignOp::Div),
    assign(AssignOp::Mod),
    assign(AssignOp::Add),
    assign(AssignOp::Sub),
    assign(AssignOp::Shl),
    assign(AssignOp::Shr),
    assign(AssignOp::UShr),
    assign(AssignOp::BitAnd),
    assign(AssignOp::BitXor),
    assign(AssignOp::BitOr),
    entry(Operator::Conditional, Precedence::Conditional, Assoc::Right),
    binary(BinaryOp::Or, Precedence::LogicalOr),
    binary(BinaryOp::And, Precedence::LogicalAnd),
    binary(BinaryOp::BitOr, Precedence::BitOr),
    binary(BinaryOp::BitXor, Precedence::BitXor),
    binary(BinaryOp::BitAnd, Precedence::BitAnd),
    binary(BinaryOp::Eq, Precedence::Equality),
    binary(BinaryOp::NotEq, Precedence::Equality),
    binary(BinaryOp::StrictEq, Precedence::Equality),
    binary(BinaryOp::StrictNotEq, Precedence::Equality),
    binary(BinaryOp::Lt, Precedence::Relational),
    binary(BinaryOp::Gt, Precedence::Relational),
    binary(BinaryOp::LtEq, Precedence::Relational),
    binary(BinaryOp::GtEq, Precedence::Relational),
    binary(BinaryOp::Instanceof, Precedence::Relational),
    binary(BinaryOp::In, Precedence::Relational),
    entry(Operator::As, Precedence::Relational, Assoc::Left),
    binary(BinaryOp::Shl, Precedence::Shift),
    binary(BinaryOp::Shr, Precedence::Shift),
    binary(BinaryOp::UShr, Precedence::Shift),
    binary(BinaryOp::Add, Precedence::Additive),
    binary(BinaryOp::Sub, Precedence::Additive),
    binary(BinaryOp::Mul, Precedence::Multiplicative),
    binary(BinaryOp::Div, Precedence::Multiplicative),
    binary(BinaryOp::Mod, Precedence::Multiplicative),
    unary(UnaryOp::Delete),
    unary(UnaryOp::Void),
    unary(UnaryOp::Typeof),
    unary(UnaryOp::Plus),
    unary(UnaryOp::Minus),
    unary(UnaryOp::BitNot),
    unary(UnaryOp::Not),
    entry(Operator::TypeAssertion, Precedence::Unary, Assoc::Right),
    entry(
        Operator::Update(UpdateOp::Increment),
        Precedence::Update,
        Assoc::None,
    ),
    entry(
        Operator::Update(UpdateOp::Decrement),
        Precedence::Update,
        Assoc::None,
    ),
    entry(Operator::New, Precedence::New, Assoc::Right),
    entry(Operator::Call, Precedence::Call, Assoc::Left),
    entry(Operator::Member, Precedence::Member, Assoc::Left),
];

/// Entry for `operator` in `table`.
pub const fn lookup(table: &[OperatorEntry], operator: Operator) -> Option<OperatorEntry> {
    let mut i = 0;
    while i < table.len() {
        if table[i].operator.same_as(operator) {
            return Some(table[i]);
        }
        i += 1;
    }
    None
}

//! Grammar tables: operator precedence and declared conflicts.
//!
//! Both tables are immutable process-wide constants. [`Grammar::new`]
//! checks a pair of tables for consistency, and the standard pair is
//! checked when the crate is compiled: [`STANDARD`] is built in a const
//! context, so an inconsistent table is a build failure rather than a
//! runtime one.

pub mod conflict;
pub mod precedence;

use tsg_diagnostic::{Diagnostic, ErrorCode};

use conflict::{AmbiguitySite, ConflictDecl, STANDARD_CONFLICTS};
use precedence::{Operator, OperatorEntry, STANDARD_OPERATORS};

/// Inconsistency found while building a grammar.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("operator `{operator}` appears more than once in the precedence table")]
    DuplicateOperator { operator: &'static str },
    #[error("precedence level `{level}` mixes associativities")]
    MixedAssociativity { level: &'static str },
    #[error("ambiguity at `{site}` is not covered by any declared conflict")]
    UndeclaredAmbiguity { site: &'static str },
    #[error("conflict `{conflict}` names fewer than two productions")]
    DegenerateConflict { conflict: &'static str },
}

impl GrammarError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GrammarError::DuplicateOperator { .. } => ErrorCode::E9001,
            GrammarError::MixedAssociativity { .. } => ErrorCode::E9002,
            GrammarError::UndeclaredAmbiguity { .. } => ErrorCode::E9003,
            GrammarError::DegenerateConflict { .. } => ErrorCode::E9004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code()).with_message(self.to_string())
    }
}

/// A checked pair of precedence and conflict tables.
#[derive(Copy, Clone, Debug)]
pub struct Grammar<'t> {
    operators: &'t [OperatorEntry],
    conflicts: &'t [ConflictDecl],
}

impl<'t> Grammar<'t> {
    /// Check the tables against each other and against the ambiguity sites
    /// the parser resolves.
    pub const fn new(
        operators: &'t [OperatorEntry],
        conflicts: &'t [ConflictDecl],
        sites: &[AmbiguitySite],
    ) -> Result<Self, GrammarError> {
        let mut i = 0;
        while i < operators.len() {
            let a = operators[i];
            let mut j = i + 1;
            while j < operators.len() {
                let b = operators[j];
                if a.operator.same_as(b.operator) {
                    return Err(GrammarError::DuplicateOperator {
                        operator: a.operator.spelling(),
                    });
                }
                if a.precedence as u8 == b.precedence as u8 && a.assoc as u8 != b.assoc as u8 {
                    return Err(GrammarError::MixedAssociativity {
                        level: a.precedence.name(),
                    });
                }
                j += 1;
            }
            i += 1;
        }

        let mut i = 0;
        while i < conflicts.len() {
            if conflicts[i].productions.len() < 2 {
                return Err(GrammarError::DegenerateConflict {
                    conflict: conflicts[i].name,
                });
            }
            i += 1;
        }

        let mut i = 0;
        while i < sites.len() {
            if find_conflict(conflicts, sites[i]).is_none() {
                return Err(GrammarError::UndeclaredAmbiguity {
                    site: sites[i].name(),
                });
            }
            i += 1;
        }

        Ok(Grammar {
            operators,
            conflicts,
        })
    }

    #[inline]
    pub const fn precedence_of(&self, operator: Operator) -> Option<OperatorEntry> {
        precedence::lookup(self.operators, operator)
    }

    /// The declared conflict that licenses `site`.
    pub const fn conflict_for(&self, site: AmbiguitySite) -> Option<&'t ConflictDecl> {
        find_conflict(self.conflicts, site)
    }

    pub const fn operators(&self) -> &'t [OperatorEntry] {
        self.operators
    }

    pub const fn conflicts(&self) -> &'t [ConflictDecl] {
        self.conflicts
    }
}

const fn find_conflict(conflicts: &[ConflictDecl], site: AmbiguitySite) -> Option<&ConflictDecl> {
    let mut i = 0;
    while i < conflicts.len() {
        if conflicts[i].covers(site.candidates()) {
            return Some(&conflicts[i]);
        }
        i += 1;
    }
    None
}

/// The grammar the parser runs on.
pub static STANDARD: Grammar<'static> =
    match Grammar::new(STANDARD_OPERATORS, STANDARD_CONFLICTS, AmbiguitySite::ALL) {
        Ok(grammar) => grammar,
        Err(_) => panic!("standard grammar tables are inconsistent"),
    };

#[cfg(test)]
mod tests;

//! Error codes for all grammar-engine diagnostics.
//!
//! The first digit names the phase that reports the problem.

use std::fmt;

/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E9xxx: Grammar-table construction errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Invalid number literal
    E0003,
    /// Unterminated block comment
    E0004,
    /// Unterminated regular expression literal
    E0005,
    /// Unterminated template literal
    E0006,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected type
    E1005,
    /// Invalid parameter list (parenthesized cover is not a parameter list)
    E1006,
    /// Invalid assignment target
    E1007,
    /// Invalid pattern (`a = 1` shorthand outside a destructuring target)
    E1008,
    /// Missing semicolon where automatic insertion does not apply
    E1009,
    /// Nesting too deep
    E1010,
    /// Body on a declaration that only allows a signature
    E1011,
    /// Statement not allowed in this kind of source
    E1012,
    /// Trailing comma not allowed
    E1013,
    /// Missing type argument list
    E1014,
    /// Line break not allowed here
    E1015,

    // Grammar Errors (E9xxx)
    /// Operator appears twice in the precedence table
    E9001,
    /// Precedence level mixes associativities
    E9002,
    /// Ambiguity site not covered by a declared conflict
    E9003,
    /// Declared conflict names fewer than two productions
    E9004,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive.
    pub const ALL: &[ErrorCode] = &[
        // Lexer
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        // Parser
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E1012,
        ErrorCode::E1013,
        ErrorCode::E1014,
        ErrorCode::E1015,
        // Grammar
        ErrorCode::E9001,
        ErrorCode::E9002,
        ErrorCode::E9003,
        ErrorCode::E9004,
    ];

    /// The code as written in output, e.g. `"E1001"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E1014 => "E1014",
            ErrorCode::E1015 => "E1015",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
            ErrorCode::E9003 => "E9003",
            ErrorCode::E9004 => "E9004",
        }
    }

    /// One-line explanation, used as the fallback message.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character",
            ErrorCode::E0003 => "invalid number literal",
            ErrorCode::E0004 => "unterminated block comment",
            ErrorCode::E0005 => "unterminated regular expression",
            ErrorCode::E0006 => "unterminated template literal",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "expected type",
            ErrorCode::E1006 => "invalid parameter list",
            ErrorCode::E1007 => "invalid assignment target",
            ErrorCode::E1008 => "invalid destructuring pattern",
            ErrorCode::E1009 => "missing semicolon",
            ErrorCode::E1010 => "nesting too deep",
            ErrorCode::E1011 => "body not allowed on a signature",
            ErrorCode::E1012 => "statement not allowed here",
            ErrorCode::E1013 => "trailing comma not allowed",
            ErrorCode::E1014 => "missing type arguments",
            ErrorCode::E1015 => "line break not allowed here",
            ErrorCode::E9001 => "duplicate operator in precedence table",
            ErrorCode::E9002 => "mixed associativity in precedence level",
            ErrorCode::E9003 => "undeclared ambiguity",
            ErrorCode::E9004 => "degenerate conflict declaration",
        }
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a grammar-construction error (E9xxx range).
    pub fn is_grammar_error(&self) -> bool {
        self.as_str().starts_with("E9")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;

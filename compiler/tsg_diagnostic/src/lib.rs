//! Diagnostics for lexing, parsing and grammar-table construction.
//!
//! Every problem is reported as a [`Diagnostic`] carrying a searchable
//! [`ErrorCode`], a message and one or more labelled spans. The
//! [`emitter::TerminalEmitter`] renders them against the source text with
//! line/column positions and a caret snippet.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{
    expected_expression, unclosed_delimiter, unexpected_token, Diagnostic, Label, Severity,
};
pub use error_code::ErrorCode;

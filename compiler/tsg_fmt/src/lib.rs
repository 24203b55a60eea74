//! Source printer for the typed-ECMAScript grammar engine.
//!
//! Turns a parsed [`SourceFile`] back into source text. The printer is
//! purely structural: parenthesized expressions are kept as nodes by the
//! parser, so printing never has to invent grouping and reparsing the output
//! yields a tree of the same shape.
//!
//! # Modules
//!
//! - [`emitter`]: Output abstraction with indentation
//! - [`printer`]: Statement, expression, type and declaration rendering

pub mod emitter;
pub mod printer;

pub use emitter::{Emitter, StringEmitter};
pub use printer::Printer;

use tsg_ir::ast::SourceFile;
use tsg_ir::StringInterner;

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Print a whole file: one statement per line, every statement terminated.
///
/// A non-empty result ends with exactly one newline.
pub fn print_source_file(file: &SourceFile, interner: &StringInterner) -> String {
    let mut printer = Printer::new(interner);
    printer.source_file(file);
    printer.finish()
}

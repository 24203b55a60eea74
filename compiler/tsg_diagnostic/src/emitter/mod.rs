//! Diagnostic output.
//!
//! Only a human-readable terminal format exists. Other formats plug in by
//! implementing [`DiagnosticEmitter`].

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    fn flush(&mut self);

    /// Emit a closing `N errors` line.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

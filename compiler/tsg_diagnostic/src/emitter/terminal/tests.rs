#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use tsg_ir::Span;

use super::*;
use crate::ErrorCode;

fn render(source: Option<&str>, diagnostic: &Diagnostic, mode: ColorMode) -> String {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, false);
        if let Some(text) = source {
            emitter = emitter.with_source("input.ts", text);
        }
        emitter.emit(diagnostic);
        emitter.flush();
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn snippet_points_at_the_label() {
    let source = "let a = 1;\nfoo(a;\n";
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("expected `)`, found `;`")
        .with_label(Span::new(16, 17), "expected `)`");
    assert_eq!(
        render(Some(source), &diag, ColorMode::Never),
        "error[E1001]: expected `)`, found `;`\n\
         \x20--> input.ts:2:6\n\
         \x20 |\n\
         2 | foo(a;\n\
         \x20 |      ^ expected `)`\n\n"
    );
}

#[test]
fn secondary_labels_use_dashes() {
    let source = "(a, b";
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_label(Span::new(5, 5), "expected `)`")
        .with_secondary_label(Span::new(0, 1), "opened here");
    let text = render(Some(source), &diag, ColorMode::Never);
    assert!(text.contains("^ expected `)`"));
    assert!(text.contains(" | - opened here"));
    assert!(text.contains("::: input.ts:1:1"));
}

#[test]
fn byte_spans_without_source() {
    let diag = Diagnostic::error(ErrorCode::E1002).with_label(Span::new(3, 4), "here");
    let text = render(None, &diag, ColorMode::Never);
    assert!(text.starts_with("error[E1002]: expected expression\n"));
    assert!(text.contains("--> 3..4: here"));
}

#[test]
fn colors_only_when_requested() {
    let diag = Diagnostic::error(ErrorCode::E0001).with_note("strings end at the line");
    assert!(render(None, &diag, ColorMode::Always).contains("\x1b["));
    let plain = render(None, &diag, ColorMode::Never);
    assert!(!plain.contains("\x1b["));
    assert!(plain.contains("= note: strings end at the line"));
}

#[test]
fn auto_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
}

#[test]
fn summary_counts() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(2, 0);
    emitter.emit_summary(1, 3);
    emitter.emit_summary(0, 1);
    emitter.emit_summary(0, 0);
    emitter.flush();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(
        text,
        "error: 2 syntax errors\nerror: 1 syntax error; 3 warnings\nwarning: 1 warning emitted\n"
    );
}

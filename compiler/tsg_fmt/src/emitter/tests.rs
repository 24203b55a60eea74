use pretty_assertions::assert_eq;

use super::*;

#[test]
fn emits_text_and_spaces() {
    let mut emitter = StringEmitter::new();
    emitter.emit("let");
    emitter.emit_space();
    emitter.emit("x;");
    assert_eq!(emitter.as_str(), "let x;");
}

#[test]
fn indent_is_counted_in_levels() {
    let mut emitter = StringEmitter::with_capacity(32);
    emitter.emit("{");
    emitter.emit_newline();
    emitter.emit_indent(1);
    emitter.emit("a;");
    emitter.emit_newline();
    emitter.emit_indent(2);
    emitter.emit("b;");
    assert_eq!(emitter.output(), "{\n    a;\n        b;");
}

#[test]
fn trailing_newline_is_added_once() {
    let mut emitter = StringEmitter::new();
    emitter.emit("x;");
    emitter.ensure_trailing_newline();
    emitter.ensure_trailing_newline();
    assert_eq!(emitter.output(), "x;\n");
}

#[test]
fn trailing_blank_lines_collapse() {
    let mut emitter = StringEmitter::new();
    emitter.emit("x;");
    emitter.emit_newline();
    emitter.emit_newline();
    emitter.emit_newline();
    emitter.ensure_trailing_newline();
    assert_eq!(emitter.output(), "x;\n");
}

#[test]
fn empty_output_stays_empty() {
    let mut emitter = StringEmitter::new();
    emitter.ensure_trailing_newline();
    assert!(emitter.is_empty());
}

/// Emitter that only records line structure.
#[derive(Default)]
struct LineCounter {
    lines: usize,
    deepest: usize,
}

impl Emitter for LineCounter {
    fn emit(&mut self, _text: &str) {}

    fn emit_newline(&mut self) {
        self.lines += 1;
    }

    fn emit_indent(&mut self, level: usize) {
        self.deepest = self.deepest.max(level);
    }
}

#[test]
fn printer_drives_any_emitter() {
    let interner = tsg_ir::StringInterner::new();
    let result = tsg_parse::parse_str(
        "function f() {\n    if (a) {\n        b();\n    }\n}\nc();",
        &interner,
        tsg_parse::ParseOptions::default(),
    );
    assert!(!result.has_errors());
    let mut printer = crate::Printer::with_emitter(&interner, LineCounter::default());
    printer.source_file(&result.file);
    let counter = printer.into_emitter();
    assert_eq!(counter.lines, 5);
    assert_eq!(counter.deepest, 2);
}

//! Structural printer.
//!
//! Every node prints the tokens it was parsed from, with canonical spacing.
//! Grouping comes from `Paren` nodes only; the printer never adds
//! parentheses. Statements are always terminated with `;`, so automatic
//! semicolon insertion never has to fire when the output is read back.

mod decl;
mod expr;
mod ty;

use tsg_ir::ast::{
    Block, CatchClause, Expr, ForHead, ForInit, Ident, SourceFile, Stmt, StmtKind, SwitchCase,
    VarDecl,
};
use tsg_ir::{Name, StringInterner};

use crate::emitter::{Emitter, StringEmitter};

pub struct Printer<'a, E: Emitter = StringEmitter> {
    interner: &'a StringInterner,
    out: E,
    level: usize,
}

impl<'a> Printer<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Printer::with_emitter(interner, StringEmitter::new())
    }

    /// The printed text, newline-terminated unless empty.
    pub fn finish(self) -> String {
        let mut out = self.out;
        out.ensure_trailing_newline();
        out.output()
    }
}

impl<'a, E: Emitter> Printer<'a, E> {
    pub fn with_emitter(interner: &'a StringInterner, out: E) -> Self {
        Printer {
            interner,
            out,
            level: 0,
        }
    }

    pub fn into_emitter(self) -> E {
        self.out
    }

    pub fn source_file(&mut self, file: &SourceFile) {
        for (index, stmt) in live(&file.items).enumerate() {
            if index > 0 {
                self.line();
            }
            self.stmt(stmt);
        }
    }

    #[inline]
    fn text(&mut self, text: &str) {
        self.out.emit(text);
    }

    #[inline]
    fn space(&mut self) {
        self.out.emit_space();
    }

    fn name(&mut self, name: Name) {
        let text = self.interner.lookup(name);
        self.out.emit(text);
    }

    #[inline]
    fn ident(&mut self, ident: Ident) {
        self.name(ident.name);
    }

    /// Line break followed by the current indentation.
    fn line(&mut self) {
        self.out.emit_newline();
        self.out.emit_indent(self.level);
    }

    /// `items` separated by `", "`.
    fn comma_list<T>(&mut self, items: &[T], mut each: impl FnMut(&mut Self, &T)) {
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                self.text(", ");
            }
            each(self, item);
        }
    }

    /// `{`, one indented line per item, `}`; `{}` when there is nothing to
    /// print.
    fn braced_lines<'n, T: 'n>(
        &mut self,
        items: impl IntoIterator<Item = &'n T>,
        mut each: impl FnMut(&mut Self, &T),
    ) {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            self.text("{}");
            return;
        }
        self.text("{");
        self.level += 1;
        for item in items {
            self.line();
            each(self, item);
        }
        self.level -= 1;
        self.line();
        self.text("}");
    }

    fn block(&mut self, block: &Block) {
        self.stmt_body(&block.stmts);
    }

    fn stmt_body(&mut self, stmts: &[Stmt]) {
        self.braced_lines(live(stmts), Self::stmt);
    }

    pub fn stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Block(block) => self.block(block),
            StmtKind::Empty => self.text(";"),
            StmtKind::Expr(expr) => {
                self.expr(expr);
                self.text(";");
            }
            StmtKind::Var(decl) => {
                self.var_decl(decl);
                self.text(";");
            }
            StmtKind::If {
                test,
                consequent,
                alternate,
            } => {
                self.text("if (");
                self.expr(test);
                self.text(") ");
                self.stmt(consequent);
                if let Some(alternate) = alternate {
                    self.text(" else ");
                    self.stmt(alternate);
                }
            }
            StmtKind::For {
                init,
                test,
                update,
                body,
            } => {
                self.text("for (");
                match init {
                    Some(ForInit::Var(decl)) => self.var_decl(decl),
                    Some(ForInit::Expr(expr)) => self.expr(expr),
                    None => {}
                }
                self.text(";");
                if let Some(test) = test {
                    self.space();
                    self.expr(test);
                }
                self.text(";");
                if let Some(update) = update {
                    self.space();
                    self.expr(update);
                }
                self.text(") ");
                self.stmt(body);
            }
            StmtKind::ForIn { left, right, body } => self.for_each("in", left, right, body),
            StmtKind::ForOf { left, right, body } => self.for_each("of", left, right, body),
            StmtKind::While { test, body } => {
                self.text("while (");
                self.expr(test);
                self.text(") ");
                self.stmt(body);
            }
            StmtKind::DoWhile { body, test } => {
                self.text("do ");
                self.stmt(body);
                self.text(" while (");
                self.expr(test);
                self.text(");");
            }
            StmtKind::Switch {
                discriminant,
                cases,
            } => {
                self.text("switch (");
                self.expr(discriminant);
                self.text(") ");
                self.braced_lines(cases, Self::switch_case);
            }
            StmtKind::Try {
                block,
                handler,
                finalizer,
            } => {
                self.text("try ");
                self.block(block);
                if let Some(handler) = handler {
                    self.catch_clause(handler);
                }
                if let Some(finalizer) = finalizer {
                    self.text(" finally ");
                    self.block(finalizer);
                }
            }
            StmtKind::Labeled { label, body } => {
                self.ident(*label);
                self.text(": ");
                self.stmt(body);
            }
            StmtKind::With { object, body } => {
                self.text("with (");
                self.expr(object);
                self.text(") ");
                self.stmt(body);
            }
            StmtKind::Debugger => self.text("debugger;"),
            StmtKind::Return(argument) => {
                self.text("return");
                if let Some(argument) = argument {
                    self.space();
                    self.expr(argument);
                }
                self.text(";");
            }
            StmtKind::Throw(argument) => {
                self.text("throw ");
                self.expr(argument);
                self.text(";");
            }
            StmtKind::Break(label) => self.jump("break", *label),
            StmtKind::Continue(label) => self.jump("continue", *label),
            StmtKind::Function(function) => self.function(function),
            StmtKind::Class(class) => self.class(class),
            StmtKind::Interface(decl) => self.interface(decl),
            StmtKind::TypeAlias(decl) => self.type_alias(decl),
            StmtKind::Enum(decl) => self.enum_decl(decl),
            StmtKind::Namespace(decl) => {
                self.text("namespace ");
                self.dotted(&decl.path);
                self.space();
                self.stmt_body(&decl.body);
            }
            StmtKind::Ambient(decl) => {
                self.text("declare ");
                self.ambient(&decl.kind);
            }
            StmtKind::AmbientModule(decl) => {
                self.text("declare module ");
                self.name(decl.name);
                self.space();
                self.stmt_body(&decl.body);
            }
            StmtKind::ImportAlias { name, target } => {
                self.text("import ");
                self.ident(*name);
                self.text(" = ");
                self.dotted(&target.segments);
                self.text(";");
            }
            StmtKind::ImportRequire { name, module } => {
                self.text("import ");
                self.ident(*name);
                self.text(" = require(");
                self.name(*module);
                self.text(");");
            }
            StmtKind::Import(decl) => self.import(decl),
            StmtKind::Export(export) => self.export(export),
            StmtKind::Error => {}
        }
    }

    fn var_decl(&mut self, decl: &VarDecl) {
        self.text(decl.kind.as_str());
        self.space();
        self.comma_list(&decl.declarators, |this, declarator| {
            this.pattern(&declarator.pattern);
            this.type_annotation(declarator.ty.as_ref());
            if let Some(init) = &declarator.init {
                this.text(" = ");
                this.expr(init);
            }
        });
    }

    fn for_each(&mut self, keyword: &str, left: &ForHead, right: &Expr, body: &Stmt) {
        self.text("for (");
        match left {
            ForHead::Var(decl) => self.var_decl(decl),
            ForHead::Pattern(pattern) => self.pattern(pattern),
        }
        self.space();
        self.text(keyword);
        self.space();
        self.expr(right);
        self.text(") ");
        self.stmt(body);
    }

    fn switch_case(&mut self, case: &SwitchCase) {
        match &case.test {
            Some(test) => {
                self.text("case ");
                self.expr(test);
                self.text(":");
            }
            None => self.text("default:"),
        }
        self.level += 1;
        for stmt in live(&case.body) {
            self.line();
            self.stmt(stmt);
        }
        self.level -= 1;
    }

    fn catch_clause(&mut self, handler: &CatchClause) {
        self.text(" catch (");
        self.pattern(&handler.param);
        self.text(") ");
        self.block(&handler.body);
    }

    fn jump(&mut self, keyword: &str, label: Option<Ident>) {
        self.text(keyword);
        if let Some(label) = label {
            self.space();
            self.ident(label);
        }
        self.text(";");
    }

    /// `A.B.C`
    fn dotted(&mut self, segments: &[Ident]) {
        for (index, segment) in segments.iter().enumerate() {
            if index > 0 {
                self.text(".");
            }
            self.ident(*segment);
        }
    }
}

/// Statements that survived parsing; abandoned statements print nothing.
fn live(stmts: &[Stmt]) -> impl Iterator<Item = &Stmt> {
    stmts.iter().filter(|stmt| !stmt.is_error())
}

#[cfg(test)]
mod tests;

//! Uniform syntax view.
//!
//! The typed tree in [`crate::ast`] is convenient to build and match on but
//! every consumer would need to know all of its types. `SyntaxNode` exposes
//! the same tree as (kind, span, text, ordered children), and its
//! [`SyntaxNode::shape`] rendering ignores spans, which makes it the unit of
//! comparison for round-trip tests.

mod kind;
mod lower;

pub use kind::NodeKind;

use std::fmt::{self, Write as _};

use crate::ast::SourceFile;
use crate::{Span, StringInterner};

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub span: Span,
    /// Identifier name, raw literal text or operator spelling.
    pub text: Option<&'static str>,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        SyntaxNode {
            kind,
            span,
            text: None,
            children: Vec::new(),
        }
    }

    /// Build the uniform view of a parsed file.
    pub fn lower(file: &SourceFile, interner: &StringInterner) -> SyntaxNode {
        lower::Lower::new(interner).source_file(file)
    }

    #[inline]
    pub fn child(&self, index: usize) -> Option<&SyntaxNode> {
        self.children.get(index)
    }

    /// Pre-order traversal including `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First node of `kind` in pre-order.
    pub fn find(&self, kind: NodeKind) -> Option<&SyntaxNode> {
        self.descendants().find(|node| node.kind == kind)
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        self.descendants().filter(|node| node.kind == kind).count()
    }

    /// S-expression rendering without spans: `(binary_expression "+" (...) (...))`.
    pub fn shape(&self) -> String {
        let mut out = String::new();
        self.write_shape(&mut out);
        out
    }

    fn write_shape(&self, out: &mut String) {
        out.push('(');
        out.push_str(self.kind.name());
        if let Some(text) = self.text {
            let _ = write!(out, " {text:?}");
        }
        for child in &self.children {
            out.push(' ');
            child.write_shape(out);
        }
        out.push(')');
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{} {:?}", "", self.kind, self.span, indent = depth * 2)?;
        if let Some(text) = self.text {
            write!(f, " {text:?}")?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented tree with spans, one node per line.
impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests;

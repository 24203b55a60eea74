//! Parser snapshots for bounded speculation.
//!
//! Three places parse a prefix before knowing which production they are in:
//! a type-argument list after a callee (`f<T>(x)` against `f < T`), a return
//! type after a parenthesized cover (`(a): T => a` against `c ? (a) : b`)
//! and a generic arrow head (`<T>(x: T) => x` against `<T>x`). Each attempt
//! runs under `try_parse`, which rolls the cursor, context and error list
//! back if the attempt fails. Nodes built by a failed attempt are dropped
//! with it.
//!
//! Everything else is decided by token lookahead without snapshots.

use crate::context::ParseContext;
use crate::{ParseError, Parser};

/// Minimal parser state needed to undo a speculative parse.
#[derive(Clone, Copy, Debug)]
pub struct ParserSnapshot {
    pub(crate) cursor_pos: usize,
    pub(crate) context: ParseContext,
    pub(crate) error_count: usize,
    pub(crate) height: u32,
}

impl Parser<'_> {
    pub(crate) fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot {
            cursor_pos: self.cursor.position(),
            context: self.context,
            error_count: self.errors.len(),
            height: self.height,
        }
    }

    pub(crate) fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.set_position(snapshot.cursor_pos);
        self.context = snapshot.context;
        self.errors.truncate(snapshot.error_count);
        self.height = snapshot.height;
    }

    /// Run `f`; on failure, or if it recorded local errors, restore the
    /// state from before the call and return `None`.
    pub(crate) fn try_parse<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Option<T> {
        let snapshot = self.snapshot();
        match f(self) {
            Ok(value) if self.errors.len() == snapshot.error_count => Some(value),
            _ => {
                self.restore(snapshot);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_small() {
        assert!(std::mem::size_of::<ParserSnapshot>() <= 24);
    }
}

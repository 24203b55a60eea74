//! Recursive descent parser for typed ECMAScript.
//!
//! Produces the owned tree of [`tsg_ir::ast`] from the token stream of
//! [`tsg_lexer::lex`]. Expressions are parsed by precedence climbing over
//! the table in [`grammar_table::precedence`]; the few places where two
//! productions share a prefix are resolved as declared in
//! [`grammar_table::conflict`].
//!
//! Errors never abort the parse. A malformed element of a comma list or a
//! `for` head becomes an error node in place, and a statement that cannot
//! be parsed becomes a `StmtKind::Error` node after the parser skips to the
//! next statement boundary.

mod context;
mod cursor;
mod error;
mod grammar;
pub mod grammar_table;
mod options;
mod recovery;
mod snapshot;

pub use context::ParseContext;
pub use cursor::{Cursor, GreaterOp};
pub use error::ParseError;
pub use grammar_table::{Grammar, GrammarError};
pub use options::ParseOptions;
pub use recovery::{synchronize, synchronize_statement, TokenSet};

use std::sync::Once;

use tracing::debug;
use tsg_diagnostic::{Diagnostic, ErrorCode};
use tsg_ir::ast::SourceFile;
use tsg_ir::{Span, StringInterner, Token, TokenKind};
use tsg_lexer::LexOutput;

use grammar_table::conflict::{AmbiguitySite, Production};

/// Result of parsing one source file.
#[derive(Clone, Debug)]
pub struct ParseResult {
    pub file: SourceFile,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }
}

/// Parse a lexed file.
///
/// Lexical errors are not repeated here: the lexer leaves an `Error` token
/// behind for each, and the parser reports that token as unexpected.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = lexed.tokens.len()))]
pub fn parse(lexed: &LexOutput, interner: &StringInterner, options: ParseOptions) -> ParseResult {
    let mut parser = Parser::new(lexed, interner, options);
    let file = parser.parse_source_file();
    debug!(
        items = file.items.len(),
        errors = parser.errors.len(),
        "parsed"
    );
    ParseResult {
        file,
        errors: parser.errors,
    }
}

/// Lex and parse `source` in one step.
pub fn parse_str(source: &str, interner: &StringInterner, options: ParseOptions) -> ParseResult {
    let lexed = tsg_lexer::lex(source, interner);
    parse(&lexed, interner, options)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=tsg_parse=debug` for ambiguity resolutions and recovery, or
/// `RUST_LOG=tsg_parse=trace` for every token. With `TSG_LOG_TREE` set the
/// output is indented by span nesting.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        let _ = if std::env::var_os("TSG_LOG_TREE").is_some() {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_level(true))
                .try_init()
        };
    });
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    context: ParseContext,
    options: ParseOptions,
    errors: Vec<ParseError>,
    depth: u32,
    /// Deepest level reached by the nodes of the current recursive
    /// production. Left-nested chains built in a loop add to it.
    height: u32,
}

impl<'a> Parser<'a> {
    pub fn new(lexed: &'a LexOutput, interner: &'a StringInterner, options: ParseOptions) -> Self {
        let context = if options.is_declaration() {
            ParseContext::IN_AMBIENT
        } else {
            ParseContext::NONE
        };
        Parser {
            cursor: Cursor::new(&lexed.tokens, interner),
            context,
            options,
            errors: Vec::new(),
            depth: 0,
            height: 0,
        }
    }

    // Cursor delegation.

    #[inline]
    fn current(&self) -> Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn peek_kind(&self, n: usize) -> TokenKind {
        self.cursor.peek_kind(n)
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn check_ident(&self) -> bool {
        self.cursor.check_ident()
    }

    #[inline]
    fn has_newline_before(&self) -> bool {
        self.cursor.has_newline_before()
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn interner(&self) -> &'a StringInterner {
        self.cursor.interner()
    }

    /// Span from `start` through the last consumed token.
    #[inline]
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.previous_span())
    }

    /// Run `f` with `flag` added to the context.
    fn with_context<T>(&mut self, flag: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.context;
        self.context = saved.with(flag);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Run `f` with `flag` removed from the context.
    fn without_context<T>(&mut self, flag: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.context;
        self.context = saved.without(flag);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Enter a recursive production. Grows the stack when it runs low and
    /// fails with a depth-exceeded error past `max_depth`.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.options.max_depth {
            debug!(depth = self.depth, "nesting limit reached");
            return Err(self.depth_exceeded());
        }
        self.depth += 1;
        let outer_height = std::mem::replace(&mut self.height, self.depth);
        let result = tsg_stack::ensure_sufficient_stack(|| f(self));
        self.height = self.height.max(outer_height);
        self.depth -= 1;
        result
    }

    /// Count one link of a chain built in a loop (`a.b.c`, `a + b + c`,
    /// `T[][]`). Each link wraps everything parsed so far in the current
    /// production, so it sits one level above it.
    fn chain_link(&mut self) -> Result<(), ParseError> {
        self.height += 1;
        if self.height > self.options.max_depth {
            debug!(height = self.height, "chain limit reached");
            return Err(self.depth_exceeded());
        }
        Ok(())
    }

    #[cold]
    fn depth_exceeded(&self) -> ParseError {
        ParseError::new(
            ErrorCode::E1010,
            format!("nesting deeper than {} levels", self.options.max_depth),
            self.current_span(),
        )
    }

    /// Record an error the parse continues past.
    #[cold]
    fn record(&mut self, error: ParseError) {
        debug!(code = %error.code, message = %error.message, "recovered");
        self.errors.push(error);
    }

    /// Log the reading chosen at an ambiguity site.
    #[inline]
    fn resolve(&self, site: AmbiguitySite, chosen: Production) {
        debug_assert!(
            site.candidates().contains(&chosen)
                && grammar_table::STANDARD.conflict_for(site).is_some(),
            "{chosen:?} is not a declared reading of {site:?}"
        );
        debug!(site = site.name(), chosen = chosen.name(), "ambiguity resolved");
    }
}

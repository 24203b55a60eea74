//! Cooking pass: raw logos tokens to the parser's token stream.
//!
//! Trivia is folded into the flags of the next significant token, words are
//! classified as keywords or identifiers, and the context-dependent literal
//! forms (regular expressions, template pieces) are scanned by hand.

use std::ops::Range;

use logos::Logos;
use tsg_ir::{Comment, Span, StringInterner, Token, TokenFlags, TokenKind};

use crate::lex_error::{LexError, LexErrorKind};
use crate::raw_token::{is_line_terminator, RawToken};
use crate::LexOutput;

fn span_of(range: Range<usize>) -> Span {
    Span::try_from_range(range).unwrap_or(Span::DUMMY)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// How a template piece ended.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum TemplateEnd {
    Backtick,
    Substitution,
    Unterminated,
}

/// Bytes of `rest` belonging to a template piece, closing delimiter
/// included.
fn scan_template(rest: &str) -> (usize, TemplateEnd) {
    let mut chars = rest.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '`' => return (i + 1, TemplateEnd::Backtick),
            '$' if matches!(chars.peek(), Some((_, '{'))) => {
                return (i + 2, TemplateEnd::Substitution);
            }
            _ => {}
        }
    }
    (rest.len(), TemplateEnd::Unterminated)
}

/// Bytes of `rest` belonging to a regular expression whose opening `/` has
/// been consumed: body, closing `/` and flags. `Err` carries the length up
/// to the offending line break or end of input.
fn scan_regex(rest: &str) -> Result<usize, usize> {
    let mut in_class = false;
    let mut chars = rest.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            c if is_line_terminator(c) => return Err(i),
            '\\' => match chars.next() {
                Some((j, next)) if is_line_terminator(next) => return Err(j),
                Some(_) => {}
                None => return Err(rest.len()),
            },
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => {
                let flags: usize = rest[i + 1..]
                    .chars()
                    .take_while(|c| is_word_char(*c))
                    .map(char::len_utf8)
                    .sum();
                return Ok(i + 1 + flags);
            }
            _ => {}
        }
    }
    Err(rest.len())
}

pub(crate) struct TokenCooker<'src, 'i> {
    source: &'src str,
    interner: &'i StringInterner,
    raw: logos::Lexer<'src, RawToken>,
    out: LexOutput,
    /// Flags gathered from trivia since the last significant token.
    pending: TokenFlags,
    /// Anything (whitespace, line break, comment) since the last token.
    separated: bool,
    prev: Option<TokenKind>,
    /// Open `{` count inside each enclosing template substitution.
    template_depths: Vec<u32>,
}

impl<'src, 'i> TokenCooker<'src, 'i> {
    pub(crate) fn new(source: &'src str, interner: &'i StringInterner) -> Self {
        TokenCooker {
            source,
            interner,
            raw: RawToken::lexer(source),
            out: LexOutput::with_capacity(source.len() / 4 + 1),
            pending: TokenFlags::from_bits(TokenFlags::LINE_START),
            separated: false,
            prev: None,
            template_depths: Vec::new(),
        }
    }

    pub(crate) fn run(mut self) -> LexOutput {
        while let Some(result) = self.raw.next() {
            let range = self.raw.span();
            match result {
                Ok(raw) => self.cook(raw, range),
                Err(()) => {
                    let c = self.source[range.start..].chars().next().unwrap_or('\u{FFFD}');
                    self.error(LexErrorKind::InvalidCharacter(c), range);
                }
            }
        }
        let end = u32::try_from(self.source.len()).unwrap_or(u32::MAX);
        let flags = self.take_flags();
        self.out.tokens.push(Token::new(TokenKind::Eof, Span::point(end)), flags);
        self.out
    }

    fn cook(&mut self, raw: RawToken, range: Range<usize>) {
        match raw {
            RawToken::Whitespace => self.trivia(TokenFlags::SPACE_BEFORE),
            RawToken::Newline => self.trivia(TokenFlags::NEWLINE_BEFORE | TokenFlags::LINE_START),
            RawToken::LineComment => {
                self.out.comments.push(Comment::line(span_of(range)));
                self.trivia(TokenFlags::TRIVIA_BEFORE);
            }
            RawToken::BlockComment(comment) => {
                let span = span_of(range);
                self.out.comments.push(Comment::block(span, comment.spans_lines));
                if !comment.terminated {
                    tracing::debug!(%span, "unterminated block comment");
                    self.out
                        .errors
                        .push(LexError::new(LexErrorKind::UnterminatedComment, span));
                }
                self.trivia(TokenFlags::TRIVIA_BEFORE);
                if comment.spans_lines {
                    self.trivia(TokenFlags::NEWLINE_BEFORE | TokenFlags::LINE_START);
                }
            }
            RawToken::Word => {
                let kind = TokenKind::from_keyword(self.raw.slice()).unwrap_or(TokenKind::Ident);
                self.push_valued(kind, range);
            }
            RawToken::Number => {
                let glued: usize = self
                    .raw
                    .remainder()
                    .chars()
                    .take_while(|c| is_word_char(*c))
                    .map(char::len_utf8)
                    .sum();
                if glued == 0 {
                    self.push_valued(TokenKind::Number, range);
                } else {
                    self.raw.bump(glued);
                    self.error(LexErrorKind::InvalidNumber, self.raw.span());
                }
            }
            RawToken::String => self.push_valued(TokenKind::String, range),
            RawToken::UnterminatedString => self.error(LexErrorKind::UnterminatedString, range),
            RawToken::Backtick => self.template(true),
            RawToken::Slash | RawToken::SlashEq if self.regex_allowed() => self.regex(),
            RawToken::LBrace => {
                if let Some(depth) = self.template_depths.last_mut() {
                    *depth += 1;
                }
                self.push(TokenKind::LBrace, range);
            }
            RawToken::RBrace => match self.template_depths.last_mut() {
                Some(depth) if *depth == 0 => {
                    self.template_depths.pop();
                    self.template(false);
                }
                Some(depth) => {
                    *depth -= 1;
                    self.push(TokenKind::RBrace, range);
                }
                None => self.push(TokenKind::RBrace, range),
            },
            other => {
                if let Some(kind) = other.punctuator() {
                    self.push(kind, range);
                }
            }
        }
    }

    #[inline]
    fn trivia(&mut self, flags: u8) {
        self.pending.set(flags);
        self.separated = true;
    }

    fn take_flags(&mut self) -> TokenFlags {
        let mut flags = std::mem::take(&mut self.pending);
        if self.prev.is_some() && !self.separated {
            flags.set(TokenFlags::ADJACENT);
        }
        self.separated = false;
        flags
    }

    fn push(&mut self, kind: TokenKind, range: Range<usize>) {
        let flags = self.take_flags();
        self.out.tokens.push(Token::new(kind, span_of(range)), flags);
        self.prev = Some(kind);
    }

    /// Push a token whose source text is interned into `value`.
    fn push_valued(&mut self, kind: TokenKind, range: Range<usize>) {
        let value = self.interner.intern(&self.source[range.clone()]);
        let flags = self.take_flags();
        self.out
            .tokens
            .push(Token::with_value(kind, value, span_of(range)), flags);
        self.prev = Some(kind);
    }

    #[cold]
    fn error(&mut self, kind: LexErrorKind, range: Range<usize>) {
        let span = span_of(range.clone());
        tracing::debug!(?kind, %span, "lexical error");
        self.out.errors.push(LexError::new(kind, span));
        let mut flags = self.take_flags();
        flags.set(TokenFlags::HAS_ERROR);
        let value = self.interner.intern(&self.source[range]);
        self.out
            .tokens
            .push(Token::with_value(TokenKind::Error, value, span), flags);
        self.prev = Some(TokenKind::Error);
    }

    /// A `/` starts a regular expression unless the previous token can end
    /// an expression.
    fn regex_allowed(&self) -> bool {
        match self.prev {
            None => true,
            Some(kind) => !(kind.is_identifier_like()
                || matches!(
                    kind,
                    TokenKind::Number
                        | TokenKind::String
                        | TokenKind::Regex
                        | TokenKind::NoSubstitutionTemplate
                        | TokenKind::TemplateTail
                        | TokenKind::RParen
                        | TokenKind::RBracket
                        | TokenKind::RBrace
                        | TokenKind::This
                        | TokenKind::Super
                        | TokenKind::True
                        | TokenKind::False
                        | TokenKind::Null
                        | TokenKind::PlusPlus
                        | TokenKind::MinusMinus
                        | TokenKind::Error
                )),
        }
    }

    fn regex(&mut self) {
        match scan_regex(self.raw.remainder()) {
            Ok(len) => {
                self.raw.bump(len);
                self.push_valued(TokenKind::Regex, self.raw.span());
            }
            Err(len) => {
                self.raw.bump(len);
                self.error(LexErrorKind::UnterminatedRegex, self.raw.span());
            }
        }
    }

    /// Scan a template piece after its opening delimiter: a backtick when
    /// `opening` is set, otherwise the `}` closing a substitution.
    fn template(&mut self, opening: bool) {
        let (len, end) = scan_template(self.raw.remainder());
        self.raw.bump(len);
        let range = self.raw.span();
        let kind = match (opening, end) {
            (_, TemplateEnd::Unterminated) => {
                self.error(LexErrorKind::UnterminatedTemplate, range);
                return;
            }
            (true, TemplateEnd::Backtick) => TokenKind::NoSubstitutionTemplate,
            (true, TemplateEnd::Substitution) => TokenKind::TemplateHead,
            (false, TemplateEnd::Substitution) => TokenKind::TemplateMiddle,
            (false, TemplateEnd::Backtick) => TokenKind::TemplateTail,
        };
        if end == TemplateEnd::Substitution {
            self.template_depths.push(0);
        }
        self.push_valued(kind, range);
    }
}

//! Token kinds.

use std::fmt;

/// Lexical category of a token.
///
/// Fieldless so that a kind fits a `u128` bitset (see `TokenSet` in the
/// parser). Literal and identifier text lives in `Token::value`.
///
/// `>` is always a single token; `>=`, `>>`, `>>>` and their assignment
/// forms are composed by the parser from adjacent `>`/`=` tokens so that
/// nested type argument lists (`A<B<C>>`) stay lexable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // Literals
    Number,
    String,
    Regex,
    NoSubstitutionTemplate,
    TemplateHead,
    TemplateMiddle,
    TemplateTail,
    Ident,

    // Reserved words
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Enum,
    Export,
    Extends,
    False,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    Instanceof,
    New,
    Null,
    Return,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,

    // Contextual keywords (usable as identifiers)
    As,
    Declare,
    From,
    Get,
    Implements,
    Interface,
    Let,
    Module,
    Namespace,
    Of,
    Private,
    Protected,
    Public,
    Require,
    Set,
    Static,
    Type,
    Yield,

    // Punctuators
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Dot,
    DotDotDot,
    Semicolon,
    Comma,
    Lt,
    Gt,
    LtEq,
    EqEq,
    NotEq,
    EqEqEq,
    NotEqEq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,
    Shl,
    Amp,
    Pipe,
    Caret,
    Bang,
    Tilde,
    AmpAmp,
    PipePipe,
    Question,
    Colon,
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    ShlEq,
    AmpEq,
    PipeEq,
    CaretEq,
    Arrow,

    /// Byte sequence that matches no terminal.
    Error,
    Eof,
}

impl TokenKind {
    /// Number of kinds. Must stay below 128 for the parser's bitset.
    pub const COUNT: usize = TokenKind::Eof as usize + 1;

    /// Text of a reserved or contextual keyword.
    ///
    /// Any word may appear as a property name (`a.default`, `{ class: 1 }`),
    /// so the parser uses this to recover the spelling.
    pub const fn keyword_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Break => "break",
            TokenKind::Case => "case",
            TokenKind::Catch => "catch",
            TokenKind::Class => "class",
            TokenKind::Const => "const",
            TokenKind::Continue => "continue",
            TokenKind::Debugger => "debugger",
            TokenKind::Default => "default",
            TokenKind::Delete => "delete",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::Enum => "enum",
            TokenKind::Export => "export",
            TokenKind::Extends => "extends",
            TokenKind::False => "false",
            TokenKind::Finally => "finally",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::If => "if",
            TokenKind::Import => "import",
            TokenKind::In => "in",
            TokenKind::Instanceof => "instanceof",
            TokenKind::New => "new",
            TokenKind::Null => "null",
            TokenKind::Return => "return",
            TokenKind::Super => "super",
            TokenKind::Switch => "switch",
            TokenKind::This => "this",
            TokenKind::Throw => "throw",
            TokenKind::True => "true",
            TokenKind::Try => "try",
            TokenKind::Typeof => "typeof",
            TokenKind::Var => "var",
            TokenKind::Void => "void",
            TokenKind::While => "while",
            TokenKind::With => "with",
            _ => return self.contextual_text(),
        };
        Some(text)
    }

    /// Text of a contextual keyword, `None` for every other kind.
    pub const fn contextual_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::As => "as",
            TokenKind::Declare => "declare",
            TokenKind::From => "from",
            TokenKind::Get => "get",
            TokenKind::Implements => "implements",
            TokenKind::Interface => "interface",
            TokenKind::Let => "let",
            TokenKind::Module => "module",
            TokenKind::Namespace => "namespace",
            TokenKind::Of => "of",
            TokenKind::Private => "private",
            TokenKind::Protected => "protected",
            TokenKind::Public => "public",
            TokenKind::Require => "require",
            TokenKind::Set => "set",
            TokenKind::Static => "static",
            TokenKind::Type => "type",
            TokenKind::Yield => "yield",
            _ => return None,
        };
        Some(text)
    }

    /// Look up a word as a keyword kind.
    pub fn from_keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "break" => TokenKind::Break,
            "case" => TokenKind::Case,
            "catch" => TokenKind::Catch,
            "class" => TokenKind::Class,
            "const" => TokenKind::Const,
            "continue" => TokenKind::Continue,
            "debugger" => TokenKind::Debugger,
            "default" => TokenKind::Default,
            "delete" => TokenKind::Delete,
            "do" => TokenKind::Do,
            "else" => TokenKind::Else,
            "enum" => TokenKind::Enum,
            "export" => TokenKind::Export,
            "extends" => TokenKind::Extends,
            "false" => TokenKind::False,
            "finally" => TokenKind::Finally,
            "for" => TokenKind::For,
            "function" => TokenKind::Function,
            "if" => TokenKind::If,
            "import" => TokenKind::Import,
            "in" => TokenKind::In,
            "instanceof" => TokenKind::Instanceof,
            "new" => TokenKind::New,
            "null" => TokenKind::Null,
            "return" => TokenKind::Return,
            "super" => TokenKind::Super,
            "switch" => TokenKind::Switch,
            "this" => TokenKind::This,
            "throw" => TokenKind::Throw,
            "true" => TokenKind::True,
            "try" => TokenKind::Try,
            "typeof" => TokenKind::Typeof,
            "var" => TokenKind::Var,
            "void" => TokenKind::Void,
            "while" => TokenKind::While,
            "with" => TokenKind::With,
            "as" => TokenKind::As,
            "declare" => TokenKind::Declare,
            "from" => TokenKind::From,
            "get" => TokenKind::Get,
            "implements" => TokenKind::Implements,
            "interface" => TokenKind::Interface,
            "let" => TokenKind::Let,
            "module" => TokenKind::Module,
            "namespace" => TokenKind::Namespace,
            "of" => TokenKind::Of,
            "private" => TokenKind::Private,
            "protected" => TokenKind::Protected,
            "public" => TokenKind::Public,
            "require" => TokenKind::Require,
            "set" => TokenKind::Set,
            "static" => TokenKind::Static,
            "type" => TokenKind::Type,
            "yield" => TokenKind::Yield,
            _ => return None,
        };
        Some(kind)
    }

    /// Identifier or contextual keyword.
    #[inline]
    pub const fn is_identifier_like(self) -> bool {
        matches!(self, TokenKind::Ident) || self.contextual_text().is_some()
    }

    /// Any word token: identifier, reserved or contextual keyword.
    #[inline]
    pub const fn is_word(self) -> bool {
        matches!(self, TokenKind::Ident) || self.keyword_text().is_some()
    }

    /// Tokens whose value carries interned source text.
    #[inline]
    pub const fn has_value(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::String
                | TokenKind::Regex
                | TokenKind::NoSubstitutionTemplate
                | TokenKind::TemplateHead
                | TokenKind::TemplateMiddle
                | TokenKind::TemplateTail
                | TokenKind::Ident
        )
    }

    /// Human-readable name for diagnostics.
    pub const fn display_name(self) -> &'static str {
        if let Some(text) = self.keyword_text() {
            return text;
        }
        match self {
            TokenKind::Number => "number literal",
            TokenKind::String => "string literal",
            TokenKind::Regex => "regular expression",
            TokenKind::NoSubstitutionTemplate
            | TokenKind::TemplateHead
            | TokenKind::TemplateMiddle
            | TokenKind::TemplateTail => "template literal",
            TokenKind::Ident => "identifier",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Dot => ".",
            TokenKind::DotDotDot => "...",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::EqEqEq => "===",
            TokenKind::NotEqEq => "!==",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Shl => "<<",
            TokenKind::Amp => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Bang => "!",
            TokenKind::Tilde => "~",
            TokenKind::AmpAmp => "&&",
            TokenKind::PipePipe => "||",
            TokenKind::Question => "?",
            TokenKind::Colon => ":",
            TokenKind::Eq => "=",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::SlashEq => "/=",
            TokenKind::PercentEq => "%=",
            TokenKind::ShlEq => "<<=",
            TokenKind::AmpEq => "&=",
            TokenKind::PipeEq => "|=",
            TokenKind::CaretEq => "^=",
            TokenKind::Arrow => "=>",
            TokenKind::Error => "invalid token",
            _ => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

const _: () = assert!(TokenKind::COUNT <= 128);

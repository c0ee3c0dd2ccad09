//! A lexical token from source text

use crate::spanned::{Span, Spanned};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use strum::{AsRefStr, EnumDiscriminants, EnumIter, EnumString};

/// A lexical token from source text
#[derive(Debug, Clone)]
pub struct Token {
    span: Span,
    lexeme: String,
    kind: TokenKind,
}

impl Token {
    /// Creates a new token
    pub fn new(span: Span, lexeme: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            span,
            lexeme: lexeme.into(),
            kind,
        }
    }

    /// Creates the end of input sentinel, positioned at `offset`
    pub fn eof(offset: usize) -> Self {
        Self::new(Span::new(offset, 0), "", TokenKind::Eof)
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// The exact source text this token was scanned from
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Checks if this token is the given keyword
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self.kind, TokenKind::Keyword(k) if k == keyword)
    }

    /// Checks if this token is the given punctuator
    pub fn is_punctuator(&self, punctuator: Punctuator) -> bool {
        matches!(self.kind, TokenKind::Punctuator(p) if p == punctuator)
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

/// The kind for this token.
///
/// Each variant only carries the data meaningful to it.
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(TokenType), derive(strum::Display, Hash))]
pub enum TokenKind {
    Identifier(String),
    Keyword(Keyword),
    NullLiteral,
    BooleanLiteral(bool),
    /// The parsed value of a decimal literal
    NumericLiteral(f64),
    /// The decoded contents of a string literal
    StringLiteral(String),
    Punctuator(Punctuator),
    /// end of input, never produced by the scanner itself
    Eof,
}

impl TokenKind {
    /// Gets the category of this token
    pub fn token_type(&self) -> TokenType {
        TokenType::from(self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Identifier(id) => write!(f, "identifier {id:?}"),
            TokenKind::Keyword(keyword) => write!(f, "keyword {:?}", keyword.as_ref()),
            TokenKind::NullLiteral => write!(f, "null"),
            TokenKind::BooleanLiteral(b) => write!(f, "{b}"),
            TokenKind::NumericLiteral(n) => write!(f, "number {n}"),
            TokenKind::StringLiteral(s) => write!(f, "string {s:?}"),
            TokenKind::Punctuator(p) => write!(f, "{:?}", p.as_ref()),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// Reserved words of the grammar
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString, AsRefStr, strum::Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    If,
    In,
    Do,
    Var,
    For,
    New,
    Try,
    Let,
    This,
    Else,
    Case,
    Void,
    With,
    Enum,
    While,
    Break,
    Catch,
    Throw,
    Const,
    Yield,
    Class,
    Super,
    Return,
    Typeof,
    Delete,
    Switch,
    Export,
    Import,
    Default,
    Finally,
    Extends,
    Function,
    Continue,
    Debugger,
    Instanceof,
}

impl Keyword {
    /// Looks up the keyword spelled exactly as `id`.
    ///
    /// Single character words are never keywords.
    pub fn from_identifier(id: &str) -> Option<Self> {
        match id.len() {
            2..=8 | 10 => Keyword::from_str(id).ok(),
            _ => None,
        }
    }
}

/// Punctuators, each serialized as its source text
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString, AsRefStr, EnumIter)]
pub enum Punctuator {
    #[strum(serialize = ">>>=")]
    UnsignedRShiftAssign,

    #[strum(serialize = "===")]
    StrictEq,
    #[strum(serialize = "!==")]
    StrictNeq,
    #[strum(serialize = ">>>")]
    UnsignedRShift,
    #[strum(serialize = "<<=")]
    LShiftAssign,
    #[strum(serialize = ">>=")]
    RShiftAssign,
    #[strum(serialize = "**=")]
    ExpAssign,
    #[strum(serialize = "...")]
    Spread,

    #[strum(serialize = "&&")]
    And,
    #[strum(serialize = "||")]
    Or,
    #[strum(serialize = "??")]
    Nullish,
    #[strum(serialize = "?.")]
    OptionalChain,
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    Neq,
    #[strum(serialize = "+=")]
    PlusAssign,
    #[strum(serialize = "-=")]
    MinusAssign,
    #[strum(serialize = "*=")]
    MultAssign,
    #[strum(serialize = "/=")]
    DivAssign,
    #[strum(serialize = "++")]
    Increment,
    #[strum(serialize = "--")]
    Decrement,
    #[strum(serialize = "<<")]
    LShift,
    #[strum(serialize = ">>")]
    RShift,
    #[strum(serialize = "&=")]
    BitwiseAndAssign,
    #[strum(serialize = "|=")]
    BitwiseOrAssign,
    #[strum(serialize = "^=")]
    BitwiseXorAssign,
    #[strum(serialize = "%=")]
    RemAssign,
    #[strum(serialize = "<=")]
    Lte,
    #[strum(serialize = ">=")]
    Gte,
    #[strum(serialize = "=>")]
    Arrow,
    #[strum(serialize = "**")]
    Exp,

    #[strum(serialize = "(")]
    LParen,
    #[strum(serialize = ")")]
    RParen,
    #[strum(serialize = "{")]
    LCurly,
    #[strum(serialize = "}")]
    RCurly,
    #[strum(serialize = ";")]
    SemiColon,
    #[strum(serialize = ",")]
    Comma,
    #[strum(serialize = "[")]
    LBracket,
    #[strum(serialize = "]")]
    RBracket,
    #[strum(serialize = ":")]
    Colon,
    #[strum(serialize = "~")]
    Tilde,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = "=")]
    Assign,
    #[strum(serialize = "!")]
    Bang,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "*")]
    Star,
    #[strum(serialize = "%")]
    Rem,
    #[strum(serialize = "&")]
    BitwiseAnd,
    #[strum(serialize = "|")]
    BitwiseOr,
    #[strum(serialize = "^")]
    BitwiseXor,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "?")]
    QMark,
    #[strum(serialize = ".")]
    Dot,
}

// strum's Display treats the serialized text as a format string, which `{` and `}` break
impl Display for Punctuator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_keyword_spelling() {
        assert_eq!(Keyword::Instanceof.as_ref(), "instanceof");
        assert_eq!(Keyword::from_identifier("const"), Some(Keyword::Const));
        assert_eq!(Keyword::from_identifier("done"), None);
        assert_eq!(Keyword::from_identifier("d"), None);
        for keyword in Keyword::iter() {
            assert_eq!(Keyword::from_identifier(keyword.as_ref()), Some(keyword));
        }
    }

    #[test]
    fn test_punctuator_round_trips_through_text() {
        for punctuator in Punctuator::iter() {
            let text = punctuator.to_string();
            assert_eq!(Punctuator::from_str(&text).unwrap(), punctuator);
            assert_eq!(text, punctuator.as_ref());
        }
    }

    #[test]
    fn test_braces_display_as_source_text() {
        assert_eq!(Punctuator::LCurly.to_string(), "{");
        assert_eq!(Punctuator::RCurly.to_string(), "}");
        let token = Token::new(Span::new(3, 1), "}", TokenKind::Punctuator(Punctuator::RCurly));
        assert_eq!(token.to_string(), "\"}\" at 3..4");
    }

    #[test]
    fn test_token_equality_ignores_span() {
        let a = Token::new(Span::new(0, 1), "x", TokenKind::Identifier("x".to_string()));
        let b = Token::new(Span::new(9, 1), "x", TokenKind::Identifier("x".to_string()));
        assert_eq!(a, b);
        assert_eq!(a.kind().token_type(), TokenType::Identifier);
        assert_eq!(TokenType::NumericLiteral.to_string(), "NumericLiteral");
    }
}

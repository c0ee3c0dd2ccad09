use crate::lexer::LexingError;
use esper_tokens::spanned::Span;
use esper_tokens::token::Token;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// Represents an error occurring during parsing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub struct SyntaxError {
    pub kind: ErrorKind,
    pub span: Option<Span>,
    pub non_terminal_stack: Vec<&'static str>,
}

impl SyntaxError {
    /// Creates a new error
    pub fn new(
        kind: ErrorKind,
        span: impl Into<Option<Span>>,
        non_terminals: impl Into<Vec<&'static str>>,
    ) -> Self {
        Self {
            kind,
            span: span.into(),
            non_terminal_stack: non_terminals.into(),
        }
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "syntax error: {}", self.kind)?;
        if let Some(span) = &self.span {
            write!(f, "\n  -> at offset {}", span.offset())?;
        }
        if !self.non_terminal_stack.is_empty() {
            write!(f, "\nnon terminal stack:")?;
            for (idx, non_terminal) in self.non_terminal_stack.iter().enumerate() {
                write!(f, "\n  {idx}: {non_terminal}")?;
            }
        }
        Ok(())
    }
}

impl From<ErrorKind> for SyntaxError {
    fn from(value: ErrorKind) -> Self {
        let span = match &value {
            ErrorKind::Lex(e) => e.offset().map(|offset| Span::new(offset, 0)),
            _ => None,
        };
        Self::new(value, span, vec![])
    }
}

impl From<LexingError> for SyntaxError {
    fn from(value: LexingError) -> Self {
        ErrorKind::from(value).into()
    }
}

/// [SyntaxError] kind
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("expected {}, got {}", expected_kinds(.0), found_token(.1))]
    ExpectedToken(Vec<String>, Option<Token>),
    #[error("unexpected token: {0}")]
    UnexpectedToken(Token),
    #[error("unexpected EOF")]
    UnexpectedEof,
    #[error("program has more than {0} statements")]
    ProgramTooLarge(usize),
    #[error(transparent)]
    Lex(#[from] LexingError),
}

impl ErrorKind {
    pub fn expected_token(
        token_kinds: impl IntoIterator<Item = impl ToString>,
        found: impl Into<Option<Token>>,
    ) -> Self {
        Self::ExpectedToken(
            token_kinds.into_iter().map(|s| s.to_string()).collect(),
            found.into(),
        )
    }
}

fn expected_kinds(kinds: &[String]) -> String {
    match kinds {
        [one] => one.clone(),
        _ => format!("one of {}", kinds.iter().join(", ")),
    }
}

fn found_token(found: &Option<Token>) -> String {
    found
        .as_ref()
        .map_or_else(|| "end of input".to_string(), |token| token.to_string())
}

pub type SyntaxResult<T> = Result<T, SyntaxError>;

//! Responsible with converting source text into a token stream

use esper_tokens::token::Token;
use thiserror::Error;
use tracing::debug;

mod scanner;
mod token_parsing;

pub use scanner::Scanner;

/// Pulls tokens out of source text one at a time, skipping insignificant input.
///
/// A tokenizer only moves forward. Create a new one to start over.
#[derive(Debug)]
pub struct Tokenizer<'s> {
    scanner: Scanner<'s>,
    failed: bool,
}

impl<'s> Tokenizer<'s> {
    /// Creates a new tokenizer
    pub fn new(source: &'s str) -> Self {
        Self {
            scanner: Scanner::new(source),
            failed: false,
        }
    }

    /// Gets the next token, or `None` once the source is exhausted
    pub fn get_next_token(&mut self) -> LexResult<Option<Token>> {
        self.scanner.scan_comments()?;
        if self.scanner.eof() {
            return Ok(None);
        }
        self.scanner.lex().map(Some)
    }
}

impl<'s> Iterator for Tokenizer<'s> {
    type Item = Result<Token, LexingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.get_next_token() {
            Ok(option) => option.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Tokenizes all of `source`
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let tokens = Tokenizer::new(source).collect::<LexResult<Vec<_>>>()?;
    debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}

pub type LexResult<T> = Result<T, LexingError>;

/// An error produced while scanning
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexingError {
    #[error("unterminated string literal starting at offset {offset}")]
    UnterminatedStringLiteral { offset: usize },
    #[error("malformed numeric literal {lexeme:?} at offset {offset}")]
    MalformedNumericLiteral { offset: usize, lexeme: String },
    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },
    #[error("invalid escape sequence at offset {offset}")]
    InvalidEscapeSequence { offset: usize },
    #[error("unterminated comment starting at offset {offset}")]
    UnterminatedComment { offset: usize },
    #[error("unexpected end of input")]
    UnexpectedEof,
}

impl LexingError {
    /// The byte offset the error was found at, if known
    pub fn offset(&self) -> Option<usize> {
        match self {
            LexingError::UnterminatedStringLiteral { offset }
            | LexingError::MalformedNumericLiteral { offset, .. }
            | LexingError::UnexpectedCharacter { offset, .. }
            | LexingError::InvalidEscapeSequence { offset }
            | LexingError::UnterminatedComment { offset } => Some(*offset),
            LexingError::UnexpectedEof => None,
        }
    }
}

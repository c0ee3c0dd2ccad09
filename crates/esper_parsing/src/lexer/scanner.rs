//! The cursor over source text that produces one raw token at a time

use crate::lexer::token_parsing::{
    failure_input, is_escape_failure, parse_identifier, parse_insignificant,
    parse_numeric_literal, parse_punctuator, parse_string_literal,
};
use crate::lexer::{LexResult, LexingError};
use esper_common::character::{is_decimal_digit, is_identifier_start};
use esper_tokens::spanned::Span;
use esper_tokens::token::{Keyword, Token, TokenKind};
use nom::Offset;
use std::str::FromStr;
use tracing::trace;

/// A cursor over source text.
///
/// Every scan starts at the cursor and leaves it directly after the scanned token. The
/// cursor never moves backwards and never passes the end of the source.
#[derive(Debug, Clone)]
pub struct Scanner<'s> {
    source: &'s str,
    index: usize,
    length: usize,
}

impl<'s> Scanner<'s> {
    /// Creates a new scanner positioned at the start of `source`
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            index: 0,
            length: source.len(),
        }
    }

    /// Whether the cursor has reached the end of the source
    pub fn eof(&self) -> bool {
        self.index >= self.length
    }

    /// The byte offset of the cursor
    pub fn index(&self) -> usize {
        self.index
    }

    fn rest(&self) -> &'s str {
        &self.source[self.index..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Moves the cursor to where `remaining` starts
    fn advance_to(&mut self, remaining: &'s str) {
        self.index = self.length - remaining.len();
    }

    /// Skips white space, line terminators and comments
    pub fn scan_comments(&mut self) -> LexResult<()> {
        let rest = self.rest();
        let remaining = match parse_insignificant(rest) {
            Ok((remaining, ())) => remaining,
            Err(_) => rest,
        };
        self.advance_to(remaining);
        if remaining.starts_with("/*") {
            return Err(LexingError::UnterminatedComment { offset: self.index });
        }
        Ok(())
    }

    /// Scans the token starting at the cursor
    pub fn lex(&mut self) -> LexResult<Token> {
        let Some(cp) = self.peek() else {
            return Err(LexingError::UnexpectedEof);
        };

        let token = if is_identifier_start(cp) {
            self.scan_identifier()
        } else if matches!(cp, '(' | ')' | ';') {
            self.scan_punctuator()
        } else if matches!(cp, '\'' | '"') {
            self.scan_string_literal()
        } else if cp == '.' {
            if self.peek_second().is_some_and(is_decimal_digit) {
                self.scan_numeric_literal()
            } else {
                self.scan_punctuator()
            }
        } else if is_decimal_digit(cp) {
            self.scan_numeric_literal()
        } else {
            self.scan_punctuator()
        }?;
        trace!(token = %token, lexeme = token.lexeme(), "scanned token");
        Ok(token)
    }

    /// Creates a token spanning from `start` to the cursor
    fn token(&self, start: usize, kind: TokenKind) -> Token {
        Token::new(
            Span::new(start, self.index - start),
            &self.source[start..self.index],
            kind,
        )
    }

    fn scan_identifier(&mut self) -> LexResult<Token> {
        let start = self.index;
        let rest = self.rest();
        let (remaining, id) = parse_identifier(rest).map_err(|_| self.unexpected_character())?;
        self.advance_to(remaining);

        let kind = if id.chars().count() == 1 {
            TokenKind::Identifier(id.to_string())
        } else if let Some(keyword) = Keyword::from_identifier(id) {
            TokenKind::Keyword(keyword)
        } else {
            match id {
                "null" => TokenKind::NullLiteral,
                "true" => TokenKind::BooleanLiteral(true),
                "false" => TokenKind::BooleanLiteral(false),
                _ => TokenKind::Identifier(id.to_string()),
            }
        };
        Ok(self.token(start, kind))
    }

    fn scan_punctuator(&mut self) -> LexResult<Token> {
        let start = self.index;
        let (remaining, punctuator) =
            parse_punctuator(self.rest()).map_err(|_| self.unexpected_character())?;
        self.advance_to(remaining);
        Ok(self.token(start, TokenKind::Punctuator(punctuator)))
    }

    fn scan_string_literal(&mut self) -> LexResult<Token> {
        let start = self.index;
        let rest = self.rest();
        let quote = self.peek().ok_or(LexingError::UnexpectedEof)?;
        match parse_string_literal(quote)(rest) {
            Ok((remaining, value)) => {
                self.advance_to(remaining);
                Ok(self.token(start, TokenKind::StringLiteral(value)))
            }
            Err(nom::Err::Failure(e)) | Err(nom::Err::Error(e)) => {
                let at = failure_input(&e).unwrap_or(rest);
                if is_escape_failure(&e) && !at.is_empty() {
                    // point at the backslash
                    Err(LexingError::InvalidEscapeSequence {
                        offset: start + rest.offset(at) - 1,
                    })
                } else {
                    Err(LexingError::UnterminatedStringLiteral { offset: start })
                }
            }
            Err(nom::Err::Incomplete(_)) => {
                Err(LexingError::UnterminatedStringLiteral { offset: start })
            }
        }
    }

    fn scan_numeric_literal(&mut self) -> LexResult<Token> {
        let start = self.index;
        let rest = self.rest();
        let (remaining, lexeme) = match parse_numeric_literal(rest) {
            Ok(ok) => ok,
            Err(nom::Err::Failure(e)) | Err(nom::Err::Error(e)) => {
                let consumed = failure_input(&e).map_or(0, |at| rest.offset(at));
                return Err(LexingError::MalformedNumericLiteral {
                    offset: start,
                    lexeme: rest[..consumed].to_string(),
                });
            }
            Err(nom::Err::Incomplete(_)) => {
                return Err(LexingError::MalformedNumericLiteral {
                    offset: start,
                    lexeme: rest.to_string(),
                })
            }
        };
        if remaining.chars().next().is_some_and(is_identifier_start) {
            return Err(LexingError::MalformedNumericLiteral {
                offset: start,
                lexeme: lexeme.to_string(),
            });
        }
        let value = f64::from_str(lexeme).map_err(|_| LexingError::MalformedNumericLiteral {
            offset: start,
            lexeme: lexeme.to_string(),
        })?;
        self.advance_to(remaining);
        Ok(self.token(start, TokenKind::NumericLiteral(value)))
    }

    fn unexpected_character(&self) -> LexingError {
        match self.peek() {
            Some(ch) => LexingError::UnexpectedCharacter {
                ch,
                offset: self.index,
            },
            None => LexingError::UnexpectedEof,
        }
    }
}

//! Creates the syntax tree from a token sequence

use esper_ast::Program;
use esper_tokens::spanned::Spanned;
use esper_tokens::token::Token;
use tracing::{debug, trace};

mod declaration;
pub mod error;
mod expr;

pub use error::*;

/// Options for a [Parser]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// The most statements a program may contain, unbounded when `None`
    pub statement_limit: Option<usize>,
}

impl ParserConfig {
    pub fn with_statement_limit(mut self, limit: usize) -> Self {
        self.statement_limit = Some(limit);
        self
    }
}

/// A recursive descent parser over a token sequence.
///
/// The parser looks at most at the current token to make a decision, and never
/// backtracks. Once the cursor passes the last token the current token is an
/// end of input sentinel.
///
/// # Examples
/// ```
/// # use esper_parsing::parser::Parser;
/// let tokens = esper_parsing::tokenize("let x = 'y';").unwrap();
/// let program = Parser::new(&tokens).parse().unwrap();
/// assert_eq!(program.body.len(), 1);
/// ```
#[derive(Debug)]
pub struct Parser<'t> {
    tokens: &'t [Token],
    current_token_index: Option<usize>,
    eof: Token,
    config: ParserConfig,
    non_terminals: Vec<&'static str>,
}

impl<'t> Parser<'t> {
    /// Creates a new parser over `tokens`
    pub fn new(tokens: &'t [Token]) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    /// Creates a new parser over `tokens` with the given config
    pub fn with_config(tokens: &'t [Token], config: ParserConfig) -> Self {
        let end = tokens.last().map_or(0, |token| token.span().end().offset());
        Self {
            tokens,
            current_token_index: None,
            eof: Token::eof(end),
            config,
            non_terminals: vec![],
        }
    }

    /// The token at the cursor, or `None` before the first call to [next_token](Self::next_token)
    pub fn current_token(&self) -> Option<&Token> {
        self.current_token_index
            .map(|idx| self.tokens.get(idx).unwrap_or(&self.eof))
    }

    fn current(&self) -> &Token {
        self.current_token().unwrap_or(&self.eof)
    }

    /// Advances the cursor, returning the new current token.
    ///
    /// The cursor stops at the end of input.
    pub fn next_token(&mut self) -> &Token {
        let next = self
            .current_token_index
            .map_or(0, |idx| (idx + 1).min(self.tokens.len()));
        self.current_token_index = Some(next);
        trace!("current token: {}", self.current());
        self.current()
    }

    /// The number of tokens consumed so far
    pub fn position(&self) -> usize {
        self.current_token_index.unwrap_or(0)
    }

    /// Parses the whole token sequence into a program
    pub fn parse(&mut self) -> SyntaxResult<Program> {
        self.current_token_index = None;
        self.non_terminals.clear();
        self.next_token();

        let mut program = Program::new();
        while !self.current().is_eof() {
            let start = self.position();
            if let Some(statement) = self.parse_statement_list_item()? {
                if let Some(limit) = self.config.statement_limit {
                    if program.body.len() >= limit {
                        return Err(self.error(ErrorKind::ProgramTooLarge(limit)));
                    }
                }
                program.body.push(statement);
            }
            if self.position() == start {
                return Err(self.error(ErrorKind::UnexpectedToken(self.current().clone())));
            }
        }
        debug!(
            "parsed {} statements from {} tokens",
            program.body.len(),
            self.tokens.len()
        );
        Ok(program)
    }

    /// Wrapper function for parsing a non-terminal
    fn non_terminal<O, F>(&mut self, name: &'static str, parser: F) -> SyntaxResult<O>
    where
        F: FnOnce(&mut Self) -> SyntaxResult<O>,
    {
        trace!("starting parsing {name} at {}", self.current());
        self.non_terminals.push(name);
        let r = parser(self);
        trace!("after parsing {name} at {}", self.current());
        if r.is_ok() {
            self.non_terminals.pop();
        }
        r
    }

    fn error(&self, kind: ErrorKind) -> SyntaxError {
        SyntaxError::new(kind, self.current().span(), self.non_terminals.clone())
    }

    /// Creates an error for the current token not being any of `kinds`
    fn expected(&self, kinds: impl IntoIterator<Item = impl ToString>) -> SyntaxError {
        let current = self.current();
        let found = if current.is_eof() {
            None
        } else {
            Some(current.clone())
        };
        self.error(ErrorKind::expected_token(kinds, found))
    }
}

#![doc = include_str!("../README.md")]

use esper_ast::Program;
use esper_tokens::token::Token;

pub mod lexer;
pub mod parser;

pub use lexer::{tokenize, LexingError, Tokenizer};
pub use parser::{ErrorKind, Parser, ParserConfig, SyntaxError, SyntaxResult};

/// Parses a token sequence into a program.
pub fn parse(tokens: &[Token]) -> SyntaxResult<Program> {
    Parser::new(tokens).parse()
}

/// Parses a token sequence into a program, using the given config.
pub fn parse_with_config(tokens: &[Token], config: ParserConfig) -> SyntaxResult<Program> {
    Parser::with_config(tokens, config).parse()
}

/// Tokenizes then parses source text.
///
/// Tokenization completes before any parsing happens, so a lexing error anywhere
/// in the source is reported as [ErrorKind::Lex].
pub fn parse_source(source: &str) -> SyntaxResult<Program> {
    let tokens = tokenize(source)?;
    parse(&tokens)
}

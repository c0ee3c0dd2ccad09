//! Expressions

use crate::parser::{ErrorKind, Parser, SyntaxResult};
use esper_ast::{Expression, Literal, LiteralValue};
use esper_tokens::token::{Punctuator, TokenKind, TokenType};

const LITERAL_TYPES: [TokenType; 4] = [
    TokenType::NumericLiteral,
    TokenType::StringLiteral,
    TokenType::BooleanLiteral,
    TokenType::NullLiteral,
];

impl Parser<'_> {
    /// Parses the `=` of an initializer and the expression after it
    pub fn parse_assignment_expression(&mut self) -> SyntaxResult<Expression> {
        self.non_terminal("AssignmentExpression", |parser| {
            if !parser.current().is_punctuator(Punctuator::Assign) {
                return Err(parser.expected([Punctuator::Assign]));
            }
            parser.next_token();
            parser.parse_binary_expression()
        })
    }

    /// Parses an operand. Only literals can be operands.
    pub fn parse_binary_expression(&mut self) -> SyntaxResult<Expression> {
        self.non_terminal("BinaryExpression", |parser| {
            let token = parser.current();
            let value = match token.kind() {
                TokenKind::NumericLiteral(n) => LiteralValue::Number(*n),
                TokenKind::StringLiteral(s) => LiteralValue::String(s.clone()),
                TokenKind::BooleanLiteral(b) => LiteralValue::Boolean(*b),
                TokenKind::NullLiteral => LiteralValue::Null,
                TokenKind::Eof => return Err(parser.error(ErrorKind::UnexpectedEof)),
                _ => return Err(parser.expected(LITERAL_TYPES)),
            };
            let literal = Literal::new(value, token.lexeme());
            parser.next_token();
            Ok(Expression::from(literal))
        })
    }
}

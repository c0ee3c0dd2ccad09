//! Statements and the declarations they introduce

use crate::parser::{ErrorKind, Parser, SyntaxResult};
use esper_ast::{DeclarationKind, Identifier, Statement, VariableDeclaration, VariableDeclarator};
use esper_tokens::token::{Keyword, Punctuator, Token, TokenKind, TokenType};
use tracing::trace;

const DECLARATION_KEYWORDS: [Keyword; 3] = [Keyword::Const, Keyword::Let, Keyword::Var];

impl Parser<'_> {
    /// Parses a single item of a statement list.
    ///
    /// A lone `;` is an empty statement and produces `None`.
    pub fn parse_statement_list_item(&mut self) -> SyntaxResult<Option<Statement>> {
        self.non_terminal("StatementListItem", |parser| {
            let token = parser.current().clone();
            match token.kind() {
                TokenKind::Keyword(Keyword::Const | Keyword::Let | Keyword::Var) => parser
                    .parse_lexical_declaration()
                    .map(|declaration| Some(Statement::from(declaration))),
                TokenKind::Punctuator(Punctuator::SemiColon) => {
                    parser.next_token();
                    Ok(None)
                }
                TokenKind::Eof => Err(parser.error(ErrorKind::UnexpectedEof)),
                _ => Err(parser.error(ErrorKind::UnexpectedToken(token))),
            }
        })
    }

    /// Parses `const`, `let` or `var` followed by its binding and an optional `;`
    pub fn parse_lexical_declaration(&mut self) -> SyntaxResult<VariableDeclaration> {
        self.non_terminal("LexicalDeclaration", |parser| {
            let kind = match parser.current().kind() {
                TokenKind::Keyword(keyword) => DeclarationKind::try_from(*keyword).ok(),
                _ => None,
            };
            let Some(kind) = kind else {
                return Err(parser.expected(DECLARATION_KEYWORDS));
            };
            parser.next_token();

            let declarations = parser.parse_binding_list(kind)?;
            if parser.current().is_punctuator(Punctuator::SemiColon) {
                parser.next_token();
            }
            Ok(VariableDeclaration::new(declarations, kind))
        })
    }

    /// Parses the bindings of a declaration. Only a single binding is supported.
    pub fn parse_binding_list(
        &mut self,
        kind: DeclarationKind,
    ) -> SyntaxResult<Vec<VariableDeclarator>> {
        self.non_terminal("BindingList", |parser| {
            let binding = parser.parse_lexical_binding(kind)?;
            Ok(vec![binding])
        })
    }

    /// Parses a binding target and its initializer, if any
    pub fn parse_lexical_binding(
        &mut self,
        kind: DeclarationKind,
    ) -> SyntaxResult<VariableDeclarator> {
        self.non_terminal("LexicalBinding", |parser| {
            let mut params = vec![];
            let id = parser.parse_pattern(&mut params, kind)?;
            let init = if parser.current().is_punctuator(Punctuator::Assign) {
                Some(parser.parse_assignment_expression()?)
            } else {
                None
            };
            trace!(?params, has_init = init.is_some(), "bound {id}");
            Ok(VariableDeclarator::new(id, init))
        })
    }

    /// Parses a binding target into `params`. Only bare identifiers are binding targets.
    pub fn parse_pattern(
        &mut self,
        params: &mut Vec<Token>,
        kind: DeclarationKind,
    ) -> SyntaxResult<Identifier> {
        self.non_terminal("BindingPattern", |parser| {
            if let TokenKind::Identifier(_) = parser.current().kind() {
                params.push(parser.current().clone());
            }
            parser.parse_variable_identifier(kind)
        })
    }

    pub fn parse_variable_identifier(&mut self, kind: DeclarationKind) -> SyntaxResult<Identifier> {
        self.non_terminal("VariableIdentifier", |parser| {
            let TokenKind::Identifier(name) = parser.current().kind() else {
                return Err(parser.expected([TokenType::Identifier]));
            };
            let identifier = Identifier::new(name.as_str());
            trace!(%kind, "declaring {identifier}");
            parser.next_token();
            Ok(identifier)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::tokenize;
    use crate::parser::{ErrorKind, Parser};
    use esper_ast::{DeclarationKind, Expression, LiteralValue, Statement};
    use esper_tokens::spanned::Span;
    use esper_tokens::token::{Keyword, Punctuator, TokenKind};
    use test_log::test;

    fn declaration(src: &str) -> esper_ast::VariableDeclaration {
        let tokens = tokenize(src).unwrap();
        let program = Parser::new(&tokens).parse().unwrap();
        assert_eq!(program.body.len(), 1, "{src:?} should be one statement");
        match program.body.into_iter().next() {
            Some(Statement::VariableDeclaration(declaration)) => declaration,
            None => unreachable!(),
        }
    }

    #[test]
    fn test_declaration_kinds() {
        assert_eq!(declaration("const a = 1").kind, DeclarationKind::Const);
        assert_eq!(declaration("let a = 1;").kind, DeclarationKind::Let);
        assert_eq!(declaration("var a").kind, DeclarationKind::Var);
    }

    #[test]
    fn test_uninitialized_binding() {
        let declaration = declaration("const x;");
        assert_eq!(declaration.declarations.len(), 1);
        assert_eq!(declaration.declarations[0].id.name, "x");
        assert!(declaration.declarations[0].init.is_none());
    }

    #[test]
    fn test_initialized_binding() {
        let declaration = declaration("let greeting = \"hi\\tthere\";");
        let declarator = &declaration.declarations[0];
        assert_eq!(declarator.id.name, "greeting");
        let Some(Expression::Literal(literal)) = &declarator.init else {
            panic!("expected a literal initializer");
        };
        assert_eq!(literal.value, LiteralValue::String("hi\tthere".to_string()));
        assert_eq!(literal.raw, "\"hi\\tthere\"");
    }

    #[test]
    fn test_empty_statements_produce_no_nodes() {
        let tokens = tokenize(";; var a = true ;;").unwrap();
        let program = Parser::new(&tokens).parse().unwrap();
        assert_eq!(program.body.len(), 1);
    }

    #[test]
    fn test_statements_without_semicolons() {
        let tokens = tokenize("const a = 1 let b var c = null").unwrap();
        let program = Parser::new(&tokens).parse().unwrap();
        assert_eq!(program.body.len(), 3);
    }

    #[test]
    fn test_missing_identifier() {
        let tokens = tokenize("const = 1;").unwrap();
        let error = Parser::new(&tokens).parse().unwrap_err();
        match &error.kind {
            ErrorKind::ExpectedToken(kinds, Some(found)) => {
                assert_eq!(kinds, &vec!["Identifier".to_string()]);
                assert_eq!(found.kind(), &TokenKind::Punctuator(Punctuator::Assign));
            }
            other => panic!("unexpected error kind {other:?}"),
        }
        assert_eq!(error.span, Some(Span::new(6, 1)));
        assert_eq!(
            error.non_terminal_stack,
            vec![
                "StatementListItem",
                "LexicalDeclaration",
                "BindingList",
                "LexicalBinding",
                "BindingPattern",
                "VariableIdentifier",
            ]
        );
    }

    #[test]
    fn test_identifier_missing_at_end_of_input() {
        let tokens = tokenize("let").unwrap();
        let error = Parser::new(&tokens).parse().unwrap_err();
        assert_eq!(
            error.kind,
            ErrorKind::ExpectedToken(vec!["Identifier".to_string()], None)
        );
    }

    #[test]
    fn test_unsupported_statement() {
        let tokens = tokenize("if (x) {}").unwrap();
        let error = Parser::new(&tokens).parse().unwrap_err();
        assert!(matches!(
            &error.kind,
            ErrorKind::UnexpectedToken(token) if token.is_keyword(Keyword::If)
        ));
    }

    #[test]
    fn test_multiple_bindings_are_rejected() {
        let tokens = tokenize("let a = 1, b = 2;").unwrap();
        let error = Parser::new(&tokens).parse().unwrap_err();
        assert!(matches!(
            &error.kind,
            ErrorKind::UnexpectedToken(token) if token.is_punctuator(Punctuator::Comma)
        ));
    }
}

//! Property-based tests for the scanner and parser

use esper_ast::Statement;
use esper_parsing::{parse, tokenize, Parser};
use esper_tokens::token::{Keyword, TokenKind};
use proptest::prelude::*;

/// Generate runs of white space, with no line terminators or comments
fn white_space_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(' '),
            Just('\t'),
            Just('\u{0B}'),
            Just('\u{0C}'),
            Just('\u{A0}'),
            Just('\u{FEFF}'),
            Just('\u{3000}'),
        ],
        0..20,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Generate identifiers that are not keywords or literal words
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_$][a-zA-Z0-9_$]{1,12}".prop_filter("reserved word", |id| {
        Keyword::from_identifier(id).is_none() && !matches!(id.as_str(), "null" | "true" | "false")
    })
}

/// Generate literal initializers as they would be written in source
fn literal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,8}",
        "[0-9]{1,5}\\.[0-9]{1,5}",
        "'[a-zA-Z0-9 ]{0,10}'",
        "\"[a-zA-Z0-9 ]{0,10}\"",
        Just("true".to_string()),
        Just("false".to_string()),
        Just("null".to_string()),
    ]
}

/// Generate a single well formed declaration
fn declaration_strategy() -> impl Strategy<Value = (String, String)> {
    (
        prop_oneof![Just("const"), Just("let"), Just("var")],
        identifier_strategy(),
        prop::option::of(literal_strategy()),
        any::<bool>(),
    )
        .prop_map(|(keyword, id, init, semicolon)| {
            let mut source = format!("{keyword} {id}");
            if let Some(init) = init {
                source.push_str(&format!(" = {init}"));
            }
            if semicolon {
                source.push(';');
            }
            (source, id)
        })
}

/// Generate token soup the parser may or may not accept
fn token_soup_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("const"),
            Just("let"),
            Just("var"),
            Just("if"),
            Just("x"),
            Just("done"),
            Just("="),
            Just("=="),
            Just(";"),
            Just(","),
            Just("("),
            Just("?."),
            Just("42"),
            Just(".5"),
            Just("'s'"),
            Just("null"),
        ],
        0..30,
    )
    .prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn white_space_tokenizes_to_nothing(source in white_space_strategy()) {
        let tokens = tokenize(&source).unwrap();
        prop_assert!(tokens.is_empty());
    }

    #[test]
    fn identifiers_keep_their_text(id in identifier_strategy()) {
        let tokens = tokenize(&id).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind(), &TokenKind::Identifier(id.clone()));
        prop_assert_eq!(tokens[0].lexeme(), id.as_str());
    }

    #[test]
    fn decimals_match_float_parse(source in "[0-9]{1,10}\\.[0-9]{1,10}") {
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        let expected: f64 = source.parse().unwrap();
        prop_assert_eq!(tokens[0].kind(), &TokenKind::NumericLiteral(expected));
    }

    #[test]
    fn declarations_parse((source, id) in declaration_strategy()) {
        let tokens = tokenize(&source).unwrap();
        let program = parse(&tokens).unwrap();
        prop_assert_eq!(program.body.len(), 1);
        let Statement::VariableDeclaration(declaration) = &program.body[0];
        prop_assert_eq!(&declaration.declarations[0].id.name, &id);
    }

    #[test]
    fn declaration_sequences_parse(declarations in prop::collection::vec(declaration_strategy(), 0..8)) {
        // without semicolons every declaration still ends at the next keyword
        let source = declarations.iter().map(|(source, _)| source.as_str()).collect::<Vec<_>>().join("\n");
        let program = esper_parsing::parse_source(&source).unwrap();
        prop_assert_eq!(program.body.len(), declarations.len());
    }

    #[test]
    fn parser_always_terminates(source in token_soup_strategy()) {
        let tokens = tokenize(&source).unwrap();
        let mut parser = Parser::new(&tokens);
        if let Ok(program) = parser.parse() {
            prop_assert!(program.body.len() <= tokens.len());
            prop_assert!(parser.next_token().is_eof());
        }
    }
}

//! nom recognizers for the individual token classes.
//!
//! The [Scanner](super::Scanner) decides which recognizer to run from the code point
//! at its cursor; every recognizer here only looks at the text it is handed.

use esper_common::character::{
    is_decimal_digit, is_line_terminator, is_octal_digit, is_white_space,
};
use esper_common::nom_helpers::{recognize_digits, recognize_identifier};
use esper_tokens::token::Punctuator;
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_till, take_until, take_while1, take_while_m_n};
use nom::character::complete::{char, line_ending, one_of, satisfy};
use nom::combinator::{cut, map, map_opt, not, opt, recognize, value};
use nom::error::{context, VerboseError, VerboseErrorKind};
use nom::multi::{fold_many0, many0_count};
use nom::sequence::{delimited, pair, preceded, terminated, tuple};
use nom::IResult;

pub(crate) type Result<'a, O, E = &'a str> = IResult<&'a str, O, VerboseError<E>>;

/// The context attached to failures inside an escape sequence
pub(crate) const ESCAPE_CONTEXT: &str = "escape sequence";

/// Recognizes a run of white space, line terminators and comments.
///
/// An unterminated block comment is left unconsumed.
pub(crate) fn parse_insignificant(src: &str) -> Result<()> {
    context(
        "insignificant",
        value(
            (),
            many0_count(alt((
                context("whitespace", take_while1(is_white_space)),
                context("line terminator", take_while1(is_line_terminator)),
                context(
                    "block comment",
                    recognize(delimited(tag("/*"), take_until("*/"), tag("*/"))),
                ),
                context(
                    "line comment",
                    recognize(preceded(tag("//"), take_till(is_line_terminator))),
                ),
            ))),
        ),
    )(src)
}

pub(crate) fn parse_identifier(src: &str) -> Result<&str> {
    context("identifier", recognize_identifier)(src)
}

/// Recognizes the longest punctuator at the start of `src`.
///
/// Alternatives are tried strictly longest first.
pub(crate) fn parse_punctuator(src: &str) -> Result<Punctuator> {
    context(
        "punctuator",
        alt((
            value(Punctuator::UnsignedRShiftAssign, tag(">>>=")),
            alt((
                value(Punctuator::Spread, tag("...")),
                value(Punctuator::StrictEq, tag("===")),
                value(Punctuator::StrictNeq, tag("!==")),
                value(Punctuator::UnsignedRShift, tag(">>>")),
                value(Punctuator::LShiftAssign, tag("<<=")),
                value(Punctuator::RShiftAssign, tag(">>=")),
                value(Punctuator::ExpAssign, tag("**=")),
            )),
            alt((
                value(Punctuator::And, tag("&&")),
                value(Punctuator::Or, tag("||")),
                value(Punctuator::Nullish, tag("??")),
                // `a?.3:0` is a conditional, not an optional chain
                value(
                    Punctuator::OptionalChain,
                    terminated(tag("?."), not(satisfy(is_decimal_digit))),
                ),
                value(Punctuator::Eq, tag("==")),
                value(Punctuator::Neq, tag("!=")),
                value(Punctuator::PlusAssign, tag("+=")),
                value(Punctuator::MinusAssign, tag("-=")),
                value(Punctuator::MultAssign, tag("*=")),
                value(Punctuator::DivAssign, tag("/=")),
                value(Punctuator::Increment, tag("++")),
            )),
            alt((
                value(Punctuator::Decrement, tag("--")),
                value(Punctuator::LShift, tag("<<")),
                value(Punctuator::RShift, tag(">>")),
                value(Punctuator::BitwiseAndAssign, tag("&=")),
                value(Punctuator::BitwiseOrAssign, tag("|=")),
                value(Punctuator::BitwiseXorAssign, tag("^=")),
                value(Punctuator::RemAssign, tag("%=")),
                value(Punctuator::Lte, tag("<=")),
                value(Punctuator::Gte, tag(">=")),
                value(Punctuator::Arrow, tag("=>")),
                value(Punctuator::Exp, tag("**")),
            )),
            alt((
                value(Punctuator::LParen, char('(')),
                value(Punctuator::RParen, char(')')),
                value(Punctuator::LCurly, char('{')),
                value(Punctuator::RCurly, char('}')),
                value(Punctuator::SemiColon, char(';')),
                value(Punctuator::Comma, char(',')),
                value(Punctuator::LBracket, char('[')),
                value(Punctuator::RBracket, char(']')),
                value(Punctuator::Colon, char(':')),
                value(Punctuator::Tilde, char('~')),
                value(Punctuator::QMark, char('?')),
                value(Punctuator::Dot, char('.')),
            )),
            alt((
                value(Punctuator::Lt, char('<')),
                value(Punctuator::Gt, char('>')),
                value(Punctuator::Assign, char('=')),
                value(Punctuator::Bang, char('!')),
                value(Punctuator::Plus, char('+')),
                value(Punctuator::Minus, char('-')),
                value(Punctuator::Star, char('*')),
                value(Punctuator::Rem, char('%')),
                value(Punctuator::BitwiseAnd, char('&')),
                value(Punctuator::BitwiseOr, char('|')),
                value(Punctuator::BitwiseXor, char('^')),
                value(Punctuator::Div, char('/')),
            )),
        )),
    )(src)
}

/// Recognizes `digits ['.' digits] [('e'|'E') ['+'|'-'] digits]`, where the leading digits
/// may only be left out when the literal starts with `.`.
///
/// Missing exponent digits are a failure, not an error.
pub(crate) fn parse_numeric_literal(src: &str) -> Result<&str> {
    let integral = recognize(pair(
        recognize_digits,
        opt(pair(char('.'), opt(recognize_digits))),
    ));
    let fractional = recognize(pair(char('.'), recognize_digits));
    let exponent = tuple((
        one_of("eE"),
        opt(one_of("+-")),
        context("exponent", cut(recognize_digits)),
    ));
    context(
        "numeric literal",
        recognize(pair(alt((integral, fractional)), opt(exponent))),
    )(src)
}

#[derive(Debug, Clone)]
enum StringFragment<'a> {
    Literal(&'a str),
    EscapedChar(char),
    LineContinuation,
}

fn parse_line_continuation(input: &str) -> Result<()> {
    value(
        (),
        alt((line_ending, recognize(satisfy(is_line_terminator)))),
    )(input)
}

fn parse_hex_digits<'a>(min: usize, max: usize) -> impl FnMut(&'a str) -> Result<'a, &'a str> {
    take_while_m_n(min, max, |c: char| c.is_ascii_hexdigit())
}

fn parse_unicode(input: &str) -> Result<char> {
    let code_point = alt((
        delimited(char('{'), parse_hex_digits(1, 6), char('}')),
        parse_hex_digits(4, 4),
    ));
    map_opt(preceded(char('u'), code_point), |hex| {
        u32::from_str_radix(hex, 16)
            .ok()
            .and_then(std::char::from_u32)
    })(input)
}

fn parse_hex(input: &str) -> Result<char> {
    map_opt(preceded(char('x'), parse_hex_digits(2, 2)), |hex| {
        u32::from_str_radix(hex, 16)
            .ok()
            .and_then(std::char::from_u32)
    })(input)
}

/// Legacy octal escapes, `\0` through `\377`
fn parse_octal(input: &str) -> Result<char> {
    let octal = alt((
        recognize(pair(
            one_of("0123"),
            take_while_m_n(0, 2, is_octal_digit),
        )),
        recognize(pair(
            one_of("4567"),
            take_while_m_n(0, 1, is_octal_digit),
        )),
    ));
    map_opt(octal, |digits| {
        u32::from_str_radix(digits, 8)
            .ok()
            .and_then(std::char::from_u32)
    })(input)
}

fn parse_escaped_char(input: &str) -> Result<char> {
    alt((
        parse_unicode,
        parse_hex,
        parse_octal,
        value('\n', char('n')),
        value('\r', char('r')),
        value('\t', char('t')),
        value('\u{08}', char('b')),
        value('\u{0C}', char('f')),
        value('\u{0B}', char('v')),
        // every other character stands for itself
        satisfy(|c| c != 'u' && c != 'x'),
    ))(input)
}

fn parse_escape(input: &str) -> Result<StringFragment> {
    preceded(
        char('\\'),
        alt((
            value(StringFragment::LineContinuation, parse_line_continuation),
            context(
                ESCAPE_CONTEXT,
                cut(map(parse_escaped_char, StringFragment::EscapedChar)),
            ),
        )),
    )(input)
}

/// Recognizes a string literal opened and closed by `quote`, producing its decoded value.
///
/// Reaching a line terminator or the end of input before the closing quote is a failure.
pub(crate) fn parse_string_literal<'a>(quote: char) -> impl FnMut(&'a str) -> Result<'a, String> {
    let stop: &'static str = if quote == '"' {
        "\"\\\n\r\u{2028}\u{2029}"
    } else {
        "'\\\n\r\u{2028}\u{2029}"
    };
    move |input| {
        let build_string = fold_many0(
            alt((
                map(is_not(stop), StringFragment::Literal),
                parse_escape,
            )),
            String::new,
            |mut accum, fragment| {
                match fragment {
                    StringFragment::Literal(literal) => accum.push_str(literal),
                    StringFragment::EscapedChar(c) => accum.push(c),
                    StringFragment::LineContinuation => {}
                }
                accum
            },
        );
        context(
            "string literal",
            delimited(char(quote), build_string, cut(char(quote))),
        )(input)
    }
}

/// Checks whether a failure was raised from inside an escape sequence
pub(crate) fn is_escape_failure(error: &VerboseError<&str>) -> bool {
    error
        .errors
        .iter()
        .any(|(_, kind)| matches!(kind, VerboseErrorKind::Context(ctx) if *ctx == ESCAPE_CONTEXT))
}

/// The deepest input a failure was raised at
pub(crate) fn failure_input<'a>(error: &VerboseError<&'a str>) -> Option<&'a str> {
    error.errors.first().map(|(input, _)| *input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nom::combinator::all_consuming;
    use nom::Finish;

    #[test]
    fn test_insignificant() {
        let (rest, ()) = all_consuming(parse_insignificant)(" \t/* hello */\n// bye")
            .finish()
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(rest, "", "should be empty but got {rest:?}");
        let (rest, ()) = parse_insignificant("  /* open").finish().unwrap();
        assert_eq!(rest, "/* open");
    }

    #[test]
    fn test_punctuator_maximal_munch() {
        for (src, expected) in [
            (">>>=", Punctuator::UnsignedRShiftAssign),
            (">>>", Punctuator::UnsignedRShift),
            (">>", Punctuator::RShift),
            (">", Punctuator::Gt),
            ("...", Punctuator::Spread),
            ("..", Punctuator::Dot),
            ("??", Punctuator::Nullish),
            ("?.x", Punctuator::OptionalChain),
            ("?.", Punctuator::OptionalChain),
            ("?.3", Punctuator::QMark),
            ("**=", Punctuator::ExpAssign),
            ("=>", Punctuator::Arrow),
        ] {
            let (_, punctuator) = parse_punctuator(src).finish().unwrap();
            assert_eq!(punctuator, expected, "scanning {src:?}");
        }
        assert!(parse_punctuator("#").is_err());
    }

    #[test]
    fn test_numeric_literal() {
        for (src, expected) in [
            ("42", "42"),
            ("42.5;", "42.5"),
            (".5e3", ".5e3"),
            ("1.", "1."),
            ("1E-7", "1E-7"),
            ("007", "007"),
            ("1.2.3", "1.2"),
        ] {
            let (_, lexeme) = parse_numeric_literal(src).finish().unwrap();
            assert_eq!(lexeme, expected);
        }
        assert!(matches!(
            parse_numeric_literal("1e+"),
            Err(nom::Err::Failure(_))
        ));
    }

    #[test]
    fn test_string_literal_escapes() {
        for (src, quote, expected) in [
            (r#""hello""#, '"', "hello"),
            (r"'it\'s'", '\'', "it's"),
            (r#""a\nb\tc""#, '"', "a\nb\tc"),
            (r#""\x41B\u{43}""#, '"', "ABC"),
            (r#""\101\0""#, '"', "A\0"),
            ("\"line\\\ncontinued\"", '"', "linecontinued"),
            (r#""\q""#, '"', "q"),
        ] {
            let (_, value) = parse_string_literal(quote)(src)
                .finish()
                .unwrap_or_else(|e| panic!("{src:?}: {e}"));
            assert_eq!(value, expected, "decoding {src:?}");
        }
    }

    #[test]
    fn test_string_literal_failures() {
        let Err(nom::Err::Failure(e)) = parse_string_literal('"')("\"open\nclosed\"") else {
            panic!("expected failure")
        };
        assert!(!is_escape_failure(&e));
        let Err(nom::Err::Failure(e)) = parse_string_literal('"')(r#""\xZZ""#) else {
            panic!("expected failure")
        };
        assert!(is_escape_failure(&e));
    }
}

//! nom helpers

use crate::character::{is_decimal_digit, is_identifier_part, is_identifier_start};
use nom::bytes::complete::{take_while, take_while1};
use nom::character::complete::satisfy;
use nom::combinator::recognize;
use nom::error::ParseError;
use nom::sequence::pair;
use nom::IResult;

/// Recognizes an identifier start followed by any number of identifier parts.
pub fn recognize_identifier<'a, E: ParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, &'a str, E> {
    recognize(pair(
        satisfy(is_identifier_start),
        take_while(is_identifier_part),
    ))(input)
}

/// Recognizes a non-empty run of decimal digits.
pub fn recognize_digits<'a, E: ParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, &'a str, E> {
    take_while1(is_decimal_digit)(input)
}

#[cfg(test)]
mod tests {
    use crate::nom_helpers::{recognize_digits, recognize_identifier};
    use nom::Finish;

    #[test]
    fn test_one_letter_variable() {
        let id = "i ";
        let (rest, parsed) = recognize_identifier::<nom::error::Error<_>>(id)
            .finish()
            .unwrap();
        assert_eq!(parsed, "i");
        assert_eq!(rest, " ");
    }

    #[test]
    fn test_identifier_with_dollar_and_digits() {
        let (rest, parsed) = recognize_identifier::<nom::error::Error<_>>("$el2=1")
            .finish()
            .unwrap();
        assert_eq!(parsed, "$el2");
        assert_eq!(rest, "=1");
    }

    #[test]
    fn test_identifier_cannot_start_with_digit() {
        assert!(recognize_identifier::<nom::error::Error<_>>("2x").is_err());
    }

    #[test]
    fn test_digits() {
        let (rest, parsed) = recognize_digits::<nom::error::Error<_>>("0123.5")
            .finish()
            .unwrap();
        assert_eq!(parsed, "0123");
        assert_eq!(rest, ".5");
        assert!(recognize_digits::<nom::error::Error<_>>("").is_err());
    }
}

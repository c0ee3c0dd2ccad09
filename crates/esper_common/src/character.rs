//! Classification of single code points.
//!
//! Every function here is total: any `char` gets an answer and none of them fail.

/// Returns `true` for characters that separate tokens on a single line.
///
/// Line terminators are deliberately excluded, see [is_line_terminator].
pub fn is_white_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{0B}'
            | '\u{0C}'
            | ' '
            | '\u{A0}'
            | '\u{FEFF}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Returns `true` for newline-class characters.
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Returns `true` for `0` through `9`.
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns `true` for `0` through `7`.
pub fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

/// Returns `true` if `c` may begin an identifier.
pub fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_alphabetic()
}

/// Returns `true` if `c` may continue an identifier.
pub fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || is_decimal_digit(c) || c == '\u{200C}' || c == '\u{200D}'
}

//! Tokens produced by the esper scanner, along with the [Span](spanned::Span) of
//! source they were read from.

pub mod spanned;
pub mod token;

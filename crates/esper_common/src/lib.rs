//! Helpers shared by the esper lexer.
//!
//! [character] answers questions about single code points, [nom_helpers] builds
//! small recognizers on top of those answers.

pub mod character;
pub mod nom_helpers;

//! Expressions

use crate::{Node, NodeType};

/// An expression.
///
/// Only literals can currently be written as expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
}

impl Node for Expression {
    fn node_type(&self) -> NodeType {
        match self {
            Expression::Literal(literal) => literal.node_type(),
        }
    }
}

impl From<Literal> for Expression {
    fn from(value: Literal) -> Self {
        Expression::Literal(value)
    }
}

/// A literal value along with the text it was written as
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
    /// the literal exactly as it appears in source
    pub raw: String,
}

impl Literal {
    pub fn new(value: LiteralValue, raw: impl Into<String>) -> Self {
        Self {
            value,
            raw: raw.into(),
        }
    }
}

impl Node for Literal {
    fn node_type(&self) -> NodeType {
        NodeType::Literal
    }
}

/// The semantic value of a [Literal]
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    String(String),
    Boolean(bool),
    Null,
}

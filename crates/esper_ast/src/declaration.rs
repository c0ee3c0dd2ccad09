//! Variable declarations

use crate::expr::Expression;
use crate::identifier::Identifier;
use crate::{Node, NodeType};
use esper_tokens::token::Keyword;

/// The keyword a declaration was introduced with
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum DeclarationKind {
    Const,
    Let,
    Var,
}

impl TryFrom<Keyword> for DeclarationKind {
    type Error = Keyword;

    fn try_from(value: Keyword) -> Result<Self, Self::Error> {
        match value {
            Keyword::Const => Ok(DeclarationKind::Const),
            Keyword::Let => Ok(DeclarationKind::Let),
            Keyword::Var => Ok(DeclarationKind::Var),
            other => Err(other),
        }
    }
}

/// `const`, `let` or `var` followed by its declarators
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub kind: DeclarationKind,
    /// in source order, never empty
    pub declarations: Vec<VariableDeclarator>,
}

impl VariableDeclaration {
    pub fn new(declarations: Vec<VariableDeclarator>, kind: DeclarationKind) -> Self {
        Self { kind, declarations }
    }
}

impl Node for VariableDeclaration {
    fn node_type(&self) -> NodeType {
        NodeType::VariableDeclaration
    }
}

/// A single binding within a [VariableDeclaration]
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    pub id: Identifier,
    /// absent when no `=` follows the binding
    pub init: Option<Expression>,
}

impl VariableDeclarator {
    pub fn new(id: Identifier, init: impl Into<Option<Expression>>) -> Self {
        Self {
            id,
            init: init.into(),
        }
    }
}

impl Node for VariableDeclarator {
    fn node_type(&self) -> NodeType {
        NodeType::VariableDeclarator
    }
}

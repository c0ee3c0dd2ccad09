//! The root of the syntax tree

use crate::declaration::VariableDeclaration;
use crate::{Node, NodeType};

/// A whole program
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// statements in source order
    pub body: Vec<Statement>,
}

impl Program {
    /// Creates a program with an empty body
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for Program {
    fn node_type(&self) -> NodeType {
        NodeType::Program
    }
}

/// A statement within a [Program]
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VariableDeclaration(VariableDeclaration),
}

impl Node for Statement {
    fn node_type(&self) -> NodeType {
        match self {
            Statement::VariableDeclaration(declaration) => declaration.node_type(),
        }
    }
}

impl From<VariableDeclaration> for Statement {
    fn from(value: VariableDeclaration) -> Self {
        Statement::VariableDeclaration(value)
    }
}

//! The syntax tree of an esper program.
//!
//! The tree is rooted at a [Program](program::Program). Nodes own their
//! children and carry no behavior beyond their data and a [NodeType] tag.

pub mod declaration;
pub mod expr;
pub mod identifier;
pub mod program;

pub use declaration::{DeclarationKind, VariableDeclaration, VariableDeclarator};
pub use expr::{Expression, Literal, LiteralValue};
pub use identifier::Identifier;
pub use program::{Program, Statement};

/// Identifies which kind of node a value is
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum NodeType {
    Program,
    VariableDeclaration,
    VariableDeclarator,
    Identifier,
    Literal,
}

/// A node of the syntax tree
pub trait Node {
    /// The tag of this node
    fn node_type(&self) -> NodeType;
}

//! Identifiers

use crate::{Node, NodeType};
use std::fmt::{Display, Formatter};

/// A name, as written in source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Node for Identifier {
    fn node_type(&self) -> NodeType {
        NodeType::Identifier
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

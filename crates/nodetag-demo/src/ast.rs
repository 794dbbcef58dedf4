//! AST node tags of the demo language.
//!
//! `build.rs` reads this file as the AST tag source, so every tag must stay on
//! its own line in the `AST_NAME,` or `AST_NAME = value,` form.

use nodetag_core::{Node, NodeTag};

#[repr(u32)]
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AstNodeTag {
    AST_UNIT = 10000,
    AST_STATEMENT_LIST,
    AST_ASSIGNMENT,       // target, value
    AST_WHILE_STATEMENT,  // condition, body
    AST_ADD,
    AST_SUBTRACT,
    AST_MULTIPLY,
    AST_VARIABLE_REF,
    AST_INT_LITERAL,
}

impl AstNodeTag {
    pub const fn tag(self) -> NodeTag {
        self as NodeTag
    }

    /// A node with this tag and no children.
    pub fn node(self) -> Node {
        Node::new(self.tag())
    }

    /// A node with this tag and the given children.
    pub fn with_kids(self, kids: impl IntoIterator<Item = Node>) -> Node {
        Node::with_kids(self.tag(), kids)
    }
}

//! Tree nodes as seen by generated visitors and printers.

use crate::NodeTag;

/// The shape generated code dispatches over: a tag plus ordered children.
pub trait TreeNode: Sized {
    fn tag(&self) -> NodeTag;

    /// Children in source order.
    fn children(&self) -> &[Self];

    /// Lexeme or other string payload shown by tree printers.
    fn text(&self) -> Option<&str> {
        None
    }
}

/// A plain owned parse-tree / AST node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    tag: NodeTag,
    kids: Vec<Node>,
    strval: String,
    ival: i64,
}

impl Node {
    pub fn new(tag: NodeTag) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    pub fn with_kids(tag: NodeTag, kids: impl IntoIterator<Item = Node>) -> Self {
        Self {
            tag,
            kids: kids.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_str(tag: NodeTag, strval: impl Into<String>) -> Self {
        Self {
            tag,
            strval: strval.into(),
            ..Self::default()
        }
    }

    pub fn with_ival(tag: NodeTag, ival: i64) -> Self {
        Self {
            tag,
            ival,
            ..Self::default()
        }
    }

    pub fn strval(&self) -> &str {
        &self.strval
    }

    pub fn set_strval(&mut self, strval: impl Into<String>) {
        self.strval = strval.into();
    }

    pub fn ival(&self) -> i64 {
        self.ival
    }

    pub fn set_ival(&mut self, ival: i64) {
        self.ival = ival;
    }

    pub fn append_kid(&mut self, kid: Node) {
        self.kids.push(kid);
    }

    pub fn prepend_kid(&mut self, kid: Node) {
        self.kids.insert(0, kid);
    }

    pub fn num_kids(&self) -> usize {
        self.kids.len()
    }

    pub fn kid(&self, index: usize) -> Option<&Node> {
        self.kids.get(index)
    }
}

impl TreeNode for Node {
    fn tag(&self) -> NodeTag {
        self.tag
    }

    fn children(&self) -> &[Self] {
        &self.kids
    }

    fn text(&self) -> Option<&str> {
        if self.strval.is_empty() {
            None
        } else {
            Some(&self.strval)
        }
    }
}

//! Text rendering of parse trees and ASTs.
//!
//! The layout puts one node per line; children hang off `+--` connectors and
//! `|  ` rails mark ancestors that still have siblings below:
//!
//! ```text
//! unit
//! +--statement_list
//!    +--INT_LITERAL[1]
//!    +--PLUS
//! ```

use std::fmt::Write;

use crate::{NodeTag, TreeNode};

/// Converts tags to display names and renders whole trees with them.
pub trait TreePrint {
    /// Display name of `tag`.
    fn node_tag_to_string(&self, tag: NodeTag) -> String;

    /// Render the tree rooted at `root`, one node per line.
    fn print<N: TreeNode>(&self, root: &N) -> String
    where
        Self: Sized,
    {
        let mut out = String::new();
        let mut rails = Vec::new();
        render_node(self, root, &mut rails, &mut out);
        out
    }
}

fn render_node<P, N>(printer: &P, node: &N, rails: &mut Vec<bool>, out: &mut String)
where
    P: TreePrint,
    N: TreeNode,
{
    if let Some((_, ancestors)) = rails.split_last() {
        for &more in ancestors {
            out.push_str(if more { "|  " } else { "   " });
        }
        out.push_str("+--");
    }

    out.push_str(&printer.node_tag_to_string(node.tag()));
    if let Some(text) = node.text() {
        let _ = write!(out, "[{text}]");
    }
    out.push('\n');

    let kids = node.children();
    for (i, kid) in kids.iter().enumerate() {
        rails.push(i + 1 < kids.len());
        render_node(printer, kid, rails, out);
        rails.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;
    use pretty_assertions::assert_eq;
    use textwrap::dedent;

    struct NumberPrint;

    impl TreePrint for NumberPrint {
        fn node_tag_to_string(&self, tag: NodeTag) -> String {
            format!("n{tag}")
        }
    }

    #[test]
    fn test_single_node() {
        assert_eq!(NumberPrint.print(&Node::new(7)), "n7\n");
    }

    #[test]
    fn test_rails_follow_remaining_siblings() {
        let tree = Node::with_kids(
            1,
            [
                Node::with_kids(2, [Node::with_str(4, "x"), Node::new(5)]),
                Node::with_kids(3, [Node::new(6)]),
            ],
        );

        let expected = dedent(
            "
            n1
            +--n2
            |  +--n4[x]
            |  +--n5
            +--n3
               +--n6
            ",
        );
        assert_eq!(NumberPrint.print(&tree), expected.trim_start());
    }
}

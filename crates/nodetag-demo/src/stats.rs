//! Program statistics gathered with a single visitor pass.

use nodetag_core::{Node, TreeNode};

use crate::ast_visitor::{AstVisitor, walk_assignment, walk_while_statement};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProgramStats {
    pub assignments: usize,
    pub loops: usize,
    pub max_loop_depth: usize,
    pub tokens: usize,
    /// Assignment targets in source order; repeats are kept.
    pub assigned: Vec<String>,
    depth: usize,
}

impl AstVisitor<Node> for ProgramStats {
    fn visit_assignment(&mut self, n: &Node) {
        self.assignments += 1;
        if let Some(name) = n.kid(0).and_then(TreeNode::text) {
            self.assigned.push(name.to_string());
        }
        walk_assignment(self, n);
    }

    fn visit_while_statement(&mut self, n: &Node) {
        self.loops += 1;
        self.depth += 1;
        self.max_loop_depth = self.max_loop_depth.max(self.depth);
        walk_while_statement(self, n);
        self.depth -= 1;
    }

    fn visit_token(&mut self, _n: &Node) {
        self.tokens += 1;
    }
}

pub fn collect_stats(root: &Node) -> ProgramStats {
    let mut stats = ProgramStats::default();
    stats.visit(root);
    stats
}

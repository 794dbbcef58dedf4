use nodetag_core::{Node, NodeTag, PRODUCTION_BASE, TreeNode};
use nodetag_demo::AstNodeTag::*;
use nodetag_demo::ast_visitor::{AstVisitor, dispatch, walk_children};
use nodetag_demo::grammar_symbols::GrammarSymbol;
use pretty_assertions::assert_eq;

/// Records every tag reaching `visit`, and which hook handled it.
#[derive(Default)]
struct Trace {
    seen: Vec<NodeTag>,
    tokens: Vec<NodeTag>,
    loops: usize,
}

impl AstVisitor<Node> for Trace {
    fn visit(&mut self, n: &Node) {
        self.seen.push(n.tag());
        dispatch(self, n);
    }

    fn visit_while_statement(&mut self, n: &Node) {
        self.loops += 1;
        walk_children(self, n);
    }

    fn visit_token(&mut self, n: &Node) {
        self.tokens.push(n.tag());
    }
}

fn sample() -> Node {
    // while n do n = n - 1; end
    AST_UNIT.with_kids([AST_STATEMENT_LIST.with_kids([AST_WHILE_STATEMENT.with_kids([
        Node::with_str(AST_VARIABLE_REF.tag(), "n"),
        AST_STATEMENT_LIST.with_kids([AST_ASSIGNMENT.with_kids([
            Node::with_str(AST_VARIABLE_REF.tag(), "n"),
            AST_SUBTRACT.with_kids([
                Node::with_str(AST_VARIABLE_REF.tag(), "n"),
                Node::with_ival(AST_INT_LITERAL.tag(), 1),
            ]),
        ])]),
    ])])])
}

#[test]
fn default_walks_visit_in_preorder() {
    let mut trace = Trace::default();
    trace.visit(&sample());
    assert_eq!(
        trace.seen,
        vec![
            AST_UNIT.tag(),
            AST_STATEMENT_LIST.tag(),
            AST_WHILE_STATEMENT.tag(),
            AST_VARIABLE_REF.tag(),
            AST_STATEMENT_LIST.tag(),
            AST_ASSIGNMENT.tag(),
            AST_VARIABLE_REF.tag(),
            AST_SUBTRACT.tag(),
            AST_VARIABLE_REF.tag(),
            AST_INT_LITERAL.tag(),
        ]
    );
    assert_eq!(trace.loops, 1);
    assert!(trace.tokens.is_empty());
}

#[test]
fn overriding_without_walking_prunes_the_subtree() {
    struct Shallow(usize);

    impl AstVisitor<Node> for Shallow {
        fn visit(&mut self, n: &Node) {
            self.0 += 1;
            dispatch(self, n);
        }

        fn visit_while_statement(&mut self, _n: &Node) {}
    }

    let mut shallow = Shallow(0);
    shallow.visit(&sample());
    // unit, statement list, while
    assert_eq!(shallow.0, 3);
}

#[test]
fn tags_below_production_base_are_tokens() {
    let tree = AST_ASSIGNMENT.with_kids([
        Node::with_str(GrammarSymbol::NODE_TOK_IDENT.tag(), "x"),
        Node::new(GrammarSymbol::NODE_TOK_ASSIGN.tag()),
        Node::new(0),
        Node::new(PRODUCTION_BASE - 1),
    ]);
    let mut trace = Trace::default();
    trace.visit(&tree);
    assert_eq!(
        trace.tokens,
        vec![
            GrammarSymbol::NODE_TOK_IDENT.tag(),
            GrammarSymbol::NODE_TOK_ASSIGN.tag(),
            0,
            PRODUCTION_BASE - 1,
        ]
    );
}

#[test]
fn every_ast_tag_has_its_own_method() {
    #[derive(Default)]
    struct Hits(Vec<&'static str>);

    impl AstVisitor<Node> for Hits {
        fn visit_unit(&mut self, _n: &Node) {
            self.0.push("unit");
        }
        fn visit_statement_list(&mut self, _n: &Node) {
            self.0.push("statement_list");
        }
        fn visit_assignment(&mut self, _n: &Node) {
            self.0.push("assignment");
        }
        fn visit_while_statement(&mut self, _n: &Node) {
            self.0.push("while_statement");
        }
        fn visit_add(&mut self, _n: &Node) {
            self.0.push("add");
        }
        fn visit_subtract(&mut self, _n: &Node) {
            self.0.push("subtract");
        }
        fn visit_multiply(&mut self, _n: &Node) {
            self.0.push("multiply");
        }
        fn visit_variable_ref(&mut self, _n: &Node) {
            self.0.push("variable_ref");
        }
        fn visit_int_literal(&mut self, _n: &Node) {
            self.0.push("int_literal");
        }
    }

    let mut hits = Hits::default();
    for tag in [
        AST_UNIT,
        AST_STATEMENT_LIST,
        AST_ASSIGNMENT,
        AST_WHILE_STATEMENT,
        AST_ADD,
        AST_SUBTRACT,
        AST_MULTIPLY,
        AST_VARIABLE_REF,
        AST_INT_LITERAL,
    ] {
        hits.visit(&tag.node());
    }
    assert_eq!(
        hits.0,
        vec![
            "unit",
            "statement_list",
            "assignment",
            "while_statement",
            "add",
            "subtract",
            "multiply",
            "variable_ref",
            "int_literal"
        ]
    );
}

#[test]
#[should_panic(expected = "Unknown AST node tag 5000")]
fn unknown_tag_panics() {
    let mut trace = Trace::default();
    trace.visit(&AST_UNIT.with_kids([Node::new(5000)]));
}

#[test]
#[should_panic(expected = "Unknown AST node tag 1000")]
fn production_tag_is_not_an_ast_tag() {
    let mut trace = Trace::default();
    trace.visit(&Node::new(GrammarSymbol::NODE_unit.tag()));
}

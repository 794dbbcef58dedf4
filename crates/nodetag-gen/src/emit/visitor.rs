//! The AST visitor trait and its default behaviour.
//!
//! Both documents are meant to be included into the same module: the trait's
//! default methods call the free `dispatch`/`walk_*` functions unqualified.

use std::fmt::Write;

use nodetag_error::Result;

use super::{GENERATED_HEADER, render_tag_values, visitor_bounds};
use crate::ast::AstTags;
use crate::config::GenConfig;

/// Render the `AstVisitor` trait: one method per AST tag plus the router,
/// the children helper and the token hook.
pub fn render_visitor(tags: &AstTags, config: &GenConfig) -> Result<String> {
    let stems = tags.method_stems()?;
    let rt = &config.runtime_crate;

    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');
    out.push_str("/// Visitor over AST nodes.\n");
    out.push_str("///\n");
    out.push_str("/// `visit` routes a node to the method named after its tag. Every per-tag\n");
    out.push_str("/// method defaults to visiting the node's children.\n");
    let _ = writeln!(out, "pub trait AstVisitor<N: {rt}::TreeNode> {{");

    out.push_str("    /// Visit `n`, calling the method that matches its tag.\n");
    if let Some((tag, stem)) = stems.first() {
        let _ = writeln!(
            out,
            "    /// For example, a node tagged `{tag}` goes to `visit_{stem}`."
        );
    }
    out.push_str("    fn visit(&mut self, n: &N) {\n");
    out.push_str("        dispatch(self, n);\n");
    out.push_str("    }\n");

    for (tag, stem) in &stems {
        out.push('\n');
        let _ = writeln!(out, "    /// Visit a node with the `{tag}` tag.");
        let _ = writeln!(out, "    fn visit_{stem}(&mut self, n: &N) {{");
        let _ = writeln!(out, "        walk_{stem}(self, n);");
        out.push_str("    }\n");
    }

    out.push('\n');
    out.push_str("    /// Call `visit` on each child of `n`, in order.\n");
    out.push_str("    fn visit_children(&mut self, n: &N) {\n");
    out.push_str("        walk_children(self, n);\n");
    out.push_str("    }\n");
    out.push('\n');
    out.push_str("    /// Called for token (terminal symbol) nodes. Does nothing by default.\n");
    out.push_str("    fn visit_token(&mut self, _n: &N) {}\n");
    out.push_str("}\n");

    Ok(out)
}

/// Render the router, the per-tag default walks and the children walk.
pub fn render_visitor_walk(tags: &AstTags, config: &GenConfig) -> Result<String> {
    let stems = tags.method_stems()?;
    let rt = &config.runtime_crate;
    let bounds = visitor_bounds(config);

    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');
    if !tags.is_empty() {
        render_tag_values(&mut out, "dispatch_tags", tags, config, true);
        out.push('\n');
    }

    out.push_str("/// Route `n` to the visitor method matching its tag.\n");
    out.push_str("///\n");
    let _ = writeln!(
        out,
        "/// Tags below `{rt}::PRODUCTION_BASE` are tokens and go to `visit_token`."
    );
    out.push_str("/// Every other tag must be one of the AST tags this file was generated from.\n");
    out.push_str("///\n");
    out.push_str("/// # Panics\n");
    out.push_str("///\n");
    out.push_str("/// Panics on a non-token tag that matches no AST tag: the tree was built\n");
    out.push_str("/// with a different tag vocabulary than this dispatcher.\n");
    out.push_str("#[deny(unreachable_patterns)]\n");
    out.push_str("pub fn dispatch<N, V>(v: &mut V, n: &N)\n");
    out.push_str(&bounds);
    out.push_str("{\n");
    out.push_str("    let tag = n.tag();\n");
    let _ = writeln!(out, "    if tag < {rt}::PRODUCTION_BASE {{");
    out.push_str("        v.visit_token(n);\n");
    out.push_str("        return;\n");
    out.push_str("    }\n");
    out.push('\n');
    if stems.is_empty() {
        out.push_str("    panic!(\"Unknown AST node tag {tag}\");\n");
    } else {
        out.push_str("    match tag {\n");
        for (tag, stem) in &stems {
            let _ = writeln!(out, "        dispatch_tags::{tag} => v.visit_{stem}(n),");
        }
        out.push_str("        _ => panic!(\"Unknown AST node tag {tag}\"),\n");
        out.push_str("    }\n");
    }
    out.push_str("}\n");

    for (_, stem) in &stems {
        out.push('\n');
        let _ = writeln!(out, "/// Default body of `AstVisitor::visit_{stem}`.");
        let _ = writeln!(out, "pub fn walk_{stem}<N, V>(v: &mut V, n: &N)");
        out.push_str(&bounds);
        out.push_str("{\n");
        out.push_str("    v.visit_children(n);\n");
        out.push_str("}\n");
    }

    out.push('\n');
    out.push_str("/// Visit every child of `n` in order, depth-first.\n");
    out.push_str("pub fn walk_children<N, V>(v: &mut V, n: &N)\n");
    out.push_str(&bounds);
    out.push_str("{\n");
    out.push_str("    for child in n.children() {\n");
    out.push_str("        v.visit(child);\n");
    out.push_str("    }\n");
    out.push_str("}\n");

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::extract_ast_tags;
    use pretty_assertions::assert_eq;

    fn two_tags() -> AstTags {
        extract_ast_tags("  AST_STATEMENT_LIST,\n  AST_ASSIGNMENT,\n", "AST_").unwrap()
    }

    #[test]
    fn test_one_method_per_tag_in_order() {
        let out = render_visitor(&two_tags(), &GenConfig::default()).unwrap();
        let methods: Vec<_> = out
            .lines()
            .filter_map(|line| line.trim().strip_prefix("fn "))
            .map(|rest| rest.split('(').next().unwrap_or_default())
            .collect();
        assert_eq!(
            methods,
            vec![
                "visit",
                "visit_statement_list",
                "visit_assignment",
                "visit_children",
                "visit_token"
            ]
        );
        assert!(out.contains("pub trait AstVisitor<N: nodetag_core::TreeNode> {"));
        assert!(out.contains("        walk_statement_list(self, n);\n"));
    }

    #[test]
    fn test_router_has_exactly_one_case_per_tag() {
        let out = render_visitor_walk(&two_tags(), &GenConfig::default()).unwrap();
        let cases: Vec<_> = out
            .lines()
            .map(str::trim)
            .filter(|line| line.contains(" => "))
            .collect();
        assert_eq!(
            cases,
            vec![
                "dispatch_tags::AST_STATEMENT_LIST => v.visit_statement_list(n),",
                "dispatch_tags::AST_ASSIGNMENT => v.visit_assignment(n),",
                "_ => panic!(\"Unknown AST node tag {tag}\"),",
            ]
        );
        assert!(out.contains("    if tag < nodetag_core::PRODUCTION_BASE {\n        v.visit_token(n);"));
    }

    #[test]
    fn test_tag_values_are_checked_against_anchor() {
        let out = render_visitor_walk(&two_tags(), &GenConfig::default()).unwrap();
        assert!(out.contains(
            "    pub(super) const AST_ASSIGNMENT: nodetag_core::NodeTag = crate::ast::AstNodeTag::AST_ASSIGNMENT as nodetag_core::NodeTag;\n"
        ));
        assert!(out.contains(
            "    const _: () = assert!(AST_STATEMENT_LIST >= nodetag_core::PRODUCTION_BASE, \"AST_STATEMENT_LIST lies in the token range\");\n"
        ));
    }

    #[test]
    fn test_walks_visit_children() {
        let out = render_visitor_walk(&two_tags(), &GenConfig::default()).unwrap();
        assert!(out.contains(
            "pub fn walk_assignment<N, V>(v: &mut V, n: &N)\nwhere\n    N: nodetag_core::TreeNode,\n    V: AstVisitor<N> + ?Sized,\n{\n    v.visit_children(n);\n}\n"
        ));
        assert!(out.contains("    for child in n.children() {\n        v.visit(child);\n    }\n"));
    }

    #[test]
    fn test_empty_vocabulary_still_routes_tokens() {
        let tags = extract_ast_tags("", "AST_").unwrap();
        let out = render_visitor_walk(&tags, &GenConfig::default()).unwrap();
        assert!(!out.contains("mod dispatch_tags"));
        assert!(!out.contains("match tag"));
        assert!(out.contains("    panic!(\"Unknown AST node tag {tag}\");\n"));

        let out = render_visitor(&tags, &GenConfig::default()).unwrap();
        assert!(!out.contains("For example"));
    }

    #[test]
    fn test_runtime_path_is_configurable() {
        let config = GenConfig {
            runtime_crate: "my_runtime".to_string(),
            ast_tag_enum: "crate::syntax::Tag".to_string(),
            ..GenConfig::default()
        };
        let out = render_visitor_walk(&two_tags(), &config).unwrap();
        assert!(out.contains("crate::syntax::Tag::AST_ASSIGNMENT as my_runtime::NodeTag"));
        assert!(out.contains("    N: my_runtime::TreeNode,\n"));
        assert!(!out.contains("nodetag_core"));
    }
}

//! AST tag names, chained onto the grammar symbol table.

use std::fmt::Write;

use super::{GENERATED_HEADER, render_tag_values};
use crate::ast::AstTags;
use crate::config::GenConfig;

/// Render `ast_tags.rs`: `ast_tag_name` plus the `AstTreePrint` printer.
///
/// Tags outside the AST vocabulary always go on to the grammar table; this
/// table never reports a miss by itself.
pub fn render_ast_names(tags: &AstTags, config: &GenConfig) -> String {
    let rt = &config.runtime_crate;
    let grammar = &config.grammar_module;

    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');
    if !tags.is_empty() {
        render_tag_values(&mut out, "ast_tag_values", tags, config, false);
        out.push('\n');
    }

    out.push_str("/// Name of an AST tag.\n");
    out.push_str("///\n");
    out.push_str("/// Any other tag is assumed to belong to a parse tree node and is looked up\n");
    out.push_str("/// in the grammar symbol table.\n");
    out.push_str("#[deny(unreachable_patterns)]\n");
    let _ = writeln!(
        out,
        "pub fn ast_tag_name(tag: {rt}::NodeTag) -> Option<&'static str> {{"
    );
    if tags.is_empty() {
        let _ = writeln!(out, "    {grammar}::grammar_symbol_name(tag)");
    } else {
        out.push_str("    match tag {\n");
        for tag in tags.names() {
            let _ = writeln!(out, "        ast_tag_values::{tag} => Some({tag:?}),");
        }
        out.push_str("        // not an AST tag, so assume it's a parse tree node\n");
        let _ = writeln!(out, "        _ => {grammar}::grammar_symbol_name(tag),");
        out.push_str("    }\n");
    }
    out.push_str("}\n");

    out.push('\n');
    out.push_str("/// Prints ASTs. Parse-tree nodes are named by `ParseTreePrint`.\n");
    out.push_str("#[derive(Debug, Clone, Copy, Default)]\n");
    out.push_str("pub struct AstTreePrint;\n");
    out.push('\n');
    let _ = writeln!(out, "impl {rt}::TreePrint for AstTreePrint {{");
    let _ = writeln!(
        out,
        "    fn node_tag_to_string(&self, tag: {rt}::NodeTag) -> String {{"
    );
    out.push_str("        match ast_tag_name(tag) {\n");
    out.push_str("            Some(name) => name.to_string(),\n");
    let _ = writeln!(
        out,
        "            None => <{grammar}::ParseTreePrint as {rt}::TreePrint>::node_tag_to_string(&{grammar}::ParseTreePrint, tag),"
    );
    out.push_str("        }\n");
    out.push_str("    }\n");
    out.push_str("}\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::extract_ast_tags;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_cases_plus_fallback() {
        let tags = extract_ast_tags("AST_STATEMENT_LIST,\nAST_ASSIGNMENT,\n", "AST_").unwrap();
        let out = render_ast_names(&tags, &GenConfig::default());
        let arms: Vec<_> = out
            .lines()
            .skip_while(|line| !line.starts_with("pub fn ast_tag_name"))
            .take_while(|line| *line != "}")
            .map(str::trim)
            .filter(|line| line.contains(" => "))
            .collect();
        assert_eq!(
            arms,
            vec![
                "ast_tag_values::AST_STATEMENT_LIST => Some(\"AST_STATEMENT_LIST\"),",
                "ast_tag_values::AST_ASSIGNMENT => Some(\"AST_ASSIGNMENT\"),",
                "_ => crate::grammar_symbols::grammar_symbol_name(tag),",
            ]
        );
    }

    #[test]
    fn test_values_are_not_anchor_checked_twice() {
        let tags = extract_ast_tags("AST_UNIT = 10000,\n", "AST_").unwrap();
        let out = render_ast_names(&tags, &GenConfig::default());
        assert!(out.contains("mod ast_tag_values {\n"));
        assert!(!out.contains("assert!"));
    }

    #[test]
    fn test_empty_vocabulary_always_defers() {
        let tags = extract_ast_tags("", "AST_").unwrap();
        let out = render_ast_names(&tags, &GenConfig::default());
        assert!(out.contains(
            "pub fn ast_tag_name(tag: nodetag_core::NodeTag) -> Option<&'static str> {\n    crate::grammar_symbols::grammar_symbol_name(tag)\n}\n"
        ));
    }

    #[test]
    fn test_printer_falls_back_to_parse_tree_printer() {
        let config = GenConfig {
            grammar_module: "crate::parse::symbols".to_string(),
            ..GenConfig::default()
        };
        let tags = extract_ast_tags("AST_UNIT,\n", "AST_").unwrap();
        let out = render_ast_names(&tags, &config);
        assert!(out.contains(
            "None => <crate::parse::symbols::ParseTreePrint as nodetag_core::TreePrint>::node_tag_to_string(&crate::parse::symbols::ParseTreePrint, tag),"
        ));
    }
}

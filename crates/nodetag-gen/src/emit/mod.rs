//! Rendering of generated Rust source.
//!
//! Every renderer is a pure function of the extracted symbols and the config,
//! so the same input always yields byte-identical output.

pub mod ast_names;
pub mod symbols;
pub mod visitor;

use std::fmt::Write;

use crate::ast::AstTags;
use crate::config::GenConfig;

pub(crate) const GENERATED_HEADER: &str = "// @generated by nodetag. Do not edit.\n";

/// Name printed by tree printers for tags no table knows.
pub(crate) const UNKNOWN_TAG_NAME: &str = "<unknown>";

/// Emit a private module holding one `NodeTag` constant per AST tag, so the
/// tags can be used as match patterns.
///
/// With `check_anchor`, each constant also gets a compile-time assertion that
/// it lies at or above `PRODUCTION_BASE`.
pub(crate) fn render_tag_values(
    out: &mut String,
    module: &str,
    tags: &AstTags,
    config: &GenConfig,
    check_anchor: bool,
) {
    if tags.is_empty() {
        return;
    }

    let rt = &config.runtime_crate;
    let tag_enum = &config.ast_tag_enum;

    let _ = writeln!(out, "mod {module} {{");
    for tag in tags.names() {
        let _ = writeln!(
            out,
            "    pub(super) const {tag}: {rt}::NodeTag = {tag_enum}::{tag} as {rt}::NodeTag;"
        );
    }
    if check_anchor {
        out.push('\n');
        for tag in tags.names() {
            let _ = writeln!(
                out,
                "    const _: () = assert!({tag} >= {rt}::PRODUCTION_BASE, \"{tag} lies in the token range\");"
            );
        }
    }
    out.push_str("}\n");
}

/// Bounds every generated generic visitor function carries.
pub(crate) fn visitor_bounds(config: &GenConfig) -> String {
    format!(
        "where\n    N: {}::TreeNode,\n    V: AstVisitor<N> + ?Sized,\n",
        config.runtime_crate
    )
}

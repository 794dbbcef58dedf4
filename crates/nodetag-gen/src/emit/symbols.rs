//! The grammar symbol table: enumeration, name lookup and parse-tree printer.

use std::fmt::Write;

use nodetag_core::{SymbolRange, TagSpaces};

use super::{GENERATED_HEADER, UNKNOWN_TAG_NAME};
use crate::config::GenConfig;
use crate::grammar::GrammarSymbols;
use crate::symbol::SymbolList;

/// Render `grammar_symbols.rs` for `symbols` laid out in `spaces`.
pub fn render_grammar_symbols(
    symbols: &GrammarSymbols,
    spaces: &TagSpaces,
    config: &GenConfig,
) -> String {
    let rt = &config.runtime_crate;
    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');

    render_enum(&mut out, symbols, spaces, rt);
    out.push('\n');
    render_ranges(&mut out, spaces, rt);
    out.push('\n');
    render_name_table(&mut out, symbols);
    out.push('\n');
    render_lookup(&mut out, rt);
    out.push('\n');
    render_printer(&mut out, rt);

    out
}

fn render_enum(out: &mut String, symbols: &GrammarSymbols, spaces: &TagSpaces, rt: &str) {
    out.push_str("/// Tag values of every grammar symbol: tokens first, then productions.\n");
    if !symbols.is_empty() {
        out.push_str("#[repr(u32)]\n");
    }
    out.push_str("#[allow(non_camel_case_types)]\n");
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n");
    out.push_str("pub enum GrammarSymbol {\n");
    render_variants(out, &symbols.tokens, &spaces.tokens);
    render_variants(out, &symbols.productions, &spaces.productions);
    out.push_str("}\n");

    if !symbols.is_empty() {
        out.push('\n');
        out.push_str("impl GrammarSymbol {\n");
        out.push_str("    /// Tag value of this symbol.\n");
        let _ = writeln!(out, "    pub const fn tag(self) -> {rt}::NodeTag {{");
        let _ = writeln!(out, "        self as {rt}::NodeTag");
        out.push_str("    }\n");
        out.push_str("}\n");
    }
}

/// One variant per symbol; only the first of a space carries an explicit value.
fn render_variants(out: &mut String, list: &SymbolList, range: &SymbolRange) {
    for symbol in list {
        if symbol.ordinal == 0 {
            let _ = writeln!(out, "    NODE_{} = {},", symbol.name, range.base);
        } else {
            let _ = writeln!(out, "    NODE_{},", symbol.name);
        }
    }
}

fn render_ranges(out: &mut String, spaces: &TagSpaces, rt: &str) {
    for (name, what, range) in [
        ("TOKEN_RANGE", "tokens", spaces.tokens),
        ("PRODUCTION_RANGE", "productions", spaces.productions),
    ] {
        let _ = writeln!(
            out,
            "/// Tag values `[{}, {})` of the grammar's {what}.",
            range.base,
            range.end()
        );
        let _ = writeln!(
            out,
            "pub const {name}: {rt}::SymbolRange = {rt}::SymbolRange::new({}, {});",
            range.base, range.count
        );
    }
    let _ = writeln!(out, "/// Both grammar ranges, for classifying arbitrary tags.");
    let _ = writeln!(
        out,
        "pub const TAG_SPACES: {rt}::TagSpaces = {rt}::TagSpaces {{ tokens: TOKEN_RANGE, productions: PRODUCTION_RANGE }};"
    );
    out.push('\n');
    out.push_str("const _: () = assert!(\n");
    let _ = writeln!(
        out,
        "    TOKEN_RANGE.base == {rt}::TOKEN_BASE && PRODUCTION_RANGE.base == {rt}::PRODUCTION_BASE,"
    );
    out.push_str("    \"grammar symbols were generated against different tag anchors\"\n");
    out.push_str(");\n");
}

fn render_name_table(out: &mut String, symbols: &GrammarSymbols) {
    out.push_str("/// Symbol names by position: tokens first, then productions.\n");
    let _ = writeln!(
        out,
        "static GRAMMAR_SYMBOL_NAMES: [&str; {}] = [",
        symbols.len()
    );
    for name in symbols.names() {
        let _ = writeln!(out, "    {name:?},");
    }
    out.push_str("];\n");
}

fn render_lookup(out: &mut String, rt: &str) {
    out.push_str("/// Name of the grammar symbol whose tag is `tag`.\n");
    out.push_str("///\n");
    out.push_str("/// Returns `None` for tags outside the token and production ranges. AST\n");
    out.push_str("/// tags never appear in the grammar, so they give `None` as well.\n");
    let _ = writeln!(
        out,
        "pub fn grammar_symbol_name(tag: {rt}::NodeTag) -> Option<&'static str> {{"
    );
    out.push_str(
        "    if tag < TOKEN_RANGE.base {
        return None;
    }

    if tag < PRODUCTION_RANGE.base {
        // must be a token
        let which_token = (tag - TOKEN_RANGE.base) as usize;
        if which_token >= TOKEN_RANGE.count {
            return None;
        }
        return Some(GRAMMAR_SYMBOL_NAMES[which_token]);
    }

    let which_production = (tag - PRODUCTION_RANGE.base) as usize;
    if which_production >= PRODUCTION_RANGE.count {
        return None;
    }
    Some(GRAMMAR_SYMBOL_NAMES[TOKEN_RANGE.count + which_production])
}
",
    );
}

fn render_printer(out: &mut String, rt: &str) {
    out.push_str("/// Prints parse trees, naming nodes by grammar symbol.\n");
    out.push_str("#[derive(Debug, Clone, Copy, Default)]\n");
    out.push_str("pub struct ParseTreePrint;\n");
    out.push('\n');
    let _ = writeln!(out, "impl {rt}::TreePrint for ParseTreePrint {{");
    let _ = writeln!(
        out,
        "    fn node_tag_to_string(&self, tag: {rt}::NodeTag) -> String {{"
    );
    let _ = writeln!(
        out,
        "        grammar_symbol_name(tag).unwrap_or({UNKNOWN_TAG_NAME:?}).to_string()"
    );
    out.push_str("    }\n");
    out.push_str("}\n");
}

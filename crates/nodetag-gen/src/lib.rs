//! Generate AST visitors and tag-name tables from a compiler's tag vocabulary.
//!
//! Two inputs drive generation:
//!
//! - an AST tag enumeration (`AST_UNIT = 10000,` ...), which yields the
//!   visitor trait, its default behaviour and the AST tag-name table;
//! - a bison grammar, whose `%token` lines and production names yield the
//!   grammar symbol table.
//!
//! Typical use is from a host crate's `build.rs`:
//!
//! ```ignore
//! let config = nodetag_gen::GenConfig::from_path("nodetag.toml")?;
//! let artifacts = nodetag_gen::generate_all(&ast_text, &grammar_text, &config)?;
//! nodetag_gen::write_artifacts(&out_dir, &artifacts)?;
//! ```

pub mod ast;
pub mod config;
pub mod emit;
pub mod grammar;
pub mod ranges;
pub mod symbol;
mod write;

use nodetag_error::Result;

pub use ast::{AstTags, extract_ast_tags, visit_function_name, walk_function_name};
pub use config::{GenConfig, OutputNames};
pub use grammar::{GrammarSymbols, extract_grammar_symbols};
pub use ranges::assign_ranges;
pub use symbol::{SymbolList, TagSymbol};
pub use write::write_artifacts;

/// One generated text document and the file name it is written under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub contents: String,
}

impl Artifact {
    fn new(name: &str, contents: String) -> Self {
        Self {
            name: name.to_string(),
            contents,
        }
    }
}

/// Generate the visitor trait, its default behaviour and the AST tag-name
/// table from AST enumeration text.
pub fn generate_ast_artifacts(text: &str, config: &GenConfig) -> Result<Vec<Artifact>> {
    config.validate()?;
    let tags = extract_ast_tags(text, &config.ast_prefix)?;
    let artifacts = render_ast(&tags, config)?;
    tracing::info!(ast_tags = tags.len(), "generated AST artifacts");
    Ok(artifacts)
}

/// Generate the grammar symbol table from grammar text.
pub fn generate_grammar_artifacts(text: &str, config: &GenConfig) -> Result<Vec<Artifact>> {
    config.validate()?;
    let symbols = extract_grammar_symbols(text);
    let spaces = assign_ranges(symbols.tokens.len(), symbols.productions.len())?;
    let artifacts = vec![render_grammar(&symbols, &spaces, config)];
    tracing::info!(
        tokens = spaces.tokens.count,
        productions = spaces.productions.count,
        "generated grammar artifacts"
    );
    Ok(artifacts)
}

/// Generate all four artifacts: visitor trait, default behaviour, AST
/// tag-name table and grammar symbol table.
pub fn generate_all(ast_text: &str, grammar_text: &str, config: &GenConfig) -> Result<Vec<Artifact>> {
    config.validate()?;
    let tags = extract_ast_tags(ast_text, &config.ast_prefix)?;
    let symbols = extract_grammar_symbols(grammar_text);
    let spaces = assign_ranges(symbols.tokens.len(), symbols.productions.len())?;

    let mut artifacts = render_ast(&tags, config)?;
    artifacts.push(render_grammar(&symbols, &spaces, config));

    tracing::info!(
        ast_tags = tags.len(),
        tokens = spaces.tokens.count,
        productions = spaces.productions.count,
        "generated all artifacts"
    );
    Ok(artifacts)
}

fn render_ast(tags: &AstTags, config: &GenConfig) -> Result<Vec<Artifact>> {
    let outputs = &config.outputs;
    Ok(vec![
        Artifact::new(&outputs.visitor, emit::visitor::render_visitor(tags, config)?),
        Artifact::new(
            &outputs.visitor_walk,
            emit::visitor::render_visitor_walk(tags, config)?,
        ),
        Artifact::new(
            &outputs.ast_tags,
            emit::ast_names::render_ast_names(tags, config),
        ),
    ])
}

fn render_grammar(
    symbols: &GrammarSymbols,
    spaces: &nodetag_core::TagSpaces,
    config: &GenConfig,
) -> Artifact {
    Artifact::new(
        &config.outputs.grammar_symbols,
        emit::symbols::render_grammar_symbols(symbols, spaces, config),
    )
}

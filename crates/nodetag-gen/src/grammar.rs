//! Grammar symbol extraction from a bison-style grammar description.
//!
//! Two kinds of lines carry symbols:
//!
//! - a production name alone on its line (`expr`, optionally followed by a
//!   comment), with the rule body on the following lines;
//! - `%token` declarations, optionally typed: `%token <ival> INT_LITERAL PLUS`.
//!
//! Everything else in the file is ignored.

use std::sync::LazyLock;

use nodetag_core::SymbolSpace;
use regex::Regex;

use crate::symbol::SymbolList;

static PRODUCTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z_]+)\s*(?:/\*.*|//.*)?$").expect("production pattern is valid")
});

/// Tokens and productions of one grammar, each in declaration order.
#[derive(Debug, Clone)]
pub struct GrammarSymbols {
    pub tokens: SymbolList,
    pub productions: SymbolList,
}

impl Default for GrammarSymbols {
    fn default() -> Self {
        Self {
            tokens: SymbolList::new(SymbolSpace::Token),
            productions: SymbolList::new(SymbolSpace::Production),
        }
    }
}

impl GrammarSymbols {
    /// All symbol names, tokens first, in the order the name table lists them.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tokens.names().chain(self.productions.names())
    }

    pub fn len(&self) -> usize {
        self.tokens.len() + self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.productions.is_empty()
    }
}

/// Production name on `line`, if the line declares one.
pub fn production_name(line: &str) -> Option<&str> {
    PRODUCTION_LINE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Token names declared on `line`, if it is a `%token` line.
pub fn token_names(line: &str) -> Option<Vec<&str>> {
    let rest = line.strip_prefix("%token")?;
    // `%token-table` and friends are other directives
    if !(rest.is_empty() || rest.starts_with(char::is_whitespace) || rest.starts_with('<')) {
        return None;
    }
    let rest = strip_comment(rest);
    // skip the `<type>` annotation
    let names = match rest.find('>') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    Some(names.split_whitespace().collect())
}

/// `line` up to the first `/*` or `//` comment opener.
fn strip_comment(line: &str) -> &str {
    let end = [line.find("/*"), line.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..end]
}

/// Scan `text` and collect tokens and productions.
#[tracing::instrument(skip_all)]
pub fn extract_grammar_symbols(text: &str) -> GrammarSymbols {
    let mut symbols = GrammarSymbols::default();

    for (lineno, line) in text.lines().enumerate() {
        if let Some(name) = production_name(line) {
            symbols.productions.push(name);
        } else if let Some(names) = token_names(line) {
            for name in names {
                symbols.tokens.push(name);
            }
        } else {
            tracing::trace!(line = lineno + 1, "no grammar symbol");
        }
    }

    tracing::debug!(
        tokens = symbols.tokens.len(),
        productions = symbols.productions.len(),
        "extracted grammar symbols"
    );
    symbols
}

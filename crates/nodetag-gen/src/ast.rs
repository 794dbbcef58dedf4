//! AST tag extraction from enumeration source text.
//!
//! Recognised lines look like enumerators carrying the AST namespace prefix:
//!
//! ```text
//!   AST_UNIT = 10000,
//!   AST_STATEMENT_LIST,      // list of statements
//! ```
//!
//! Explicit values are accepted but not interpreted; only order and identity
//! are captured.

use nodetag_core::SymbolSpace;
use nodetag_error::{Error, Result};
use regex::Regex;

use crate::symbol::SymbolList;

/// Method names the visitor trait already uses for its own plumbing.
const RESERVED_METHODS: &[&str] = &["visit", "visit_children", "visit_token"];

/// Ordered AST tag names extracted from one input stream.
#[derive(Debug, Clone)]
pub struct AstTags {
    prefix: String,
    tags: SymbolList,
}

impl AstTags {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.names()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Each tag paired with its dispatch method stem (`statement_list`).
    ///
    /// Fails if a tag lacks the prefix, or two tags would produce the same
    /// method, or a tag would shadow one of the trait's own methods.
    pub fn method_stems(&self) -> Result<Vec<(&str, String)>> {
        let mut stems: Vec<(&str, String)> = Vec::with_capacity(self.len());
        for tag in self.names() {
            let stem = method_stem(tag, &self.prefix)?;
            let method = visit_function_name(tag, &self.prefix)?;
            if RESERVED_METHODS.contains(&method.as_str()) {
                return Err(Error::new(
                    nodetag_error::ErrorKind::InvariantViolation,
                    format!("tag '{tag}' would shadow the visitor method '{method}'"),
                )
                .with_operation("ast::method_stems")
                .with_context("tag", tag));
            }
            if let Some((other, _)) = stems.iter().find(|(_, existing)| *existing == stem) {
                return Err(Error::new(
                    nodetag_error::ErrorKind::InvariantViolation,
                    format!("tags '{other}' and '{tag}' both map to '{method}'"),
                )
                .with_operation("ast::method_stems")
                .with_context("tag", tag));
            }
            stems.push((tag, stem));
        }
        Ok(stems)
    }
}

/// Build the line recogniser for `prefix`.
fn tag_line_regex(prefix: &str) -> Result<Regex> {
    let pattern = format!(
        r"^({}\w+)\s*(?:=\s*\d+\s*)?,\s*(?://.*)?$",
        regex::escape(prefix)
    );
    Regex::new(&pattern).map_err(|err| {
        Error::config_invalid(format!("cannot build tag pattern for prefix '{prefix}'"))
            .with_operation("ast::tag_line_regex")
            .set_source(err)
    })
}

/// Scan `text` line by line and collect every AST enumerator, in order.
#[tracing::instrument(skip_all, fields(prefix = %prefix))]
pub fn extract_ast_tags(text: &str, prefix: &str) -> Result<AstTags> {
    let line_re = tag_line_regex(prefix)?;
    let mut tags = SymbolList::new(SymbolSpace::AstNode);

    for (lineno, line) in text.lines().enumerate() {
        match line_re.captures(line.trim()) {
            Some(caps) => {
                tags.push(&caps[1]);
            }
            None => tracing::trace!(line = lineno + 1, "not an AST enumerator"),
        }
    }

    tracing::debug!(count = tags.len(), "extracted AST tags");
    Ok(AstTags {
        prefix: prefix.to_string(),
        tags,
    })
}

/// Lower-cased tag name with the namespace prefix stripped.
pub fn method_stem(tag: &str, prefix: &str) -> Result<String> {
    match tag.strip_prefix(prefix) {
        Some(rest) if !rest.is_empty() => Ok(rest.to_lowercase()),
        _ => Err(Error::malformed_tag_name(tag, prefix).with_operation("ast::method_stem")),
    }
}

/// Dispatch method for `tag`: `AST_STATEMENT_LIST` becomes `visit_statement_list`.
pub fn visit_function_name(tag: &str, prefix: &str) -> Result<String> {
    Ok(format!("visit_{}", method_stem(tag, prefix)?))
}

/// Default-behaviour function backing the dispatch method for `tag`.
pub fn walk_function_name(tag: &str, prefix: &str) -> Result<String> {
    Ok(format!("walk_{}", method_stem(tag, prefix)?))
}

use std::fs;
use std::path::Path;

use nodetag_error::{Error, Result};
use serde::Deserialize;

/// Generator settings, usually read from a `nodetag.toml` next to the inputs.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenConfig {
    /// Namespace prefix every AST tag carries, stripped to form method names.
    pub ast_prefix: String,
    /// Path of the runtime crate as seen from the host crate.
    pub runtime_crate: String,
    /// Path of the host enum declaring the AST tags.
    pub ast_tag_enum: String,
    /// Module the grammar symbol table is included into.
    pub grammar_module: String,
    pub outputs: OutputNames,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            ast_prefix: "AST_".to_string(),
            runtime_crate: "nodetag_core".to_string(),
            ast_tag_enum: "crate::ast::AstNodeTag".to_string(),
            grammar_module: "crate::grammar_symbols".to_string(),
            outputs: OutputNames::default(),
        }
    }
}

impl GenConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            Error::from(err)
                .with_operation("config::from_path")
                .with_context("path", path.display().to_string())
        })?;
        Self::from_toml(&text).map_err(|err| err.with_context("path", path.display().to_string()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: GenConfig = toml::from_str(text).map_err(|err| {
            Error::config_invalid(format!("invalid TOML: {}", err.message()))
                .with_operation("config::from_toml")
                .set_source(err)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would produce uncompilable output.
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.ast_prefix) {
            return Err(Error::config_invalid(format!(
                "ast_prefix '{}' is not an identifier prefix",
                self.ast_prefix
            ))
            .with_operation("config::validate"));
        }

        for (key, path) in [
            ("runtime_crate", &self.runtime_crate),
            ("ast_tag_enum", &self.ast_tag_enum),
            ("grammar_module", &self.grammar_module),
        ] {
            if !is_path(path) {
                return Err(
                    Error::config_invalid(format!("{key} '{path}' is not a Rust path"))
                        .with_operation("config::validate")
                        .with_context("key", key),
                );
            }
        }

        self.outputs.validate()
    }
}

/// File names of the generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputNames {
    pub visitor: String,
    pub visitor_walk: String,
    pub ast_tags: String,
    pub grammar_symbols: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            visitor: "ast_visitor.rs".to_string(),
            visitor_walk: "ast_visitor_walk.rs".to_string(),
            ast_tags: "ast_tags.rs".to_string(),
            grammar_symbols: "grammar_symbols.rs".to_string(),
        }
    }
}

impl OutputNames {
    fn validate(&self) -> Result<()> {
        let names = [
            &self.visitor,
            &self.visitor_walk,
            &self.ast_tags,
            &self.grammar_symbols,
        ];
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() || name.contains(['/', '\\']) || *name == "." || *name == ".." {
                return Err(Error::config_invalid(format!(
                    "output name '{name}' must be a plain file name"
                ))
                .with_operation("config::validate"));
            }
            if names[..i].contains(name) {
                return Err(Error::config_invalid(format!(
                    "output name '{name}' is used twice"
                ))
                .with_operation("config::validate"));
            }
        }
        Ok(())
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn is_path(text: &str) -> bool {
    !text.is_empty() && text.split("::").all(is_identifier)
}

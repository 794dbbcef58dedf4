use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::Result;

fn main() -> Result<()> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let config_path = manifest_dir.join("nodetag.toml");
    let ast_path = manifest_dir.join("src/ast.rs");
    let grammar_path = manifest_dir.join("grammar/parse.y");

    println!("cargo:rerun-if-changed={}", config_path.display());
    println!("cargo:rerun-if-changed={}", ast_path.display());
    println!("cargo:rerun-if-changed={}", grammar_path.display());

    let config = nodetag_gen::GenConfig::from_path(&config_path)?;
    let ast_text = fs::read_to_string(&ast_path)?;
    let grammar_text = fs::read_to_string(&grammar_path)?;
    let artifacts = nodetag_gen::generate_all(&ast_text, &grammar_text, &config)?;

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    nodetag_gen::write_artifacts(&out_dir, &artifacts)?;

    Ok(())
}

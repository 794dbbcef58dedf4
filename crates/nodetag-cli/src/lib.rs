//! nodetag command-line interface.
//!
pub mod options;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use nodetag_error::{Error, Result};
use nodetag_gen::{
    Artifact, GenConfig, generate_all, generate_ast_artifacts, generate_grammar_artifacts,
    write_artifacts,
};

pub use options::{AllOptions, Command, OutputOptions, StreamOptions};

/// Run one subcommand, reading `stdin` for any omitted `--input`.
///
/// Returns the paths of every artifact produced, in generation order.
pub fn run_command(command: &Command, stdin: impl Read) -> Result<Vec<PathBuf>> {
    let output = command.output();
    let config = load_config(output.config.as_deref())?;

    let artifacts = match command {
        Command::Ast(opts) => {
            let text = read_input(opts.input.as_deref(), stdin)?;
            generate_ast_artifacts(&text, &config)?
        }
        Command::Grammar(opts) => {
            let text = read_input(opts.input.as_deref(), stdin)?;
            generate_grammar_artifacts(&text, &config)?
        }
        Command::All(opts) => {
            let ast = read_file(&opts.ast)?;
            let grammar = read_file(&opts.grammar)?;
            generate_all(&ast, &grammar, &config)?
        }
    };

    write_artifacts(&output.out_dir, &artifacts)?;
    Ok(artifact_paths(&output.out_dir, &artifacts))
}

fn load_config(path: Option<&Path>) -> Result<GenConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            GenConfig::from_path(path)
        }
        None => Ok(GenConfig::default()),
    }
}

fn read_input(path: Option<&Path>, mut stdin: impl Read) -> Result<String> {
    match path {
        Some(path) => read_file(path),
        None => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .map_err(|err| Error::from(err).with_operation("cli::read_stdin"))?;
            Ok(text)
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| {
        Error::from(err)
            .with_operation("cli::read_file")
            .with_context("path", path.display().to_string())
    })
}

fn artifact_paths(dir: &Path, artifacts: &[Artifact]) -> Vec<PathBuf> {
    artifacts.iter().map(|artifact| dir.join(&artifact.name)).collect()
}

//! Command-line options shared by the `nodetag` subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Where generated files go and which config shapes them.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputOptions {
    /// Directory the generated files are written into (created if missing).
    #[arg(short = 'o', long = "out-dir", value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Generator settings in TOML. Defaults apply when omitted.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// A single input stream.
#[derive(Args, Debug, Clone, Default)]
pub struct StreamOptions {
    /// Input file. Reads standard input when omitted.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputOptions,
}

/// Both input streams at once.
#[derive(Args, Debug, Clone, Default)]
pub struct AllOptions {
    /// AST tag enumeration source.
    #[arg(long = "ast", value_name = "FILE")]
    pub ast: PathBuf,

    /// Bison grammar source.
    #[arg(long = "grammar", value_name = "FILE")]
    pub grammar: PathBuf,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate the visitor trait, its default behaviour and the AST tag-name table
    Ast(StreamOptions),
    /// Generate the grammar symbol table
    Grammar(StreamOptions),
    /// Generate everything from an AST source and a grammar
    All(AllOptions),
}

impl Command {
    pub fn output(&self) -> &OutputOptions {
        match self {
            Command::Ast(opts) | Command::Grammar(opts) => &opts.output,
            Command::All(opts) => &opts.output,
        }
    }
}

use std::process::ExitCode;

use clap::Parser;

use nodetag_cli::{Command, run_command};
use nodetag_error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "nodetag",
    about = "nodetag: generate AST visitors and tag-name tables",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

pub fn run(args: Cli) -> Result<()> {
    let written = run_command(&args.command, std::io::stdin().lock())?;
    for path in &written {
        println!("{}", path.display());
    }
    tracing::info!(artifacts = written.len(), "complete");
    Ok(())
}

pub fn main() -> ExitCode {
    let args = Cli::parse();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            tracing::error!(error = %err, "generation failed");
            // inputs that break the tag contract are told apart from I/O trouble
            if err.kind().is_contract_violation() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

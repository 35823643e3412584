//! Command implementations for the csvcmd CLI
//!
//! Each command lives in its own module and writes its report to the
//! output it is given, so the same code serves stdout and tests.

pub mod count;
pub mod generate;
pub mod list;
pub mod shared;
pub mod verify;

pub use count::CountSummary;
pub use list::ListStats;
pub use verify::VerifyReport;

use crate::cli::args::{Args, Commands};
use anyhow::{Context, Result};
use std::io::Write;

/// Result of a dispatched command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Count(CountSummary),
    List(ListStats),
    Verify(VerifyReport),
    Generate,
}

/// Main command runner
///
/// Initialises logging and configuration, then dispatches to the
/// subcommand handler. Callers must ensure a subcommand is present.
pub fn run<W: Write>(args: Args, out: &mut W) -> Result<CommandOutcome> {
    shared::setup_logging(&args);

    let Some(command) = args.command.as_ref() else {
        anyhow::bail!("No command given");
    };

    let load_config =
        || shared::load_configuration(&args).context("Failed to load configuration");

    let outcome = match command {
        Commands::Count(count_args) => CommandOutcome::Count(
            count::run_count(count_args, &load_config()?, out)
                .with_context(|| format!("count failed for {}", count_args.infile.display()))?,
        ),
        Commands::List(list_args) => CommandOutcome::List(
            list::run_list(list_args, &load_config()?, out)
                .with_context(|| format!("list failed for {}", list_args.infile.display()))?,
        ),
        Commands::Verify(verify_args) => CommandOutcome::Verify(
            verify::run_verify(verify_args, &load_config()?, out)
                .with_context(|| format!("verify failed for {}", verify_args.infile.display()))?,
        ),
        Commands::Generate(generate_args) => {
            generate::run_generate(generate_args, out)?;
            CommandOutcome::Generate
        }
    };

    out.flush().context("Failed to flush output")?;
    Ok(outcome)
}

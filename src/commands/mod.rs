//! Implementation of build-assets subcommands.
//!
//! `mod.rs` serves as a thin dispatcher; command logic lives in dedicated
//! modules (`summarize`, `target_branch`).

use std::io::{self, Write};

use crate::cli::{Cli, Commands};
use crate::error::Result;

pub(crate) mod summarize;
pub(crate) mod target_branch;

pub use summarize::Summarize;
pub use target_branch::target_branch;


/// Execute commands based on the parsed CLI arguments, writing command
/// output to stdout.
pub fn execute(cli: &Cli) -> Result<()> {
    execute_with_output(cli, &mut io::stdout().lock())
}

/// Execute commands with an explicit destination for command output.
pub fn execute_with_output(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let quiet = cli.global_opts().quiet();
    let verbose = if quiet {
        0
    } else {
        cli.global_opts().verbose()
    };

    match cli.command() {
        Commands::Summarize {
            source_dir,
            artifacts_dir,
            destination_url,
            branch,
            build_id,
            output,
        } => Summarize {
            source_dir,
            artifacts_dir: artifacts_dir.as_deref(),
            destination_url,
            branch,
            build_id,
            output: output.as_deref(),
            verbose,
            quiet,
        }
        .run(out),
        Commands::TargetBranch { branch, manifest } => target_branch(
            branch.as_deref(),
            manifest.as_deref(),
            verbose,
            quiet,
            out,
        ),
    }
}

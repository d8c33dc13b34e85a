//! Target-branch command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::branch;
use crate::error::{AssetsError, Result};
use crate::logging::Logger;
use crate::manifest::Manifest;

/// Executes the target-branch command.
///
/// Prints the downstream branch for either an explicit source branch or the
/// branch recorded in a manifest. An empty line means no update is needed.
pub fn target_branch(
    source_branch: Option<&str>,
    manifest_path: Option<&Path>,
    verbose: u8,
    quiet: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let log = Logger::new(verbose, quiet);

    let source_branch = match (source_branch, manifest_path) {
        (Some(name), None) => name.to_string(),
        (None, Some(path)) => {
            log.verbose(1, format!("Reading branch from {}", path.display()));
            Manifest::load(path)?.branch
        }
        _ => {
            return Err(AssetsError::ConfigError {
                message: "Exactly one of a branch name or a manifest path is required".to_string(),
            });
        }
    };

    let target = branch::target_branch(&source_branch);
    if target.is_empty() {
        log.verbose(1, format!("Branch '{source_branch}' has no downstream branch"));
    }

    writeln!(out, "{target}").map_err(|source| AssetsError::IoError {
        path: PathBuf::from("-"),
        source,
    })
}

//! Command-line interface definitions for build-assets.
//!
//! This module defines the CLI structure using clap, including all subcommands
//! and their arguments. The main entry point is the [`Cli`] struct.
//!
//! # Example
//!
//! ```no_run
//! use build_assets::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//!
//! match cli.command() {
//!     Commands::Summarize { branch, .. } => println!("Summarizing build of {branch}"),
//!     Commands::TargetBranch { .. } => println!("Mapping branch"),
//! }
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{AssetsError, Result};

/// Main command-line interface for build-assets.
#[derive(Parser)]
#[command(
    name = "build-assets",
    bin_name = "build-assets",
    author,
    version,
    about = "Summarize toolchain build output into a build asset manifest",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

/// Global options that apply to all build-assets commands.
///
/// Diagnostics always go to stderr; stdout carries only command output.
#[derive(Parser)]
pub struct GlobalOpts {
    /// Enable verbose output (use multiple times for more verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, env = "BUILD_ASSETS_VERBOSE")]
    verbose: u8,

    /// Silence all output except for errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        env = "BUILD_ASSETS_QUIET"
    )]
    quiet: bool,
}

impl GlobalOpts {
    /// Get the verbose level
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Check if quiet mode is enabled
    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

impl Cli {
    /// Get the global options
    pub fn global_opts(&self) -> &GlobalOpts {
        &self.global_opts
    }

    /// Get the command
    pub fn command(&self) -> &Commands {
        &self.command
    }

    /// Create a builder for programmatic construction
    pub fn builder() -> CliBuilder {
        CliBuilder::default()
    }

    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Builder for [`Cli`]
#[derive(Debug, Default)]
pub struct CliBuilder {
    verbose: u8,
    quiet: bool,
    command: Option<Commands>,
}

impl CliBuilder {
    /// Set the verbose level
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable quiet mode
    pub fn quiet(mut self, enabled: bool) -> Self {
        self.quiet = enabled;
        self
    }

    /// Set the command
    pub fn command(mut self, command: Commands) -> Self {
        self.command = Some(command);
        self
    }

    /// Build the Cli instance
    pub fn build(self) -> Result<Cli> {
        let command = self.command.ok_or(AssetsError::ConfigError {
            message: "Command is required".to_string(),
        })?;

        Ok(Cli {
            global_opts: GlobalOpts {
                verbose: self.verbose,
                quiet: self.quiet,
            },
            command,
        })
    }
}

/// Available build-assets subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Summarize a build into a build asset JSON manifest
    ///
    /// Reads the VERSION and MICROSOFT_REVISION markers from the source
    /// directory, pairs every archive in the artifacts directory with its
    /// .sha256 file, and writes the manifest as JSON. Without an artifacts
    /// directory the manifest has an empty arch list.
    Summarize {
        /// Source tree that was built (checked for version markers)
        #[arg(long, default_value = ".", env = "BUILD_ASSETS_SOURCE_DIR")]
        source_dir: PathBuf,

        /// Directory containing the .tar.gz/.zip archives and .sha256 files
        #[arg(long, env = "BUILD_ASSETS_ARTIFACTS_DIR")]
        artifacts_dir: Option<PathBuf>,

        /// Base URL the artifacts will be published under
        #[arg(long, default_value = "", env = "BUILD_ASSETS_DESTINATION_URL")]
        destination_url: String,

        /// Branch that was built
        #[arg(long, env = "BUILD_ASSETS_BRANCH")]
        branch: String,

        /// Identifier of the CI build that produced the artifacts
        #[arg(long, env = "BUILD_ASSETS_BUILD_ID")]
        build_id: String,

        /// Write the manifest to this file instead of stdout
        #[arg(short, long, env = "BUILD_ASSETS_OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Print the image repo branch to update for a build
    ///
    /// Prints an empty line when the branch needs no downstream update.
    TargetBranch {
        /// Source branch name
        #[arg(long, conflicts_with = "manifest", required_unless_present = "manifest")]
        branch: Option<String>,

        /// Read the source branch from an existing build asset manifest
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
}

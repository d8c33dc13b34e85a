//! # build-assets CLI
//!
//! Summarizes a toolchain build into a build asset JSON manifest for
//! auto-update automation.
//!
//! ## Commands
//!
//! - **summarize**: Scans the build output and writes the manifest
//! - **target-branch**: Prints the image repo branch a build should update
//!
//! ## Environment Variables
//!
//! - `BUILD_ASSETS_SOURCE_DIR`: Source tree holding the version markers
//! - `BUILD_ASSETS_ARTIFACTS_DIR`: Directory of archives and checksum files
//! - `BUILD_ASSETS_DESTINATION_URL`: Base URL the artifacts are published to
//! - `BUILD_ASSETS_VERBOSE`: Enable verbose output
//! - `BUILD_ASSETS_QUIET`: Silence all output except errors
//!
//! See individual commands for more environment variables.

use std::io::IsTerminal;

use build_assets::cli::Cli;
use miette::{GraphicalReportHandler, GraphicalTheme};

fn main() -> miette::Result<()> {
    // Plain reports for CI logs, unicode for interactive terminals
    let theme = if std::io::stderr().is_terminal() {
        GraphicalTheme::unicode_nocolor()
    } else {
        GraphicalTheme::none()
    };
    miette::set_hook(Box::new(move |_| {
        Box::new(GraphicalReportHandler::new().with_theme(theme.clone()))
    }))?;

    let cli = Cli::parse_args();
    build_assets::commands::execute(&cli).map_err(Into::into)
}

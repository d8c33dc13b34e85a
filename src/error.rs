//! Error types for build-assets.
//!
//! This module defines all error types used throughout build-assets, using
//! a combination of `thiserror` for ergonomic error definitions and `miette`
//! for rich diagnostic output.
//!
//! # Error Handling Strategy
//!
//! - All errors derive from [`AssetsError`]
//! - Every error aborts the summarization; no partial manifest is produced
//! - A missing marker file is not an error (see [`crate::version`])
//! - Errors are automatically converted to `miette::Result` for CLI output
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use build_assets::error::{AssetsError, Result};
//!
//! fn require_dir(path: &Path) -> Result<()> {
//!     if !path.is_dir() {
//!         return Err(AssetsError::ConfigError {
//!             message: format!("'{}' is not a directory", path.display()),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error types that can occur while summarizing build output
#[derive(Error, Debug, Diagnostic)]
pub enum AssetsError {
    /// A version or revision marker file exists but could not be read.
    ///
    /// A marker that does not exist resolves to its default; any other
    /// failure (permissions, invalid UTF-8, the path being a directory)
    /// lands here.
    #[error("Unable to read marker file '{path}'")]
    #[diagnostic(
        code(build_assets::version::marker_unreadable),
        help("Check that the file is readable UTF-8 text, or remove it to use the default.")
    )]
    MarkerUnreadable {
        /// The marker file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The artifacts directory could not be listed.
    #[error("Unable to list artifacts directory '{path}'")]
    #[diagnostic(
        code(build_assets::artifacts::directory_unreadable),
        help("Ensure the artifacts directory exists and is readable.")
    )]
    DirectoryUnreadable {
        /// The directory that was being listed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A checksum sidecar file could not be read.
    #[error("Unable to read checksum file '{path}'")]
    #[diagnostic(code(build_assets::artifacts::checksum_unreadable))]
    ChecksumUnreadable {
        /// The checksum file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A checksum sidecar file has no digest token.
    #[error("Checksum file '{path}' does not contain a digest")]
    #[diagnostic(
        code(build_assets::artifacts::malformed_checksum),
        help("The first whitespace-separated token of a checksum file must be the digest.")
    )]
    MalformedChecksum {
        /// The checksum file path
        path: PathBuf,
    },

    /// An archive name does not end in `<os>-<arch>.<suffix>`.
    #[error("Archive '{file_name}' has malformed platform '{platform}'")]
    #[diagnostic(
        code(build_assets::artifacts::malformed_archive_name),
        help(
            "Archives must be named '<base>.<os>-<arch><suffix>', with exactly one '-' in the \
             platform part."
        )
    )]
    MalformedArchiveName {
        /// The archive file name
        file_name: String,
        /// The platform component that failed to split
        platform: String,
    },

    /// An artifact file name is not valid UTF-8.
    #[error("Invalid UTF-8 in artifact file name: {path}")]
    #[diagnostic(
        code(build_assets::path::invalid_utf8),
        help("Artifact names become URL fragments and must be valid UTF-8.")
    )]
    InvalidFileName {
        /// The offending path
        path: PathBuf,
    },

    /// File system I/O error while reading or writing a manifest.
    #[error("I/O error accessing '{path}'")]
    #[diagnostic(code(build_assets::io_error))]
    IoError {
        /// The path that caused the I/O error
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode or decode a manifest as JSON.
    #[error("Invalid manifest JSON for '{path}'")]
    #[diagnostic(
        code(build_assets::manifest::json_error),
        help("Manifests must follow the build asset JSON schema.")
    )]
    JsonError {
        /// The manifest path (or `-` for stdout)
        path: PathBuf,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Required configuration is missing or inconsistent.
    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(build_assets::config::error),
        help("Check the required configuration parameters.")
    )]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, AssetsError>;

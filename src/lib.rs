//! # build-assets
//!
//! Summarizes the output of a toolchain build into a single build asset
//! manifest, so auto-update automation (for example the container image
//! repos) can consume one canonical description of a build instead of
//! re-scanning its output directories.
//!
//! ## Overview
//!
//! A build leaves behind a source tree with optional version markers and an
//! artifacts directory of per-platform archives, each optionally accompanied
//! by a `.sha256` sidecar:
//!
//! ```text
//! go.1.21.0-3.linux-amd64.tar.gz
//! go.1.21.0-3.linux-amd64.tar.gz.sha256
//! go.1.21.0-3.windows-amd64.zip
//! go.1.21.0-3.windows-amd64.zip.sha256
//! ```
//!
//! build-assets pairs each archive with its checksum, extracts the
//! OS/architecture from the file name, resolves the `<version>-<revision>`
//! string and emits a manifest sorted by download URL.
//!
//! ## Architecture
//!
//! - [`version`]: Version and revision marker resolution
//! - [`classify`]: Artifact file name conventions
//! - [`index`]: Merging checksum and archive facts per artifact
//! - [`manifest`]: The manifest data model and its assembly
//! - [`branch`]: Source branch to downstream branch mapping
//! - [`cli`]: Command-line interface definitions using clap
//! - [`commands`]: Implementation of the subcommands
//! - [`error`]: Error types and handling with thiserror + miette
//!
//! ## Usage in CI
//!
//! ```bash
//! build-assets summarize \
//!   --source-dir go \
//!   --artifacts-dir eng/artifacts/bin \
//!   --destination-url "$BLOB_URL/$BUILD_ID" \
//!   --branch "$BRANCH" --build-id "$BUILD_ID" \
//!   --output assets.json
//!
//! build-assets target-branch --manifest assets.json
//! ```
//!
//! ## Library Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use build_assets::manifest::summarize;
//!
//! let manifest = summarize(
//!     Path::new("go"),
//!     Path::new("eng/artifacts/bin"),
//!     "https://example.org/go/20231004.3",
//!     "main",
//!     "20231004.3",
//! )?;
//! println!("{}", manifest.to_json()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Every failure aborts the summary; there is no partial manifest. Errors
//! are [`error::AssetsError`] values with `miette` diagnostics attached.

pub mod branch;
pub mod classify;
pub mod cli;
pub mod commands;
pub mod error;
pub mod index;
pub mod manifest;
pub mod version;

mod logging;

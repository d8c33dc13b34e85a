//! Artifact file name classification.
//!
//! Build output follows a naming convention: archives are named
//! `<base>.<os>-<arch><archive-suffix>` and each may have a checksum sidecar
//! named `<archive-file-name><checksum-suffix>`. All knowledge of that
//! convention lives here, so traversal and merging never look at file names
//! themselves.
//!
//! Both kinds of file produce the same identity key for a given archive: the
//! sidecar's name minus the checksum suffix is the archive's full name. That
//! equality is what lets the two merge into one manifest entry.

use std::path::Path;

use crate::error::{AssetsError, Result};
use crate::manifest::ArchEnv;

/// Archive suffixes produced by toolchain builds, in match priority order.
pub const ARCHIVE_SUFFIXES: &[&str] = &[".tar.gz", ".zip"];

/// Suffix of checksum sidecar files.
pub const CHECKSUM_SUFFIX: &str = ".sha256";

/// What a single artifact file name turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A checksum sidecar for the archive named `key`.
    Checksum {
        /// Identity key: the file name with the checksum suffix removed
        key: String,
    },
    /// A platform archive.
    Archive {
        /// Identity key: the full archive file name
        key: String,
        /// Platform parsed from the file name
        env: ArchEnv,
    },
    /// Anything else; ignored by the manifest builder.
    Unrecognized,
}

/// Classifies artifact file names against a naming convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactClassifier {
    archive_suffixes: Vec<String>,
    checksum_suffix: String,
}

impl Default for ArtifactClassifier {
    fn default() -> Self {
        Self::new(ARCHIVE_SUFFIXES.iter().copied(), CHECKSUM_SUFFIX)
    }
}

impl ArtifactClassifier {
    /// Create a classifier for a custom naming convention.
    ///
    /// Archive suffixes are tried in the order given; the first match wins.
    pub fn new<I, S>(archive_suffixes: I, checksum_suffix: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            archive_suffixes: archive_suffixes.into_iter().map(Into::into).collect(),
            checksum_suffix: checksum_suffix.into(),
        }
    }

    /// The archive suffixes, in match priority order.
    pub fn archive_suffixes(&self) -> &[String] {
        &self.archive_suffixes
    }

    /// The checksum sidecar suffix.
    pub fn checksum_suffix(&self) -> &str {
        &self.checksum_suffix
    }

    /// Classifies a plain file name (no directory components).
    ///
    /// The checksum suffix is checked first, so `go.linux-amd64.tar.gz.sha256`
    /// is a checksum file rather than an archive.
    ///
    /// # Errors
    ///
    /// Returns [`AssetsError::MalformedArchiveName`] when an archive's
    /// platform component does not split into exactly `<os>-<arch>`.
    pub fn classify(&self, file_name: &str) -> Result<Classification> {
        if let Some(key) = file_name.strip_suffix(self.checksum_suffix.as_str()) {
            return Ok(Classification::Checksum {
                key: key.to_string(),
            });
        }

        let Some(stem) = self
            .archive_suffixes
            .iter()
            .find_map(|suffix| file_name.strip_suffix(suffix.as_str()))
        else {
            return Ok(Classification::Unrecognized);
        };

        Ok(Classification::Archive {
            key: file_name.to_string(),
            env: parse_platform(file_name, stem)?,
        })
    }
}

/// Extracts `<os>-<arch>` from the last `.`-separated component of `stem`.
///
/// A stem without any `.` is treated as a bare platform component.
fn parse_platform(file_name: &str, stem: &str) -> Result<ArchEnv> {
    let platform = stem.rsplit_once('.').map_or(stem, |(_, last)| last);

    let mut parts = platform.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(goos), Some(goarch), None) => Ok(ArchEnv {
            goos: goos.to_string(),
            goarch: goarch.to_string(),
        }),
        _ => Err(AssetsError::MalformedArchiveName {
            file_name: file_name.to_string(),
            platform: platform.to_string(),
        }),
    }
}

/// Returns the digest from checksum file contents: the first
/// whitespace-delimited token.
///
/// # Errors
///
/// Returns [`AssetsError::MalformedChecksum`] if the contents are empty or
/// whitespace only. `path` is used for the error only.
pub fn parse_checksum(path: &Path, contents: &str) -> Result<String> {
    contents
        .split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or_else(|| AssetsError::MalformedChecksum {
            path: path.to_path_buf(),
        })
}

//! The build asset manifest.
//!
//! A [`Manifest`] describes one toolchain build: where it came from and the
//! per-platform archives it produced. Its JSON form is consumed by
//! auto-update automation, so the field names and nesting are fixed:
//!
//! ```json
//! {
//!   "branch": "main",
//!   "buildId": "20231004.3",
//!   "version": "1.21.0-3",
//!   "arches": [
//!     {
//!       "env": { "GOOS": "linux", "GOARCH": "amd64" },
//!       "sha256": "abc123",
//!       "url": "https://example.org/go.1.21.0-3.linux-amd64.tar.gz"
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::branch::target_branch;
use crate::error::{AssetsError, Result};

mod builder;

pub use builder::{BuildResults, BuildResultsBuilder, summarize};


/// Root object of a build asset JSON file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Branch that produced this build.
    pub branch: String,

    /// Identifier of the CI build that produced these assets.
    #[serde(rename = "buildId")]
    pub build_id: String,

    /// Version of the build, as `major.minor.patch-revision`.
    pub version: String,

    /// Artifacts produced for this version, one per OS/architecture, sorted
    /// by URL.
    pub arches: Vec<ArchEntry>,
}

/// One build output for one OS/architecture pair.
///
/// Any field may be empty: a checksum without its archive (or the reverse)
/// still yields an entry.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchEntry {
    pub env: ArchEnv,
    pub sha256: String,
    pub url: String,
}

/// Target platform, named after the toolchain's environment variables.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ArchEnv {
    #[serde(rename = "GOOS")]
    pub goos: String,
    #[serde(rename = "GOARCH")]
    pub goarch: String,
}

impl Manifest {
    /// Returns the downstream image repo branch to update for this build, or
    /// an empty string if none.
    pub fn docker_target_branch(&self) -> &str {
        target_branch(&self.branch)
    }

    /// Encodes the manifest as pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(self).map_err(|source| AssetsError::JsonError {
                path: "-".into(),
                source,
            })?;
        json.push('\n');
        Ok(json)
    }

    /// Writes the manifest as JSON to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| AssetsError::IoError {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, self.to_json()?).map_err(|source| AssetsError::IoError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads a manifest previously written by [`Manifest::write_to`].
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| AssetsError::IoError {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| AssetsError::JsonError {
            path: path.to_path_buf(),
            source,
        })
    }
}

//! Manifest assembly from a build's source and artifacts directories.

use std::fs;
use std::path::{Path, PathBuf};

use super::Manifest;
use crate::classify::{ArtifactClassifier, Classification, parse_checksum};
use crate::error::{AssetsError, Result};
use crate::index::ArtifactIndex;
use crate::logging::Logger;
use crate::version::compose_version;

/// Locations and metadata describing the output of one toolchain build.
#[derive(Debug, Clone)]
pub struct BuildResults {
    source_dir: PathBuf,
    artifacts_dir: Option<PathBuf>,
    destination_url: String,
    branch: String,
    build_id: String,
    classifier: ArtifactClassifier,
    verbose: u8,
    quiet: bool,
}

/// Builder for [`BuildResults`]
#[derive(Debug, Default)]
pub struct BuildResultsBuilder {
    source_dir: Option<PathBuf>,
    artifacts_dir: Option<PathBuf>,
    destination_url: String,
    branch: String,
    build_id: String,
    classifier: Option<ArtifactClassifier>,
    verbose: u8,
    quiet: bool,
}

impl BuildResultsBuilder {
    /// Set the source tree checked for version markers (defaults to `.`).
    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = Some(dir.into());
        self
    }

    /// Set the directory holding archives and checksum files.
    ///
    /// `None` or an empty path produces a manifest with no arches.
    pub fn artifacts_dir(mut self, dir: Option<impl Into<PathBuf>>) -> Self {
        self.artifacts_dir = dir.map(Into::into);
        self
    }

    /// Set the base URL the artifacts will be published under.
    pub fn destination_url(mut self, url: impl Into<String>) -> Self {
        self.destination_url = url.into();
        self
    }

    /// Set the branch that was built.
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Set the identifier of the CI build.
    pub fn build_id(mut self, build_id: impl Into<String>) -> Self {
        self.build_id = build_id.into();
        self
    }

    /// Use a different artifact naming convention.
    pub fn classifier(mut self, classifier: ArtifactClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Set the verbosity level (0 = normal, 1+ = verbose).
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable or disable quiet mode.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn build(self) -> BuildResults {
        BuildResults {
            source_dir: self.source_dir.unwrap_or_else(|| PathBuf::from(".")),
            artifacts_dir: self.artifacts_dir.filter(|dir| !dir.as_os_str().is_empty()),
            destination_url: self.destination_url,
            branch: self.branch,
            build_id: self.build_id,
            classifier: self.classifier.unwrap_or_default(),
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

impl BuildResults {
    pub fn builder() -> BuildResultsBuilder {
        BuildResultsBuilder::default()
    }

    /// Scans the build output and assembles its manifest.
    ///
    /// Version markers are resolved first, then the artifacts directory (if
    /// any) is listed once, without recursing. Archives and checksum files
    /// sharing an identity key merge into a single entry, and the entries are
    /// sorted by URL so repeated runs over the same directory give identical
    /// manifests.
    ///
    /// # Errors
    ///
    /// Any failure aborts the whole summary: an unreadable marker, directory
    /// or checksum file, a checksum file without a digest, or an archive
    /// whose name has no `<os>-<arch>` component.
    pub fn create_summary(&self) -> Result<Manifest> {
        let log = Logger::new(self.verbose, self.quiet);

        let version = compose_version(&self.source_dir)?;
        log.verbose(1, format!("Resolved version {version}"));

        let mut index = ArtifactIndex::new();
        match &self.artifacts_dir {
            Some(dir) => self.index_artifacts(dir, &mut index, &log)?,
            None => log.verbose(1, "No artifacts directory; summarizing without arches"),
        }

        let arches = index.into_sorted();
        log.verbose(1, format!("Summarized {} arch entries", arches.len()));

        Ok(Manifest {
            branch: self.branch.clone(),
            build_id: self.build_id.clone(),
            version,
            arches,
        })
    }

    fn index_artifacts(&self, dir: &Path, index: &mut ArtifactIndex, log: &Logger) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(|source| AssetsError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| AssetsError::DirectoryUnreadable {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            if path.is_dir() {
                log.verbose(2, format!("Skipping directory: {}", path.display()));
                continue;
            }

            let file_name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    // Only names that would become manifest entries must be text.
                    let lossy = raw.to_string_lossy();
                    if let Ok(Classification::Unrecognized) = self.classifier.classify(&lossy) {
                        log.verbose(2, format!("Ignoring non-UTF-8 file: {lossy}"));
                        continue;
                    }
                    return Err(AssetsError::InvalidFileName { path });
                }
            };
            log.verbose(1, format!("Artifact file: {file_name}"));

            match self.classifier.classify(&file_name)? {
                Classification::Checksum { key } => {
                    let contents = fs::read_to_string(&path).map_err(|source| {
                        AssetsError::ChecksumUnreadable {
                            path: path.clone(),
                            source,
                        }
                    })?;
                    index.get_or_create(&key).sha256 = parse_checksum(&path, &contents)?;
                }
                Classification::Archive { key, env } => {
                    let arch = index.get_or_create(&key);
                    arch.url = format!("{}/{file_name}", self.destination_url);
                    arch.env = env;
                }
                Classification::Unrecognized => {
                    log.verbose(2, format!("Ignoring unrecognized file: {file_name}"));
                }
            }
        }

        Ok(())
    }
}

/// Summarizes a build in one call.
///
/// An empty `artifacts_dir` skips artifact discovery, producing a manifest
/// with an empty `arches` list.
pub fn summarize(
    source_dir: &Path,
    artifacts_dir: &Path,
    destination_url: &str,
    branch: &str,
    build_id: &str,
) -> Result<Manifest> {
    BuildResults::builder()
        .source_dir(source_dir)
        .artifacts_dir(Some(artifacts_dir))
        .destination_url(destination_url)
        .branch(branch)
        .build_id(build_id)
        .quiet(true)
        .build()
        .create_summary()
}

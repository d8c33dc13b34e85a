//! Summarize command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AssetsError, Result};
use crate::logging::Logger;
use crate::manifest::{BuildResults, Manifest};

/// Arguments of the summarize command.
pub struct Summarize<'a> {
    pub source_dir: &'a Path,
    pub artifacts_dir: Option<&'a Path>,
    pub destination_url: &'a str,
    pub branch: &'a str,
    pub build_id: &'a str,
    pub output: Option<&'a Path>,
    pub verbose: u8,
    pub quiet: bool,
}

impl Summarize<'_> {
    /// Builds the manifest and writes it to the output file, or to `out` when
    /// no output file is set.
    pub fn run(self, out: &mut dyn Write) -> Result<()> {
        let log = Logger::new(self.verbose, self.quiet);
        log.verbose(
            1,
            format!("Summarizing build output of {}", self.source_dir.display()),
        );

        let manifest = BuildResults::builder()
            .source_dir(self.source_dir)
            .artifacts_dir(self.artifacts_dir)
            .destination_url(self.destination_url)
            .branch(self.branch)
            .build_id(self.build_id)
            .verbose(self.verbose)
            .quiet(self.quiet)
            .build()
            .create_summary()?;

        match self.output {
            Some(path) => {
                manifest.write_to(path)?;
                log.info(format!(
                    "Wrote build asset manifest for {} ({} arches) to {}",
                    manifest.version,
                    manifest.arches.len(),
                    path.display()
                ));
            }
            None => write_manifest(&manifest, out)?,
        }

        Ok(())
    }
}

fn write_manifest(manifest: &Manifest, out: &mut dyn Write) -> Result<()> {
    out.write_all(manifest.to_json()?.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|source| AssetsError::IoError {
            path: PathBuf::from("-"),
            source,
        })
}

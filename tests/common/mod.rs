use std::path::PathBuf;

use assert_fs::TempDir;
use assert_fs::prelude::*;

pub const DESTINATION_URL: &str = "https://example.org/go/20231004.3";

/// A fake build: a source tree plus an artifacts directory.
pub struct TestBuild {
    dir: TempDir,
}

impl TestBuild {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        dir.child("go").create_dir_all().unwrap();
        dir.child("artifacts").create_dir_all().unwrap();
        Self { dir }
    }

    /// A build whose source tree carries both version markers.
    pub fn with_markers(version: &str, revision: &str) -> Self {
        let build = Self::new();
        build.source_file("VERSION", &format!("{version}\n"));
        build.source_file("MICROSOFT_REVISION", &format!("{revision}\n"));
        build
    }

    pub fn source_dir(&self) -> PathBuf {
        self.dir.child("go").to_path_buf()
    }

    pub fn artifacts_dir(&self) -> PathBuf {
        self.dir.child("artifacts").to_path_buf()
    }

    pub fn root(&self) -> &TempDir {
        &self.dir
    }

    pub fn source_file(&self, name: &str, contents: &str) {
        self.dir.child("go").child(name).write_str(contents).unwrap();
    }

    pub fn artifact(&self, name: &str, contents: &str) {
        self.dir
            .child("artifacts")
            .child(name)
            .write_str(contents)
            .unwrap();
    }

    /// Writes an archive and its checksum sidecar.
    pub fn archive_with_checksum(&self, name: &str, digest: &str) {
        self.artifact(name, "archive bytes");
        self.artifact(&format!("{name}.sha256"), &format!("{digest}  {name}\n"));
    }
}

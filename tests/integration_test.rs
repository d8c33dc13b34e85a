use assert_fs::prelude::*;
use build_assets::cli::{Cli, Commands};
use build_assets::commands::execute_with_output;
use build_assets::error::{AssetsError, Result};
use build_assets::manifest::{ArchEnv, Manifest, summarize};
use predicates::prelude::*;

mod common;

use common::{DESTINATION_URL, TestBuild};

/// Helper to run the summarize command through the CLI entry point
fn execute_summarize(build: &TestBuild, output: Option<&str>) -> Result<String> {
    let cli = Cli::builder()
        .quiet(true)
        .command(Commands::Summarize {
            source_dir: build.source_dir(),
            artifacts_dir: Some(build.artifacts_dir()),
            destination_url: DESTINATION_URL.to_string(),
            branch: "main".to_string(),
            build_id: "20231004.3".to_string(),
            output: output.map(|name| build.root().child(name).to_path_buf()),
        })
        .build()?;

    let mut out = Vec::new();
    execute_with_output(&cli, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn summarize_build(build: &TestBuild) -> Result<Manifest> {
    summarize(
        &build.source_dir(),
        &build.artifacts_dir(),
        DESTINATION_URL,
        "main",
        "20231004.3",
    )
}

#[test]
fn test_full_release_build() {
    let build = TestBuild::with_markers("go1.21.0", "3");
    for platform in ["linux-amd64", "linux-arm64", "darwin-arm64"] {
        build.archive_with_checksum(
            &format!("go.1.21.0-3.{platform}.tar.gz"),
            &format!("{platform}-digest"),
        );
    }
    build.archive_with_checksum("go.1.21.0-3.windows-amd64.zip", "windows-amd64-digest");
    build.artifact("go.1.21.0-3.src.tar.gz.sig", "signature");

    let manifest = summarize_build(&build).unwrap();

    assert_eq!(manifest.version, "1.21.0-3");
    let platforms: Vec<_> = manifest
        .arches
        .iter()
        .map(|arch| format!("{}-{}", arch.env.goos, arch.env.goarch))
        .collect();
    assert_eq!(
        platforms,
        vec!["darwin-arm64", "linux-amd64", "linux-arm64", "windows-amd64"]
    );
    for arch in &manifest.arches {
        let platform = format!("{}-{}", arch.env.goos, arch.env.goarch);
        assert_eq!(arch.sha256, format!("{platform}-digest"));
        assert!(arch.url.starts_with(&format!("{DESTINATION_URL}/go.1.21.0-3.{platform}")));
    }
}

#[test]
fn test_checksum_merges_regardless_of_name_order() {
    // The sidecar sorts before its archive in some listings; the outcome must
    // not depend on which one is seen first.
    let build = TestBuild::new();
    build.artifact("a.linux-amd64.zip.sha256", "1111");
    build.artifact("a.linux-amd64.zip", "");
    build.artifact("b.linux-amd64.tar.gz", "");
    build.artifact("b.linux-amd64.tar.gz.sha256", "2222");

    let manifest = summarize_build(&build).unwrap();

    assert_eq!(manifest.arches.len(), 2);
    assert_eq!(manifest.arches[0].sha256, "1111");
    assert_eq!(manifest.arches[1].sha256, "2222");
    assert!(manifest.arches.iter().all(|arch| {
        arch.env
            == ArchEnv {
                goos: "linux".to_string(),
                goarch: "amd64".to_string(),
            }
    }));
}

#[test]
fn test_metadata_only_build() {
    let build = TestBuild::with_markers("go1.22.0", "1");

    let manifest = summarize(
        &build.source_dir(),
        std::path::Path::new(""),
        DESTINATION_URL,
        "dev/official/go1.22",
        "99",
    )
    .unwrap();

    assert!(manifest.arches.is_empty());
    assert_eq!(manifest.version, "1.22.0-1");
    assert_eq!(manifest.docker_target_branch(), "dev/official/go1.22");
}

#[test]
fn test_summarize_command_writes_manifest_file() {
    let build = TestBuild::new();
    build.archive_with_checksum("go.linux-amd64.tar.gz", "abc123");

    let stdout = execute_summarize(&build, Some("out/assets.json")).unwrap();
    assert!(stdout.is_empty());

    let output = build.root().child("out/assets.json");
    output.assert(predicate::path::is_file());
    output.assert(predicate::str::contains("\"buildId\": \"20231004.3\""));
    output.assert(predicate::str::contains("\"GOOS\": \"linux\""));
    output.assert(predicate::str::contains("\"GOARCH\": \"amd64\""));
    output.assert(predicate::str::contains("\"sha256\": \"abc123\""));
}

#[test]
fn test_summarize_command_is_deterministic() {
    let build = TestBuild::with_markers("go1.21.5", "2");
    for platform in ["linux-386", "freebsd-amd64", "linux-ppc64le", "windows-arm64"] {
        build.archive_with_checksum(&format!("go.1.21.5-2.{platform}.tar.gz"), platform);
    }
    build.artifact("orphan.linux-mips.tar.gz.sha256", "ffff");

    let first = execute_summarize(&build, None).unwrap();
    let second = execute_summarize(&build, None).unwrap();

    assert_eq!(first, second);
    let manifest: Manifest = serde_json::from_str(&first).unwrap();
    assert_eq!(manifest.arches.len(), 5);
    assert!(manifest.arches[0].url.is_empty());
    assert_eq!(manifest.arches[0].sha256, "ffff");
}

#[test]
fn test_malformed_checksum_aborts_without_output() {
    let build = TestBuild::new();
    build.archive_with_checksum("go.linux-amd64.tar.gz", "abc123");
    build.artifact("go.linux-arm64.tar.gz.sha256", "");

    let result = execute_summarize(&build, Some("assets.json"));

    assert!(matches!(result, Err(AssetsError::MalformedChecksum { .. })));
    build
        .root()
        .child("assets.json")
        .assert(predicate::path::missing());
}

#[test]
fn test_malformed_archive_name_aborts() {
    let build = TestBuild::new();
    build.artifact("go.1.21.0.linux_amd64.zip", "");

    let result = summarize_build(&build);

    assert!(matches!(
        result,
        Err(AssetsError::MalformedArchiveName { ref file_name, .. })
            if file_name == "go.1.21.0.linux_amd64.zip"
    ));
}

#[test]
fn test_target_branch_command_reads_manifest() {
    let build = TestBuild::new();
    execute_summarize(&build, Some("assets.json")).unwrap();

    let cli = Cli::builder()
        .quiet(true)
        .command(Commands::TargetBranch {
            branch: None,
            manifest: Some(build.root().child("assets.json").to_path_buf()),
        })
        .build()
        .unwrap();

    let mut out = Vec::new();
    execute_with_output(&cli, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "microsoft/main\n");
}

//! Version marker resolution.
//!
//! A source tree may carry two single-line marker files: `VERSION` (present
//! only on release branches, e.g. `go1.21.0`) and `MICROSOFT_REVISION`
//! (e.g. `3`). Either may be absent, in which case a default applies.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{AssetsError, Result};

/// Name of the toolchain version marker inside the source directory.
pub const VERSION_FILE: &str = "VERSION";

/// Name of the build revision marker inside the source directory.
pub const REVISION_FILE: &str = "MICROSOFT_REVISION";

/// Version used when [`VERSION_FILE`] is absent.
pub const DEFAULT_VERSION: &str = "main";

/// Revision used when [`REVISION_FILE`] is absent.
pub const DEFAULT_REVISION: &str = "1";

/// Language prefix carried by version markers and release tags.
pub const VERSION_PREFIX: &str = "go";

/// Reads the first line of a marker file.
///
/// Returns `Ok(None)` when the file does not exist, so callers can tell an
/// absent marker apart from an unreadable one. Only the first line is
/// significant; its line terminator (`\n` or `\r\n`) is stripped. An empty
/// file yields an empty string.
///
/// # Errors
///
/// Returns [`AssetsError::MarkerUnreadable`] for any failure other than the
/// file not existing.
pub fn read_marker(path: &Path) -> Result<Option<String>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(AssetsError::MarkerUnreadable {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let first = BufReader::new(file).lines().next().transpose().map_err(|source| {
        AssetsError::MarkerUnreadable {
            path: path.to_path_buf(),
            source,
        }
    })?;

    Ok(Some(first.unwrap_or_default()))
}

/// Resolves a marker file to its first line, or `default` if it is absent.
pub fn resolve(path: &Path, default: &str) -> Result<String> {
    Ok(read_marker(path)?.unwrap_or_else(|| default.to_string()))
}

/// Resolves the composed `<version>-<revision>` string for a source tree.
///
/// The [`VERSION_PREFIX`] is stripped from the version marker, so a tree with
/// `VERSION` = `go1.21.0` and `MICROSOFT_REVISION` = `3` yields `1.21.0-3`,
/// and a tree with neither marker yields `main-1`.
pub fn compose_version(source_dir: &Path) -> Result<String> {
    let version = resolve(&source_dir.join(VERSION_FILE), DEFAULT_VERSION)?;
    let revision = resolve(&source_dir.join(REVISION_FILE), DEFAULT_REVISION)?;

    let version = version.strip_prefix(VERSION_PREFIX).unwrap_or(&version);
    Ok(format!("{version}-{revision}"))
}

//! Changelog parsing: package name and version discovery.
//!
//! The first line matching the Debian entry format decides the package
//! name and version; everything below it is history and is ignored.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{BuildError, Result};

/// First line of a changelog entry: `package (MAJOR.MINOR.PATCH-REVISION...) ...`.
static ENTRY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z0-9][a-z0-9+.-]+) \((\d+)\.(\d+)\.(\d+)-(\d+)").expect("entry pattern is valid")
});

/// Version 4-tuple taken from the newest changelog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Leading digits of the packaging revision (`-3`, `-3ubuntu1` both give `3`).
    pub revision: String,
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}-{}",
            self.major, self.minor, self.patch, self.revision
        )
    }
}

/// Package name plus version from the newest changelog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub package: String,
    pub version: VersionInfo,
}

impl ChangelogEntry {
    /// Name of the upstream source archive for this entry.
    pub fn orig_tarball_name(&self) -> String {
        format!(
            "{}_{}.{}.{}.orig.tar.gz",
            self.package, self.version.major, self.version.minor, self.version.patch
        )
    }
}

/// Extract the package name and version from the topmost changelog entry.
///
/// Scans line by line and stops at the first match. A missing file or a
/// changelog without any matching entry is a configuration error.
pub fn parse_changelog(path: &Path) -> Result<ChangelogEntry> {
    debug!("reading changelog {}", path.display());
    if !path.is_file() {
        return Err(BuildError::config(format!(
            "changelog not found at {}",
            path.display()
        )));
    }
    let content = fs::read_to_string(path)
        .map_err(|e| BuildError::io(format!("reading {}", path.display()), e))?;

    for line in content.lines() {
        if let Some(entry) = parse_entry_line(line) {
            debug!("changelog entry: {} {}", entry.package, entry.version);
            return Ok(entry);
        }
    }

    Err(BuildError::config(format!(
        "no version entry found in {}",
        path.display()
    )))
}

fn parse_entry_line(line: &str) -> Option<ChangelogEntry> {
    let caps = ENTRY_LINE.captures(line)?;
    Some(ChangelogEntry {
        package: caps[1].to_string(),
        version: VersionInfo {
            major: caps[2].parse().ok()?,
            minor: caps[3].parse().ok()?,
            patch: caps[4].parse().ok()?,
            revision: caps[5].to_string(),
        },
    })
}

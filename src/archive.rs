//! Upstream source archive (orig tarball) creation.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::changelog::ChangelogEntry;
use crate::error::Result;
use crate::process::Cmd;
use crate::source::SourceInfo;

/// Create `<package>_<major>.<minor>.<patch>.orig.tar.gz` in the workspace.
///
/// Version-control internals are excluded; everything else in the
/// checkout is archived relative to its root, so the tarball unpacks
/// without a wrapping directory.
pub fn create_orig_tarball(
    workspace: &Path,
    source: &SourceInfo,
    entry: &ChangelogEntry,
) -> Result<PathBuf> {
    let tarball = workspace.join(entry.orig_tarball_name());
    info!("creating {}", tarball.display());

    Cmd::new("tar")
        .arg("--exclude=.git")
        .arg("-czf")
        .arg_path(&tarball)
        .arg("-C")
        .arg_path(&source.checkout)
        .arg(".")
        .run()?;

    Ok(tarball)
}

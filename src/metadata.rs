//! Packaging metadata validation and merging.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{BuildError, Result};
use crate::fsutil;
use crate::source::SourceInfo;

/// Name of the Debian packaging directory inside the metadata checkout.
pub const DEBIAN_DIR: &str = "debian";

/// Path of the changelog inside the metadata checkout.
pub fn changelog_path(pkg_path: &Path) -> PathBuf {
    pkg_path.join(DEBIAN_DIR).join("changelog")
}

/// Require `<pkg_path>/debian` to exist before anything expensive runs.
pub fn ensure_debian_dir(pkg_path: &Path) -> Result<()> {
    let debian = pkg_path.join(DEBIAN_DIR);
    debug!("checking {}", debian.display());
    if !debian.is_dir() {
        return Err(BuildError::config(format!(
            "packaging metadata at {} has no debian/ directory",
            pkg_path.display()
        )));
    }
    info!("found debian/ in {}", pkg_path.display());
    Ok(())
}

/// Copy the debian/ directory into the acquired source tree.
pub fn merge_debian_dir(pkg_path: &Path, source: &SourceInfo) -> Result<()> {
    let from = pkg_path.join(DEBIAN_DIR);
    let to = source.checkout.join(DEBIAN_DIR);
    info!("merging debian/ into the source tree");
    fsutil::copy_tree(&from, &to).map_err(|e| {
        BuildError::io(
            format!("copying {} to {}", from.display(), to.display()),
            e,
        )
    })
}

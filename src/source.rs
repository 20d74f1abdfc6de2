//! Source acquisition: local tree copy or shallow clone.
//!
//! A locator that exists on the filesystem is treated as a local checkout
//! and must carry version-control metadata; anything else goes to git as
//! a remote. Either way the source ends up at `<workspace>/source`.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{BuildError, Result};
use crate::fsutil;
use crate::process::Cmd;

/// Name of the checkout directory inside the workspace.
pub const CHECKOUT_DIR: &str = "source";

/// Where the source came from and where it now lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    /// URL or path exactly as given on the command line.
    pub locator: String,
    /// Resolved checkout inside the workspace.
    pub checkout: PathBuf,
    /// True when the locator was an existing local tree.
    pub is_local: bool,
    /// Fetch submodules recursively after checkout.
    pub recursive: bool,
}

/// Acquire the source into `<workspace>/source`.
pub fn acquire(source_url: &str, source_ref: &str, workspace: &Path) -> Result<SourceInfo> {
    let candidate = Path::new(source_url);
    if candidate.exists() {
        copy_local_tree(candidate, workspace)
    } else {
        clone_shallow(source_url, source_ref, workspace)
    }
}

/// Copy an existing local checkout into the workspace.
fn copy_local_tree(tree: &Path, workspace: &Path) -> Result<SourceInfo> {
    if !tree.join(".git").exists() {
        return Err(BuildError::config(format!(
            "{} exists but is not a git checkout",
            tree.display()
        )));
    }

    let checkout = workspace.join(CHECKOUT_DIR);
    info!("copying local source tree {}", tree.display());
    fsutil::copy_tree(tree, &checkout).map_err(|e| {
        BuildError::io(format!("copying {} into the workspace", tree.display()), e)
    })?;

    Ok(SourceInfo {
        locator: tree.display().to_string(),
        checkout,
        is_local: true,
        recursive: true,
    })
}

/// Shallow-clone the requested ref into the workspace.
///
/// Mirrors a minimal CI fetch: init plus a single-ref depth-1 fetch
/// without tags, a forced checkout, then a recursive shallow submodule
/// update.
fn clone_shallow(url: &str, reference: &str, workspace: &Path) -> Result<SourceInfo> {
    let checkout = workspace.join(CHECKOUT_DIR);
    info!("cloning {} at {}", url, reference);

    Cmd::new("git").arg("init").arg_path(&checkout).run()?;
    Cmd::new("git")
        .args(["remote", "add", "origin", url])
        .current_dir(&checkout)
        .run()?;
    Cmd::new("git")
        .args([
            "fetch",
            "--no-tags",
            "--prune",
            "--no-recurse-submodules",
            "--depth=1",
            "origin",
            reference,
        ])
        .current_dir(&checkout)
        .run()?;
    Cmd::new("git")
        .args(["checkout", "--progress", "--force", reference])
        .current_dir(&checkout)
        .run()?;

    let source = SourceInfo {
        locator: url.to_string(),
        checkout,
        is_local: false,
        recursive: true,
    };

    if source.recursive {
        debug!("updating submodules");
        Cmd::new("git")
            .args(["submodule", "sync", "--recursive"])
            .current_dir(&source.checkout)
            .run()?;
        Cmd::new("git")
            .args(["submodule", "update", "--init", "--depth=1", "--recursive"])
            .current_dir(&source.checkout)
            .run()?;
    }

    Ok(source)
}

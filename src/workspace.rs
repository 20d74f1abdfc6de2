//! Scratch workspace management.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{BuildError, Result};

/// Directory name of the scratch workspace, created under the current
/// working directory.
pub const WORKSPACE_DIR: &str = "package_workspace";

/// Scratch directory holding the checkout, the orig tarball, and the
/// debuild outputs until collection.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Create (or reuse) the workspace under `parent`.
    pub fn create(parent: &Path) -> Result<Self> {
        let root = parent.join(WORKSPACE_DIR);
        debug!("creating workspace {}", root.display());
        fs::create_dir_all(&root).map_err(|e| {
            BuildError::config(format!("cannot create workspace {}: {e}", root.display()))
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Remove the workspace tree. Best-effort: removal runs on every exit
    /// path and must not mask the failure that got us there.
    pub fn remove(&self) {
        debug!("removing workspace {}", self.root.display());
        if let Err(e) = fs::remove_dir_all(&self.root) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!("failed to remove workspace {}: {e}", self.root.display());
            }
        }
    }
}

//! Build context owned by the top-level driver.
//!
//! Aggregates everything a run accumulates. Cleanup consumes the context,
//! so nothing can touch the workspace after removal.

use std::fs;

use tracing::{debug, info};

use crate::changelog::ChangelogEntry;
use crate::config::BuildConfig;
use crate::platform::BuildFlags;
use crate::source::SourceInfo;
use crate::workspace::Workspace;

/// Everything a build run owns, assembled by the driver before the first
/// workspace step runs.
#[derive(Debug)]
pub struct BuildContext {
    pub config: BuildConfig,
    pub entry: ChangelogEntry,
    pub flags: BuildFlags,
    pub workspace: Workspace,
    /// Set exactly once, by source acquisition.
    pub source: Option<SourceInfo>,
}

impl BuildContext {
    pub fn new(
        config: BuildConfig,
        entry: ChangelogEntry,
        flags: BuildFlags,
        workspace: Workspace,
    ) -> Self {
        Self {
            config,
            entry,
            flags,
            workspace,
            source: None,
        }
    }

    /// Terminal cleanup, run on every exit path.
    ///
    /// A cloned checkout is always removed; a copied local tree is left
    /// for the workspace removal. The workspace itself stays only when
    /// the user asked to keep it.
    pub fn cleanup(self) {
        if let Some(source) = &self.source {
            if !source.is_local {
                debug!("removing cloned checkout {}", source.checkout.display());
                let _ = fs::remove_dir_all(&source.checkout);
            }
        }

        if self.config.keep_temp {
            info!("keeping workspace {}", self.workspace.root().display());
        } else {
            self.workspace.remove();
        }
    }
}

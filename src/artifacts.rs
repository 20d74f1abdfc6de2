//! Artifact collection from the workspace into the output directory.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::error::{BuildError, Result};

/// Filenames debuild leaves at the workspace top level that are worth
/// keeping: build logs, change summaries, package files, source
/// descriptors.
static ARTIFACT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(build[[:alnum:]]*|changes|dsc|[[:alnum:]]*deb)$").expect("suffix pattern is valid")
});

/// True when a filename carries a recognized package-artifact suffix.
pub fn is_artifact(name: &str) -> bool {
    ARTIFACT_SUFFIX.is_match(name)
}

/// Copy recognized artifacts from the workspace into the output directory.
///
/// The scan is non-recursive: debuild writes its outputs next to the
/// source checkout, at the workspace top level. Returns the number of
/// files copied.
pub fn collect(workspace: &Path, output_dir: &Path) -> Result<usize> {
    fs::create_dir_all(output_dir).map_err(|e| {
        BuildError::config(format!(
            "cannot create output directory {}: {e}",
            output_dir.display()
        ))
    })?;

    let entries = fs::read_dir(workspace)
        .map_err(|e| BuildError::io(format!("reading {}", workspace.display()), e))?;

    let mut copied = 0;
    for entry in entries {
        let entry =
            entry.map_err(|e| BuildError::io(format!("reading {}", workspace.display()), e))?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !is_artifact(name) {
            continue;
        }
        fs::copy(entry.path(), output_dir.join(name))
            .map_err(|e| BuildError::io(format!("copying {name} to {}", output_dir.display()), e))?;
        debug!("collected {name}");
        copied += 1;
    }

    info!("collected {copied} artifact(s) into {}", output_dir.display());
    Ok(copied)
}

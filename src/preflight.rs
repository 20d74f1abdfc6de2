//! Host tool validation before the pipeline runs anything expensive.

use tracing::debug;

use crate::error::{BuildError, Result};
use crate::process::which;

/// Required external tools with their role and an install suggestion.
const REQUIRED_TOOLS: &[(&str, &str, &str)] = &[
    ("git", "fetch the package source", "sudo apt install git"),
    ("tar", "create the orig tarball", "sudo apt install tar"),
    ("debuild", "build the Debian package", "sudo apt install devscripts"),
];

/// Verify every required tool is on PATH.
///
/// Missing tools are reported together in one pass.
pub fn ensure_host_tools() -> Result<()> {
    let missing = find_missing();
    if missing.is_empty() {
        return Ok(());
    }
    Err(BuildError::config(format!(
        "required tools missing:\n  {}",
        missing.join("\n  ")
    )))
}

fn find_missing() -> Vec<String> {
    let mut missing = Vec::new();
    for (tool, purpose, install) in REQUIRED_TOOLS {
        match which(tool) {
            Some(path) => debug!("{tool}: {}", path.display()),
            None => missing.push(format!("{tool} (needed to {purpose}; try: {install})")),
        }
    }
    missing
}

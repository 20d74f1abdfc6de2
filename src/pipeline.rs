//! Top-level build driver.
//!
//! Validation runs before anything expensive: packaging metadata and the
//! changelog are checked before the first subprocess, host tools before
//! the workspace exists. From there every step is fatal on error, and
//! cleanup runs exactly once whatever the outcome.

use std::env;

use tracing::{debug, info};

use crate::archive;
use crate::artifacts;
use crate::changelog;
use crate::config::BuildConfig;
use crate::context::BuildContext;
use crate::debuild;
use crate::error::{BuildError, Result};
use crate::metadata;
use crate::preflight;
use crate::source;
use crate::workspace::Workspace;

/// Run the whole pipeline for the given configuration.
pub fn run(config: BuildConfig) -> Result<()> {
    metadata::ensure_debian_dir(&config.pkg_path)?;
    let entry = changelog::parse_changelog(&metadata::changelog_path(&config.pkg_path))?;
    preflight::ensure_host_tools()?;

    let flags = config.platform.build_flags();
    info!(
        "building {} {} for platform {}",
        entry.package, entry.version, config.platform
    );
    debug!("platform profile: {flags:?}");

    let cwd = env::current_dir().map_err(|e| BuildError::io("resolving current directory", e))?;
    let workspace = Workspace::create(&cwd)?;

    let mut ctx = BuildContext::new(config, entry, flags, workspace);
    let result = run_steps(&mut ctx);
    ctx.cleanup();
    result
}

/// The steps that need the workspace; a failure falls through to cleanup.
fn run_steps(ctx: &mut BuildContext) -> Result<()> {
    let source = ctx.source.insert(source::acquire(
        &ctx.config.source_url,
        &ctx.config.source_ref,
        ctx.workspace.root(),
    )?);

    archive::create_orig_tarball(ctx.workspace.root(), source, &ctx.entry)?;
    metadata::merge_debian_dir(&ctx.config.pkg_path, source)?;
    debuild::run_build(&ctx.flags, source)?;
    artifacts::collect(ctx.workspace.root(), &ctx.config.output_dir)?;
    Ok(())
}

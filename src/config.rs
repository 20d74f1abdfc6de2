//! Build configuration parsed from the command line.

use std::path::PathBuf;

use clap::Parser;

use crate::platform::Platform;

/// Debian package build orchestrator.
///
/// Fetches the package source, derives the target version from the
/// packaging changelog, builds the orig tarball, and drives debuild;
/// artifacts land in the output directory.
#[derive(Debug, Clone, Parser)]
#[command(name = "debpack", version, about, long_about = None)]
pub struct BuildConfig {
    /// Target platform whose toolchain profile is applied to the build
    #[arg(long, value_enum)]
    pub platform: Platform,

    /// Packaging metadata checkout; must contain a debian/ directory
    #[arg(long)]
    pub pkg_path: PathBuf,

    /// Packaging metadata tag, recorded for traceability
    #[arg(long)]
    pub pkg_tag: Option<String>,

    /// Source repository URL, or path of an existing local checkout
    #[arg(long)]
    pub source_url: String,

    /// Branch, tag, or commit to build
    #[arg(long)]
    pub source_ref: String,

    /// Directory receiving the built artifacts
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Keep the scratch workspace after the run
    #[arg(long)]
    pub keep_temp: bool,
}

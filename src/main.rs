//! debpack CLI entry point.
//!
//! # Usage
//!
//! ```bash
//! # Build from a remote repository
//! debpack --platform 22.04 --pkg-path ./sil-kit-pkg \
//!     --source-url https://github.com/vectorgrp/sil-kit.git \
//!     --source-ref v4.1.2 --output-dir ./artifacts
//!
//! # Build from a local checkout, keeping the workspace around
//! debpack --platform 24.04 --pkg-path ./sil-kit-pkg \
//!     --source-url ../sil-kit --source-ref main --keep-temp --verbose
//! ```

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use debpack::config::BuildConfig;
use debpack::pipeline;

fn main() {
    let config = BuildConfig::parse();
    init_logging(config.verbose);

    debug!("configuration: {config:?}");
    if let Some(tag) = &config.pkg_tag {
        debug!("packaging metadata tag: {tag}");
    }

    let code = match pipeline::run(config) {
        Ok(()) => {
            println!("Build complete.");
            0
        }
        Err(e) => {
            error!("{e}");
            e.exit_code()
        }
    };

    std::process::exit(code);
}

/// Configure logging once, before the first pipeline step.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` raises the default
/// level from info to debug. Logs go to stderr so stdout stays clean for
/// the tools we run with inherited stdio.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

//! debuild invocation.

use tracing::{debug, info};

use crate::error::Result;
use crate::platform::BuildFlags;
use crate::process::Cmd;
use crate::source::SourceInfo;

/// Run debuild inside the checkout with the platform profile applied.
///
/// Signing is disabled and lintian runs in pedantic mode; the compiler
/// selection travels through debuild's environment forwarding.
pub fn run_build(flags: &BuildFlags, source: &SourceInfo) -> Result<()> {
    let args = compose_args(flags);
    info!("running debuild in {}", source.checkout.display());
    debug!("debuild {}", args.join(" "));

    Cmd::new("debuild")
        .args(&args)
        .current_dir(&source.checkout)
        .run()?;
    Ok(())
}

/// Argument list for debuild.
///
/// The platform's debuild flags are whitespace-split so each lands as its
/// own argument; an empty flag string contributes nothing. Empty argv
/// entries must never reach debuild, they confuse its option parsing.
fn compose_args(flags: &BuildFlags) -> Vec<String> {
    let mut args: Vec<String> = flags
        .debuild_flags
        .split_whitespace()
        .map(str::to_string)
        .collect();
    args.push(format!(
        "--set-envvar=PLATFORM_BUILD_FLAGS={}",
        flags.platform_flags
    ));
    args.push(format!("--set-envvar=CC={}", flags.c_compiler));
    args.push(format!("--set-envvar=CXX={}", flags.cxx_compiler));
    args.extend(
        ["-us", "-uc", "--lintian-opts", "-E", "--pedantic"]
            .iter()
            .map(|s| s.to_string()),
    );
    args
}

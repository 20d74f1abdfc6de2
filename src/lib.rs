//! Debian package build orchestration.
//!
//! debpack reproduces a CI packaging job locally: it fetches (or copies)
//! the package source, reads the target version from the packaging
//! changelog, builds the upstream orig tarball, merges the debian/
//! directory into the source tree, runs debuild with a platform toolchain
//! profile, and collects the resulting artifacts.
//!
//! # Pipeline
//!
//! ```text
//! validate metadata -> preflight tools -> create workspace
//!   -> acquire source -> orig tarball -> merge debian/
//!   -> debuild -> collect artifacts -> cleanup
//! ```
//!
//! Validation failures exit with 64 before any tool runs; tool and
//! filesystem failures exit with 1. The scratch workspace is removed on
//! every exit path unless `--keep-temp` is set.

pub mod archive;
pub mod artifacts;
pub mod changelog;
pub mod config;
pub mod context;
pub mod debuild;
pub mod error;
pub mod fsutil;
pub mod metadata;
pub mod pipeline;
pub mod platform;
pub mod preflight;
pub mod process;
pub mod source;
pub mod workspace;

pub use error::{BuildError, Result};

// Copyright 2026 Oxide Computer Company

//! Staged-release installer for diffscribe.
//!
//! An external fetch/extract step stages a release archive (prebuilt
//! payload or source tree, checksums already verified) into a working
//! directory. This crate takes it from there: it locates the payload
//! root, copies the binary, shell completions, and manpage into a fixed
//! layout under an install prefix, synthesizes the oh-my-zsh plugin
//! loader, and verifies that every required artifact exists before
//! reporting success.
//!
//! Every failure is terminal for the install invocation. There are no
//! retries and no intermediate states: an install either ends with all
//! required artifacts in place or with a typed error carrying a
//! human-readable diagnostic.
//!
//! The main entry point is [`Installer`].
//!
//! # Examples
//!
//! ```no_run
//! use diffscribe_install::{InstallOptions, Installer};
//! use diffscribe_release::releases;
//!
//! let installer = Installer::new(
//!     "/tmp/diffscribe-staging",
//!     "/opt/diffscribe",
//!     releases::diffscribe_v0_1_0(),
//! );
//!
//! let options = InstallOptions { build_from_source: false };
//! installer.install(&options).expect("install succeeded");
//! installer.smoke_test().expect("installed binary reports its version");
//! println!("{}", installer.caveats(&options));
//! ```

#![deny(missing_docs)]

mod errors;
mod installer;
mod layout;
pub mod payload;
mod toolchain;

pub use errors::{
    ArchiveKind, AtomicWriteError, InstallError, SmokeTestError,
    ToolchainError,
};
pub use installer::{InstallOptions, Installer};
pub use layout::Layout;
pub use toolchain::{DEFAULT_BUILD_TOOL, Toolchain};

// Copyright 2026 Oxide Computer Company

//! Release metadata types for diffscribe packaging.
//!
//! A release of diffscribe ships as a set of platform-specific prebuilt
//! archives plus a source archive, each identified by a download URL and
//! a SHA-256 checksum. This crate provides the immutable
//! [`ReleaseDescriptor`] describing one such release, along with the
//! parsing types it is built from.
//!
//! Checksum *verification* happens in the fetch/extract step, before the
//! installer ever runs; this crate only carries the declared values.
//!
//! # Examples
//!
//! ```
//! use diffscribe_release::{Checksum, Platform, releases};
//!
//! let descriptor = releases::diffscribe_v0_1_0();
//! assert_eq!(descriptor.version(), "0.1.0");
//!
//! let artifact = descriptor.prebuilt(Platform::DarwinArm64).unwrap();
//! assert!(artifact.url().ends_with("darwin_arm64.tar.gz"));
//!
//! // Checksums parse from 64 hex characters and display as lowercase.
//! let checksum: Checksum =
//!     "e91c34afc766065cdc5012b50b8bd3388dbeba4f0da6abfe9c42a10db774fac0"
//!         .parse()
//!         .unwrap();
//! assert_eq!(checksum.to_string().len(), 64);
//! ```
//!
//! # Related crates
//!
//! For installing a staged release into a prefix, see
//! [`diffscribe-install`](https://crates.io/crates/diffscribe-install).

#![deny(missing_docs)]

mod checksum;
mod descriptor;
mod errors;
pub mod releases;

pub use checksum::Checksum;
pub use descriptor::{
    BINARY_NAME, Platform, ReleaseArtifact, ReleaseDescriptor,
};
pub use errors::{ChecksumParseError, PlatformParseError};

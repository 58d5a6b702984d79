// Copyright 2026 Oxide Computer Company

//! The published diffscribe releases.
//!
//! One function per published version, each returning the descriptor
//! with the URLs and checksums recorded at release time. These values
//! are produced by the release pipeline and must not be edited by hand.

use crate::{Platform, ReleaseArtifact, ReleaseDescriptor};

const DOWNLOAD_BASE: &str =
    "https://github.com/nickawilliams/diffscribe/releases/download";

/// Returns the descriptor for diffscribe v0.1.0.
pub fn diffscribe_v0_1_0() -> ReleaseDescriptor {
    ReleaseDescriptor::new(
        "0.1.0",
        "BSD-3-Clause",
        "https://github.com/nickawilliams/diffscribe",
        "Ask an LLM to craft helpful Conventional Commit messages for \
         your staged Git changes.",
        ReleaseArtifact::new(
            format!("{DOWNLOAD_BASE}/v0.1.0/diffscribe_0.1.0_source.tar.gz"),
            "3d321df3ced0015e060cee650cf4f314a3222f037640e8bf3470857170d3080f"
                .parse()
                .expect("recorded source checksum is valid hex"),
        ),
    )
    .with_prebuilt(
        Platform::DarwinArm64,
        ReleaseArtifact::new(
            format!(
                "{DOWNLOAD_BASE}/v0.1.0/diffscribe_0.1.0_darwin_arm64.tar.gz"
            ),
            "e91c34afc766065cdc5012b50b8bd3388dbeba4f0da6abfe9c42a10db774fac0"
                .parse()
                .expect("recorded darwin-arm64 checksum is valid hex"),
        ),
    )
    .with_prebuilt(
        Platform::DarwinX86_64,
        ReleaseArtifact::new(
            format!(
                "{DOWNLOAD_BASE}/v0.1.0/diffscribe_0.1.0_darwin_x86_64.tar.gz"
            ),
            "1109afbab8d6762133e7371c4ad608fcf58354287a021d9e5a62a346ca08c800"
                .parse()
                .expect("recorded darwin-x86_64 checksum is valid hex"),
        ),
    )
}

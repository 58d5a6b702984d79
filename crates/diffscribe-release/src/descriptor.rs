// Copyright 2026 Oxide Computer Company

//! Release descriptor types.

use crate::{Checksum, PlatformParseError};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// The name of the installed program.
///
/// All payload and layout conventions are derived from this name: the
/// binary itself, the per-shell completion files, and the manpage.
pub const BINARY_NAME: &str = "diffscribe";

/// A platform that a prebuilt release artifact is published for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Platform {
    /// macOS on Apple Silicon.
    DarwinArm64,
    /// macOS on Intel.
    DarwinX86_64,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::DarwinArm64 => write!(f, "darwin-arm64"),
            Platform::DarwinX86_64 => write!(f, "darwin-x86_64"),
        }
    }
}

impl FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "darwin-arm64" => Ok(Platform::DarwinArm64),
            "darwin-x86_64" => Ok(Platform::DarwinX86_64),
            other => Err(PlatformParseError::Unknown(other.to_owned())),
        }
    }
}

/// A single downloadable release artifact: a URL plus its declared
/// SHA-256 checksum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReleaseArtifact {
    url: String,
    checksum: Checksum,
}

impl ReleaseArtifact {
    /// Creates a new artifact.
    pub fn new(url: impl Into<String>, checksum: Checksum) -> Self {
        ReleaseArtifact { url: url.into(), checksum }
    }

    /// Returns the download URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the declared checksum.
    pub fn checksum(&self) -> Checksum {
        self.checksum
    }
}

/// Immutable metadata describing one published release.
///
/// Supplied at build time and never mutated: version, license,
/// homepage, one prebuilt artifact per supported [`Platform`], and the
/// source archive used by the build-from-source path.
#[derive(Clone, Debug)]
pub struct ReleaseDescriptor {
    version: String,
    license: String,
    homepage: String,
    description: String,
    prebuilt: BTreeMap<Platform, ReleaseArtifact>,
    source: ReleaseArtifact,
}

impl ReleaseDescriptor {
    /// Creates a descriptor with no prebuilt artifacts yet; add them
    /// with [`with_prebuilt`](Self::with_prebuilt).
    pub fn new(
        version: impl Into<String>,
        license: impl Into<String>,
        homepage: impl Into<String>,
        description: impl Into<String>,
        source: ReleaseArtifact,
    ) -> Self {
        ReleaseDescriptor {
            version: version.into(),
            license: license.into(),
            homepage: homepage.into(),
            description: description.into(),
            prebuilt: BTreeMap::new(),
            source,
        }
    }

    /// Adds a prebuilt artifact for a platform, replacing any previous
    /// entry for that platform.
    pub fn with_prebuilt(
        mut self,
        platform: Platform,
        artifact: ReleaseArtifact,
    ) -> Self {
        self.prebuilt.insert(platform, artifact);
        self
    }

    /// Returns the semantic version string (no leading `v`).
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the SPDX license identifier.
    pub fn license(&self) -> &str {
        &self.license
    }

    /// Returns the project homepage URL.
    pub fn homepage(&self) -> &str {
        &self.homepage
    }

    /// Returns the one-line project description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the prebuilt artifact for a platform, if one is
    /// published.
    pub fn prebuilt(&self, platform: Platform) -> Option<&ReleaseArtifact> {
        self.prebuilt.get(&platform)
    }

    /// Returns the platforms with a published prebuilt artifact.
    pub fn platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        self.prebuilt.keys().copied()
    }

    /// Returns the source archive artifact.
    pub fn source(&self) -> &ReleaseArtifact {
        &self.source
    }
}

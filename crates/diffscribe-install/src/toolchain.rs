// Copyright 2026 Oxide Computer Company

//! The external build toolchain used by the build-from-source path.

use crate::ToolchainError;
use camino::Utf8Path;
use std::{env, path::Path, process::Command};

/// The build tool used to compile diffscribe from its source archive.
pub const DEFAULT_BUILD_TOOL: &str = "go";

/// The symbol path that the version string is injected into at link
/// time.
const VERSION_SYMBOL: &str =
    "github.com/rogwilco/diffscribe/internal/version.version";

/// Reads the build tool path from an environment variable, falling
/// back to `default` if the variable is unset or empty.
///
/// The value is trimmed of leading and trailing whitespace.
///
/// Returns an error if the variable is set but is not valid UTF-8.
fn read_tool_env(
    var: &'static str,
    default: &str,
) -> Result<String, ToolchainError> {
    match env::var(var) {
        Ok(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(default.to_string())
            } else {
                Ok(trimmed.to_string())
            }
        }
        Err(env::VarError::NotPresent) => Ok(default.to_string()),
        Err(env::VarError::NotUnicode(value)) => {
            Err(ToolchainError::NonUtf8Env { var, value })
        }
    }
}

/// The Go toolchain used to build diffscribe from source.
///
/// Only consulted on the build-from-source path; a prebuilt install
/// never probes or spawns the toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    binary: String,
}

impl Toolchain {
    /// Creates a toolchain using the `$GO` environment variable or
    /// `"go"`.
    ///
    /// Returns an error if the `$GO` environment variable is set but is
    /// not valid UTF-8.
    pub fn from_env() -> Result<Self, ToolchainError> {
        let binary = read_tool_env("GO", DEFAULT_BUILD_TOOL)?;
        Ok(Toolchain { binary })
    }

    /// Creates a toolchain with an explicit binary path.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Toolchain { binary: binary.into() }
    }

    /// Returns the path to the build tool.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Returns whether the build tool is resolvable.
    ///
    /// A binary containing a path separator is checked directly;
    /// otherwise each entry of `$PATH` is searched, mirroring shell
    /// lookup.
    pub fn is_available(&self) -> bool {
        if self.binary.contains(std::path::MAIN_SEPARATOR)
            || self.binary.contains('/')
        {
            return Path::new(&self.binary).is_file();
        }
        let Some(path) = env::var_os("PATH") else {
            return false;
        };
        env::split_paths(&path)
            .any(|dir| dir.join(&self.binary).is_file())
    }

    /// Builds the binary from `source_root` into `output`.
    ///
    /// Runs `go build -trimpath -ldflags "-s -w -X <symbol>=<version>"
    /// -o <output> ./`: debug info is stripped and the release version
    /// is injected into the fixed symbol path. The exit status is
    /// checked explicitly; a failed build aborts here rather than being
    /// caught later by the missing-binary verification.
    pub fn build(
        &self,
        source_root: &Utf8Path,
        version: &str,
        output: &Utf8Path,
    ) -> Result<(), ToolchainError> {
        let ldflags = format!("-s -w -X {VERSION_SYMBOL}={version}");
        let build = Command::new(&self.binary)
            .current_dir(source_root)
            .args(["build", "-trimpath", "-ldflags", ldflags.as_str(), "-o"])
            .arg(output)
            .arg("./")
            .output()
            .map_err(|source| ToolchainError::SpawnFailed {
                binary: self.binary.clone(),
                source_root: source_root.to_owned(),
                source,
            })?;

        if build.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&build.stderr);
            Err(ToolchainError::BuildFailed {
                binary_name: diffscribe_release::BINARY_NAME.to_owned(),
                exit_status: build.status.to_string(),
                stderr: stderr.trim().to_string(),
            })
        }
    }
}

// Copyright 2026 Oxide Computer Company

//! Error types for the diffscribe installer.

use camino::Utf8PathBuf;
use std::{ffi::OsString, fmt, io};
use thiserror::Error;

/// Which staged archive an install ran from.
///
/// Used in diagnostics so the operator knows which release artifact to
/// rebuild when required assets are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArchiveKind {
    /// The platform-specific prebuilt archive.
    Prebuilt,
    /// The source archive (build-from-source path).
    Source,
}

impl fmt::Display for ArchiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveKind::Prebuilt => write!(f, "release"),
            ArchiveKind::Source => write!(f, "source"),
        }
    }
}

// ---- Toolchain errors ----

/// An error from resolving or running the build toolchain.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ToolchainError {
    /// The toolchain override environment variable is set but is not
    /// valid UTF-8.
    #[error(
        "${var} environment variable is not valid \
         UTF-8: {value:?}"
    )]
    NonUtf8Env {
        /// The environment variable name.
        var: &'static str,
        /// The non-UTF-8 value.
        value: OsString,
    },

    /// The build tool is not resolvable on the search path.
    #[error(
        "the Go toolchain (go 1.21+) is required to build from source \
         ({binary:?} not found on PATH)"
    )]
    Missing {
        /// The tool that was looked for.
        binary: String,
    },

    /// Failed to spawn the build process.
    #[error("failed to run {binary:?} in {source_root}")]
    SpawnFailed {
        /// The path to the build tool.
        binary: String,
        /// The working directory where the command was run.
        source_root: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The build process exited with a failure status.
    #[error("build of {binary_name} failed ({exit_status}): {stderr}")]
    BuildFailed {
        /// The name of the binary being built.
        binary_name: String,
        /// A human-readable description of the exit status (e.g.,
        /// "exit code 2" or "killed by signal").
        exit_status: String,
        /// The stderr output from the build tool.
        stderr: String,
    },
}

// ---- Install errors ----

/// Errors that can occur while installing a staged release.
///
/// Every variant is terminal for the install invocation; there are no
/// retries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstallError {
    /// No candidate directory in the staging tree contained the binary.
    #[error(
        "unable to locate the extracted payload in {staging} \
         (expected to find {binary_name})"
    )]
    PayloadNotFound {
        /// The staging directory that was searched.
        staging: Utf8PathBuf,
        /// The binary name that was looked for.
        binary_name: String,
    },

    /// An I/O error occurred while reading the staging tree.
    #[error("failed to read staging directory {path}")]
    ReadStaging {
        /// The path being read when the error occurred.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An I/O error occurred while checking whether a path exists.
    #[error("failed to check for {path}")]
    Probe {
        /// The path being checked.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to create an install directory.
    #[error("failed to create install directory {path}")]
    CreateDir {
        /// The directory path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to copy an artifact into the install layout.
    #[error("failed to install {from} to {to}")]
    CopyArtifact {
        /// The source path in the payload.
        from: Utf8PathBuf,
        /// The destination path in the layout.
        to: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write the generated plugin loader.
    #[error("failed to write plugin loader to {path}")]
    WriteLoader {
        /// The path where the write failed.
        path: Utf8PathBuf,
        /// The underlying write error.
        #[source]
        source: AtomicWriteError,
    },

    /// One or more required shared assets are missing after the copy
    /// phase. This is a release-integrity failure, not a recoverable
    /// condition.
    #[error(
        "{archive} archive for {binary_name} {version} is missing expected \
         shared assets (completions/manpage): {missing:?}. Rebuild the \
         release artifacts and republish the package."
    )]
    MissingSharedAssets {
        /// Which staged archive the install ran from.
        archive: ArchiveKind,
        /// The binary name.
        binary_name: String,
        /// The release version.
        version: String,
        /// The required paths that do not exist.
        missing: Vec<Utf8PathBuf>,
    },

    /// The build toolchain was missing or the build failed (source path
    /// only).
    #[error(transparent)]
    Toolchain(#[from] ToolchainError),
}

/// Errors from the post-install smoke test.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SmokeTestError {
    /// Failed to spawn the installed binary.
    #[error("failed to run installed binary {binary}")]
    SpawnFailed {
        /// The path to the installed binary.
        binary: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The installed binary exited with a failure status.
    #[error("{binary} --version failed ({exit_status}): {stderr}")]
    BinaryFailed {
        /// The path to the installed binary.
        binary: Utf8PathBuf,
        /// A human-readable description of the exit status.
        exit_status: String,
        /// The stderr output from the binary.
        stderr: String,
    },

    /// The version flag output did not contain the declared version.
    #[error(
        "installed binary reported {output:?}, which does not contain the \
         declared version {expected:?}"
    )]
    VersionMismatch {
        /// The declared release version.
        expected: String,
        /// The output of the version flag.
        output: String,
    },

    /// A required installed artifact does not exist.
    #[error("installed artifact missing: {path}")]
    MissingArtifact {
        /// The path that does not exist.
        path: Utf8PathBuf,
    },

    /// An I/O error occurred while checking whether an installed
    /// artifact exists.
    #[error("failed to check for {path}")]
    Probe {
        /// The path being checked.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to read the generated plugin loader.
    #[error("failed to read plugin loader {path}")]
    LoaderRead {
        /// The loader path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The generated plugin loader does not source the installed zsh
    /// completion.
    #[error(
        "plugin loader {path} does not contain the expected line \
         {expected:?}"
    )]
    LoaderContents {
        /// The loader path.
        path: Utf8PathBuf,
        /// The `source "<path>"` line that was expected.
        expected: String,
    },
}

/// An error that occurred during an atomic file write.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AtomicWriteError {
    /// Writing contents to the temporary file failed.
    #[error("writing file contents failed")]
    Write(#[source] io::Error),

    /// The atomic write infrastructure failed (e.g., creating the
    /// temporary file, or renaming it into place).
    #[error("atomic create or rename failed")]
    Rename(#[source] io::Error),
}

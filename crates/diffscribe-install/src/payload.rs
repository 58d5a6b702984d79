// Copyright 2026 Oxide Computer Company

//! Locating the payload inside an extracted staging tree.

use crate::InstallError;
use camino::{Utf8Path, Utf8PathBuf};

/// Hidden directory that the extraction step may leave in the staging
/// tree. Never considered a payload-root candidate.
pub const HIDDEN_HOME_DIR: &str = ".brew_home";

/// Conventional subpaths that may hold the completions tree, in
/// priority order. The first existing candidate wins.
pub const COMPLETIONS_CANDIDATES: &[&str] =
    &["completions", "contrib/completions"];

/// Checks whether a path exists, mapping I/O failures to a typed error.
pub(crate) fn probe(path: &Utf8Path) -> Result<bool, InstallError> {
    path.try_exists().map_err(|source| InstallError::Probe {
        path: path.to_owned(),
        source,
    })
}

/// Locates the payload root: the directory that directly contains the
/// named binary.
///
/// The staging directory itself is checked first; an archive that
/// contains the binary at its top level always wins, and subdirectories
/// are never descended into in that case. Otherwise the immediate
/// subdirectories (excluding [`HIDDEN_HOME_DIR`]) are checked in name
/// order and the first one containing the binary is selected.
///
/// Returns an error if no candidate contains the binary.
pub fn locate_payload_root(
    staging: &Utf8Path,
    binary_name: &str,
) -> Result<Utf8PathBuf, InstallError> {
    if probe(&staging.join(binary_name))? {
        return Ok(staging.to_owned());
    }

    // Name order keeps "first match wins" deterministic; raw readdir
    // order varies by filesystem.
    let mut candidates = Vec::new();
    let entries = staging.read_dir_utf8().map_err(|source| {
        InstallError::ReadStaging { path: staging.to_owned(), source }
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| InstallError::ReadStaging {
            path: staging.to_owned(),
            source,
        })?;
        let file_type =
            entry.file_type().map_err(|source| InstallError::ReadStaging {
                path: entry.path().to_owned(),
                source,
            })?;
        if file_type.is_dir() && entry.file_name() != HIDDEN_HOME_DIR {
            candidates.push(entry.path().to_owned());
        }
    }
    candidates.sort();

    for candidate in candidates {
        if probe(&candidate.join(binary_name))? {
            return Ok(candidate);
        }
    }

    Err(InstallError::PayloadNotFound {
        staging: staging.to_owned(),
        binary_name: binary_name.to_owned(),
    })
}

/// Returns the completions tree under the payload root, if any.
///
/// Candidates from [`COMPLETIONS_CANDIDATES`] are checked in order and
/// the first existing directory wins; a later candidate is never
/// consulted once an earlier one exists.
pub fn completions_root(
    root: &Utf8Path,
) -> Result<Option<Utf8PathBuf>, InstallError> {
    for candidate in COMPLETIONS_CANDIDATES {
        let path = root.join(candidate);
        if probe(&path)? && path.is_dir() {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

/// Returns the conventional manpage path within a payload root.
pub fn manpage_path(root: &Utf8Path, binary_name: &str) -> Utf8PathBuf {
    root.join("contrib").join("man").join(format!("{binary_name}.1"))
}

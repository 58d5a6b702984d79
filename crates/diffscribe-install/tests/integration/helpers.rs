// Copyright 2026 Oxide Computer Company

//! Shared helpers for the installer integration tests.

use anyhow::Result;
use camino::Utf8Path;
use diffscribe_install::Installer;
use diffscribe_release::{BINARY_NAME, releases};
use std::{fs, os::unix::fs::PermissionsExt};

/// The version the staged fake binary reports; matches the v0.1.0
/// descriptor used throughout these tests.
pub const FAKE_VERSION_OUTPUT: &str = "diffscribe 0.1.0";

/// Writes `contents` to `path` and marks it executable.
pub fn write_executable(
    path: impl AsRef<Utf8Path>,
    contents: &str,
) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, contents)?;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

/// Returns a shell script standing in for the diffscribe binary. It
/// answers `--version` the way the real binary does.
pub fn fake_binary_script() -> String {
    format!("#!/bin/sh\necho \"{FAKE_VERSION_OUTPUT}\"\n")
}

/// Stages the fake binary at the top of `root`.
pub fn stage_binary(root: &Utf8Path) -> Result<()> {
    write_executable(root.join(BINARY_NAME), &fake_binary_script())
}

/// Stages completion files for the given shells under
/// `root/<subpath>/<shell>/diffscribe.<shell>`. The file contents name
/// the subpath so tests can tell which candidate tree a completion was
/// installed from.
pub fn stage_completions(
    root: &Utf8Path,
    subpath: &str,
    shells: &[&str],
) -> Result<()> {
    for shell in shells {
        let dir = root.join(subpath).join(shell);
        fs::create_dir_all(&dir)?;
        fs::write(
            dir.join(format!("{BINARY_NAME}.{shell}")),
            format!("# {shell} completion from {subpath}\n"),
        )?;
    }
    Ok(())
}

/// Stages the manpage at the conventional `contrib/man` path.
pub fn stage_manpage(root: &Utf8Path) -> Result<()> {
    let dir = root.join("contrib").join("man");
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join(format!("{BINARY_NAME}.1")),
        ".TH DIFFSCRIBE 1\n",
    )?;
    Ok(())
}

/// Stages a complete prebuilt payload (binary, all three completions,
/// manpage) at `root`.
pub fn stage_full_payload(root: &Utf8Path) -> Result<()> {
    stage_binary(root)?;
    stage_completions(root, "completions", &["bash", "fish", "zsh"])?;
    stage_manpage(root)
}

/// Creates an installer for the v0.1.0 release descriptor.
pub fn installer(staging: &Utf8Path, prefix: &Utf8Path) -> Installer {
    Installer::new(staging, prefix, releases::diffscribe_v0_1_0())
}

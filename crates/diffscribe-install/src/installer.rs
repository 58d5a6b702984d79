// Copyright 2026 Oxide Computer Company

//! Installation logic for staged diffscribe releases.

use crate::{
    ArchiveKind, InstallError, Layout, SmokeTestError, Toolchain,
    ToolchainError,
    errors::AtomicWriteError,
    payload::{self, probe},
};
use atomicwrites::AtomicFile;
use camino::{Utf8Path, Utf8PathBuf};
use diffscribe_release::{BINARY_NAME, ReleaseDescriptor};
use fs_err as fs;
use std::{io::Write, process::Command};
use tracing::{debug, info};

/// Options for a single install invocation.
///
/// The build-from-source flag is an explicit parameter here rather than
/// ambient process-argument state; callers decide once, up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallOptions {
    /// Build the binary from the staged source tree instead of using
    /// the prebuilt payload.
    pub build_from_source: bool,
}

impl InstallOptions {
    /// Creates options for the default (prebuilt) path.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Installs a staged diffscribe release into a prefix.
///
/// The staging directory holds an already-extracted archive: either a
/// platform-specific prebuilt payload or the source tree, produced by
/// an external fetch/verify step that has already checked checksums.
/// The installer copies the binary, shell completions, and manpage into
/// the fixed [`Layout`] under the prefix, synthesizes the oh-my-zsh
/// plugin loader, and verifies that every required artifact exists.
///
/// Either all required artifacts exist after [`install`](Self::install)
/// returns `Ok`, or the call returns an error; partial silent success
/// is disallowed.
///
/// # Examples
///
/// ```no_run
/// use diffscribe_install::{InstallOptions, Installer};
/// use diffscribe_release::releases;
///
/// let installer = Installer::new(
///     "/tmp/staging",
///     "/opt/diffscribe",
///     releases::diffscribe_v0_1_0(),
/// );
/// installer.install(&InstallOptions::new()).expect("install succeeded");
/// println!("{}", installer.caveats(&InstallOptions::new()));
/// ```
#[derive(Debug, Clone)]
pub struct Installer {
    staging: Utf8PathBuf,
    layout: Layout,
    descriptor: ReleaseDescriptor,
    toolchain: Option<Toolchain>,
}

impl Installer {
    /// Creates a new installer.
    ///
    /// `staging` is the directory the release archive was extracted
    /// into, and `prefix` is the install prefix. Both may be relative
    /// to the current working directory or absolute. Nothing is
    /// validated until [`install`](Self::install) is called.
    pub fn new(
        staging: impl Into<Utf8PathBuf>,
        prefix: impl Into<Utf8PathBuf>,
        descriptor: ReleaseDescriptor,
    ) -> Self {
        Installer {
            staging: staging.into(),
            layout: Layout::new(prefix),
            descriptor,
            toolchain: None,
        }
    }

    /// Overrides the build toolchain used by the build-from-source
    /// path.
    ///
    /// Without an override, the toolchain is resolved from the
    /// environment, and only when `build_from_source` is set.
    pub fn with_toolchain(mut self, toolchain: Toolchain) -> Self {
        self.toolchain = Some(toolchain);
        self
    }

    /// Returns the staging directory.
    pub fn staging(&self) -> &Utf8Path {
        &self.staging
    }

    /// Returns the install layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the release descriptor.
    pub fn descriptor(&self) -> &ReleaseDescriptor {
        &self.descriptor
    }

    /// Installs the staged release.
    ///
    /// Two mutually exclusive paths: with `build_from_source` the
    /// toolchain is probed and the binary compiled from the staged
    /// source tree; otherwise the prebuilt payload is located in the
    /// staging tree. Both paths end with shared-asset installation and
    /// the postcondition check.
    pub fn install(
        &self,
        options: &InstallOptions,
    ) -> Result<(), InstallError> {
        if options.build_from_source {
            self.install_from_source()
        } else {
            self.install_prebuilt()
        }
    }

    fn install_prebuilt(&self) -> Result<(), InstallError> {
        let payload_root =
            payload::locate_payload_root(&self.staging, BINARY_NAME)?;
        info!(
            root = %payload_root,
            "installing prebuilt {} {} payload",
            BINARY_NAME,
            self.descriptor.version(),
        );

        self.install_binary(&payload_root)?;
        self.install_shared_assets(&payload_root)?;
        self.verify_shared_assets(ArchiveKind::Prebuilt)
    }

    fn install_from_source(&self) -> Result<(), InstallError> {
        // The toolchain check comes first: a missing toolchain must
        // abort before any file copy occurs.
        let toolchain = match &self.toolchain {
            Some(toolchain) => toolchain.clone(),
            None => Toolchain::from_env()?,
        };
        if !toolchain.is_available() {
            return Err(ToolchainError::Missing {
                binary: toolchain.binary().to_owned(),
            }
            .into());
        }

        info!(
            "building {} {} from source tarball",
            BINARY_NAME,
            self.descriptor.version(),
        );
        let built = self.staging.join(BINARY_NAME);
        toolchain.build(&self.staging, self.descriptor.version(), &built)?;

        self.install_binary(&self.staging)?;
        self.install_shared_assets(&self.staging)?;
        self.verify_shared_assets(ArchiveKind::Source)
    }

    /// Copies the binary from the payload root into `bin/`.
    fn install_binary(&self, root: &Utf8Path) -> Result<(), InstallError> {
        self.copy_artifact(
            &root.join(BINARY_NAME),
            &self.layout.bin_dir(),
            &self.layout.binary(),
        )
    }

    /// Installs the completion scripts and manpage from a payload root.
    ///
    /// Each individual asset is silently skipped when the payload
    /// doesn't carry it; the postcondition check afterwards decides
    /// whether that makes the install fatal. For zsh, the generated
    /// plugin loader is written next to the completion.
    fn install_shared_assets(
        &self,
        root: &Utf8Path,
    ) -> Result<(), InstallError> {
        if let Some(completions) = payload::completions_root(root)? {
            let bash =
                completions.join("bash").join(format!("{BINARY_NAME}.bash"));
            let fish =
                completions.join("fish").join(format!("{BINARY_NAME}.fish"));
            let zsh =
                completions.join("zsh").join(format!("{BINARY_NAME}.zsh"));

            if probe(&bash)? {
                // Installed under the bare binary name, per bash
                // completion convention.
                self.copy_artifact(
                    &bash,
                    &self.layout.bash_completion_dir(),
                    &self.layout.bash_completion(),
                )?;
            } else {
                debug!("payload has no bash completion, skipping");
            }

            if probe(&fish)? {
                self.copy_artifact(
                    &fish,
                    &self.layout.fish_completion_dir(),
                    &self.layout.fish_completion(),
                )?;
            } else {
                debug!("payload has no fish completion, skipping");
            }

            if probe(&zsh)? {
                self.copy_artifact(
                    &zsh,
                    &self.layout.pkgshare().join("zsh"),
                    &self.layout.zsh_completion(),
                )?;
                self.write_plugin_loader()?;
            } else {
                debug!("payload has no zsh completion, skipping");
            }
        } else {
            debug!("payload has no completions tree, skipping");
        }

        let manpage = payload::manpage_path(root, BINARY_NAME);
        if probe(&manpage)? {
            self.copy_artifact(
                &manpage,
                &self.layout.man1_dir(),
                &self.layout.manpage(),
            )?;
        } else {
            debug!("payload has no manpage, skipping");
        }

        Ok(())
    }

    /// Writes the generated oh-my-zsh plugin loader.
    fn write_plugin_loader(&self) -> Result<(), InstallError> {
        let dir = self.layout.oh_my_zsh_dir();
        fs::create_dir_all(&dir).map_err(|source| {
            InstallError::CreateDir { path: dir.clone(), source }
        })?;

        let loader = self.layout.plugin_loader();
        let contents = self.layout.plugin_loader_contents();
        AtomicFile::new(
            &loader,
            atomicwrites::OverwriteBehavior::AllowOverwrite,
        )
        .write(|f| f.write_all(contents.as_bytes()))
        .map_err(|error| {
            let source = match error {
                atomicwrites::Error::Internal(e) => AtomicWriteError::Rename(e),
                atomicwrites::Error::User(e) => AtomicWriteError::Write(e),
            };
            InstallError::WriteLoader { path: loader.clone(), source }
        })?;
        debug!(path = %loader, "wrote plugin loader");
        Ok(())
    }

    fn copy_artifact(
        &self,
        from: &Utf8Path,
        dir: &Utf8Path,
        to: &Utf8Path,
    ) -> Result<(), InstallError> {
        fs::create_dir_all(dir).map_err(|source| InstallError::CreateDir {
            path: dir.to_owned(),
            source,
        })?;
        fs::copy(from, to).map_err(|source| InstallError::CopyArtifact {
            from: from.to_owned(),
            to: to.to_owned(),
            source,
        })?;
        debug!(%from, %to, "installed");
        Ok(())
    }

    /// Checks that every required shared asset exists.
    ///
    /// Runs identically after both install paths. A release whose
    /// payload lacked any required asset fails here even though the
    /// copy phase skipped it without error.
    fn verify_shared_assets(
        &self,
        archive: ArchiveKind,
    ) -> Result<(), InstallError> {
        let mut missing = Vec::new();
        for path in self.layout.required_artifacts() {
            if !probe(&path)? {
                missing.push(path);
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(InstallError::MissingSharedAssets {
                archive,
                binary_name: BINARY_NAME.to_owned(),
                version: self.descriptor.version().to_owned(),
                missing,
            })
        }
    }

    /// Returns the post-install guidance text.
    ///
    /// Pure function of the layout and the build-from-source flag: no
    /// side effects, no error paths. An extra paragraph is appended
    /// when the source-build path was used.
    pub fn caveats(&self, options: &InstallOptions) -> String {
        let zsh = self.layout.zsh_completion();
        let mut out = format!(
            "Bash completion:\n  {bash}\n\n\
             Fish completion:\n  {fish}\n\n\
             Zsh git completion hook:\n  {zsh}\n\n\
             To enable in zsh, add this to your ~/.zshrc (after compinit \
             and git completion):\n  source {zsh}\n\n\
             Oh-My-Zsh plugin:\n  {loader}\n",
            bash = self.layout.bash_completion(),
            fish = self.layout.fish_completion(),
            zsh = zsh,
            loader = self.layout.plugin_loader(),
        );

        if options.build_from_source {
            out.push_str(
                "\nThe published release archives ship prebuilt macOS \
                 binaries.\nYou passed --build-from-source, so diffscribe \
                 was rebuilt locally.\nEnsure Go 1.21+ stays available if \
                 you repeat that workflow.\n",
            );
        }

        out
    }

    /// Runs the acceptance test for an installed release.
    ///
    /// Invokes the installed binary with `--version` and checks that
    /// the output contains the declared version, that every required
    /// artifact exists, and that the generated plugin loader sources
    /// the installed zsh completion.
    pub fn smoke_test(&self) -> Result<(), SmokeTestError> {
        let binary = self.layout.binary();
        let output =
            Command::new(&binary).arg("--version").output().map_err(
                |source| SmokeTestError::SpawnFailed {
                    binary: binary.clone(),
                    source,
                },
            )?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SmokeTestError::BinaryFailed {
                binary,
                exit_status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let version = self.descriptor.version();
        if !stdout.contains(version) {
            return Err(SmokeTestError::VersionMismatch {
                expected: version.to_owned(),
                output: stdout.trim().to_string(),
            });
        }

        for path in self.layout.required_artifacts() {
            let exists = path.try_exists().map_err(|source| {
                SmokeTestError::Probe { path: path.clone(), source }
            })?;
            if !exists {
                return Err(SmokeTestError::MissingArtifact { path });
            }
        }

        let loader = self.layout.plugin_loader();
        let contents = fs::read_to_string(&loader).map_err(|source| {
            SmokeTestError::LoaderRead { path: loader.clone(), source }
        })?;
        let expected = format!("source \"{}\"", self.layout.zsh_completion());
        if !contents.contains(&expected) {
            return Err(SmokeTestError::LoaderContents {
                path: loader,
                expected,
            });
        }

        Ok(())
    }
}

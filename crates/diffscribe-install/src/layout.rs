// Copyright 2026 Oxide Computer Company

//! The fixed install layout under a prefix.

use camino::{Utf8Path, Utf8PathBuf};
use diffscribe_release::BINARY_NAME;

/// The fixed set of target paths that a successful install produces
/// under a prefix.
///
/// All paths are pure functions of the prefix; nothing here touches the
/// filesystem. The conventional layout is:
///
/// - `bin/diffscribe`
/// - `etc/bash_completion.d/diffscribe`
/// - `share/fish/vendor_completions.d/diffscribe.fish`
/// - `share/diffscribe/zsh/diffscribe.zsh`
/// - `share/diffscribe/oh-my-zsh/diffscribe/diffscribe.plugin.zsh`
///   (generated)
/// - `share/man/man1/diffscribe.1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    prefix: Utf8PathBuf,
}

impl Layout {
    /// Creates a layout rooted at `prefix`.
    pub fn new(prefix: impl Into<Utf8PathBuf>) -> Self {
        Layout { prefix: prefix.into() }
    }

    /// Returns the install prefix.
    pub fn prefix(&self) -> &Utf8Path {
        &self.prefix
    }

    /// Returns the binary directory (`bin`).
    pub fn bin_dir(&self) -> Utf8PathBuf {
        self.prefix.join("bin")
    }

    /// Returns the installed binary path.
    pub fn binary(&self) -> Utf8PathBuf {
        self.bin_dir().join(BINARY_NAME)
    }

    /// Returns the bash completion directory.
    pub fn bash_completion_dir(&self) -> Utf8PathBuf {
        self.prefix.join("etc").join("bash_completion.d")
    }

    /// Returns the installed bash completion path. The file is
    /// installed under the bare binary name, without a `.bash`
    /// extension.
    pub fn bash_completion(&self) -> Utf8PathBuf {
        self.bash_completion_dir().join(BINARY_NAME)
    }

    /// Returns the fish completion directory.
    pub fn fish_completion_dir(&self) -> Utf8PathBuf {
        self.prefix.join("share").join("fish").join("vendor_completions.d")
    }

    /// Returns the installed fish completion path.
    pub fn fish_completion(&self) -> Utf8PathBuf {
        self.fish_completion_dir().join(format!("{BINARY_NAME}.fish"))
    }

    /// Returns the package-private share directory
    /// (`share/diffscribe`).
    pub fn pkgshare(&self) -> Utf8PathBuf {
        self.prefix.join("share").join(BINARY_NAME)
    }

    /// Returns the installed zsh completion path.
    pub fn zsh_completion(&self) -> Utf8PathBuf {
        self.pkgshare().join("zsh").join(format!("{BINARY_NAME}.zsh"))
    }

    /// Returns the oh-my-zsh plugin directory for the package.
    pub fn oh_my_zsh_dir(&self) -> Utf8PathBuf {
        self.pkgshare().join("oh-my-zsh").join(BINARY_NAME)
    }

    /// Returns the generated oh-my-zsh plugin loader path.
    pub fn plugin_loader(&self) -> Utf8PathBuf {
        self.oh_my_zsh_dir().join(format!("{BINARY_NAME}.plugin.zsh"))
    }

    /// Returns the manpage directory (`share/man/man1`).
    pub fn man1_dir(&self) -> Utf8PathBuf {
        self.prefix.join("share").join("man").join("man1")
    }

    /// Returns the installed manpage path.
    pub fn manpage(&self) -> Utf8PathBuf {
        self.man1_dir().join(format!("{BINARY_NAME}.1"))
    }

    /// Returns the shared assets that must exist after a successful
    /// install. A release missing any of these is broken and must never
    /// be reported as installed.
    pub fn required_artifacts(&self) -> Vec<Utf8PathBuf> {
        vec![
            self.bash_completion(),
            self.fish_completion(),
            self.zsh_completion(),
            self.plugin_loader(),
            self.manpage(),
        ]
    }

    /// Returns the contents of the generated plugin loader: a single
    /// `source` line referencing the installed zsh completion by
    /// absolute path, followed by a newline.
    pub fn plugin_loader_contents(&self) -> String {
        format!("source \"{}\"\n", self.zsh_completion())
    }
}

// Copyright 2026 Oxide Computer Company

//! Build-from-source install scenarios, driven by a fake `go` tool.

use crate::helpers::{
    installer, stage_completions, stage_manpage, write_executable,
};
use anyhow::Result;
use camino::Utf8PathBuf;
use camino_tempfile::Utf8TempDir;
use diffscribe_install::{
    ArchiveKind, InstallError, InstallOptions, Toolchain, ToolchainError,
};
use std::fs;

/// A fake `go` that records its arguments and writes a working stand-in
/// binary to the `-o` output path.
const FAKE_GO: &str = r#"#!/bin/sh
echo "$@" > "$(dirname "$0")/go-args.txt"
out=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "-o" ]; then
    out="$arg"
  fi
  prev="$arg"
done
if [ -z "$out" ]; then
  echo "fake go: missing -o" >&2
  exit 2
fi
cat > "$out" <<'EOF'
#!/bin/sh
echo "diffscribe 0.1.0"
EOF
chmod +x "$out"
"#;

/// A fake `go` whose build always fails.
const FAILING_GO: &str = "#!/bin/sh\necho \"compile error: boom\" >&2\nexit 3\n";

fn setup() -> Result<(Utf8TempDir, Utf8TempDir, Utf8TempDir)> {
    let staging = Utf8TempDir::with_prefix("diffscribe-source-")?;
    let prefix = Utf8TempDir::with_prefix("diffscribe-prefix-")?;
    let tools = Utf8TempDir::with_prefix("diffscribe-tools-")?;
    Ok((staging, prefix, tools))
}

/// Stages the non-binary part of a source tree: completions and
/// manpage, but nothing compiled yet.
fn stage_source_tree(staging: &Utf8TempDir) -> Result<()> {
    stage_completions(staging.path(), "completions", &["bash", "fish", "zsh"])?;
    stage_manpage(staging.path())
}

fn fake_toolchain(tools: &Utf8TempDir, script: &str) -> Result<Toolchain> {
    let go: Utf8PathBuf = tools.path().join("go");
    write_executable(&go, script)?;
    Ok(Toolchain::with_binary(go))
}

const SOURCE_OPTIONS: InstallOptions =
    InstallOptions { build_from_source: true };

#[test]
fn test_source_build_installs_and_passes_smoke_test() -> Result<()> {
    let (staging, prefix, tools) = setup()?;
    stage_source_tree(&staging)?;

    let installer = installer(staging.path(), prefix.path())
        .with_toolchain(fake_toolchain(&tools, FAKE_GO)?);
    installer.install(&SOURCE_OPTIONS)?;

    assert!(installer.layout().binary().is_file());
    installer.smoke_test()?;

    // The build was invoked with stripped debug info and the version
    // injected into the fixed symbol path.
    let args = fs::read_to_string(tools.path().join("go-args.txt"))?;
    assert!(args.contains("build"));
    assert!(args.contains("-trimpath"));
    assert!(args.contains("-s -w"));
    assert!(args.contains(
        "github.com/rogwilco/diffscribe/internal/version.version=0.1.0"
    ));

    Ok(())
}

#[test]
fn test_source_build_missing_toolchain_aborts_before_copy() -> Result<()> {
    let (staging, prefix, _tools) = setup()?;
    stage_source_tree(&staging)?;

    let installer = installer(staging.path(), prefix.path())
        .with_toolchain(Toolchain::with_binary("/no/such/toolchain"));
    let result = installer.install(&SOURCE_OPTIONS);

    assert!(
        matches!(
            &result,
            Err(InstallError::Toolchain(ToolchainError::Missing { .. }))
        ),
        "should fail with ToolchainError::Missing, got {result:?}"
    );
    assert!(
        !prefix.path().join("bin").exists(),
        "no file copy may occur before the toolchain check"
    );

    Ok(())
}

#[test]
fn test_source_build_failure_aborts() -> Result<()> {
    let (staging, prefix, tools) = setup()?;
    stage_source_tree(&staging)?;

    let installer = installer(staging.path(), prefix.path())
        .with_toolchain(fake_toolchain(&tools, FAILING_GO)?);
    let result = installer.install(&SOURCE_OPTIONS);

    // The exit status is checked explicitly: the failure surfaces as a
    // build error, not as a missing-binary error downstream.
    match result {
        Err(InstallError::Toolchain(ToolchainError::BuildFailed {
            stderr,
            ..
        })) => {
            assert!(stderr.contains("compile error: boom"));
        }
        other => panic!("expected BuildFailed, got {other:?}"),
    }
    assert!(
        !prefix.path().join("bin").exists(),
        "a failed build must not install anything"
    );

    Ok(())
}

#[test]
fn test_source_build_missing_manpage_fails_verification() -> Result<()> {
    let (staging, prefix, tools) = setup()?;
    // Completions but no manpage: the build itself succeeds, the
    // postcondition check still aborts.
    stage_completions(staging.path(), "completions", &["bash", "fish", "zsh"])?;

    let installer = installer(staging.path(), prefix.path())
        .with_toolchain(fake_toolchain(&tools, FAKE_GO)?);
    let result = installer.install(&SOURCE_OPTIONS);

    match result {
        Err(InstallError::MissingSharedAssets {
            archive, missing, ..
        }) => {
            assert_eq!(archive, ArchiveKind::Source);
            assert_eq!(missing, vec![installer.layout().manpage()]);
        }
        other => panic!("expected MissingSharedAssets, got {other:?}"),
    }

    Ok(())
}

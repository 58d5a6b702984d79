// Copyright 2026 Oxide Computer Company

//! Command-line installer for staged diffscribe releases.
//!
//! The fetch/extract step (with checksum verification) happens before
//! this tool runs; `diffscribe-pkg install` takes the staged tree and
//! places the binary, completions, and manpage under a prefix.

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use diffscribe_install::{InstallOptions, Installer};
use diffscribe_release::releases;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "diffscribe-pkg", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Install a staged diffscribe release into a prefix.
    Install(InstallArgs),
    /// Print the post-install guidance text without installing.
    Caveats(CaveatsArgs),
}

#[derive(Args)]
struct InstallArgs {
    /// Directory the release archive has been extracted into.
    #[arg(long)]
    staging: Utf8PathBuf,

    /// Install prefix; artifacts land under bin/, etc/, and share/.
    #[arg(long)]
    prefix: Utf8PathBuf,

    /// Build the binary from the staged source tree instead of using
    /// the prebuilt payload. Requires the Go toolchain.
    #[arg(long)]
    build_from_source: bool,

    /// Skip the post-install smoke test.
    #[arg(long)]
    no_smoke_test: bool,
}

#[derive(Args)]
struct CaveatsArgs {
    /// Install prefix the guidance paths are rendered for.
    #[arg(long)]
    prefix: Utf8PathBuf,

    /// Include the paragraph shown after a source build.
    #[arg(long)]
    build_from_source: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Install(args) => install(args),
        Command::Caveats(args) => caveats(args),
    }
}

fn install(args: InstallArgs) -> Result<()> {
    let installer = Installer::new(
        args.staging,
        args.prefix,
        releases::diffscribe_v0_1_0(),
    );
    let options = InstallOptions {
        build_from_source: args.build_from_source,
    };

    installer.install(&options)?;
    if !args.no_smoke_test {
        installer.smoke_test()?;
    }

    println!("{}", installer.caveats(&options));
    Ok(())
}

fn caveats(args: CaveatsArgs) -> Result<()> {
    // The staging directory is irrelevant for rendering guidance text;
    // nothing is read from it.
    let installer =
        Installer::new(".", args.prefix, releases::diffscribe_v0_1_0());
    let options = InstallOptions {
        build_from_source: args.build_from_source,
    };
    println!("{}", installer.caveats(&options));
    Ok(())
}

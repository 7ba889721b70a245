//! PuTTY command - convert bookmarks to PuTTY saved sessions.
//!
//! Writes one session file per bookmark. The sessions directory defaults to
//! the Flatpak install and can be redirected with `--native`, `--flatpak`
//! or an explicit `--target`.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use moba_convert::convert::{self, ConvertOptions};
use moba_convert::targets::{PuttyLocation, PuttyTarget};

use crate::cli::{load_environment, print_dry_run_notice, SourceArgs};

/// Arguments for the putty command.
#[derive(clap::Args)]
#[command(
    about = "Convert MobaXterm bookmarks to PuTTY saved sessions",
    long_about = "Convert MobaXterm bookmarks to PuTTY saved sessions.\n\n\
        Sessions are written to the Flatpak PuTTY directory by default:\n  \
        ~/.var/app/uk.org.greenend.chiark.sgtatham.putty/config/putty/sessions",
    after_help = "EXAMPLES:\n    \
        moba-convert putty                       Write to the Flatpak PuTTY\n    \
        moba-convert putty --native              Write to ~/.config/putty/sessions\n    \
        moba-convert putty --target ~/sessions   Write to a custom directory\n    \
        moba-convert putty -n                    Preview sessions and contents"
)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Override target sessions directory
    #[arg(long, value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Force native path (~/.config/putty/sessions)
    #[arg(long)]
    #[arg(long_help = "Use the native PuTTY sessions directory\n\
        ($XDG_CONFIG_HOME/putty/sessions). If it does not exist but the\n\
        legacy ~/.putty/sessions does, the legacy directory is used.")]
    pub native: bool,

    /// Force Flatpak path (~/.var/app/.../config/putty/sessions)
    #[arg(long)]
    pub flatpak: bool,
}

/// Executes the putty command.
pub fn run(args: Args) -> Result<()> {
    let (paths, config) = load_environment()?;
    let source = config.source_file(args.source.file);

    let location = PuttyLocation::from_flags(
        args.target,
        args.native,
        args.flatpak,
        config.putty_target.clone(),
    );
    let target_dir = location.resolve(&paths);
    tracing::info!("PuTTY location {:?} resolved to {:?}", location, target_dir);

    let mut target = PuttyTarget::new(&target_dir);
    let options = ConvertOptions {
        dry_run: args.source.dry_run,
    };
    let stats = convert::run(&source, &paths.home, &mut target, &options)?;

    println!();
    println!(
        "{}",
        format!(
            "Created: {} sessions, Skipped: {}",
            stats.created, stats.skipped
        )
        .bold()
    );
    println!("Target directory: {}", target_dir.display());
    print_dry_run_notice(&stats, options.dry_run);

    Ok(())
}

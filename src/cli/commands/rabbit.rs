//! Rabbit command - convert bookmarks to Rabbit Remote Control favorites.
//!
//! Writes one `.rrc` profile per bookmark into Rabbit's `share/` directory
//! and registers each one in `etc/Favorite.ini`. Bookmark names are kept
//! as-is; the MobaXterm folder is stored as profile metadata and in the
//! favorite's description.

use anyhow::Result;
use colored::Colorize;

use moba_convert::convert::{self, ConvertOptions};
use moba_convert::targets::{RabbitLayout, RabbitTarget};

use crate::cli::{load_environment, print_dry_run_notice, SourceArgs};

/// Arguments for the rabbit command.
#[derive(clap::Args)]
#[command(
    about = "Convert MobaXterm bookmarks to Rabbit Remote Control favorites",
    long_about = "Convert MobaXterm bookmarks to Rabbit Remote Control favorites\n\
        (SSH and Telnet).\n\n\
        Rabbit must have been started once so that\n\
        ~/Documents/Rabbit/RabbitRemoteControl/etc/Favorite.ini and\n\
        ~/Documents/Rabbit/RabbitRemoteControl/share exist.",
    after_help = "EXAMPLES:\n    \
        moba-convert rabbit                      Convert ./moba_bookmarks.txt\n    \
        moba-convert rabbit --dry-run            Preview files and favorites"
)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Executes the rabbit command.
///
/// The Rabbit layout is checked before the export is read.
pub fn run(args: Args) -> Result<()> {
    let (paths, config) = load_environment()?;
    let mut target = RabbitTarget::open(RabbitLayout::new(config.rabbit_dir(&paths)))?;
    let source = config.source_file(args.source.file);

    let options = ConvertOptions {
        dry_run: args.source.dry_run,
    };
    let stats = convert::run(&source, &paths.home, &mut target, &options)?;

    println!();
    println!(
        "{}",
        format!(
            "Done. Created: {}, Skipped: {}. New RootCount: {}.",
            stats.created,
            stats.skipped,
            target.next_index()
        )
        .bold()
    );
    print_dry_run_notice(&stats, options.dry_run);

    Ok(())
}

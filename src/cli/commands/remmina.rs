//! Remmina command - convert bookmarks to Remmina profiles.
//!
//! Writes one `.remmina` file per bookmark into Remmina's data directory.
//! Grouped bookmarks are shown as `group/name` in Remmina.

use anyhow::Result;
use colored::Colorize;

use moba_convert::convert::{self, ConvertOptions};
use moba_convert::targets::RemminaTarget;

use crate::cli::{load_environment, print_dry_run_notice, SourceArgs};

/// Arguments for the remmina command.
#[derive(clap::Args)]
#[command(
    about = "Convert MobaXterm bookmarks to Remmina profiles",
    long_about = "Convert MobaXterm bookmarks to Remmina profiles.\n\n\
        Profiles are written to ~/.local/share/remmina (or `remmina_dir`\n\
        from the config file), one .remmina file per bookmark.",
    after_help = "EXAMPLES:\n    \
        moba-convert remmina                     Convert ./moba_bookmarks.txt\n    \
        moba-convert remmina -f export.mxtsessions\n    \
        moba-convert remmina --dry-run           Preview without writing"
)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Executes the remmina command.
pub fn run(args: Args) -> Result<()> {
    let (paths, config) = load_environment()?;
    let source = config.source_file(args.source.file);
    let mut target = RemminaTarget::new(config.remmina_dir(&paths));

    let options = ConvertOptions {
        dry_run: args.source.dry_run,
    };
    let stats = convert::run(&source, &paths.home, &mut target, &options)?;

    println!();
    println!(
        "{}",
        format!(
            "Created: {} profiles, Skipped: {}",
            stats.created, stats.skipped
        )
        .bold()
    );
    println!(
        "Target directory: {}",
        config.remmina_dir(&paths).display()
    );
    print_dry_run_notice(&stats, options.dry_run);

    Ok(())
}

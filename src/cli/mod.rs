//! Command-line interface for moba-convert.
//!
//! One subcommand per target application, plus configuration and shell
//! completion helpers.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use moba_convert::config::{Config, Paths};
use moba_convert::convert::ConvertStats;

/// Individual CLI command implementations.
pub mod commands;

/// Arguments shared by every conversion command.
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the MobaXterm bookmarks export
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    #[arg(long_help = "Path to the MobaXterm bookmarks export.\n\
        Defaults to `source_file` from the config file, then ./moba_bookmarks.txt.")]
    pub file: Option<PathBuf>,

    /// Preview actions without creating any files
    #[arg(short = 'n', long)]
    #[arg(long_help = "Parses the export and prints every file that would be\n\
        written, without creating files or directories.")]
    pub dry_run: bool,
}

/// Resolves the user's directories and loads the config file.
pub fn load_environment() -> Result<(Paths, Config)> {
    let paths = Paths::from_env()?;
    let config = Config::load(&paths)?;
    Ok((paths, config))
}

/// Prints the trailing dry-run notice shared by all conversion commands.
pub fn print_dry_run_notice(stats: &ConvertStats, dry_run: bool) {
    if dry_run {
        println!("{}", "Dry-run only: no files written.".yellow());
    } else if stats.created == 0 {
        println!("{}", "No bookmarks found in the export.".dimmed());
    }
}

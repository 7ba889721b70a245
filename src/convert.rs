//! Conversion driver.
//!
//! Reads a bookmark export and feeds every record through a [`Target`],
//! writing one file per supported bookmark. In dry-run mode nothing on disk
//! is touched, not even the output directory, but every action that would
//! happen is printed.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::bookmarks::read_bookmarks;
use crate::targets::Target;

/// Options shared by every conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Print what would be written without touching the filesystem.
    pub dry_run: bool,
}

/// Conversion statistics returned by [`run`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertStats {
    /// Number of files written (or that would be written).
    pub created: usize,
    /// Number of bookmarks with a protocol the target cannot render.
    pub skipped: usize,
}

/// Converts every bookmark in `source` with `target`.
///
/// A missing source file is reported before anything else happens. Write
/// errors abort the run; files already written stay on disk.
pub fn run<T: Target + ?Sized>(
    source: &Path,
    home: &Path,
    target: &mut T,
    options: &ConvertOptions,
) -> Result<ConvertStats> {
    let bookmarks = read_bookmarks(source, home)?;
    let info = target.info();

    tracing::info!(
        "Converting {} bookmarks for {} ({}) into {:?}",
        bookmarks.len(),
        info.name,
        info.description,
        target.output_dir()
    );

    if !options.dry_run {
        fs::create_dir_all(target.output_dir()).with_context(|| {
            format!(
                "Failed to create output directory {}",
                target.output_dir().display()
            )
        })?;
    }

    let mut stats = ConvertStats::default();

    for bookmark in &bookmarks {
        let Some(session) = target.render(bookmark) else {
            tracing::warn!(
                "Skipping unknown protocol entry: {} ({})",
                bookmark.name,
                bookmark.protocol
            );
            stats.skipped += 1;
            continue;
        };

        if options.dry_run {
            println!(
                "{} Would write {}",
                "[dry-run]".dimmed(),
                session.path.display()
            );
            for line in target.preview(bookmark, &session) {
                println!("{line}");
            }
        } else {
            fs::write(&session.path, &session.content)
                .with_context(|| format!("Failed to write {}", session.path.display()))?;
            println!("{} {}", "Wrote".green(), session.path.display());
        }

        target.record(bookmark, &session, !options.dry_run);
        stats.created += 1;
    }

    target.finish(options.dry_run)?;

    Ok(stats)
}

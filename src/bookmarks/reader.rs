//! Line classification for bookmark exports.
//!
//! Every line is classified on its own; the only state carried between lines
//! is the current folder, held in a [`GroupState`] accumulator owned by the
//! caller.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::models::Bookmark;
use super::parser::parse_record;
use crate::error::ConvertError;

/// What a single export line means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank lines, comments, icon indices and anything unrecognized.
    Skip,
    /// A block opener such as `[Bookmarks_3]`; ends the current folder.
    GroupReset,
    /// `SubRep=<name>`; names the current folder.
    GroupName(&'a str),
    /// `<name>=<fields>`; one bookmark.
    Record { name: &'a str, fields: &'a str },
}

/// Classifies one export line.
///
/// Rules apply in order: blank or `#` comment, block opener, `SubRep=`,
/// `ImgNum=`, any other `key=value`, and finally everything else is skipped.
/// A `key=value` line whose key is blank has no usable name and is skipped.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.trim().is_empty() || line.trim_start().starts_with('#') {
        return LineKind::Skip;
    }

    if line.starts_with("[Bookmarks_") || line.trim_end() == "[Bookmarks]" {
        return LineKind::GroupReset;
    }

    if let Some(name) = line.strip_prefix("SubRep=") {
        return LineKind::GroupName(name.trim());
    }

    if line.starts_with("ImgNum=") {
        return LineKind::Skip;
    }

    match line.split_once('=') {
        Some((name, _)) if name.trim().is_empty() => {
            tracing::debug!("Skipping record without a name: {:?}", line);
            LineKind::Skip
        }
        Some((name, fields)) => LineKind::Record { name, fields },
        None => LineKind::Skip,
    }
}

/// The folder currently in effect while scanning an export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupState {
    current: Option<String>,
}

impl GroupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The folder subsequent records belong to.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Applies one line, returning the bookmark it describes, if any.
    pub fn scan(&mut self, line: &str, home: &Path) -> Option<Bookmark> {
        match classify_line(line) {
            LineKind::Skip => None,
            LineKind::GroupReset => {
                self.current = None;
                None
            }
            LineKind::GroupName(name) => {
                self.current = (!name.is_empty()).then(|| name.to_string());
                tracing::debug!("Entering group {:?}", self.current);
                None
            }
            LineKind::Record { name, fields } => {
                let bookmark = parse_record(name, fields, self.current(), home);
                tracing::debug!(
                    "Parsed bookmark {:?} ({} {}:{})",
                    bookmark.name,
                    bookmark.protocol,
                    bookmark.host,
                    bookmark.port
                );
                Some(bookmark)
            }
        }
    }
}

/// Parses every bookmark in an export, in source order.
pub fn parse_bookmarks(content: &str, home: &Path) -> Vec<Bookmark> {
    let mut state = GroupState::new();
    content
        .lines()
        .filter_map(|line| state.scan(line, home))
        .collect()
}

/// Reads and parses a bookmark export from disk.
///
/// Fails with [`ConvertError::SourceNotFound`] when `path` is not a file.
pub fn read_bookmarks(path: &Path, home: &Path) -> Result<Vec<Bookmark>> {
    if !path.is_file() {
        return Err(ConvertError::SourceNotFound(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read bookmark export {}", path.display()))?;

    let bookmarks = parse_bookmarks(&content, home);
    tracing::debug!("Read {} bookmarks from {:?}", bookmarks.len(), path);
    Ok(bookmarks)
}

//! MobaXterm bookmark exports.
//!
//! A bookmark export is a line-oriented text file. Block openers such as
//! `[Bookmarks_1]` start a new folder, `SubRep=` names it, and every other
//! `name=fields` line describes one connection whose fields are separated
//! by `%`. This module turns those lines into [`Bookmark`] records that the
//! targets render.

pub mod models;
pub mod parser;
pub mod reader;

pub use models::{Bookmark, Protocol};
pub use parser::{find_key_path, normalize_key_path, parse_record};
pub use reader::{classify_line, parse_bookmarks, read_bookmarks, GroupState, LineKind};

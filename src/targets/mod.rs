//! Targets for converted bookmarks.
//!
//! Each target module wraps a pure rendering function for one application's
//! saved-session format. The [`Target`] trait adds what the conversion driver
//! needs around it: where files go, what preview output looks like, and any
//! bookkeeping that must happen once all records are written.

use anyhow::Result;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::bookmarks::Bookmark;

/// Remmina profile renderer.
pub mod remmina;

/// PuTTY saved-session renderer.
pub mod putty;

/// Rabbit Remote Control profile renderer and favorites index.
pub mod rabbit;

#[cfg(test)]
mod test_common;

pub use putty::{PuttyLocation, PuttyTarget};
pub use rabbit::{RabbitLayout, RabbitTarget};
pub use remmina::RemminaTarget;

static UNSAFE_FILE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("file name pattern is valid"));

/// Descriptive information about a target.
#[derive(Debug, Clone)]
pub struct TargetInfo {
    /// Short identifier, matching the CLI subcommand.
    pub name: &'static str,
    /// Human-readable application name.
    pub description: &'static str,
}

/// One output file produced from a bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSession {
    /// Where the file is written.
    pub path: PathBuf,
    /// Complete file contents.
    pub content: String,
}

/// A saved-session format bookmarks can be converted into.
pub trait Target {
    /// Returns information about this target.
    fn info(&self) -> TargetInfo;

    /// Directory created before the first file is written.
    fn output_dir(&self) -> &Path;

    /// Renders a bookmark, or returns `None` when its protocol is unsupported.
    fn render(&self, bookmark: &Bookmark) -> Option<RenderedSession>;

    /// Called once per rendered bookmark, after it was written or previewed.
    fn record(&mut self, _bookmark: &Bookmark, _session: &RenderedSession, _written: bool) {}

    /// Extra lines shown in preview mode for a rendered bookmark.
    fn preview(&self, _bookmark: &Bookmark, _session: &RenderedSession) -> Vec<String> {
        Vec::new()
    }

    /// Flushes state accumulated across records.
    fn finish(&mut self, _dry_run: bool) -> Result<()> {
        Ok(())
    }
}

/// Replaces every run of characters outside `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    UNSAFE_FILE_CHARS.replace_all(name, "_").into_owned()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::bookmarks::{Bookmark, Protocol};

    pub fn ssh_with_key() -> Bookmark {
        Bookmark {
            name: "web 01".to_string(),
            protocol: Protocol::Ssh,
            host: "10.0.0.2".to_string(),
            port: "22".to_string(),
            user: "deploy".to_string(),
            key_path: Some("/home/tester/.ssh/id_ed25519".to_string()),
            group: Some("Servers".to_string()),
        }
    }

    pub fn ssh_password() -> Bookmark {
        Bookmark {
            name: "MyServer".to_string(),
            protocol: Protocol::Ssh,
            host: "10.0.0.5".to_string(),
            port: "22".to_string(),
            user: "root".to_string(),
            key_path: None,
            group: None,
        }
    }

    pub fn telnet() -> Bookmark {
        Bookmark {
            name: "core/switch".to_string(),
            protocol: Protocol::Telnet,
            host: "10.0.0.3".to_string(),
            port: "23".to_string(),
            user: String::new(),
            key_path: None,
            group: Some("Network".to_string()),
        }
    }

    /// Telnet record whose fields happened to reference a key file.
    pub fn telnet_with_key() -> Bookmark {
        Bookmark {
            key_path: Some("/home/tester/.ssh/id_rsa".to_string()),
            ..telnet()
        }
    }

    pub fn unknown() -> Bookmark {
        Bookmark {
            protocol: Protocol::Unknown("#130#0".to_string()),
            ..ssh_password()
        }
    }
}

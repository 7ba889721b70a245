//! PuTTY saved sessions.
//!
//! On Unix, PuTTY stores each saved session as a file of `Key=Value` lines
//! whose name is the percent-encoded session name. The sessions directory
//! depends on how PuTTY was installed:
//!
//! - Flatpak: `~/.var/app/uk.org.greenend.chiark.sgtatham.putty/config/putty/sessions`
//! - native: `$XDG_CONFIG_HOME/putty/sessions` (`~/.config/putty/sessions`)
//! - legacy: `~/.putty/sessions`

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::path::{Path, PathBuf};

use crate::bookmarks::{Bookmark, Protocol};
use crate::config::Paths;

use super::{RenderedSession, Target, TargetInfo};

/// Flatpak application id of PuTTY.
pub const PUTTY_FLATPAK_APP_ID: &str = "uk.org.greenend.chiark.sgtatham.putty";

/// Everything except RFC 3986 unreserved characters is encoded, including `/`.
const SESSION_NAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// How the sessions directory was selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuttyLocation {
    /// `--target` or `putty_target` in the config file.
    Explicit(PathBuf),
    /// `--native`: XDG config path, or the legacy path if only that exists.
    Native,
    /// `--flatpak`.
    Flatpak,
    /// No preference; the Flatpak path is used.
    Default,
}

impl PuttyLocation {
    /// Picks a location from CLI flags and config.
    ///
    /// `--target` wins, then `--native`, then `--flatpak`, then the
    /// configured directory.
    pub fn from_flags(
        target: Option<PathBuf>,
        native: bool,
        flatpak: bool,
        configured: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = target {
            PuttyLocation::Explicit(dir)
        } else if native {
            PuttyLocation::Native
        } else if flatpak {
            PuttyLocation::Flatpak
        } else if let Some(dir) = configured {
            PuttyLocation::Explicit(dir)
        } else {
            PuttyLocation::Default
        }
    }

    /// Resolves the sessions directory. Only `Native` looks at the filesystem.
    pub fn resolve(&self, paths: &Paths) -> PathBuf {
        match self {
            PuttyLocation::Explicit(dir) => paths.expand_tilde(dir),
            PuttyLocation::Native => {
                let native = native_sessions_dir(paths);
                let legacy = legacy_sessions_dir(paths);
                if native.exists() {
                    native
                } else if legacy.exists() {
                    legacy
                } else {
                    native
                }
            }
            PuttyLocation::Flatpak | PuttyLocation::Default => flatpak_sessions_dir(paths),
        }
    }
}

pub fn flatpak_sessions_dir(paths: &Paths) -> PathBuf {
    paths
        .home
        .join(".var/app")
        .join(PUTTY_FLATPAK_APP_ID)
        .join("config/putty/sessions")
}

pub fn native_sessions_dir(paths: &Paths) -> PathBuf {
    paths.config_home.join("putty").join("sessions")
}

pub fn legacy_sessions_dir(paths: &Paths) -> PathBuf {
    paths.home.join(".putty").join("sessions")
}

/// Writes bookmarks as PuTTY saved sessions.
pub struct PuttyTarget {
    dir: PathBuf,
}

impl PuttyTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Target for PuttyTarget {
    fn info(&self) -> TargetInfo {
        TargetInfo {
            name: "putty",
            description: "PuTTY SSH and Telnet client",
        }
    }

    fn output_dir(&self) -> &Path {
        &self.dir
    }

    fn render(&self, bookmark: &Bookmark) -> Option<RenderedSession> {
        let content = render_putty(bookmark)?;
        Some(RenderedSession {
            path: self.dir.join(putty_encode(&bookmark.name)),
            content,
        })
    }

    fn preview(&self, _bookmark: &Bookmark, session: &RenderedSession) -> Vec<String> {
        let mut lines: Vec<String> = session.content.trim().lines().map(String::from).collect();
        lines.push(String::new());
        lines
    }
}

/// Encodes a session name the way PuTTY names its session files.
pub fn putty_encode(name: &str) -> String {
    utf8_percent_encode(name, SESSION_NAME_ENCODE_SET).to_string()
}

/// Renders a PuTTY session file. Returns `None` for unsupported protocols.
pub fn render_putty(bookmark: &Bookmark) -> Option<String> {
    let protocol = match bookmark.protocol {
        Protocol::Ssh => "ssh",
        Protocol::Telnet => "telnet",
        Protocol::Unknown(_) => return None,
    };

    let mut settings = vec![
        ("HostName", bookmark.host.as_str()),
        ("PortNumber", bookmark.port_or_default()),
        ("Protocol", protocol),
        ("UserName", bookmark.user.as_str()),
        ("TerminalType", "xterm"),
    ];

    if bookmark.protocol == Protocol::Ssh {
        if let Some(key) = &bookmark.key_path {
            settings.push(("PublicKeyFile", key.as_str()));
        }
    }
    if let Some(group) = &bookmark.group {
        settings.push(("_ImportedGroup", group.as_str()));
    }

    let mut content = settings
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("\n");
    content.push('\n');
    Some(content)
}

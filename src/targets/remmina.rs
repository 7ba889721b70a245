//! Remmina profiles.
//!
//! Remmina keeps one `.remmina` file per connection, a flat `key=value`
//! list under a `[remmina]` header. Grouped bookmarks get a `group/name`
//! display name so they sort together in Remmina's list view.

use std::path::{Path, PathBuf};

use crate::bookmarks::{Bookmark, Protocol};

use super::{sanitize_file_name, RenderedSession, Target, TargetInfo};

/// Writes bookmarks as Remmina profiles.
pub struct RemminaTarget {
    dir: PathBuf,
}

impl RemminaTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Target for RemminaTarget {
    fn info(&self) -> TargetInfo {
        TargetInfo {
            name: "remmina",
            description: "Remmina remote desktop client",
        }
    }

    fn output_dir(&self) -> &Path {
        &self.dir
    }

    fn render(&self, bookmark: &Bookmark) -> Option<RenderedSession> {
        let content = render_remmina(bookmark)?;
        Some(RenderedSession {
            path: self.dir.join(remmina_file_name(&bookmark.name)),
            content,
        })
    }
}

/// File name for a profile, derived from the raw bookmark name.
pub fn remmina_file_name(name: &str) -> String {
    format!("{}.remmina", sanitize_file_name(name))
}

/// Renders a Remmina profile. Returns `None` for unsupported protocols.
pub fn render_remmina(bookmark: &Bookmark) -> Option<String> {
    let protocol = match bookmark.protocol {
        Protocol::Ssh => "SSH",
        Protocol::Telnet => "TELNET",
        Protocol::Unknown(_) => return None,
    };

    let group = bookmark.group.as_deref().unwrap_or_default();
    let display_name = match &bookmark.group {
        Some(group) => format!("{group}/{}", bookmark.name),
        None => bookmark.name.clone(),
    };

    let mut lines = vec![
        "[remmina]".to_string(),
        format!("protocol={protocol}"),
        format!("name={display_name}"),
        format!("group={group}"),
        format!("server={}", bookmark.host),
    ];

    if !bookmark.user.is_empty() {
        lines.push(format!("username={}", bookmark.user));
    }
    if !bookmark.port.is_empty() {
        lines.push(format!("port={}", bookmark.port));
    }

    if bookmark.protocol == Protocol::Ssh {
        match &bookmark.key_path {
            Some(key) => {
                lines.push("ssh_auth=1".to_string());
                lines.push(format!("ssh_privatekey={key}"));
            }
            None => lines.push("ssh_auth=0".to_string()),
        }
    }

    lines.push("disablepasswordstorage=0".to_string());
    lines.push("notes=".to_string());

    let mut content = lines.join("\n");
    content.push('\n');
    Some(content)
}

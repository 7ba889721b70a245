//! Rabbit Remote Control profiles.
//!
//! Rabbit keeps each connection in a `.rrc` file under `share/` and lists
//! them in `etc/Favorite.ini`:
//!
//! ```text
//! [General]
//! RootCount=7
//! File_5=/home/me/Documents/Rabbit/RabbitRemoteControl/share/SSH_SSH_5_web.rrc
//! Name_5=web
//! Descripte_5="Group: Servers"
//! ```
//!
//! `RootCount` is both the number of favorites and the next free index. Both
//! paths exist only after Rabbit has been started once, so they are checked
//! before any bookmark is processed.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::bookmarks::{Bookmark, Protocol};
use crate::error::ConvertError;
use crate::ini::IniDocument;

use super::{sanitize_file_name, RenderedSession, Target, TargetInfo};

const GENERAL_SECTION: &str = "General";
const ROOT_COUNT_KEY: &str = "RootCount";

/// Directory layout of a Rabbit Remote Control installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RabbitLayout {
    root: PathBuf,
}

impl RabbitLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn favorites_path(&self) -> PathBuf {
        self.root.join("etc").join("Favorite.ini")
    }

    pub fn share_dir(&self) -> PathBuf {
        self.root.join("share")
    }

    /// Fails with [`ConvertError::CompanionMissing`] for the first absent path.
    pub fn ensure_exists(&self) -> Result<(), ConvertError> {
        for needed in [self.favorites_path(), self.share_dir()] {
            if !needed.exists() {
                return Err(ConvertError::CompanionMissing(needed));
            }
        }
        Ok(())
    }
}

/// Writes bookmarks as Rabbit profiles and registers them as favorites.
pub struct RabbitTarget {
    layout: RabbitLayout,
    share_dir: PathBuf,
    favorites: IniDocument,
    next_index: u64,
}

impl RabbitTarget {
    /// Checks the layout and loads the favorites index.
    pub fn open(layout: RabbitLayout) -> Result<Self> {
        layout.ensure_exists()?;

        let path = layout.favorites_path();
        let bytes = fs::read(&path)
            .with_context(|| format!("Failed to read favorites {}", path.display()))?;
        let favorites = IniDocument::parse(&String::from_utf8_lossy(&bytes));

        Ok(Self::with_favorites(layout, favorites))
    }

    /// Builds a target from an already loaded favorites index.
    pub fn with_favorites(layout: RabbitLayout, favorites: IniDocument) -> Self {
        let next_index = root_count(&favorites);
        tracing::debug!("Favorites RootCount is {}", next_index);
        Self {
            share_dir: layout.share_dir(),
            layout,
            favorites,
            next_index,
        }
    }

    /// Index the next rendered bookmark will receive.
    pub fn next_index(&self) -> u64 {
        self.next_index
    }
}

impl Target for RabbitTarget {
    fn info(&self) -> TargetInfo {
        TargetInfo {
            name: "rabbit",
            description: "Rabbit Remote Control",
        }
    }

    fn output_dir(&self) -> &Path {
        &self.share_dir
    }

    fn render(&self, bookmark: &Bookmark) -> Option<RenderedSession> {
        let content = render_rabbit(bookmark)?;
        let file_name = rabbit_file_name(bookmark, self.next_index)?;
        Some(RenderedSession {
            path: self.share_dir.join(file_name),
            content,
        })
    }

    fn record(&mut self, bookmark: &Bookmark, session: &RenderedSession, written: bool) {
        if written {
            let idx = self.next_index;
            self.favorites.append(
                GENERAL_SECTION,
                &format!("File_{idx}"),
                session.path.to_string_lossy(),
            );
            self.favorites
                .append(GENERAL_SECTION, &format!("Name_{idx}"), bookmark.name.as_str());
            if let Some(group) = &bookmark.group {
                self.favorites.append(
                    GENERAL_SECTION,
                    &format!("Descripte_{idx}"),
                    format!("\"Group: {group}\""),
                );
            }
        }
        self.next_index += 1;
    }

    fn preview(&self, bookmark: &Bookmark, _session: &RenderedSession) -> Vec<String> {
        vec![format!(
            "[dry-run] Would add Favorite: Name_{}={} (Group: {})",
            self.next_index,
            bookmark.name,
            bookmark.group.as_deref().unwrap_or("-")
        )]
    }

    fn finish(&mut self, dry_run: bool) -> Result<()> {
        if dry_run {
            return Ok(());
        }

        self.favorites
            .set(GENERAL_SECTION, ROOT_COUNT_KEY, self.next_index.to_string());

        let path = self.layout.favorites_path();
        fs::write(&path, self.favorites.to_string())
            .with_context(|| format!("Failed to write favorites {}", path.display()))?;
        tracing::info!("Updated {:?} with RootCount={}", path, self.next_index);
        Ok(())
    }
}

/// Reads `RootCount` from `[General]`; absent or non-numeric counts are 0.
pub fn root_count(favorites: &IniDocument) -> u64 {
    favorites
        .get(GENERAL_SECTION, ROOT_COUNT_KEY)
        .map(str::trim)
        .filter(|v| !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

/// `SSH_SSH_<idx>_<name>.rrc` or `Telnet_Telnet_<idx>_<name>.rrc`.
pub fn rabbit_file_name(bookmark: &Bookmark, index: u64) -> Option<String> {
    let tag = match bookmark.protocol {
        Protocol::Ssh => "SSH",
        Protocol::Telnet => "Telnet",
        Protocol::Unknown(_) => return None,
    };
    let name = sanitize_file_name(&bookmark.name);
    Some(format!("{tag}_{tag}_{index}_{}.rrc", name.trim_matches('_')))
}

/// Renders a Rabbit `.rrc` profile. Returns `None` for unsupported protocols.
pub fn render_rabbit(bookmark: &Bookmark) -> Option<String> {
    let (plugin, key_bindings, key_path) = match bookmark.protocol {
        Protocol::Ssh => ("SSH", "default", Some(bookmark.key_path.as_deref())),
        Protocol::Telnet => ("Telnet", "vt420pc", None),
        Protocol::Unknown(_) => return None,
    };

    let mut lines = vec![
        "[General]".to_string(),
        format!("Name={}", bookmark.name),
    ];
    if let Some(group) = &bookmark.group {
        lines.push(format!("Group={group}"));
    }
    lines.extend(["", "[Manage]", "FileVersion=1", ""].map(String::from));

    lines.push("[Net]".to_string());
    lines.push(format!("Host={}", bookmark.host));
    lines.push(format!("Port={}", bookmark.port_or_default()));
    lines.push(String::new());

    lines.push("[Plugin]".to_string());
    lines.push(format!("ID=1:{plugin}:{plugin}"));
    lines.push(format!("Name={plugin}"));
    lines.push(format!("Protocol={plugin}"));
    lines.push(String::new());

    lines.extend(terminal_block(key_bindings));
    lines.extend(user_block(&bookmark.user, key_path));

    Some(lines.join("\n"))
}

fn terminal_block(key_bindings: &str) -> Vec<String> {
    let mut block: Vec<String> = [
        "[Terminal]",
        "BackgroupImage=",
        "ColorScheme=GreenOnBlack",
        "Commands=@Invalid()",
        "Directional=true",
        "Font=\"DejaVu Sans Mono,12,-1,2,400,0,0,0,0,0,0,0,0,0,0,1\"",
        "HistorySize=1000",
    ]
    .map(String::from)
    .into();

    block.push(format!("KeyBindings={key_bindings}"));
    block.extend(
        [
            "SizeHint=false",
            "TextCodec=UTF-8",
            "Transparency=0",
            "cursorShape=0",
            "disableBracketedPasteMode=false",
            "flowControl=false",
            "flowControlWarning=false",
            "motionAfterPasting=false",
            "scrollBarPosition=2",
            "",
        ]
        .map(String::from),
    );
    block
}

/// `key_path` is `None` for protocols without key authentication.
fn user_block(user: &str, key_path: Option<Option<&str>>) -> Vec<String> {
    let (private_key, types, used) = match key_path {
        Some(Some(key)) => (key, "2, 3", "3"),
        Some(None) => ("", "2, 3", "2"),
        None => ("", "2", "2"),
    };

    vec![
        "[User]".to_string(),
        "Authentication\\PublicKey\\File\\CA=".to_string(),
        "Authentication\\PublicKey\\File\\CRL=".to_string(),
        format!("Authentication\\PublicKey\\File\\PrivateKey={private_key}"),
        "Authentication\\PublicKey\\File\\PublicKey=".to_string(),
        "Authentication\\PublicKey\\File\\SavePassphrase=false".to_string(),
        "Authentication\\PublicKey\\File\\UseSystemFile=true".to_string(),
        "Authentication\\SavePassword=false".to_string(),
        format!("Authentication\\Type={types}"),
        format!("Authentication\\Type\\Used={used}"),
        format!("Name={user}"),
        String::new(),
    ]
}

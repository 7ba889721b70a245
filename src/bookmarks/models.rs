//! Bookmark record model.
//!
//! A [`Bookmark`] is built from one export line, rendered by a target and
//! dropped. Nothing here outlives a single conversion run.

use std::fmt;

/// The connection protocol of a bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Protocol {
    /// Secure shell, default port 22.
    Ssh,
    /// Telnet, default port 23.
    Telnet,
    /// A protocol no target knows how to render.
    ///
    /// The type-code classifier never yields this; targets skip and count
    /// such records so that adding a new type code is not silently lossy.
    Unknown(String),
}

impl Protocol {
    /// Classifies a MobaXterm type code such as `#109#0`.
    ///
    /// `#109` prefixes are SSH, `#98` prefixes are Telnet, and everything
    /// else falls back to SSH.
    #[allow(clippy::if_same_then_else)]
    pub fn from_type_code(code: &str) -> Self {
        if code.starts_with("#109") {
            Protocol::Ssh
        } else if code.starts_with("#98") {
            Protocol::Telnet
        } else {
            Protocol::Ssh
        }
    }

    /// The port used when the bookmark does not specify one.
    pub fn default_port(&self) -> Option<&'static str> {
        match self {
            Protocol::Ssh => Some("22"),
            Protocol::Telnet => Some("23"),
            Protocol::Unknown(_) => None,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Ssh => write!(f, "SSH"),
            Protocol::Telnet => write!(f, "TELNET"),
            Protocol::Unknown(code) => write!(f, "{code}"),
        }
    }
}

/// One connection parsed from a bookmark export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    /// Display label, trimmed
    pub name: String,

    /// Protocol inferred from the type code
    pub protocol: Protocol,

    /// Hostname or IP address, may be empty
    pub host: String,

    /// Port, already defaulted from the protocol when absent
    pub port: String,

    /// Login user, may be empty
    pub user: String,

    /// Absolute path of the private key, when one was referenced
    pub key_path: Option<String>,

    /// Folder the bookmark was listed under
    pub group: Option<String>,
}

impl Bookmark {
    /// The port to write, falling back to the protocol default when empty.
    pub fn port_or_default(&self) -> &str {
        if self.port.is_empty() {
            self.protocol.default_port().unwrap_or("")
        } else {
            &self.port
        }
    }
}

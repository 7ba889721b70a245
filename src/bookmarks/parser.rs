//! Bookmark record parser.
//!
//! Parses the right-hand side of a `name=fields` line. Fields are separated
//! by `%`:
//!
//! ```text
//! #109#0%10.57.1.10%22%root%%-1%-1%_ProfileDir_\.ssh\id_ed25519%%...
//!   |        |       |   |                 |
//!   |        |       |   |                 +-- private key (any field)
//!   |        |       |   +-- user
//!   |        |       +-- port
//!   |        +-- host
//!   +-- type code
//! ```
//!
//! Parsing never fails. Missing or empty fields fall back to defaults.

use std::path::Path;

use super::models::{Bookmark, Protocol};

/// Placeholder MobaXterm writes in place of its profile directory.
const PROFILE_DIR_PLACEHOLDER: &str = "_ProfileDir_\\";

/// Directory name marking a field as a key path.
const KEY_DIR_MARKER: &str = ".ssh";

/// Parses one bookmark from its name and `%`-separated fields.
///
/// `group` is the folder active when the line was read and `home` is used to
/// anchor relative key paths.
pub fn parse_record(name: &str, fields: &str, group: Option<&str>, home: &Path) -> Bookmark {
    let parts: Vec<&str> = fields.split('%').collect();

    let protocol = Protocol::from_type_code(parts.first().copied().unwrap_or_default());
    let default_port = protocol.default_port().unwrap_or_default();

    let field = |index: usize| {
        parts
            .get(index)
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
    };

    let host = field(1).unwrap_or_default().to_string();
    let port = field(2).unwrap_or(default_port).to_string();
    let user = field(3).unwrap_or_default().to_string();

    let key_path = find_key_path(&parts).map(|raw| normalize_key_path(raw, home));

    let group = group
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(String::from);

    Bookmark {
        name: name.trim().to_string(),
        protocol,
        host,
        port,
        user,
        key_path,
        group,
    }
}

/// Returns the first field that references a `.ssh` directory.
///
/// The match is case-sensitive and works for both `\.ssh` and `/.ssh`.
pub fn find_key_path<'a>(parts: &[&'a str]) -> Option<&'a str> {
    parts
        .iter()
        .copied()
        .find(|p| p.contains(KEY_DIR_MARKER))
}

/// Turns a MobaXterm key reference into an absolute forward-slash path.
///
/// Strips the `_ProfileDir_` placeholder, converts backslashes, and anchors
/// the result at `home` unless it is already absolute. Applying it to its own
/// output returns the same path.
pub fn normalize_key_path(raw: &str, home: &Path) -> String {
    let stripped = raw.trim().replace(PROFILE_DIR_PLACEHOLDER, "");
    let mut path = stripped.replace('\\', "/");

    if let Some(rest) = path.strip_prefix("_ProfileDir_/") {
        path = rest.to_string();
    }

    if path.starts_with('/') {
        return path;
    }

    let home = home.to_string_lossy();
    format!("{}/{}", home.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: &str = "/home/tester";

    fn parse(name: &str, fields: &str) -> Bookmark {
        parse_record(name, fields, None, Path::new(HOME))
    }

    #[test]
    fn test_parse_ssh_with_empty_port_uses_default() {
        let bookmark = parse("MyServer", "#109#0%10.0.0.5%%root%%-1%-1%%%%%0%0%0%%%-1%");

        assert_eq!(bookmark.name, "MyServer");
        assert_eq!(bookmark.protocol, Protocol::Ssh);
        assert_eq!(bookmark.host, "10.0.0.5");
        assert_eq!(bookmark.port, "22");
        assert_eq!(bookmark.user, "root");
        assert!(bookmark.key_path.is_none());
        assert!(bookmark.group.is_none());
    }

    #[test]
    fn test_parse_explicit_port() {
        let bookmark = parse("web", "#109#0%web.example.com%2222%deploy%%-1%-1%");
        assert_eq!(bookmark.port, "2222");
        assert_eq!(bookmark.user, "deploy");
    }

    #[test]
    fn test_parse_telnet_defaults_to_port_23() {
        let bookmark = parse("switch", "#98#1%192.168.1.2%%%%");
        assert_eq!(bookmark.protocol, Protocol::Telnet);
        assert_eq!(bookmark.port, "23");
        assert_eq!(bookmark.user, "");
    }

    #[test]
    fn test_parse_unknown_type_code_is_ssh() {
        let bookmark = parse("odd", "#91#4%host%%admin");
        assert_eq!(bookmark.protocol, Protocol::Ssh);
        assert_eq!(bookmark.port, "22");
    }

    #[test]
    fn test_parse_short_record_uses_defaults() {
        let bookmark = parse("lonely", "#109#0%10.1.1.1");
        assert_eq!(bookmark.host, "10.1.1.1");
        assert_eq!(bookmark.port, "22");
        assert_eq!(bookmark.user, "");

        let bookmark = parse("bare", "#98#0");
        assert_eq!(bookmark.host, "");
        assert_eq!(bookmark.port, "23");

        let bookmark = parse("empty", "");
        assert_eq!(bookmark.protocol, Protocol::Ssh);
        assert_eq!(bookmark.port, "22");
    }

    #[test]
    fn test_parse_trims_fields() {
        let bookmark = parse("  spaced  ", "#109#0% 10.0.0.9 % 2200 % admin %");
        assert_eq!(bookmark.name, "spaced");
        assert_eq!(bookmark.host, "10.0.0.9");
        assert_eq!(bookmark.port, "2200");
        assert_eq!(bookmark.user, "admin");
    }

    #[test]
    fn test_parse_whitespace_port_uses_default() {
        let bookmark = parse("ws", "#109#0%host%   %user");
        assert_eq!(bookmark.port, "22");
    }

    #[test]
    fn test_parse_key_path_from_profile_dir() {
        let bookmark = parse(
            "keyed",
            "#109#0%10.0.0.7%22%root%%-1%-1%_ProfileDir_\\.ssh\\id_ed25519%%",
        );
        assert_eq!(
            bookmark.key_path.as_deref(),
            Some("/home/tester/.ssh/id_ed25519")
        );
    }

    #[test]
    fn test_parse_telnet_with_key_renders_password_only() {
        let bookmark = parse(
            "switch",
            "#98#1%10.0.0.3%%admin%%-1%-1%_ProfileDir_\\.ssh\\id_rsa%%",
        );
        assert_eq!(bookmark.protocol, Protocol::Telnet);
        assert_eq!(bookmark.key_path.as_deref(), Some("/home/tester/.ssh/id_rsa"));

        let remmina = crate::targets::remmina::render_remmina(&bookmark).expect("renders");
        assert!(!remmina.contains("ssh_"));
        let putty = crate::targets::putty::render_putty(&bookmark).expect("renders");
        assert!(!putty.contains("PublicKeyFile"));
        let rabbit = crate::targets::rabbit::render_rabbit(&bookmark).expect("renders");
        assert!(rabbit.contains("Authentication\\Type\\Used=2\n"));
    }

    #[test]
    fn test_parse_carries_group() {
        let bookmark = parse_record("db", "#109#0%db1", Some(" Databases "), Path::new(HOME));
        assert_eq!(bookmark.group.as_deref(), Some("Databases"));

        let bookmark = parse_record("db", "#109#0%db1", Some("  "), Path::new(HOME));
        assert!(bookmark.group.is_none());
    }

    #[test]
    fn test_find_key_path_first_match_wins() {
        let parts = ["#109#0", "host", "/a/.ssh/first", "/b/.ssh/second"];
        assert_eq!(find_key_path(&parts), Some("/a/.ssh/first"));
    }

    #[test]
    fn test_find_key_path_is_case_sensitive() {
        let parts = ["#109#0", "host", "C:\\Keys\\.SSH\\id_rsa"];
        assert_eq!(find_key_path(&parts), None);
    }

    #[test]
    fn test_normalize_key_path_relative() {
        assert_eq!(
            normalize_key_path("keys\\work\\.ssh\\id_rsa", Path::new(HOME)),
            "/home/tester/keys/work/.ssh/id_rsa"
        );
    }

    #[test]
    fn test_normalize_key_path_forward_slash_placeholder() {
        assert_eq!(
            normalize_key_path("_ProfileDir_/.ssh/id_rsa", Path::new(HOME)),
            "/home/tester/.ssh/id_rsa"
        );
    }

    #[test]
    fn test_normalize_key_path_absolute_unchanged() {
        assert_eq!(
            normalize_key_path("/etc/keys/.ssh/id_rsa", Path::new(HOME)),
            "/etc/keys/.ssh/id_rsa"
        );
    }

    #[test]
    fn test_normalize_key_path_is_idempotent() {
        let home = Path::new("/home/tester/");
        for raw in [
            "_ProfileDir_\\.ssh\\id_ed25519",
            "_ProfileDir_/.ssh/id_rsa",
            "relative\\.ssh\\key",
            "/abs/.ssh/key",
        ] {
            let once = normalize_key_path(raw, home);
            let twice = normalize_key_path(&once, home);
            assert_eq!(once, twice, "normalizing {raw:?} twice changed the path");
            assert!(once.starts_with('/'));
            assert!(!once.contains("//"));
        }
    }
}

//! Configuration management
//!
//! Resolves the directories every target writes into. The environment is read
//! once into [`Paths`] so that parsing and rendering can be exercised with
//! explicit values. An optional YAML file at
//! `$XDG_CONFIG_HOME/moba-convert/config.yaml` overrides the defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;

/// Bookmark export read when `--file` is not given.
pub const DEFAULT_SOURCE_FILE: &str = "./moba_bookmarks.txt";

/// Home and configuration directories of the current user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// The user's home directory.
    pub home: PathBuf,
    /// `$XDG_CONFIG_HOME`, or `~/.config` when unset.
    pub config_home: PathBuf,
}

impl Paths {
    pub fn new(home: impl Into<PathBuf>, config_home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            config_home: config_home.into(),
        }
    }

    /// Reads the home directory and `XDG_CONFIG_HOME` from the environment.
    pub fn from_env() -> Result<Self, ConvertError> {
        let home = dirs::home_dir().ok_or(ConvertError::HomeDirUnavailable)?;
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(".config"));
        Ok(Self { home, config_home })
    }

    /// Expands a leading `~` against the home directory.
    pub fn expand_tilde(&self, path: &Path) -> PathBuf {
        if path == Path::new("~") {
            return self.home.clone();
        }
        match path.strip_prefix("~") {
            Ok(rest) => self.home.join(rest),
            Err(_) => path.to_path_buf(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Bookmark export used when `--file` is omitted
    pub source_file: Option<PathBuf>,

    /// Remmina profile directory
    pub remmina_dir: Option<PathBuf>,

    /// PuTTY sessions directory used when no location flag is given
    pub putty_target: Option<PathBuf>,

    /// Rabbit Remote Control data directory (holds `etc/` and `share/`)
    pub rabbit_dir: Option<PathBuf>,
}

impl Config {
    /// Loads the config file if present, otherwise returns the defaults.
    pub fn load(paths: &Paths) -> Result<Self> {
        let path = Self::config_path(paths);
        if !path.is_file() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load_from(&path, paths)
    }

    /// Loads and expands a config file at an explicit location.
    pub fn load_from(path: &Path, paths: &Paths) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_saphyr::from_str(&content).map_err(|e| ConvertError::InvalidConfig {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        tracing::debug!("Loaded config from {:?}", path);
        Ok(config.expanded(paths))
    }

    pub fn config_path(paths: &Paths) -> PathBuf {
        paths.config_home.join("moba-convert").join("config.yaml")
    }

    fn expanded(self, paths: &Paths) -> Self {
        let expand = |p: Option<PathBuf>| p.map(|p| paths.expand_tilde(&p));
        Self {
            source_file: expand(self.source_file),
            remmina_dir: expand(self.remmina_dir),
            putty_target: expand(self.putty_target),
            rabbit_dir: expand(self.rabbit_dir),
        }
    }

    /// The bookmark export to read, honoring an explicit `--file`.
    pub fn source_file(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.source_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_FILE))
    }

    pub fn remmina_dir(&self, paths: &Paths) -> PathBuf {
        self.remmina_dir
            .clone()
            .unwrap_or_else(|| paths.home.join(".local/share/remmina"))
    }

    pub fn rabbit_dir(&self, paths: &Paths) -> PathBuf {
        self.rabbit_dir
            .clone()
            .unwrap_or_else(|| paths.home.join("Documents/Rabbit/RabbitRemoteControl"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_paths() -> Paths {
        Paths::new("/home/tester", "/home/tester/.config")
    }

    #[test]
    fn test_expand_tilde() {
        let paths = test_paths();
        assert_eq!(
            paths.expand_tilde(Path::new("~/sessions")),
            PathBuf::from("/home/tester/sessions")
        );
        assert_eq!(paths.expand_tilde(Path::new("~")), PathBuf::from("/home/tester"));
        assert_eq!(
            paths.expand_tilde(Path::new("/srv/putty")),
            PathBuf::from("/srv/putty")
        );
        assert_eq!(
            paths.expand_tilde(Path::new("relative/dir")),
            PathBuf::from("relative/dir")
        );
    }

    #[test]
    fn test_default_directories() {
        let paths = test_paths();
        let config = Config::default();
        assert_eq!(
            config.remmina_dir(&paths),
            PathBuf::from("/home/tester/.local/share/remmina")
        );
        assert_eq!(
            config.rabbit_dir(&paths),
            PathBuf::from("/home/tester/Documents/Rabbit/RabbitRemoteControl")
        );
        assert_eq!(config.source_file(None), PathBuf::from(DEFAULT_SOURCE_FILE));
    }

    #[test]
    fn test_cli_source_file_wins() {
        let config = Config {
            source_file: Some(PathBuf::from("/data/from-config.txt")),
            ..Config::default()
        };
        assert_eq!(
            config.source_file(Some(PathBuf::from("cli.txt"))),
            PathBuf::from("cli.txt")
        );
        assert_eq!(
            config.source_file(None),
            PathBuf::from("/data/from-config.txt")
        );
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempdir().expect("Failed to create temp directory");
        let paths = Paths::new(dir.path(), dir.path().join(".config"));
        let config = Config::load(&paths).expect("Should load defaults");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_yaml_expands_tilde() {
        let dir = tempdir().expect("Failed to create temp directory");
        let paths = Paths::new("/home/tester", dir.path());
        let config_dir = dir.path().join("moba-convert");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        fs::write(
            config_dir.join("config.yaml"),
            "remmina_dir: ~/remmina-profiles\nrabbit_dir: /opt/rabbit\n",
        )
        .expect("Failed to write config");

        let config = Config::load(&paths).expect("Should load config");
        assert_eq!(
            config.remmina_dir(&paths),
            PathBuf::from("/home/tester/remmina-profiles")
        );
        assert_eq!(config.rabbit_dir(&paths), PathBuf::from("/opt/rabbit"));
        assert!(config.putty_target.is_none());
    }

    #[test]
    fn test_load_empty_file_returns_default() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.yaml");
        fs::write(&path, "\n").expect("Failed to write config");

        let config = Config::load_from(&path, &test_paths()).expect("Should load");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_yaml_errors() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.yaml");
        fs::write(&path, "remmina_dir: [unterminated\n").expect("Failed to write config");

        let result = Config::load_from(&path, &test_paths());
        assert!(result.is_err());
    }
}

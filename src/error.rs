//! Error types for bookmark conversion.

use std::path::PathBuf;

/// Hint printed alongside a missing Rabbit Remote Control layout.
pub const RABBIT_SETUP_HINT: &str = "Open Rabbit once, create a dummy connection, then close it.";

/// Fatal conditions detected before or during a conversion run.
///
/// Malformed bookmark lines are never reported here; the parser substitutes
/// defaults for missing fields instead.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The bookmark export does not exist or is not a regular file.
    #[error("input file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// A directory or file the target application must have created is absent.
    #[error("expected Rabbit path not found: {}\n{}", .0.display(), RABBIT_SETUP_HINT)]
    CompanionMissing(PathBuf),

    /// The home directory could not be determined from the environment.
    #[error("Could not find home directory")]
    HomeDirUnavailable,

    /// The config file exists but could not be parsed.
    #[error("Invalid config file {}: {message}", path.display())]
    InvalidConfig {
        /// Location of the config file.
        path: PathBuf,
        /// Parser error message.
        message: String,
    },
}

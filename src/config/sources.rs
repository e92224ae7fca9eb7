//! Configuration sources: the bundled default document, working-directory
//! resolution via `EOS_DIR`, and user config file location.

use crate::config::{CONFIG_FILE_NAME, EOS_DIR_ENV};
use crate::error::ConfigError;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Bundled canonical default configuration, shipped with the crate.
const BUNDLED_DEFAULT: &str = include_str!("default.config.json");

/// The default configuration document: schema authority and value source of
/// truth for merging. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct DefaultConfig {
    text: String,
    document: Map<String, Value>,
}

impl DefaultConfig {
    /// The default document bundled with the crate.
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_DEFAULT.to_string())
            .expect("bundled default configuration is valid JSON")
    }

    /// Load a default document from an alternate file, e.g. for tests that
    /// exercise the resolver against a custom schema.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(text).map_err(|source| ConfigError::Invalid {
            path: path.display().to_string(),
            source,
        })
    }

    fn parse(text: String) -> Result<Self, serde_json::Error> {
        let document: Map<String, Value> = serde_json::from_str(&text)?;
        Ok(Self { text, document })
    }

    /// The parsed document.
    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    /// The raw JSON text, as written when copying the default into a working
    /// directory.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for DefaultConfig {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Where the configuration was located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFile {
    /// A user config file on disk, candidate for migration.
    User(PathBuf),
    /// The bundled default document; read-only, never migrated.
    Bundled,
}

impl ConfigFile {
    /// Human-readable source name for log and error messages.
    pub fn describe(&self) -> String {
        match self {
            ConfigFile::User(path) => path.display().to_string(),
            ConfigFile::Bundled => "<bundled default>".to_string(),
        }
    }
}

/// Resolve the working directory: `EOS_DIR` if set (made absolute), the
/// current directory otherwise. Always succeeds.
pub fn working_directory() -> PathBuf {
    match std::env::var(EOS_DIR_ENV) {
        Ok(custom) => {
            let dir = absolutize(Path::new(&custom));
            info!(working_dir = %dir.display(), "custom working directory provided");
            dir
        }
        Err(_) => {
            let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            info!(working_dir = %dir.display(), "no custom working directory, using current directory");
            dir
        }
    }
}

/// Make a path absolute without requiring it to exist.
pub(crate) fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Locate the config file under `working_dir`.
///
/// Falls back to the bundled default when the directory or file is missing;
/// with `copy_default` set and an existing directory, writes the default
/// there first. Copy failures degrade to the bundled document, never error.
pub(crate) fn locate(working_dir: &Path, copy_default: bool, default: &DefaultConfig) -> ConfigFile {
    let candidate = working_dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        info!(path = %candidate.display(), "using configuration file");
        return ConfigFile::User(candidate);
    }

    if !working_dir.is_dir() {
        warn!(path = %working_dir.display(), "working directory does not exist, using default configuration");
        return ConfigFile::Bundled;
    }

    if !copy_default {
        info!("no custom configuration provided, using default configuration");
        return ConfigFile::Bundled;
    }

    match fs::write(&candidate, default.text()) {
        Ok(()) => {
            info!(path = %candidate.display(), "copied default configuration");
            ConfigFile::User(candidate)
        }
        Err(error) => {
            warn!(%error, "could not copy default configuration, using default directly");
            ConfigFile::Bundled
        }
    }
}

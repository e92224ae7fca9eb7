//! Loader facade tying the sources and merge rules together.

use crate::config::sources::{self, ConfigFile, DefaultConfig};
use crate::config::{merge, AppConfig, BaseConfig};
use crate::error::ConfigError;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Options for [`ConfigLoader::load_with`].
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Copy the default document into the working directory when no user
    /// config file exists there.
    pub copy_default: bool,
    /// Persist the merged document over a stale user file.
    pub update_outdated: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            copy_default: false,
            update_outdated: true,
        }
    }
}

/// Resolves the application configuration against an explicit default
/// document, so callers (and tests) control the schema authority instead of
/// relying on process-wide state.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    default: DefaultConfig,
}

impl ConfigLoader {
    /// Loader backed by the bundled default document.
    pub fn bundled() -> Self {
        Self::new(DefaultConfig::bundled())
    }

    /// Loader backed by the given default document.
    pub fn new(default: DefaultConfig) -> Self {
        Self { default }
    }

    /// The default document this loader resolves against.
    pub fn default_config(&self) -> &DefaultConfig {
        &self.default
    }

    /// Load the application configuration with default options: no default
    /// copy, stale user files migrated in place.
    pub fn load(&self, working_dir: &Path) -> Result<AppConfig, ConfigError> {
        self.load_with(working_dir, LoadOptions::default())
    }

    /// Load the application configuration from `working_dir`.
    ///
    /// Resolves the working directory to an absolute path, locates the config
    /// file, migrates it if stale and requested, then validates the result.
    /// The only failure mode surfaced to callers is a [`ConfigError`] naming
    /// the offending source and the underlying diagnostic.
    pub fn load_with(
        &self,
        working_dir: &Path,
        options: LoadOptions,
    ) -> Result<AppConfig, ConfigError> {
        let working_dir = sources::absolutize(working_dir);

        let file = self.locate(&working_dir, options.copy_default);
        self.apply_update(&file, options.update_outdated)?;

        let text = match &file {
            ConfigFile::User(path) => {
                fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?
            }
            ConfigFile::Bundled => self.default.text().to_string(),
        };

        let base: BaseConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Invalid {
                path: file.describe(),
                source,
            })?;

        Ok(AppConfig {
            directories: base.directories,
            eos: base.eos,
            working_dir,
        })
    }

    /// Locate the config file under `working_dir`. Never fails: missing
    /// directories or copy errors fall back to the bundled document.
    pub fn locate(&self, working_dir: &Path, copy_default: bool) -> ConfigFile {
        sources::locate(working_dir, copy_default, &self.default)
    }

    /// Detect whether a user config file is stale relative to the default
    /// document, and migrate it in place when `persist` is set.
    ///
    /// Returns whether an update was found, regardless of persistence. The
    /// bundled source has nothing to migrate and always reports `false`.
    pub fn apply_update(&self, file: &ConfigFile, persist: bool) -> Result<bool, ConfigError> {
        let ConfigFile::User(path) = file else {
            return Ok(false);
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let user: Map<String, Value> =
            serde_json::from_str(&text).map_err(|source| ConfigError::Invalid {
                path: path.display().to_string(),
                source,
            })?;

        let merged = merge::merge_documents(self.default.document(), &user);
        if !merge::update_available(&merged, &user) {
            debug!(path = %path.display(), "custom config is up-to-date");
            return Ok(false);
        }

        info!(path = %path.display(), "custom config is outdated");
        if persist {
            let pretty = merge::to_pretty_json(&merged).map_err(|source| ConfigError::Invalid {
                path: path.display().to_string(),
                source,
            })?;
            fs::write(path, pretty).map_err(|source| ConfigError::Write {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "migrated custom config");
        }
        Ok(true)
    }
}

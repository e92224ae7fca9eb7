//! Configuration System
//!
//! Resolves the EOS application configuration from a bundled default document
//! and an optional user `EOS.config.json`. The user file may be partial or
//! stale relative to the default schema; stale files are detected and can be
//! migrated forward in place, preserving user overrides. The default document
//! is the schema authority: keys it does not know are dropped on migration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::{ConfigLoader, LoadOptions};
pub use sources::{working_directory, ConfigFile, DefaultConfig};

/// Canonical user configuration filename, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "EOS.config.json";

/// Environment variable naming a custom working directory.
pub const EOS_DIR_ENV: &str = "EOS_DIR";

/// Folder configuration: paths interpreted relative to the working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderConfig {
    pub output: String,
    pub cache: String,
}

/// EOS-dependent parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EosConfig {
    pub prediction_hours: u32,
    pub optimization_hours: u32,
    pub penalty: i64,
    pub available_charging_rates_in_percentage: Vec<f64>,
}

/// The validated base configuration, as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseConfig {
    pub directories: FolderConfig,
    pub eos: EosConfig,
}

/// The application configuration handed to consumers: the validated base
/// configuration plus the resolved absolute working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub directories: FolderConfig,
    pub eos: EosConfig,
    pub working_dir: PathBuf,
}

impl AppConfig {
    /// Output directory resolved against the working directory.
    pub fn output_dir(&self) -> PathBuf {
        self.working_dir.join(&self.directories.output)
    }

    /// Cache directory resolved against the working directory.
    pub fn cache_dir(&self) -> PathBuf {
        self.working_dir.join(&self.directories.cache)
    }
}

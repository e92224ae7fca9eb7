//! EOS: Configuration Resolution for Energy Optimization
//!
//! Resolves the application configuration for the EOS energy-optimization
//! system: a bundled default document is overlaid with an optional user
//! `EOS.config.json`, stale user files are migrated forward while preserving
//! user overrides, and the result is validated into a typed configuration.

pub mod config;
pub mod error;
pub mod horizon;
pub mod logging;

// Configuration module for cassandra-provision
//
// Provides:
// - YAML settings file loading
// - Environment variable substitution
// - Settings validation
// - Default values

pub mod types;
mod loader;

pub use types::*;
pub use loader::ConfigLoader;

use anyhow::{Context, Result};
use std::path::Path;

/// Load settings from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ProvisionConfig> {
    ConfigLoader::load(path).context("Failed to load settings")
}

/// Load settings with environment variable overrides
///
/// With no settings file every field takes its built-in default.
pub fn load_config_with_env<P: AsRef<Path>>(path: Option<P>) -> Result<ProvisionConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ProvisionConfig::default(),
    };

    // Allow environment variables to override settings values
    if let Ok(yaml_path) = std::env::var("CASSANDRA_YAML") {
        config.yaml_path = yaml_path;
    }

    if let Ok(keystore) = std::env::var("CASSANDRA_KEYSTORE") {
        config.tls.keystore = keystore;
    }

    if let Ok(truststore) = std::env::var("CASSANDRA_TRUSTSTORE") {
        config.tls.truststore = truststore;
    }

    Ok(config)
}

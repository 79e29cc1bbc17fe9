// Settings loader with environment variable substitution

use super::types::*;
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from file with environment variable substitution
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ProvisionConfig> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read settings file")?;

        // Substitute environment variables
        let content = Self::substitute_env_vars(&content);

        // Parse YAML
        let config: ProvisionConfig = serde_yaml::from_str(&content)
            .context("Failed to parse YAML settings")?;

        // Validate settings
        Self::validate(&config)?;

        Ok(config)
    }

    /// Substitute ${VAR} and ${VAR:-default} patterns with environment variables
    ///
    /// Examples:
    /// - ${HOME} -> /home/user
    /// - ${KEYSTORE_PASSWORD:-cassandra} -> cassandra (if not set)
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}:]+)(?::-([^}]+))?\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            let default_value = caps.get(2).map(|m| m.as_str());

            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if let Some(default) = default_value {
                        default.to_string()
                    } else {
                        // Keep original if no default and var not found
                        format!("${{{}}}", var_name)
                    }
                }
            }
        }).to_string()
    }

    /// Validate settings
    pub(crate) fn validate(config: &ProvisionConfig) -> Result<()> {
        if config.yaml_path.is_empty() {
            bail!("yaml_path cannot be empty");
        }

        if config.tls.keystore.is_empty() {
            bail!("tls.keystore cannot be empty");
        }

        if config.tls.truststore.is_empty() {
            bail!("tls.truststore cannot be empty");
        }

        if config.partitioner.byte_ordered_class.is_empty() {
            bail!("partitioner.byte_ordered_class cannot be empty");
        }

        if config.partitioner.initial_token.is_empty()
            || !config.partitioner.initial_token.chars().all(|c| c.is_ascii_hexdigit())
        {
            bail!("partitioner.initial_token must be a non-empty hex token");
        }

        if config.partitioner.default_num_tokens == 0 {
            bail!("partitioner.default_num_tokens must be > 0");
        }

        Ok(())
    }
}

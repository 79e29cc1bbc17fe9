// Copyright 2025 coScene
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Configuration types for cassandra-provision

use serde::{Deserialize, Serialize};

/// Main configuration structure
///
/// Every field has a default so the tool runs without a settings file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProvisionConfig {
    /// Path to the Cassandra YAML file rewritten in place
    #[serde(default = "default_yaml_path")]
    pub yaml_path: String,

    #[serde(default)]
    pub tls: TlsSettings,

    #[serde(default)]
    pub partitioner: PartitionerSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            yaml_path: default_yaml_path(),
            tls: TlsSettings::default(),
            partitioner: PartitionerSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Keystore and truststore material written into the encryption block
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsSettings {
    #[serde(default = "default_keystore")]
    pub keystore: String,

    #[serde(default = "default_keystore_password")]
    pub keystore_password: String,

    #[serde(default = "default_truststore")]
    pub truststore: String,

    #[serde(default = "default_truststore_password")]
    pub truststore_password: String,
}

impl Default for TlsSettings {
    fn default() -> Self {
        Self {
            keystore: default_keystore(),
            keystore_password: default_keystore_password(),
            truststore: default_truststore(),
            truststore_password: default_truststore_password(),
        }
    }
}

/// Partitioner and token-ring settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PartitionerSettings {
    /// Fully qualified class name written when the BOP flag is set
    #[serde(default = "default_bop_class")]
    pub byte_ordered_class: String,

    /// Token assigned to the node under the byte-ordered partitioner
    #[serde(default = "default_initial_token")]
    pub initial_token: String,

    /// num_tokens value written when the BOP flag is not set
    #[serde(default = "default_num_tokens")]
    pub default_num_tokens: u32,
}

impl Default for PartitionerSettings {
    fn default() -> Self {
        Self {
            byte_ordered_class: default_bop_class(),
            initial_token: default_initial_token(),
            default_num_tokens: default_num_tokens(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String, // "trace", "debug", "info", "warn", "error"

    #[serde(default = "default_log_format")]
    pub format: String, // "text", "json"
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Default value functions
fn default_yaml_path() -> String { "/etc/cassandra/cassandra.yaml".to_string() }
fn default_keystore() -> String { "/etc/cassandra/conf/test.keystore".to_string() }
fn default_keystore_password() -> String { "cassandra".to_string() }
fn default_truststore() -> String { "/etc/cassandra/conf/test.truststore".to_string() }
fn default_truststore_password() -> String { "cassandra".to_string() }
fn default_bop_class() -> String {
    "org.apache.cassandra.dht.ByteOrderedPartitioner".to_string()
}
fn default_initial_token() -> String {
    "0000000000000000000000000000000000000000".to_string()
}
fn default_num_tokens() -> u32 { 4 }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "text".to_string() }

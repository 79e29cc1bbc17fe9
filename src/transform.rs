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

// Flag-driven rewrites of the Cassandra YAML document

use crate::config::ProvisionConfig;
use crate::document::YamlDocument;
use crate::flags::ProvisionFlags;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Section holding client-to-node TLS settings
pub const ENCRYPTION_SECTION: &str = "client_encryption_options";

/// Apply all flag-driven transformations to the document
///
/// The TLS and client-auth passes are independent and both run when both
/// flags are set (each forces `enabled: true`). The partitioner branches
/// are mutually exclusive. Every edit replaces one full line, so applying
/// the same flags to already-transformed output changes nothing.
pub fn apply(doc: &mut YamlDocument, flags: &ProvisionFlags, config: &ProvisionConfig) -> Result<()> {
    if flags.ssl {
        enable_tls(doc, config).context("Failed to enable TLS")?;
    } else {
        debug!("TLS flag not set, leaving encryption options untouched");
    }

    if flags.client_auth {
        enable_client_auth(doc, config).context("Failed to enable client auth")?;
    } else {
        debug!("Client-auth flag not set");
    }

    apply_partitioner(doc, flags, config)?;

    Ok(())
}

/// Turn on client-to-node TLS with the configured keystore
fn enable_tls(doc: &mut YamlDocument, config: &ProvisionConfig) -> Result<()> {
    info!("Enabling TLS in {}", ENCRYPTION_SECTION);

    doc.set_in_section(ENCRYPTION_SECTION, "enabled", "true")?;
    doc.set_in_section(ENCRYPTION_SECTION, "keystore", &config.tls.keystore)?;
    doc.set_in_section(
        ENCRYPTION_SECTION,
        "keystore_password",
        &config.tls.keystore_password,
    )?;

    Ok(())
}

/// Require client certificate authentication with the configured truststore
///
/// Also forces `enabled: true`, so client auth works even when the TLS flag
/// was not set on its own.
fn enable_client_auth(doc: &mut YamlDocument, config: &ProvisionConfig) -> Result<()> {
    info!("Enabling client certificate auth in {}", ENCRYPTION_SECTION);

    doc.set_in_section(ENCRYPTION_SECTION, "enabled", "true")?;
    doc.set_in_section(ENCRYPTION_SECTION, "require_client_auth", "true")?;
    doc.set_in_section(ENCRYPTION_SECTION, "truststore", &config.tls.truststore)?;
    doc.set_in_section(
        ENCRYPTION_SECTION,
        "truststore_password",
        &config.tls.truststore_password,
    )?;

    Ok(())
}

/// Switch to the byte-ordered partitioner, or pin the default token count
fn apply_partitioner(
    doc: &mut YamlDocument,
    flags: &ProvisionFlags,
    config: &ProvisionConfig,
) -> Result<()> {
    if flags.byte_ordered_partitioner {
        info!(
            "Switching partitioner to {}",
            config.partitioner.byte_ordered_class
        );

        doc.set_top_level("partitioner", &config.partitioner.byte_ordered_class)
            .context("Failed to rewrite partitioner")?;
        doc.uncomment_top_level("initial_token", &config.partitioner.initial_token)
            .context("Failed to set initial_token")?;
        doc.comment_out_top_level("num_tokens")
            .context("Failed to comment out num_tokens")?;
    } else {
        let count = config.partitioner.default_num_tokens.to_string();
        info!("Setting num_tokens to {}", count);

        doc.set_top_level("num_tokens", &count)
            .context("Failed to rewrite num_tokens")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
cluster_name: 'Test Cluster'
num_tokens: 256
# initial_token:
partitioner: org.apache.cassandra.dht.Murmur3Partitioner

client_encryption_options:
    enabled: false
    keystore: conf/.keystore
    keystore_password: cassandra
    require_client_auth: false
    truststore: conf/.truststore
    truststore_password: cassandra

rpc_address: localhost
";

    fn transformed(flags: ProvisionFlags) -> String {
        let config = ProvisionConfig::default();
        let mut doc = YamlDocument::parse(SAMPLE);
        apply(&mut doc, &flags, &config).unwrap();
        doc.render()
    }

    #[test]
    fn test_no_flags_only_num_tokens() {
        let out = transformed(ProvisionFlags::default());
        assert!(out.contains("\nnum_tokens: 4\n"));
        assert!(out.contains("    enabled: false\n"));
        assert!(out.contains("partitioner: org.apache.cassandra.dht.Murmur3Partitioner"));
    }

    #[test]
    fn test_ssl_flag() {
        let out = transformed(ProvisionFlags {
            ssl: true,
            ..Default::default()
        });
        assert!(out.contains("    enabled: true\n"));
        assert!(out.contains("    keystore: /etc/cassandra/conf/test.keystore\n"));
        assert!(out.contains("    keystore_password: cassandra\n"));
        // Client-auth fields untouched
        assert!(out.contains("    require_client_auth: false\n"));
        assert!(out.contains("    truststore: conf/.truststore\n"));
    }

    #[test]
    fn test_client_auth_without_ssl_forces_enabled() {
        let out = transformed(ProvisionFlags {
            client_auth: true,
            ..Default::default()
        });
        assert!(out.contains("    enabled: true\n"));
        assert!(out.contains("    require_client_auth: true\n"));
        assert!(out.contains("    truststore: /etc/cassandra/conf/test.truststore\n"));
        assert!(out.contains("    truststore_password: cassandra\n"));
        // Keystore untouched without the TLS flag
        assert!(out.contains("    keystore: conf/.keystore\n"));
    }

    #[test]
    fn test_ssl_and_client_auth_both_run() {
        let out = transformed(ProvisionFlags {
            ssl: true,
            client_auth: true,
            ..Default::default()
        });
        assert!(out.contains("    enabled: true\n"));
        assert!(out.contains("    keystore: /etc/cassandra/conf/test.keystore\n"));
        assert!(out.contains("    require_client_auth: true\n"));
        assert!(out.contains("    truststore: /etc/cassandra/conf/test.truststore\n"));
    }

    #[test]
    fn test_bop_flag() {
        let out = transformed(ProvisionFlags {
            byte_ordered_partitioner: true,
            ..Default::default()
        });
        assert!(out.contains("partitioner: org.apache.cassandra.dht.ByteOrderedPartitioner\n"));
        assert!(out.contains("\ninitial_token: 0000000000000000000000000000000000000000\n"));
        assert!(out.contains("\n# num_tokens: 256\n"));
        assert!(!out.contains("\nnum_tokens:"));
    }

    #[test]
    fn test_missing_encryption_section_is_fatal() {
        let config = ProvisionConfig::default();
        let mut doc = YamlDocument::parse("num_tokens: 256\n");
        let flags = ProvisionFlags {
            ssl: true,
            ..Default::default()
        };
        assert!(apply(&mut doc, &flags, &config).is_err());
    }

    #[test]
    fn test_idempotent_per_flag_set() {
        for flags in [
            ProvisionFlags::default(),
            ProvisionFlags { ssl: true, ..Default::default() },
            ProvisionFlags { client_auth: true, ..Default::default() },
            ProvisionFlags { ssl: true, client_auth: true, ..Default::default() },
            ProvisionFlags { byte_ordered_partitioner: true, ..Default::default() },
        ] {
            let config = ProvisionConfig::default();
            let once = transformed(flags);

            let mut doc = YamlDocument::parse(&once);
            apply(&mut doc, &flags, &config).unwrap();
            assert_eq!(doc.render(), once, "not idempotent for {:?}", flags);
        }
    }
}

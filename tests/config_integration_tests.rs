// Settings system integration tests

use cassandra_provision::config::{load_config, load_config_with_env, ProvisionConfig};
use std::fs;
use std::path::Path;

#[test]
fn test_settings_defaults() {
    let config = ProvisionConfig::default();

    assert_eq!(config.yaml_path, "/etc/cassandra/cassandra.yaml");
    assert_eq!(config.tls.keystore, "/etc/cassandra/conf/test.keystore");
    assert_eq!(config.tls.keystore_password, "cassandra");
    assert_eq!(config.tls.truststore, "/etc/cassandra/conf/test.truststore");
    assert_eq!(config.tls.truststore_password, "cassandra");
    assert_eq!(
        config.partitioner.byte_ordered_class,
        "org.apache.cassandra.dht.ByteOrderedPartitioner"
    );
    assert_eq!(config.partitioner.default_num_tokens, 4);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_load_settings_with_env_vars() {
    let temp_settings = r#"
yaml_path: /tmp/cassandra.yaml

tls:
  keystore: ${SETTINGS_TEST_KEYSTORE:-/keys/default.keystore}
  keystore_password: ${SETTINGS_TEST_KS_PASSWORD}

partitioner:
  default_num_tokens: 16

logging:
  level: debug
  format: text
"#;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let temp_path = dir.path().join("settings.yaml");
    fs::write(&temp_path, temp_settings).expect("Failed to write temp settings");

    std::env::set_var("SETTINGS_TEST_KEYSTORE", "/keys/node1.keystore");

    let result = load_config(&temp_path);
    assert!(result.is_ok(), "Failed to load settings: {:?}", result.err());

    let config = result.unwrap();
    assert_eq!(config.yaml_path, "/tmp/cassandra.yaml");
    assert_eq!(config.tls.keystore, "/keys/node1.keystore");
    // Unset variable with no default stays as-is
    assert_eq!(config.tls.keystore_password, "${SETTINGS_TEST_KS_PASSWORD}");
    // Omitted fields fall back to defaults
    assert_eq!(config.tls.truststore, "/etc/cassandra/conf/test.truststore");
    assert_eq!(config.partitioner.default_num_tokens, 16);
    assert_eq!(config.logging.level, "debug");

    std::env::remove_var("SETTINGS_TEST_KEYSTORE");
}

#[test]
fn test_settings_validation() {
    let invalid_settings = r#"
partitioner:
  default_num_tokens: 0
"#;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let temp_path = dir.path().join("invalid.yaml");
    fs::write(&temp_path, invalid_settings).expect("Failed to write temp settings");

    let result = load_config(&temp_path);
    assert!(result.is_err(), "Expected validation error");
    assert!(format!("{:#}", result.unwrap_err()).contains("default_num_tokens"));
}

#[test]
fn test_no_settings_file_uses_defaults() {
    let config = load_config_with_env(None::<&Path>).expect("defaults should load");
    assert_eq!(config.tls.keystore_password, "cassandra");
}

#[test]
fn test_yaml_path_env_override() {
    std::env::set_var("CASSANDRA_YAML", "/override/cassandra.yaml");

    let config = load_config_with_env(None::<&Path>).expect("defaults should load");
    assert_eq!(config.yaml_path, "/override/cassandra.yaml");

    std::env::remove_var("CASSANDRA_YAML");
}

#[test]
fn test_missing_settings_file_is_error() {
    let result = load_config("/nonexistent/settings.yaml");
    assert!(result.is_err());
}

// Environment flag reader for provisioning toggles

use tracing::debug;

/// Environment variable enabling client-to-node TLS.
pub const ENV_ENABLE_SSL: &str = "CASSANDRA_ENABLE_SSL";

/// Environment variable enabling client certificate authentication.
pub const ENV_ENABLE_CLIENT_AUTH: &str = "CASSANDRA_ENABLE_CLIENT_AUTH";

/// Environment variable enabling the byte-ordered partitioner.
pub const ENV_ENABLE_BOP: &str = "CASSANDRA_ENABLE_BOP";

/// Provisioning toggles resolved from the environment
///
/// Each flag maps to one environment variable, compared case-insensitively
/// to the literal "true". An unset variable reads as false for every flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProvisionFlags {
    /// Enable client-to-node TLS in the encryption options block
    pub ssl: bool,

    /// Require client certificate authentication (implies forcing TLS on)
    pub client_auth: bool,

    /// Switch the node to the byte-ordered partitioner
    pub byte_ordered_partitioner: bool,
}

impl ProvisionFlags {
    /// Resolve all flags from the process environment
    pub fn from_env() -> Self {
        let flags = Self {
            ssl: env_flag(ENV_ENABLE_SSL),
            client_auth: env_flag(ENV_ENABLE_CLIENT_AUTH),
            byte_ordered_partitioner: env_flag(ENV_ENABLE_BOP),
        };
        debug!("Resolved provisioning flags: {:?}", flags);
        flags
    }
}

/// Read a boolean flag from the environment
///
/// Returns true only when the variable is set and equals "true"
/// case-insensitively. An unset or differently-valued variable is false.
pub fn env_flag(name: &str) -> bool {
    match std::env::var(name) {
        Ok(value) => value.eq_ignore_ascii_case("true"),
        Err(_) => false,
    }
}

use serde::{Deserialize, Serialize};

use crate::protocol;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResponseConfig {
    /// Dotted-quad IPv4 address every answer points at.
    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            ttl: default_ttl(),
        }
    }
}

fn default_address() -> String {
    "6.6.6.6".to_string()
}

fn default_ttl() -> u32 {
    protocol::DEFAULT_TTL
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Stop after handling this many datagrams. Absent means run forever.
    #[serde(default)]
    pub max_packets: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_bind_address(),
            max_packets: None,
        }
    }
}

fn default_port() -> u16 {
    12345
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

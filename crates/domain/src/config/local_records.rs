use crate::errors::WireError;
use crate::wire::encode_ipv4;
use serde::{Deserialize, Serialize};

/// The record handed out for every question when no resolver is configured.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalAnswerConfig {
    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl LocalAnswerConfig {
    pub fn address_octets(&self) -> Result<[u8; 4], WireError> {
        encode_ipv4(&self.address)
    }
}

impl Default for LocalAnswerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            ttl: default_ttl(),
        }
    }
}

fn default_address() -> String {
    "8.8.8.8".to_string()
}

fn default_ttl() -> u32 {
    60
}

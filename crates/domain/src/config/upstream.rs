use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Where questions go when they are not answered locally.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// `IP:PORT` of the resolver to forward to. Unset means answer locally.
    #[serde(default)]
    pub resolver: Option<String>,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl UpstreamConfig {
    /// Parses `resolver`, if one is configured.
    pub fn resolver_addr(&self) -> Result<Option<SocketAddr>, String> {
        self.resolver
            .as_deref()
            .map(|addr| {
                addr.parse::<SocketAddr>()
                    .map_err(|e| format!("Invalid resolver address '{}': {}", addr, e))
            })
            .transpose()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            resolver: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    5000
}

//! API configuration from the environment.

use std::net::SocketAddr;

use anyhow::Context;

/// Environment variable holding the bind address.
pub const BIND_ADDR_ENV: &str = "GEDPARITY_BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.parse().expect("default addr parses"),
        }
    }
}

impl ApiConfig {
    /// Read `GEDPARITY_BIND_ADDR`, falling back to the default.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var(BIND_ADDR_ENV) {
            Ok(raw) if !raw.is_empty() => {
                let bind_addr = raw
                    .parse()
                    .with_context(|| format!("{BIND_ADDR_ENV} is not a socket address: {raw}"))?;
                Ok(Self { bind_addr })
            }
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_loopback() {
        let cfg = ApiConfig::default();
        assert!(cfg.bind_addr.ip().is_loopback());
        assert_eq!(cfg.bind_addr.port(), 8787);
    }
}

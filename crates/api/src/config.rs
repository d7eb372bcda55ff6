//! Runtime configuration read from the environment.

use std::net::SocketAddr;

use anyhow::{anyhow, Context};

use selfcare_observability::LogFormat;

pub const BIND_ADDR_ENV: &str = "SELFCARE_BIND_ADDR";
pub const LOG_FORMAT_ENV: &str = "SELFCARE_LOG_FORMAT";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults; set but unparsable keys are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup(BIND_ADDR_ENV)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .with_context(|| format!("{BIND_ADDR_ENV} must be a socket address"))?;

        let log_format = match lookup(LOG_FORMAT_ENV) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| anyhow!("invalid {LOG_FORMAT_ENV}: {e}"))?,
            None => LogFormat::default(),
        };

        Ok(Self { bind_addr, log_format })
    }
}

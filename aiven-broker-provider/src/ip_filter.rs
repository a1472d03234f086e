//! IP whitelist parsing and sourcing

use crate::error::ProviderError;

/// Environment variable holding the comma-separated IP whitelist
pub const IP_WHITELIST_ENV: &str = "IP_WHITELIST";

/// Parse a comma-separated whitelist into a list of addresses
///
/// An empty string means no restriction. Each segment must split into exactly
/// four dot-separated components. This is a syntactic check only: octet ranges
/// are not validated, so `999.1.1.1` is accepted. Parsing stops at the first
/// malformed segment.
pub fn parse_ip_whitelist(raw: &str) -> Result<Vec<String>, ProviderError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(|segment| {
            if segment.split('.').count() == 4 {
                Ok(segment.to_string())
            } else {
                Err(ProviderError::MalformedIpAddress(segment.to_string()))
            }
        })
        .collect()
}

/// Source of the current IP whitelist string
///
/// Queried on every provision and update so that changes are picked up
/// without a restart.
pub trait IpWhitelistSource: Send + Sync {
    fn ip_whitelist(&self) -> String;
}

/// Reads [`IP_WHITELIST_ENV`] on every call; unset means no restriction
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvIpWhitelist;

impl IpWhitelistSource for EnvIpWhitelist {
    fn ip_whitelist(&self) -> String {
        std::env::var(IP_WHITELIST_ENV).unwrap_or_default()
    }
}

/// Fixed whitelist string
#[derive(Debug, Clone, Default)]
pub struct StaticIpWhitelist(pub String);

impl StaticIpWhitelist {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl IpWhitelistSource for StaticIpWhitelist {
    fn ip_whitelist(&self) -> String {
        self.0.clone()
    }
}

/// Serializes tests that mutate [`IP_WHITELIST_ENV`]
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

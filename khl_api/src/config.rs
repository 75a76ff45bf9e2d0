//! Session configuration, built in code or read from the environment.

use std::fmt;
use std::time::Duration;

use crate::Error;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://www.kaiheila.cn/api/v3";

/// Request timeout applied to every exchange unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to build a [`Session`](crate::Session).
#[derive(Clone)]
pub struct SessionConfig {
    /// Sent verbatim as the `Authorization` header, e.g. `Bot 1/MTA=/abc`.
    pub token: String,
    pub base_url: String,
    /// Deadline for a whole exchange, body read included.
    pub timeout: Duration,
    /// Ask the gateway for a compressed websocket stream.
    pub compress: bool,
}

impl SessionConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            compress: false,
        }
    }

    /// Points the session at another API root. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Reads `KHL_TOKEN` (required), `KHL_API_BASE`, `KHL_TIMEOUT_SECS` and
    /// `KHL_COMPRESS` from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("KHL_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::Config("KHL_TOKEN is not set".to_string()))?;
        let mut config = Self::new(token);

        if let Some(base_url) = lookup("KHL_API_BASE").filter(|v| !v.is_empty()) {
            config.base_url = base_url;
        }
        if let Some(secs) = lookup("KHL_TIMEOUT_SECS") {
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                Error::Config(format!("KHL_TIMEOUT_SECS must be a number of seconds, got {secs:?}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(compress) = lookup("KHL_COMPRESS") {
            config.compress = parse_flag(&compress).ok_or_else(|| {
                Error::Config(format!("KHL_COMPRESS must be 1/0 or true/false, got {compress:?}"))
            })?;
        }
        Ok(config)
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("compress", &self.compress)
            .finish()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::{SessionConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
    use crate::Error;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn token_only_uses_defaults() {
        let config = SessionConfig::from_lookup(lookup(&[("KHL_TOKEN", "Bot abc")])).unwrap();
        assert_eq!(config.token, "Bot abc");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(!config.compress);
    }

    #[test]
    fn overrides() {
        let config = SessionConfig::from_lookup(lookup(&[
            ("KHL_TOKEN", "Bot abc"),
            ("KHL_API_BASE", "http://localhost:9000"),
            ("KHL_TIMEOUT_SECS", "5"),
            ("KHL_COMPRESS", "true"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.compress);
    }

    #[test]
    fn missing_token() {
        let err = SessionConfig::from_lookup(lookup(&[("KHL_TOKEN", "  ")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn bad_timeout() {
        let err = SessionConfig::from_lookup(lookup(&[
            ("KHL_TOKEN", "Bot abc"),
            ("KHL_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn debug_hides_token() {
        let rendered = format!("{:?}", SessionConfig::new("Bot secret"));
        assert!(!rendered.contains("secret"));
    }
}

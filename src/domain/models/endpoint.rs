use std::time::Duration;

use url::Url;

use crate::domain::DomainError;

/// Query endpoint of the GraphRAG server when nothing else is configured.
pub const DEFAULT_QUERY_URL: &str = "http://localhost:8000/query/";
pub const QUERY_URL_ENV: &str = "CHATBOX_QUERY_URL";
pub const TIMEOUT_ENV: &str = "CHATBOX_TIMEOUT_SECS";

/// Where queries are sent and how long a single exchange may take.
///
/// No timeout is applied unless one is configured explicitly; without it a
/// request that never resolves keeps the caller suspended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    url: Url,
    timeout: Option<Duration>,
}

impl EndpointConfig {
    pub fn new(url: &str) -> Result<Self, DomainError> {
        let parsed = Url::parse(url)
            .map_err(|e| DomainError::invalid_input(format!("invalid endpoint URL '{url}': {e}")))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(DomainError::invalid_input(format!(
                    "endpoint URL must use http or https, got '{other}'"
                )))
            }
        }

        Ok(Self {
            url: parsed,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Resolve the endpoint from explicit overrides, then the environment,
    /// then the default URL.
    ///
    /// | Source               | URL                 | Timeout                |
    /// |----------------------|---------------------|------------------------|
    /// | explicit argument    | `--endpoint`        | `--timeout-secs`       |
    /// | environment          | `CHATBOX_QUERY_URL` | `CHATBOX_TIMEOUT_SECS` |
    /// | default              | `DEFAULT_QUERY_URL` | none                   |
    pub fn resolve(url: Option<&str>, timeout_secs: Option<u64>) -> Result<Self, DomainError> {
        Self::resolve_with(url, timeout_secs, |key| std::env::var(key).ok())
    }

    pub(crate) fn resolve_with<F>(
        url: Option<&str>,
        timeout_secs: Option<u64>,
        lookup: F,
    ) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = match url {
            Some(u) => u.to_string(),
            None => lookup(QUERY_URL_ENV).unwrap_or_else(|| DEFAULT_QUERY_URL.to_string()),
        };

        let timeout_secs = match timeout_secs {
            Some(secs) => Some(secs),
            None => match lookup(TIMEOUT_ENV) {
                Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                    DomainError::config(format!("{TIMEOUT_ENV} must be a whole number of seconds: {e}"))
                })?),
                None => None,
            },
        };

        let config = Self::new(&url)?;
        match timeout_secs {
            Some(0) => Err(DomainError::config("timeout must be at least one second")),
            Some(secs) => Ok(config.with_timeout(Duration::from_secs(secs))),
            None => Ok(config),
        }
    }
}

use std::sync::Arc;

use crate::YahooConnector;
use crate::adapter::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, RealAdapter};

/// Builder for a [`YahooConnector`] with custom transport settings.
#[derive(Default)]
pub struct YahooConnectorBuilder {
    base_url: Option<String>,
    http: Option<reqwest::Client>,
    user_agent: Option<String>,
}

impl YahooConnectorBuilder {
    /// Point the connector at another host, e.g. a local mock server.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Reuse an existing HTTP client (pooling, proxies, timeouts).
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Override the browser-like default user agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Build the connector.
    #[must_use]
    pub fn build(self) -> YahooConnector {
        let adapter = RealAdapter::new(
            self.http.unwrap_or_default(),
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT),
        );
        YahooConnector::from_adapter(Arc::new(adapter))
    }
}

impl YahooConnector {
    /// Returns a builder with Yahoo defaults.
    #[must_use]
    pub fn builder() -> YahooConnectorBuilder {
        YahooConnectorBuilder::default()
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use pregao_core::PregaoError;

use crate::wire::{ChartEnvelope, ChartResult};

/// Default Yahoo Finance host.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Browser-like user agent; Yahoo rejects some default client agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// What a chart request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartQuery {
    /// The current session only (`range=1d`); used for the latest price.
    Latest,
    /// Daily bars for the inclusive date range.
    Daily {
        /// First day.
        from: NaiveDate,
        /// Last day (inclusive).
        to: NaiveDate,
    },
}

impl ChartQuery {
    /// Query string pairs for this request.
    ///
    /// `period2` is exclusive on Yahoo's side, so it is set to midnight after `to`.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match *self {
            Self::Latest => vec![
                ("interval", "1d".to_string()),
                ("range", "1d".to_string()),
            ],
            Self::Daily { from, to } => {
                let period1 = midnight_secs(from);
                let period2 = to
                    .checked_add_days(Days::new(1))
                    .map_or(i64::MAX, midnight_secs);
                vec![
                    ("interval", "1d".to_string()),
                    ("period1", period1.to_string()),
                    ("period2", period2.to_string()),
                ]
            }
        }
    }
}

fn midnight_secs(day: NaiveDate) -> i64 {
    day.and_time(chrono::NaiveTime::MIN).and_utc().timestamp()
}

/// Chart abstraction (so we can inject fakes in tests).
///
/// Implementations return the first chart result for `symbol`. Transport faults are
/// reported as `PregaoError::Connector`; the connector normalizes messages that read
/// like "not found" into `PregaoError::NotFound`.
#[async_trait]
pub trait YahooCharts: Send + Sync {
    /// Fetch chart data for `symbol`.
    async fn chart(&self, symbol: &str, query: ChartQuery) -> Result<ChartResult, PregaoError>;
}

/// Production adapter that calls the chart endpoint over HTTP.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl RealAdapter {
    /// Build an adapter with explicit transport settings.
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &str, user_agent: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    /// Build an adapter against Yahoo with a fresh client.
    #[must_use]
    pub fn new_default() -> Self {
        Self::new(reqwest::Client::new(), DEFAULT_BASE_URL, DEFAULT_USER_AGENT)
    }

    fn err(msg: impl Into<String>) -> PregaoError {
        PregaoError::connector(crate::YahooConnector::KEY.as_str(), msg)
    }

    /// Chart URL for `symbol`, which always occupies exactly one path segment.
    fn chart_url(&self, symbol: &str) -> Result<reqwest::Url, PregaoError> {
        // dot segments would be dropped by the URL encoder
        if symbol == "." || symbol == ".." {
            return Err(Self::err(format!("no data for {symbol}")));
        }
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| Self::err(format!("invalid base url {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| Self::err(format!("base url cannot take a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart"])
            .push(symbol);
        Ok(url)
    }
}

#[async_trait]
impl YahooCharts for RealAdapter {
    async fn chart(&self, symbol: &str, query: ChartQuery) -> Result<ChartResult, PregaoError> {
        let url = self.chart_url(symbol)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "pregao_yahoo", %url, ?query, "chart request");

        let resp = self
            .http
            .get(url)
            .query(&query.params())
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| Self::err(format!("request failed: {e}")))?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Self::err(format!("Not Found: {symbol}")));
        }
        if !status.is_success() {
            return Err(Self::err(format!("HTTP {status}")));
        }

        let envelope: ChartEnvelope = resp
            .json()
            .await
            .map_err(|e| Self::err(format!("invalid chart payload: {e}")))?;

        if let Some(err) = envelope.chart.error {
            return Err(Self::err(format!("{}: {}", err.code, err.description)));
        }

        envelope
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| Self::err(format!("no data for {symbol}")))
    }
}

impl dyn YahooCharts {
    /// Build a `YahooCharts` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YahooCharts>
    where
        F: Send + Sync + 'static + Fn(String, ChartQuery) -> Result<ChartResult, PregaoError>,
    {
        struct FnCharts<F>(F);
        #[async_trait]
        impl<F> YahooCharts for FnCharts<F>
        where
            F: Send + Sync + 'static + Fn(String, ChartQuery) -> Result<ChartResult, PregaoError>,
        {
            async fn chart(
                &self,
                symbol: &str,
                query: ChartQuery,
            ) -> Result<ChartResult, PregaoError> {
                (self.0)(symbol.to_string(), query)
            }
        }
        Arc::new(FnCharts(f))
    }
}

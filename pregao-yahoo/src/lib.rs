//! pregao-yahoo
//!
//! Connector that implements `PregaoConnector` on top of Yahoo Finance's public
//! `v8/finance/chart` endpoint. Exposes the latest regular-session price and
//! daily OHLC history.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
mod builder;
/// Chart endpoint response shapes.
pub mod wire;

use std::sync::Arc;

use adapter::{ChartQuery, RealAdapter, YahooCharts};
use async_trait::async_trait;
use chrono::DateTime;
use pregao_core::{
    Candle, ConnectorKey, HistoryProvider, HistoryRequest, HistoryResponse, PregaoConnector,
    PregaoError, ProviderQuote, QuoteProvider, Symbol,
};

pub use builder::YahooConnectorBuilder;

/// Public connector type. Production users will construct with `YahooConnector::new_default()`.
pub struct YahooConnector {
    charts: Arc<dyn YahooCharts>,
}

impl YahooConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("pregao-yahoo");

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("delisted")
    }

    fn normalize_error(e: PregaoError, what: &str) -> PregaoError {
        match e {
            PregaoError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    PregaoError::not_found(what.to_string())
                } else {
                    PregaoError::connector(Self::KEY.as_str(), msg)
                }
            }
            PregaoError::Other(msg) | PregaoError::Data(msg) => {
                PregaoError::connector(Self::KEY.as_str(), msg)
            }
            other => other,
        }
    }

    /// Build against Yahoo with a fresh HTTP client.
    #[must_use]
    pub fn new_default() -> Self {
        Self::from_adapter(Arc::new(RealAdapter::new_default()))
    }

    /// Build around any chart adapter (tests and injection).
    #[must_use]
    pub fn from_adapter(charts: Arc<dyn YahooCharts>) -> Self {
        Self { charts }
    }

    async fn chart(
        &self,
        symbol: &Symbol,
        query: ChartQuery,
        what: &str,
    ) -> Result<wire::ChartResult, PregaoError> {
        self.charts
            .chart(symbol.as_str(), query)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("{what} for {symbol}")))
    }
}

impl PregaoConnector for YahooConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Yahoo"
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
}

#[async_trait]
impl QuoteProvider for YahooConnector {
    async fn quote(&self, symbol: &Symbol) -> Result<ProviderQuote, PregaoError> {
        let chart = self.chart(symbol, ChartQuery::Latest, "quote").await?;
        let meta = chart.meta;
        Ok(ProviderQuote {
            symbol: meta.symbol.as_deref().and_then(|s| Symbol::new(s).ok()),
            price: meta.regular_market_price,
            as_of: meta
                .regular_market_time
                .and_then(|t| DateTime::from_timestamp(t, 0)),
        })
    }
}

#[async_trait]
impl HistoryProvider for YahooConnector {
    async fn history(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, PregaoError> {
        let query = ChartQuery::Daily {
            from: req.from(),
            to: req.to(),
        };
        let chart = self.chart(symbol, query, "history").await?;
        Ok(HistoryResponse {
            candles: candles_from_chart(chart),
        })
    }
}

/// Zip timestamps with OHLC arrays, skipping rows with any missing value.
fn candles_from_chart(chart: wire::ChartResult) -> Vec<Candle> {
    let Some(q) = chart.indicators.quote.into_iter().next() else {
        return Vec::new();
    };
    chart
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, &t)| {
            Some(Candle {
                ts: DateTime::from_timestamp(t, 0)?,
                open: (*q.open.get(i)?)?,
                high: (*q.high.get(i)?)?,
                low: (*q.low.get(i)?)?,
                close: (*q.close.get(i)?)?,
            })
        })
        .collect()
}

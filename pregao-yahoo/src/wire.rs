//! Response shapes of the Yahoo `v8/finance/chart` endpoint.
//!
//! Only the fields the connector reads are modeled; everything else is ignored.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Top-level chart envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartEnvelope {
    /// The `chart` object.
    pub chart: ChartBody,
}

/// `chart`: either `result` or `error` is populated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartBody {
    /// One entry per requested symbol; `null` on error.
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    /// API-level error.
    #[serde(default)]
    pub error: Option<ChartError>,
}

/// API-level error, e.g. `{"code":"Not Found","description":"No data found, symbol may be delisted"}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartError {
    /// Short code.
    #[serde(default)]
    pub code: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

/// Chart data for one symbol.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartResult {
    /// Symbol metadata, including the latest regular-session price.
    #[serde(default)]
    pub meta: ChartMeta,
    /// Bar timestamps in Unix seconds.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    /// Parallel OHLC arrays.
    #[serde(default)]
    pub indicators: ChartIndicators,
}

/// Subset of `meta`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    /// Symbol as Yahoo knows it.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Last regular-session price.
    #[serde(default)]
    pub regular_market_price: Option<Decimal>,
    /// When `regular_market_price` was observed, in Unix seconds.
    #[serde(default)]
    pub regular_market_time: Option<i64>,
}

/// `indicators` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartIndicators {
    /// Usually exactly one entry.
    #[serde(default)]
    pub quote: Vec<ChartQuote>,
}

/// OHLC arrays aligned with `timestamp`; gaps are `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartQuote {
    /// Opening prices.
    #[serde(default)]
    pub open: Vec<Option<Decimal>>,
    /// Highest prices.
    #[serde(default)]
    pub high: Vec<Option<Decimal>>,
    /// Lowest prices.
    #[serde(default)]
    pub low: Vec<Option<Decimal>>,
    /// Closing prices.
    #[serde(default)]
    pub close: Vec<Option<Decimal>>,
}

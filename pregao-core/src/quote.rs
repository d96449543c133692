//! Quote records: what connectors hand back, and what the orchestrator hands out.
//!
//! Provider-facing types (`ProviderQuote`, `Candle`, `HistoryResponse`) keep the
//! provider's native precision. The normalized types (`Quote`, `DailyPrice`,
//! `HistoricalQuote`) are built from them by the orchestrator.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::PregaoError;
use crate::symbol::Symbol;
use crate::timestamp::PricedAt;

/// Latest price as reported by a connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderQuote {
    /// Symbol echoed by the provider, if any.
    pub symbol: Option<Symbol>,
    /// Last traded price. `None` when the provider knows the symbol but has no price.
    pub price: Option<Decimal>,
    /// When the price was observed, in the provider's own precision.
    pub as_of: Option<DateTime<Utc>>,
}

/// Inclusive range of calendar days for a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryRequest {
    from: NaiveDate,
    to: NaiveDate,
}

impl HistoryRequest {
    /// Build a request covering `from..=to`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `from` is after `to`.
    pub fn try_new(from: NaiveDate, to: NaiveDate) -> Result<Self, PregaoError> {
        if from > to {
            return Err(PregaoError::InvalidArg(format!(
                "history range start {from} is after end {to}"
            )));
        }
        Ok(Self { from, to })
    }

    /// A request for the window of `lookback_days` days ending at `day`.
    #[must_use]
    pub fn ending_at(day: NaiveDate, lookback_days: u32) -> Self {
        let from = day
            .checked_sub_days(chrono::Days::new(u64::from(lookback_days)))
            .unwrap_or(NaiveDate::MIN);
        Self { from, to: day }
    }

    /// First day of the range.
    #[must_use]
    pub const fn from(&self) -> NaiveDate {
        self.from
    }

    /// Last day of the range (inclusive).
    #[must_use]
    pub const fn to(&self) -> NaiveDate {
        self.to
    }
}

/// One daily OHLC bar as reported by a connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// Bar timestamp.
    pub ts: DateTime<Utc>,
    /// Opening price.
    pub open: Decimal,
    /// Highest price.
    pub high: Decimal,
    /// Lowest price.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
}

/// Daily history as reported by a connector, in provider order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Candles in the order the provider returned them.
    pub candles: Vec<Candle>,
}

/// Latest quote for a ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// The ticker exactly as the caller passed it.
    pub name: String,
    /// Most recent known price.
    pub last_price: Decimal,
    /// When `last_price` was observed.
    pub priced_at: PricedAt,
}

/// One day of a historical series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPrice {
    /// Opening price.
    pub opening: Decimal,
    /// Lowest price.
    pub low: Decimal,
    /// Highest price.
    pub high: Decimal,
    /// Closing price.
    pub closing: Decimal,
    /// Bar timestamp.
    pub priced_at: PricedAt,
}

impl TryFrom<Candle> for DailyPrice {
    type Error = PregaoError;

    /// Fails with `Data` when the bar's timestamp cannot be rendered (see [`PricedAt::new`]).
    fn try_from(c: Candle) -> Result<Self, Self::Error> {
        Ok(Self {
            opening: c.open,
            low: c.low,
            high: c.high,
            closing: c.close,
            priced_at: PricedAt::new(c.ts)?,
        })
    }
}

/// Daily price series for a ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalQuote {
    /// The ticker exactly as the caller passed it.
    pub name: String,
    /// Prices in provider (chronological) order. Never empty.
    pub prices: Vec<DailyPrice>,
}

impl HistoricalQuote {
    /// Closing price of the last entry dated on or before `day` (UTC).
    #[must_use]
    pub fn closing_on_or_before(&self, day: NaiveDate) -> Option<Decimal> {
        self.prices
            .iter()
            .rev()
            .find(|p| p.priced_at.date() <= day)
            .map(|p| p.closing)
    }
}

//! Result envelopes produced by the orchestrator's multi-step operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::quote::Quote;

/// One slot of a batch result.
///
/// Serialized untagged: a resolved entry is a full quote, an unresolved one is
/// exactly `{ "name": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StockEntry {
    /// The ticker resolved to a quote.
    Resolved(Quote),
    /// The ticker could not be resolved; only the requested name is kept.
    Unresolved {
        /// The ticker as the caller passed it.
        name: String,
    },
}

impl StockEntry {
    /// The ticker this entry answers for.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Resolved(q) => q.name.as_str(),
            Self::Unresolved { name } => name,
        }
    }

    /// The quote, when resolved.
    #[must_use]
    pub const fn quote(&self) -> Option<&Quote> {
        match self {
            Self::Resolved(q) => Some(q),
            Self::Unresolved { .. } => None,
        }
    }

    /// Whether the ticker resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Latest quotes for an ordered list of tickers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    /// One entry per requested ticker, in request order.
    pub last_prices: Vec<StockEntry>,
}

impl BatchResult {
    /// Names of the tickers that did not resolve, in request order.
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.last_prices
            .iter()
            .filter(|e| !e.is_resolved())
            .map(StockEntry::name)
    }
}

/// Capital gains for a hypothetical purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GainsProjection {
    /// The ticker exactly as the caller passed it.
    pub name: String,
    /// Units purchased.
    pub purchased_amount: Decimal,
    /// Purchase date, serialized as `YYYY-MM-DD`.
    pub purchased_at: NaiveDate,
    /// Closing price resolved for `purchased_at`.
    pub price_at_date: Decimal,
    /// Current latest price.
    pub last_price: Decimal,
    /// `purchased_amount * (last_price - price_at_date)`.
    pub capital_gains: Decimal,
}

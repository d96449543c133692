use async_trait::async_trait;

use crate::PregaoError;
use crate::quote::{HistoryRequest, HistoryResponse, ProviderQuote};
use crate::symbol::Symbol;

/// Typed key for identifying connectors in priority configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectorKey(pub &'static str);

impl ConnectorKey {
    /// Construct a new typed connector key from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Focused role trait for connectors that provide the latest quote.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch the most recent known price for the given symbol.
    ///
    /// Implementations return `PregaoError::NotFound` when the provider has no
    /// data for the symbol and `PregaoError::Connector` for transport faults.
    async fn quote(&self, symbol: &Symbol) -> Result<ProviderQuote, PregaoError>;
}

/// Focused role trait for connectors that provide daily price history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch daily candles for the given symbol over the inclusive date range.
    ///
    /// Candles are returned in the order the provider produced them.
    async fn history(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, PregaoError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait PregaoConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "pregao-yahoo", "pregao-mock").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise quote capability by returning a usable trait object reference when supported.
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        None
    }

    /// Advertise history capability by returning a usable trait object reference when supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }
}

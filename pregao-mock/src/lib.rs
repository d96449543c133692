//! Deterministic connectors for tests and examples.
//!
//! - [`MockConnector`] serves fixed B3 fixtures (`PETR4.SA`, `OIBR4.SA`, `VALE3.SA`).
//!   Any other symbol is `NotFound`; `FAIL` yields a connector error and `TIMEOUT`
//!   answers after a short delay.
//! - [`DynamicMockConnector`] defers every answer to a [`DynamicMockController`]
//!   so tests can script failures and hangs per symbol.
use async_trait::async_trait;
use pregao_core::{
    HistoryProvider, HistoryRequest, HistoryResponse, PregaoConnector, PregaoError,
    ProviderQuote, QuoteProvider, Symbol,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Stable connector name.
    pub const KEY: &'static str = "pregao-mock";

    /// Create the fixture connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(
        symbol: &str,
        capability: &'static str,
    ) -> Result<(), PregaoError> {
        match symbol {
            "FAIL" => Err(PregaoError::connector(
                Self::KEY,
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Long enough for a short provider_timeout to fire in tests.
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl PregaoConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::KEY
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
}

#[async_trait]
impl QuoteProvider for MockConnector {
    async fn quote(&self, symbol: &Symbol) -> Result<ProviderQuote, PregaoError> {
        let s = symbol.as_str();
        Self::maybe_fail_or_timeout(s, "quote").await?;
        fixtures::quotes::by_symbol(s)
            .ok_or_else(|| PregaoError::not_found(format!("quote for {s}")))
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, PregaoError> {
        let s = symbol.as_str();
        Self::maybe_fail_or_timeout(s, "history").await?;
        let all = fixtures::history::by_symbol(s)
            .ok_or_else(|| PregaoError::not_found(format!("history for {s}")))?;
        let candles = all
            .candles
            .into_iter()
            .filter(|c| {
                let d = c.ts.date_naive();
                d >= req.from() && d <= req.to()
            })
            .collect();
        Ok(HistoryResponse { candles })
    }
}

use pregao_core::{PregaoError, PricedAt, Quote, Symbol};

use crate::Pregao;
use crate::router::util::{into_absence, parse_symbol};

impl Pregao {
    /// Fetch the latest quote for a single ticker.
    ///
    /// Behavior:
    /// - A blank or malformed ticker resolves to `Ok(None)` without calling any provider.
    /// - `NotFound`, transport faults and timeouts from every attempted connector
    ///   resolve to `Ok(None)`.
    /// - The returned `name` is `ticker` exactly as passed, not the provider's echo.
    /// - A provider quote without a price resolves to `Ok(None)`; one without a
    ///   timestamp is stamped with the retrieval time. A timestamp outside years
    ///   0000..=9999 resolves to `Ok(None)`.
    ///
    /// # Errors
    /// Returns an error only for configuration faults, e.g. no registered
    /// connector offers quotes.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "pregao::router", skip(self), fields(ticker = %ticker))
    )]
    pub async fn recent_quote(&self, ticker: &str) -> Result<Option<Quote>, PregaoError> {
        let Some(symbol) = parse_symbol(ticker) else {
            return Ok(None);
        };
        self.quote_for(ticker, &symbol).await
    }

    pub(crate) async fn quote_for(
        &self,
        ticker: &str,
        symbol: &Symbol,
    ) -> Result<Option<Quote>, PregaoError> {
        let res = self
            .fetch_single(symbol, "quote", |c, s| {
                c.as_quote_provider()?;
                Some(async move {
                    match c.as_quote_provider() {
                        Some(p) => p.quote(&s).await,
                        None => Err(PregaoError::connector(
                            c.name(),
                            "missing quote capability during call",
                        )),
                    }
                })
            })
            .await;

        let Some(pq) = into_absence(symbol, "quote", res)? else {
            return Ok(None);
        };
        let Some(last_price) = pq.price else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "pregao::router",
                symbol = %symbol,
                "provider quote carries no price; resolving to absence",
            );
            return Ok(None);
        };
        let priced_at = pq.as_of.map_or_else(|| Ok(PricedAt::now()), PricedAt::new);
        let Some(priced_at) = into_absence(symbol, "quote", priced_at)? else {
            return Ok(None);
        };

        Ok(Some(Quote {
            name: ticker.to_string(),
            last_price,
            priced_at,
        }))
    }
}

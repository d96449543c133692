use pregao_core::{DailyPrice, HistoricalQuote, HistoryRequest, NaiveDate, PregaoError, Symbol};

use crate::Pregao;
use crate::router::util::{into_absence, parse_symbol};

impl Pregao {
    /// Fetch daily prices for a ticker over the inclusive range `from..=to`.
    ///
    /// Behavior:
    /// - A malformed ticker or a reversed range (`from > to`) resolves to `Ok(None)`
    ///   without calling any provider.
    /// - Recoverable provider failures and an empty series resolve to `Ok(None)`,
    ///   as does a bar whose timestamp falls outside years 0000..=9999.
    /// - The returned `name` is `ticker` exactly as passed.
    /// - Prices keep the provider's order; each `priced_at` is truncated to milliseconds.
    ///
    /// # Errors
    /// Returns an error only for configuration faults, e.g. no registered
    /// connector offers history.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "pregao::router", skip(self), fields(ticker = %ticker))
    )]
    pub async fn historical_quote(
        &self,
        ticker: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Option<HistoricalQuote>, PregaoError> {
        let Some(symbol) = parse_symbol(ticker) else {
            return Ok(None);
        };
        let req = match HistoryRequest::try_new(from, to) {
            Ok(req) => req,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "pregao::router",
                    symbol = %symbol,
                    cause = %_e,
                    "reversed range; resolving to absence",
                );
                return Ok(None);
            }
        };
        self.history_for(ticker, &symbol, req).await
    }

    pub(crate) async fn history_for(
        &self,
        ticker: &str,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<Option<HistoricalQuote>, PregaoError> {
        let res = self
            .fetch_single(symbol, "history", move |c, s| {
                c.as_history_provider()?;
                Some(async move {
                    match c.as_history_provider() {
                        Some(p) => p.history(&s, req).await,
                        None => Err(PregaoError::connector(
                            c.name(),
                            "missing history capability during call",
                        )),
                    }
                })
            })
            .await;

        let Some(resp) = into_absence(symbol, "history", res)? else {
            return Ok(None);
        };
        if resp.candles.is_empty() {
            return Ok(None);
        }

        let prices = resp
            .candles
            .into_iter()
            .map(DailyPrice::try_from)
            .collect::<Result<Vec<_>, _>>();
        let Some(prices) = into_absence(symbol, "history", prices)? else {
            return Ok(None);
        };

        Ok(Some(HistoricalQuote {
            name: ticker.to_string(),
            prices,
        }))
    }
}

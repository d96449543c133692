use pregao_core::{Decimal, GainsProjection, HistoryRequest, NaiveDate, PregaoError};

use crate::Pregao;
use crate::router::util::parse_symbol;

impl Pregao {
    /// Project capital gains for `purchased_amount` units bought on `purchased_at`.
    ///
    /// The purchase price is the close of the last trading day on or before
    /// `purchased_at`, looked up within the configured lookback window. History and
    /// latest quote are fetched concurrently. If either is absent, or the
    /// arithmetic overflows, the result is `Ok(None)`.
    ///
    /// `capital_gains = purchased_amount * (last_price - price_at_date)`, unrounded.
    /// Zero and negative amounts are accepted.
    ///
    /// # Errors
    /// Returns an error only for configuration faults from either fetch.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "pregao::router",
            skip(self),
            fields(ticker = %ticker, amount = %purchased_amount, purchased_at = %purchased_at),
        )
    )]
    pub async fn project_gains(
        &self,
        ticker: &str,
        purchased_amount: Decimal,
        purchased_at: NaiveDate,
    ) -> Result<Option<GainsProjection>, PregaoError> {
        let Some(symbol) = parse_symbol(ticker) else {
            return Ok(None);
        };
        let req = HistoryRequest::ending_at(purchased_at, self.cfg.gains_lookback_days);

        let (history, latest) =
            futures::future::join(
            self.history_for(ticker, &symbol, req),
            self.quote_for(ticker, &symbol),
        )
        .await;
        let (Some(history), Some(latest)) = (history?, latest?) else {
            return Ok(None);
        };

        let Some(price_at_date) = history.closing_on_or_before(purchased_at) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "pregao::router",
                symbol = %symbol,
                "no close on or before purchase date; resolving to absence",
            );
            return Ok(None);
        };
        let last_price = latest.last_price;

        let Some(capital_gains) = last_price
            .checked_sub(price_at_date)
            .and_then(|delta| purchased_amount.checked_mul(delta))
        else {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                target: "pregao::router",
                symbol = %symbol,
                "capital gains overflowed; resolving to absence",
            );
            return Ok(None);
        };

        Ok(Some(GainsProjection {
            name: ticker.to_string(),
            purchased_amount,
            purchased_at,
            price_at_date,
            last_price,
            capital_gains,
        }))
    }
}

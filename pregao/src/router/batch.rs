use futures::stream::{FuturesUnordered, StreamExt};
use pregao_core::{BatchResult, ExecutionMode, PregaoError, StockEntry};

use crate::Pregao;
use crate::router::util::parse_symbol;

impl Pregao {
    /// Resolve one batch slot. Recoverable failures become `Unresolved`.
    async fn resolve_entry(&self, ticker: &str) -> Result<StockEntry, PregaoError> {
        let quote = match parse_symbol(ticker) {
            Some(symbol) => self.quote_for(ticker, &symbol).await?,
            None => None,
        };
        Ok(quote.map_or_else(
            || StockEntry::Unresolved {
                name: ticker.to_string(),
            },
            StockEntry::Resolved,
        ))
    }

    /// Fetch latest quotes for `tickers`, one entry per ticker in input order.
    ///
    /// Behavior and trade-offs:
    /// - `Serial` awaits each ticker before starting the next; at most one request
    ///   is in flight. It stops at the first non-recoverable error.
    /// - `Parallel` issues every fetch up front and waits for all of them to settle.
    ///   Output order never depends on completion order.
    /// - Every entry's name is the input ticker exactly as passed, resolved or not.
    /// - Unresolvable tickers yield `StockEntry::Unresolved`; duplicates are fetched
    ///   independently; an empty input yields an empty result.
    ///
    /// # Errors
    /// Returns an error only for configuration faults (see [`PregaoError::is_recoverable`]).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "pregao::router",
            skip(self, tickers),
            fields(tickers = tickers.len()),
        )
    )]
    pub async fn stocks_data<S: AsRef<str>>(
        &self,
        tickers: &[S],
        mode: ExecutionMode,
    ) -> Result<BatchResult, PregaoError> {
        let last_prices = match mode {
            ExecutionMode::Serial => {
                let mut out = Vec::with_capacity(tickers.len());
                for t in tickers {
                    out.push(self.resolve_entry(t.as_ref()).await?);
                }
                out
            }
            ExecutionMode::Parallel => {
                let mut slots: Vec<Option<StockEntry>> = vec![None; tickers.len()];
                let mut first_err: Option<PregaoError> = None;

                let mut pending: FuturesUnordered<_> = tickers
                    .iter()
                    .enumerate()
                    .map(|(i, t)| async move { (i, self.resolve_entry(t.as_ref()).await) })
                    .collect();

                while let Some((i, res)) = pending.next().await {
                    match res {
                        Ok(entry) => slots[i] = Some(entry),
                        Err(e) => {
                            if first_err.is_none() {
                                first_err = Some(e);
                            }
                        }
                    }
                }
                if let Some(e) = first_err {
                    return Err(e);
                }

                slots
                    .into_iter()
                    .zip(tickers)
                    .map(|(slot, t)| {
                        slot.unwrap_or_else(|| StockEntry::Unresolved {
                            name: t.as_ref().to_string(),
                        })
                    })
                    .collect()
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "pregao::router",
            resolved = last_prices.iter().filter(|e| e.is_resolved()).count(),
            total = last_prices.len(),
            "batch assembled",
        );

        Ok(BatchResult { last_prices })
    }

    /// Fetch latest quotes one ticker at a time, in input order.
    ///
    /// # Errors
    /// Returns the first non-recoverable error; remaining tickers are not fetched.
    pub async fn stocks_data_serial<S: AsRef<str>>(
        &self,
        tickers: &[S],
    ) -> Result<BatchResult, PregaoError> {
        self.stocks_data(tickers, ExecutionMode::Serial).await
    }

    /// Fetch latest quotes for every ticker concurrently.
    ///
    /// # Errors
    /// Returns the first non-recoverable error after every fetch has settled.
    pub async fn stocks_data_parallel<S: AsRef<str>>(
        &self,
        tickers: &[S],
    ) -> Result<BatchResult, PregaoError> {
        self.stocks_data(tickers, ExecutionMode::Parallel).await
    }

    /// Fetch latest quotes using the builder's configured [`ExecutionMode`].
    ///
    /// # Errors
    /// Same as [`Self::stocks_data`].
    pub async fn stocks_data_default<S: AsRef<str>>(
        &self,
        tickers: &[S],
    ) -> Result<BatchResult, PregaoError> {
        self.stocks_data(tickers, self.cfg.execution_mode).await
    }
}

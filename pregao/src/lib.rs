//! Pregao fetches stock quotes through pluggable market data providers.
//!
//! Overview
//! - Routes requests to connectors that implement the `pregao_core` contracts.
//! - Tries connectors in priority order and falls through on recoverable failures.
//! - Turns "not found" and transport faults into absence (`Ok(None)`), keeping
//!   `Err` for configuration faults only.
//! - Normalizes every timestamp to millisecond precision in UTC.
//!
//! Operations
//! - [`Pregao::recent_quote`]: latest price for one ticker.
//! - [`Pregao::historical_quote`]: daily prices over an inclusive date range.
//! - [`Pregao::stocks_data_serial`] / [`Pregao::stocks_data_parallel`]: latest
//!   prices for a list of tickers, one entry per ticker in input order. A ticker
//!   that cannot be resolved keeps only its name.
//! - [`Pregao::project_gains`]: capital gains of a hypothetical purchase.
//!
//! Building an orchestrator:
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use pregao::{ExecutionMode, Pregao};
//!
//! let pregao = Pregao::builder()
//!     .with_connector(Arc::new(pregao_yahoo::YahooConnector::new_default()))
//!     .provider_timeout(Duration::from_secs(10))
//!     .execution_mode(ExecutionMode::Serial)
//!     .build()?;
//!
//! let batch = pregao
//!     .stocks_data_default(&["PETR4.SA", "UNKNOW.SA", "OIBR4.SA"])
//!     .await?;
//! for name in batch.unresolved() {
//!     println!("no quote for {name}");
//! }
//! ```
//!
//! Projecting gains:
//! ```rust,ignore
//! use pregao::{Decimal, NaiveDate};
//!
//! let day = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
//! if let Some(g) = pregao.project_gains("PETR4.SA", Decimal::from(100), day).await? {
//!     println!("{}: {}", g.name, g.capital_gains);
//! }
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use crate::core::{Pregao, PregaoBuilder};
pub use router::util::collapse_errors;

pub use pregao_core::{
    BatchResult, Candle, ConnectorKey, DEFAULT_GAINS_LOOKBACK_DAYS, DailyPrice, Decimal,
    ExecutionMode, GainsProjection, HistoricalQuote, HistoryProvider, HistoryRequest,
    HistoryResponse, NaiveDate, PregaoConfig, PregaoConnector, PregaoError, PricedAt,
    ProviderQuote, Quote, QuoteProvider, StockEntry, Symbol,
};

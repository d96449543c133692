//! pregao-core
//!
//! Core types and traits shared across the pregao workspace.
//!
//! - `quote`: provider records and the normalized quote types handed to callers.
//! - `reports`: batch and gains-projection envelopes.
//! - `connector`: the `PregaoConnector` trait and its capability role traits.
//! - `config`: orchestrator configuration.
//! - `error`: the workspace error type and its recoverable/fatal split.
//!
//! Connectors implement [`QuoteProvider`] and/or [`HistoryProvider`] and advertise
//! them through [`PregaoConnector`]. Everything async here is runtime-agnostic;
//! the orchestrator crate assumes Tokio.
#![warn(missing_docs)]

/// Orchestrator configuration.
pub mod config;
/// Connector capability traits and the primary `PregaoConnector` interface.
pub mod connector;
mod error;
/// Provider records and normalized quote types.
pub mod quote;
/// Batch and gains envelopes.
pub mod reports;
mod symbol;
mod timestamp;

pub use config::{DEFAULT_GAINS_LOOKBACK_DAYS, ExecutionMode, PregaoConfig};
pub use connector::{ConnectorKey, HistoryProvider, PregaoConnector, QuoteProvider};
pub use error::PregaoError;
pub use quote::{
    Candle, DailyPrice, HistoricalQuote, HistoryRequest, HistoryResponse, ProviderQuote, Quote,
};
pub use reports::{BatchResult, GainsProjection, StockEntry};
pub use symbol::{MAX_SYMBOL_LEN, Symbol};
pub use timestamp::PricedAt;

pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;

//! Configuration types shared by the orchestrator and its builder.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::connector::ConnectorKey;

/// Scheduling policy for multi-ticker requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ExecutionMode {
    /// Resolve one ticker at a time, in input order.
    Serial,
    /// Issue every per-ticker fetch at once and wait for all of them.
    #[default]
    Parallel,
}

/// Default number of calendar days looked back from a purchase date when
/// resolving its closing price.
pub const DEFAULT_GAINS_LOOKBACK_DAYS: u32 = 7;

/// Global configuration for the `Pregao` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PregaoConfig {
    /// Timeout for individual provider requests. `None` leaves timing to the transport.
    pub provider_timeout: Option<Duration>,
    /// Width of the history window ending at a purchase date.
    ///
    /// A purchase on a weekend or holiday resolves to the last close inside the window.
    pub gains_lookback_days: u32,
    /// Mode used by `stocks_data_default`.
    pub execution_mode: ExecutionMode,
    /// Preferred connector order. Unlisted connectors follow in registration order.
    #[serde(skip)]
    pub connector_priority: Vec<ConnectorKey>,
}

impl Default for PregaoConfig {
    fn default() -> Self {
        Self {
            provider_timeout: None,
            gains_lookback_days: DEFAULT_GAINS_LOOKBACK_DAYS,
            execution_mode: ExecutionMode::default(),
            connector_priority: Vec::new(),
        }
    }
}

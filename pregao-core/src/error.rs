use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the pregao workspace.
///
/// Connectors report provider outcomes through this type. The orchestrator then
/// splits it in two: recoverable errors (no data, transport faults, timeouts)
/// collapse into an absent result, while configuration faults propagate to the
/// caller. See [`PregaoError::is_recoverable`].
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PregaoError {
    /// No registered connector implements the requested capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "quote").
        capability: String,
    },

    /// Issues with the returned or expected data (missing fields, overflow, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),

    /// The provider has no data for the symbol or date range.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "quote for PETR4.SA".
        what: String,
    },

    /// All selected providers failed; contains the individual failures.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<PregaoError>),

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label ("quote" or "history").
        capability: String,
    },

    /// All attempted providers timed out for the requested capability.
    #[error("all providers timed out: {capability}")]
    AllProvidersTimedOut {
        /// Capability label that timed out across all providers.
        capability: String,
    },
}

impl PregaoError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Data` error.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Whether this error means "could not get a quote" rather than a broken setup.
    ///
    /// `Unsupported` and `InvalidArg` are configuration faults and are never
    /// recoverable. Aggregates are recoverable only if every inner error is.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Unsupported { .. } | Self::InvalidArg(_) => false,
            Self::AllProvidersFailed(inner) => inner.iter().all(Self::is_recoverable),
            _ => true,
        }
    }
}

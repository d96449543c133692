use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use pregao_core::{ConnectorKey, ExecutionMode, PregaoConfig, PregaoConnector, PregaoError, Symbol};

/// Orchestrator that serves quote requests from the registered connectors.
pub struct Pregao {
    pub(crate) connectors: Vec<Arc<dyn PregaoConnector>>,
    pub(crate) cfg: PregaoConfig,
}

/// Builder for constructing a `Pregao` orchestrator with custom configuration.
pub struct PregaoBuilder {
    connectors: Vec<Arc<dyn PregaoConnector>>,
    cfg: PregaoConfig,
}

impl Default for PregaoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PregaoBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Starts with no connectors; register at least one via [`Self::with_connector`].
    /// Defaults: no provider timeout, 7-day gains lookback, parallel batches.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: PregaoConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Connectors are tried in registration order unless [`Self::prefer_connectors`]
    /// says otherwise. A recoverable failure on one falls through to the next.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn PregaoConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set the preferred connector order.
    ///
    /// Listed connectors go first, in the given order; unlisted ones keep their
    /// registration order after them.
    #[must_use]
    pub fn prefer_connectors(mut self, connectors_desc: &[Arc<dyn PregaoConnector>]) -> Self {
        self.cfg.connector_priority = connectors_desc.iter().map(|c| c.key()).collect();
        self
    }

    /// Bound each provider call. Without this the transport's own timeouts apply.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = Some(timeout);
        self
    }

    /// Width, in days, of the history window ending at a purchase date.
    #[must_use]
    pub const fn gains_lookback_days(mut self, days: u32) -> Self {
        self.cfg.gains_lookback_days = days;
        self
    }

    /// Mode used by [`Pregao::stocks_data_default`].
    #[must_use]
    pub const fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.cfg.execution_mode = mode;
        self
    }

    /// Replace the whole configuration, e.g. one loaded from a file.
    #[must_use]
    pub fn config(mut self, cfg: PregaoConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Pregao` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via [`Self::with_connector`].
    pub fn build(mut self) -> Result<Pregao, PregaoError> {
        if self.connectors.is_empty() {
            return Err(PregaoError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        // Drop priority keys that name no registered connector, and duplicates.
        let known: std::collections::HashSet<&'static str> =
            self.connectors.iter().map(|c| c.name()).collect();
        let mut seen = std::collections::HashSet::new();
        self.cfg
            .connector_priority
            .retain(|k| known.contains(k.as_str()) && seen.insert(k.as_str()));

        Ok(Pregao {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

/// Attribute an unexpected error kind to the connector that produced it.
pub(crate) fn tag_err(connector: &str, e: PregaoError) -> PregaoError {
    match e {
        e @ (PregaoError::NotFound { .. }
        | PregaoError::ProviderTimeout { .. }
        | PregaoError::Connector { .. }
        | PregaoError::Unsupported { .. }
        | PregaoError::InvalidArg(_)
        | PregaoError::AllProvidersTimedOut { .. }
        | PregaoError::AllProvidersFailed(_)) => e,
        other => PregaoError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Pregao {
    /// Start building a new `Pregao` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let pregao = pregao::Pregao::builder()
    ///     .with_connector(Arc::new(pregao_yahoo::YahooConnector::new_default()))
    ///     .gains_lookback_days(10)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> PregaoBuilder {
        PregaoBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PregaoConfig {
        &self.cfg
    }

    /// Wrap a provider future with the optional per-provider timeout.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pregao::core::provider_call_with_timeout",
            skip(fut),
            fields(connector = connector_name, capability = capability),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Option<Duration>,
        fut: Fut,
    ) -> Result<T, PregaoError>
    where
        Fut: std::future::Future<Output = Result<T, PregaoError>>,
    {
        match timeout {
            Some(t) => (tokio::time::timeout(t, fut).await).unwrap_or_else(|_| {
                Err(PregaoError::provider_timeout(connector_name, capability))
            }),
            None => fut.await,
        }
    }

    pub(crate) fn ordered(&self) -> Vec<Arc<dyn PregaoConnector>> {
        let mut out: Vec<(usize, Arc<dyn PregaoConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();
        if self.cfg.connector_priority.is_empty() {
            return out.into_iter().map(|(_, c)| c).collect();
        }
        let pos: HashMap<&'static str, usize> = self
            .cfg
            .connector_priority
            .iter()
            .copied()
            .map(ConnectorKey::as_str)
            .enumerate()
            .map(|(i, n)| (n, i))
            .collect();
        out.sort_by_key(|(orig_i, c)| (pos.get(c.name()).copied().unwrap_or(usize::MAX), *orig_i));
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Try connectors in priority order until one succeeds.
    ///
    /// - `call` returns `None` for connectors lacking the capability; they are skipped.
    /// - A recoverable error moves on to the next connector.
    /// - A non-recoverable error stops the walk and is returned as-is.
    /// - When every attempt fails the errors are collapsed (see `collapse_errors`).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pregao::core::fetch_single",
            skip(self, call),
            fields(symbol = %symbol, capability = %capability),
        )
    )]
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        symbol: &Symbol,
        capability: &'static str,
        call: F,
    ) -> Result<T, PregaoError>
    where
        F: Fn(Arc<dyn PregaoConnector>, Symbol) -> Option<Fut>,
        Fut: std::future::Future<Output = Result<T, PregaoError>>,
    {
        let mut attempted_any = false;
        let mut errors: Vec<PregaoError> = Vec::new();

        for c in self.ordered() {
            let Some(fut) = call(c.clone(), symbol.clone()) else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                c.name(),
                capability,
                self.cfg.provider_timeout,
                fut,
            )
            .await
            {
                Ok(v) => return Ok(v),
                Err(e) if !e.is_recoverable() => return Err(tag_err(c.name(), e)),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        target: "pregao::core",
                        connector = c.name(),
                        error = %e,
                        "provider attempt failed",
                    );
                    errors.push(tag_err(c.name(), e));
                }
            }
        }

        Err(crate::router::util::collapse_errors(
            capability,
            attempted_any,
            errors,
            format!("{capability} for {symbol}"),
        ))
    }
}

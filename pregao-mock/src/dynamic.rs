use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use pregao_core::{
    HistoryProvider, HistoryRequest, HistoryResponse, PregaoConnector, PregaoError,
    ProviderQuote, QuoteProvider, Symbol,
};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(PregaoError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    quote_rules: HashMap<Symbol, MockBehavior<ProviderQuote>>,
    history_rules: HashMap<Symbol, MockBehavior<HistoryResponse>>,
    quote_calls: Vec<Symbol>,
    history_calls: Vec<(Symbol, HistoryRequest)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `quote` calls for a specific symbol.
    pub async fn set_quote_behavior(
        &self,
        symbol: Symbol,
        behavior: MockBehavior<ProviderQuote>,
    ) {
        let mut guard = self.state.lock().await;
        guard.quote_rules.insert(symbol, behavior);
    }

    /// Set the behavior for `history` calls for a specific symbol.
    pub async fn set_history_behavior(
        &self,
        symbol: Symbol,
        behavior: MockBehavior<HistoryResponse>,
    ) {
        let mut guard = self.state.lock().await;
        guard.history_rules.insert(symbol, behavior);
    }

    /// Symbols passed to `quote`, in call order.
    pub async fn quote_calls(&self) -> Vec<Symbol> {
        self.state.lock().await.quote_calls.clone()
    }

    /// Arguments passed to `history`, in call order.
    pub async fn history_calls(&self) -> Vec<(Symbol, HistoryRequest)> {
        self.state.lock().await.history_calls.clone()
    }

    /// Clear all configured behaviors and call logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.quote_rules.clear();
        guard.history_rules.clear();
        guard.quote_calls.clear();
        guard.history_calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Symbols without a configured rule answer `NotFound`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn PregaoConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn PregaoConnector>, controller)
    }
}

impl PregaoConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
}

async fn play<T>(behavior: Option<MockBehavior<T>>, what: String) -> Result<T, PregaoError> {
    match behavior {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => std::future::pending().await,
        None => Err(PregaoError::not_found(what)),
    }
}

#[async_trait]
impl QuoteProvider for DynamicMockConnector {
    async fn quote(&self, symbol: &Symbol) -> Result<ProviderQuote, PregaoError> {
        // Snapshot the rule without holding the lock across the await below.
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.quote_calls.push(symbol.clone());
            guard.quote_rules.get(symbol).cloned()
        };
        play(behavior, format!("quote for {symbol}")).await
    }
}

#[async_trait]
impl HistoryProvider for DynamicMockConnector {
    async fn history(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, PregaoError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.history_calls.push((symbol.clone(), req));
            guard.history_rules.get(symbol).cloned()
        };
        play(behavior, format!("history for {symbol}")).await
    }
}

#![allow(dead_code)]
#![allow(clippy::type_complexity)]
#![allow(clippy::cast_possible_truncation)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pregao::{
    Candle, HistoryProvider, HistoryRequest, HistoryResponse, PregaoConnector, PregaoError,
    ProviderQuote, QuoteProvider, Symbol,
};
use tokio::time::{Duration, sleep};

type QuoteFn = Arc<dyn Fn(&Symbol) -> Result<ProviderQuote, PregaoError> + Send + Sync>;
type HistoryFn =
    Arc<dyn Fn(&Symbol, HistoryRequest) -> Result<HistoryResponse, PregaoError> + Send + Sync>;

/// Tracks how many provider calls are in flight and the highest count observed.
#[derive(Default)]
pub struct InFlight {
    current: AtomicUsize,
    peak: AtomicUsize,
    total: AtomicUsize,
}

impl InFlight {
    fn enter(&self) {
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        self.total.fetch_add(1, Ordering::SeqCst);
    }

    fn exit(&self) {
        self.current.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

/// In-memory connector used by integration tests.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,
    pub quote_fn: Option<QuoteFn>,
    pub history_fn: Option<HistoryFn>,
    pub in_flight: Arc<InFlight>,
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }

    async fn enter(&self) {
        self.in_flight.enter();
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

#[async_trait]
impl QuoteProvider for MockConnector {
    async fn quote(&self, s: &Symbol) -> Result<ProviderQuote, PregaoError> {
        self.enter().await;
        let out = match &self.quote_fn {
            Some(f) => (f)(s),
            None => Err(PregaoError::unsupported("quote")),
        };
        self.in_flight.exit();
        out
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        s: &Symbol,
        r: HistoryRequest,
    ) -> Result<HistoryResponse, PregaoError> {
        self.enter().await;
        let out = match &self.history_fn {
            Some(f) => (f)(s, r),
            None => Err(PregaoError::unsupported("history")),
        };
        self.in_flight.exit();
        out
    }
}

impl PregaoConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        if self.quote_fn.is_some() {
            Some(self as &dyn QuoteProvider)
        } else {
            None
        }
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        if self.history_fn.is_some() {
            Some(self as &dyn HistoryProvider)
        } else {
            None
        }
    }
}

pub struct MockConnectorBuilder {
    name: &'static str,
    delay_ms: u64,
    quote_fn: Option<QuoteFn>,
    history_fn: Option<HistoryFn>,
    in_flight: Arc<InFlight>,
}

impl MockConnectorBuilder {
    pub fn new() -> Self {
        Self {
            name: "mock",
            delay_ms: 0,
            quote_fn: None,
            history_fn: None,
            in_flight: Arc::new(InFlight::default()),
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn delay(mut self, d: Duration) -> Self {
        self.delay_ms = d.as_millis() as u64;
        self
    }

    pub fn in_flight(mut self, gauge: Arc<InFlight>) -> Self {
        self.in_flight = gauge;
        self
    }

    pub fn with_quote_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Symbol) -> Result<ProviderQuote, PregaoError> + Send + Sync + 'static,
    {
        self.quote_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_quote_ok(mut self, q: ProviderQuote) -> Self {
        self.quote_fn = Some(Arc::new(move |_s| Ok(q.clone())));
        self
    }

    pub fn with_history_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Symbol, HistoryRequest) -> Result<HistoryResponse, PregaoError>
            + Send
            + Sync
            + 'static,
    {
        self.history_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_history_ok(mut self, resp: HistoryResponse) -> Self {
        self.history_fn = Some(Arc::new(move |_s, _r| Ok(resp.clone())));
        self
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(MockConnector {
            name: self.name,
            delay_ms: self.delay_ms,
            quote_fn: self.quote_fn,
            history_fn: self.history_fn,
            in_flight: self.in_flight,
        })
    }
}

/// Quote-only connector that prices every symbol at `last`.
pub fn m_quote(name: &'static str, last: &str) -> Arc<MockConnector> {
    let price = crate::helpers::dec(last);
    MockConnector::builder()
        .name(name)
        .with_quote_fn(move |s| {
            Ok(ProviderQuote {
                symbol: Some(s.clone()),
                price: Some(price),
                as_of: Some(crate::helpers::dt(2018, 1, 26, 20, 7, 0)),
            })
        })
        .build()
}

/// History-only connector returning one candle per `(day, close)` pair.
pub fn m_hist(name: &'static str, closes: &[((i32, u32, u32), &str)]) -> Arc<MockConnector> {
    let candles = closes
        .iter()
        .map(|&((y, m, d), close)| candle(y, m, d, close))
        .collect::<Vec<_>>();
    MockConnector::builder()
        .name(name)
        .returns_history_ok(HistoryResponse { candles })
        .build()
}

/// Flat daily candle stamped at the B3 close (20:00 UTC).
pub fn candle(y: i32, m: u32, d: u32, close: &str) -> Candle {
    let price = crate::helpers::dec(close);
    Candle {
        ts: crate::helpers::dt(y, m, d, 20, 0, 0),
        open: price,
        high: price,
        low: price,
        close: price,
    }
}

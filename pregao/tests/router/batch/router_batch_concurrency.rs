use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pregao::{
    ExecutionMode, Pregao, PregaoConnector, PregaoError, ProviderQuote, QuoteProvider, Symbol,
};

use crate::helpers::{InFlight, MockConnector, OIBR4, PETR4, VALE3, dec, dt};

fn slow_pregao(gauge: Arc<InFlight>) -> Pregao {
    let c = MockConnector::builder()
        .name("slow")
        .delay(Duration::from_millis(50))
        .in_flight(gauge)
        .with_quote_fn(|s| {
            Ok(ProviderQuote {
                symbol: Some(s.clone()),
                price: Some(dec("10.00")),
                as_of: Some(dt(2018, 1, 26, 20, 7, 0)),
            })
        })
        .build();
    Pregao::builder().with_connector(c).build().unwrap()
}

#[tokio::test(start_paused = true)]
async fn parallel_issues_every_fetch_before_any_completes() {
    let gauge = Arc::new(InFlight::default());
    let pregao = slow_pregao(gauge.clone());

    let batch = pregao
        .stocks_data(&[PETR4, OIBR4, VALE3], ExecutionMode::Parallel)
        .await
        .unwrap();
    assert_eq!(batch.last_prices.len(), 3);
    assert_eq!(gauge.peak(), 3);
}

#[tokio::test(start_paused = true)]
async fn serial_never_overlaps_fetches() {
    let gauge = Arc::new(InFlight::default());
    let pregao = slow_pregao(gauge.clone());

    let batch = pregao
        .stocks_data(&[PETR4, OIBR4, VALE3], ExecutionMode::Serial)
        .await
        .unwrap();
    assert_eq!(batch.last_prices.len(), 3);
    assert_eq!(gauge.peak(), 1);
    assert_eq!(gauge.total(), 3);
}

/// Answers after a delay that shrinks with the ticker's position, so later
/// tickers finish first.
struct StaggeredConnector {
    delays_ms: HashMap<String, u64>,
}

#[async_trait]
impl QuoteProvider for StaggeredConnector {
    async fn quote(&self, s: &Symbol) -> Result<ProviderQuote, PregaoError> {
        let ms = self.delays_ms.get(s.as_str()).copied().unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(ms)).await;
        Ok(ProviderQuote {
            symbol: Some(s.clone()),
            price: Some(dec("1.00")),
            as_of: Some(dt(2018, 1, 26, 20, 7, 0)),
        })
    }
}

impl PregaoConnector for StaggeredConnector {
    fn name(&self) -> &'static str {
        "staggered"
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self)
    }
}

#[tokio::test(start_paused = true)]
async fn parallel_order_ignores_completion_order() {
    let tickers = [PETR4, OIBR4, VALE3];
    let delays_ms = tickers
        .iter()
        .enumerate()
        .map(|(i, t)| ((*t).to_string(), 100 - 30 * i as u64))
        .collect();
    let pregao = Pregao::builder()
        .with_connector(Arc::new(StaggeredConnector { delays_ms }))
        .build()
        .unwrap();

    let batch = pregao.stocks_data_parallel(&tickers).await.unwrap();
    let names: Vec<_> = batch.last_prices.iter().map(|e| e.name()).collect();
    assert_eq!(names, tickers);
}

use pregao::{ExecutionMode, Pregao, PregaoError, StockEntry};
use pregao_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{OIBR4, PETR4, UNKNOWN, VALE3, fixture_pregao};

const MIXED: [&str; 3] = [PETR4, UNKNOWN, OIBR4];

fn assert_mixed_shape(entries: &[StockEntry]) {
    assert_eq!(entries.len(), 3);
    let names: Vec<_> = entries.iter().map(StockEntry::name).collect();
    assert_eq!(names, MIXED);
    assert!(entries[0].is_resolved());
    assert_eq!(
        entries[1],
        StockEntry::Unresolved {
            name: UNKNOWN.to_string()
        }
    );
    assert!(entries[2].is_resolved());
}

#[tokio::test]
async fn serial_keeps_order_and_isolates_failures() {
    let pregao = fixture_pregao();
    let batch = pregao.stocks_data_serial(&MIXED).await.unwrap();
    assert_mixed_shape(&batch.last_prices);
    assert_eq!(batch.unresolved().collect::<Vec<_>>(), vec![UNKNOWN]);
}

#[tokio::test]
async fn parallel_keeps_order_and_isolates_failures() {
    let pregao = fixture_pregao();
    let batch = pregao.stocks_data_parallel(&MIXED).await.unwrap();
    assert_mixed_shape(&batch.last_prices);
}

#[tokio::test]
async fn serial_and_parallel_agree() {
    let pregao = fixture_pregao();
    let tickers = vec![
        VALE3.to_string(),
        "FAIL".to_string(),
        PETR4.to_string(),
        String::new(),
    ];
    let serial = pregao.stocks_data_serial(&tickers).await.unwrap();
    let parallel = pregao.stocks_data_parallel(&tickers).await.unwrap();
    assert_eq!(serial, parallel);
    assert_eq!(
        serde_json::to_value(&serial).unwrap(),
        serde_json::to_value(&parallel).unwrap()
    );
}

#[tokio::test]
async fn unresolved_entries_keep_the_raw_ticker() {
    let pregao = fixture_pregao();
    let batch = pregao.stocks_data_parallel(&["  "]).await.unwrap();
    assert_eq!(
        batch.last_prices,
        vec![StockEntry::Unresolved {
            name: "  ".to_string()
        }]
    );
}

#[tokio::test]
async fn resolved_entries_keep_the_raw_ticker() {
    let pregao = fixture_pregao();
    let tickers = [" PETR4.SA", "OIBR4.SA\t", UNKNOWN];
    for mode in [ExecutionMode::Serial, ExecutionMode::Parallel] {
        let batch = pregao.stocks_data(&tickers, mode).await.unwrap();
        let names: Vec<_> = batch.last_prices.iter().map(StockEntry::name).collect();
        assert_eq!(names, tickers);
        assert!(batch.last_prices[0].is_resolved());
        assert!(batch.last_prices[1].is_resolved());

        let v = serde_json::to_value(&batch).unwrap();
        assert_eq!(v["lastPrices"][0]["name"], " PETR4.SA");
    }
}

#[tokio::test]
async fn duplicates_are_resolved_independently() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("dyn");
    let pregao = Pregao::builder().with_connector(mock).build().unwrap();

    let batch = pregao
        .stocks_data_parallel(&[OIBR4, OIBR4, OIBR4])
        .await
        .unwrap();
    assert_eq!(batch.last_prices.len(), 3);
    assert_eq!(controller.quote_calls().await.len(), 3);
}

#[tokio::test]
async fn empty_input_yields_empty_result() {
    let pregao = fixture_pregao();
    let none: [&str; 0] = [];
    for mode in [ExecutionMode::Serial, ExecutionMode::Parallel] {
        let batch = pregao.stocks_data(&none, mode).await.unwrap();
        assert!(batch.last_prices.is_empty());
    }
    let v = serde_json::to_value(pregao.stocks_data_default(&none).await.unwrap()).unwrap();
    assert_eq!(v, serde_json::json!({ "lastPrices": [] }));
}

#[tokio::test]
async fn serial_stops_at_first_fatal_error() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("dyn");
    controller
        .set_quote_behavior(
            UNKNOWN.parse().unwrap(),
            MockBehavior::Fail(PregaoError::InvalidArg("bad credentials".into())),
        )
        .await;
    let pregao = Pregao::builder().with_connector(mock).build().unwrap();

    let err = pregao.stocks_data_serial(&MIXED).await.unwrap_err();
    assert_eq!(err, PregaoError::InvalidArg("bad credentials".into()));
    let calls: Vec<String> = controller
        .quote_calls()
        .await
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(calls, vec![PETR4, UNKNOWN]);
}

#[tokio::test]
async fn parallel_settles_everything_before_reporting_fatal_error() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("dyn");
    controller
        .set_quote_behavior(
            PETR4.parse().unwrap(),
            MockBehavior::Fail(PregaoError::InvalidArg("bad credentials".into())),
        )
        .await;
    let pregao = Pregao::builder().with_connector(mock).build().unwrap();

    let err = pregao.stocks_data_parallel(&MIXED).await.unwrap_err();
    assert_eq!(err, PregaoError::InvalidArg("bad credentials".into()));
    assert_eq!(controller.quote_calls().await.len(), 3);
}

#[tokio::test]
async fn default_mode_follows_builder() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("dyn");
    controller
        .set_quote_behavior(
            PETR4.parse().unwrap(),
            MockBehavior::Fail(PregaoError::InvalidArg("bad credentials".into())),
        )
        .await;
    let pregao = Pregao::builder()
        .with_connector(mock)
        .execution_mode(ExecutionMode::Serial)
        .build()
        .unwrap();

    assert!(pregao.stocks_data_default(&MIXED).await.is_err());
    // Serial stops after the first ticker.
    assert_eq!(controller.quote_calls().await.len(), 1);
}

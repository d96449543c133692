use pregao::{Decimal, HistoryResponse, Pregao, PregaoError};
use pregao_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{
    MockConnector, PETR4, UNKNOWN, VALE3, candle, day, dec, fixture_pregao, m_quote,
};

#[tokio::test]
async fn projects_gains_from_last_close_before_purchase() {
    let pregao = fixture_pregao();
    let g = pregao
        .project_gains(PETR4, Decimal::from(100), day(2018, 1, 1))
        .await
        .unwrap()
        .expect("projection");

    assert_eq!(g.name.as_str(), PETR4);
    assert_eq!(g.purchased_amount, Decimal::from(100));
    assert_eq!(g.purchased_at, day(2018, 1, 1));
    // 2018-01-01 is a holiday; the last close is 2017-12-28.
    assert_eq!(g.price_at_date, dec("16.33"));
    assert_eq!(g.last_price, dec("20.01"));
    assert_eq!(
        g.capital_gains,
        g.purchased_amount * (g.last_price - g.price_at_date)
    );
    assert_eq!(g.capital_gains, dec("368.00"));

    let v = serde_json::to_value(&g).unwrap();
    assert_eq!(v["purchasedAt"], "2018-01-01");
    assert_eq!(v["purchasedAmount"], 100.0);
}

#[tokio::test]
async fn purchase_on_trading_day_uses_that_close() {
    let pregao = fixture_pregao();
    let g = pregao
        .project_gains(VALE3, dec("10"), day(2018, 1, 2))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(g.price_at_date, dec("41.72"));
    assert_eq!(g.capital_gains, dec("18.80"));
}

#[tokio::test]
async fn zero_and_negative_amounts_are_accepted() {
    let pregao = fixture_pregao();
    let zero = pregao
        .project_gains(PETR4, Decimal::ZERO, day(2018, 1, 1))
        .await
        .unwrap()
        .unwrap();
    assert!(zero.capital_gains.is_zero());

    let short = pregao
        .project_gains(PETR4, dec("-10"), day(2018, 1, 1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(short.capital_gains, dec("-36.80"));
}

#[tokio::test]
async fn unknown_ticker_is_absent() {
    let pregao = fixture_pregao();
    let got = pregao
        .project_gains(UNKNOWN, Decimal::from(100), day(2018, 1, 1))
        .await
        .unwrap();
    assert_eq!(got, None);
}

#[tokio::test]
async fn missing_history_is_absent() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("dyn");
    controller
        .set_quote_behavior(
            PETR4.parse().unwrap(),
            MockBehavior::Return(pregao::ProviderQuote {
                symbol: None,
                price: Some(dec("20.01")),
                as_of: None,
            }),
        )
        .await;
    let pregao = Pregao::builder().with_connector(mock).build().unwrap();

    let got = pregao
        .project_gains(PETR4, Decimal::from(100), day(2018, 1, 1))
        .await
        .unwrap();
    assert_eq!(got, None);
}

#[tokio::test]
async fn missing_latest_quote_is_absent() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("dyn");
    controller
        .set_history_behavior(
            PETR4.parse().unwrap(),
            MockBehavior::Return(HistoryResponse {
                candles: vec![candle(2017, 12, 28, "16.33")],
            }),
        )
        .await;
    controller
        .set_quote_behavior(
            PETR4.parse().unwrap(),
            MockBehavior::Fail(PregaoError::connector("dyn", "connection reset")),
        )
        .await;
    let pregao = Pregao::builder().with_connector(mock).build().unwrap();

    let got = pregao
        .project_gains(PETR4, Decimal::from(100), day(2018, 1, 1))
        .await
        .unwrap();
    assert_eq!(got, None);
}

#[tokio::test]
async fn window_follows_configured_lookback() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("dyn");
    let pregao = Pregao::builder()
        .with_connector(mock)
        .gains_lookback_days(3)
        .build()
        .unwrap();

    let _ = pregao
        .project_gains(PETR4, Decimal::from(1), day(2018, 1, 1))
        .await
        .unwrap();
    let calls = controller.history_calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1.from(), day(2017, 12, 29));
    assert_eq!(calls[0].1.to(), day(2018, 1, 1));
}

#[tokio::test]
async fn candles_after_purchase_date_are_ignored() {
    let hist = MockConnector::builder()
        .name("hist")
        .with_history_fn(|_, _| {
            Ok(HistoryResponse {
                candles: vec![candle(2017, 12, 28, "16.33"), candle(2018, 1, 2, "16.93")],
            })
        })
        .build();
    let pregao = Pregao::builder()
        .with_connector(hist)
        .with_connector(m_quote("quote", "20.01"))
        .build()
        .unwrap();

    let g = pregao
        .project_gains(PETR4, Decimal::from(1), day(2018, 1, 1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(g.price_at_date, dec("16.33"));
}

#[tokio::test]
async fn overflow_is_absent() {
    let hist = MockConnector::builder()
        .name("hist")
        .with_history_fn(|_, _| Ok(HistoryResponse {
            candles: vec![candle(2017, 12, 28, "0")],
        }))
        .build();
    let pregao = Pregao::builder()
        .with_connector(hist)
        .with_connector(m_quote("quote", "1000000"))
        .build()
        .unwrap();

    let got = pregao
        .project_gains(PETR4, Decimal::MAX, day(2018, 1, 1))
        .await
        .unwrap();
    assert_eq!(got, None);
}

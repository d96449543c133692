mod common;
use pregao::{NaiveDate, Pregao};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();

    // 1. Create connector (mock in CI when PREGAO_EXAMPLES_USE_MOCK is set).
    let connector = common::get_connector();

    // 2. Build the orchestrator and register the connector.
    let pregao = Pregao::builder().with_connector(connector).build()?;

    // 3. Latest quote. Unknown tickers come back as `None`, not as an error.
    let ticker = std::env::args().nth(1).unwrap_or_else(|| "PETR4.SA".to_string());
    println!("Fetching quote for {ticker}...");
    match pregao.recent_quote(&ticker).await? {
        Some(q) => println!("{}", serde_json::to_string_pretty(&q)?),
        None => println!("{ticker}: not found"),
    }

    // 4. Daily prices over a fixed range.
    let from = NaiveDate::from_ymd_opt(2017, 12, 26).ok_or("bad date")?;
    let to = NaiveDate::from_ymd_opt(2018, 1, 5).ok_or("bad date")?;
    if let Some(hq) = pregao.historical_quote(&ticker, from, to).await? {
        for p in &hq.prices {
            println!("{}  close {}", p.priced_at, p.closing);
        }
    }

    Ok(())
}

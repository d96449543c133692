mod common;
use pregao::{Decimal, NaiveDate, Pregao};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let pregao = Pregao::builder()
        .with_connector(common::get_connector())
        .gains_lookback_days(10)
        .build()?;

    let purchased_at = NaiveDate::from_ymd_opt(2018, 1, 1).ok_or("bad date")?;
    for ticker in ["PETR4.SA", "UNKNOW.SA"] {
        match pregao
            .project_gains(ticker, Decimal::from(100), purchased_at)
            .await?
        {
            Some(g) => println!("{}", serde_json::to_string_pretty(&g)?),
            None => println!("{ticker}: no projection"),
        }
    }

    Ok(())
}

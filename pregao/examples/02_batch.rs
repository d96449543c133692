mod common;
use pregao::{ExecutionMode, Pregao};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let pregao = Pregao::builder()
        .with_connector(common::get_connector())
        .build()?;

    let tickers = ["PETR4.SA", "UNKNOW.SA", "OIBR4.SA"];

    for mode in [ExecutionMode::Serial, ExecutionMode::Parallel] {
        let started = std::time::Instant::now();
        let batch = pregao.stocks_data(&tickers, mode).await?;
        println!("{mode:?} ({} ms)", started.elapsed().as_millis());
        println!("{}", serde_json::to_string_pretty(&batch)?);

        let missing: Vec<_> = batch.unresolved().collect();
        if !missing.is_empty() {
            eprintln!("unresolved: {}", missing.join(", "));
        }
    }

    Ok(())
}

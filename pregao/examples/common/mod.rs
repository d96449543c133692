use pregao::PregaoConnector;
use std::sync::Arc;

#[must_use]
pub fn get_connector() -> Arc<dyn PregaoConnector> {
    if std::env::var("PREGAO_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Arc::new(pregao_mock::MockConnector::new())
    } else {
        Arc::new(pregao_yahoo::YahooConnector::new_default())
    }
}

/// Log to stderr; filter with `RUST_LOG` (e.g. `RUST_LOG=pregao=debug`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

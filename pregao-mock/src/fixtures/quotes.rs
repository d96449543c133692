use chrono::{DateTime, NaiveDate, Utc};
use pregao_core::{ProviderQuote, Symbol};
use rust_decimal::Decimal;

pub fn by_symbol(s: &str) -> Option<ProviderQuote> {
    match s {
        "PETR4.SA" => q("PETR4.SA", "20.01", 412_345_678),
        "OIBR4.SA" => q("OIBR4.SA", "3.15", 87_000_000),
        "VALE3.SA" => q("VALE3.SA", "43.60", 0),
        _ => None,
    }
}

// All fixtures are priced at 2018-01-26 20:07:31 UTC plus `nanos`.
fn q(sym: &str, px: &str, nanos: u32) -> Option<ProviderQuote> {
    let as_of: DateTime<Utc> = NaiveDate::from_ymd_opt(2018, 1, 26)?
        .and_hms_nano_opt(20, 7, 31, nanos)?
        .and_utc();
    Some(ProviderQuote {
        symbol: Symbol::new(sym).ok(),
        price: px.parse::<Decimal>().ok(),
        as_of: Some(as_of),
    })
}

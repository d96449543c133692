use chrono::NaiveDate;
use pregao_core::{Candle, HistoryResponse};
use rust_decimal::Decimal;

type Row = (&'static str, &'static str, &'static str, &'static str, &'static str);

pub fn by_symbol(s: &str) -> Option<HistoryResponse> {
    match s {
        "PETR4.SA" => build(&[
            ("2017-12-20", "15.80", "16.05", "15.72", "15.98"),
            ("2017-12-21", "16.00", "16.22", "15.91", "16.17"),
            ("2017-12-22", "16.15", "16.24", "16.02", "16.10"),
            ("2017-12-26", "16.12", "16.30", "16.05", "16.24"),
            ("2017-12-27", "16.20", "16.35", "16.08", "16.13"),
            ("2017-12-28", "16.15", "16.38", "16.11", "16.33"),
            ("2018-01-02", "16.52", "16.98", "16.44", "16.93"),
            ("2018-01-03", "16.90", "17.14", "16.80", "17.05"),
            ("2018-01-04", "17.08", "17.26", "16.95", "17.12"),
            ("2018-01-05", "17.10", "17.30", "17.00", "17.28"),
        ]),
        "OIBR4.SA" => build(&[
            ("2017-12-26", "3.62", "3.70", "3.55", "3.66"),
            ("2017-12-27", "3.66", "3.68", "3.51", "3.54"),
            ("2017-12-28", "3.54", "3.60", "3.47", "3.50"),
            ("2018-01-02", "3.52", "3.71", "3.50", "3.69"),
            ("2018-01-03", "3.70", "3.74", "3.58", "3.61"),
        ]),
        "VALE3.SA" => build(&[
            ("2017-12-26", "39.70", "40.12", "39.51", "39.95"),
            ("2017-12-27", "39.95", "40.30", "39.80", "40.06"),
            ("2017-12-28", "40.10", "40.50", "39.98", "40.41"),
            ("2018-01-02", "40.90", "41.88", "40.75", "41.72"),
        ]),
        _ => None,
    }
}

// Bars are stamped at the 10:00 BRST session open (12:00 UTC).
fn build(rows: &[Row]) -> Option<HistoryResponse> {
    let candles = rows
        .iter()
        .map(|&(date, o, h, l, c)| {
            Some(Candle {
                ts: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .ok()?
                    .and_hms_opt(12, 0, 0)?
                    .and_utc(),
                open: o.parse::<Decimal>().ok()?,
                high: h.parse::<Decimal>().ok()?,
                low: l.parse::<Decimal>().ok()?,
                close: c.parse::<Decimal>().ok()?,
            })
        })
        .collect::<Option<Vec<_>>>()?;
    Some(HistoryResponse { candles })
}

//! Benchmark utilities for vantage.

use chrono::{Duration, NaiveDate};
use serde_json::{Map, Value, json};

/// Shape of a synthetic payload.
#[derive(Debug, Clone, Copy)]
pub struct PayloadConfig {
    /// Number of rows in the data block.
    pub rows: usize,
    /// Whether rows carry the adjusted fields.
    pub adjusted: bool,
    /// Whether rows are keyed by minute (intraday) instead of by date.
    pub intraday: bool,
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self {
            rows: 1_000,
            adjusted: false,
            intraday: false,
        }
    }
}

/// Builds a payload shaped like a time series response, newest row first.
pub fn synthetic_payload(config: PayloadConfig) -> Map<String, Value> {
    let mut meta = Map::new();
    meta.insert("1. Information".into(), json!("Synthetic series"));
    meta.insert("2. Symbol".into(), json!("BENCH"));
    meta.insert("3. Last Refreshed".into(), json!("2024-01-02"));
    if config.intraday {
        meta.insert("4. Interval".into(), json!("1min"));
        meta.insert("5. Output Size".into(), json!("Full"));
        meta.insert("6. Time Zone".into(), json!("US/Eastern"));
    } else {
        meta.insert("4. Output Size".into(), json!("Full"));
        meta.insert("5. Time Zone".into(), json!("US/Eastern"));
    }

    let start = NaiveDate::from_ymd_opt(2024, 1, 2)
        .and_then(|d| d.and_hms_opt(16, 0, 0))
        .expect("valid start timestamp");
    let mut rows = Map::new();
    for i in 0..config.rows {
        let offset = i as i64;
        let key = if config.intraday {
            (start - Duration::minutes(offset))
                .format("%Y-%m-%d %H:%M")
                .to_string()
        } else {
            (start - Duration::days(offset)).format("%Y-%m-%d").to_string()
        };
        rows.insert(key, row(offset as f64, config.adjusted));
    }

    let mut payload = Map::new();
    payload.insert("Meta Data".into(), Value::Object(meta));
    payload.insert("Time Series".into(), Value::Object(rows));
    payload
}

/// Renders a synthetic payload as JSON text.
pub fn synthetic_text(config: PayloadConfig) -> String {
    Value::Object(synthetic_payload(config)).to_string()
}

fn row(step: f64, adjusted: bool) -> Value {
    let open = 100.0 + (step * 0.37).sin();
    let close = open + (step * 0.11).cos() * 0.5;
    let mut fields = Map::new();
    fields.insert("1. open".into(), json!(format!("{open:.4}")));
    fields.insert("2. high".into(), json!(format!("{:.4}", open.max(close) + 0.25)));
    fields.insert("3. low".into(), json!(format!("{:.4}", open.min(close) - 0.25)));
    fields.insert("4. close".into(), json!(format!("{close:.4}")));
    if adjusted {
        fields.insert("5. adjusted close".into(), json!(format!("{:.4}", close * 0.98)));
        fields.insert("6. volume".into(), json!("1250000"));
        fields.insert("7. dividend amount".into(), json!("0.0000"));
        fields.insert("8. split coefficient".into(), json!("1.0"));
    } else {
        fields.insert("5. volume".into(), json!("1250000"));
    }
    Value::Object(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_lib::TimeSeriesParser;

    #[test]
    fn test_synthetic_payload_parses() {
        let config = PayloadConfig {
            rows: 50,
            adjusted: true,
            intraday: true,
        };
        let response = TimeSeriesParser::new(true)
            .parse(&synthetic_payload(config))
            .unwrap();
        assert_eq!(response.points().len(), 50);
        assert!(response.metadata().is_intraday());
    }

    #[test]
    fn test_synthetic_text_parses() {
        let text = synthetic_text(PayloadConfig::default());
        let response = TimeSeriesParser::new(false).parse_str(&text).unwrap();
        assert_eq!(response.points().len(), 1_000);
    }
}

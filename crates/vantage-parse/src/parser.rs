//! Time series payload parser.

use serde_json::{Map, Value};
use tracing::{debug, warn};
use vantage_types::{Adjustment, DataPoint, Metadata, TimeSeriesFunction};

use crate::{
    ParseError, TimeSeries, TimeSeriesResponse, UpstreamError,
    timestamp::parse_timestamp,
    view::{RowsBlock, TextBlock},
};

mod meta_key {
    pub(super) const INFORMATION: &str = "1. Information";
    pub(super) const SYMBOL: &str = "2. Symbol";
    pub(super) const LAST_REFRESHED: &str = "3. Last Refreshed";
    pub(super) const INTERVAL: &str = "4. Interval";
    pub(super) const OUTPUT_SIZE: &str = "4. Output Size";
    pub(super) const TIME_ZONE: &str = "5. Time Zone";
    pub(super) const INTRADAY_OUTPUT_SIZE: &str = "5. Output Size";
    pub(super) const INTRADAY_TIME_ZONE: &str = "6. Time Zone";
}

mod row_key {
    pub(super) const OPEN: &str = "1. open";
    pub(super) const HIGH: &str = "2. high";
    pub(super) const LOW: &str = "3. low";
    pub(super) const CLOSE: &str = "4. close";
    pub(super) const VOLUME: &str = "5. volume";
    pub(super) const ADJUSTED_CLOSE: &str = "5. adjusted close";
    pub(super) const ADJUSTED_VOLUME: &str = "6. volume";
    pub(super) const DIVIDEND_AMOUNT: &str = "7. dividend amount";
    pub(super) const SPLIT_COEFFICIENT: &str = "8. split coefficient";
}

/// Parser for time series payloads.
///
/// The parser holds a single flag that decides, once per call, whether rows
/// are decoded in the raw or the adjusted shape. It keeps no other state and
/// is `Copy`, so one instance can be reused freely.
///
/// # Example
///
/// ```
/// use vantage_parse::TimeSeriesParser;
///
/// let payload = r#"{
///     "Meta Data": { "2. Symbol": "IBM", "4. Output Size": "Compact" },
///     "Time Series (Daily)": {
///         "2024-01-02": {
///             "1. open": "161.0", "2. high": "161.7", "3. low": "160.1",
///             "4. close": "161.5", "5. volume": "4001000"
///         }
///     }
/// }"#;
///
/// let response = TimeSeriesParser::new(false).parse_str(payload).unwrap();
/// assert_eq!(response.metadata().symbol(), Some("IBM"));
/// assert_eq!(response.points()[0].volume, 4_001_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeSeriesParser {
    adjusted: bool,
}

impl TimeSeriesParser {
    /// Creates a parser for raw (`false`) or adjusted (`true`) rows.
    #[must_use]
    pub const fn new(adjusted: bool) -> Self {
        Self { adjusted }
    }

    /// Creates a parser matching the row shape of `function`.
    #[must_use]
    pub const fn for_function(function: TimeSeriesFunction) -> Self {
        Self::new(function.is_adjusted())
    }

    /// Returns true if rows are decoded in the adjusted shape.
    #[must_use]
    pub const fn is_adjusted(&self) -> bool {
        self.adjusted
    }

    /// Decodes JSON text, keeping document order, and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidJson`] or [`ParseError::NotAnObject`]
    /// if the text is not a JSON object, and otherwise whatever
    /// [`parse`](Self::parse) returns.
    pub fn parse_str(&self, text: &str) -> Result<TimeSeriesResponse, ParseError> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(payload) => self.parse(&payload),
            _ => Err(ParseError::NotAnObject),
        }
    }

    /// Parses a decoded payload.
    ///
    /// The first entry is read as the metadata block and the second as the
    /// data block. If the payload has a single entry, or either block has
    /// the wrong shape, the first entry's value is returned as an upstream
    /// error message.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the payload is empty or any field read
    /// from it is malformed. No partial result is produced.
    pub fn parse(&self, payload: &Map<String, Value>) -> Result<TimeSeriesResponse, ParseError> {
        let mut entries = payload.values();
        let first = entries.next().ok_or(ParseError::EmptyPayload)?;

        let blocks = entries
            .next()
            .and_then(|second| Some((TextBlock::view(first)?, RowsBlock::view(second)?)));
        let Some((header, rows)) = blocks else {
            let message = upstream_message(first);
            warn!(%message, "payload carries no series");
            return Ok(TimeSeriesResponse::Upstream(UpstreamError::new(message)));
        };

        let metadata = decode_metadata(header)?;
        debug!(
            symbol = metadata.symbol().unwrap_or_default(),
            intraday = metadata.is_intraday(),
            adjusted = self.adjusted,
            rows = rows.len(),
            "decoding series"
        );

        let points = rows
            .rows()
            .map(|(stamp, row)| self.decode_row(stamp, row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TimeSeriesResponse::Series(TimeSeries::new(metadata, points)))
    }

    fn decode_row(&self, stamp: &str, row: TextBlock<'_>) -> Result<DataPoint, ParseError> {
        let fields = RowFields { stamp, row };
        let timestamp = parse_timestamp(stamp)?;
        let open = fields.price(row_key::OPEN)?;
        let high = fields.price(row_key::HIGH)?;
        let low = fields.price(row_key::LOW)?;
        let close = fields.price(row_key::CLOSE)?;

        if !self.adjusted {
            let volume = fields.volume(row_key::VOLUME)?;
            return Ok(DataPoint::new(timestamp, open, high, low, close, volume));
        }

        let adjusted_close = fields.price(row_key::ADJUSTED_CLOSE)?;
        let volume = fields.volume(row_key::ADJUSTED_VOLUME)?;
        let dividend_amount = fields.price(row_key::DIVIDEND_AMOUNT)?;
        let split_coefficient = fields.optional_price(row_key::SPLIT_COEFFICIENT)?;

        Ok(
            DataPoint::new(timestamp, open, high, low, close, volume).with_adjustment(
                Adjustment::new(adjusted_close, dividend_amount, split_coefficient),
            ),
        )
    }
}

fn decode_metadata(header: TextBlock<'_>) -> Result<Metadata, ParseError> {
    let information = header.owned(meta_key::INFORMATION)?;
    let symbol = header.owned(meta_key::SYMBOL)?;
    let last_refreshed = header.owned(meta_key::LAST_REFRESHED)?;

    if header.text(meta_key::INTERVAL)?.is_some() {
        return Ok(Metadata::intraday(
            information,
            symbol,
            last_refreshed,
            header.owned(meta_key::INTERVAL)?,
            header.owned(meta_key::INTRADAY_OUTPUT_SIZE)?,
            header.owned(meta_key::INTRADAY_TIME_ZONE)?,
        ));
    }

    Ok(Metadata::new(
        information,
        symbol,
        last_refreshed,
        header.owned(meta_key::OUTPUT_SIZE)?,
        header.owned(meta_key::TIME_ZONE)?,
    ))
}

fn upstream_message(value: &Value) -> String {
    match value {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    }
}

/// Field reader for one row, carrying its key for error context.
struct RowFields<'a> {
    stamp: &'a str,
    row: TextBlock<'a>,
}

impl RowFields<'_> {
    fn required(&self, field: &'static str) -> Result<&str, ParseError> {
        self.row.text(field)?.ok_or_else(|| ParseError::MissingField {
            timestamp: self.stamp.to_string(),
            field,
        })
    }

    fn price(&self, field: &'static str) -> Result<f64, ParseError> {
        let raw = self.required(field)?;
        self.decimal(field, raw)
    }

    fn optional_price(&self, field: &'static str) -> Result<Option<f64>, ParseError> {
        self.row
            .text(field)?
            .map(|raw| self.decimal(field, raw))
            .transpose()
    }

    fn volume(&self, field: &'static str) -> Result<u64, ParseError> {
        let raw = self.required(field)?;
        raw.parse().map_err(|source| ParseError::InvalidInteger {
            timestamp: self.stamp.to_string(),
            field,
            value: raw.to_string(),
            source,
        })
    }

    fn decimal(&self, field: &'static str, raw: &str) -> Result<f64, ParseError> {
        raw.trim()
            .parse()
            .map_err(|source| ParseError::InvalidNumber {
                timestamp: self.stamp.to_string(),
                field,
                value: raw.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{NaiveDate, NaiveDateTime};
    use serde_json::json;

    const INTRADAY: &str = include_str!("../fixtures/intraday.json");
    const DAILY: &str = include_str!("../fixtures/daily.json");
    const DAILY_ADJUSTED: &str = include_str!("../fixtures/daily_adjusted.json");
    const WEEKLY_ADJUSTED: &str = include_str!("../fixtures/weekly_adjusted.json");
    const ERROR: &str = include_str!("../fixtures/error.json");
    const RATE_LIMIT: &str = include_str!("../fixtures/rate_limit.json");

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn payload(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    fn raw_row(volume: &str) -> Value {
        json!({
            "1. open": "1.0",
            "2. high": "2.0",
            "3. low": "0.5",
            "4. close": "1.5",
            "5. volume": volume,
        })
    }

    #[test]
    fn test_daily_metadata_five_fields() {
        let response = TimeSeriesParser::new(false).parse_str(DAILY).unwrap();
        let metadata = response.metadata();
        assert_eq!(
            metadata.information(),
            Some("Daily Prices (open, high, low, close) and Volumes")
        );
        assert_eq!(metadata.symbol(), Some("IBM"));
        assert_eq!(metadata.last_refreshed(), Some("2024-01-05"));
        assert_eq!(metadata.interval(), None);
        assert_eq!(metadata.output_size(), Some("Compact"));
        assert_eq!(metadata.time_zone(), Some("US/Eastern"));
        assert!(!metadata.is_intraday());
    }

    #[test]
    fn test_daily_points_in_payload_order() {
        let response = TimeSeriesParser::new(false).parse_str(DAILY).unwrap();
        let points = response.points();
        assert_eq!(points.len(), 4);

        let dates: Vec<_> = points.iter().map(|p| p.timestamp).collect();
        assert_eq!(
            dates,
            vec![
                at(2024, 1, 5, 0, 0, 0),
                at(2024, 1, 4, 0, 0, 0),
                at(2024, 1, 3, 0, 0, 0),
                at(2024, 1, 2, 0, 0, 0),
            ]
        );

        let first = &points[0];
        assert_relative_eq!(first.open, 160.9);
        assert_relative_eq!(first.high, 161.76);
        assert_relative_eq!(first.low, 160.0);
        assert_relative_eq!(first.close, 159.16);
        assert_eq!(first.volume, 4_071_325);
        assert!(!first.is_adjusted());
    }

    #[test]
    fn test_intraday_metadata_six_fields() {
        let response = TimeSeriesParser::new(false).parse_str(INTRADAY).unwrap();
        let metadata = response.metadata();
        assert!(metadata.is_intraday());
        assert_eq!(metadata.interval(), Some("5min"));
        assert_eq!(metadata.output_size(), Some("Compact"));
        assert_eq!(metadata.time_zone(), Some("US/Eastern"));
        assert_eq!(metadata.last_refreshed(), Some("2024-01-02 19:55:00"));
    }

    #[test]
    fn test_intraday_mixed_precision_keys() {
        let response = TimeSeriesParser::new(false).parse_str(INTRADAY).unwrap();
        let stamps: Vec<_> = response.points().iter().map(|p| p.timestamp).collect();
        assert_eq!(
            stamps,
            vec![
                at(2024, 1, 2, 19, 55, 0),
                at(2024, 1, 2, 19, 50, 0),
                at(2024, 1, 2, 19, 45, 0),
            ]
        );
    }

    #[test]
    fn test_daily_adjusted_rows() {
        let parser = TimeSeriesParser::for_function(TimeSeriesFunction::DailyAdjusted);
        assert!(parser.is_adjusted());

        let series = parser.parse_str(DAILY_ADJUSTED).unwrap().into_series().unwrap();
        assert_eq!(series.len(), 3);
        assert!(series.is_adjusted());

        let split = &series.points()[1];
        let adjustment = split.adjustment.unwrap();
        assert_eq!(split.volume, 225_702_700);
        assert_relative_eq!(adjustment.adjusted_close, 127.5128);
        assert_eq!(adjustment.split_coefficient, Some(4.0));
        assert!(adjustment.has_split());

        let dividend = series.points()[2].adjustment.unwrap();
        assert_relative_eq!(dividend.dividend_amount, 0.82);
        assert!(dividend.has_dividend());
    }

    #[test]
    fn test_weekly_adjusted_without_split_coefficient() {
        let parser = TimeSeriesParser::for_function(TimeSeriesFunction::WeeklyAdjusted);
        let response = parser.parse_str(WEEKLY_ADJUSTED).unwrap();
        assert_eq!(response.points().len(), 3);
        for point in response.points() {
            let adjustment = point.adjustment.unwrap();
            assert_eq!(adjustment.split_coefficient, None);
        }
        assert_relative_eq!(response.points()[2].adjustment.unwrap().dividend_amount, 1.66);
    }

    #[test]
    fn test_weekly_metadata_missing_keys_are_none() {
        // Weekly headers number the time zone "4."; only the documented keys are read.
        let response = TimeSeriesParser::new(true).parse_str(WEEKLY_ADJUSTED).unwrap();
        let metadata = response.metadata();
        assert_eq!(metadata.symbol(), Some("IBM"));
        assert_eq!(metadata.output_size(), None);
        assert_eq!(metadata.time_zone(), None);
    }

    #[test]
    fn test_error_payload_is_upstream() {
        let response = TimeSeriesParser::new(false).parse_str(ERROR).unwrap();
        assert!(response.is_error());
        assert!(
            response
                .error_message()
                .unwrap()
                .starts_with("Invalid API call.")
        );
        assert!(response.metadata().is_empty());
        assert!(response.points().is_empty());
    }

    #[test]
    fn test_rate_limit_payload_is_upstream() {
        let response = TimeSeriesParser::new(true).parse_str(RATE_LIMIT).unwrap();
        assert_eq!(
            response.error_message(),
            Some("Thank you for using Alpha Vantage! Our standard API rate limit is 25 requests per day.")
        );
    }

    #[test]
    fn test_non_string_message_rendered_as_json() {
        let response = TimeSeriesParser::new(false)
            .parse(&payload(json!({ "Error Message": { "code": 42 } })))
            .unwrap();
        assert_eq!(response.error_message(), Some(r#"{"code":42}"#));
    }

    #[test]
    fn test_wrong_block_shapes_are_upstream() {
        let parser = TimeSeriesParser::new(false);

        let scalar_header = parser
            .parse(&payload(json!({ "Note": "slow down", "Other": {} })))
            .unwrap();
        assert_eq!(scalar_header.error_message(), Some("slow down"));

        let scalar_rows = parser
            .parse(&payload(json!({ "Meta Data": {}, "Data": { "2024-01-02": "x" } })))
            .unwrap();
        assert_eq!(scalar_rows.error_message(), Some("{}"));
    }

    #[test]
    fn test_empty_payload_is_fatal() {
        let err = TimeSeriesParser::new(false).parse(&Map::new()).unwrap_err();
        assert!(matches!(err, ParseError::EmptyPayload));
    }

    #[test]
    fn test_invalid_json_and_non_object() {
        let parser = TimeSeriesParser::new(false);
        assert!(matches!(
            parser.parse_str("{ not json"),
            Err(ParseError::InvalidJson(_))
        ));
        assert!(matches!(
            parser.parse_str("[1, 2]"),
            Err(ParseError::NotAnObject)
        ));
    }

    #[test]
    fn test_empty_data_block() {
        let response = TimeSeriesParser::new(false)
            .parse(&payload(json!({ "Meta Data": { "2. Symbol": "IBM" }, "Data": {} })))
            .unwrap();
        assert!(!response.is_error());
        assert!(response.points().is_empty());
    }

    #[test]
    fn test_missing_volume_is_fatal() {
        let mut row = raw_row("10");
        row.as_object_mut().unwrap().remove("5. volume");
        let err = TimeSeriesParser::new(false)
            .parse(&payload(json!({ "Meta Data": {}, "Data": { "2024-01-02": row } })))
            .unwrap_err();
        match err {
            ParseError::MissingField { timestamp, field } => {
                assert_eq!(timestamp, "2024-01-02");
                assert_eq!(field, "5. volume");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_dividend_amount_is_fatal() {
        let row = json!({
            "1. open": "1.0",
            "2. high": "2.0",
            "3. low": "0.5",
            "4. close": "1.5",
            "5. adjusted close": "1.4",
            "6. volume": "10",
        });
        let err = TimeSeriesParser::new(true)
            .parse(&payload(json!({ "Meta Data": {}, "Data": { "2024-01-02": row } })))
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingField {
                field: "7. dividend amount",
                ..
            }
        ));
    }

    #[test]
    fn test_raw_row_under_adjusted_parser_is_fatal() {
        let err = TimeSeriesParser::new(true)
            .parse(&payload(json!({ "Meta Data": {}, "Data": { "2024-01-02": raw_row("10") } })))
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingField {
                field: "5. adjusted close",
                ..
            }
        ));
    }

    #[test]
    fn test_bad_number_is_fatal() {
        let mut row = raw_row("10");
        row["2. high"] = json!("n/a");
        let err = TimeSeriesParser::new(false)
            .parse(&payload(json!({ "Meta Data": {}, "Data": { "2024-01-02": row } })))
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidNumber {
                field: "2. high",
                ..
            }
        ));
    }

    #[test]
    fn test_fractional_volume_is_fatal() {
        let err = TimeSeriesParser::new(false)
            .parse(&payload(json!({ "Meta Data": {}, "Data": { "2024-01-02": raw_row("10.5") } })))
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidInteger { .. }));
    }

    #[test]
    fn test_bad_timestamp_fails_whole_parse() {
        let err = TimeSeriesParser::new(false)
            .parse(&payload(json!({
                "Meta Data": {},
                "Data": {
                    "2024-01-03": raw_row("10"),
                    "yesterday": raw_row("10"),
                }
            })))
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_non_text_leaf_is_fatal() {
        let mut row = raw_row("10");
        row["1. open"] = json!(1.0);
        let err = TimeSeriesParser::new(false)
            .parse(&payload(json!({ "Meta Data": {}, "Data": { "2024-01-02": row } })))
            .unwrap_err();
        assert!(matches!(err, ParseError::NonTextField { field: "1. open" }));

        let err = TimeSeriesParser::new(false)
            .parse(&payload(json!({ "Meta Data": { "2. Symbol": 7 }, "Data": {} })))
            .unwrap_err();
        assert!(matches!(err, ParseError::NonTextField { field: "2. Symbol" }));
    }

    #[test]
    fn test_padded_volume_is_fatal() {
        let err = TimeSeriesParser::new(false)
            .parse(&payload(json!({
                "Meta Data": {},
                "Data": { "2024-01-02": raw_row(" 42 ") }
            })))
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidInteger { field: "5. volume", .. }
        ));
    }

    #[test]
    fn test_padded_price_accepted() {
        let mut row = raw_row("42");
        row["4. close"] = json!(" 1.5 ");
        let response = TimeSeriesParser::new(false)
            .parse(&payload(json!({ "Meta Data": {}, "Data": { "2024-01-02": row } })))
            .unwrap();
        assert_relative_eq!(response.points()[0].close, 1.5);
        assert_eq!(response.points()[0].volume, 42);
    }

    #[test]
    fn test_null_split_coefficient_is_absent() {
        let row = json!({
            "1. open": "1.0",
            "2. high": "2.0",
            "3. low": "0.5",
            "4. close": "1.5",
            "5. adjusted close": "1.4",
            "6. volume": "100",
            "7. dividend amount": "0.0000",
            "8. split coefficient": null,
        });
        let response = TimeSeriesParser::new(true)
            .parse(&payload(json!({ "Meta Data": {}, "Data": { "2024-01-02": row } })))
            .unwrap();
        let adjustment = response.points()[0].adjustment.unwrap();
        assert_eq!(adjustment.split_coefficient, None);
        assert_relative_eq!(adjustment.adjusted_close, 1.4);
    }

    #[test]
    fn test_null_interval_selects_daily_layout() {
        let response = TimeSeriesParser::new(false)
            .parse(&payload(json!({
                "Meta Data": {
                    "2. Symbol": "IBM",
                    "4. Interval": null,
                    "4. Output Size": "Compact",
                },
                "Data": {}
            })))
            .unwrap();
        let metadata = response.metadata();
        assert!(!metadata.is_intraday());
        assert_eq!(metadata.interval(), None);
        assert_eq!(metadata.output_size(), Some("Compact"));
    }

    #[test]
    fn test_duplicate_timestamps_survive() {
        let text = r#"{
            "Meta Data": {},
            "Data": {
                "2024-01-02": { "1. open": "1", "2. high": "1", "3. low": "1", "4. close": "1", "5. volume": "1" },
                "2024-01-02 00:00": { "1. open": "2", "2. high": "2", "3. low": "2", "4. close": "2", "5. volume": "2" }
            }
        }"#;
        let response = TimeSeriesParser::new(false).parse_str(text).unwrap();
        let points = response.points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].timestamp, points[1].timestamp);
        assert_eq!(points[0].volume, 1);
        assert_eq!(points[1].volume, 2);
    }

    #[test]
    fn test_extra_entries_ignored() {
        let response = TimeSeriesParser::new(false)
            .parse(&payload(json!({
                "Meta Data": {},
                "Data": { "2024-01-02": raw_row("10") },
                "Trailer": "ignored"
            })))
            .unwrap();
        assert_eq!(response.points().len(), 1);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let parser = TimeSeriesParser::new(true);
        let first = parser.parse_str(DAILY_ADJUSTED).unwrap();
        let second = parser.parse_str(DAILY_ADJUSTED).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_payload_matches_parser() {
        let value: Value = serde_json::from_str(DAILY).unwrap();
        let map = payload(value);
        assert_eq!(
            TimeSeriesResponse::from_payload(&map, false).unwrap(),
            TimeSeriesParser::new(false).parse(&map).unwrap()
        );
    }
}

//! Per-timestamp observations.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Split/dividend fields carried by adjusted series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    /// Close adjusted for splits and dividends.
    pub adjusted_close: f64,
    /// Dividend paid on this date.
    pub dividend_amount: f64,
    /// Split coefficient (absent on weekly and monthly rows).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_coefficient: Option<f64>,
}

impl Adjustment {
    /// Creates adjusted fields.
    #[must_use]
    pub const fn new(
        adjusted_close: f64,
        dividend_amount: f64,
        split_coefficient: Option<f64>,
    ) -> Self {
        Self {
            adjusted_close,
            dividend_amount,
            split_coefficient,
        }
    }

    /// Returns true if a dividend was paid.
    #[must_use]
    pub fn has_dividend(&self) -> bool {
        self.dividend_amount != 0.0
    }

    /// Returns true if a split other than 1:1 took effect.
    #[must_use]
    pub fn has_split(&self) -> bool {
        self.split_coefficient.is_some_and(|c| c != 1.0)
    }
}

/// One observation of a time series.
///
/// A point is either raw (`adjustment` is `None`) or adjusted; a parsed
/// series never mixes the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Observation time (local to the series time zone).
    pub timestamp: NaiveDateTime,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: u64,
    /// Adjusted fields, when the series is adjusted.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<Adjustment>,
}

impl DataPoint {
    /// Creates a raw data point.
    #[must_use]
    pub const fn new(
        timestamp: NaiveDateTime,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
            adjustment: None,
        }
    }

    /// Attaches adjusted fields.
    #[must_use]
    pub const fn with_adjustment(mut self, adjustment: Adjustment) -> Self {
        self.adjustment = Some(adjustment);
        self
    }

    /// Returns true if this point carries adjusted fields.
    #[must_use]
    pub const fn is_adjusted(&self) -> bool {
        self.adjustment.is_some()
    }

    /// Returns the adjusted close, if any.
    #[must_use]
    pub fn adjusted_close(&self) -> Option<f64> {
        self.adjustment.map(|a| a.adjusted_close)
    }

    /// Returns the calendar date of the observation.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_raw_point() {
        let point = DataPoint::new(timestamp(), 161.5, 163.2, 160.9, 162.8, 3_870_000);
        assert!(!point.is_adjusted());
        assert_eq!(point.adjusted_close(), None);
        assert_relative_eq!(point.range(), 2.3, epsilon = 1e-9);
        assert_eq!(point.date(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_adjusted_point() {
        let point = DataPoint::new(timestamp(), 161.5, 163.2, 160.9, 162.8, 3_870_000)
            .with_adjustment(Adjustment::new(158.1, 1.66, Some(1.0)));
        assert!(point.is_adjusted());
        assert_relative_eq!(point.adjusted_close().unwrap(), 158.1);

        let adjustment = point.adjustment.unwrap();
        assert!(adjustment.has_dividend());
        assert!(!adjustment.has_split());
    }

    #[test]
    fn test_serialize_flattens_adjustment() {
        let raw = DataPoint::new(timestamp(), 1.0, 2.0, 0.5, 1.5, 10);
        let json = serde_json::to_value(raw).unwrap();
        assert!(json.get("adjusted_close").is_none());
        assert_eq!(json["timestamp"], "2024-01-02T00:00:00");

        let adjusted = raw.with_adjustment(Adjustment::new(1.4, 0.0, None));
        let json = serde_json::to_value(adjusted).unwrap();
        assert_eq!(json["adjusted_close"], 1.4);
        assert!(json.get("split_coefficient").is_none());
    }
}

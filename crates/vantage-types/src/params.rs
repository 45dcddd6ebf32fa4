//! Enumerated request parameters.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sampling interval between observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interval {
    /// 1-minute bars.
    #[serde(rename = "1min")]
    Min1,
    /// 5-minute bars.
    #[serde(rename = "5min")]
    Min5,
    /// 15-minute bars.
    #[serde(rename = "15min")]
    Min15,
    /// 30-minute bars.
    #[serde(rename = "30min")]
    Min30,
    /// 60-minute bars.
    #[serde(rename = "60min")]
    Min60,
    /// Daily bars.
    #[default]
    #[serde(rename = "daily")]
    Daily,
    /// Weekly bars.
    #[serde(rename = "weekly")]
    Weekly,
    /// Monthly bars.
    #[serde(rename = "monthly")]
    Monthly,
}

impl Interval {
    /// Returns the query value for this interval.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Min1 => "1min",
            Self::Min5 => "5min",
            Self::Min15 => "15min",
            Self::Min30 => "30min",
            Self::Min60 => "60min",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Returns true for sub-daily intervals.
    #[must_use]
    pub const fn is_intraday(&self) -> bool {
        matches!(
            self,
            Self::Min1 | Self::Min5 | Self::Min15 | Self::Min30 | Self::Min60
        )
    }

    /// Returns all available intervals.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Min1,
            Self::Min5,
            Self::Min15,
            Self::Min30,
            Self::Min60,
            Self::Daily,
            Self::Weekly,
            Self::Monthly,
        ]
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1min" | "1m" => Ok(Self::Min1),
            "5min" | "5m" => Ok(Self::Min5),
            "15min" | "15m" => Ok(Self::Min15),
            "30min" | "30m" => Ok(Self::Min30),
            "60min" | "60m" | "1h" => Ok(Self::Min60),
            "daily" | "1d" | "day" => Ok(Self::Daily),
            "weekly" | "1w" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            _ => Err(ParamParseError::new(
                "interval",
                s,
                "1min, 5min, 15min, 30min, 60min, daily, weekly, monthly",
            )),
        }
    }
}

/// Price field an indicator is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    /// Opening price.
    Open,
    /// Highest price.
    High,
    /// Lowest price.
    Low,
    /// Closing price.
    Close,
}

impl SeriesType {
    /// Returns the query value for this series type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
        }
    }
}

impl std::fmt::Display for SeriesType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SeriesType {
    type Err = ParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "high" => Ok(Self::High),
            "low" => Ok(Self::Low),
            "close" => Ok(Self::Close),
            _ => Err(ParamParseError::new(
                "series type",
                s,
                "open, high, low, close",
            )),
        }
    }
}

/// Moving-average algorithm selector.
///
/// The API encodes these as integers `0..=8` in the order declared here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaType {
    /// Simple moving average.
    #[default]
    Sma,
    /// Exponential moving average.
    Ema,
    /// Weighted moving average.
    Wma,
    /// Double exponential moving average.
    Dema,
    /// Triple exponential moving average.
    Tema,
    /// Triangular moving average.
    Trima,
    /// T3 moving average.
    T3,
    /// Kaufman adaptive moving average.
    Kama,
    /// MESA adaptive moving average.
    Mama,
}

impl MaType {
    /// Returns the integer code used in query parameters.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Sma => 0,
            Self::Ema => 1,
            Self::Wma => 2,
            Self::Dema => 3,
            Self::Tema => 4,
            Self::Trima => 5,
            Self::T3 => 6,
            Self::Kama => 7,
            Self::Mama => 8,
        }
    }

    /// Looks up a moving-average type by its integer code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Sma),
            1 => Some(Self::Ema),
            2 => Some(Self::Wma),
            3 => Some(Self::Dema),
            4 => Some(Self::Tema),
            5 => Some(Self::Trima),
            6 => Some(Self::T3),
            7 => Some(Self::Kama),
            8 => Some(Self::Mama),
            _ => None,
        }
    }

    /// Returns the short upper-case name (e.g. `SMA`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sma => "SMA",
            Self::Ema => "EMA",
            Self::Wma => "WMA",
            Self::Dema => "DEMA",
            Self::Tema => "TEMA",
            Self::Trima => "TRIMA",
            Self::T3 => "T3",
            Self::Kama => "KAMA",
            Self::Mama => "MAMA",
        }
    }
}

impl std::fmt::Display for MaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MaType {
    type Err = ParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(ma) = s.parse::<u8>().ok().and_then(Self::from_code) {
            return Ok(ma);
        }
        match s.to_uppercase().as_str() {
            "SMA" => Ok(Self::Sma),
            "EMA" => Ok(Self::Ema),
            "WMA" => Ok(Self::Wma),
            "DEMA" => Ok(Self::Dema),
            "TEMA" => Ok(Self::Tema),
            "TRIMA" => Ok(Self::Trima),
            "T3" => Ok(Self::T3),
            "KAMA" => Ok(Self::Kama),
            "MAMA" => Ok(Self::Mama),
            _ => Err(ParamParseError::new(
                "moving average type",
                s,
                "0-8 or SMA, EMA, WMA, DEMA, TEMA, TRIMA, T3, KAMA, MAMA",
            )),
        }
    }
}

/// Amount of history returned by time series endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputSize {
    /// Latest 100 observations.
    #[default]
    Compact,
    /// Full available history.
    Full,
}

impl OutputSize {
    /// Returns the query value for this output size.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }
}

impl std::fmt::Display for OutputSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputSize {
    type Err = ParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "full" => Ok(Self::Full),
            _ => Err(ParamParseError::new("output size", s, "compact, full")),
        }
    }
}

/// Body encoding requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// JSON body.
    #[default]
    Json,
    /// CSV body.
    Csv,
}

impl DataType {
    /// Returns the query value for this data type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataType {
    type Err = ParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(ParamParseError::new("data type", s, "json, csv")),
        }
    }
}

/// Error returned when parsing an invalid parameter string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamParseError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl ParamParseError {
    /// Creates an error for `value`, listing the accepted spellings.
    #[must_use]
    pub fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

impl std::fmt::Display for ParamParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid {} '{}', expected one of: {}",
            self.kind, self.value, self.expected
        )
    }
}

impl std::error::Error for ParamParseError {}

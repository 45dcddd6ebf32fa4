//! Indicator parameters and their values.

use serde::Serialize;
use vantage_types::{MaType, ParamParseError, SeriesType};

/// An indicator-specific query parameter.
///
/// Declaration order is the order parameters appear in a serialized query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Param {
    /// Number of data points in each window.
    #[serde(rename = "time_period")]
    TimePeriod,
    /// Price field the indicator is computed over.
    #[serde(rename = "series_type")]
    SeriesType,
    /// Fast %K period.
    #[serde(rename = "fastkperiod")]
    FastKPeriod,
    /// Fast %D period.
    #[serde(rename = "fastdperiod")]
    FastDPeriod,
    /// Fast %D moving average type.
    #[serde(rename = "fastdmatype")]
    FastDMaType,
    /// Slow %K period.
    #[serde(rename = "slowkperiod")]
    SlowKPeriod,
    /// Slow %D period.
    #[serde(rename = "slowdperiod")]
    SlowDPeriod,
    /// Slow %K moving average type.
    #[serde(rename = "slowkmatype")]
    SlowKMaType,
    /// Slow %D moving average type.
    #[serde(rename = "slowdmatype")]
    SlowDMaType,
    /// Fast EMA period.
    #[serde(rename = "fastperiod")]
    FastPeriod,
    /// Slow EMA period.
    #[serde(rename = "slowperiod")]
    SlowPeriod,
    /// Signal line period.
    #[serde(rename = "signalperiod")]
    SignalPeriod,
    /// Standard deviation multiplier for the upper band.
    #[serde(rename = "nbdevup")]
    NbDevUp,
    /// Standard deviation multiplier for the lower band.
    #[serde(rename = "nbdevdn")]
    NbDevDn,
    /// Moving average type.
    #[serde(rename = "matype")]
    MaType,
}

impl Param {
    /// Returns the query parameter name.
    #[must_use]
    pub const fn query_name(&self) -> &'static str {
        match self {
            Self::TimePeriod => "time_period",
            Self::SeriesType => "series_type",
            Self::FastKPeriod => "fastkperiod",
            Self::FastDPeriod => "fastdperiod",
            Self::FastDMaType => "fastdmatype",
            Self::SlowKPeriod => "slowkperiod",
            Self::SlowDPeriod => "slowdperiod",
            Self::SlowKMaType => "slowkmatype",
            Self::SlowDMaType => "slowdmatype",
            Self::FastPeriod => "fastperiod",
            Self::SlowPeriod => "slowperiod",
            Self::SignalPeriod => "signalperiod",
            Self::NbDevUp => "nbdevup",
            Self::NbDevDn => "nbdevdn",
            Self::MaType => "matype",
        }
    }

    /// Returns the kind of value this parameter accepts.
    #[must_use]
    pub const fn value_kind(&self) -> ValueKind {
        match self {
            Self::SeriesType => ValueKind::SeriesType,
            Self::FastDMaType | Self::SlowKMaType | Self::SlowDMaType | Self::MaType => {
                ValueKind::MaType
            }
            _ => ValueKind::Period,
        }
    }

    /// Looks up a parameter by its query name (case-insensitive).
    #[must_use]
    pub fn from_query_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|p| p.query_name() == name)
    }

    /// Parses a textual value according to this parameter's value kind.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a valid value of that kind.
    pub fn parse_value(&self, raw: &str) -> Result<ParamValue, ParamParseError> {
        match self.value_kind() {
            ValueKind::Period => raw
                .trim()
                .parse()
                .map(ParamValue::Period)
                .map_err(|_| ParamParseError::new(self.query_name(), raw, "a non-negative integer")),
            ValueKind::SeriesType => raw.parse().map(ParamValue::Series),
            ValueKind::MaType => raw.parse().map(ParamValue::Ma),
        }
    }

    /// Returns all parameters in query order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::TimePeriod,
            Self::SeriesType,
            Self::FastKPeriod,
            Self::FastDPeriod,
            Self::FastDMaType,
            Self::SlowKPeriod,
            Self::SlowDPeriod,
            Self::SlowKMaType,
            Self::SlowDMaType,
            Self::FastPeriod,
            Self::SlowPeriod,
            Self::SignalPeriod,
            Self::NbDevUp,
            Self::NbDevDn,
            Self::MaType,
        ]
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.query_name())
    }
}

/// Shape of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Positive integer count.
    Period,
    /// [`SeriesType`] selector.
    SeriesType,
    /// [`MaType`] selector.
    MaType,
}

impl ValueKind {
    /// Returns a human-readable description.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Period => "a positive integer",
            Self::SeriesType => "a series type",
            Self::MaType => "a moving average type",
        }
    }
}

/// A typed parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Integer count.
    Period(u32),
    /// Price field selector.
    Series(SeriesType),
    /// Moving average selector.
    Ma(MaType),
}

impl ParamValue {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Period(_) => ValueKind::Period,
            Self::Series(_) => ValueKind::SeriesType,
            Self::Ma(_) => ValueKind::MaType,
        }
    }

    /// Returns the value as it appears in a query string.
    #[must_use]
    pub fn query_value(&self) -> String {
        match self {
            Self::Period(n) => n.to_string(),
            Self::Series(s) => s.as_str().to_string(),
            Self::Ma(m) => m.code().to_string(),
        }
    }

    /// Returns the period count, if this is one.
    #[must_use]
    pub const fn as_period(&self) -> Option<u32> {
        match self {
            Self::Period(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the series type, if this is one.
    #[must_use]
    pub const fn as_series_type(&self) -> Option<SeriesType> {
        match self {
            Self::Series(s) => Some(*s),
            _ => None,
        }
    }

    /// Returns the moving average type, if this is one.
    #[must_use]
    pub const fn as_ma_type(&self) -> Option<MaType> {
        match self {
            Self::Ma(m) => Some(*m),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Period(n) => write!(f, "{n}"),
            Self::Series(s) => write!(f, "{s}"),
            Self::Ma(m) => write!(f, "{m}"),
        }
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Period(value)
    }
}

impl From<SeriesType> for ParamValue {
    fn from(value: SeriesType) -> Self {
        Self::Series(value)
    }
}

impl From<MaType> for ParamValue {
    fn from(value: MaType) -> Self {
        Self::Ma(value)
    }
}

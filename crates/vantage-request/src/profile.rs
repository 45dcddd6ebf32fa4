//! Per-indicator parameter profiles.
//!
//! Every indicator shares the same builder; what differs between them is
//! captured here as data: the `function` code, which parameters are accepted,
//! and the default each parameter falls back to when unset.

use std::str::FromStr;

use serde::Serialize;
use vantage_types::MaType;

use crate::{Param, ParamValue};

/// Technical indicator selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IndicatorKind {
    /// Simple moving average.
    Sma,
    /// Exponential moving average.
    Ema,
    /// Weighted moving average.
    Wma,
    /// Double exponential moving average.
    Dema,
    /// Triple exponential moving average.
    Tema,
    /// Relative strength index.
    Rsi,
    /// Stochastic relative strength index.
    StochRsi,
    /// Stochastic oscillator.
    Stoch,
    /// Moving average convergence/divergence.
    Macd,
    /// Bollinger bands.
    Bbands,
    /// Average directional movement index.
    Adx,
    /// Average true range.
    Atr,
    /// On balance volume.
    Obv,
    /// Volume weighted average price.
    Vwap,
}

impl IndicatorKind {
    /// Returns the API `function` code.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.profile().function
    }

    /// Returns the static profile for this indicator.
    #[must_use]
    pub const fn profile(&self) -> &'static IndicatorProfile {
        match self {
            Self::Sma => &SMA,
            Self::Ema => &EMA,
            Self::Wma => &WMA,
            Self::Dema => &DEMA,
            Self::Tema => &TEMA,
            Self::Rsi => &RSI,
            Self::StochRsi => &STOCHRSI,
            Self::Stoch => &STOCH,
            Self::Macd => &MACD,
            Self::Bbands => &BBANDS,
            Self::Adx => &ADX,
            Self::Atr => &ATR,
            Self::Obv => &OBV,
            Self::Vwap => &VWAP,
        }
    }

    /// Returns all supported indicators.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Sma,
            Self::Ema,
            Self::Wma,
            Self::Dema,
            Self::Tema,
            Self::Rsi,
            Self::StochRsi,
            Self::Stoch,
            Self::Macd,
            Self::Bbands,
            Self::Adx,
            Self::Atr,
            Self::Obv,
            Self::Vwap,
        ]
    }

    /// Searches indicators by function code or description (case-insensitive).
    pub fn search(pattern: &str) -> Vec<Self> {
        let pattern = pattern.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .filter(|kind| {
                let profile = kind.profile();
                profile.function.to_lowercase().contains(&pattern)
                    || profile.description.to_lowercase().contains(&pattern)
            })
            .collect()
    }
}

impl std::fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.function())
    }
}

impl FromStr for IndicatorKind {
    type Err = UnknownIndicator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.function() == code)
            .ok_or_else(|| UnknownIndicator(s.to_string()))
    }
}

/// Error returned when an indicator code is not in the profile table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIndicator(String);

impl std::fmt::Display for UnknownIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown indicator '{}'", self.0)
    }
}

impl std::error::Error for UnknownIndicator {}

/// One accepted parameter and its fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// The parameter.
    pub param: Param,
    /// Value applied when the caller leaves the parameter unset. `None`
    /// means the parameter is omitted from the query instead.
    pub default: Option<ParamValue>,
}

impl ParamSpec {
    const fn optional(param: Param) -> Self {
        Self {
            param,
            default: None,
        }
    }

    const fn with_default(param: Param, default: ParamValue) -> Self {
        Self {
            param,
            default: Some(default),
        }
    }
}

/// Static description of one indicator.
#[derive(Debug)]
pub struct IndicatorProfile {
    /// API `function` code.
    pub function: &'static str,
    /// Human-readable name.
    pub description: &'static str,
    /// Accepted parameters in query order.
    pub params: &'static [ParamSpec],
    /// Whether the indicator is only defined for intraday intervals.
    pub intraday_only: bool,
}

impl IndicatorProfile {
    /// Returns the spec for `param`, or `None` if it is not accepted.
    #[must_use]
    pub fn spec(&self, param: Param) -> Option<&ParamSpec> {
        self.params.iter().find(|spec| spec.param == param)
    }

    /// Returns true if `param` is accepted.
    #[must_use]
    pub fn supports(&self, param: Param) -> bool {
        self.spec(param).is_some()
    }

    /// Returns the documented default for `param`.
    #[must_use]
    pub fn default_for(&self, param: Param) -> Option<ParamValue> {
        self.spec(param).and_then(|spec| spec.default)
    }
}

const WINDOWED_SERIES: &[ParamSpec] = &[
    ParamSpec::optional(Param::TimePeriod),
    ParamSpec::optional(Param::SeriesType),
];

const WINDOWED: &[ParamSpec] = &[ParamSpec::optional(Param::TimePeriod)];

const SMA_CODE: ParamValue = ParamValue::Ma(MaType::Sma);

const SMA: IndicatorProfile = IndicatorProfile {
    function: "SMA",
    description: "Simple moving average",
    params: WINDOWED_SERIES,
    intraday_only: false,
};

const EMA: IndicatorProfile = IndicatorProfile {
    function: "EMA",
    description: "Exponential moving average",
    params: WINDOWED_SERIES,
    intraday_only: false,
};

const WMA: IndicatorProfile = IndicatorProfile {
    function: "WMA",
    description: "Weighted moving average",
    params: WINDOWED_SERIES,
    intraday_only: false,
};

const DEMA: IndicatorProfile = IndicatorProfile {
    function: "DEMA",
    description: "Double exponential moving average",
    params: WINDOWED_SERIES,
    intraday_only: false,
};

const TEMA: IndicatorProfile = IndicatorProfile {
    function: "TEMA",
    description: "Triple exponential moving average",
    params: WINDOWED_SERIES,
    intraday_only: false,
};

const RSI: IndicatorProfile = IndicatorProfile {
    function: "RSI",
    description: "Relative strength index",
    params: WINDOWED_SERIES,
    intraday_only: false,
};

const STOCHRSI: IndicatorProfile = IndicatorProfile {
    function: "STOCHRSI",
    description: "Stochastic relative strength index",
    params: &[
        ParamSpec::optional(Param::TimePeriod),
        ParamSpec::optional(Param::SeriesType),
        ParamSpec::with_default(Param::FastKPeriod, ParamValue::Period(5)),
        ParamSpec::with_default(Param::FastDPeriod, ParamValue::Period(3)),
        ParamSpec::with_default(Param::FastDMaType, SMA_CODE),
    ],
    intraday_only: false,
};

const STOCH: IndicatorProfile = IndicatorProfile {
    function: "STOCH",
    description: "Stochastic oscillator",
    params: &[
        ParamSpec::with_default(Param::FastKPeriod, ParamValue::Period(5)),
        ParamSpec::with_default(Param::SlowKPeriod, ParamValue::Period(3)),
        ParamSpec::with_default(Param::SlowDPeriod, ParamValue::Period(3)),
        ParamSpec::with_default(Param::SlowKMaType, SMA_CODE),
        ParamSpec::with_default(Param::SlowDMaType, SMA_CODE),
    ],
    intraday_only: false,
};

const MACD: IndicatorProfile = IndicatorProfile {
    function: "MACD",
    description: "Moving average convergence/divergence",
    params: &[
        ParamSpec::optional(Param::SeriesType),
        ParamSpec::with_default(Param::FastPeriod, ParamValue::Period(12)),
        ParamSpec::with_default(Param::SlowPeriod, ParamValue::Period(26)),
        ParamSpec::with_default(Param::SignalPeriod, ParamValue::Period(9)),
    ],
    intraday_only: false,
};

const BBANDS: IndicatorProfile = IndicatorProfile {
    function: "BBANDS",
    description: "Bollinger bands",
    params: &[
        ParamSpec::optional(Param::TimePeriod),
        ParamSpec::optional(Param::SeriesType),
        ParamSpec::with_default(Param::NbDevUp, ParamValue::Period(2)),
        ParamSpec::with_default(Param::NbDevDn, ParamValue::Period(2)),
        ParamSpec::with_default(Param::MaType, SMA_CODE),
    ],
    intraday_only: false,
};

const ADX: IndicatorProfile = IndicatorProfile {
    function: "ADX",
    description: "Average directional movement index",
    params: WINDOWED,
    intraday_only: false,
};

const ATR: IndicatorProfile = IndicatorProfile {
    function: "ATR",
    description: "Average true range",
    params: WINDOWED,
    intraday_only: false,
};

const OBV: IndicatorProfile = IndicatorProfile {
    function: "OBV",
    description: "On balance volume",
    params: &[],
    intraday_only: false,
};

const VWAP: IndicatorProfile = IndicatorProfile {
    function: "VWAP",
    description: "Volume weighted average price",
    params: &[],
    intraday_only: true,
};

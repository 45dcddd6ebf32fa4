//! Stock time series endpoints.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ParamParseError;

/// Time series endpoint selector.
///
/// Adjusted endpoints return split/dividend fields in every row, which the
/// response parser must know about up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeSeriesFunction {
    /// Intraday bars (requires an intraday interval).
    Intraday,
    /// Daily bars.
    Daily,
    /// Daily bars with adjusted close, dividends and splits.
    DailyAdjusted,
    /// Weekly bars.
    Weekly,
    /// Weekly bars with adjusted close and dividends.
    WeeklyAdjusted,
    /// Monthly bars.
    Monthly,
    /// Monthly bars with adjusted close and dividends.
    MonthlyAdjusted,
}

impl TimeSeriesFunction {
    /// Returns the API `function` code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Intraday => "TIME_SERIES_INTRADAY",
            Self::Daily => "TIME_SERIES_DAILY",
            Self::DailyAdjusted => "TIME_SERIES_DAILY_ADJUSTED",
            Self::Weekly => "TIME_SERIES_WEEKLY",
            Self::WeeklyAdjusted => "TIME_SERIES_WEEKLY_ADJUSTED",
            Self::Monthly => "TIME_SERIES_MONTHLY",
            Self::MonthlyAdjusted => "TIME_SERIES_MONTHLY_ADJUSTED",
        }
    }

    /// Returns true if rows carry adjusted fields.
    #[must_use]
    pub const fn is_adjusted(&self) -> bool {
        matches!(
            self,
            Self::DailyAdjusted | Self::WeeklyAdjusted | Self::MonthlyAdjusted
        )
    }

    /// Returns true for the intraday endpoint.
    #[must_use]
    pub const fn is_intraday(&self) -> bool {
        matches!(self, Self::Intraday)
    }

    /// Returns true if the endpoint accepts an `outputsize` parameter.
    #[must_use]
    pub const fn accepts_output_size(&self) -> bool {
        matches!(self, Self::Intraday | Self::Daily | Self::DailyAdjusted)
    }

    /// Returns the kebab-case name used on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Intraday => "intraday",
            Self::Daily => "daily",
            Self::DailyAdjusted => "daily-adjusted",
            Self::Weekly => "weekly",
            Self::WeeklyAdjusted => "weekly-adjusted",
            Self::Monthly => "monthly",
            Self::MonthlyAdjusted => "monthly-adjusted",
        }
    }
}

impl std::fmt::Display for TimeSeriesFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeSeriesFunction {
    type Err = ParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase().replace('_', "-");
        let name = lowered.strip_prefix("time-series-").unwrap_or(&lowered);
        match name {
            "intraday" => Ok(Self::Intraday),
            "daily" => Ok(Self::Daily),
            "daily-adjusted" => Ok(Self::DailyAdjusted),
            "weekly" => Ok(Self::Weekly),
            "weekly-adjusted" => Ok(Self::WeeklyAdjusted),
            "monthly" => Ok(Self::Monthly),
            "monthly-adjusted" => Ok(Self::MonthlyAdjusted),
            _ => Err(ParamParseError::new(
                "time series function",
                s,
                "intraday, daily, daily-adjusted, weekly, weekly-adjusted, monthly, monthly-adjusted",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjusted_flags() {
        assert!(TimeSeriesFunction::DailyAdjusted.is_adjusted());
        assert!(TimeSeriesFunction::MonthlyAdjusted.is_adjusted());
        assert!(!TimeSeriesFunction::Intraday.is_adjusted());
        assert!(!TimeSeriesFunction::Weekly.is_adjusted());
    }

    #[test]
    fn test_parse_accepts_api_codes() {
        assert_eq!(
            "TIME_SERIES_DAILY_ADJUSTED"
                .parse::<TimeSeriesFunction>()
                .unwrap(),
            TimeSeriesFunction::DailyAdjusted
        );
        assert_eq!(
            "weekly".parse::<TimeSeriesFunction>().unwrap(),
            TimeSeriesFunction::Weekly
        );
        assert!("hourly".parse::<TimeSeriesFunction>().is_err());
    }
}

//! Generic technical indicator builder and its frozen request.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};
use vantage_types::{ConfigError, DataType, Interval, MaType, SeriesType, Symbol};

use crate::query::{QueryPairs, encode_query};
use crate::{IndicatorKind, Param, ParamValue};

/// Fluent, mutable accumulator for an [`IndicatorRequest`].
///
/// Setters never fail; every check is deferred to [`build`](Self::build).
/// Setting the same parameter twice keeps the last value.
///
/// # Example
///
/// ```
/// use vantage_request::{IndicatorBuilder, IndicatorKind, Param};
/// use vantage_types::{Interval, MaType, SeriesType};
///
/// let request = IndicatorBuilder::new(IndicatorKind::StochRsi, "IBM")
///     .interval(Interval::Weekly)
///     .time_period(10)
///     .series_type(SeriesType::Close)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.period(Param::FastKPeriod), Some(5));
/// assert_eq!(request.ma_type(Param::FastDMaType), Some(MaType::Sma));
/// ```
#[derive(Debug, Clone)]
pub struct IndicatorBuilder {
    kind: IndicatorKind,
    symbol: String,
    interval: Option<Interval>,
    data_type: Option<DataType>,
    params: BTreeMap<Param, ParamValue>,
}

impl IndicatorBuilder {
    /// Starts a builder for `kind` on `symbol`.
    #[must_use]
    pub fn new(kind: IndicatorKind, symbol: impl Into<String>) -> Self {
        Self {
            kind,
            symbol: symbol.into(),
            interval: None,
            data_type: None,
            params: BTreeMap::new(),
        }
    }

    /// Sets the sampling interval (default: daily).
    #[must_use]
    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets the response body encoding (default: JSON).
    #[must_use]
    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    /// Sets any indicator parameter.
    #[must_use]
    pub fn set(mut self, param: Param, value: impl Into<ParamValue>) -> Self {
        self.params.insert(param, value.into());
        self
    }

    /// Sets the window length.
    #[must_use]
    pub fn time_period(self, period: u32) -> Self {
        self.set(Param::TimePeriod, period)
    }

    /// Sets the price field.
    #[must_use]
    pub fn series_type(self, series_type: SeriesType) -> Self {
        self.set(Param::SeriesType, series_type)
    }

    /// Sets the fast %K period.
    #[must_use]
    pub fn fast_k_period(self, period: u32) -> Self {
        self.set(Param::FastKPeriod, period)
    }

    /// Sets the fast %D period.
    #[must_use]
    pub fn fast_d_period(self, period: u32) -> Self {
        self.set(Param::FastDPeriod, period)
    }

    /// Sets the fast %D moving average type.
    #[must_use]
    pub fn fast_d_ma_type(self, ma_type: MaType) -> Self {
        self.set(Param::FastDMaType, ma_type)
    }

    /// Sets the slow %K period.
    #[must_use]
    pub fn slow_k_period(self, period: u32) -> Self {
        self.set(Param::SlowKPeriod, period)
    }

    /// Sets the slow %D period.
    #[must_use]
    pub fn slow_d_period(self, period: u32) -> Self {
        self.set(Param::SlowDPeriod, period)
    }

    /// Sets the slow %K moving average type.
    #[must_use]
    pub fn slow_k_ma_type(self, ma_type: MaType) -> Self {
        self.set(Param::SlowKMaType, ma_type)
    }

    /// Sets the slow %D moving average type.
    #[must_use]
    pub fn slow_d_ma_type(self, ma_type: MaType) -> Self {
        self.set(Param::SlowDMaType, ma_type)
    }

    /// Sets the fast EMA period.
    #[must_use]
    pub fn fast_period(self, period: u32) -> Self {
        self.set(Param::FastPeriod, period)
    }

    /// Sets the slow EMA period.
    #[must_use]
    pub fn slow_period(self, period: u32) -> Self {
        self.set(Param::SlowPeriod, period)
    }

    /// Sets the signal line period.
    #[must_use]
    pub fn signal_period(self, period: u32) -> Self {
        self.set(Param::SignalPeriod, period)
    }

    /// Sets the upper band deviation multiplier.
    #[must_use]
    pub fn nb_dev_up(self, multiplier: u32) -> Self {
        self.set(Param::NbDevUp, multiplier)
    }

    /// Sets the lower band deviation multiplier.
    #[must_use]
    pub fn nb_dev_dn(self, multiplier: u32) -> Self {
        self.set(Param::NbDevDn, multiplier)
    }

    /// Sets the moving average type.
    #[must_use]
    pub fn ma_type(self, ma_type: MaType) -> Self {
        self.set(Param::MaType, ma_type)
    }

    /// Validates the accumulated fields and freezes them into a request.
    ///
    /// Unset parameters that have a documented default receive it; unset
    /// parameters without one are left out of the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is invalid, a parameter is not
    /// accepted by the indicator or has the wrong value type, a period is
    /// zero, or the combination is inconsistent.
    pub fn build(self) -> Result<IndicatorRequest, ConfigError> {
        let profile = self.kind.profile();
        let function = profile.function;
        let symbol = Symbol::parse(&self.symbol)?;

        for (param, value) in &self.params {
            if !profile.supports(*param) {
                return Err(ConfigError::UnsupportedParameter {
                    function,
                    parameter: param.query_name(),
                });
            }
            if value.kind() != param.value_kind() {
                return Err(ConfigError::WrongValueType {
                    function,
                    parameter: param.query_name(),
                    expected: param.value_kind().as_str(),
                });
            }
            if *value == ParamValue::Period(0) {
                return Err(ConfigError::NonPositivePeriod {
                    function,
                    parameter: param.query_name(),
                });
            }
        }

        let interval = self.interval.unwrap_or_default();
        if profile.intraday_only && !interval.is_intraday() {
            return Err(ConfigError::Inconsistent {
                function,
                reason: format!("requires an intraday interval, got {interval}"),
            });
        }

        let mut params = Vec::with_capacity(profile.params.len());
        for spec in profile.params {
            if let Some(value) = self.params.get(&spec.param) {
                params.push((spec.param, *value));
            } else if let Some(default) = spec.default {
                trace!(function, parameter = spec.param.query_name(), %default, "applying default");
                params.push((spec.param, default));
            }
        }

        let request = IndicatorRequest {
            kind: self.kind,
            symbol,
            interval,
            data_type: self.data_type.unwrap_or_default(),
            params,
        };
        request.check_consistency()?;

        debug!(function, symbol = %request.symbol, %interval, "built indicator request");
        Ok(request)
    }
}

/// Immutable, fully-resolved indicator request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorRequest {
    kind: IndicatorKind,
    symbol: Symbol,
    interval: Interval,
    data_type: DataType,
    params: Vec<(Param, ParamValue)>,
}

impl IndicatorRequest {
    /// Starts a builder; shorthand for [`IndicatorBuilder::new`].
    #[must_use]
    pub fn builder(kind: IndicatorKind, symbol: impl Into<String>) -> IndicatorBuilder {
        IndicatorBuilder::new(kind, symbol)
    }

    /// Returns the indicator kind.
    #[must_use]
    pub const fn kind(&self) -> IndicatorKind {
        self.kind
    }

    /// Returns the API `function` code.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.kind.function()
    }

    /// Returns the symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Returns the sampling interval.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }

    /// Returns the requested body encoding.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns the resolved parameters in query order.
    #[must_use]
    pub fn params(&self) -> &[(Param, ParamValue)] {
        &self.params
    }

    /// Returns the resolved value of `param`.
    #[must_use]
    pub fn get(&self, param: Param) -> Option<ParamValue> {
        self.params
            .iter()
            .find(|(p, _)| *p == param)
            .map(|(_, value)| *value)
    }

    /// Returns a period-valued parameter.
    #[must_use]
    pub fn period(&self, param: Param) -> Option<u32> {
        self.get(param).and_then(|v| v.as_period())
    }

    /// Returns a moving-average-valued parameter.
    #[must_use]
    pub fn ma_type(&self, param: Param) -> Option<MaType> {
        self.get(param).and_then(|v| v.as_ma_type())
    }

    /// Returns the window length, if set.
    #[must_use]
    pub fn time_period(&self) -> Option<u32> {
        self.period(Param::TimePeriod)
    }

    /// Returns the price field, if set.
    #[must_use]
    pub fn series_type(&self) -> Option<SeriesType> {
        self.get(Param::SeriesType)
            .and_then(|v| v.as_series_type())
    }

    /// Returns the ordered query pairs (without credentials).
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::with_capacity(self.params.len() + 4);
        pairs.push(("function", self.function().to_string()));
        pairs.push(("symbol", self.symbol.to_string()));
        pairs.push(("interval", self.interval.as_str().to_string()));
        for (param, value) in &self.params {
            pairs.push((param.query_name(), value.query_value()));
        }
        pairs.push(("datatype", self.data_type.as_str().to_string()));
        pairs
    }

    /// Returns the percent-encoded query string.
    #[must_use]
    pub fn query_string(&self) -> String {
        encode_query(&self.query_pairs())
    }

    fn check_consistency(&self) -> Result<(), ConfigError> {
        if self.kind == IndicatorKind::Macd
            && let (Some(fast), Some(slow)) =
                (self.period(Param::FastPeriod), self.period(Param::SlowPeriod))
            && fast >= slow
        {
            return Err(ConfigError::Inconsistent {
                function: self.function(),
                reason: format!("fastperiod ({fast}) must be shorter than slowperiod ({slow})"),
            });
        }
        Ok(())
    }
}

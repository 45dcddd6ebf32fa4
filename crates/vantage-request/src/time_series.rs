//! Stock time series requests.

use serde::Serialize;
use tracing::debug;
use vantage_types::{ConfigError, DataType, Interval, OutputSize, Symbol, TimeSeriesFunction};

use crate::query::{QueryPairs, encode_query};

/// Fluent accumulator for a [`TimeSeriesRequest`].
#[derive(Debug, Clone)]
pub struct TimeSeriesBuilder {
    function: TimeSeriesFunction,
    symbol: String,
    interval: Option<Interval>,
    output_size: Option<OutputSize>,
    data_type: Option<DataType>,
}

impl TimeSeriesBuilder {
    /// Starts a builder for `function` on `symbol`.
    #[must_use]
    pub fn new(function: TimeSeriesFunction, symbol: impl Into<String>) -> Self {
        Self {
            function,
            symbol: symbol.into(),
            interval: None,
            output_size: None,
            data_type: None,
        }
    }

    /// Sets the bar interval (intraday only).
    #[must_use]
    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets the amount of history (default: compact).
    #[must_use]
    pub fn output_size(mut self, output_size: OutputSize) -> Self {
        self.output_size = Some(output_size);
        self
    }

    /// Sets the response body encoding (default: JSON).
    #[must_use]
    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    /// Validates the accumulated fields and freezes them into a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is invalid, the intraday endpoint has
    /// no intraday interval, or a field is given to an endpoint that does
    /// not accept it.
    pub fn build(self) -> Result<TimeSeriesRequest, ConfigError> {
        let function = self.function.code();
        let symbol = Symbol::parse(&self.symbol)?;

        let interval = match (self.function.is_intraday(), self.interval) {
            (true, None) => {
                return Err(ConfigError::MissingParameter {
                    function,
                    parameter: "interval",
                });
            }
            (true, Some(interval)) if !interval.is_intraday() => {
                return Err(ConfigError::Inconsistent {
                    function,
                    reason: format!("requires an intraday interval, got {interval}"),
                });
            }
            (false, Some(_)) => {
                return Err(ConfigError::UnsupportedParameter {
                    function,
                    parameter: "interval",
                });
            }
            (_, interval) => interval,
        };

        let output_size = if self.function.accepts_output_size() {
            Some(self.output_size.unwrap_or_default())
        } else if self.output_size.is_some() {
            return Err(ConfigError::UnsupportedParameter {
                function,
                parameter: "outputsize",
            });
        } else {
            None
        };

        debug!(function, %symbol, "built time series request");
        Ok(TimeSeriesRequest {
            function: self.function,
            symbol,
            interval,
            output_size,
            data_type: self.data_type.unwrap_or_default(),
        })
    }
}

/// Immutable time series request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeriesRequest {
    function: TimeSeriesFunction,
    symbol: Symbol,
    interval: Option<Interval>,
    output_size: Option<OutputSize>,
    data_type: DataType,
}

impl TimeSeriesRequest {
    /// Starts a builder; shorthand for [`TimeSeriesBuilder::new`].
    #[must_use]
    pub fn builder(function: TimeSeriesFunction, symbol: impl Into<String>) -> TimeSeriesBuilder {
        TimeSeriesBuilder::new(function, symbol)
    }

    /// Returns the endpoint.
    #[must_use]
    pub const fn function(&self) -> TimeSeriesFunction {
        self.function
    }

    /// Returns the symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Returns the bar interval (intraday only).
    #[must_use]
    pub const fn interval(&self) -> Option<Interval> {
        self.interval
    }

    /// Returns the output size, for endpoints that accept one.
    #[must_use]
    pub const fn output_size(&self) -> Option<OutputSize> {
        self.output_size
    }

    /// Returns the requested body encoding.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns true if the response rows will carry adjusted fields.
    #[must_use]
    pub const fn is_adjusted(&self) -> bool {
        self.function.is_adjusted()
    }

    /// Returns the ordered query pairs (without credentials).
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![
            ("function", self.function.code().to_string()),
            ("symbol", self.symbol.to_string()),
        ];
        if let Some(interval) = self.interval {
            pairs.push(("interval", interval.as_str().to_string()));
        }
        if let Some(output_size) = self.output_size {
            pairs.push(("outputsize", output_size.as_str().to_string()));
        }
        pairs.push(("datatype", self.data_type.as_str().to_string()));
        pairs
    }

    /// Returns the percent-encoded query string.
    #[must_use]
    pub fn query_string(&self) -> String {
        encode_query(&self.query_pairs())
    }
}

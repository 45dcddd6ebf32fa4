//! Client-side translation layer for the Alpha Vantage API.
//!
//! This is a facade crate that re-exports functionality from the vantage
//! workspace crates for convenient access.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/vantage/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use vantage_types::*;

// Re-export request builders
#[cfg(feature = "request")]
pub use vantage_request::{
    IndicatorBuilder, IndicatorKind, IndicatorProfile, IndicatorRequest, Param, ParamSpec,
    ParamValue, TimeSeriesBuilder, TimeSeriesRequest, UnknownIndicator, ValueKind, query,
};

// Re-export the response parser
#[cfg(feature = "parse")]
pub use vantage_parse::{
    ParseError, TIMESTAMP_FORMAT, TimeSeries, TimeSeriesParser, TimeSeriesResponse,
    UpstreamError, normalize_timestamp, parse_timestamp,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use vantage_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat,
};

/// Prelude module for convenient imports.
///
/// ```
/// use vantage_lib::prelude::*;
/// ```
pub mod prelude {
    pub use vantage_types::{
        Adjustment, ConfigError, DataPoint, DataType, Interval, MaType, Metadata, OutputSize,
        Result, SeriesType, Symbol, TimeSeriesFunction, VantageError,
    };

    #[cfg(feature = "request")]
    pub use vantage_request::{
        IndicatorBuilder, IndicatorKind, IndicatorRequest, Param, ParamValue, TimeSeriesBuilder,
        TimeSeriesRequest,
    };

    #[cfg(feature = "parse")]
    pub use vantage_parse::{ParseError, TimeSeries, TimeSeriesParser, TimeSeriesResponse};

    #[cfg(feature = "format")]
    pub use vantage_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}

//! Parsed responses.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use vantage_types::{DataPoint, Metadata, VantageError};

use crate::{ParseError, TimeSeriesParser};

static EMPTY_METADATA: Metadata = Metadata::empty();

/// Metadata plus the ordered data points of one successful response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    metadata: Metadata,
    points: Vec<DataPoint>,
}

impl TimeSeries {
    /// Creates a series from already decoded parts.
    #[must_use]
    pub const fn new(metadata: Metadata, points: Vec<DataPoint>) -> Self {
        Self { metadata, points }
    }

    /// Returns the metadata header.
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the data points in payload order.
    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Returns the number of data points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no data points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the points carry adjusted fields.
    #[must_use]
    pub fn is_adjusted(&self) -> bool {
        self.points.first().is_some_and(DataPoint::is_adjusted)
    }

    /// Reorders the points chronologically, oldest first.
    ///
    /// The sort is stable, so points sharing a timestamp keep their
    /// payload order.
    #[must_use]
    pub fn sorted(mut self) -> Self {
        self.points.sort_by_key(|point| point.timestamp);
        self
    }

    /// Splits the series into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Metadata, Vec<DataPoint>) {
        (self.metadata, self.points)
    }
}

/// Message of an upstream error payload.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct UpstreamError {
    message: String,
}

impl UpstreamError {
    /// Wraps an upstream message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message verbatim.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<UpstreamError> for VantageError {
    fn from(err: UpstreamError) -> Self {
        Self::Upstream(err.message)
    }
}

/// Result of parsing one time series payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSeriesResponse {
    /// The payload carried a series.
    Series(TimeSeries),
    /// The payload carried an error message instead of a series.
    Upstream(UpstreamError),
}

impl TimeSeriesResponse {
    /// Parses `payload`; shorthand for [`TimeSeriesParser::parse`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the payload is empty or any field in it
    /// is malformed.
    pub fn from_payload(payload: &Map<String, Value>, adjusted: bool) -> Result<Self, ParseError> {
        TimeSeriesParser::new(adjusted).parse(payload)
    }

    /// Returns the metadata, or empty metadata for an error payload.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        match self {
            Self::Series(series) => series.metadata(),
            Self::Upstream(_) => &EMPTY_METADATA,
        }
    }

    /// Returns the data points, or an empty slice for an error payload.
    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        match self {
            Self::Series(series) => series.points(),
            Self::Upstream(_) => &[],
        }
    }

    /// Returns the upstream message, if the payload was an error.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Series(_) => None,
            Self::Upstream(err) => Some(err.message()),
        }
    }

    /// Returns true if the payload was an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }

    /// Converts into the series, or the upstream error.
    ///
    /// # Errors
    ///
    /// Returns the [`UpstreamError`] if the payload was an error.
    pub fn into_series(self) -> Result<TimeSeries, UpstreamError> {
        match self {
            Self::Series(series) => Ok(series),
            Self::Upstream(err) => Err(err),
        }
    }
}

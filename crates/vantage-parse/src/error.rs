//! Parse errors.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;
use vantage_types::VantageError;

/// Fatal errors raised while decoding a payload.
///
/// A payload that is shaped like an upstream error message is not an error
/// here; it parses into [`TimeSeriesResponse::Upstream`](crate::TimeSeriesResponse::Upstream).
#[derive(Error, Debug)]
pub enum ParseError {
    /// The payload has no entries at all.
    #[error("payload is empty")]
    EmptyPayload,

    /// The input text is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The top-level JSON value is not an object.
    #[error("payload is not a JSON object")]
    NotAnObject,

    /// A row key is not a recognizable timestamp.
    #[error("invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        /// Raw key as found in the payload.
        value: String,
        /// Underlying chrono error.
        #[source]
        source: chrono::ParseError,
    },

    /// A price field is not a decimal number.
    #[error("{timestamp}: invalid number in '{field}': '{value}'")]
    InvalidNumber {
        /// Row timestamp.
        timestamp: String,
        /// Field key.
        field: &'static str,
        /// Raw value.
        value: String,
        /// Underlying float error.
        #[source]
        source: ParseFloatError,
    },

    /// A volume field is not a non-negative integer.
    #[error("{timestamp}: invalid integer in '{field}': '{value}'")]
    InvalidInteger {
        /// Row timestamp.
        timestamp: String,
        /// Field key.
        field: &'static str,
        /// Raw value.
        value: String,
        /// Underlying integer error.
        #[source]
        source: ParseIntError,
    },

    /// A required row field is absent.
    #[error("{timestamp}: missing field '{field}'")]
    MissingField {
        /// Row timestamp.
        timestamp: String,
        /// Field key.
        field: &'static str,
    },

    /// A field that must hold text holds another JSON value.
    #[error("field '{field}' is not a string")]
    NonTextField {
        /// Field key.
        field: &'static str,
    },
}

impl From<ParseError> for VantageError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_row_and_field() {
        let err = ParseError::MissingField {
            timestamp: "2024-01-02".to_string(),
            field: "5. volume",
        };
        assert_eq!(err.to_string(), "2024-01-02: missing field '5. volume'");
    }

    #[test]
    fn test_into_vantage_error() {
        let err: VantageError = ParseError::EmptyPayload.into();
        assert!(matches!(err, VantageError::Parse(ref msg) if msg == "payload is empty"));
    }
}

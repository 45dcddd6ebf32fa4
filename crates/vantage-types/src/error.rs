//! Error types for vantage.

use thiserror::Error;

/// Result type alias for vantage operations.
pub type Result<T> = std::result::Result<T, VantageError>;

/// Errors surfaced by the vantage facade and CLI.
///
/// The request and parse crates return their own narrower errors; this enum
/// is what they convert into when callers want a single error type.
#[derive(Error, Debug)]
pub enum VantageError {
    /// A request could not be built.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A response payload violated the API contract.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The upstream API answered with an error payload.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output format error.
    #[error("Format error: {0}")]
    Format(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error for symbols that cannot be sent upstream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// Symbol is empty after trimming.
    #[error("symbol is empty")]
    Empty,

    /// Symbol exceeds the maximum length.
    #[error("symbol has {len} characters (max {max})")]
    TooLong {
        /// Actual length.
        len: usize,
        /// Allowed length.
        max: usize,
    },

    /// Symbol contains a character outside the allowed set.
    #[error("invalid character {ch:?} at position {index}")]
    InvalidChar {
        /// Offending character.
        ch: char,
        /// Character position.
        index: usize,
    },
}

/// Error raised by request builders at `build()` time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The symbol failed validation.
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(#[from] SymbolError),

    /// A period count was zero.
    #[error("{function}: {parameter} must be a positive integer")]
    NonPositivePeriod {
        /// API function code.
        function: &'static str,
        /// Query parameter name.
        parameter: &'static str,
    },

    /// The parameter is not part of this function's profile.
    #[error("{function} does not accept parameter {parameter}")]
    UnsupportedParameter {
        /// API function code.
        function: &'static str,
        /// Query parameter name.
        parameter: &'static str,
    },

    /// The supplied value has the wrong type for the parameter.
    #[error("{function}: parameter {parameter} expects {expected}")]
    WrongValueType {
        /// API function code.
        function: &'static str,
        /// Query parameter name.
        parameter: &'static str,
        /// Expected value kind.
        expected: &'static str,
    },

    /// A parameter without a default was not supplied.
    #[error("{function} requires parameter {parameter}")]
    MissingParameter {
        /// API function code.
        function: &'static str,
        /// Query parameter name.
        parameter: &'static str,
    },

    /// Individually valid fields that do not fit together.
    #[error("{function}: {reason}")]
    Inconsistent {
        /// API function code.
        function: &'static str,
        /// Human-readable explanation.
        reason: String,
    },
}

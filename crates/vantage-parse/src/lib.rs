//! Response parsing for the vantage Alpha Vantage translation layer.
//!
//! - [`TimeSeriesParser`] - Decodes a payload into a [`TimeSeriesResponse`]
//! - [`TimeSeriesResponse`] - Either a [`TimeSeries`] or an [`UpstreamError`]
//! - [`normalize_timestamp`] / [`parse_timestamp`] - Row key handling
//! - [`ParseError`] - Fatal decode errors

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/vantage/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod parser;
mod response;
mod timestamp;
mod view;

pub use error::ParseError;
pub use parser::TimeSeriesParser;
pub use response::{TimeSeries, TimeSeriesResponse, UpstreamError};
pub use timestamp::{TIMESTAMP_FORMAT, normalize_timestamp, parse_timestamp};

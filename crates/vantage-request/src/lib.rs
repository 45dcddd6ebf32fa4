//! Request construction for the vantage Alpha Vantage translation layer.
//!
//! This crate turns fluent builder calls into immutable, validated request
//! descriptors and serializes them to query parameters:
//!
//! - [`IndicatorBuilder`] / [`IndicatorRequest`] - Technical indicators, one generic builder
//! - [`IndicatorKind`] / [`IndicatorProfile`] - Per-indicator parameter table with defaults
//! - [`TimeSeriesBuilder`] / [`TimeSeriesRequest`] - Stock time series endpoints
//! - [`query::query_url`] - Query string and URL encoding

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/vantage/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod indicator;
mod param;
mod profile;
pub mod query;
mod time_series;

pub use indicator::{IndicatorBuilder, IndicatorRequest};
pub use param::{Param, ParamValue, ValueKind};
pub use profile::{IndicatorKind, IndicatorProfile, ParamSpec, UnknownIndicator};
pub use time_series::{TimeSeriesBuilder, TimeSeriesRequest};

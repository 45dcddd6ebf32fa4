//! Core types for the vantage Alpha Vantage translation layer.
//!
//! This crate provides the value types shared by request construction and
//! response parsing:
//!
//! - [`Symbol`] - Validated, normalized ticker symbol
//! - [`Interval`], [`SeriesType`], [`MaType`], [`OutputSize`], [`DataType`] - Request selectors
//! - [`TimeSeriesFunction`] - Time series endpoint, with its adjusted flag
//! - [`Metadata`] - Response header
//! - [`DataPoint`] and [`Adjustment`] - Per-timestamp observations

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/vantage/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod data_point;
mod error;
mod function;
mod metadata;
mod params;
mod symbol;

pub use data_point::{Adjustment, DataPoint};
pub use error::{ConfigError, Result, SymbolError, VantageError};
pub use function::TimeSeriesFunction;
pub use metadata::Metadata;
pub use params::{DataType, Interval, MaType, OutputSize, ParamParseError, SeriesType};
pub use symbol::Symbol;

//! Query command implementation.
//!
//! Builds an indicator request from the command line and prints the resolved
//! parameters and the request URL (without credentials).

use anyhow::{Context, Result};
use vantage_lib::{prelude::*, query::query_url};

/// Build an indicator request and print its query.
pub(crate) fn build_query(
    indicator: &str,
    symbol: &str,
    interval: Option<&str>,
    time_period: Option<u32>,
    series_type: Option<&str>,
    params: &[String],
) -> Result<()> {
    let request = request_from_args(indicator, symbol, interval, time_period, series_type, params)?;

    println!("Function: {}", request.function());
    println!("Symbol:   {}", request.symbol());
    println!("Interval: {}", request.interval());

    if !request.params().is_empty() {
        println!("\n{:<15} {:<10}", "PARAM", "VALUE");
        println!("{}", "-".repeat(26));
        for (param, value) in request.params() {
            println!("{:<15} {:<10}", param.query_name(), value);
        }
    }

    println!("\n{}", query_url(&request.query_pairs()));
    Ok(())
}

fn request_from_args(
    indicator: &str,
    symbol: &str,
    interval: Option<&str>,
    time_period: Option<u32>,
    series_type: Option<&str>,
    params: &[String],
) -> Result<IndicatorRequest> {
    let kind: IndicatorKind = indicator.parse()?;
    let mut builder = IndicatorBuilder::new(kind, symbol);

    if let Some(interval) = interval {
        builder = builder.interval(interval.parse()?);
    }
    if let Some(period) = time_period {
        builder = builder.time_period(period);
    }
    if let Some(series_type) = series_type {
        builder = builder.series_type(series_type.parse()?);
    }
    for raw in params {
        let (name, value) = raw
            .split_once('=')
            .with_context(|| format!("Expected name=value, got '{raw}'"))?;
        let param = Param::from_query_name(name.trim())
            .with_context(|| format!("Unknown parameter: {name}"))?;
        builder = builder.set(param, param.parse_value(value)?);
    }

    Ok(builder.build()?)
}

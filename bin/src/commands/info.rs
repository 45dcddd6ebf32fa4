//! Info command implementation.
//!
//! This module handles displaying the parameter profile of one indicator.

use anyhow::Result;
use vantage_lib::prelude::*;

/// Show the accepted parameters and defaults of an indicator.
pub(crate) fn show_info(indicator: &str) -> Result<()> {
    let kind: IndicatorKind = indicator.parse()?;
    let profile = kind.profile();

    println!("Indicator:   {}", profile.function);
    println!("Description: {}", profile.description);
    if profile.intraday_only {
        println!("Intervals:   intraday only");
    }

    if profile.params.is_empty() {
        println!("\nNo indicator-specific parameters.");
        return Ok(());
    }

    println!("\n{:<15} {:<12} {:<10}", "PARAM", "KIND", "DEFAULT");
    println!("{}", "-".repeat(40));

    for spec in profile.params {
        let default = spec
            .default
            .map_or_else(|| "-".to_string(), |value| value.to_string());
        println!(
            "{:<15} {:<12} {:<10}",
            spec.param.query_name(),
            spec.param.value_kind().as_str(),
            default
        );
    }

    Ok(())
}

//! Indicators command implementation.
//!
//! This module handles listing supported indicators with optional filtering.

use anyhow::Result;
use vantage_lib::prelude::*;

/// List supported indicators, optionally filtered by a search pattern.
pub(crate) fn list_indicators(search: Option<&str>) -> Result<()> {
    let indicators = match search {
        Some(pattern) => IndicatorKind::search(pattern),
        None => IndicatorKind::all().to_vec(),
    };

    if indicators.is_empty() {
        println!("No indicators found.");
        return Ok(());
    }

    println!("{:<10} {:<40} {:<8}", "FUNCTION", "DESCRIPTION", "PARAMS");
    println!("{}", "-".repeat(60));

    for kind in &indicators {
        let profile = kind.profile();
        println!(
            "{:<10} {:<40} {:<8}",
            profile.function,
            profile.description,
            profile.params.len()
        );
    }

    println!("\nTotal: {} indicators", indicators.len());
    Ok(())
}

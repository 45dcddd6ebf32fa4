//! Parse command implementation.
//!
//! Reads a saved response body and renders its data points.

use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::info;
use vantage_lib::prelude::*;

use crate::display::{Format, write_series};

/// Parse a saved time series response and write its points.
pub(crate) fn parse_file(
    file: &Path,
    adjusted: bool,
    function: Option<&str>,
    format: Format,
    output: Option<&Path>,
    sort: bool,
) -> Result<()> {
    let parser = match function {
        Some(name) => {
            let function: TimeSeriesFunction = name.parse()?;
            TimeSeriesParser::for_function(function)
        }
        None => TimeSeriesParser::new(adjusted),
    };

    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let response = parser
        .parse_str(&text)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    let series = match response.into_series() {
        Ok(series) => series,
        Err(err) => bail!("Upstream error: {}", err.message()),
    };
    let series = if sort { series.sorted() } else { series };

    info!(points = series.len(), adjusted = parser.is_adjusted(), "parsed series");
    write_series(&series, format, output)?;

    if let Some(path) = output {
        info!(path = %path.display(), "wrote output");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const DAILY: &str = r#"{
        "Meta Data": { "2. Symbol": "IBM", "4. Output Size": "Compact" },
        "Time Series (Daily)": {
            "2024-01-03": { "1. open": "3", "2. high": "3", "3. low": "3", "4. close": "3", "5. volume": "30" },
            "2024-01-02": { "1. open": "2", "2. high": "2", "3. low": "2", "4. close": "2", "5. volume": "20" }
        }
    }"#;

    #[test]
    fn test_parse_file_writes_sorted_csv() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("daily.json");
        let output = dir.path().join("daily.csv");
        fs::write(&input, DAILY).unwrap();

        parse_file(&input, false, None, Format::Csv, Some(&output), true).unwrap();

        let csv = fs::read_to_string(&output).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("2024-01-02 00:00:00,2,"));
        assert!(lines[2].starts_with("2024-01-03 00:00:00,3,"));
    }

    #[test]
    fn test_parse_file_reports_upstream_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("error.json");
        fs::write(&input, r#"{ "Error Message": "Invalid API call." }"#).unwrap();

        let err = parse_file(&input, false, None, Format::Json, None, false).unwrap_err();
        assert_eq!(err.to_string(), "Upstream error: Invalid API call.");
    }

    #[test]
    fn test_parse_file_rejects_unknown_function() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("daily.json");
        fs::write(&input, DAILY).unwrap();

        assert!(parse_file(&input, false, Some("hourly"), Format::Csv, None, false).is_err());
    }

    #[test]
    fn test_parse_file_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_file(
            &dir.path().join("absent.json"),
            false,
            None,
            Format::Csv,
            None,
            false,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}

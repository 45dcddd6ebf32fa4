//! Display utilities and output formatting for the vantage CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use vantage_lib::prelude::*;

/// Output format for parsed data points.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Table,
    Csv,
    Json,
    Ndjson,
}

/// Write a series to `output`, or to stdout when no path is given.
pub(crate) fn write_series(series: &TimeSeries, format: Format, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_points(series, format, BufWriter::new(file))
        }
        None => write_points(series, format, io::stdout().lock()),
    }
}

/// Write a series in the specified format.
pub(crate) fn write_points<W: Write>(series: &TimeSeries, format: Format, writer: W) -> Result<()> {
    match format {
        Format::Table => write_table(series, writer)?,
        Format::Csv => CsvFormatter::new().write_points(series.points(), writer)?,
        Format::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_points(series.points(), writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_points(series.points(), writer)?,
    }
    Ok(())
}

fn write_table<W: Write>(series: &TimeSeries, mut writer: W) -> io::Result<()> {
    let adjusted = series.is_adjusted();

    writeln!(writer, "{}", series.metadata())?;
    write!(
        writer,
        "{:<20} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "TIMESTAMP", "OPEN", "HIGH", "LOW", "CLOSE", "VOLUME"
    )?;
    if adjusted {
        write!(writer, " {:>12} {:>10} {:>6}", "ADJ CLOSE", "DIVIDEND", "SPLIT")?;
    }
    writeln!(writer)?;
    writeln!(writer, "{}", "-".repeat(if adjusted { 118 } else { 87 }))?;

    for point in series.points() {
        write!(
            writer,
            "{:<20} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>14}",
            point.timestamp.format("%Y-%m-%d %H:%M:%S"),
            point.open,
            point.high,
            point.low,
            point.close,
            point.volume
        )?;
        if let Some(adjustment) = point.adjustment {
            let split = adjustment
                .split_coefficient
                .map_or_else(|| "-".to_string(), |c| c.to_string());
            write!(
                writer,
                " {:>12.4} {:>10.4} {:>6}",
                adjustment.adjusted_close, adjustment.dividend_amount, split
            )?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "\nTotal: {} points", series.len())?;
    writer.flush()
}

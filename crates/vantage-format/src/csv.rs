//! CSV output format.

use std::io::Write;

use vantage_types::DataPoint;

use crate::{FormatError, Formatter};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// CSV formatter.
///
/// The column set is chosen from the first point: adjusted series gain
/// three trailing columns, and a missing split coefficient is written as an
/// empty field.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self::new().with_delimiter('\t')
    }
}

impl Formatter for CsvFormatter {
    fn write_points<W: Write>(
        &self,
        points: &[DataPoint],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;
        let adjusted = points.first().is_some_and(DataPoint::is_adjusted);

        if self.include_header {
            write!(writer, "timestamp{d}open{d}high{d}low{d}close{d}volume")?;
            if adjusted {
                write!(writer, "{d}adjusted_close{d}dividend_amount{d}split_coefficient")?;
            }
            writeln!(writer)?;
        }

        for point in points {
            write!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                point.timestamp.format(TIMESTAMP_FORMAT),
                point.open,
                point.high,
                point.low,
                point.close,
                point.volume
            )?;
            if let Some(adjustment) = point.adjustment.filter(|_| adjusted) {
                write!(
                    writer,
                    "{d}{}{d}{}{d}",
                    adjustment.adjusted_close, adjustment.dividend_amount
                )?;
                if let Some(split) = adjustment.split_coefficient {
                    write!(writer, "{split}")?;
                }
            }
            writeln!(writer)?;
        }

        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;
    use vantage_types::Adjustment;

    fn create_test_point() -> DataPoint {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        DataPoint::new(timestamp, 161.0, 161.73, 160.08, 161.5, 4_001_000)
    }

    fn render(formatter: &CsvFormatter, points: &[DataPoint]) -> String {
        let mut output = Cursor::new(Vec::new());
        formatter.write_points(points, &mut output).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_csv_raw() {
        let result = render(&CsvFormatter::new(), &[create_test_point()]);
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines[0], "timestamp,open,high,low,close,volume");
        assert_eq!(lines[1], "2024-01-15 09:30:00,161,161.73,160.08,161.5,4001000");
    }

    #[test]
    fn test_csv_adjusted() {
        let points = [
            create_test_point().with_adjustment(Adjustment::new(160.2, 0.82, Some(4.0))),
            create_test_point().with_adjustment(Adjustment::new(160.2, 0.0, None)),
        ];
        let result = render(&CsvFormatter::new(), &points);
        let lines: Vec<_> = result.lines().collect();
        assert!(lines[0].ends_with("volume,adjusted_close,dividend_amount,split_coefficient"));
        assert!(lines[1].ends_with(",160.2,0.82,4"));
        assert!(lines[2].ends_with(",160.2,0,"));
    }

    #[test]
    fn test_csv_no_header() {
        let formatter = CsvFormatter::new().with_header(false);
        let result = render(&formatter, &[create_test_point()]);
        assert!(!result.contains("timestamp,open"));
        assert_eq!(result.lines().count(), 1);
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let result = render(&formatter, &[create_test_point()]);
        assert!(result.contains("timestamp\topen\thigh"));
        assert_eq!(formatter.extension(), "tsv");
    }

    #[test]
    fn test_csv_empty_writes_header_only() {
        let result = render(&CsvFormatter::new(), &[]);
        assert_eq!(result, "timestamp,open,high,low,close,volume\n");
    }
}

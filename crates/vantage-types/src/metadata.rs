//! Response metadata header.

use serde::{Deserialize, Serialize};

/// Descriptive header of a time series response.
///
/// Every field is optional: the upstream key set drifts between endpoints
/// (weekly and monthly series omit the output size, for example) and missing
/// keys are carried as `None` rather than rejected. The interval is only
/// present for intraday series.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metadata {
    information: Option<String>,
    symbol: Option<String>,
    last_refreshed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interval: Option<String>,
    output_size: Option<String>,
    time_zone: Option<String>,
}

impl Metadata {
    /// Creates metadata for a daily, weekly or monthly series.
    #[must_use]
    pub const fn new(
        information: Option<String>,
        symbol: Option<String>,
        last_refreshed: Option<String>,
        output_size: Option<String>,
        time_zone: Option<String>,
    ) -> Self {
        Self {
            information,
            symbol,
            last_refreshed,
            interval: None,
            output_size,
            time_zone,
        }
    }

    /// Creates metadata for an intraday series.
    #[must_use]
    pub const fn intraday(
        information: Option<String>,
        symbol: Option<String>,
        last_refreshed: Option<String>,
        interval: Option<String>,
        output_size: Option<String>,
        time_zone: Option<String>,
    ) -> Self {
        Self {
            information,
            symbol,
            last_refreshed,
            interval,
            output_size,
            time_zone,
        }
    }

    /// Returns the neutral metadata used when a response carries an error.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(None, None, None, None, None)
    }

    /// Returns the free-text description of the series.
    #[must_use]
    pub fn information(&self) -> Option<&str> {
        self.information.as_deref()
    }

    /// Returns the instrument symbol as echoed by the API.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Returns the last-refreshed timestamp, verbatim.
    #[must_use]
    pub fn last_refreshed(&self) -> Option<&str> {
        self.last_refreshed.as_deref()
    }

    /// Returns the interval label (intraday series only).
    #[must_use]
    pub fn interval(&self) -> Option<&str> {
        self.interval.as_deref()
    }

    /// Returns the output size label.
    #[must_use]
    pub fn output_size(&self) -> Option<&str> {
        self.output_size.as_deref()
    }

    /// Returns the time zone label.
    #[must_use]
    pub fn time_zone(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }

    /// Returns true if this is the six-field intraday layout.
    #[must_use]
    pub const fn is_intraday(&self) -> bool {
        self.interval.is_some()
    }

    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.information.is_none()
            && self.symbol.is_none()
            && self.last_refreshed.is_none()
            && self.interval.is_none()
            && self.output_size.is_none()
            && self.time_zone.is_none()
    }
}

impl std::fmt::Display for Metadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |v: Option<&str>| v.unwrap_or("-").to_string();
        write!(
            f,
            "{} [{}] refreshed {}",
            show(self.symbol()),
            show(self.interval().or(self.output_size())),
            show(self.last_refreshed())
        )?;
        if let Some(tz) = self.time_zone() {
            write!(f, " ({tz})")?;
        }
        Ok(())
    }
}

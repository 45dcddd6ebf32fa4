//! Query string construction.

/// Base URL of the Alpha Vantage query endpoint.
pub const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Ordered `(name, value)` query pairs.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Percent-encodes query pairs into `name=value&...` form.
///
/// # Example
///
/// ```
/// use vantage_request::query::encode_query;
///
/// let pairs = vec![("function", "SMA".to_string()), ("symbol", "BRK.B".to_string())];
/// assert_eq!(encode_query(&pairs), "function=SMA&symbol=BRK.B");
/// ```
#[must_use]
pub fn encode_query(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds a full request URL without credentials.
///
/// The transport layer appends `apikey` before issuing the call.
///
/// # Example
///
/// ```
/// use vantage_request::query::query_url;
///
/// let pairs = vec![("function", "TIME_SERIES_DAILY".to_string())];
/// assert_eq!(query_url(&pairs), "https://www.alphavantage.co/query?function=TIME_SERIES_DAILY");
/// ```
#[must_use]
pub fn query_url(pairs: &[(&'static str, String)]) -> String {
    format!("{}?{}", BASE_URL, encode_query(pairs))
}

use chrono::{DateTime, Utc};

/// Wire format of every date-time field: `yyyy-MM-dd'T'HH:mm:ssZ`
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Formats a timestamp for the web-service response
///
/// Timestamps are rendered in UTC, so the offset is always `+0000`.
pub fn format_date_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(DATE_TIME_FORMAT).to_string()
}

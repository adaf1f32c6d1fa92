pub mod period;
pub mod resource;

pub use period::DateRangePeriod;
pub use resource::TimeSeriesResourceType;

use chrono::NaiveDate;

/// Format a date the way every Fitbit endpoint path expects it
pub fn format_date(date: NaiveDate) -> String {
  date.format(crate::DATE_FORMAT).to_string()
}

/// Resolve an optional encoded user id to its path segment.
///
/// `None` and blank ids address the authenticated user.
pub fn resolve_user_id(encoded_user_id: Option<&str>) -> &str {
  match encoded_user_id.map(str::trim) {
    Some(id) if !id.is_empty() => id,
    _ => crate::CURRENT_USER,
  }
}

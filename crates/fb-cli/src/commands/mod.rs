pub mod body;
pub mod food;
pub mod time_series;
pub mod user;

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use fb_client::{ApiError, FitbitResponse};
use serde::Serialize;
use tracing::info;

/// What gets printed for every call
#[derive(Debug, Serialize)]
struct Printed<'a, T> {
  status: u16,
  success: bool,
  errors: &'a [ApiError],
  data: Option<&'a T>,
}

/// Print the response envelope as JSON and fail on an unsuccessful status
pub fn print_response<T: Serialize>(response: &FitbitResponse<T>) -> Result<()> {
  if let Some(remaining) = response.rate_limit_remaining() {
    info!("Rate limit remaining: {}", remaining);
  }

  let printed = Printed {
    status: response.status.as_u16(),
    success: response.success(),
    errors: &response.errors,
    data: response.data.as_ref(),
  };
  println!("{}", serde_json::to_string_pretty(&printed)?);

  if !response.success() {
    bail!("Fitbit returned HTTP {}", response.status);
  }
  Ok(())
}

/// Given date, or today in local time
pub fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
  date.unwrap_or_else(|| Local::now().date_naive())
}

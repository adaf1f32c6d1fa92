//! Uniform result of every endpoint call

use fb_models::ApiError;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

/// Outcome of one API call.
///
/// An unsuccessful HTTP status is not an `Err`: it shows up here as
/// `success() == false` with whatever error entries the body carried.
#[derive(Debug, Clone)]
pub struct FitbitResponse<T> {
  /// HTTP status of the response
  pub status: StatusCode,
  /// Response headers
  pub headers: HeaderMap,
  /// API error entries; empty on success
  pub errors: Vec<ApiError>,
  /// Decoded payload; only present on success
  pub data: Option<T>,
}

impl<T> FitbitResponse<T> {
  /// True iff the status is 2xx
  pub fn success(&self) -> bool {
    self.status.is_success()
  }

  /// Value of a response header, if present and valid text
  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers.get(name).and_then(|v| v.to_str().ok())
  }

  /// Requests left in the current rate limit window, as reported by the API
  pub fn rate_limit_remaining(&self) -> Option<u32> {
    self.header("fitbit-rate-limit-remaining").and_then(|v| v.parse().ok())
  }

  /// Take the payload
  pub fn into_data(self) -> Option<T> {
    self.data
  }
}

/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Body measurement, blood pressure, fat and weight log endpoints
//!
//! The fat and weight logs accept three call shapes: a period ending on a
//! date, a single date, or an explicit range of at most 31 days. Periods
//! outside the log allow-list and over-long ranges are rejected before any
//! request is made.

use super::{user_path, EndpointCore};
use crate::response::FitbitResponse;
use chrono::NaiveDate;
use fb_core::{format_date, DateRangePeriod, Error, Result, MAX_LOG_RANGE_DAYS};
use fb_models::{BloodPressureData, BodyMeasurements, Fat, Weight};
use serde::de::DeserializeOwned;
use tracing::instrument;

/// Which body log a request addresses
#[derive(Debug, Clone, Copy)]
enum BodyLog {
  Fat,
  Weight,
}

impl BodyLog {
  fn segment(self) -> &'static str {
    match self {
      BodyLog::Fat => "fat",
      BodyLog::Weight => "weight",
    }
  }
}

/// How the dates of a body log request are given
#[derive(Debug, Clone, Copy)]
enum LogSpan {
  Period(NaiveDate, DateRangePeriod),
  Day(NaiveDate),
  Range(NaiveDate, NaiveDate),
}

impl LogSpan {
  /// Check the span against the log endpoint limits
  fn validate(self) -> Result<()> {
    match self {
      LogSpan::Period(_, period) => period.ensure_body_log_period(),
      LogSpan::Day(_) => Ok(()),
      LogSpan::Range(start, end) => ensure_log_range(start, end),
    }
  }

  /// Trailing date segments of the path
  fn segments(self) -> String {
    match self {
      LogSpan::Period(date, period) => format!("{}/{}", format_date(date), period),
      LogSpan::Day(date) => format_date(date),
      LogSpan::Range(start, end) => format!("{}/{}", format_date(start), format_date(end)),
    }
  }
}

/// Reject explicit ranges longer than the log endpoints accept
fn ensure_log_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
  if end.signed_duration_since(start).num_days() > MAX_LOG_RANGE_DAYS {
    return Err(Error::DateRangeTooLong { start, end, max_days: MAX_LOG_RANGE_DAYS });
  }
  Ok(())
}

/// Body composition and vitals endpoints
#[derive(Debug, Clone)]
pub struct BodyEndpoints {
  core: EndpointCore,
}

impl BodyEndpoints {
  /// Create a new body endpoints instance
  pub fn new(core: EndpointCore) -> Self {
    Self { core }
  }

  /// Get blood pressure readings and their average for one day
  #[instrument(skip(self))]
  pub async fn blood_pressure(
    &self,
    date: NaiveDate,
    encoded_user_id: Option<&str>,
  ) -> Result<FitbitResponse<BloodPressureData>> {
    let path = format!("{}/bp/date/{}.json", user_path(encoded_user_id), format_date(date));
    self.core.fetch(&path, None).await
  }

  /// Get body measurements and the weight goal for one day
  #[instrument(skip(self))]
  pub async fn measurements(
    &self,
    date: NaiveDate,
    encoded_user_id: Option<&str>,
  ) -> Result<FitbitResponse<BodyMeasurements>> {
    let path = format!("{}/body/date/{}.json", user_path(encoded_user_id), format_date(date));
    self.core.fetch(&path, None).await
  }

  /// Get the body fat log for `period` ending on `base_date`
  ///
  /// # Errors
  ///
  /// [`Error::InvalidPeriod`] unless `period` is one of 1d, 7d, 1w, 30d, 1m.
  #[instrument(skip(self))]
  pub async fn fat_by_period(
    &self,
    base_date: NaiveDate,
    period: DateRangePeriod,
    encoded_user_id: Option<&str>,
  ) -> Result<FitbitResponse<Fat>> {
    self.log(BodyLog::Fat, LogSpan::Period(base_date, period), encoded_user_id).await
  }

  /// Get the body fat log for one day
  #[instrument(skip(self))]
  pub async fn fat_by_date(&self, date: NaiveDate, encoded_user_id: Option<&str>) -> Result<FitbitResponse<Fat>> {
    self.log(BodyLog::Fat, LogSpan::Day(date), encoded_user_id).await
  }

  /// Get the body fat log between two dates
  ///
  /// # Errors
  ///
  /// [`Error::DateRangeTooLong`] if the range spans more than 31 days; use
  /// [`BodyEndpoints::fat_by_period`] instead.
  #[instrument(skip(self))]
  pub async fn fat_by_range(
    &self,
    start_date: NaiveDate,
    end_date: NaiveDate,
    encoded_user_id: Option<&str>,
  ) -> Result<FitbitResponse<Fat>> {
    self.log(BodyLog::Fat, LogSpan::Range(start_date, end_date), encoded_user_id).await
  }

  /// Get the weight log for `period` ending on `base_date`
  ///
  /// # Errors
  ///
  /// [`Error::InvalidPeriod`] unless `period` is one of 1d, 7d, 1w, 30d, 1m.
  #[instrument(skip(self))]
  pub async fn weight_by_period(
    &self,
    base_date: NaiveDate,
    period: DateRangePeriod,
    encoded_user_id: Option<&str>,
  ) -> Result<FitbitResponse<Weight>> {
    self.log(BodyLog::Weight, LogSpan::Period(base_date, period), encoded_user_id).await
  }

  /// Get the weight log for one day
  #[instrument(skip(self))]
  pub async fn weight_by_date(
    &self,
    date: NaiveDate,
    encoded_user_id: Option<&str>,
  ) -> Result<FitbitResponse<Weight>> {
    self.log(BodyLog::Weight, LogSpan::Day(date), encoded_user_id).await
  }

  /// Get the weight log between two dates
  ///
  /// # Errors
  ///
  /// [`Error::DateRangeTooLong`] if the range spans more than 31 days; use
  /// [`BodyEndpoints::weight_by_period`] instead.
  #[instrument(skip(self))]
  pub async fn weight_by_range(
    &self,
    start_date: NaiveDate,
    end_date: NaiveDate,
    encoded_user_id: Option<&str>,
  ) -> Result<FitbitResponse<Weight>> {
    self.log(BodyLog::Weight, LogSpan::Range(start_date, end_date), encoded_user_id).await
  }

  async fn log<T: DeserializeOwned>(
    &self,
    log: BodyLog,
    span: LogSpan,
    encoded_user_id: Option<&str>,
  ) -> Result<FitbitResponse<T>> {
    span.validate()?;
    let path = log_path(log, span, encoded_user_id);
    self.core.fetch(&path, None).await
  }
}

fn log_path(log: BodyLog, span: LogSpan, encoded_user_id: Option<&str>) -> String {
  format!("{}/body/log/{}/date/{}.json", user_path(encoded_user_id), log.segment(), span.segments())
}

#[cfg(test)]
mod tests {
  use super::super::test_support::*;
  use super::*;
  use chrono::Days;
  use reqwest::StatusCode;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn endpoints(body: &str) -> (BodyEndpoints, std::sync::Arc<RecordingTransport>) {
    let transport = RecordingTransport::new(StatusCode::OK, body);
    (BodyEndpoints::new(test_core(transport.clone())), transport)
  }

  #[test]
  fn test_log_paths() {
    let day = date(2024, 5, 7);
    assert_eq!(
      log_path(BodyLog::Fat, LogSpan::Day(day), None),
      "/1/user/-/body/log/fat/date/2024-05-07.json"
    );
    assert_eq!(
      log_path(BodyLog::Weight, LogSpan::Period(day, DateRangePeriod::OneWeek), None),
      "/1/user/-/body/log/weight/date/2024-05-07/1w.json"
    );
    assert_eq!(
      log_path(BodyLog::Fat, LogSpan::Range(date(2024, 5, 1), day), Some("22A9XB")),
      "/1/user/22A9XB/body/log/fat/date/2024-05-01/2024-05-07.json"
    );
  }

  #[test]
  fn test_log_range_limit() {
    let start = date(2024, 1, 15);
    assert!(ensure_log_range(start, start + Days::new(31)).is_ok());
    assert!(matches!(
      ensure_log_range(start, start + Days::new(32)),
      Err(Error::DateRangeTooLong { max_days: 31, .. })
    ));
  }

  #[tokio::test]
  async fn test_blood_pressure_and_measurements() {
    let (bp, transport) = endpoints(r#"{"bp":[{"bpId":1,"diastolic":80,"systolic":120}]}"#);
    let readings = bp.blood_pressure(date(2024, 5, 7), None).await.unwrap().into_data().unwrap();
    assert_eq!(readings.bp[0].systolic, 120);
    assert_eq!(transport.paths(), vec!["/1/user/-/bp/date/2024-05-07.json"]);

    let (body, transport) = endpoints(r#"{"body":{"weight":80.5},"goals":{"weight":75}}"#);
    let measured = body.measurements(date(2024, 5, 7), Some("22A9XB")).await.unwrap().into_data().unwrap();
    assert_eq!(measured.body.weight, 80.5);
    assert_eq!(transport.paths(), vec!["/1/user/22A9XB/body/date/2024-05-07.json"]);
  }

  #[tokio::test]
  async fn test_fat_by_period_rejects_long_periods_without_request() {
    let (body, transport) = endpoints(r#"{"fat":[]}"#);

    let result = body.fat_by_period(date(2024, 5, 7), DateRangePeriod::ThreeMonths, None).await;
    assert!(matches!(result, Err(Error::InvalidPeriod { .. })));
    assert!(transport.paths().is_empty());

    let response = body.fat_by_period(date(2024, 5, 7), DateRangePeriod::OneDay, None).await.unwrap();
    assert!(response.success());
    assert_eq!(transport.paths(), vec!["/1/user/-/body/log/fat/date/2024-05-07/1d.json"]);
  }

  #[tokio::test]
  async fn test_weight_by_range_limit() {
    let (body, transport) = endpoints(r#"{"weight":[]}"#);
    let start = date(2024, 1, 15);

    let result = body.weight_by_range(start, start + Days::new(32), None).await;
    assert!(matches!(result, Err(Error::DateRangeTooLong { .. })));
    assert!(transport.paths().is_empty());

    let response = body.weight_by_range(start, start + Days::new(31), None).await.unwrap();
    assert!(response.success());
    assert_eq!(transport.paths(), vec!["/1/user/-/body/log/weight/date/2024-01-15/2024-02-15.json"]);
  }

  #[tokio::test]
  async fn test_weight_by_date() {
    let (body, transport) =
      endpoints(r#"{"weight":[{"bmi":23.5,"date":"2024-05-07","logId":1,"time":"07:30:00","weight":72.5}]}"#);

    let weight = body.weight_by_date(date(2024, 5, 7), None).await.unwrap().into_data().unwrap();

    assert_eq!(weight.weight[0].weight, 72.5);
    assert_eq!(transport.paths(), vec!["/1/user/-/body/log/weight/date/2024-05-07.json"]);
  }
}

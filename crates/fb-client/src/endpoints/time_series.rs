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

//! Time series endpoints
//!
//! One URL shape serves every resource:
//! `/1/user/{user}{resource}/date/{base-date}/{end-date|period}.json`.
//! The fractional and whole-number variants share it and differ only in the
//! value type they decode.

use super::{user_path, EndpointCore};
use crate::response::FitbitResponse;
use chrono::NaiveDate;
use fb_core::{format_date, DateRangePeriod, Result, TimeSeriesResourceType};
use fb_models::{TimeSeriesDataList, TimeSeriesDataListInt};
use serde::de::DeserializeOwned;
use tracing::instrument;

/// Daily summaries of activity, food, sleep and body resources
#[derive(Debug, Clone)]
pub struct TimeSeriesEndpoints {
  core: EndpointCore,
}

impl TimeSeriesEndpoints {
  /// Create a new time series endpoints instance
  pub fn new(core: EndpointCore) -> Self {
    Self { core }
  }

  /// Get a fractional-valued series between two dates
  ///
  /// # Examples
  ///
  /// ```ignore
  /// use fb_core::TimeSeriesResourceType;
  ///
  /// let distance = client
  ///     .time_series()
  ///     .range(TimeSeriesResourceType::Distance, start, end, None)
  ///     .await?;
  /// ```
  #[instrument(skip(self))]
  pub async fn range(
    &self,
    resource: TimeSeriesResourceType,
    start_date: NaiveDate,
    end_date: NaiveDate,
    encoded_user_id: Option<&str>,
  ) -> Result<FitbitResponse<TimeSeriesDataList>> {
    self.series(resource, start_date, &format_date(end_date), encoded_user_id).await
  }

  /// Get a fractional-valued series for `period` ending on `end_date`
  #[instrument(skip(self))]
  pub async fn period(
    &self,
    resource: TimeSeriesResourceType,
    end_date: NaiveDate,
    period: DateRangePeriod,
    encoded_user_id: Option<&str>,
  ) -> Result<FitbitResponse<TimeSeriesDataList>> {
    self.series(resource, end_date, period.as_str(), encoded_user_id).await
  }

  /// Get a whole-number series between two dates
  #[instrument(skip(self))]
  pub async fn range_int(
    &self,
    resource: TimeSeriesResourceType,
    start_date: NaiveDate,
    end_date: NaiveDate,
    encoded_user_id: Option<&str>,
  ) -> Result<FitbitResponse<TimeSeriesDataListInt>> {
    self.series(resource, start_date, &format_date(end_date), encoded_user_id).await
  }

  /// Get a whole-number series for `period` ending on `end_date`
  ///
  /// # Examples
  ///
  /// ```ignore
  /// use fb_core::{DateRangePeriod, TimeSeriesResourceType};
  ///
  /// let steps = client
  ///     .time_series()
  ///     .period_int(TimeSeriesResourceType::Steps, today, DateRangePeriod::SevenDays, None)
  ///     .await?;
  /// println!("Steps this week: {}", steps.data.map(|s| s.total()).unwrap_or_default());
  /// ```
  #[instrument(skip(self))]
  pub async fn period_int(
    &self,
    resource: TimeSeriesResourceType,
    end_date: NaiveDate,
    period: DateRangePeriod,
    encoded_user_id: Option<&str>,
  ) -> Result<FitbitResponse<TimeSeriesDataListInt>> {
    self.series(resource, end_date, period.as_str(), encoded_user_id).await
  }

  async fn series<T: DeserializeOwned>(
    &self,
    resource: TimeSeriesResourceType,
    base_date: NaiveDate,
    end: &str,
    encoded_user_id: Option<&str>,
  ) -> Result<FitbitResponse<T>> {
    let path = series_path(resource, base_date, end, encoded_user_id);
    let root = resource.root_property();
    self.core.fetch(&path, Some(&root)).await
  }
}

fn series_path(
  resource: TimeSeriesResourceType,
  base_date: NaiveDate,
  end: &str,
  encoded_user_id: Option<&str>,
) -> String {
  format!(
    "{}{}/date/{}/{}.json",
    user_path(encoded_user_id),
    resource.path(),
    format_date(base_date),
    end
  )
}

#[cfg(test)]
mod tests {
  use super::super::test_support::*;
  use super::*;
  use reqwest::StatusCode;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn test_series_path() {
    assert_eq!(
      series_path(TimeSeriesResourceType::Steps, date(2024, 5, 1), "2024-05-07", None),
      "/1/user/-/activities/steps/date/2024-05-01/2024-05-07.json"
    );
    assert_eq!(
      series_path(TimeSeriesResourceType::Weight, date(2024, 5, 7), "1m", Some("22A9XB")),
      "/1/user/22A9XB/body/weight/date/2024-05-07/1m.json"
    );
  }

  #[tokio::test]
  async fn test_period_int_reads_resource_root() {
    let body = r#"{"activities-steps":[{"dateTime":"2024-05-06","value":"9000"},{"dateTime":"2024-05-07","value":"1000"}]}"#;
    let transport = RecordingTransport::new(StatusCode::OK, body);
    let endpoints = TimeSeriesEndpoints::new(test_core(transport.clone()));

    let response = endpoints
      .period_int(TimeSeriesResourceType::Steps, date(2024, 5, 7), DateRangePeriod::SevenDays, None)
      .await
      .unwrap();

    assert_eq!(response.data.unwrap().total(), 10_000);
    assert_eq!(transport.paths(), vec!["/1/user/-/activities/steps/date/2024-05-07/7d.json"]);
  }

  #[tokio::test]
  async fn test_range_and_range_int_share_url() {
    let body = r#"{"body-weight":[{"dateTime":"2024-05-01","value":"80.25"}]}"#;
    let transport = RecordingTransport::new(StatusCode::OK, body);
    let endpoints = TimeSeriesEndpoints::new(test_core(transport.clone()));

    let weight = endpoints
      .range(TimeSeriesResourceType::Weight, date(2024, 5, 1), date(2024, 5, 1), None)
      .await
      .unwrap();
    assert_eq!(weight.data.unwrap().data_list[0].value, 80.25);

    // The same fractional body cannot be read as whole numbers
    let result = endpoints
      .range_int(TimeSeriesResourceType::Weight, date(2024, 5, 1), date(2024, 5, 1), None)
      .await;
    assert!(result.is_err());

    let paths = transport.paths();
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0], paths[1]);
  }

  #[tokio::test]
  async fn test_series_wrong_root_is_missing_field() {
    let body = r#"{"activities-distance":[]}"#;
    let transport = RecordingTransport::new(StatusCode::OK, body);
    let endpoints = TimeSeriesEndpoints::new(test_core(transport));

    let result = endpoints
      .period(TimeSeriesResourceType::Steps, date(2024, 5, 7), DateRangePeriod::OneDay, None)
      .await;

    assert!(matches!(result, Err(fb_core::Error::MissingField(ref f)) if f == "activities-steps"));
  }
}

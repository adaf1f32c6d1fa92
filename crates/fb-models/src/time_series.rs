//! Time series data models
//!
//! The API nests each series under a root property named after the resource
//! (`activities-steps`, `body-weight`, ...) and sends values as strings.

use crate::common::string_or_number;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of a fractional series (distance, weight, BMI, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesData {
  pub date_time: NaiveDate,

  #[serde(deserialize_with = "string_or_number::deserialize")]
  pub value: f64,
}

/// One day of a whole-number series (steps, floors, minutes, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesDataInt {
  pub date_time: NaiveDate,

  #[serde(deserialize_with = "string_or_number::deserialize")]
  pub value: i64,
}

/// Fractional-valued time series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeriesDataList {
  pub data_list: Vec<TimeSeriesData>,
}

impl TimeSeriesDataList {
  /// Mean of all values, `None` for an empty series
  pub fn average(&self) -> Option<f64> {
    if self.data_list.is_empty() {
      return None;
    }
    let total: f64 = self.data_list.iter().map(|d| d.value).sum();
    Some(total / self.data_list.len() as f64)
  }

  /// Most recent data point
  pub fn latest(&self) -> Option<&TimeSeriesData> {
    self.data_list.iter().max_by_key(|d| d.date_time)
  }
}

/// Whole-number time series
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeriesDataListInt {
  pub data_list: Vec<TimeSeriesDataInt>,
}

impl TimeSeriesDataListInt {
  pub fn total(&self) -> i64 {
    self.data_list.iter().map(|d| d.value).sum()
  }

  /// Most recent data point
  pub fn latest(&self) -> Option<&TimeSeriesDataInt> {
    self.data_list.iter().max_by_key(|d| d.date_time)
  }
}

//! Range shorthands accepted by the Fitbit API in place of an end date

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Period keyword used by time series and body log endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRangePeriod {
  OneDay,
  SevenDays,
  OneWeek,
  ThirtyDays,
  OneMonth,
  ThreeMonths,
  SixMonths,
  OneYear,
  Max,
}

impl DateRangePeriod {
  /// Every period, in keyword order
  pub const ALL: [DateRangePeriod; 9] = [
    DateRangePeriod::OneDay,
    DateRangePeriod::SevenDays,
    DateRangePeriod::OneWeek,
    DateRangePeriod::ThirtyDays,
    DateRangePeriod::OneMonth,
    DateRangePeriod::ThreeMonths,
    DateRangePeriod::SixMonths,
    DateRangePeriod::OneYear,
    DateRangePeriod::Max,
  ];

  /// Periods the fat and weight log endpoints accept
  pub const BODY_LOG: [DateRangePeriod; 5] = [
    DateRangePeriod::OneDay,
    DateRangePeriod::SevenDays,
    DateRangePeriod::OneWeek,
    DateRangePeriod::ThirtyDays,
    DateRangePeriod::OneMonth,
  ];

  /// Keyword as it appears in the URL
  pub fn as_str(&self) -> &'static str {
    match self {
      DateRangePeriod::OneDay => "1d",
      DateRangePeriod::SevenDays => "7d",
      DateRangePeriod::OneWeek => "1w",
      DateRangePeriod::ThirtyDays => "30d",
      DateRangePeriod::OneMonth => "1m",
      DateRangePeriod::ThreeMonths => "3m",
      DateRangePeriod::SixMonths => "6m",
      DateRangePeriod::OneYear => "1y",
      DateRangePeriod::Max => "max",
    }
  }

  /// Whether the fat and weight log endpoints accept this period
  pub fn is_body_log_period(&self) -> bool {
    Self::BODY_LOG.contains(self)
  }

  /// Reject periods the fat and weight log endpoints do not accept
  pub fn ensure_body_log_period(&self) -> Result<()> {
    if self.is_body_log_period() {
      return Ok(());
    }

    let allowed = Self::BODY_LOG.iter().map(|p| p.as_str()).collect::<Vec<_>>().join(", ");
    Err(Error::InvalidPeriod { period: self.as_str().to_string(), allowed })
  }
}

impl std::fmt::Display for DateRangePeriod {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for DateRangePeriod {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|p| p.as_str() == s)
      .ok_or_else(|| Error::InvalidInput(format!("Unknown period keyword: {s}")))
  }
}

//! Time series resources and their URL/JSON naming

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Resource addressed by the time series endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSeriesResourceType {
  // Food
  CaloriesIn,
  Water,

  // Activity
  CaloriesOut,
  Steps,
  Distance,
  MinutesSedentary,
  MinutesLightlyActive,
  MinutesFairlyActive,
  MinutesVeryActive,
  ActivityCalories,
  Floors,
  Elevation,

  // Sleep
  TimeInBed,
  MinutesAsleep,
  AwakeningsCount,
  MinutesAwake,
  MinutesToFallAsleep,
  MinutesAfterWakeup,
  SleepEfficiency,

  // Body
  Weight,
  Bmi,
  Fat,
}

impl TimeSeriesResourceType {
  pub const ALL: [TimeSeriesResourceType; 22] = [
    TimeSeriesResourceType::CaloriesIn,
    TimeSeriesResourceType::Water,
    TimeSeriesResourceType::CaloriesOut,
    TimeSeriesResourceType::Steps,
    TimeSeriesResourceType::Distance,
    TimeSeriesResourceType::MinutesSedentary,
    TimeSeriesResourceType::MinutesLightlyActive,
    TimeSeriesResourceType::MinutesFairlyActive,
    TimeSeriesResourceType::MinutesVeryActive,
    TimeSeriesResourceType::ActivityCalories,
    TimeSeriesResourceType::Floors,
    TimeSeriesResourceType::Elevation,
    TimeSeriesResourceType::TimeInBed,
    TimeSeriesResourceType::MinutesAsleep,
    TimeSeriesResourceType::AwakeningsCount,
    TimeSeriesResourceType::MinutesAwake,
    TimeSeriesResourceType::MinutesToFallAsleep,
    TimeSeriesResourceType::MinutesAfterWakeup,
    TimeSeriesResourceType::SleepEfficiency,
    TimeSeriesResourceType::Weight,
    TimeSeriesResourceType::Bmi,
    TimeSeriesResourceType::Fat,
  ];

  /// Path segment inserted after the user id, with its leading slash
  pub fn path(&self) -> &'static str {
    match self {
      TimeSeriesResourceType::CaloriesIn => "/foods/log/caloriesIn",
      TimeSeriesResourceType::Water => "/foods/log/water",
      TimeSeriesResourceType::CaloriesOut => "/activities/calories",
      TimeSeriesResourceType::Steps => "/activities/steps",
      TimeSeriesResourceType::Distance => "/activities/distance",
      TimeSeriesResourceType::MinutesSedentary => "/activities/minutesSedentary",
      TimeSeriesResourceType::MinutesLightlyActive => "/activities/minutesLightlyActive",
      TimeSeriesResourceType::MinutesFairlyActive => "/activities/minutesFairlyActive",
      TimeSeriesResourceType::MinutesVeryActive => "/activities/minutesVeryActive",
      TimeSeriesResourceType::ActivityCalories => "/activities/activityCalories",
      TimeSeriesResourceType::Floors => "/activities/floors",
      TimeSeriesResourceType::Elevation => "/activities/elevation",
      TimeSeriesResourceType::TimeInBed => "/sleep/timeInBed",
      TimeSeriesResourceType::MinutesAsleep => "/sleep/minutesAsleep",
      TimeSeriesResourceType::AwakeningsCount => "/sleep/awakeningsCount",
      TimeSeriesResourceType::MinutesAwake => "/sleep/minutesAwake",
      TimeSeriesResourceType::MinutesToFallAsleep => "/sleep/minutesToFallAsleep",
      TimeSeriesResourceType::MinutesAfterWakeup => "/sleep/minutesAfterWakeup",
      TimeSeriesResourceType::SleepEfficiency => "/sleep/efficiency",
      TimeSeriesResourceType::Weight => "/body/weight",
      TimeSeriesResourceType::Bmi => "/body/bmi",
      TimeSeriesResourceType::Fat => "/body/fat",
    }
  }

  /// Top-level JSON property the response nests its data points under,
  /// e.g. `activities-steps` for `/activities/steps`
  pub fn root_property(&self) -> String {
    self.path().trim_start_matches('/').replace('/', "-")
  }
}

impl std::fmt::Display for TimeSeriesResourceType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.path())
  }
}

impl FromStr for TimeSeriesResourceType {
  type Err = Error;

  /// Accepts the path (`/activities/steps`), the root property
  /// (`activities-steps`) or the last segment alone (`steps`).
  fn from_str(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|r| {
        let path = r.path();
        s == path
          || s == r.root_property()
          || path.rsplit('/').next().is_some_and(|last| last.eq_ignore_ascii_case(s))
      })
      .ok_or_else(|| Error::InvalidInput(format!("Unknown time series resource: {s}")))
  }
}

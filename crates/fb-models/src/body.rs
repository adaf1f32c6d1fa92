//! Body measurement, blood pressure and body log models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Blood pressure readings for one day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloodPressureData {
  /// Average of the day's readings, absent when nothing was logged
  #[serde(skip_serializing_if = "Option::is_none")]
  pub average: Option<BloodPressureAverage>,

  /// Individual readings
  pub bp: Vec<BloodPressureReading>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloodPressureAverage {
  /// Classification, e.g. `Prehypertension`
  pub condition: String,
  pub description: String,
  pub diastolic: i32,
  pub systolic: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodPressureReading {
  pub bp_id: i64,
  pub diastolic: i32,
  pub systolic: i32,

  /// `HH:mm` when the reading was timed
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub time: Option<String>,
}

/// Body measurements and weight goal for one day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyMeasurements {
  pub body: Body,
  pub goals: BodyGoals,
}

/// Circumferences are in the user's length unit, weight in their weight unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Body {
  pub bicep: f64,
  pub bmi: f64,
  pub calf: f64,
  pub chest: f64,
  pub fat: f64,
  pub forearm: f64,
  pub hips: f64,
  pub neck: f64,
  pub thigh: f64,
  pub waist: f64,
  pub weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyGoals {
  pub weight: f64,
}

/// Body fat log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fat {
  pub fat: Vec<FatLog>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FatLog {
  pub log_id: i64,
  pub date: NaiveDate,

  /// `HH:mm:ss`
  #[serde(default)]
  pub time: String,

  /// Body fat percentage
  pub fat: f64,

  /// `API`, `Aria` or `Web`
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source: Option<String>,
}

/// Body weight log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weight {
  pub weight: Vec<WeightLog>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightLog {
  pub log_id: i64,
  pub date: NaiveDate,

  /// `HH:mm:ss`
  #[serde(default)]
  pub time: String,

  pub weight: f64,

  #[serde(default)]
  pub bmi: f64,

  /// Body fat percentage when the scale measured it
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fat: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source: Option<String>,
}

impl Weight {
  /// Difference between the last and first entry, by date
  pub fn change(&self) -> Option<f64> {
    let first = self.weight.iter().min_by_key(|w| (w.date, w.log_id))?;
    let last = self.weight.iter().max_by_key(|w| (w.date, w.log_id))?;
    Some(last.weight - first.weight)
  }
}

//! Food log models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Food log for one day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Food {
  /// Individual log entries
  pub foods: Vec<FoodLogEntry>,

  /// Totals for the day
  pub summary: NutritionalValues,

  /// Daily goals, when the user has set them
  #[serde(skip_serializing_if = "Option::is_none")]
  pub goals: Option<FoodGoals>,
}

/// A single logged food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogEntry {
  pub log_id: i64,
  pub log_date: NaiveDate,

  #[serde(default)]
  pub is_favorite: bool,

  pub logged_food: LoggedFood,

  #[serde(default)]
  pub nutritional_values: NutritionalValues,
}

/// Food reference and portion of a log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedFood {
  pub food_id: i64,
  pub name: String,

  #[serde(default)]
  pub brand: String,

  #[serde(default)]
  pub access_level: String,

  pub amount: f64,

  #[serde(default)]
  pub calories: f64,

  #[serde(default)]
  pub meal_type_id: i32,

  #[serde(default)]
  pub locale: String,

  pub unit: FoodUnit,

  /// Unit ids this food can be logged in
  #[serde(default)]
  pub units: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodUnit {
  pub id: i64,
  pub name: String,
  pub plural: String,
}

/// Nutrient totals; used both per entry and for the daily summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionalValues {
  pub calories: f64,
  pub carbs: f64,
  pub fat: f64,
  pub fiber: f64,
  pub protein: f64,
  pub sodium: f64,

  /// Only present in the daily summary
  #[serde(skip_serializing_if = "Option::is_none")]
  pub water: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodGoals {
  pub calories: f64,
}

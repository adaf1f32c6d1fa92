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

//! Food logging endpoints

use super::{user_path, EndpointCore};
use crate::response::FitbitResponse;
use chrono::NaiveDate;
use fb_core::{format_date, Result};
use fb_models::Food;
use tracing::instrument;

/// Nutrition endpoints
#[derive(Debug, Clone)]
pub struct FoodEndpoints {
  core: EndpointCore,
}

impl FoodEndpoints {
  /// Create a new food endpoints instance
  pub fn new(core: EndpointCore) -> Self {
    Self { core }
  }

  /// Get the food log, daily summary and goals for one day
  #[instrument(skip(self))]
  pub async fn log(&self, date: NaiveDate, encoded_user_id: Option<&str>) -> Result<FitbitResponse<Food>> {
    let path = format!("{}/foods/log/date/{}.json", user_path(encoded_user_id), format_date(date));
    self.core.fetch(&path, None).await
  }
}

#[cfg(test)]
mod tests {
  use super::super::test_support::*;
  use super::*;
  use reqwest::StatusCode;

  #[tokio::test]
  async fn test_food_log() {
    let body = r#"{"foods":[],"summary":{"calories":1250,"water":500},"goals":{"calories":2000}}"#;
    let transport = RecordingTransport::new(StatusCode::OK, body);
    let endpoints = FoodEndpoints::new(test_core(transport.clone()));

    let food = endpoints
      .log(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(), None)
      .await
      .unwrap()
      .into_data()
      .unwrap();

    assert_eq!(food.summary.calories, 1250.0);
    assert_eq!(food.summary.water, Some(500.0));
    assert_eq!(transport.paths(), vec!["/1/user/-/foods/log/date/2024-02-29.json"]);
  }
}

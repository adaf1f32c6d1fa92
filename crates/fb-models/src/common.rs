/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
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

//! Types shared by several Fitbit responses

use serde::{Deserialize, Serialize};

/// Root property an unsuccessful response lists its errors under
pub const ERRORS_ROOT: &str = "errors";

/// One API-level error entry from an unsuccessful response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
  /// Error category, e.g. `invalid_token` or `validation`
  #[serde(default)]
  pub error_type: String,

  /// Request field the error refers to, when there is one
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub field_name: Option<String>,

  /// Human readable description
  #[serde(default)]
  pub message: String,
}

impl std::fmt::Display for ApiError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match &self.field_name {
      Some(field) => write!(f, "{} ({}): {}", self.error_type, field, self.message),
      None => write!(f, "{}: {}", self.error_type, self.message),
    }
  }
}

/// Accept a number the API may encode either as a JSON number or as a string.
///
/// Use with `#[serde(deserialize_with = "string_or_number::deserialize")]`.
pub mod string_or_number {
  use serde::{de, Deserialize, Deserializer};
  use std::fmt::Display;
  use std::str::FromStr;

  pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
  where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: Display,
  {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
      Text(String),
      Value(T),
    }

    match Raw::<T>::deserialize(deserializer)? {
      Raw::Text(text) => text.trim().parse().map_err(de::Error::custom),
      Raw::Value(value) => Ok(value),
    }
  }
}

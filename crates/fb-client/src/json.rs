//! JSON decoding helpers
//!
//! Fitbit responses either carry their payload at the document root or nest
//! it under a single named property.

use fb_core::{Error, Result};
use fb_models::{ApiError, ERRORS_ROOT};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Decode the whole body as `T`
pub fn deserialize<T: DeserializeOwned>(body: &str) -> Result<T> {
  Ok(serde_json::from_str(body)?)
}

/// Decode the value found under the top-level property `root` as `T`
///
/// # Errors
///
/// [`Error::Serde`] if the body is not JSON or the value does not match `T`,
/// [`Error::MissingField`] if the document has no `root` property.
pub fn deserialize_root<T: DeserializeOwned>(body: &str, root: &str) -> Result<T> {
  let mut document: Value = serde_json::from_str(body)?;
  let value = document
    .get_mut(root)
    .map(Value::take)
    .ok_or_else(|| Error::MissingField(root.to_string()))?;
  Ok(serde_json::from_value(value)?)
}

/// Error entries of an unsuccessful response.
///
/// A body that cannot be read as an `errors` array yields no entries.
pub fn parse_errors(body: &str) -> Vec<ApiError> {
  match deserialize_root(body, ERRORS_ROOT) {
    Ok(errors) => errors,
    Err(e) => {
      warn!("Could not read API errors from response body: {}", e);
      Vec::new()
    }
  }
}

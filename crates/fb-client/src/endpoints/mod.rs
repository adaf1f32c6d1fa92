//! Endpoint groups and the shared fetch-and-decode path

pub mod body;
pub mod food;
pub mod time_series;
pub mod user;

use crate::json;
use crate::response::FitbitResponse;
use crate::transport::HttpTransport;
use fb_core::{Error, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Common endpoint structure
///
/// Every endpoint group holds one of these: the shared transport and the
/// base URL paths are resolved against.
#[derive(Clone)]
pub struct EndpointCore {
  transport: Arc<dyn HttpTransport>,
  base_url: Url,
}

impl EndpointCore {
  /// Create a new endpoint core
  pub fn new(transport: Arc<dyn HttpTransport>, base_url: Url) -> Self {
    Self { transport, base_url }
  }

  /// Base URL requests are sent to
  pub fn base_url(&self) -> &Url {
    &self.base_url
  }

  pub(crate) fn with_base_url(&self, base_url: Url) -> Self {
    Self { transport: self.transport.clone(), base_url }
  }

  /// Absolute URL for an API path such as `/1/user/-/profile.json`
  ///
  /// The path must survive parsing unchanged; one that dot segments would
  /// rewrite is rejected.
  pub(crate) fn url(&self, path: &str) -> Result<Url> {
    let base = self.base_url.as_str().trim_end_matches('/');
    let url = Url::parse(&format!("{base}{path}"))?;
    if !url.path().ends_with(path) {
      return Err(Error::InvalidInput(format!("Path {path} does not name a single endpoint")));
    }
    Ok(url)
  }

  /// GET `path` and decode a successful body as `T`.
  ///
  /// With `root` set, the payload is the value under that top-level
  /// property; otherwise it is the whole document. Unsuccessful statuses
  /// come back as an envelope carrying the parsed error entries.
  pub(crate) async fn fetch<T: DeserializeOwned>(
    &self,
    path: &str,
    root: Option<&str>,
  ) -> Result<FitbitResponse<T>> {
    let url = self.url(path)?;
    debug!("Making request to: {}", url);

    let response = self.transport.get(url).await?;
    let status = response.status;
    debug!("Response status {} with {} bytes", status, response.body.len());

    let mut envelope =
      FitbitResponse { status, headers: response.headers, errors: Vec::new(), data: None };

    if !status.is_success() {
      warn!("Request for {} failed with status: {}", path, status);
      envelope.errors = json::parse_errors(&response.body);
      return Ok(envelope);
    }

    let data = match root {
      Some(root) => json::deserialize_root(&response.body, root)?,
      None => json::deserialize(&response.body)?,
    };
    envelope.data = Some(data);

    Ok(envelope)
  }
}

impl std::fmt::Debug for EndpointCore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("EndpointCore")
      .field("transport", &"HttpTransport")
      .field("base_url", &self.base_url.as_str())
      .finish()
  }
}

/// Path prefix for a user: `/1/user/{id}`, the id escaped as one segment
pub(crate) fn user_path(encoded_user_id: Option<&str>) -> String {
  format!("/1/user/{}", urlencoding::encode(fb_core::resolve_user_id(encoded_user_id)))
}


#[cfg(test)]
mod tests {
  use super::test_support::*;
  use super::*;
  use fb_models::UserProfile;
  use reqwest::StatusCode;

  #[test]
  fn test_url_joins_without_double_slash() {
    let transport = RecordingTransport::new(StatusCode::OK, "{}");
    let core = test_core(transport);
    assert_eq!(
      core.url("/1/user/-/devices.json").unwrap().as_str(),
      "https://api.fitbit.com/1/user/-/devices.json"
    );

    let proxied = core.with_base_url(Url::parse("http://localhost:8080/fitbit/").unwrap());
    assert_eq!(
      proxied.url("/1/user/-/devices.json").unwrap().as_str(),
      "http://localhost:8080/fitbit/1/user/-/devices.json"
    );
  }

  #[test]
  fn test_user_path() {
    assert_eq!(user_path(None), "/1/user/-");
    assert_eq!(user_path(Some("")), "/1/user/-");
    assert_eq!(user_path(Some("228TQ4")), "/1/user/228TQ4");
  }

  #[test]
  fn test_user_id_stays_in_one_segment() {
    assert_eq!(user_path(Some("../../2/user/X")), "/1/user/..%2F..%2F2%2Fuser%2FX");
    assert_eq!(user_path(Some("ABC?x=1#")), "/1/user/ABC%3Fx%3D1%23");
    assert_eq!(user_path(Some("..")), "/1/user/..");
  }

  #[test]
  fn test_url_rejects_dot_segments() {
    let core = test_core(RecordingTransport::new(StatusCode::OK, "{}"));
    assert!(matches!(core.url("/1/user/../profile.json"), Err(Error::InvalidInput(_))));
    assert!(matches!(core.url("/1/user/./profile.json"), Err(Error::InvalidInput(_))));
    assert!(core.url("/1/user/..%2F2/profile.json").is_ok());
  }

  #[tokio::test]
  async fn test_fetch_success_with_root() {
    let transport = RecordingTransport::new(StatusCode::OK, r#"{"user":{"encodedId":"ABC"}}"#);
    let response: FitbitResponse<UserProfile> =
      test_core(transport.clone()).fetch("/1/user/-/profile.json", Some("user")).await.unwrap();

    assert!(response.success());
    assert!(response.errors.is_empty());
    assert_eq!(response.data.unwrap().encoded_id, "ABC");
    assert_eq!(transport.paths(), vec!["/1/user/-/profile.json"]);
  }

  #[tokio::test]
  async fn test_fetch_failure_keeps_errors_and_no_data() {
    let body = r#"{"errors":[{"errorType":"insufficient_permissions","message":"Read scope missing"}]}"#;
    let transport = RecordingTransport::new(StatusCode::FORBIDDEN, body);
    let response: FitbitResponse<UserProfile> =
      test_core(transport).fetch("/1/user/-/profile.json", Some("user")).await.unwrap();

    assert!(!response.success());
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].error_type, "insufficient_permissions");
    assert!(response.data.is_none());
  }

  #[tokio::test]
  async fn test_fetch_malformed_success_body_is_error() {
    let transport = RecordingTransport::new(StatusCode::OK, "{\"user\":");
    let result = test_core(transport).fetch::<UserProfile>("/1/user/-/profile.json", Some("user")).await;
    assert!(matches!(result, Err(Error::Serde(_))));
  }
}

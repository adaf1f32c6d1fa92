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

//! User profile, paired device and friend endpoints

use super::{user_path, EndpointCore};
use crate::response::FitbitResponse;
use fb_core::Result;
use fb_models::{Device, Friend, UserProfile, FRIENDS_ROOT, USER_ROOT};
use tracing::instrument;

/// Endpoints describing the user and their account
#[derive(Debug, Clone)]
pub struct UserEndpoints {
  core: EndpointCore,
}

impl UserEndpoints {
  /// Create a new user endpoints instance
  pub fn new(core: EndpointCore) -> Self {
    Self { core }
  }

  /// Get a user's profile
  ///
  /// # Arguments
  ///
  /// * `encoded_user_id` - Another user's encoded id, or `None` for the
  ///   authenticated user
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let response = client.user().profile(None).await?;
  /// if let Some(profile) = response.data {
  ///     println!("Hello {}", profile.display_name);
  /// }
  /// ```
  #[instrument(skip(self))]
  pub async fn profile(&self, encoded_user_id: Option<&str>) -> Result<FitbitResponse<UserProfile>> {
    let path = format!("{}/profile.json", user_path(encoded_user_id));
    self.core.fetch(&path, Some(USER_ROOT)).await
  }

  /// Get the trackers and scales paired with the authenticated user's account
  #[instrument(skip(self))]
  pub async fn devices(&self) -> Result<FitbitResponse<Vec<Device>>> {
    let path = format!("{}/devices.json", user_path(None));
    self.core.fetch(&path, None).await
  }

  /// Get a user's friends
  #[instrument(skip(self))]
  pub async fn friends(&self, encoded_user_id: Option<&str>) -> Result<FitbitResponse<Vec<Friend>>> {
    let path = format!("{}/friends.json", user_path(encoded_user_id));
    self.core.fetch(&path, Some(FRIENDS_ROOT)).await
  }
}

#[cfg(test)]
mod tests {
  use super::super::test_support::*;
  use super::*;
  use reqwest::StatusCode;

  #[tokio::test]
  async fn test_profile_for_other_user() {
    let transport = RecordingTransport::new(StatusCode::OK, r#"{"user":{"encodedId":"22A9XB"}}"#);
    let endpoints = UserEndpoints::new(test_core(transport.clone()));

    let response = endpoints.profile(Some("22A9XB")).await.unwrap();

    assert_eq!(response.data.unwrap().encoded_id, "22A9XB");
    assert_eq!(transport.paths(), vec!["/1/user/22A9XB/profile.json"]);
  }

  #[tokio::test]
  async fn test_user_id_cannot_leave_its_segment() {
    let transport = RecordingTransport::new(StatusCode::OK, r#"{"user":{}}"#);
    let endpoints = UserEndpoints::new(test_core(transport.clone()));

    endpoints.profile(Some("../../../2/user/OTHER")).await.unwrap();
    endpoints.profile(Some("ABC?x=1#")).await.unwrap();
    let result = endpoints.profile(Some("..")).await;

    assert!(matches!(result, Err(fb_core::Error::InvalidInput(_))));
    let requests = transport.requests.lock().unwrap();
    let urls: Vec<&str> = requests.iter().map(|u| u.as_str()).collect();
    assert_eq!(
      urls,
      vec![
        "https://api.fitbit.com/1/user/..%2F..%2F..%2F2%2Fuser%2FOTHER/profile.json",
        "https://api.fitbit.com/1/user/ABC%3Fx%3D1%23/profile.json",
      ]
    );
  }

  #[tokio::test]
  async fn test_devices_at_document_root() {
    let body = r#"[{"battery":"High","deviceVersion":"Charge HR","id":"1","type":"TRACKER"}]"#;
    let transport = RecordingTransport::new(StatusCode::OK, body);
    let endpoints = UserEndpoints::new(test_core(transport.clone()));

    let devices = endpoints.devices().await.unwrap().into_data().unwrap();

    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].device_version, "Charge HR");
    assert_eq!(transport.paths(), vec!["/1/user/-/devices.json"]);
  }

  #[tokio::test]
  async fn test_friends_under_root() {
    let body = r#"{"friends":[{"user":{"displayName":"Robin"}}]}"#;
    let transport = RecordingTransport::new(StatusCode::OK, body);
    let endpoints = UserEndpoints::new(test_core(transport.clone()));

    let friends = endpoints.friends(None).await.unwrap().into_data().unwrap();

    assert_eq!(friends[0].user.display_name, "Robin");
    assert_eq!(transport.paths(), vec!["/1/user/-/friends.json"]);
  }
}

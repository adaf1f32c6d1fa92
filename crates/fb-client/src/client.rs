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

//! The Fitbit client and its construction

use crate::endpoints::{
  body::BodyEndpoints, food::FoodEndpoints, time_series::TimeSeriesEndpoints, user::UserEndpoints,
  EndpointCore,
};
use crate::transport::{HttpTransport, OAuthTransport};
use fb_core::{Config, Credentials, Result};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Where a client gets its authorized transport from
pub enum ClientSource {
  /// Use a transport that already authorizes its requests
  FromTransport(Arc<dyn HttpTransport>),

  /// Build an OAuth 1.0a signing transport from long-lived credentials
  FromCredentials(Credentials),
}

/// Main Fitbit API client
///
/// Provides access to the API through endpoint groups. Every call returns a
/// [`FitbitResponse`](crate::FitbitResponse): branch on `success()` rather
/// than on `Err`, which is reserved for bad input, transport failures and
/// undecodable success bodies.
///
/// The client is cheap to clone and safe to share between tasks; all calls
/// go through the same transport.
///
/// # Examples
///
/// ```ignore
/// use fb_client::{ClientSource, FitbitClient};
/// use fb_core::Credentials;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Credentials::new("key", "secret", "token", "token_secret");
///     let client = FitbitClient::new(ClientSource::FromCredentials(credentials))?;
///
///     let profile = client.user().profile(None).await?;
///     if profile.success() {
///         println!("Signed in as {}", profile.data.unwrap().display_name);
///     } else {
///         for error in &profile.errors {
///             eprintln!("{error}");
///         }
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FitbitClient {
  core: EndpointCore,
}

impl FitbitClient {
  /// Create a new client against the public Fitbit API
  ///
  /// # Errors
  ///
  /// Returns [`fb_core::Error::MissingCredential`] naming the first blank
  /// credential when built from credentials.
  pub fn new(source: ClientSource) -> Result<Self> {
    let base_url = Url::parse(fb_core::FITBIT_BASE_URL)?;
    let transport: Arc<dyn HttpTransport> = match source {
      ClientSource::FromTransport(transport) => transport,
      ClientSource::FromCredentials(credentials) => Arc::new(OAuthTransport::new(
        credentials,
        Duration::from_secs(fb_core::DEFAULT_TIMEOUT_SECS),
      )?),
    };

    Ok(Self { core: EndpointCore::new(transport, base_url) })
  }

  /// Create an OAuth-signed client from configuration
  ///
  /// # Examples
  ///
  /// ```ignore
  /// use fb_client::FitbitClient;
  /// use fb_core::Config;
  ///
  /// let config = Config::from_env().expect("Missing Fitbit credentials");
  /// let client = FitbitClient::from_config(&config).expect("Failed to create client");
  /// ```
  pub fn from_config(config: &Config) -> Result<Self> {
    let transport =
      OAuthTransport::new(config.credentials.clone(), Duration::from_secs(config.timeout_secs))?;
    let base_url = Url::parse(&config.base_url)?;

    Ok(Self { core: EndpointCore::new(Arc::new(transport), base_url) })
  }

  /// Send requests to a different host, e.g. a mock server or proxy
  pub fn with_base_url(self, base_url: &str) -> Result<Self> {
    let base_url = Url::parse(base_url)?;
    Ok(Self { core: self.core.with_base_url(base_url) })
  }

  /// Base URL requests are sent to
  pub fn base_url(&self) -> &Url {
    self.core.base_url()
  }

  /// Get access to profile, device and friend endpoints
  pub fn user(&self) -> UserEndpoints {
    UserEndpoints::new(self.core.clone())
  }

  /// Get access to time series endpoints
  pub fn time_series(&self) -> TimeSeriesEndpoints {
    TimeSeriesEndpoints::new(self.core.clone())
  }

  /// Get access to food log endpoints
  pub fn food(&self) -> FoodEndpoints {
    FoodEndpoints::new(self.core.clone())
  }

  /// Get access to body measurement, blood pressure, fat and weight endpoints
  pub fn body(&self) -> BodyEndpoints {
    BodyEndpoints::new(self.core.clone())
  }
}

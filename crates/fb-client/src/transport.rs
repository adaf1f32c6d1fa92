//! HTTP transport layer for Fitbit API requests

use crate::oauth::OAuthSigner;
use async_trait::async_trait;
use fb_core::{Credentials, Error, Result};
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("fb-client/", env!("CARGO_PKG_VERSION"));

/// Raw response handed back by a transport
#[derive(Debug, Clone)]
pub struct HttpResponse {
  /// HTTP status
  pub status: StatusCode,
  /// Response headers
  pub headers: HeaderMap,
  /// Response body as text
  pub body: String,
}

impl HttpResponse {
  /// Read status, headers and the full body from a reqwest response
  pub async fn read(response: reqwest::Response) -> Result<Self> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.text().await.map_err(Error::transport)?;
    Ok(Self { status, headers, body })
  }
}

/// An authorized HTTP transport.
///
/// Implementations must attach whatever authorization the API needs and be
/// usable from several in-flight requests at once. Network failures are
/// returned as [`Error::Transport`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
  /// Issue a GET request for `url`
  async fn get(&self, url: Url) -> Result<HttpResponse>;
}

/// A pre-authorized `reqwest::Client` (default headers, middleware proxies,
/// ...) can be used directly.
#[async_trait]
impl HttpTransport for Client {
  async fn get(&self, url: Url) -> Result<HttpResponse> {
    let response = Client::get(self, url).send().await.map_err(Error::transport)?;
    HttpResponse::read(response).await
  }
}

/// Transport that signs every request with OAuth 1.0a credentials
#[derive(Debug, Clone)]
pub struct OAuthTransport {
  client: Client,
  signer: OAuthSigner,
}

impl OAuthTransport {
  /// Create a signing transport
  ///
  /// # Errors
  ///
  /// Returns [`Error::MissingCredential`] if any credential is blank, or a
  /// transport error if the HTTP client cannot be created.
  pub fn new(credentials: Credentials, timeout: Duration) -> Result<Self> {
    let signer = OAuthSigner::new(credentials)?;
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(USER_AGENT)
      .build()
      .map_err(Error::transport)?;

    Ok(Self { client, signer })
  }
}

#[async_trait]
impl HttpTransport for OAuthTransport {
  async fn get(&self, url: Url) -> Result<HttpResponse> {
    let authorization = self.signer.authorization_header("GET", &url);
    debug!("Signed request to: {}", url);

    let response = self
      .client
      .get(url)
      .header(AUTHORIZATION, authorization)
      .send()
      .await
      .map_err(Error::transport)?;

    HttpResponse::read(response).await
  }
}

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

//! OAuth 1.0a request signing (HMAC-SHA1, RFC 5849)

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use fb_core::{Credentials, Result};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use url::Url;
use urlencoding::encode;
use uuid::Uuid;

type HmacSha1 = Hmac<Sha1>;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// Produces `Authorization` headers for requests made on behalf of one user
#[derive(Debug, Clone)]
pub struct OAuthSigner {
  credentials: Credentials,
}

impl OAuthSigner {
  /// Create a signer, rejecting blank credentials
  pub fn new(credentials: Credentials) -> Result<Self> {
    credentials.validate()?;
    Ok(Self { credentials })
  }

  /// Build the `Authorization` header value for a request, with a fresh nonce
  /// and the current timestamp
  pub fn authorization_header(&self, method: &str, url: &Url) -> String {
    let nonce = Uuid::new_v4().simple().to_string();
    self.authorization_header_with(method, url, &nonce, Utc::now().timestamp())
  }

  fn authorization_header_with(&self, method: &str, url: &Url, nonce: &str, timestamp: i64) -> String {
    let mut params = self.oauth_params(nonce, timestamp);
    let base = signature_base_string(method, url, &params);
    params.push(("oauth_signature", self.sign(&base)));
    params.sort();

    let fields = params
      .iter()
      .map(|(key, value)| format!("{}=\"{}\"", key, encode(value)))
      .collect::<Vec<_>>()
      .join(", ");

    format!("OAuth {fields}")
  }

  fn oauth_params(&self, nonce: &str, timestamp: i64) -> Vec<(&'static str, String)> {
    vec![
      ("oauth_consumer_key", self.credentials.consumer_key.clone()),
      ("oauth_nonce", nonce.to_string()),
      ("oauth_signature_method", SIGNATURE_METHOD.to_string()),
      ("oauth_timestamp", timestamp.to_string()),
      ("oauth_token", self.credentials.access_token.clone()),
      ("oauth_version", OAUTH_VERSION.to_string()),
    ]
  }

  fn sign(&self, base: &str) -> String {
    let key = format!(
      "{}&{}",
      encode(&self.credentials.consumer_secret),
      encode(&self.credentials.access_secret)
    );
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(base.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
  }
}

/// `METHOD&base-uri&normalized-params`, each part percent encoded
fn signature_base_string(method: &str, url: &Url, oauth_params: &[(&str, String)]) -> String {
  let mut params: Vec<(String, String)> = url
    .query_pairs()
    .map(|(k, v)| (encode(&k).into_owned(), encode(&v).into_owned()))
    .chain(oauth_params.iter().map(|(k, v)| (encode(k).into_owned(), encode(v).into_owned())))
    .collect();
  params.sort();

  let normalized = params.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("&");

  format!(
    "{}&{}&{}",
    method.to_ascii_uppercase(),
    encode(&base_uri(url)),
    encode(&normalized)
  )
}

/// Scheme, host, non-default port and path; no query or fragment
fn base_uri(url: &Url) -> String {
  let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
  let port = url.port().map(|p| format!(":{p}")).unwrap_or_default();
  format!("{}://{}{}{}", url.scheme(), host, port, url.path())
}

#[cfg(test)]
mod tests {
  use super::*;

  // Reference request from RFC 5849 / OAuth Core 1.0 appendix A
  fn reference_signer() -> OAuthSigner {
    OAuthSigner::new(Credentials::new(
      "dpf43f3p2l4k3l03",
      "kd94hf93k423kf44",
      "nnch734d00sl2jdk",
      "pfkkdhi9sl3r4s00",
    ))
    .unwrap()
  }

  fn reference_url() -> Url {
    Url::parse("http://photos.example.net/photos?file=vacation.jpg&size=original").unwrap()
  }

  #[test]
  fn test_base_string_encodes_query_values_twice() {
    let signer = reference_signer();
    let url = Url::parse("http://photos.example.net/photos?title=a b&tags=x/y~z").unwrap();
    let base = signature_base_string("get", &url, &signer.oauth_params("n", 1));

    assert!(base.starts_with("GET&http%3A%2F%2Fphotos.example.net%2Fphotos&"));
    // Space becomes %20 in the parameter, then %2520 in the base string
    assert!(base.contains("title%3Da%2520b"));
    assert!(base.contains("tags%3Dx%252Fy~z"));
  }

  #[test]
  fn test_base_uri_normalization() {
    let url = Url::parse("HTTPS://API.Fitbit.com:443/1/user/-/profile.json?x=1#frag").unwrap();
    assert_eq!(base_uri(&url), "https://api.fitbit.com/1/user/-/profile.json");

    let url = Url::parse("http://localhost:8080/1/user/-/devices.json").unwrap();
    assert_eq!(base_uri(&url), "http://localhost:8080/1/user/-/devices.json");
  }

  #[test]
  fn test_reference_base_string() {
    let signer = reference_signer();
    let params = signer.oauth_params("kllo9940pd9333jh", 1191242096);
    let base = signature_base_string("GET", &reference_url(), &params);

    assert_eq!(
      base,
      "GET&http%3A%2F%2Fphotos.example.net%2Fphotos&file%3Dvacation.jpg%26\
       oauth_consumer_key%3Ddpf43f3p2l4k3l03%26oauth_nonce%3Dkllo9940pd9333jh%26\
       oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1191242096%26\
       oauth_token%3Dnnch734d00sl2jdk%26oauth_version%3D1.0%26size%3Doriginal"
    );
  }

  #[test]
  fn test_reference_signature() {
    let header =
      reference_signer().authorization_header_with("GET", &reference_url(), "kllo9940pd9333jh", 1191242096);

    assert!(header.starts_with("OAuth "));
    assert!(header.contains(r#"oauth_signature="tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D""#));
    assert!(header.contains(r#"oauth_consumer_key="dpf43f3p2l4k3l03""#));
    assert!(header.contains(r#"oauth_token="nnch734d00sl2jdk""#));
  }

  #[test]
  fn test_fresh_nonce_per_header() {
    let signer = reference_signer();
    let url = reference_url();
    assert_ne!(signer.authorization_header("GET", &url), signer.authorization_header("GET", &url));
  }

  #[test]
  fn test_blank_credentials_rejected() {
    let result = OAuthSigner::new(Credentials::new("key", "", "token", "secret"));
    assert!(matches!(result, Err(fb_core::Error::MissingCredential("consumer_secret"))));
  }
}

//! Configuration management for the Fitbit client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Long-lived OAuth 1.0a credentials for one authorized user
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Credentials {
  /// Application consumer key
  pub consumer_key: String,

  /// Application consumer secret
  pub consumer_secret: String,

  /// User access token
  pub access_token: String,

  /// User access token secret
  pub access_secret: String,
}

impl Credentials {
  pub fn new(
    consumer_key: impl Into<String>,
    consumer_secret: impl Into<String>,
    access_token: impl Into<String>,
    access_secret: impl Into<String>,
  ) -> Self {
    Self {
      consumer_key: consumer_key.into(),
      consumer_secret: consumer_secret.into(),
      access_token: access_token.into(),
      access_secret: access_secret.into(),
    }
  }

  /// Check that every credential is present.
  ///
  /// Fields are checked in declaration order and the first blank one is
  /// reported.
  pub fn validate(&self) -> Result<()> {
    let fields = [
      ("consumer_key", &self.consumer_key),
      ("consumer_secret", &self.consumer_secret),
      ("access_token", &self.access_token),
      ("access_secret", &self.access_secret),
    ];

    for (name, value) in fields {
      if value.trim().is_empty() {
        return Err(Error::MissingCredential(name));
      }
    }
    Ok(())
  }
}

impl std::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("consumer_key", &self.consumer_key)
      .field("consumer_secret", &"<redacted>")
      .field("access_token", &self.access_token)
      .field("access_secret", &"<redacted>")
      .finish()
  }
}

/// Main configuration struct for the Fitbit client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// OAuth credentials
  pub credentials: Credentials,

  /// Base URL for the Fitbit API
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let credentials = Credentials {
      consumer_key: required("FITBIT_CONSUMER_KEY")?,
      consumer_secret: required("FITBIT_CONSUMER_SECRET")?,
      access_token: required("FITBIT_ACCESS_TOKEN")?,
      access_secret: required("FITBIT_ACCESS_SECRET")?,
    };

    let base_url = env::var("FITBIT_BASE_URL").unwrap_or_else(|_| crate::FITBIT_BASE_URL.to_string());

    let timeout_secs = env::var("FITBIT_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid FITBIT_TIMEOUT_SECS".to_string()))?;

    Ok(Config { credentials, base_url, timeout_secs })
  }

  /// Create a config with default values
  pub fn with_credentials(credentials: Credentials) -> Self {
    Config {
      credentials,
      base_url: crate::FITBIT_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }
}

fn required(name: &str) -> Result<String> {
  Ok(env::var(name)?)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn creds() -> Credentials {
    Credentials::new("key", "secret", "token", "token_secret")
  }

  #[test]
  fn test_complete_credentials_validate() {
    assert!(creds().validate().is_ok());
  }

  #[test]
  fn test_blank_credential_is_named() {
    let cases: [(fn(&mut Credentials), &str); 4] = [
      (|c| c.consumer_key.clear(), "consumer_key"),
      (|c| c.consumer_secret = "  ".to_string(), "consumer_secret"),
      (|c| c.access_token.clear(), "access_token"),
      (|c| c.access_secret = "\t".to_string(), "access_secret"),
    ];

    for (blank, expected) in cases {
      let mut c = creds();
      blank(&mut c);
      match c.validate() {
        Err(Error::MissingCredential(name)) => assert_eq!(name, expected),
        other => panic!("expected MissingCredential({expected}), got {other:?}"),
      }
    }
  }

  #[test]
  fn test_debug_redacts_secrets() {
    let shown = format!("{:?}", creds());
    assert!(shown.contains("key"));
    assert!(!shown.contains("token_secret"));
    assert!(shown.contains("<redacted>"));
  }

  #[test]
  fn test_unset_variable_is_env_var_error() {
    let result = required("FB_CORE_TEST_NEVER_SET");
    assert!(matches!(result, Err(Error::EnvVar(env::VarError::NotPresent))));
  }

  #[test]
  fn test_with_credentials_defaults() {
    let config = Config::with_credentials(creds());
    assert_eq!(config.base_url, crate::FITBIT_BASE_URL);
    assert_eq!(config.timeout_secs, 30);
  }
}

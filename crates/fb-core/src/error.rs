use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for fb-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// A required OAuth credential was empty and no transport was supplied
  #[error("Missing required credential: {0}")]
  MissingCredential(&'static str),

  /// Period keyword not accepted by the endpoint
  #[error("Invalid period '{period}'. Allowed periods: {allowed}")]
  InvalidPeriod { period: String, allowed: String },

  /// Explicit date range wider than the endpoint accepts
  #[error(
    "Date range {start} to {end} exceeds the maximum of {max_days} days. \
     Use the period form of this call for longer ranges"
  )]
  DateRangeTooLong { start: NaiveDate, end: NaiveDate, max_days: i64 },

  /// Caller supplied a value that cannot be turned into a request
  #[error("Invalid input: {0}")]
  InvalidInput(String),

  /// Network or connection failure reported by the transport
  #[error(transparent)]
  Transport(Box<dyn std::error::Error + Send + Sync>),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// Missing required field in response
  #[error("Missing required field: {0}")]
  MissingField(String),

  /// URL could not be parsed or joined
  #[error("Invalid URL: {0}")]
  Url(#[from] url::ParseError),
}

impl Error {
  /// Wrap a transport failure without altering it
  pub fn transport<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Error::Transport(Box::new(err))
  }
}

/// Result type alias for fb-* crates
pub type Result<T> = std::result::Result<T, Error>;

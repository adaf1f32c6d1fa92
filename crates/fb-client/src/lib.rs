//! # fb-client
//!
//! A typed Fitbit API client for Rust.
//!
//! ## Features
//!
//! - **OAuth 1.0a**: Requests are signed with HMAC-SHA1 from long-lived tokens
//! - **Injectable transport**: Bring any authorized [`HttpTransport`]
//! - **Type Safe**: Strongly typed responses using fb-models
//! - **Uniform results**: Every call returns a [`FitbitResponse`] envelope
//!   with status, headers, API errors and the decoded payload
//!
//! ## Usage
//!
//! ```ignore
//! use fb_client::FitbitClient;
//! use fb_core::{Config, DateRangePeriod, TimeSeriesResourceType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = FitbitClient::from_config(&config)?;
//!
//!     let today = chrono::Local::now().date_naive();
//!     let steps = client
//!         .time_series()
//!         .period_int(TimeSeriesResourceType::Steps, today, DateRangePeriod::SevenDays, None)
//!         .await?;
//!
//!     match steps.data {
//!         Some(series) => println!("Steps this week: {}", series.total()),
//!         None => println!("Request failed: {:?}", steps.errors),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! An unsuccessful HTTP status is reported in the envelope, not as `Err`.
//! `Err(fb_core::Error)` is returned for blank credentials, invalid periods
//! or date ranges (checked before any request), transport failures and
//! malformed success bodies.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod json;
pub mod oauth;
pub mod response;
pub mod transport;

// Re-export the main client and common types
pub use client::{ClientSource, FitbitClient};
pub use fb_core::{Config, Credentials, Error, Result};
pub use fb_models::*;
pub use reqwest::{header::HeaderMap, StatusCode};
pub use response::FitbitResponse;
pub use transport::{HttpResponse, HttpTransport, OAuthTransport};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  body::BodyEndpoints, food::FoodEndpoints, time_series::TimeSeriesEndpoints, user::UserEndpoints,
};

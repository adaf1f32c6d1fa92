//! # fb-models
//!
//! Data models for Fitbit API responses.
//!
//! Each endpoint decodes into one of these plain records. Some endpoints nest
//! their payload under a root property (`user`, `friends`, `activities-steps`,
//! ...); the client strips that wrapper before decoding, so the types here
//! describe the inner value.
//!
//! ## Usage
//!
//! ```ignore
//! use fb_models::{Food, UserProfile};
//!
//! let food: Food = serde_json::from_str(&food_log_json)?;
//! let profile: UserProfile = serde_json::from_value(body["user"].clone())?;
//! ```

#![warn(clippy::all)]

pub mod body;
pub mod common;
pub mod device;
pub mod food;
pub mod time_series;
pub mod user;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use body::*;
pub use device::*;
pub use food::*;
pub use time_series::*;
pub use user::*;

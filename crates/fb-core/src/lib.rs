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

//! Core types shared by the fb-* crates: errors, configuration, credentials
//! and the keyword enums used to build Fitbit endpoint paths.

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, Credentials};
pub use error::{Error, Result};
pub use types::{format_date, resolve_user_id, DateRangePeriod, TimeSeriesResourceType};

/// Base URL for the Fitbit API
pub const FITBIT_BASE_URL: &str = "https://api.fitbit.com";

/// Path segment the API accepts in place of an encoded user id for the caller
pub const CURRENT_USER: &str = "-";

/// Date format used in every endpoint path
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Longest explicit date range accepted by the fat and weight log endpoints
pub const MAX_LOG_RANGE_DAYS: i64 = 31;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
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

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use fb_client::FitbitClient;
use fb_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;
use commands::{
  body::BodyCommand, food::FoodCommand, time_series::TimeSeriesCommand, user::UserCommand,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "fitbit")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Encoded id of the user to query; defaults to the authenticated user
  #[arg(short, long, global = true, env = "FITBIT_USER_ID")]
  user: Option<String>,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  // profile, devices, friends
  #[command(flatten)]
  User(UserCommand),

  /// Show daily values of an activity, food, sleep or body resource
  TimeSeries(TimeSeriesCommand),

  /// Show the food log for a day
  Food(FoodCommand),

  // blood-pressure, body, fat, weight
  #[command(flatten)]
  Body(BodyCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

  // Load configuration
  let config = Config::from_env().context("Fitbit credentials are not configured")?;
  let client = FitbitClient::from_config(&config)?;
  let user = cli.user.as_deref();

  // Execute command
  match cli.command {
    Commands::User(cmd) => commands::user::execute(cmd, &client, user).await,
    Commands::TimeSeries(cmd) => commands::time_series::execute(cmd, &client, user).await,
    Commands::Food(cmd) => commands::food::execute(cmd, &client, user).await,
    Commands::Body(cmd) => commands::body::execute(cmd, &client, user).await,
  }
}

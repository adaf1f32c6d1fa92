use super::{date_or_today, print_response};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use fb_client::FitbitClient;
use fb_core::{DateRangePeriod, TimeSeriesResourceType};

/// Show daily values of an activity, food, sleep or body resource
#[derive(Args, Debug)]
pub struct TimeSeriesCommand {
  /// Resource, e.g. `steps`, `distance`, `minutesAsleep`, `body-weight`
  resource: TimeSeriesResourceType,

  /// First day of an explicit range (yyyy-mm-dd); requires --end
  #[arg(short, long, requires = "end", conflicts_with = "period")]
  start: Option<NaiveDate>,

  /// Last day of the series; defaults to today
  #[arg(short, long)]
  end: Option<NaiveDate>,

  /// Period ending on --end, e.g. 1d, 7d, 1m, 1y, max
  #[arg(short, long, default_value = "7d")]
  period: DateRangePeriod,

  /// Read values as whole numbers (steps, floors, minutes)
  #[arg(short, long)]
  int: bool,
}

pub async fn execute(cmd: TimeSeriesCommand, client: &FitbitClient, user: Option<&str>) -> Result<()> {
  let endpoints = client.time_series();
  let end = date_or_today(cmd.end);

  match (cmd.start, cmd.int) {
    (Some(start), true) => print_response(&endpoints.range_int(cmd.resource, start, end, user).await?),
    (Some(start), false) => print_response(&endpoints.range(cmd.resource, start, end, user).await?),
    (None, true) => print_response(&endpoints.period_int(cmd.resource, end, cmd.period, user).await?),
    (None, false) => print_response(&endpoints.period(cmd.resource, end, cmd.period, user).await?),
  }
}

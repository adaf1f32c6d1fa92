use super::{date_or_today, print_response};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use fb_client::FitbitClient;
use fb_core::DateRangePeriod;

#[derive(Subcommand, Debug)]
pub enum BodyCommand {
  /// Show blood pressure readings for a day
  BloodPressure {
    /// Day to show (yyyy-mm-dd); defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,
  },

  /// Show body measurements and the weight goal for a day
  Body {
    /// Day to show (yyyy-mm-dd); defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,
  },

  /// Show the body fat log
  Fat(LogArgs),

  /// Show the weight log
  Weight(LogArgs),
}

/// Selects a single day, a period ending on a day, or a range of at most 31 days
#[derive(Args, Debug)]
pub struct LogArgs {
  /// Day to show, or first day of a range with --end; defaults to today
  #[arg(short, long)]
  date: Option<NaiveDate>,

  /// Last day of a range starting on --date
  #[arg(short, long, conflicts_with = "period")]
  end: Option<NaiveDate>,

  /// Period ending on --date: 1d, 7d, 1w, 30d or 1m
  #[arg(short, long)]
  period: Option<DateRangePeriod>,
}

enum Span {
  Day(NaiveDate),
  Period(NaiveDate, DateRangePeriod),
  Range(NaiveDate, NaiveDate),
}

impl LogArgs {
  fn span(&self) -> Span {
    let date = date_or_today(self.date);
    match (self.period, self.end) {
      (Some(period), _) => Span::Period(date, period),
      (None, Some(end)) => Span::Range(date, end),
      (None, None) => Span::Day(date),
    }
  }
}

pub async fn execute(cmd: BodyCommand, client: &FitbitClient, user: Option<&str>) -> Result<()> {
  let endpoints = client.body();
  match cmd {
    BodyCommand::BloodPressure { date } => {
      print_response(&endpoints.blood_pressure(date_or_today(date), user).await?)
    },
    BodyCommand::Body { date } => print_response(&endpoints.measurements(date_or_today(date), user).await?),
    BodyCommand::Fat(args) => match args.span() {
      Span::Day(date) => print_response(&endpoints.fat_by_date(date, user).await?),
      Span::Period(date, period) => print_response(&endpoints.fat_by_period(date, period, user).await?),
      Span::Range(start, end) => print_response(&endpoints.fat_by_range(start, end, user).await?),
    },
    BodyCommand::Weight(args) => match args.span() {
      Span::Day(date) => print_response(&endpoints.weight_by_date(date, user).await?),
      Span::Period(date, period) => print_response(&endpoints.weight_by_period(date, period, user).await?),
      Span::Range(start, end) => print_response(&endpoints.weight_by_range(start, end, user).await?),
    },
  }
}

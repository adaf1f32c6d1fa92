use super::{date_or_today, print_response};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use fb_client::FitbitClient;

/// Show the food log for a day
#[derive(Args, Debug)]
pub struct FoodCommand {
  /// Day to show (yyyy-mm-dd); defaults to today
  #[arg(short, long)]
  date: Option<NaiveDate>,
}

pub async fn execute(cmd: FoodCommand, client: &FitbitClient, user: Option<&str>) -> Result<()> {
  let response = client.food().log(date_or_today(cmd.date), user).await?;
  print_response(&response)
}

use super::print_response;
use anyhow::Result;
use clap::Subcommand;
use fb_client::FitbitClient;

#[derive(Subcommand, Debug)]
pub enum UserCommand {
  /// Show a user's profile
  Profile,

  /// List devices paired with the authenticated account
  Devices,

  /// List a user's friends
  Friends,
}

pub async fn execute(cmd: UserCommand, client: &FitbitClient, user: Option<&str>) -> Result<()> {
  let endpoints = client.user();
  match cmd {
    UserCommand::Profile => print_response(&endpoints.profile(user).await?),
    UserCommand::Devices => print_response(&endpoints.devices().await?),
    UserCommand::Friends => print_response(&endpoints.friends(user).await?),
  }
}

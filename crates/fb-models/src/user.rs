//! User profile and social models

use serde::{Deserialize, Serialize};

/// Root property of the profile response
pub const USER_ROOT: &str = "user";

/// Root property of the friends response
pub const FRIENDS_ROOT: &str = "friends";

/// Profile of a Fitbit user
///
/// The API omits fields the user has not filled in and sends empty strings
/// for others, so everything defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
  /// Encoded id used to address this user in other calls
  pub encoded_id: String,

  pub display_name: String,
  pub full_name: String,
  pub nickname: String,
  pub about_me: String,

  /// Avatar image URL
  pub avatar: String,

  /// 150px avatar image URL
  pub avatar150: String,

  pub gender: String,

  /// `yyyy-MM-dd`, or empty when not shared
  pub date_of_birth: String,

  /// `yyyy-MM-dd`
  pub member_since: String,

  pub city: String,
  pub state: String,
  pub country: String,

  /// Height in the unit system of `height_unit`
  pub height: f64,

  /// Weight in the unit system of `weight_unit`
  pub weight: f64,

  pub stride_length_running: f64,
  pub stride_length_walking: f64,

  /// IANA time zone name
  pub timezone: String,

  /// Offset from UTC in milliseconds
  #[serde(rename = "offsetFromUTCMillis")]
  pub offset_from_utc_millis: i64,

  pub locale: String,
  pub foods_locale: String,
  pub distance_unit: String,
  pub glucose_unit: String,
  pub height_unit: String,
  pub water_unit: String,
  pub weight_unit: String,
}

/// Entry of the friends list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Friend {
  pub user: UserProfile,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_profile_deserialization() {
    let profile: UserProfile = serde_json::from_value(json!({
      "aboutMe": "",
      "avatar": "https://static0.fitbit.com/images/profile/defaultProfile_100.png",
      "city": "Portland",
      "country": "US",
      "dateOfBirth": "1985-04-12",
      "displayName": "Sam",
      "encodedId": "257V3V",
      "gender": "NA",
      "height": 176.7,
      "heightUnit": "en_US",
      "memberSince": "2012-08-20",
      "offsetFromUTCMillis": -25200000,
      "strideLengthWalking": 72.4,
      "timezone": "America/Los_Angeles",
      "weight": 80.5
    }))
    .unwrap();

    assert_eq!(profile.encoded_id, "257V3V");
    assert_eq!(profile.display_name, "Sam");
    assert_eq!(profile.offset_from_utc_millis, -25_200_000);
    assert_eq!(profile.height, 176.7);
    assert!(profile.nickname.is_empty());
  }

  #[test]
  fn test_friend_wraps_profile() {
    let friends: Vec<Friend> = serde_json::from_value(json!([
      {"user": {"encodedId": "22A9XB", "displayName": "Robin"}},
      {"user": {"encodedId": "2BG7TF", "displayName": "Kai"}}
    ]))
    .unwrap();

    assert_eq!(friends.len(), 2);
    assert_eq!(friends[1].user.display_name, "Kai");
  }
}

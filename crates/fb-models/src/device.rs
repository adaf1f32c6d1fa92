//! Paired tracker and scale models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A device paired with the user's account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
  /// Device id
  pub id: String,

  /// Battery level keyword, e.g. `High`, `Medium`, `Low`, `Empty`
  #[serde(default)]
  pub battery: String,

  /// Model name, e.g. `Charge HR`
  #[serde(default)]
  pub device_version: String,

  /// Last time the device synced, in the user's local time
  #[serde(default)]
  pub last_sync_time: Option<NaiveDateTime>,

  /// `TRACKER` or `SCALE`
  #[serde(rename = "type", default)]
  pub device_type: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mac: Option<String>,
}

impl Device {
  pub fn is_tracker(&self) -> bool {
    self.device_type.eq_ignore_ascii_case("tracker")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  #[test]
  fn test_device_list_deserialization() {
    let body = r#"[
      {"battery":"High","deviceVersion":"Charge HR","id":"227953041","lastSyncTime":"2015-07-27T17:01:39.313","type":"TRACKER"},
      {"battery":"Low","deviceVersion":"Aria","id":"9131","type":"SCALE","mac":"0A1B2C3D4E5F"}
    ]"#;

    let devices: Vec<Device> = serde_json::from_str(body).unwrap();

    assert_eq!(devices.len(), 2);
    assert!(devices[0].is_tracker());
    assert_eq!(
      devices[0].last_sync_time.unwrap().date(),
      NaiveDate::from_ymd_opt(2015, 7, 27).unwrap()
    );
    assert!(!devices[1].is_tracker());
    assert!(devices[1].last_sync_time.is_none());
    assert_eq!(devices[1].mac.as_deref(), Some("0A1B2C3D4E5F"));
  }
}

//! Convenience access to the OTA updates of a device.

use chrono::{DateTime, Utc};

use crate::options::Options;
use crate::updater::v1;
use crate::versions::{AndroidVersion, LineageVersion};



/// Full information about one OTA update, the flattened form of a v1
/// updater API build record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullUpdateInfo {
  /// When the update was built.
  #[serde(with = "chrono::serde::ts_seconds")]
  pub datetime: DateTime<Utc>,
  /// The filename of the OTA zip.
  pub filename: String,
  /// The unique id of the update.
  pub id: String,
  /// The release channel the update was published on.
  #[serde(rename = "romtype")]
  pub rom_type: String,
  /// The size of the OTA zip in bytes.
  pub size: u64,
  /// The URL the OTA zip can be downloaded from.
  pub url: String,
  /// The LineageOS release of the update.
  pub version: LineageVersion
}

impl FullUpdateInfo {
  /// The Android platform version the update is based on, if known.
  pub fn android_version(&self) -> Option<AndroidVersion> {
    self.version.android_version()
  }

  /// Retrieves the nightly OTA updates currently available to a device.
  pub async fn fetch_nightlies(options: &Options, device: &str) -> Result<Vec<Self>, crate::Error> {
    let builds = v1::device_builds(options, device, "nightly", "1").await?;
    Ok(builds.into_iter().map(FullUpdateInfo::from).collect())
  }
}

impl From<v1::Build> for FullUpdateInfo {
  fn from(build: v1::Build) -> Self {
    FullUpdateInfo {
      datetime: build.datetime,
      filename: build.filename,
      id: build.id,
      rom_type: build.rom_type,
      size: build.size,
      url: build.url,
      version: build.version
    }
  }
}

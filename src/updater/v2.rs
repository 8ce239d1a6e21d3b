//! Version 2 of the updater API.

use chrono::{DateTime, Utc};

use crate::options::Options;
use crate::versions::LineageVersion;



/// An OEM with at least one supported device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Oem {
  /// The OEM's name.
  pub name: String,
  /// The supported devices from this OEM.
  pub devices: Vec<OemDevice>
}

/// A device as listed under its OEM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OemDevice {
  /// The device codename.
  pub name: String,
  /// The marketing model name.
  pub model: String
}

/// Information about a supported device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
  /// The device codename.
  pub name: String,
  /// The marketing model name.
  pub model: String,
  /// The OEM's name.
  pub oem: String,
  /// The URL of the device's information page.
  pub info_url: String,
  /// The LineageOS releases available to the device.
  pub versions: Vec<LineageVersion>,
  /// The repositories needed to build the device.
  pub dependencies: Vec<String>
}

/// One build and the files it published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
  /// The day of the build in ISO 8601 form.
  pub date: String,
  /// When the build was built.
  #[serde(with = "chrono::serde::ts_seconds")]
  pub datetime: DateTime<Utc>,
  /// The files belonging to the build, the OTA zip first.
  pub files: Vec<BuildFile>
}

impl Build {
  /// The build's OTA zip, if it published any files.
  #[inline]
  pub fn ota_zip(&self) -> Option<&BuildFile> {
    self.files.first()
  }
}

/// One downloadable file of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildFile {
  /// The filename of the file.
  pub filename: String,
  /// The path of the file on the download server.
  pub filepath: String,
  /// The SHA-1 hash of the file.
  pub sha1: String,
  /// The SHA-256 hash of the file.
  pub sha256: String,
  /// The size of the file in bytes.
  pub size: u64,
  /// The URL the file can be downloaded from.
  pub url: String
}

/// Retrieves every OEM with their supported devices.
pub async fn oems(options: &Options) -> Result<Vec<Oem>, crate::Error> {
  let url = format!("{}/v2/oems", options.api_url);
  crate::options::get_json(options, url).await
}

/// Retrieves the information page data of a device.
pub async fn device(options: &Options, device: &str) -> Result<Device, crate::Error> {
  let url = format!("{}/v2/devices/{device}", options.api_url);
  crate::options::get_json(options, url).await
}

/// Retrieves the builds available to a device, newest first.
pub async fn device_builds(options: &Options, device: &str) -> Result<Vec<Build>, crate::Error> {
  let url = format!("{}/v2/devices/{device}/builds", options.api_url);
  crate::options::get_json(options, url).await
}

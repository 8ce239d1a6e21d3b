//! Version 1 of the updater API.

use chrono::{DateTime, Utc};

use crate::options::Options;
use crate::updater::Response;
use crate::versions::LineageVersion;
use crate::Map;



/// Information about one OTA build of a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
  /// When the build was built.
  #[serde(with = "chrono::serde::ts_seconds")]
  pub datetime: DateTime<Utc>,
  /// The filename of the OTA zip.
  pub filename: String,
  /// The unique id of the build.
  pub id: String,
  /// The release channel the build was published on, such as `nightly`.
  #[serde(rename = "romtype")]
  pub rom_type: String,
  /// The size of the OTA zip in bytes.
  pub size: u64,
  /// The URL the OTA zip can be downloaded from.
  pub url: String,
  /// The LineageOS release the build belongs to.
  pub version: LineageVersion
}

/// Retrieves the builds available to a device on one release channel,
/// newer than the given incremental version (`"1"` returns all of them).
pub async fn device_builds(
  options: &Options,
  device: &str,
  rom_type: &str,
  incremental_version: &str
) -> Result<Vec<Build>, crate::Error> {
  let url = format!("{}/v1/{device}/{rom_type}/{incremental_version}", options.api_url);
  let response: Response<Vec<Build>> = crate::options::get_json(options, url).await?;
  Ok(response.response)
}

/// Retrieves the release channels available to a device.
pub async fn device_types(options: &Options, device: &str) -> Result<Vec<String>, crate::Error> {
  let url = format!("{}/v1/types/{device}", options.api_url);
  let response: Response<Vec<String>> = crate::options::get_json(options, url).await?;
  Ok(response.response)
}

/// Retrieves every maintained device, keyed by LineageOS release.
pub async fn devices(options: &Options) -> Result<Map<String, Vec<String>>, crate::Error> {
  let url = format!("{}/v1/devices", options.api_url);
  crate::options::get_json(options, url).await
}

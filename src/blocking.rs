//! Synchronous counterparts of the crate's retrieval functions, available
//! with the `blocking` feature.
//!
//! Requests are made on a shared blocking client; the `client` field of
//! [`Options`](crate::options::Options) only applies to the asynchronous
//! functions. Like `reqwest::blocking` itself, this module must not be used
//! from within an async runtime.

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;



static CLIENT: Lazy<reqwest::blocking::Client> = Lazy::new(reqwest::blocking::Client::new);

fn get_text(url: String) -> Result<String, crate::Error> {
  tracing::debug!("requesting text document from {}", url);
  let response = CLIENT.get(url).send()?.error_for_status()?;
  Ok(response.text()?)
}

fn get_json<T: DeserializeOwned>(url: String) -> Result<T, crate::Error> {
  tracing::debug!("requesting json document from {}", url);
  let response = CLIENT.get(url).send()?.error_for_status()?;
  Ok(serde_json::from_slice(&response.bytes()?)?)
}

fn get_yaml<T: DeserializeOwned>(url: String) -> Result<T, crate::Error> {
  tracing::debug!("requesting yaml document from {}", url);
  let response = CLIENT.get(url).send()?.error_for_status()?;
  Ok(serde_yaml::from_str(&response.text()?)?)
}

/// Synchronous access to the build scheduling catalog.
pub mod hudson {
  use crate::hudson::BuildTarget;
  use crate::options::Options;

  /// Retrieves and parses the complete build-targets catalog.
  pub fn fetch_catalog(options: &Options) -> Result<Vec<BuildTarget>, crate::Error> {
    let url = format!("{}/lineage-build-targets", options.hudson_url);
    crate::hudson::parse_catalog(&super::get_text(url)?)
  }

  /// Retrieves the catalog and returns its single entry for `device`.
  pub fn fetch_device(options: &Options, device: &str) -> Result<BuildTarget, crate::Error> {
    let targets = fetch_catalog(options)?;
    Ok(crate::hudson::lookup(&targets, device)?.clone())
  }
}

/// Synchronous access to the device wiki.
pub mod wiki {
  use crate::options::Options;
  use crate::wiki::DeviceData;

  /// Retrieves the wiki page data for the given device.
  pub fn fetch_device_data(options: &Options, device: &str) -> Result<DeviceData, crate::Error> {
    let url = format!("{}/_data/devices/{device}.yml", options.wiki_url);
    super::get_yaml(url)
  }
}

/// Synchronous access to the updater API.
pub mod updater {
  /// Version 1 of the updater API.
  pub mod v1 {
    use crate::options::Options;
    use crate::updater::Response;
    use crate::updater::v1::Build;
    use crate::Map;

    /// Retrieves the builds available to a device on one release channel,
    /// newer than the given incremental version (`"1"` returns all of them).
    pub fn device_builds(
      options: &Options,
      device: &str,
      rom_type: &str,
      incremental_version: &str
    ) -> Result<Vec<Build>, crate::Error> {
      let url = format!("{}/v1/{device}/{rom_type}/{incremental_version}", options.api_url);
      let response: Response<Vec<Build>> = crate::blocking::get_json(url)?;
      Ok(response.response)
    }

    /// Retrieves the release channels available to a device.
    pub fn device_types(options: &Options, device: &str) -> Result<Vec<String>, crate::Error> {
      let url = format!("{}/v1/types/{device}", options.api_url);
      let response: Response<Vec<String>> = crate::blocking::get_json(url)?;
      Ok(response.response)
    }

    /// Retrieves every maintained device, keyed by LineageOS release.
    pub fn devices(options: &Options) -> Result<Map<String, Vec<String>>, crate::Error> {
      let url = format!("{}/v1/devices", options.api_url);
      crate::blocking::get_json(url)
    }
  }

  /// Version 2 of the updater API.
  pub mod v2 {
    use crate::options::Options;
    use crate::updater::v2::{Build, Device, Oem};

    /// Retrieves every OEM with their supported devices.
    pub fn oems(options: &Options) -> Result<Vec<Oem>, crate::Error> {
      let url = format!("{}/v2/oems", options.api_url);
      crate::blocking::get_json(url)
    }

    /// Retrieves the information page data of a device.
    pub fn device(options: &Options, device: &str) -> Result<Device, crate::Error> {
      let url = format!("{}/v2/devices/{device}", options.api_url);
      crate::blocking::get_json(url)
    }

    /// Retrieves the builds available to a device, newest first.
    pub fn device_builds(options: &Options, device: &str) -> Result<Vec<Build>, crate::Error> {
      let url = format!("{}/v2/devices/{device}/builds", options.api_url);
      crate::blocking::get_json(url)
    }
  }
}

/// Synchronous access to a device's OTA updates.
pub mod ota {
  use crate::options::Options;
  use crate::ota::FullUpdateInfo;

  /// Retrieves the nightly OTA updates currently available to a device.
  pub fn fetch_nightlies(options: &Options, device: &str) -> Result<Vec<FullUpdateInfo>, crate::Error> {
    let builds = super::updater::v1::device_builds(options, device, "nightly", "1")?;
    Ok(builds.into_iter().map(FullUpdateInfo::from).collect())
  }
}

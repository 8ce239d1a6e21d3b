//! A facade bundling the per-device entry points of the wiki, the updater
//! API and the build scheduling catalog.

use crate::hudson::BuildTarget;
use crate::options::Options;
use crate::ota::FullUpdateInfo;
use crate::wiki::DeviceData;



/// A supported device, identified by its codename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Device {
  /// The device codename, such as `bacon`.
  pub codename: String
}

impl Device {
  pub fn new(codename: impl Into<String>) -> Self {
    Device { codename: codename.into() }
  }

  /// Retrieves the device's wiki page data.
  pub async fn data(&self, options: &Options) -> Result<DeviceData, crate::Error> {
    DeviceData::fetch(options, &self.codename).await
  }

  /// Retrieves the nightly OTA updates currently available to the device.
  pub async fn nightlies(&self, options: &Options) -> Result<Vec<FullUpdateInfo>, crate::Error> {
    FullUpdateInfo::fetch_nightlies(options, &self.codename).await
  }

  /// Retrieves the device's entry in the build-targets catalog.
  pub async fn build_target(&self, options: &Options) -> Result<BuildTarget, crate::Error> {
    BuildTarget::fetch_device(options, &self.codename).await
  }

  /// Retrieves the device's wiki data, nightlies and build target
  /// concurrently.
  pub async fn overview(&self, options: &Options) -> Result<DeviceOverview, crate::Error> {
    let (data, nightlies, build_target) = tokio::try_join!(
      self.data(options),
      self.nightlies(options),
      self.build_target(options)
    )?;

    Ok(DeviceOverview { data, nightlies, build_target })
  }
}

/// Everything the metadata endpoints know about one device.
#[derive(Debug, Clone)]
pub struct DeviceOverview {
  /// The device's wiki page data.
  pub data: DeviceData,
  /// The nightly OTA updates currently available.
  pub nightlies: Vec<FullUpdateInfo>,
  /// The device's build-targets catalog entry.
  pub build_target: BuildTarget
}

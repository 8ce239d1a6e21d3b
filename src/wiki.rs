//! Retrieval of per-device hardware and installation data from the wiki.
//!
//! Every supported device has a YAML page under `_data/devices/` in the wiki
//! repository. Pages covering several models of one device write hardware
//! properties either as a single value shared by all models or as a sequence
//! of per-model values; [`PerModel`] captures both shapes. Hardware a device
//! lacks is written as the literal string `None`.

use chrono::NaiveDate;
use serde::de::{Deserialize, Deserializer};

use crate::options::{Options, GITHUB_ORG_URL};
use crate::versions::LineageVersion;
use crate::Map;

use std::fmt;



/// The wiki's hardware and installation data for one device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceData {
  /// The CPU architecture.
  pub architecture: Architecture,
  /// The battery, when the wiki describes it.
  #[serde(default, deserialize_with = "per_model_or_none")]
  pub battery: Option<PerModel<Battery>>,
  /// Bluetooth support, when the wiki describes it.
  #[serde(default)]
  pub bluetooth: Option<Bluetooth>,
  /// The device codename, such as `bacon`.
  pub codename: String,
  /// The CPU name.
  pub cpu: String,
  /// The CPU core count or layout.
  pub cpu_cores: CpuCores,
  /// The CPU frequency.
  pub cpu_freq: String,
  /// The branch the device currently builds from.
  pub current_branch: LineageVersion,
  /// The physical dimensions.
  #[serde(default, deserialize_with = "per_model_or_none")]
  pub dimensions: Option<PerModel<Dimensions>>,
  /// The GPU name.
  pub gpu: String,
  /// The wiki's image of the device.
  pub image: String,
  /// How LineageOS is installed on the device.
  pub install_method: String,
  /// The kernel the device builds with.
  #[serde(default)]
  pub kernel: Option<Kernel>,
  /// The current maintainers, empty when unmaintained.
  pub maintainers: Vec<String>,
  /// The commercial name of the device.
  pub name: String,
  /// Supported mobile network generations.
  #[serde(default, deserialize_with = "per_model_or_none")]
  pub network: Option<PerModel<FeatureList>>,
  /// Peripherals the device supports.
  #[serde(default, deserialize_with = "per_model_or_none")]
  pub peripherals: Option<PerModel<FeatureList>>,
  /// When the device was released.
  pub release: PerModel<ReleaseDate>,
  /// The screen, when the wiki describes it.
  #[serde(default, deserialize_with = "per_model_or_none")]
  pub screen: Option<PerModel<Screen>>,
  /// The system-on-chip name or names.
  #[serde(default)]
  pub soc: Option<OneOrMany<String>>,
  /// The device tree repository's name within the distribution's GitHub
  /// organization.
  pub tree: String,
  /// The form factor, such as `phone`.
  #[serde(rename = "type")]
  pub device_type: String,
  /// The brand name of the vendor.
  pub vendor: String,
  /// The short name of the vendor, used in repository names.
  pub vendor_short: String,
  /// The LineageOS releases the device has builds for.
  pub versions: Vec<LineageVersion>,
  /// The supported Wi-Fi bands.
  pub wifi: String,

  #[serde(default)]
  pub before_install: Option<String>,
  #[serde(default)]
  pub before_lineage_install: Option<String>,
  #[serde(default)]
  pub before_recovery_install: Option<String>,
  #[serde(default)]
  pub cameras: Option<Vec<Camera>>,
  #[serde(default)]
  pub carrier: Option<String>,
  #[serde(default)]
  pub custom_recovery_codename: Option<String>,
  #[serde(default)]
  pub custom_recovery_link: Option<String>,
  #[serde(default)]
  pub custom_unlock_cmd: Option<String>,
  #[serde(default)]
  pub download_boot: Option<String>,
  #[serde(default)]
  pub format_on_upgrade: Option<bool>,
  #[serde(default)]
  pub has_recovery_partition: Option<bool>,
  #[serde(default)]
  pub is_ab_device: Option<bool>,
  #[serde(default)]
  pub is_unlockable: Option<bool>,
  #[serde(default)]
  pub models: Option<Vec<String>>,
  #[serde(default)]
  pub recovery_boot: Option<String>,
  #[serde(default)]
  pub required_bootloader: Option<Vec<String>>,
  #[serde(default)]
  pub sdcard: Option<Sdcard>,
  #[serde(default)]
  pub uses_twrp: Option<bool>
}

impl DeviceData {
  /// Retrieves the wiki page data for the given device.
  pub async fn fetch(options: &Options, device: &str) -> Result<Self, crate::Error> {
    let url = format!("{}/_data/devices/{device}.yml", options.wiki_url);
    crate::options::get_yaml(options, url).await
  }

  /// The URL of the device tree repository.
  pub fn tree_url(&self) -> String {
    format!("{GITHUB_ORG_URL}/{}", self.tree)
  }
}

impl fmt::Display for DeviceData {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut lines = Vec::new();
    lines.push(format!("Name: {}", self.name));
    lines.push(format!("Codename: {}", self.codename));
    lines.push(format!("Architecture: {}", self.architecture));
    lines.push(format!("Battery: {}", OrNone(&self.battery)));
    lines.push(format!("Bluetooth: {}", OrNone(&self.bluetooth)));
    lines.push(format!("CPU: {}", self.cpu));
    lines.push(format!("CPU cores: {}", self.cpu_cores));
    lines.push(format!("CPU frequency: {}", self.cpu_freq));
    lines.push(format!("Dimensions: {}", OrNone(&self.dimensions)));
    lines.push(format!("GPU: {}", self.gpu));
    lines.push(format!("Kernel: {}", OrNone(&self.kernel)));
    lines.push(match &self.maintainers[..] {
      [] => "Maintainers: None (unmaintained)".to_owned(),
      maintainers => format!("Maintainers: {}", maintainers.join(", "))
    });
    lines.push(format!("Peripherals: {}", OrNone(&self.peripherals)));
    lines.push(format!("Release: {}", self.release));
    lines.push(format!("Screen: {}", OrNone(&self.screen)));
    lines.push(format!("SoC: {}", OrNone(&self.soc)));
    lines.push(format!("Device tree repository: {}", self.tree_url()));
    lines.push(format!("Type: {}", self.device_type));
    lines.push(format!("Vendor: {}", self.vendor));
    lines.push(format!("Vendor (short): {}", self.vendor_short));
    lines.push(format!("Versions: {}", join_display(&self.versions)));

    if let Some(cameras) = &self.cameras {
      let cameras = cameras.iter()
        .map(|camera| format!("\n - {camera}"))
        .collect::<String>();
      lines.push(format!("Cameras: {cameras}"));
    };
    if let Some(carrier) = &self.carrier {
      lines.push(format!("Carrier: {carrier}"));
    };
    if let Some(codename) = &self.custom_recovery_codename {
      lines.push(format!("Custom recovery codename: {codename}"));
    };
    if let Some(link) = &self.custom_recovery_link {
      lines.push(format!("Custom recovery link: {link}"));
    };
    if let Some(cmd) = &self.custom_unlock_cmd {
      lines.push(format!("Custom unlock command: {cmd}"));
    };
    if let Some(download_boot) = &self.download_boot {
      lines.push(format!("Download boot: {download_boot}"));
    };
    if let Some(format_on_upgrade) = self.format_on_upgrade {
      lines.push(format!("Format on upgrade: {format_on_upgrade}"));
    };
    if let Some(has_recovery_partition) = self.has_recovery_partition {
      lines.push(format!("Has recovery partition: {has_recovery_partition}"));
    };
    if let Some(is_ab_device) = self.is_ab_device {
      lines.push(format!("Is A/B device: {is_ab_device}"));
    };
    if let Some(is_unlockable) = self.is_unlockable {
      lines.push(format!("Is unlockable: {is_unlockable}"));
    };
    if let Some(models) = &self.models {
      lines.push(format!("Models: {}", models.join(", ")));
    };
    if let Some(network) = &self.network {
      lines.push(format!("Network: {network}"));
    };
    if let Some(recovery_boot) = &self.recovery_boot {
      lines.push(format!("Recovery boot: {recovery_boot}"));
    };
    if let Some(required_bootloader) = &self.required_bootloader {
      lines.push(format!("Required bootloader: {}", required_bootloader.join(", ")));
    };
    if let Some(sdcard) = &self.sdcard {
      lines.push(format!("SD card: {sdcard}"));
    };
    if let Some(uses_twrp) = self.uses_twrp {
      lines.push(format!("Uses TWRP: {uses_twrp}"));
    };

    f.write_str(&lines.join("\n"))
  }
}

/// A hardware property that is either shared by every model of a device or
/// differs between models.
///
/// Pages covering several models write differing values as a sequence of
/// single-entry mappings keyed by model identifier; those flatten into
/// [`PerModel::ByModel`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PerModel<T> {
  /// One value covering every model of the device.
  Shared(T),
  /// Distinct values keyed by model identifier.
  ByModel(Map<String, T>)
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PerModel<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
      ByModelEntries(Vec<Map<String, T>>),
      ByModel(Map<String, T>),
      Shared(T)
    }

    Ok(match Repr::deserialize(deserializer)? {
      Repr::ByModelEntries(entries) => PerModel::ByModel(entries.into_iter().flatten().collect()),
      Repr::ByModel(values) => PerModel::ByModel(values),
      Repr::Shared(value) => PerModel::Shared(value)
    })
  }
}

impl<T: fmt::Display> fmt::Display for PerModel<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      PerModel::Shared(value) => value.fmt(f),
      PerModel::ByModel(values) => {
        for (model, value) in values {
          write!(f, "\n - {model}: {value}")?;
        };
        Ok(())
      }
    }
  }
}

/// The CPU architecture of a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Architecture {
  /// One architecture for both the kernel and the userspace.
  Uniform(String),
  /// Different kernel and userspace architectures.
  Mixed {
    cpu: String,
    userspace: String
  }
}

impl fmt::Display for Architecture {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Architecture::Uniform(architecture) => f.write_str(architecture),
      Architecture::Mixed { cpu, userspace } => write!(f, "cpu: {cpu}, userspace: {userspace}")
    }
  }
}

/// The CPU core count of a device, either a plain count or a description of
/// a heterogeneous layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CpuCores {
  Count(u32),
  Description(String)
}

impl fmt::Display for CpuCores {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      CpuCores::Count(count) => count.fmt(f),
      CpuCores::Description(description) => f.write_str(description)
    }
  }
}

/// One value or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
  One(T),
  Many(Vec<T>)
}

impl<T: fmt::Display> fmt::Display for OneOrMany<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      OneOrMany::One(value) => value.fmt(f),
      OneOrMany::Many(values) => f.write_str(&join_display(values))
    }
  }
}

/// A list of capability names, such as network generations or peripherals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureList(pub Vec<String>);

impl fmt::Display for FeatureList {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.0.join(", "))
  }
}

/// The day a device was released, accepted at year, month or day precision
/// with missing parts defaulting to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ReleaseDate(pub NaiveDate);

impl<'de> Deserialize<'de> for ReleaseDate {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    struct ReleaseDateVisitor;

    impl<'de> serde::de::Visitor<'de> for ReleaseDateVisitor {
      type Value = ReleaseDate;

      #[inline]
      fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a year number or a `YYYY`, `YYYY-MM` or `YYYY-MM-DD` string")
      }

      fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
      where E: serde::de::Error {
        parse_release_date(v).map(ReleaseDate)
          .ok_or_else(|| E::custom(format_args!("invalid release date {v:?}")))
      }

      fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
      where E: serde::de::Error {
        i32::try_from(v).ok()
          .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
          .map(ReleaseDate)
          .ok_or_else(|| E::custom(format_args!("invalid release year {v}")))
      }

      fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
      where E: serde::de::Error {
        i32::try_from(v).ok()
          .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
          .map(ReleaseDate)
          .ok_or_else(|| E::custom(format_args!("invalid release year {v}")))
      }
    }

    deserializer.deserialize_any(ReleaseDateVisitor)
  }
}

impl fmt::Display for ReleaseDate {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// The battery of a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battery {
  /// Capacity in mAh.
  pub capacity: u32,
  /// Whether the battery is user-removable.
  pub removable: bool,
  /// The cell technology, such as `Li-Po`.
  #[serde(default)]
  pub tech: Option<String>
}

impl fmt::Display for Battery {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "capacity: {}, removable: {}", self.capacity, self.removable)?;
    if let Some(tech) = &self.tech {
      write!(f, ", tech: {tech}")?;
    };
    Ok(())
  }
}

/// Bluetooth support of a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bluetooth {
  /// The Bluetooth specification version, such as `5.0`.
  pub spec: String,
  /// Additional supported profiles, such as `aptX`.
  #[serde(default)]
  pub profiles: Vec<String>
}

impl fmt::Display for Bluetooth {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "spec: {}", self.spec)?;
    if !self.profiles.is_empty() {
      write!(f, ", profiles: {}", self.profiles.join(", "))?;
    };
    Ok(())
  }
}

/// One camera of a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
  /// The sensor description, such as `13 MP`.
  pub info: String,
  /// The flash unit description.
  pub flash: String
}

impl fmt::Display for Camera {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "info: {}, flash: {}", self.info, self.flash)
  }
}

/// The physical dimensions of a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
  pub height: String,
  pub width: String,
  pub depth: String
}

impl fmt::Display for Dimensions {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "height: {}, width: {}, depth: {}", self.height, self.width, self.depth)
  }
}

/// The kernel a device builds with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kernel {
  /// The kernel repository's name within the distribution's GitHub
  /// organization.
  pub repo: String,
  /// The kernel release line, such as `4.14`.
  pub version: f32
}

impl Kernel {
  /// The URL of the kernel repository.
  pub fn repo_url(&self) -> String {
    format!("{GITHUB_ORG_URL}/{}", self.repo)
  }
}

impl fmt::Display for Kernel {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "repo: {}, version: {}", self.repo_url(), self.version)
  }
}

/// The screen of a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
  /// The diagonal size, such as `5.5 in`.
  pub size: String,
  /// The pixel density in dpi.
  pub density: u32,
  /// The resolution, such as `1080x1920`.
  pub resolution: String,
  /// The panel technology, such as `LCD`.
  pub technology: String
}

impl fmt::Display for Screen {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f, "size: {}, density: {}, resolution: {}, technology: {}",
      self.size, self.density, self.resolution, self.technology
    )
  }
}

/// The SD card slot of a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sdcard {
  /// The largest supported card size.
  pub size_max: String,
  /// Where the card is inserted.
  #[serde(default)]
  pub slot: Option<String>
}

impl fmt::Display for Sdcard {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "size_max: {}", self.size_max)?;
    if let Some(slot) = &self.slot {
      write!(f, ", slot: {slot}")?;
    };
    Ok(())
  }
}

struct OrNone<'d, T>(&'d Option<T>);

impl<T: fmt::Display> fmt::Display for OrNone<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.0 {
      Some(value) => value.fmt(f),
      None => f.write_str("None")
    }
  }
}

fn join_display<T: fmt::Display>(values: &[T]) -> String {
  values.iter().map(T::to_string).collect::<Vec<String>>().join(", ")
}

/// Deserializes an optional [`PerModel`] field, treating the literal string
/// `"None"` the wiki writes for absent hardware the same as a missing field.
fn per_model_or_none<'de, D, T>(deserializer: D) -> Result<Option<PerModel<T>>, D::Error>
where D: Deserializer<'de>, T: Deserialize<'de> {
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Repr<T> {
    Text(String),
    Value(PerModel<T>)
  }

  match Option::<Repr<T>>::deserialize(deserializer)? {
    None => Ok(None),
    Some(Repr::Text(text)) if text == "None" => Ok(None),
    Some(Repr::Text(text)) => Err(serde::de::Error::custom(format_args!("invalid hardware data {text:?}"))),
    Some(Repr::Value(value)) => Ok(Some(value))
  }
}

fn parse_release_date(text: &str) -> Option<NaiveDate> {
  if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
    return Some(date);
  };

  let mut parts = text.splitn(2, '-');
  let year = parts.next()?.parse().ok()?;
  let month = match parts.next() {
    Some(month) => month.parse().ok()?,
    None => 1
  };
  NaiveDate::from_ymd_opt(year, month, 1)
}

//! Constants relating LineageOS releases to the Android platform versions
//! they are based on.

use once_cell::sync::Lazy;
use serde::de::{Deserialize, Deserializer};

use crate::Map;

use std::fmt;



/// An Android platform version targeted by at least one LineageOS release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AndroidVersion {
  /// Android 6.0, Marshmallow.
  M,
  /// Android 7.x, Nougat.
  N,
  /// Android 8.x, Oreo.
  O,
  /// Android 9, Pie.
  P,
  /// Android 10, Quince Tart.
  Q,
  /// Android 11, Red Velvet Cake.
  R,
  /// Android 12, Snow Cone.
  S,
  /// Android 12L, Snow Cone v2.
  SV2,
  /// Android 13, Tiramisu.
  Tiramisu
}

impl AndroidVersion {
  /// The SDK level introduced by this platform version.
  pub fn api_level(self) -> u32 {
    match self {
      AndroidVersion::M => 23,
      AndroidVersion::N => 24,
      AndroidVersion::O => 26,
      AndroidVersion::P => 28,
      AndroidVersion::Q => 29,
      AndroidVersion::R => 30,
      AndroidVersion::S => 31,
      AndroidVersion::SV2 => 32,
      AndroidVersion::Tiramisu => 33
    }
  }

  /// The platform version's internal dessert name.
  pub fn version_name(self) -> &'static str {
    match self {
      AndroidVersion::M => "Marshmallow",
      AndroidVersion::N => "Nougat",
      AndroidVersion::O => "Oreo",
      AndroidVersion::P => "Pie",
      AndroidVersion::Q => "Quince Tart",
      AndroidVersion::R => "Red Velvet Cake",
      AndroidVersion::S => "Snow Cone",
      AndroidVersion::SV2 => "Snow Cone v2",
      AndroidVersion::Tiramisu => "Tiramisu"
    }
  }

  /// The latest LineageOS release based on this platform version, if any.
  pub fn lineageos_version(self) -> Option<LineageVersion> {
    ANDROID_TO_LINEAGEOS_VERSION.get(&self).map(|&version| LineageVersion::new(version))
  }
}

/// A LineageOS release number in its canonical dotted form, such as `18.1`.
///
/// The wiki and the updater API are inconsistent about whether release
/// numbers are strings or floating-point numbers, so this type deserializes
/// from either and normalizes numbers to one decimal place.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LineageVersion(String);

impl LineageVersion {
  pub fn new(version: impl Into<String>) -> Self {
    LineageVersion(version.into())
  }

  #[inline]
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// The Android platform version this release is based on, if known.
  pub fn android_version(&self) -> Option<AndroidVersion> {
    LINEAGEOS_TO_ANDROID_VERSION.get(self.0.as_str()).copied()
  }
}

impl fmt::Display for LineageVersion {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl<'de> Deserialize<'de> for LineageVersion {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    struct LineageVersionVisitor;

    impl<'de> serde::de::Visitor<'de> for LineageVersionVisitor {
      type Value = LineageVersion;

      #[inline]
      fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a version string or number")
      }

      #[inline]
      fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
      where E: serde::de::Error {
        Ok(LineageVersion(v.to_owned()))
      }

      #[inline]
      fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
      where E: serde::de::Error {
        Ok(LineageVersion(format!("{v:.1}")))
      }

      #[inline]
      fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
      where E: serde::de::Error {
        Ok(LineageVersion(format!("{v}.0")))
      }

      #[inline]
      fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
      where E: serde::de::Error {
        Ok(LineageVersion(format!("{v}.0")))
      }
    }

    deserializer.deserialize_any(LineageVersionVisitor)
  }
}

/// Maps each LineageOS release to the Android platform version it is based on.
pub static LINEAGEOS_TO_ANDROID_VERSION: Lazy<Map<&'static str, AndroidVersion>> = Lazy::new(|| {
  Map::from_iter([
    ("13.0", AndroidVersion::M),
    ("14.1", AndroidVersion::N),
    ("15.1", AndroidVersion::O),
    ("16.0", AndroidVersion::P),
    ("17.1", AndroidVersion::Q),
    ("18.0", AndroidVersion::R),
    ("18.1", AndroidVersion::R),
    ("19.0", AndroidVersion::S),
    ("19.1", AndroidVersion::SV2),
    ("20.0", AndroidVersion::Tiramisu)
  ])
});

/// Maps each Android platform version to the latest LineageOS release based
/// on it.
pub static ANDROID_TO_LINEAGEOS_VERSION: Lazy<Map<AndroidVersion, &'static str>> = Lazy::new(|| {
  LINEAGEOS_TO_ANDROID_VERSION.iter().map(|(&lineage, &android)| (android, lineage)).collect()
});

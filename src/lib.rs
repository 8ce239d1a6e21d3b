#![warn(missing_debug_implementations, unreachable_pub)]

//! A Rust library for retrieving LineageOS device, build and scheduling
//! metadata and exposing it as easy to understand Rust structures.

extern crate chrono;
extern crate once_cell;
#[macro_use]
extern crate serde;
extern crate serde_json;
extern crate serde_yaml;
extern crate sha2;
#[macro_use]
extern crate thiserror;
extern crate tokio;
extern crate tracing;
pub extern crate reqwest;

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod device;
pub mod hudson;
pub mod options;
pub mod ota;
pub mod updater;
pub mod versions;
pub mod wiki;

pub use crate::device::Device;
pub use crate::hudson::{BuildTarget, Period};
pub use crate::options::Options;
pub use crate::versions::{AndroidVersion, LineageVersion};
pub use crate::wiki::DeviceData;

pub(crate) type Map<K, V> = std::collections::BTreeMap<K, V>;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  HttpError(#[from] reqwest::Error),
  #[error(transparent)]
  JsonError(#[from] serde_json::Error),
  #[error(transparent)]
  YamlError(#[from] serde_yaml::Error),
  #[error("malformed build target line {0:?}")]
  /// Returned when a line of the build-targets catalog does not consist of
  /// a device, a build type, a branch name and a period code.
  MalformedBuildTarget(String),
  #[error("device {0:?} not found in build target catalog")]
  DeviceNotFound(String),
  #[error("device {0:?} listed more than once in build target catalog")]
  DuplicateDevice(String)
}

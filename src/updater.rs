//! Retrieval of OTA build information from the updater API.
//!
//! The API is served in two generations: [`v1`] is keyed by device and
//! release channel and powers the on-device updater, [`v2`] adds OEM and
//! per-device metadata and powers the download portal. Both are read-only
//! and unauthenticated.

pub mod v1;
pub mod v2;

/// The envelope wrapping v1 list responses.
#[derive(Debug, Deserialize)]
pub(crate) struct Response<T> {
  pub(crate) response: T
}

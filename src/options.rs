//! Options that specify which LineageOS infrastructure endpoints to talk to.
//!
//! Every retrieval function in this crate takes an [`Options`] reference.
//! The defaults point at the official LineageOS infrastructure: the raw
//! contents of the `hudson` and `lineage_wiki` GitHub repositories, and the
//! updater API served from `download.lineageos.org`.

#[doc(no_inline)] pub use reqwest::Client;

use serde::de::DeserializeOwned;



/// The GitHub organization hosting the distribution's repositories.
pub const GITHUB_ORG: &str = "LineageOS";
/// The URL of the GitHub organization hosting the distribution's repositories.
pub const GITHUB_ORG_URL: &str = "https://github.com/LineageOS";
/// The domain the distribution's own services are served from.
pub const DOMAIN: &str = "lineageos.org";

/// Options that specify which LineageOS infrastructure endpoints to talk to.
#[derive(Debug, Clone)]
pub struct Options {
  /// The base URL for raw files of the build scheduling (`hudson`) repository.
  pub hudson_url: String,
  /// The base URL for raw files of the device wiki (`lineage_wiki`) repository.
  pub wiki_url: String,
  /// The base URL of the updater API.
  pub api_url: String,
  /// The HTTP client used when making requests.
  pub client: Client
}

impl Options {
  /// Defaults to the `master` branch of <https://github.com/LineageOS/hudson>.
  pub const DEFAULT_HUDSON_URL: &'static str = "https://raw.githubusercontent.com/LineageOS/hudson/master";
  /// Defaults to the `main` branch of <https://github.com/LineageOS/lineage_wiki>.
  pub const DEFAULT_WIKI_URL: &'static str = "https://raw.githubusercontent.com/LineageOS/lineage_wiki/main";
  /// Defaults to <https://download.lineageos.org/api>.
  pub const DEFAULT_API_URL: &'static str = "https://download.lineageos.org/api";

  pub fn new() -> Self {
    Options {
      hudson_url: Self::DEFAULT_HUDSON_URL.to_owned(),
      wiki_url: Self::DEFAULT_WIKI_URL.to_owned(),
      api_url: Self::DEFAULT_API_URL.to_owned(),
      client: Client::new()
    }
  }

  pub fn hudson_url(self, hudson_url: impl Into<String>) -> Self {
    Options {
      hudson_url: hudson_url.into(),
      wiki_url: self.wiki_url,
      api_url: self.api_url,
      client: self.client
    }
  }

  pub fn wiki_url(self, wiki_url: impl Into<String>) -> Self {
    Options {
      hudson_url: self.hudson_url,
      wiki_url: wiki_url.into(),
      api_url: self.api_url,
      client: self.client
    }
  }

  pub fn api_url(self, api_url: impl Into<String>) -> Self {
    Options {
      hudson_url: self.hudson_url,
      wiki_url: self.wiki_url,
      api_url: api_url.into(),
      client: self.client
    }
  }

  pub fn client(self, client: Client) -> Self {
    Options {
      hudson_url: self.hudson_url,
      wiki_url: self.wiki_url,
      api_url: self.api_url,
      client
    }
  }
}

impl Default for Options {
  #[inline]
  fn default() -> Self {
    Options::new()
  }
}

pub(crate) async fn get_text(options: &Options, url: String) -> Result<String, crate::Error> {
  tracing::debug!("requesting text document from {}", url);
  let response = options.client.get(url).send().await?.error_for_status()?;
  Ok(response.text().await?)
}

pub(crate) async fn get_json<T: DeserializeOwned>(options: &Options, url: String) -> Result<T, crate::Error> {
  tracing::debug!("requesting json document from {}", url);
  let response = options.client.get(url).send().await?.error_for_status()?;
  Ok(serde_json::from_slice(&response.bytes().await?)?)
}

pub(crate) async fn get_yaml<T: DeserializeOwned>(options: &Options, url: String) -> Result<T, crate::Error> {
  tracing::debug!("requesting yaml document from {}", url);
  let response = options.client.get(url).send().await?.error_for_status()?;
  Ok(serde_yaml::from_str(&response.text().await?)?)
}

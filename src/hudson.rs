//! Retrieval of the distribution's build scheduling metadata: which devices
//! get built, how, from which branch, and on what cadence.
//!
//! The catalog is a plain-text file in the build scheduling repository with
//! one build target per line. Weekly and monthly targets build on a fixed
//! weekday or day of the month derived deterministically from the device
//! name, so the date of a target's next build can be predicted offline with
//! [`BuildTarget::next_build_date`].

use chrono::{Datelike, Days, NaiveDate, Weekday};
use sha2::{Digest, Sha256};

use crate::options::Options;

use std::fmt;
use std::str::FromStr;



#[derive(Debug, Error, Clone, Copy)]
#[error("expected one of \"N\", \"W\", or \"M\"")]
pub struct ParsePeriodError;

/// How often a build target is scheduled to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
  /// `N`, builds every day.
  #[serde(rename = "N")]
  Nightly,
  /// `W`, builds once a week on a device-specific weekday.
  #[serde(rename = "W")]
  Weekly,
  /// `M`, builds once a month on a device-specific day of the month.
  #[serde(rename = "M")]
  Monthly
}

impl Period {
  pub fn code(self) -> &'static str {
    match self {
      Period::Nightly => "N",
      Period::Weekly => "W",
      Period::Monthly => "M"
    }
  }
}

impl FromStr for Period {
  type Err = ParsePeriodError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "N" => Ok(Period::Nightly),
      "W" => Ok(Period::Weekly),
      "M" => Ok(Period::Monthly),
      _ => Err(ParsePeriodError)
    }
  }
}

impl fmt::Display for Period {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.code())
  }
}

/// One entry of the build-targets catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildTarget {
  /// The device codename, unique within one catalog snapshot.
  pub device: String,
  /// The Android build variant, typically `userdebug`.
  pub build_type: String,
  /// The branch the device builds from, such as `lineage-20.0`.
  pub branch_name: String,
  /// The cadence the device builds on.
  pub period: Period
}

impl BuildTarget {
  /// Retrieves and parses the complete build-targets catalog.
  pub async fn fetch_catalog(options: &Options) -> Result<Vec<Self>, crate::Error> {
    let url = format!("{}/lineage-build-targets", options.hudson_url);
    let text = crate::options::get_text(options, url).await?;
    parse_catalog(&text)
  }

  /// Retrieves the catalog and returns its single entry for `device`.
  pub async fn fetch_device(options: &Options, device: &str) -> Result<Self, crate::Error> {
    let targets = Self::fetch_catalog(options).await?;
    Ok(lookup(&targets, device)?.clone())
  }

  fn from_line(line: &str) -> Result<Self, crate::Error> {
    let malformed = || crate::Error::MalformedBuildTarget(line.to_owned());
    let mut fields = line.split_whitespace();
    let device = fields.next().ok_or_else(malformed)?;
    let build_type = fields.next().ok_or_else(malformed)?;
    let branch_name = fields.next().ok_or_else(malformed)?;
    let period = fields.next().ok_or_else(malformed)?;
    if fields.next().is_some() {
      return Err(malformed());
    };

    Ok(BuildTarget {
      device: device.to_owned(),
      build_type: build_type.to_owned(),
      branch_name: branch_name.to_owned(),
      period: Period::from_str(period).map_err(|_| malformed())?
    })
  }

  /// Predicts the date of this target's next build, strictly after `today`.
  ///
  /// The result is a pure function of the device name, the period and
  /// `today`: nightly targets build every day, weekly targets on the
  /// weekday given by [`scheduled_weekday`][Self::scheduled_weekday], and
  /// monthly targets on the day of the month given by
  /// [`scheduled_day_of_month`][Self::scheduled_day_of_month].
  pub fn next_build_date(&self, today: NaiveDate) -> NaiveDate {
    let delta = match self.period {
      Period::Nightly => 1,
      Period::Weekly => {
        let mut delta = self.weekly_target() as i64 - today.weekday().number_from_monday() as i64;
        if delta <= 0 { delta += 7 };
        delta
      },
      Period::Monthly => {
        let mut delta = self.monthly_target() as i64 - today.day() as i64;
        if delta <= 0 { delta += MONTH_TO_DAYS[today.month0() as usize] as i64 };
        delta
      }
    };

    today + Days::new(delta as u64)
  }

  /// The weekday this target's builds land on, if it builds weekly.
  pub fn scheduled_weekday(&self) -> Option<Weekday> {
    match self.period {
      Period::Weekly => Some(ISO_WEEKDAYS[(self.weekly_target() - 1) as usize]),
      Period::Nightly | Period::Monthly => None
    }
  }

  /// The day of the month this target's builds land on, if it builds monthly.
  /// Always within `1..=28` so that the day exists in every month.
  pub fn scheduled_day_of_month(&self) -> Option<u32> {
    match self.period {
      Period::Monthly => Some(self.monthly_target()),
      Period::Nightly | Period::Weekly => None
    }
  }

  /// ISO weekday number in `1..=7`, Monday first.
  fn weekly_target(&self) -> u32 {
    (1.0 + 7.0 * device_fraction(&self.device)) as u32
  }

  /// Day of the month in `1..=28`.
  fn monthly_target(&self) -> u32 {
    (1.0 + 28.0 * device_fraction(&self.device)) as u32
  }
}

impl fmt::Display for BuildTarget {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{} {} {} {}", self.device, self.build_type, self.branch_name, self.period)
  }
}

/// Parses the plain-text build-targets catalog.
///
/// Each surviving line must consist of exactly four whitespace-separated
/// fields: device, build type, branch name and period code. Blank lines and
/// lines whose first non-blank character is `#` are skipped.
pub fn parse_catalog(text: &str) -> Result<Vec<BuildTarget>, crate::Error> {
  text.lines()
    .map(str::trim)
    .filter(|line| !line.is_empty() && !line.starts_with('#'))
    .map(BuildTarget::from_line)
    .collect()
}

/// Returns the catalog entry for `device`.
///
/// Fails with [`DeviceNotFound`][crate::Error::DeviceNotFound] when no entry
/// matches and with [`DuplicateDevice`][crate::Error::DuplicateDevice] when
/// more than one does.
pub fn lookup<'t>(targets: &'t [BuildTarget], device: &str) -> Result<&'t BuildTarget, crate::Error> {
  let mut matches = targets.iter().filter(|target| target.device == device);
  match (matches.next(), matches.next()) {
    (Some(target), None) => Ok(target),
    (Some(_), Some(_)) => Err(crate::Error::DuplicateDevice(device.to_owned())),
    (None, _) => Err(crate::Error::DeviceNotFound(device.to_owned()))
  }
}

const ISO_WEEKDAYS: [Weekday; 7] = [
  Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
  Weekday::Fri, Weekday::Sat, Weekday::Sun
];

/// Days in each month of the scheduling calendar.
/// February is always counted as 28 days, leap years included.
const MONTH_TO_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Maps a device name to a fraction in `[0, 1)`, identical across runs,
/// platforms and releases.
fn device_fraction(device: &str) -> f64 {
  let digest = Sha256::digest(device.as_bytes());
  let lead = digest.iter().take(8).fold(0u64, |n, &byte| (n << 8) | u64::from(byte));
  (lead >> 11) as f64 / (1u64 << 53) as f64
}

#![cfg(test)]

use chrono::NaiveDate;
use lineage_data::versions::AndroidVersion;
use lineage_data::wiki::{
  Architecture, Battery, CpuCores, DeviceData,
  FeatureList, OneOrMany, PerModel, ReleaseDate
};

use std::collections::BTreeMap;

macro_rules! sample {
  ($file:expr) => (serde_yaml::from_str(include_str!($file)).unwrap());
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn parses_a_single_model_page() {
  let bacon: DeviceData = sample!("samples/bacon.yml");

  assert_eq!(bacon.codename, "bacon");
  assert_eq!(bacon.name, "One");
  assert_eq!(bacon.vendor, "OnePlus");
  assert_eq!(bacon.device_type, "phone");
  assert_eq!(bacon.architecture, Architecture::Uniform("arm".to_owned()));
  assert_eq!(bacon.cpu_cores, CpuCores::Count(4));
  assert_eq!(bacon.battery, Some(PerModel::Shared(Battery {
    capacity: 3100,
    removable: false,
    tech: Some("Li-Po".to_owned())
  })));
  assert_eq!(bacon.release, PerModel::Shared(ReleaseDate(date(2014, 4, 25))));
  assert_eq!(bacon.network, Some(PerModel::Shared(FeatureList(vec![
    "2G GSM".to_owned(), "3G UMTS".to_owned(), "4G LTE".to_owned()
  ]))));
  assert_eq!(bacon.soc, Some(OneOrMany::One("Qualcomm MSM8974AC Snapdragon 801".to_owned())));

  assert_eq!(bacon.current_branch.as_str(), "18.1");
  assert_eq!(bacon.versions.len(), 8);
  assert_eq!(bacon.versions[0].as_str(), "11.0");
  assert_eq!(bacon.versions[7].as_str(), "18.1");
  assert_eq!(bacon.versions[7].android_version(), Some(AndroidVersion::R));

  assert_eq!(bacon.is_unlockable, Some(true));
  assert_eq!(bacon.models, Some(vec!["A0001".to_owned()]));
  assert_eq!(bacon.sdcard, None);
  // the camera flash field is free text, not the absent-hardware marker
  assert_eq!(bacon.cameras.as_ref().unwrap()[1].flash, "None");

  assert_eq!(bacon.tree_url(), "https://github.com/LineageOS/android_device_oneplus_bacon");
  let kernel = bacon.kernel.as_ref().unwrap();
  assert_eq!(kernel.repo_url(), "https://github.com/LineageOS/android_kernel_oneplus_msm8974");
}



#[test]
fn parses_a_multi_model_page() {
  let d2: DeviceData = sample!("samples/d2.yml");

  assert_eq!(d2.battery, Some(PerModel::ByModel(BTreeMap::from([
    ("d2att".to_owned(), Battery { capacity: 2100, removable: true, tech: None }),
    ("d2spr".to_owned(), Battery { capacity: 2100, removable: true, tech: Some("Li-Ion".to_owned()) })
  ]))));
  assert_eq!(d2.release, PerModel::ByModel(BTreeMap::from([
    ("d2att".to_owned(), ReleaseDate(date(2012, 6, 15))),
    ("d2spr".to_owned(), ReleaseDate(date(2012, 1, 1)))
  ])));
  assert_eq!(d2.network, Some(PerModel::ByModel(BTreeMap::from([
    ("d2att".to_owned(), FeatureList(vec!["2G GSM".to_owned(), "3G UMTS".to_owned(), "4G LTE".to_owned()])),
    ("d2spr".to_owned(), FeatureList(vec!["2G CDMA".to_owned(), "3G CDMA2000".to_owned(), "4G LTE".to_owned()]))
  ]))));
  assert!(matches!(&d2.dimensions, Some(PerModel::ByModel(values)) if values.len() == 2));

  // `peripherals: None` marks hardware the device does not have
  assert_eq!(d2.peripherals, None);
  assert!(d2.maintainers.is_empty());
  assert_eq!(d2.soc, Some(OneOrMany::Many(vec!["Qualcomm MSM8960 Snapdragon S4 Plus".to_owned()])));
}



#[test]
fn formats_a_single_model_page() {
  let bacon: DeviceData = sample!("samples/bacon.yml");
  let text = bacon.to_string();

  assert!(text.starts_with(concat!(
    "Name: One\n",
    "Codename: bacon\n",
    "Architecture: arm\n",
    "Battery: capacity: 3100, removable: false, tech: Li-Po\n"
  )));
  assert!(text.contains("\nMaintainers: dianlujitao\n"));
  assert!(text.contains("\nVersions: 11.0, 12.1, 13.0, 14.1, 15.1, 16.0, 17.1, 18.1"));
  assert!(text.contains("\nCameras: \n - info: 13 MP, flash: Dual LED\n - info: 5 MP, flash: None"));

  // wiki-internal fields never show up in the overview
  assert!(!text.contains("bacon.jpg"));
  assert!(!text.contains("Wi-Fi 802.11"));
  assert!(!text.contains("Install method"));
}



#[test]
fn formats_a_multi_model_page() {
  let d2: DeviceData = sample!("samples/d2.yml");

  assert_eq!(d2.to_string(), concat!(
    "Name: Galaxy S III (AT&T, Sprint)\n",
    "Codename: d2\n",
    "Architecture: arm\n",
    "Battery: \n",
    " - d2att: capacity: 2100, removable: true\n",
    " - d2spr: capacity: 2100, removable: true, tech: Li-Ion\n",
    "Bluetooth: spec: 4.0, profiles: A2DP\n",
    "CPU: Krait\n",
    "CPU cores: 2\n",
    "CPU frequency: 1.5 GHz\n",
    "Dimensions: \n",
    " - d2att: height: 136.6 mm (5.38 in), width: 70.6 mm (2.78 in), depth: 8.6 mm (0.34 in)\n",
    " - d2spr: height: 137.1 mm (5.4 in), width: 69.6 mm (2.74 in), depth: 9.1 mm (0.36 in)\n",
    "GPU: Adreno 225\n",
    "Kernel: repo: https://github.com/LineageOS/android_kernel_samsung_d2, version: 3.4\n",
    "Maintainers: None (unmaintained)\n",
    "Peripherals: None\n",
    "Release: \n",
    " - d2att: 2012-06-15\n",
    " - d2spr: 2012-01-01\n",
    "Screen: size: 4.8 in (12.19 cm), density: 306, resolution: 720x1280, technology: Super AMOLED\n",
    "SoC: Qualcomm MSM8960 Snapdragon S4 Plus\n",
    "Device tree repository: https://github.com/LineageOS/android_device_samsung_d2-common\n",
    "Type: phone\n",
    "Vendor: Samsung\n",
    "Vendor (short): samsung\n",
    "Versions: 14.1, 16.0\n",
    "Network: \n",
    " - d2att: 2G GSM, 3G UMTS, 4G LTE\n",
    " - d2spr: 2G CDMA, 3G CDMA2000, 4G LTE"
  ));
}



#[test]
fn architecture_forms() {
  let uniform: Architecture = serde_yaml::from_str("arm64").unwrap();
  assert_eq!(uniform, Architecture::Uniform("arm64".to_owned()));

  let mixed: Architecture = serde_yaml::from_str("{cpu: arm64, userspace: arm}").unwrap();
  assert_eq!(mixed, Architecture::Mixed {
    cpu: "arm64".to_owned(),
    userspace: "arm".to_owned()
  });
}



#[test]
fn release_dates_accept_year_month_and_day_precision() {
  let day: ReleaseDate = serde_yaml::from_str("2016-09-07").unwrap();
  assert_eq!(day, ReleaseDate(date(2016, 9, 7)));

  let month: ReleaseDate = serde_yaml::from_str("2016-09").unwrap();
  assert_eq!(month, ReleaseDate(date(2016, 9, 1)));

  let year: ReleaseDate = serde_yaml::from_str("2016").unwrap();
  assert_eq!(year, ReleaseDate(date(2016, 1, 1)));

  assert!(serde_yaml::from_str::<ReleaseDate>("soon").is_err());
  assert!(serde_yaml::from_str::<ReleaseDate>("2016-13").is_err());
}



#[test]
fn per_model_accepts_all_three_wire_shapes() {
  let shared: PerModel<FeatureList> = serde_yaml::from_str("[2G GSM, 3G UMTS]").unwrap();
  assert_eq!(shared, PerModel::Shared(FeatureList(vec!["2G GSM".to_owned(), "3G UMTS".to_owned()])));

  let entries: PerModel<FeatureList> = serde_yaml::from_str("[{a: [2G GSM]}, {b: [3G UMTS]}]").unwrap();
  let map: PerModel<FeatureList> = serde_yaml::from_str("{a: [2G GSM], b: [3G UMTS]}").unwrap();
  assert_eq!(entries, map);
  assert!(matches!(entries, PerModel::ByModel(values) if values.len() == 2));
}



#[test]
fn per_model_serializes_as_a_plain_map() {
  let by_model = PerModel::ByModel(BTreeMap::from([
    ("a".to_owned(), FeatureList(vec!["2G GSM".to_owned()])),
    ("b".to_owned(), FeatureList(vec!["3G UMTS".to_owned()]))
  ]));

  let yaml = serde_yaml::to_string(&by_model).unwrap();
  assert_eq!(serde_yaml::from_str::<PerModel<FeatureList>>(&yaml).unwrap(), by_model);
}

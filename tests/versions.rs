#![cfg(test)]

use lineage_data::versions::{
  AndroidVersion, LineageVersion,
  ANDROID_TO_LINEAGEOS_VERSION, LINEAGEOS_TO_ANDROID_VERSION
};

const ANDROID_VERSIONS: [AndroidVersion; 9] = [
  AndroidVersion::M, AndroidVersion::N, AndroidVersion::O,
  AndroidVersion::P, AndroidVersion::Q, AndroidVersion::R,
  AndroidVersion::S, AndroidVersion::SV2, AndroidVersion::Tiramisu
];

#[test]
fn api_levels_are_strictly_increasing() {
  for pair in ANDROID_VERSIONS.windows(2) {
    if let [previous, next] = pair {
      assert!(previous.api_level() < next.api_level());
    };
  };
}



#[test]
fn version_names() {
  assert_eq!(AndroidVersion::M.version_name(), "Marshmallow");
  assert_eq!(AndroidVersion::Q.version_name(), "Quince Tart");
  assert_eq!(AndroidVersion::SV2.version_name(), "Snow Cone v2");
  assert_eq!(AndroidVersion::Tiramisu.version_name(), "Tiramisu");
}



#[test]
fn release_numbers_map_to_android_versions() {
  assert_eq!(LineageVersion::new("13.0").android_version(), Some(AndroidVersion::M));
  assert_eq!(LineageVersion::new("18.1").android_version(), Some(AndroidVersion::R));
  assert_eq!(LineageVersion::new("19.1").android_version(), Some(AndroidVersion::SV2));
  assert_eq!(LineageVersion::new("12.1").android_version(), None);

  // both 18.0 and 18.1 are based on R, the reverse map keeps the newer one
  assert_eq!(AndroidVersion::R.lineageos_version(), Some(LineageVersion::new("18.1")));
  assert_eq!(AndroidVersion::Tiramisu.lineageos_version(), Some(LineageVersion::new("20.0")));
  assert_eq!(LINEAGEOS_TO_ANDROID_VERSION.len(), 10);
  assert_eq!(ANDROID_TO_LINEAGEOS_VERSION.len(), 9);
}



#[test]
fn version_numbers_normalize_to_one_decimal() {
  assert_eq!(serde_json::from_str::<LineageVersion>("\"18.1\"").unwrap(), LineageVersion::new("18.1"));
  assert_eq!(serde_json::from_str::<LineageVersion>("18.1").unwrap(), LineageVersion::new("18.1"));
  assert_eq!(serde_json::from_str::<LineageVersion>("16.0").unwrap(), LineageVersion::new("16.0"));
  assert_eq!(serde_json::from_str::<LineageVersion>("15").unwrap(), LineageVersion::new("15.0"));
}

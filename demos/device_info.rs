use lineage_data::{Device, Options};

#[tokio::main]
async fn main() {
  let device = std::env::args().nth(1)
    .unwrap_or_else(|| "bacon".to_owned());

  // Fetches the wiki page, the available nightlies and the build target at once
  let overview = Device::new(device).overview(&Options::default())
    .await.expect("failed to get device overview");

  println!("{}", overview.data);
  println!();
  println!("Build target: {}", overview.build_target);
  if let Some(update) = overview.nightlies.last() {
    println!("Latest nightly: {} ({} bytes)", update.filename, update.size);
  };

  // Write the overview to a text file
  let path = format!("{}.txt", overview.data.codename);
  tokio::fs::write(path, format!("{overview:#?}"))
    .await.expect("failed to save device overview");
}

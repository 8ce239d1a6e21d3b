use chrono::Utc;
use lineage_data::hudson::{BuildTarget, Period};
use lineage_data::Options;

#[tokio::main]
async fn main() {
  // Fetches the catalog of build targets from the hudson repository
  let options = Options::default();
  let targets = BuildTarget::fetch_catalog(&options)
    .await.expect("failed to get build targets");

  // Prints the predicted next build date of every weekly and monthly target
  let today = Utc::now().date_naive();
  for target in &targets {
    if target.period != Period::Nightly {
      println!("{}: next build on {}", target.device, target.next_build_date(today));
    };
  };
}

// Example: Full-Batch Transfer Demo
//
// Runs the full-batch scenario once with the harness configuration and
// prints the report as JSON.
//
// Run this example with:
//   cargo run --example full_batch_demo
//
// With a YAML config and environment overrides:
//   ERC1155E_BATCH_SIZE=16 cargo run --example full_batch_demo -- harness.yaml
//
// To reproduce the generated accounts:
//   ERC1155E_TEST_SEED=0x1234567890abcdef cargo run --example full_batch_demo

use erc1155e_testing_framework::prelude::*;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let config = HarnessConfig::load(path.as_deref()).context("Failed to load harness config")?;

    println!("========================================");
    println!("ERC1155e Full-Batch Transfer Demo");
    println!("========================================\n");
    println!("Batch size:  {}", config.batch_size);
    println!("Memo:        {:?}", config.memo);
    println!("Id creation: {}\n", config.id_creation);

    let network = TestNetworkBuilder::from_config(&config).build().await?;
    let mut scenario = FullBatchScenario::new(config);

    match scenario.run(&network).await {
        Ok(report) => {
            println!("{}", report.to_json()?);
            println!("\nScenario completed successfully!");
            Ok(())
        }
        Err(err) => {
            for line in scenario.get_log() {
                println!("{}", line);
            }
            network.env().on_failure();
            Err(err)
        }
    }
}

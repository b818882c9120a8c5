//! Full-batch scenario execution engine
//!
//! Runs the three harness steps against the latest deployment of a
//! `TestNetwork`: build fixtures, invoke `safeFullBatchTransferFrom`, then
//! check the emitted `TransferFullBatch` event.
//!
//! # Example
//!
//! ```rust,ignore
//! use erc1155e_testing_framework::scenarios::FullBatchScenario;
//!
//! let network = TestNetworkBuilder::new().build().await?;
//! let report = FullBatchScenario::new(HarnessConfig::default())
//!     .run(&network)
//!     .await?;
//!
//! assert_eq!(report.events_emitted, 1);
//! ```

use crate::assertions::{assert_event_count, assert_event_emitted, assert_success};
use crate::config::HarnessConfig;
use crate::fixtures::FixtureBuilder;
use crate::invoker::BatchInvoker;
use crate::network::TestNetwork;
use anyhow::{Context, Result};
use erc1155e_common::{EventKind, Hash, Memo, TokenId};
use serde::{Deserialize, Serialize};

/// Failure message of the memo check
pub const MEMO_ASSERTION_MESSAGE: &str =
    "TransferFullBatch should be emitted with corrected parameters";

/// Scenario that moves one batch from account 0 to account 1
pub struct FullBatchScenario {
    /// Harness settings for fixtures and invocation
    config: HarnessConfig,

    /// Execution log
    log: Vec<String>,

    /// Current step number (1-indexed)
    current_step: usize,
}

impl FullBatchScenario {
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            log: Vec::new(),
            current_step: 0,
        }
    }

    pub fn name(&self) -> String {
        format!("full batch transfer (N={})", self.config.batch_size)
    }

    /// Execute the scenario
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The harness config is invalid
    /// - Nothing is deployed on the network
    /// - Token id creation fails
    /// - The transfer reverts or times out
    /// - The event check fails
    pub async fn run(&mut self, network: &TestNetwork) -> Result<ScenarioReport> {
        self.log.clear();
        self.current_step = 0;
        self.log(format!("Starting scenario: {}", self.name()));
        self.config.validate()?;

        let contract = network.deployed()?;
        let source = network.account(0)?;
        let destination = network.account(1)?;
        let memo = self.config.memo()?;

        self.step("Build fixtures");
        let fixture = FixtureBuilder::from_config(&self.config, source, destination)?
            .build(&*contract)
            .await
            .with_context(|| format!("Failed at step {} (build fixtures)", self.current_step))?;
        self.log(format!(
            "Created {} token id(s) on {}",
            fixture.ids.len(),
            contract.address()
        ));

        self.step("Invoke safeFullBatchTransferFrom");
        let receipt = BatchInvoker::new(&*contract)
            .with_timeout(self.config.call_timeout())
            .invoke(&source, &fixture)
            .await
            .with_context(|| format!("Failed at step {} (invoke)", self.current_step))?;
        self.log(format!(
            "Transaction {} mined in block {}",
            receipt.transaction_hash, receipt.block_number
        ));

        self.step("Assert TransferFullBatch");
        assert_success(&receipt)?;
        assert_event_count(&receipt, EventKind::TransferFullBatch, 1)?;
        assert_event_emitted(
            &receipt,
            EventKind::TransferFullBatch,
            |event| event.memo() == Some(&memo),
            MEMO_ASSERTION_MESSAGE,
        )?;
        self.log(format!("Memo {} matched", memo));

        self.log("=== Scenario completed successfully ===".to_string());

        Ok(ScenarioReport {
            scenario_name: self.name(),
            batch_size: fixture.len(),
            token_ids: fixture.ids,
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            events_emitted: receipt.logs.len(),
            memo,
            log: self.log.clone(),
        })
    }

    /// Get execution log
    pub fn get_log(&self) -> &[String] {
        &self.log
    }

    fn step(&mut self, title: &str) {
        self.current_step += 1;
        self.log(format!("--- Step {}: {} ---", self.current_step, title));
    }

    fn log(&mut self, message: String) {
        log::debug!("{}", message);
        self.log.push(message);
    }
}

/// Outcome of one scenario run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario_name: String,
    pub batch_size: usize,
    pub token_ids: Vec<TokenId>,
    pub transaction_hash: Hash,
    pub block_number: u64,
    /// Events in the transfer receipt
    pub events_emitted: usize,
    pub memo: Memo,
    pub log: Vec<String>,
}

impl ScenarioReport {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize scenario report")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::network::TestNetworkBuilder;
    use erc1155e_common::Amount;

    #[tokio::test]
    async fn test_default_scenario_succeeds() {
        let network = TestNetworkBuilder::new().with_seed(11).build().await.unwrap();
        let mut scenario = FullBatchScenario::new(HarnessConfig::default());

        let report = scenario.run(&network).await.unwrap();
        assert_eq!(report.batch_size, 1);
        assert_eq!(report.token_ids.len(), 1);
        assert_eq!(report.events_emitted, 1);
        assert_eq!(report.memo.to_hex(), "0x74657374");
        assert!(scenario.get_log().iter().any(|l| l.contains("Step 3")));
    }

    #[tokio::test]
    async fn test_fungible_scenario_moves_value() {
        let network = TestNetworkBuilder::new().with_seed(4).build().await.unwrap();
        let config = HarnessConfig {
            batch_size: 3,
            is_fungible: true,
            transfer_value: 5,
            ..Default::default()
        };

        let report = FullBatchScenario::new(config).run(&network).await.unwrap();
        let contract = network.deployed().unwrap();
        let source = network.account(0).unwrap();
        let destination = network.account(1).unwrap();
        for id in &report.token_ids {
            assert_eq!(
                contract.balance_of(&destination, id).await.unwrap(),
                Amount::from(5u64)
            );
            assert!(contract.balance_of(&source, id).await.unwrap().is_zero());
        }
        // Three creates, three mints, one transfer
        assert_eq!(report.block_number, 7);
    }

    #[tokio::test]
    async fn test_value_on_non_fungible_is_rejected() {
        let network = TestNetworkBuilder::new().with_seed(4).build().await.unwrap();
        let config = HarnessConfig {
            transfer_value: 5,
            ..Default::default()
        };

        let err = FullBatchScenario::new(config).run(&network).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::ValueForNonFungible(5))
        ));
    }

    #[tokio::test]
    async fn test_scenario_without_deployment_fails() {
        let network = TestNetworkBuilder::new()
            .with_seed(11)
            .with_auto_deploy(false)
            .build()
            .await
            .unwrap();

        let result = FullBatchScenario::new(HarnessConfig::default())
            .run(&network)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_report_serializes() {
        let network = TestNetworkBuilder::new().with_seed(2).build().await.unwrap();
        let report = FullBatchScenario::new(HarnessConfig::default())
            .run(&network)
            .await
            .unwrap();

        let json = report.to_json().unwrap();
        let back: ScenarioReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        assert!(json.contains("\"memo\": \"0x74657374\""));
    }
}

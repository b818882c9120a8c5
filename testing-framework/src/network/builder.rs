//! TestNetworkBuilder - Fluent API for configuring TestNetwork instances

use super::TestNetwork;
use crate::config::{HarnessConfig, DEFAULT_ACCOUNT_COUNT};
use crate::orchestrator::DeterministicTestEnv;
use anyhow::{ensure, Result};
use std::collections::HashSet;

/// Builder for TestNetwork instances with fluent API
///
/// # Example
///
/// ```rust,ignore
/// use erc1155e_testing_framework::network::TestNetworkBuilder;
///
/// let network = TestNetworkBuilder::new()
///     .with_seed(42)
///     .with_account_count(4)
///     .build()
///     .await?;
/// let instance = network.deployed()?;
/// ```
pub struct TestNetworkBuilder {
    /// Number of accounts to generate
    account_count: usize,

    /// RNG seed, `None` reads `ERC1155E_TEST_SEED` or picks one at random
    seed: Option<u64>,

    /// Deploy one contract during `build`
    auto_deploy: bool,
}

impl TestNetworkBuilder {
    /// Create new builder with defaults
    ///
    /// Default configuration:
    /// - 10 accounts
    /// - seed from the environment or random
    /// - one contract deployed
    pub fn new() -> Self {
        Self {
            account_count: DEFAULT_ACCOUNT_COUNT,
            seed: None,
            auto_deploy: true,
        }
    }

    /// Account count and seed taken from a harness config
    pub fn from_config(config: &HarnessConfig) -> Self {
        Self {
            account_count: config.account_count,
            seed: config.seed,
            auto_deploy: true,
        }
    }

    pub fn with_account_count(mut self, count: usize) -> Self {
        self.account_count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Skip the initial deployment, `deployed()` fails until one is made
    pub fn with_auto_deploy(mut self, auto_deploy: bool) -> Self {
        self.auto_deploy = auto_deploy;
        self
    }

    /// Build the TestNetwork instance
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No accounts were requested
    /// - The initial deployment fails
    pub async fn build(self) -> Result<TestNetwork> {
        ensure!(
            self.account_count > 0,
            "A test network needs at least one account"
        );

        let env = match self.seed {
            Some(seed) => DeterministicTestEnv::with_seed(seed),
            None => DeterministicTestEnv::new(),
        };

        let mut seen = HashSet::with_capacity(self.account_count);
        let mut accounts = Vec::with_capacity(self.account_count);
        while accounts.len() < self.account_count {
            let address = env.rng.gen_address();
            if seen.insert(address) {
                accounts.push(address);
            }
        }

        log::debug!(
            "Generated {} accounts from seed 0x{:016x}",
            accounts.len(),
            env.seed()
        );

        let network = TestNetwork::new(env, accounts);
        if self.auto_deploy {
            network.deploy()?;
        }
        Ok(network)
    }
}

impl Default for TestNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builder_default() {
        let network = TestNetworkBuilder::new().with_seed(5).build().await.unwrap();

        assert_eq!(network.accounts().len(), DEFAULT_ACCOUNT_COUNT);
        assert!(network.deployed().is_ok());
        assert_eq!(network.seed(), 5);
    }

    #[tokio::test]
    async fn test_same_seed_same_accounts() {
        let a = TestNetworkBuilder::new().with_seed(9).build().await.unwrap();
        let b = TestNetworkBuilder::new().with_seed(9).build().await.unwrap();

        assert_eq!(a.accounts(), b.accounts());
        assert_eq!(
            a.deployed().unwrap().address(),
            b.deployed().unwrap().address()
        );
    }

    #[tokio::test]
    async fn test_accounts_are_distinct() {
        let network = TestNetworkBuilder::new()
            .with_seed(3)
            .with_account_count(32)
            .build()
            .await
            .unwrap();

        let unique: HashSet<_> = network.accounts().iter().collect();
        assert_eq!(unique.len(), 32);
    }

    #[tokio::test]
    async fn test_without_auto_deploy() {
        let network = TestNetworkBuilder::new()
            .with_seed(1)
            .with_auto_deploy(false)
            .build()
            .await
            .unwrap();
        assert!(network.deployed().is_err());
    }

    #[tokio::test]
    async fn test_zero_accounts_rejected() {
        let result = TestNetworkBuilder::new()
            .with_seed(1)
            .with_account_count(0)
            .build()
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = HarnessConfig {
            account_count: 3,
            seed: Some(77),
            ..Default::default()
        };
        let network = TestNetworkBuilder::from_config(&config).build().await.unwrap();
        assert_eq!(network.accounts().len(), 3);
        assert_eq!(network.seed(), 77);
    }
}

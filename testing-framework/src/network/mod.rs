// File: testing-framework/src/network/mod.rs
//
// Test Network
//
// Owns the accounts handed to a test and every contract deployed during it.
// `deployed()` answers the usual "give me the live instance" lookup with the
// most recent deployment.

mod builder;

pub use builder::TestNetworkBuilder;

use crate::contract::{Erc1155e, InMemoryErc1155e};
use crate::orchestrator::DeterministicTestEnv;
use anyhow::{anyhow, bail, Result};
use erc1155e_common::{config::ADDRESS_SIZE, crypto::keccak256, Address};
use parking_lot::RwLock;
use std::sync::Arc;

/// Accounts plus deployments for a single test case
///
/// Nothing is shared between networks: two tests holding separate networks
/// never observe each other's tokens or balances.
pub struct TestNetwork {
    env: DeterministicTestEnv,
    accounts: Vec<Address>,
    deployments: RwLock<Vec<Arc<dyn Erc1155e>>>,
}

impl TestNetwork {
    pub(crate) fn new(env: DeterministicTestEnv, accounts: Vec<Address>) -> Self {
        Self {
            env,
            accounts,
            deployments: RwLock::new(Vec::new()),
        }
    }

    pub fn accounts(&self) -> &[Address] {
        &self.accounts
    }

    pub fn account(&self, index: usize) -> Result<Address> {
        self.accounts.get(index).copied().ok_or_else(|| {
            anyhow!(
                "Account {} requested but the network only has {}",
                index,
                self.accounts.len()
            )
        })
    }

    /// Seed the accounts were generated from
    pub fn seed(&self) -> u64 {
        self.env.seed()
    }

    pub fn env(&self) -> &DeterministicTestEnv {
        &self.env
    }

    /// Deploy a fresh in-process contract from the first account
    pub fn deploy(&self) -> Result<Arc<dyn Erc1155e>> {
        let deployer = self.account(0)?;
        let mut deployments = self.deployments.write();
        let address = contract_address(&deployer, deployments.len() as u64);

        let contract: Arc<dyn Erc1155e> = Arc::new(InMemoryErc1155e::new(address));
        deployments.push(contract.clone());

        log::info!(
            "Deployed ERC1155e #{} at {} (deployer {})",
            deployments.len(),
            address,
            deployer
        );
        Ok(contract)
    }

    /// Track a deployment created elsewhere, e.g. a node-backed handle
    pub fn register(&self, contract: Arc<dyn Erc1155e>) {
        log::debug!("Registered ERC1155e at {}", contract.address());
        self.deployments.write().push(contract);
    }

    /// Most recent deployment
    pub fn deployed(&self) -> Result<Arc<dyn Erc1155e>> {
        match self.deployments.read().last() {
            Some(contract) => Ok(contract.clone()),
            None => bail!("No ERC1155e contract has been deployed on this network"),
        }
    }

    pub fn deployment_count(&self) -> usize {
        self.deployments.read().len()
    }
}

// Contract address from the deployer and its deployment index, last 20
// bytes of the keccak digest
fn contract_address(deployer: &Address, index: u64) -> Address {
    let mut preimage = Vec::with_capacity(ADDRESS_SIZE + 8);
    preimage.extend_from_slice(deployer.as_bytes());
    preimage.extend_from_slice(&index.to_be_bytes());

    let digest = keccak256(&preimage);
    let mut bytes = [0u8; ADDRESS_SIZE];
    bytes.copy_from_slice(&digest.as_bytes()[32 - ADDRESS_SIZE..]);
    Address::new(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> TestNetwork {
        let env = DeterministicTestEnv::with_seed(1);
        let accounts = (0..3).map(|_| env.rng.gen_address()).collect();
        TestNetwork::new(env, accounts)
    }

    #[test]
    fn test_deployed_without_deployment_fails() {
        let network = network();
        let err = network.deployed().err().unwrap();
        assert!(err.to_string().contains("No ERC1155e contract"));
    }

    #[test]
    fn test_deployed_returns_latest() {
        let network = network();
        let first = network.deploy().unwrap();
        let second = network.deploy().unwrap();

        assert_ne!(first.address(), second.address());
        assert_eq!(network.deployed().unwrap().address(), second.address());
        assert_eq!(network.deployment_count(), 2);
    }

    #[test]
    fn test_register_external_handle() {
        let network = network();
        let handle = Arc::new(InMemoryErc1155e::new(Address::new([0xAB; 20])));
        network.register(handle);
        assert_eq!(
            network.deployed().unwrap().address(),
            Address::new([0xAB; 20])
        );
    }

    #[test]
    fn test_account_out_of_range() {
        let network = network();
        assert!(network.account(2).is_ok());
        assert!(network.account(3).is_err());
    }

    #[test]
    fn test_contract_address_is_stable() {
        let deployer = Address::new([1; 20]);
        assert_eq!(contract_address(&deployer, 0), contract_address(&deployer, 0));
        assert_ne!(contract_address(&deployer, 0), contract_address(&deployer, 1));
    }
}

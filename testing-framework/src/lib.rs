//! # ERC1155e Testing Framework
//!
//! Test harness for the `safeFullBatchTransferFrom` entry point of an
//! ERC1155e multi-token contract.
//!
//! ## Flow
//!
//! Every test case runs the same three steps:
//! - **Fixtures**: N senders, N recipients, N freshly created ids, N amounts
//!   and a memo (`fixtures`)
//! - **Invocation**: one batch transfer call, awaited to its receipt
//!   (`invoker`)
//! - **Assertion**: the receipt carries a `TransferFullBatch` event whose
//!   `_memo` equals the bytes sent (`assertions`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use erc1155e_testing_framework::prelude::*;
//!
//! #[tokio::test]
//! async fn test_full_batch_transfer() {
//!     let network = TestNetworkBuilder::new().build().await.unwrap();
//!     let instance = network.deployed().unwrap();
//!     let accounts = network.accounts();
//!
//!     let fixture = FixtureBuilder::new(BatchSize::ONE, accounts[0], accounts[1])
//!         .with_memo(Memo::from_ascii("test").unwrap())
//!         .build(&*instance)
//!         .await
//!         .unwrap();
//!
//!     let receipt = BatchInvoker::new(&*instance)
//!         .invoke(&accounts[0], &fixture)
//!         .await
//!         .unwrap();
//!
//!     assert_event_emitted(
//!         &receipt,
//!         EventKind::TransferFullBatch,
//!         |ev| ev.memo() == Some(&fixture.memo),
//!         "TransferFullBatch should be emitted with corrected parameters",
//!     )
//!     .unwrap();
//! }
//! ```
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: seeded accounts, replayable via `ERC1155E_TEST_SEED`
//! 2. **Isolated**: each `TestNetwork` owns its deployments
//! 3. **Contract-side validation**: the harness never pre-checks arguments

#![warn(clippy::all)]

/// Core orchestration - seeded RNG and deterministic environment
pub mod orchestrator;

/// Contract trait and in-process deployment
pub mod contract;

/// Accounts and deployments for a test case
pub mod network;

// Harness configuration (defaults, YAML, environment)
pub mod config;

// Argument array construction
pub mod fixtures;

// Batch transfer invocation
pub mod invoker;

// Receipt event checks
pub mod assertions;

// Scenario runner and reports
pub mod scenarios;

// Convenient re-exports for common usage
pub mod prelude;

// Re-export commonly used types at crate root
pub use contract::{Erc1155e, InMemoryErc1155e};
pub use network::{TestNetwork, TestNetworkBuilder};
pub use orchestrator::{DeterministicTestEnv, TestRng};

/// Framework version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

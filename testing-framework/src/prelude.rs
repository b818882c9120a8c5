//! Prelude module for convenient imports
//!
//! Import everything you need with:
//! ```rust,ignore
//! use erc1155e_testing_framework::prelude::*;
//! ```

// Re-export orchestrator types
pub use crate::orchestrator::{DeterministicTestEnv, TestRng};

// Collaborator seam and the in-process deployment
pub use crate::contract::{Erc1155e, InMemoryErc1155e};
pub use crate::network::{TestNetwork, TestNetworkBuilder};

// Harness steps
pub use crate::assertions::{
    assert_event_count, assert_event_emitted, assert_event_field, assert_event_not_emitted,
    assert_reverts, assert_success, AssertionError,
};
pub use crate::config::HarnessConfig;
pub use crate::fixtures::{BatchFixture, BatchSize, FixtureBuilder, IdCreation};
pub use crate::invoker::{BatchInvoker, InvokeError};
pub use crate::scenarios::{FullBatchScenario, ScenarioReport};

// Re-export commonly used primitives
pub use erc1155e_common::{
    Address, Amount, ContractError, Event, EventKind, EventValue, Hash, Memo, TokenId,
    TransactionReceipt, TxStatus,
};

// Re-export commonly used external types
pub use anyhow::{Context, Result};
pub use std::sync::Arc;

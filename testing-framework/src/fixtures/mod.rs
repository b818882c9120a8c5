// File: testing-framework/src/fixtures/mod.rs
//
// Batch Fixtures
//
// Builds the four parallel argument arrays of a full-batch transfer: N
// copies of the source account, N copies of the destination, N freshly
// created token ids and N amounts, plus the memo.

use crate::config::{ConfigError, HarnessConfig, DEFAULT_TOKEN_NAME};
use crate::contract::Erc1155e;
use anyhow::{bail, Context, Result};
use erc1155e_common::{Address, Amount, ContractError, Memo, TokenId};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use strum::{Display, EnumString};

/// Number of slots in a batch, never zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSize(NonZeroUsize);

impl BatchSize {
    pub const ONE: BatchSize = BatchSize(NonZeroUsize::MIN);

    pub fn new(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(BatchSize)
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// How the token ids of a batch are created
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IdCreation {
    /// One `create` after another, slot `i` gets the `i`-th id
    #[default]
    Sequential,
    /// All `create` calls in flight together, results joined in request order
    Concurrent,
}

/// Argument arrays for one `safeFullBatchTransferFrom` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFixture {
    pub from: Vec<Address>,
    pub to: Vec<Address>,
    pub ids: Vec<TokenId>,
    pub values: Vec<Amount>,
    pub memo: Memo,
}

impl BatchFixture {
    /// Number of slots, taken from the sender array
    pub fn len(&self) -> usize {
        self.from.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }
}

/// Builder for `BatchFixture`
///
/// # Example
///
/// ```rust,ignore
/// let fixture = FixtureBuilder::new(BatchSize::ONE, accounts[0], accounts[1])
///     .with_memo(Memo::from_ascii("test")?)
///     .build(&*instance)
///     .await?;
/// ```
pub struct FixtureBuilder {
    size: BatchSize,
    source: Address,
    destination: Address,
    token_name: String,
    is_fungible: bool,
    value: Amount,
    memo: Memo,
    id_creation: IdCreation,
}

impl FixtureBuilder {
    /// Zero-value batch of non-fungible ids with an empty memo
    pub fn new(size: BatchSize, source: Address, destination: Address) -> Self {
        Self {
            size,
            source,
            destination,
            token_name: DEFAULT_TOKEN_NAME.to_string(),
            is_fungible: false,
            value: Amount::zero(),
            memo: Memo::empty(),
            id_creation: IdCreation::Sequential,
        }
    }

    pub fn from_config(
        config: &HarnessConfig,
        source: Address,
        destination: Address,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(config.batch_size()?, source, destination)
            .with_token_name(config.token_name.clone())
            .with_fungible(config.is_fungible)
            .with_value(Amount::from(config.transfer_value))
            .with_memo(config.memo()?)
            .with_id_creation(config.id_creation))
    }

    pub fn with_token_name(mut self, name: impl Into<String>) -> Self {
        self.token_name = name.into();
        self
    }

    pub fn with_fungible(mut self, is_fungible: bool) -> Self {
        self.is_fungible = is_fungible;
        self
    }

    /// Amount placed in every slot
    pub fn with_value(mut self, value: Amount) -> Self {
        self.value = value;
        self
    }

    pub fn with_memo(mut self, memo: Memo) -> Self {
        self.memo = memo;
        self
    }

    pub fn with_id_creation(mut self, id_creation: IdCreation) -> Self {
        self.id_creation = id_creation;
        self
    }

    /// Create the ids through `contract` and assemble the arrays
    ///
    /// Ids are created by the source account. A non-zero value is minted to
    /// the source for every fungible id so the transfer can cover it. The
    /// first failing call aborts the build and its error is returned
    /// unchanged in the chain.
    pub async fn build(self, contract: &dyn Erc1155e) -> Result<BatchFixture> {
        let size = self.size.get();
        if size == 1 {
            log::debug!("Building a single-slot batch");
        }
        if !self.is_fungible && !self.value.is_zero() {
            bail!(
                "Cannot move {} of a non-fungible type, only zero-value slots are allowed",
                self.value
            );
        }

        let ids = match self.id_creation {
            IdCreation::Sequential => {
                let mut ids = Vec::with_capacity(size);
                for slot in 0..size {
                    let id = self
                        .provision(contract)
                        .await
                        .with_context(|| format!("Failed to create token id for slot {}", slot))?;
                    ids.push(id);
                }
                ids
            }
            IdCreation::Concurrent => {
                let requests = (0..size).map(|_| self.provision(contract));
                try_join_all(requests)
                    .await
                    .context("Failed to create token ids")?
            }
        };

        log::debug!(
            "Created {} token ids ({} mode) for {} -> {}",
            ids.len(),
            self.id_creation,
            self.source,
            self.destination
        );

        Ok(BatchFixture {
            from: vec![self.source; size],
            to: vec![self.destination; size],
            ids,
            values: vec![self.value; size],
            memo: self.memo,
        })
    }

    // Create one id and fund the source with the slot value
    async fn provision(&self, contract: &dyn Erc1155e) -> Result<TokenId, ContractError> {
        let (id, _) = contract
            .create(&self.source, &self.token_name, self.is_fungible)
            .await?;
        if !self.value.is_zero() {
            contract
                .mint(&self.source, &id, &[self.source], &[self.value])
                .await?;
        }
        Ok(id)
    }
}

// File: testing-framework/src/invoker.rs
//
// Contract Invoker
//
// Sends a prepared batch to `safeFullBatchTransferFrom` and hands back the
// receipt. Preconditions are left to the contract: the invoker forwards the
// arrays exactly as built and never retries.

use crate::contract::Erc1155e;
use crate::fixtures::BatchFixture;
use erc1155e_common::{Address, ContractError, TransactionReceipt};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("Contract call did not complete within {0:?}")]
    Timeout(Duration),
}

impl InvokeError {
    /// Revert reason, if the contract rejected the call
    pub fn contract_error(&self) -> Option<&ContractError> {
        match self {
            InvokeError::Contract(err) => Some(err),
            InvokeError::Timeout(_) => None,
        }
    }
}

pub struct BatchInvoker<'a> {
    contract: &'a dyn Erc1155e,
    timeout: Option<Duration>,
}

impl<'a> BatchInvoker<'a> {
    pub fn new(contract: &'a dyn Erc1155e) -> Self {
        Self {
            contract,
            timeout: None,
        }
    }

    /// Bound each call, `None` waits for as long as the contract takes
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Invoke the batch transfer as `caller`
    pub async fn invoke(
        &self,
        caller: &Address,
        fixture: &BatchFixture,
    ) -> Result<TransactionReceipt, InvokeError> {
        log::debug!(
            "Invoking safeFullBatchTransferFrom on {} with {} slots as {}",
            self.contract.address(),
            fixture.len(),
            caller
        );

        let call = self.contract.safe_full_batch_transfer_from(
            caller,
            &fixture.from,
            &fixture.to,
            &fixture.ids,
            &fixture.values,
            &fixture.memo,
        );

        let result = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, call)
                .await
                .map_err(|_| InvokeError::Timeout(timeout))?,
            None => call.await,
        };

        match &result {
            Ok(receipt) => log::debug!(
                "Batch transfer mined in block {} ({})",
                receipt.block_number,
                receipt.transaction_hash
            ),
            Err(err) => log::warn!("Batch transfer reverted: {}", err),
        }

        Ok(result?)
    }
}

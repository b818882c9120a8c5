// File: testing-framework/src/contract/mod.rs
//
// ERC1155e Contract Handle
//
// The token contract under test is an external collaborator. The harness
// only talks to it through the `Erc1155e` trait, so the same fixtures and
// assertions run against the in-process reference deployment or against a
// handle backed by a real node.

/// In-process reference deployment
pub mod memory;

pub use memory::InMemoryErc1155e;

use async_trait::async_trait;
use erc1155e_common::{
    Address, Amount, ContractResult, Memo, TokenId, TransactionReceipt,
};

/// Handle to a deployed ERC1155e contract
///
/// State-changing methods return the transaction receipt. Any revert is
/// reported as a `ContractError` and leaves contract state unchanged.
#[async_trait]
pub trait Erc1155e: Send + Sync {
    /// Address the contract is deployed at
    fn address(&self) -> Address;

    /// Simulate `create` without committing it
    ///
    /// Returns the id the next `create` would hand out. Nothing is stored,
    /// so the id is not usable until a real `create` commits it.
    async fn create_call(
        &self,
        caller: &Address,
        name: &str,
        is_fungible: bool,
    ) -> ContractResult<TokenId>;

    /// Create a new token type owned by `caller`
    async fn create(
        &self,
        caller: &Address,
        name: &str,
        is_fungible: bool,
    ) -> ContractResult<(TokenId, TransactionReceipt)>;

    /// Mint units of `id` to each recipient (creator only)
    ///
    /// For a non-fungible type every quantity must be 1 and each recipient
    /// receives a distinct item id.
    async fn mint(
        &self,
        caller: &Address,
        id: &TokenId,
        to: &[Address],
        quantities: &[Amount],
    ) -> ContractResult<TransactionReceipt>;

    async fn set_approval_for_all(
        &self,
        caller: &Address,
        operator: &Address,
        approved: bool,
    ) -> ContractResult<TransactionReceipt>;

    async fn is_approved_for_all(
        &self,
        owner: &Address,
        operator: &Address,
    ) -> ContractResult<bool>;

    async fn balance_of(&self, owner: &Address, id: &TokenId) -> ContractResult<Amount>;

    async fn balance_of_batch(
        &self,
        owners: &[Address],
        ids: &[TokenId],
    ) -> ContractResult<Vec<Amount>>;

    /// Whether `id` names a created type or a minted item of one
    async fn exists(&self, id: &TokenId) -> ContractResult<bool>;

    async fn creator_of(&self, id: &TokenId) -> ContractResult<Option<Address>>;

    /// Move `values[i]` of `ids[i]` from `from[i]` to `to[i]` for every slot
    ///
    /// Emits exactly one `TransferFullBatch` event echoing `memo`.
    async fn safe_full_batch_transfer_from(
        &self,
        caller: &Address,
        from: &[Address],
        to: &[Address],
        ids: &[TokenId],
        values: &[Amount],
        memo: &Memo,
    ) -> ContractResult<TransactionReceipt>;
}

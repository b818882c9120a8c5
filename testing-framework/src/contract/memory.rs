// File: testing-framework/src/contract/memory.rs
//
// In-Process ERC1155e Deployment
//
// Reference deployment of the token contract used when no node is
// available. It keeps just enough state to enforce the preconditions the
// harness relies on and to emit the events it inspects. Every state-changing
// call validates first and commits last, so a revert never leaves partial
// updates behind.

use super::Erc1155e;
use async_trait::async_trait;
use erc1155e_common::{
    config::FIRST_TOKEN_NONCE,
    crypto::keccak256,
    token::{self, U256},
    Address, Amount, ContractError, ContractResult, Event, Memo, TokenId, TransactionReceipt,
    TxStatus,
};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

const MAX_NONCE: u128 = u128::MAX >> 1;

struct TokenType {
    creator: Address,
    fungible: bool,
    // Next item index handed out by a non-fungible mint
    next_index: u128,
}

struct LedgerState {
    next_nonce: u128,
    types: HashMap<TokenId, TokenType>,
    items: HashSet<TokenId>,
    balances: HashMap<(TokenId, Address), Amount>,
    approvals: HashSet<(Address, Address)>,
    block_number: u64,
}

impl LedgerState {
    fn new() -> Self {
        Self {
            next_nonce: FIRST_TOKEN_NONCE,
            types: HashMap::new(),
            items: HashSet::new(),
            balances: HashMap::new(),
            approvals: HashSet::new(),
            block_number: 0,
        }
    }

    fn balance(&self, owner: &Address, id: &TokenId) -> Amount {
        self.balances
            .get(&(*id, *owner))
            .copied()
            .unwrap_or_default()
    }

    fn exists(&self, id: &TokenId) -> bool {
        let base = token::base_type(id);
        match self.types.get(&base) {
            Some(ty) if ty.fungible => *id == base,
            Some(_) => *id == base || self.items.contains(id),
            None => false,
        }
    }

    fn is_operator(&self, owner: &Address, operator: &Address) -> bool {
        owner == operator || self.approvals.contains(&(*owner, *operator))
    }
}

/// ERC1155e deployment living in process memory
///
/// State-changing calls are serialized behind one write lock and each one
/// is mined into its own block, so block numbers and token nonces are gap
/// free even when calls are issued concurrently.
pub struct InMemoryErc1155e {
    address: Address,
    state: RwLock<LedgerState>,
}

impl InMemoryErc1155e {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            state: RwLock::new(LedgerState::new()),
        }
    }

    /// Number of the last block mined by this deployment
    pub async fn block_number(&self) -> u64 {
        self.state.read().await.block_number
    }

    // Mine the call into the next block and build its receipt
    fn seal(
        &self,
        state: &mut LedgerState,
        caller: &Address,
        method: &str,
        logs: Vec<Event>,
    ) -> TransactionReceipt {
        state.block_number += 1;

        let mut preimage = Vec::with_capacity(48 + method.len());
        preimage.extend_from_slice(self.address.as_bytes());
        preimage.extend_from_slice(caller.as_bytes());
        preimage.extend_from_slice(&state.block_number.to_be_bytes());
        preimage.extend_from_slice(method.as_bytes());

        TransactionReceipt {
            transaction_hash: keccak256(&preimage),
            block_number: state.block_number,
            from: *caller,
            status: TxStatus::Success,
            logs,
        }
    }
}

#[async_trait]
impl Erc1155e for InMemoryErc1155e {
    fn address(&self) -> Address {
        self.address
    }

    async fn create_call(
        &self,
        _caller: &Address,
        _name: &str,
        is_fungible: bool,
    ) -> ContractResult<TokenId> {
        let state = self.state.read().await;
        if state.next_nonce > MAX_NONCE {
            return Err(ContractError::Overflow);
        }
        Ok(token::token_id_for(state.next_nonce, !is_fungible))
    }

    async fn create(
        &self,
        caller: &Address,
        name: &str,
        is_fungible: bool,
    ) -> ContractResult<(TokenId, TransactionReceipt)> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let nonce = state.next_nonce;
        if nonce > MAX_NONCE {
            return Err(ContractError::Overflow);
        }
        let id = token::token_id_for(nonce, !is_fungible);

        state.next_nonce = nonce + 1;
        state.types.insert(
            id,
            TokenType {
                creator: *caller,
                fungible: is_fungible,
                next_index: 1,
            },
        );

        // Zero-value mint marks the creation of the type
        let mut logs = vec![Event::TransferSingle {
            operator: *caller,
            from: Address::zero(),
            to: Address::zero(),
            id,
            value: Amount::zero(),
        }];
        if !name.is_empty() {
            logs.push(Event::Uri {
                value: name.to_string(),
                id,
            });
        }

        let receipt = self.seal(state, caller, "create", logs);
        log::debug!(
            "Created token type {:#x} ({}, fungible={}) for {} in block {}",
            id,
            name,
            is_fungible,
            caller,
            receipt.block_number
        );

        Ok((id, receipt))
    }

    async fn mint(
        &self,
        caller: &Address,
        id: &TokenId,
        to: &[Address],
        quantities: &[Amount],
    ) -> ContractResult<TransactionReceipt> {
        if to.len() != quantities.len() {
            return Err(ContractError::ArgumentLengthMismatch {
                left: to.len(),
                right: quantities.len(),
            });
        }

        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let (creator, fungible, next_index) = match state.types.get(id) {
            Some(ty) => (ty.creator, ty.fungible, ty.next_index),
            None => return Err(ContractError::UnknownToken(*id)),
        };
        if creator != *caller {
            return Err(ContractError::NotCreator {
                caller: *caller,
                id: *id,
            });
        }
        if to.iter().any(Address::is_zero) {
            return Err(ContractError::ZeroAddress);
        }

        let mut logs = Vec::with_capacity(to.len());
        if fungible {
            let mut staged: HashMap<(TokenId, Address), Amount> = HashMap::new();
            for (recipient, quantity) in to.iter().zip(quantities) {
                let key = (*id, *recipient);
                let current = staged
                    .get(&key)
                    .copied()
                    .unwrap_or_else(|| state.balance(recipient, id));
                let credited = current
                    .checked_add(*quantity)
                    .ok_or(ContractError::Overflow)?;
                staged.insert(key, credited);
                logs.push(Event::TransferSingle {
                    operator: *caller,
                    from: Address::zero(),
                    to: *recipient,
                    id: *id,
                    value: *quantity,
                });
            }
            state.balances.extend(staged);
        } else {
            if let Some(quantity) = quantities.iter().find(|q| **q != Amount::one()) {
                return Err(ContractError::InvalidQuantity(*quantity));
            }
            let count = to.len() as u128;
            let last_index = next_index
                .checked_add(count)
                .ok_or(ContractError::Overflow)?;

            for (offset, recipient) in to.iter().enumerate() {
                let item = *id + U256::from(next_index + offset as u128);
                state.items.insert(item);
                state.balances.insert((item, *recipient), Amount::one());
                logs.push(Event::TransferSingle {
                    operator: *caller,
                    from: Address::zero(),
                    to: *recipient,
                    id: item,
                    value: Amount::one(),
                });
            }
            if let Some(ty) = state.types.get_mut(id) {
                ty.next_index = last_index;
            }
        }

        Ok(self.seal(state, caller, "mint", logs))
    }

    async fn set_approval_for_all(
        &self,
        caller: &Address,
        operator: &Address,
        approved: bool,
    ) -> ContractResult<TransactionReceipt> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        if approved {
            state.approvals.insert((*caller, *operator));
        } else {
            state.approvals.remove(&(*caller, *operator));
        }

        let logs = vec![Event::ApprovalForAll {
            owner: *caller,
            operator: *operator,
            approved,
        }];
        Ok(self.seal(state, caller, "setApprovalForAll", logs))
    }

    async fn is_approved_for_all(
        &self,
        owner: &Address,
        operator: &Address,
    ) -> ContractResult<bool> {
        let state = self.state.read().await;
        Ok(state.approvals.contains(&(*owner, *operator)))
    }

    async fn balance_of(&self, owner: &Address, id: &TokenId) -> ContractResult<Amount> {
        let state = self.state.read().await;
        Ok(state.balance(owner, id))
    }

    async fn balance_of_batch(
        &self,
        owners: &[Address],
        ids: &[TokenId],
    ) -> ContractResult<Vec<Amount>> {
        if owners.len() != ids.len() {
            return Err(ContractError::ArgumentLengthMismatch {
                left: owners.len(),
                right: ids.len(),
            });
        }

        let state = self.state.read().await;
        Ok(owners
            .iter()
            .zip(ids)
            .map(|(owner, id)| state.balance(owner, id))
            .collect())
    }

    async fn exists(&self, id: &TokenId) -> ContractResult<bool> {
        let state = self.state.read().await;
        Ok(state.exists(id))
    }

    async fn creator_of(&self, id: &TokenId) -> ContractResult<Option<Address>> {
        let state = self.state.read().await;
        Ok(state
            .types
            .get(&token::base_type(id))
            .map(|ty| ty.creator))
    }

    async fn safe_full_batch_transfer_from(
        &self,
        caller: &Address,
        from: &[Address],
        to: &[Address],
        ids: &[TokenId],
        values: &[Amount],
        memo: &Memo,
    ) -> ContractResult<TransactionReceipt> {
        // Step 1: all four arrays describe the same slots
        let slots = from.len();
        if to.len() != slots || ids.len() != slots || values.len() != slots {
            return Err(ContractError::LengthMismatch {
                from: from.len(),
                to: to.len(),
                ids: ids.len(),
                values: values.len(),
            });
        }

        let mut guard = self.state.write().await;
        let state = &mut *guard;

        // Step 2: every id names a known type or item
        if let Some(id) = ids.iter().find(|id| !state.exists(id)) {
            return Err(ContractError::UnknownToken(*id));
        }

        // Step 3: no burns through a transfer
        if to.iter().any(Address::is_zero) {
            return Err(ContractError::ZeroAddress);
        }

        // Step 4: caller moves only what it owns or operates
        if let Some(owner) = from.iter().find(|owner| !state.is_operator(owner, caller)) {
            return Err(ContractError::NotAuthorized {
                caller: *caller,
                owner: *owner,
            });
        }

        // Step 5: stage balances slot by slot so repeated owners see running totals
        let mut staged: HashMap<(TokenId, Address), Amount> = HashMap::new();
        for slot in 0..slots {
            let (owner, recipient, id, value) = (&from[slot], &to[slot], &ids[slot], values[slot]);

            let debit_key = (*id, *owner);
            let have = staged
                .get(&debit_key)
                .copied()
                .unwrap_or_else(|| state.balance(owner, id));
            let remaining =
                have.checked_sub(value)
                    .ok_or(ContractError::InsufficientBalance {
                        owner: *owner,
                        id: *id,
                        need: value,
                        have,
                    })?;
            staged.insert(debit_key, remaining);

            let credit_key = (*id, *recipient);
            let current = staged
                .get(&credit_key)
                .copied()
                .unwrap_or_else(|| state.balance(recipient, id));
            let credited = current.checked_add(value).ok_or(ContractError::Overflow)?;
            staged.insert(credit_key, credited);
        }

        // Step 6: commit
        state.balances.extend(staged);

        let logs = vec![Event::TransferFullBatch {
            operator: *caller,
            from: from.to_vec(),
            to: to.to_vec(),
            ids: ids.to_vec(),
            values: values.to_vec(),
            memo: memo.clone(),
        }];
        let receipt = self.seal(state, caller, "safeFullBatchTransferFrom", logs);

        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "Full batch transfer of {} slots by {} mined in block {} (memo {})",
                slots,
                caller,
                receipt.block_number,
                memo
            );
        }

        Ok(receipt)
    }
}

// Contract events
//
// Events carried in a transaction receipt. Field access by name uses the
// parameter names of the contract ABI (`_memo`, `_ids`, ...) so assertions
// read the same way as they would against a live node.

use crate::{
    crypto::Address,
    memo::Memo,
    token::{Amount, TokenId, U256},
};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Event name as declared by the contract
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter, Serialize,
    Deserialize,
)]
pub enum EventKind {
    TransferSingle,
    TransferFullBatch,
    ApprovalForAll,
    #[strum(serialize = "URI")]
    #[serde(rename = "URI")]
    Uri,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum Event {
    TransferSingle {
        operator: Address,
        from: Address,
        to: Address,
        id: TokenId,
        value: Amount,
    },
    TransferFullBatch {
        operator: Address,
        from: Vec<Address>,
        to: Vec<Address>,
        ids: Vec<TokenId>,
        values: Vec<Amount>,
        memo: Memo,
    },
    ApprovalForAll {
        owner: Address,
        operator: Address,
        approved: bool,
    },
    #[serde(rename = "URI")]
    Uri { value: String, id: TokenId },
}

/// Decoded value of a single event parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValue {
    Address(Address),
    Addresses(Vec<Address>),
    Uint(U256),
    Uints(Vec<U256>),
    Bytes(Memo),
    Bool(bool),
    String(String),
}

impl EventValue {
    pub fn as_bytes(&self) -> Option<&Memo> {
        match self {
            EventValue::Bytes(memo) => Some(memo),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<&U256> {
        match self {
            EventValue::Uint(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_addresses(&self) -> Option<&[Address]> {
        match self {
            EventValue::Addresses(list) => Some(list),
            _ => None,
        }
    }
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::TransferSingle { .. } => EventKind::TransferSingle,
            Event::TransferFullBatch { .. } => EventKind::TransferFullBatch,
            Event::ApprovalForAll { .. } => EventKind::ApprovalForAll,
            Event::Uri { .. } => EventKind::Uri,
        }
    }

    /// Parameter names in declaration order
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            Event::TransferSingle { .. } => &["_operator", "_from", "_to", "_id", "_value"],
            Event::TransferFullBatch { .. } => {
                &["_operator", "_from", "_to", "_ids", "_values", "_memo"]
            }
            Event::ApprovalForAll { .. } => &["_owner", "_operator", "_approved"],
            Event::Uri { .. } => &["_value", "_id"],
        }
    }

    /// Look up a parameter by its ABI name
    pub fn field(&self, name: &str) -> Option<EventValue> {
        let value = match (self, name) {
            (Event::TransferSingle { operator, .. }, "_operator") => EventValue::Address(*operator),
            (Event::TransferSingle { from, .. }, "_from") => EventValue::Address(*from),
            (Event::TransferSingle { to, .. }, "_to") => EventValue::Address(*to),
            (Event::TransferSingle { id, .. }, "_id") => EventValue::Uint(*id),
            (Event::TransferSingle { value, .. }, "_value") => EventValue::Uint(*value),

            (Event::TransferFullBatch { operator, .. }, "_operator") => {
                EventValue::Address(*operator)
            }
            (Event::TransferFullBatch { from, .. }, "_from") => EventValue::Addresses(from.clone()),
            (Event::TransferFullBatch { to, .. }, "_to") => EventValue::Addresses(to.clone()),
            (Event::TransferFullBatch { ids, .. }, "_ids") => EventValue::Uints(ids.clone()),
            (Event::TransferFullBatch { values, .. }, "_values") => {
                EventValue::Uints(values.clone())
            }
            (Event::TransferFullBatch { memo, .. }, "_memo") => EventValue::Bytes(memo.clone()),

            (Event::ApprovalForAll { owner, .. }, "_owner") => EventValue::Address(*owner),
            (Event::ApprovalForAll { operator, .. }, "_operator") => {
                EventValue::Address(*operator)
            }
            (Event::ApprovalForAll { approved, .. }, "_approved") => EventValue::Bool(*approved),

            (Event::Uri { value, .. }, "_value") => EventValue::String(value.clone()),
            (Event::Uri { id, .. }, "_id") => EventValue::Uint(*id),

            _ => return None,
        };
        Some(value)
    }

    /// Memo of a `TransferFullBatch`, `None` for every other event
    pub fn memo(&self) -> Option<&Memo> {
        match self {
            Event::TransferFullBatch { memo, .. } => Some(memo),
            _ => None,
        }
    }
}

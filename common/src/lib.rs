#![allow(clippy::module_inception)]
#![allow(clippy::too_many_arguments)]

pub mod config;
pub mod crypto;
pub mod error;
pub mod event;
pub mod memo;
pub mod receipt;
pub mod token;

pub use crypto::{Address, CryptoError, Hash};
pub use error::{ContractError, ContractResult};
pub use event::{Event, EventKind, EventValue};
pub use memo::{EncodingError, Memo};
pub use receipt::{TransactionReceipt, TxStatus};
pub use token::{Amount, TokenId, U256};

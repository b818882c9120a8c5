// Contract revert reasons
//
// Error Code Ranges:
// - 100-199: Input validation errors
// - 200-299: Token errors
// - 300-399: Permission errors
// - 400-499: Balance errors
// - 900-999: Generic reverts

use crate::{
    crypto::Address,
    token::{Amount, TokenId},
};
use thiserror::Error;

/// Contract call result type
pub type ContractResult<T> = Result<T, ContractError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    // ========================================
    // Input validation errors (100-199)
    // ========================================
    #[error("Array length mismatch: from={from}, to={to}, ids={ids}, values={values}")]
    LengthMismatch {
        from: usize,
        to: usize,
        ids: usize,
        values: usize,
    },

    #[error("Argument length mismatch: {left} != {right}")]
    ArgumentLengthMismatch { left: usize, right: usize },

    #[error("Transfer to the zero address")]
    ZeroAddress,

    #[error("Non-fungible mint quantity must be 1, got {0}")]
    InvalidQuantity(Amount),

    // ========================================
    // Token errors (200-299)
    // ========================================
    #[error("Unknown token id {0:#x}")]
    UnknownToken(TokenId),

    // ========================================
    // Permission errors (300-399)
    // ========================================
    #[error("{caller} is not the owner of {owner} nor an approved operator")]
    NotAuthorized { caller: Address, owner: Address },

    #[error("{caller} is not the creator of token {id:#x}")]
    NotCreator { caller: Address, id: TokenId },

    // ========================================
    // Balance errors (400-499)
    // ========================================
    #[error("Insufficient balance of {owner} for token {id:#x}: need {need}, have {have}")]
    InsufficientBalance {
        owner: Address,
        id: TokenId,
        need: Amount,
        have: Amount,
    },

    #[error("Balance overflow")]
    Overflow,

    // ========================================
    // Generic reverts (900-999)
    // ========================================
    #[error("Execution reverted: {0}")]
    Reverted(String),
}

impl ContractError {
    /// Numeric revert code
    pub fn code(&self) -> u64 {
        match self {
            ContractError::LengthMismatch { .. } => 100,
            ContractError::ArgumentLengthMismatch { .. } => 101,
            ContractError::ZeroAddress => 102,
            ContractError::InvalidQuantity(_) => 103,
            ContractError::UnknownToken(_) => 200,
            ContractError::NotAuthorized { .. } => 300,
            ContractError::NotCreator { .. } => 301,
            ContractError::InsufficientBalance { .. } => 400,
            ContractError::Overflow => 401,
            ContractError::Reverted(_) => 900,
        }
    }
}

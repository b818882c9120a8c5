// Token identifiers and amounts
//
// Ids follow the mixed fungible / non-fungible layout used by ERC1155e:
// the creation nonce sits in the upper half of the id and the top bit
// flags a non-fungible type.

use crate::config::{NONCE_SHIFT, TYPE_NF_BIT_INDEX};
pub use primitive_types::U256;

/// Token type identifier
pub type TokenId = U256;

/// Token quantity
pub type Amount = U256;

const NONCE_MASK: u128 = u128::MAX >> 1;

/// Build the type id for the given creation nonce
pub fn token_id_for(nonce: u128, non_fungible: bool) -> TokenId {
    let id = U256::from(nonce & NONCE_MASK) << NONCE_SHIFT;
    if non_fungible {
        id | (U256::one() << TYPE_NF_BIT_INDEX)
    } else {
        id
    }
}

/// Whether the id belongs to a non-fungible type
pub fn is_non_fungible(id: &TokenId) -> bool {
    id.bit(TYPE_NF_BIT_INDEX)
}

/// Creation nonce carried by the id
pub fn nonce_of(id: &TokenId) -> u128 {
    (*id >> NONCE_SHIFT).low_u128() & NONCE_MASK
}

/// Type id with the per-item index cleared
pub fn base_type(id: &TokenId) -> TokenId {
    (*id >> NONCE_SHIFT) << NONCE_SHIFT
}

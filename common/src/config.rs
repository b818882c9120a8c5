// Sizes of the on-chain identifiers
pub const ADDRESS_SIZE: usize = 20;
pub const HASH_SIZE: usize = 32;

// Token id layout (mixed fungible / non-fungible):
// - bit 255 marks a non-fungible type
// - bits 128..255 hold the creation nonce
// - bits 0..128 are the per-item index for non-fungible items
pub const TYPE_NF_BIT_INDEX: usize = 255;
pub const NONCE_SHIFT: usize = 128;

// First nonce handed out by a fresh deployment
pub const FIRST_TOKEN_NONCE: u128 = 1;

// Upper bound on the memo payload attached to a batch transfer
pub const MAX_MEMO_SIZE: usize = 1024;

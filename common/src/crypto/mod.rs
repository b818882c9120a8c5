mod address;
mod error;
mod hash;

pub use address::Address;
pub use error::CryptoError;
pub use hash::{keccak256, Hash};

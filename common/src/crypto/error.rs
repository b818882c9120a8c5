use thiserror::Error;

/// Errors raised while decoding identifiers from their text form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Invalid hexadecimal string format
    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    /// Hash has invalid length
    #[error("Invalid hash length: {len} bytes, expected: {expected} bytes")]
    InvalidHashLength { len: usize, expected: usize },

    /// Address has invalid length
    #[error("Invalid address length: {len} bytes, expected: {expected} bytes")]
    InvalidAddressLength { len: usize, expected: usize },
}

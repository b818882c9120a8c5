use crate::config::HASH_SIZE;
use serde::de::Error as SerdeError;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use std::{
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

use super::CryptoError;

#[derive(Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    pub const fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    pub const fn zero() -> Self {
        Hash::new([0; HASH_SIZE])
    }

    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

// Hash a byte slice with keccak256, the digest used for transaction hashes
#[inline(always)]
pub fn keccak256(value: &[u8]) -> Hash {
    let result: [u8; HASH_SIZE] = Keccak256::digest(value).into();
    Hash(result)
}

impl FromStr for Hash {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(trimmed).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
        let len = bytes.len();
        let bytes: [u8; HASH_SIZE] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidHashLength {
                len,
                expected: HASH_SIZE,
            })?;
        Ok(Hash::new(bytes))
    }
}

impl Display for Hash {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", &self.to_hex())
    }
}

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'a> Deserialize<'a> for Hash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let hex = String::deserialize(deserializer)?;
        Hash::from_str(&hex).map_err(SerdeError::custom)
    }
}

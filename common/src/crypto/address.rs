use crate::config::ADDRESS_SIZE;
use serde::de::Error as SerdeError;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

use super::CryptoError;

/// Account reference handed out by the test environment
///
/// Displayed and serialized as `0x` followed by 40 lowercase hex digits.
#[derive(Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Debug, Hash, Default)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Address(bytes)
    }

    pub const fn zero() -> Self {
        Address::new([0; ADDRESS_SIZE])
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; ADDRESS_SIZE]
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(trimmed).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
        let len = bytes.len();
        let bytes: [u8; ADDRESS_SIZE] =
            bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidAddressLength {
                    len,
                    expected: ADDRESS_SIZE,
                })?;
        Ok(Address::new(bytes))
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", &self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'a> Deserialize<'a> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let hex = String::deserialize(deserializer)?;
        Address::from_str(&hex).map_err(SerdeError::custom)
    }
}

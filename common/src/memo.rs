// Transfer memo
//
// Opaque byte payload attached to a batch transfer and echoed back in the
// `TransferFullBatch` event. The text form matches the usual `fromAscii`
// helper of Ethereum tooling: `0x` followed by lowercase hex of the bytes.

use crate::config::MAX_MEMO_SIZE;
use serde::de::Error as SerdeError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while encoding or decoding a memo
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Non-ASCII character {character:?} at byte {position}")]
    NonAscii { character: char, position: usize },

    #[error("Memo too long: {len} bytes, maximum: {max} bytes")]
    TooLong { len: usize, max: usize },

    #[error("Invalid hex memo: {0}")]
    InvalidHex(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Memo(Vec<u8>);

impl Memo {
    /// Encode an ASCII string literal byte for byte
    pub fn from_ascii(text: &str) -> Result<Self, EncodingError> {
        if let Some((position, character)) = text.char_indices().find(|(_, c)| !c.is_ascii()) {
            return Err(EncodingError::NonAscii {
                character,
                position,
            });
        }
        Self::from_bytes(text.as_bytes().to_vec())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, EncodingError> {
        if bytes.len() > MAX_MEMO_SIZE {
            return Err(EncodingError::TooLong {
                len: bytes.len(),
                max: MAX_MEMO_SIZE,
            });
        }
        Ok(Memo(bytes))
    }

    pub fn empty() -> Self {
        Memo(Vec::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }
}

impl FromStr for Memo {
    type Err = EncodingError;

    // Parses the `0x`-prefixed hex form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(trimmed).map_err(|e| EncodingError::InvalidHex(e.to_string()))?;
        Self::from_bytes(bytes)
    }
}

impl Display for Memo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Memo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'a> Deserialize<'a> for Memo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let hex = String::deserialize(deserializer)?;
        Memo::from_str(&hex).map_err(SerdeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ascii_matches_tooling_encoding() {
        let memo = Memo::from_ascii("test").unwrap();
        assert_eq!(memo.as_bytes(), b"test");
        assert_eq!(memo.to_hex(), "0x74657374");
    }

    #[test]
    fn test_from_ascii_rejects_non_ascii() {
        let err = Memo::from_ascii("tést").unwrap_err();
        assert_eq!(
            err,
            EncodingError::NonAscii {
                character: 'é',
                position: 1
            }
        );
    }

    #[test]
    fn test_memo_size_limit() {
        let long = "a".repeat(MAX_MEMO_SIZE + 1);
        assert!(matches!(
            Memo::from_ascii(&long),
            Err(EncodingError::TooLong { .. })
        ));
        assert!(Memo::from_ascii(&long[1..]).is_ok());
    }

    #[test]
    fn test_parse_hex_form() {
        let memo: Memo = "0x74657374".parse().unwrap();
        assert_eq!(memo, Memo::from_ascii("test").unwrap());
        assert!(matches!(
            "0x7".parse::<Memo>(),
            Err(EncodingError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_empty_memo() {
        let memo = Memo::from_ascii("").unwrap();
        assert!(memo.is_empty());
        assert_eq!(memo.to_hex(), "0x");
        assert_eq!(memo, Memo::empty());
    }
}

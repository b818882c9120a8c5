// File: testing-framework/src/config.rs
//
// Harness Configuration
//
// Settings resolve in increasing precedence: built-in defaults, an optional
// YAML file, then `ERC1155E_*` environment variables.

use crate::fixtures::{BatchSize, IdCreation};
use erc1155e_common::{EncodingError, Memo};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Number of slots per batch when nothing else is configured
///
/// A batch of one exercises the entry point, not its bulk behavior.
pub const DEFAULT_BATCH_SIZE: usize = 1;

/// Accounts generated for a test network (matches the usual dev-chain default)
pub const DEFAULT_ACCOUNT_COUNT: usize = 10;

pub const DEFAULT_TOKEN_NAME: &str = "foo";
pub const DEFAULT_MEMO: &str = "test";

pub const ENV_BATCH_SIZE: &str = "ERC1155E_BATCH_SIZE";
pub const ENV_MEMO: &str = "ERC1155E_MEMO";
pub const ENV_CALL_TIMEOUT_MS: &str = "ERC1155E_CALL_TIMEOUT_MS";
pub const ENV_ID_CREATION: &str = "ERC1155E_ID_CREATION";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value {value:?} for {name}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("Batch size must be at least 1")]
    ZeroBatchSize,

    #[error("Invalid memo: {0}")]
    InvalidMemo(#[from] EncodingError),

    #[error("Non-fungible slots move a zero value, configured {0}")]
    ValueForNonFungible(u64),

    #[error("Need at least {needed} accounts, configured {configured}")]
    NotEnoughAccounts { needed: usize, configured: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Slots per batch
    pub batch_size: usize,
    /// Name passed to `create` for every minted id
    pub token_name: String,
    pub is_fungible: bool,
    /// ASCII memo attached to the transfer
    pub memo: String,
    /// Amount moved in every slot, minted to the source beforehand
    ///
    /// Only fungible ids can carry a non-zero value.
    pub transfer_value: u64,
    pub id_creation: IdCreation,
    /// Per-call timeout, unset waits forever
    pub call_timeout_ms: Option<u64>,
    pub account_count: usize,
    /// RNG seed for account generation, unset reads `ERC1155E_TEST_SEED`
    pub seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            token_name: DEFAULT_TOKEN_NAME.to_string(),
            is_fungible: false,
            memo: DEFAULT_MEMO.to_string(),
            transfer_value: 0,
            id_creation: IdCreation::Sequential,
            call_timeout_ms: None,
            account_count: DEFAULT_ACCOUNT_COUNT,
            seed: None,
        }
    }
}

impl HarnessConfig {
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Defaults, then the YAML file if given, then the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        let config = config.with_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ERC1155E_*` overrides read through `lookup`
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_BATCH_SIZE) {
            self.batch_size = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv {
                    name: ENV_BATCH_SIZE,
                    value,
                })?;
        }
        if let Some(value) = lookup(ENV_MEMO) {
            self.memo = value;
        }
        if let Some(value) = lookup(ENV_CALL_TIMEOUT_MS) {
            let millis = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv {
                    name: ENV_CALL_TIMEOUT_MS,
                    value,
                })?;
            self.call_timeout_ms = Some(millis);
        }
        if let Some(value) = lookup(ENV_ID_CREATION) {
            self.id_creation = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv {
                    name: ENV_ID_CREATION,
                    value,
                })?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.batch_size()?;
        self.memo()?;
        if !self.is_fungible && self.transfer_value != 0 {
            return Err(ConfigError::ValueForNonFungible(self.transfer_value));
        }
        // Source and destination are distinct accounts
        if self.account_count < 2 {
            return Err(ConfigError::NotEnoughAccounts {
                needed: 2,
                configured: self.account_count,
            });
        }
        Ok(())
    }

    pub fn batch_size(&self) -> Result<BatchSize, ConfigError> {
        BatchSize::new(self.batch_size).ok_or(ConfigError::ZeroBatchSize)
    }

    pub fn memo(&self) -> Result<Memo, ConfigError> {
        Ok(Memo::from_ascii(&self.memo)?)
    }

    pub fn call_timeout(&self) -> Option<Duration> {
        self.call_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_mirror_single_slot_run() {
        let config = HarnessConfig::default();
        assert_eq!(config.batch_size, 1);
        assert_eq!(config.token_name, "foo");
        assert!(!config.is_fungible);
        assert_eq!(config.memo().unwrap().to_hex(), "0x74657374");
        assert_eq!(config.call_timeout(), None);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = HarnessConfig::from_yaml(
            "batch_size: 16\nid_creation: concurrent\ncall_timeout_ms: 250\n",
        )
        .unwrap();
        assert_eq!(config.batch_size, 16);
        assert_eq!(config.id_creation, IdCreation::Concurrent);
        assert_eq!(config.call_timeout(), Some(Duration::from_millis(250)));
        assert_eq!(config.memo, DEFAULT_MEMO);
        assert_eq!(config.account_count, DEFAULT_ACCOUNT_COUNT);
    }

    #[test]
    fn test_env_overrides_take_precedence() {
        let config = HarnessConfig::from_yaml("batch_size: 4\nmemo: yaml\n")
            .unwrap()
            .with_overrides(lookup(&[
                (ENV_BATCH_SIZE, "8"),
                (ENV_MEMO, "env"),
                (ENV_ID_CREATION, "concurrent"),
            ]))
            .unwrap();
        assert_eq!(config.batch_size, 8);
        assert_eq!(config.memo, "env");
        assert_eq!(config.id_creation, IdCreation::Concurrent);
    }

    #[test]
    fn test_invalid_env_value_is_reported() {
        let err = HarnessConfig::default()
            .with_overrides(lookup(&[(ENV_BATCH_SIZE, "many")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv {
                name: ENV_BATCH_SIZE,
                ..
            }
        ));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero = HarnessConfig {
            batch_size: 0,
            ..Default::default()
        };
        assert!(matches!(zero.validate(), Err(ConfigError::ZeroBatchSize)));

        let non_ascii = HarnessConfig {
            memo: "mémo".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            non_ascii.validate(),
            Err(ConfigError::InvalidMemo(_))
        ));

        let valued_nft = HarnessConfig {
            transfer_value: 5,
            ..Default::default()
        };
        assert!(matches!(
            valued_nft.validate(),
            Err(ConfigError::ValueForNonFungible(5))
        ));

        let valued_fungible = HarnessConfig {
            transfer_value: 5,
            is_fungible: true,
            ..Default::default()
        };
        valued_fungible.validate().unwrap();

        let lonely = HarnessConfig {
            account_count: 1,
            ..Default::default()
        };
        assert!(matches!(
            lonely.validate(),
            Err(ConfigError::NotEnoughAccounts { .. })
        ));
    }

    #[test]
    fn test_unknown_yaml_field_type_is_an_error() {
        assert!(matches!(
            HarnessConfig::from_yaml("batch_size: lots\n"),
            Err(ConfigError::Yaml(_))
        ));
    }
}

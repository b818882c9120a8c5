//! Scenario runner
//!
//! A scenario strings the harness steps together against a `TestNetwork`
//! and returns a serializable report:
//!
//! 1. build the argument arrays, creating one fresh token id per slot
//! 2. invoke `safeFullBatchTransferFrom`
//! 3. assert exactly one `TransferFullBatch` carrying the sent `_memo`
//!
//! Scenario settings come from `HarnessConfig`, so the same run can be
//! driven from a YAML file:
//!
//! ```yaml
//! batch_size: 16
//! token_name: "foo"
//! memo: "test"
//! id_creation: "concurrent"
//! call_timeout_ms: 5000
//! ```

pub mod executor;

pub use executor::{FullBatchScenario, ScenarioReport, MEMO_ASSERTION_MESSAGE};

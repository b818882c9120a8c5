// File: testing-framework/src/assertions.rs
//
// Receipt Assertions
//
// Checks over the events of a transaction receipt. Each check returns a
// typed `AssertionError` carrying the caller's message and what the receipt
// actually contained, so a failing test explains itself.

use crate::invoker::InvokeError;
use erc1155e_common::{
    ContractError, Event, EventKind, EventValue, Hash, TransactionReceipt,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssertionError {
    #[error("{message}: no {kind} event emitted (found: {found:?})")]
    EventNotEmitted {
        kind: EventKind,
        message: String,
        found: Vec<EventKind>,
    },

    #[error("{message}: {count} {kind} event(s) emitted but none matched")]
    PredicateFailed {
        kind: EventKind,
        message: String,
        count: usize,
    },

    #[error("{message}: unexpected {kind} event emitted")]
    UnexpectedEvent { kind: EventKind, message: String },

    #[error("Expected {expected} {kind} event(s), found {found}")]
    EventCount {
        kind: EventKind,
        expected: usize,
        found: usize,
    },

    #[error("{kind} event has no field {field}")]
    MissingField { kind: EventKind, field: String },

    #[error("{kind}.{field} mismatch: expected {expected:?}, found {found:?}")]
    FieldMismatch {
        kind: EventKind,
        field: String,
        expected: EventValue,
        found: EventValue,
    },

    #[error("Transaction {0} did not succeed")]
    TransactionFailed(Hash),

    #[error("{message}: call succeeded but a revert was expected")]
    ExpectedRevert { message: String },

    #[error("{message}: call failed with unexpected error: {actual}")]
    WrongRevert { message: String, actual: String },
}

/// Errors that may carry a contract revert reason
pub trait RevertReason: std::fmt::Display {
    fn revert_reason(&self) -> Option<&ContractError>;
}

impl RevertReason for ContractError {
    fn revert_reason(&self) -> Option<&ContractError> {
        Some(self)
    }
}

impl RevertReason for InvokeError {
    fn revert_reason(&self) -> Option<&ContractError> {
        self.contract_error()
    }
}

/// Pass if at least one `kind` event satisfies `predicate`
pub fn assert_event_emitted<F>(
    receipt: &TransactionReceipt,
    kind: EventKind,
    predicate: F,
    message: &str,
) -> Result<(), AssertionError>
where
    F: Fn(&Event) -> bool,
{
    let count = receipt.count_of(kind);
    if count == 0 {
        return Err(AssertionError::EventNotEmitted {
            kind,
            message: message.to_string(),
            found: receipt.events().iter().map(Event::kind).collect(),
        });
    }

    if receipt.events_of(kind).any(predicate) {
        Ok(())
    } else {
        Err(AssertionError::PredicateFailed {
            kind,
            message: message.to_string(),
            count,
        })
    }
}

pub fn assert_event_not_emitted(
    receipt: &TransactionReceipt,
    kind: EventKind,
    message: &str,
) -> Result<(), AssertionError> {
    if receipt.count_of(kind) == 0 {
        Ok(())
    } else {
        Err(AssertionError::UnexpectedEvent {
            kind,
            message: message.to_string(),
        })
    }
}

pub fn assert_event_count(
    receipt: &TransactionReceipt,
    kind: EventKind,
    expected: usize,
) -> Result<(), AssertionError> {
    let found = receipt.count_of(kind);
    if found == expected {
        Ok(())
    } else {
        Err(AssertionError::EventCount {
            kind,
            expected,
            found,
        })
    }
}

/// Compare one field of the first `kind` event
pub fn assert_event_field(
    receipt: &TransactionReceipt,
    kind: EventKind,
    field: &str,
    expected: &EventValue,
) -> Result<(), AssertionError> {
    let event = receipt
        .first_of(kind)
        .ok_or_else(|| AssertionError::EventNotEmitted {
            kind,
            message: format!("Expected field {}", field),
            found: receipt.events().iter().map(Event::kind).collect(),
        })?;

    let found = event
        .field(field)
        .ok_or_else(|| AssertionError::MissingField {
            kind,
            field: field.to_string(),
        })?;

    if &found == expected {
        Ok(())
    } else {
        Err(AssertionError::FieldMismatch {
            kind,
            field: field.to_string(),
            expected: expected.clone(),
            found,
        })
    }
}

pub fn assert_success(receipt: &TransactionReceipt) -> Result<(), AssertionError> {
    if receipt.is_success() {
        Ok(())
    } else {
        Err(AssertionError::TransactionFailed(receipt.transaction_hash))
    }
}

/// Pass if `result` failed with a revert accepted by `expected`
///
/// Returns the revert reason so callers can inspect it further.
pub fn assert_reverts<T, E, F>(
    result: &Result<T, E>,
    expected: F,
    message: &str,
) -> Result<ContractError, AssertionError>
where
    E: RevertReason,
    F: Fn(&ContractError) -> bool,
{
    match result {
        Ok(_) => Err(AssertionError::ExpectedRevert {
            message: message.to_string(),
        }),
        Err(err) => match err.revert_reason() {
            Some(reason) if expected(reason) => Ok(reason.clone()),
            _ => Err(AssertionError::WrongRevert {
                message: message.to_string(),
                actual: err.to_string(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use erc1155e_common::{Address, Amount, Memo, TokenId, TxStatus};

    fn receipt_with(logs: Vec<Event>) -> TransactionReceipt {
        TransactionReceipt {
            transaction_hash: Hash::zero(),
            block_number: 1,
            from: Address::zero(),
            status: TxStatus::Success,
            logs,
        }
    }

    fn batch_event(memo: &str) -> Event {
        Event::TransferFullBatch {
            operator: Address::zero(),
            from: vec![Address::new([1; 20])],
            to: vec![Address::new([2; 20])],
            ids: vec![TokenId::one()],
            values: vec![Amount::zero()],
            memo: Memo::from_ascii(memo).unwrap(),
        }
    }

    #[test]
    fn test_event_emitted_with_matching_memo() {
        let receipt = receipt_with(vec![batch_event("test")]);
        let expected = Memo::from_ascii("test").unwrap();

        assert_event_emitted(
            &receipt,
            EventKind::TransferFullBatch,
            |ev| ev.memo() == Some(&expected),
            "TransferFullBatch should be emitted with corrected parameters",
        )
        .unwrap();
        assert_event_count(&receipt, EventKind::TransferFullBatch, 1).unwrap();
        assert_event_field(
            &receipt,
            EventKind::TransferFullBatch,
            "_memo",
            &EventValue::Bytes(expected),
        )
        .unwrap();
    }

    #[test]
    fn test_missing_event_lists_what_was_found() {
        let receipt = receipt_with(vec![Event::Uri {
            value: "foo".to_string(),
            id: TokenId::one(),
        }]);

        let err = assert_event_emitted(&receipt, EventKind::TransferFullBatch, |_| true, "missing")
            .unwrap_err();
        assert_eq!(
            err,
            AssertionError::EventNotEmitted {
                kind: EventKind::TransferFullBatch,
                message: "missing".to_string(),
                found: vec![EventKind::Uri],
            }
        );
        assert_eq!(
            err.to_string(),
            "missing: no TransferFullBatch event emitted (found: [Uri])"
        );
    }

    #[test]
    fn test_predicate_mismatch() {
        let receipt = receipt_with(vec![batch_event("other")]);
        let expected = Memo::from_ascii("test").unwrap();

        let err = assert_event_emitted(
            &receipt,
            EventKind::TransferFullBatch,
            |ev| ev.memo() == Some(&expected),
            "memo",
        )
        .unwrap_err();
        assert!(matches!(err, AssertionError::PredicateFailed { count: 1, .. }));

        let err = assert_event_field(
            &receipt,
            EventKind::TransferFullBatch,
            "_memo",
            &EventValue::Bytes(expected),
        )
        .unwrap_err();
        assert!(matches!(err, AssertionError::FieldMismatch { .. }));
    }

    #[test]
    fn test_unknown_field_is_reported() {
        let receipt = receipt_with(vec![batch_event("test")]);
        let err = assert_event_field(
            &receipt,
            EventKind::TransferFullBatch,
            "_data",
            &EventValue::Bool(true),
        )
        .unwrap_err();
        assert_eq!(
            err,
            AssertionError::MissingField {
                kind: EventKind::TransferFullBatch,
                field: "_data".to_string(),
            }
        );
    }

    #[test]
    fn test_event_count_and_absence() {
        let receipt = receipt_with(vec![batch_event("a"), batch_event("b")]);
        assert!(matches!(
            assert_event_count(&receipt, EventKind::TransferFullBatch, 1),
            Err(AssertionError::EventCount {
                expected: 1,
                found: 2,
                ..
            })
        ));
        assert_event_not_emitted(&receipt, EventKind::ApprovalForAll, "no approvals").unwrap();
        assert!(
            assert_event_not_emitted(&receipt, EventKind::TransferFullBatch, "none").is_err()
        );
    }

    #[test]
    fn test_failed_status() {
        let mut receipt = receipt_with(vec![]);
        assert_success(&receipt).unwrap();
        receipt.status = TxStatus::Failed;
        assert_eq!(
            assert_success(&receipt),
            Err(AssertionError::TransactionFailed(Hash::zero()))
        );
    }

    #[test]
    fn test_assert_reverts() {
        let reverted: Result<(), ContractError> = Err(ContractError::ZeroAddress);
        let reason =
            assert_reverts(&reverted, |e| *e == ContractError::ZeroAddress, "zero").unwrap();
        assert_eq!(reason, ContractError::ZeroAddress);

        let wrong = assert_reverts(&reverted, |e| e.code() == 200, "unknown id").unwrap_err();
        assert!(matches!(wrong, AssertionError::WrongRevert { .. }));

        let succeeded: Result<(), ContractError> = Ok(());
        assert!(matches!(
            assert_reverts(&succeeded, |_| true, "should fail"),
            Err(AssertionError::ExpectedRevert { .. })
        ));

        let timed_out: Result<(), InvokeError> =
            Err(InvokeError::Timeout(std::time::Duration::from_secs(1)));
        assert!(matches!(
            assert_reverts(&timed_out, |_| true, "timeout is not a revert"),
            Err(AssertionError::WrongRevert { .. })
        ));
    }
}

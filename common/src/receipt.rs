use crate::{
    crypto::{Address, Hash},
    event::{Event, EventKind},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Success,
    Failed,
}

/// Record returned after a state-changing call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub transaction_hash: Hash,
    pub block_number: u64,
    pub from: Address,
    pub status: TxStatus,
    // Emitted events, in emission order
    pub logs: Vec<Event>,
}

impl TransactionReceipt {
    pub fn is_success(&self) -> bool {
        self.status == TxStatus::Success
    }

    pub fn events(&self) -> &[Event] {
        &self.logs
    }

    pub fn events_of(&self, kind: EventKind) -> impl Iterator<Item = &Event> {
        self.logs.iter().filter(move |event| event.kind() == kind)
    }

    pub fn count_of(&self, kind: EventKind) -> usize {
        self.events_of(kind).count()
    }

    pub fn first_of(&self, kind: EventKind) -> Option<&Event> {
        self.events_of(kind).next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{memo::Memo, token::TokenId};

    #[test]
    fn test_event_filters() {
        let receipt = TransactionReceipt {
            transaction_hash: Hash::zero(),
            block_number: 1,
            from: Address::zero(),
            status: TxStatus::Success,
            logs: vec![
                Event::Uri {
                    value: "foo".to_string(),
                    id: TokenId::one(),
                },
                Event::TransferFullBatch {
                    operator: Address::zero(),
                    from: vec![],
                    to: vec![],
                    ids: vec![],
                    values: vec![],
                    memo: Memo::empty(),
                },
            ],
        };

        assert!(receipt.is_success());
        assert_eq!(receipt.count_of(EventKind::TransferFullBatch), 1);
        assert_eq!(receipt.count_of(EventKind::ApprovalForAll), 0);
        assert_eq!(
            receipt.first_of(EventKind::Uri).map(Event::kind),
            Some(EventKind::Uri)
        );
    }

    #[test]
    fn test_receipt_json_shape() {
        let receipt = TransactionReceipt {
            transaction_hash: Hash::zero(),
            block_number: 7,
            from: Address::zero(),
            status: TxStatus::Failed,
            logs: vec![],
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["block_number"], 7);
    }
}

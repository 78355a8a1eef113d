use rust_decimal::Decimal;

use crate::record::{StoredRecord, TransactionRecord};

/// The in-memory record list owned by the caller. Newest imports first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<TransactionRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<TransactionRecord>) -> Self {
        RecordStore { records }
    }

    /// Decodes a persisted payload and migrates every entry.
    ///
    /// Anything that is not a JSON array yields an empty store. Entries that
    /// do not have the record shape are dropped individually.
    pub fn decode(payload: &str) -> Self {
        let value: serde_json::Value = match serde_json::from_str(payload) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "stored records are not valid JSON, starting empty");
                return Self::new();
            }
        };
        let serde_json::Value::Array(items) = value else {
            tracing::warn!("stored records are not a list, starting empty");
            return Self::new();
        };

        let records = items
            .into_iter()
            .enumerate()
            .filter_map(|(idx, item)| match serde_json::from_value::<StoredRecord>(item) {
                Ok(stored) => Some(stored.migrate()),
                Err(e) => {
                    tracing::warn!(index = idx, error = %e, "dropping malformed stored record");
                    None
                }
            })
            .collect();

        RecordStore { records }
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }

    /// Puts a freshly imported batch in front of the existing records,
    /// keeping the batch's own order.
    pub fn prepend(&mut self, batch: Vec<TransactionRecord>) {
        if batch.is_empty() {
            return;
        }
        let older = std::mem::replace(&mut self.records, batch);
        self.records.extend(older);
    }

    pub fn remove(&mut self, index: usize) -> Option<TransactionRecord> {
        (index < self.records.len()).then(|| self.records.remove(index))
    }

    /// Removes everything and returns how many records were dropped.
    pub fn clear(&mut self) -> usize {
        let n = self.records.len();
        self.records.clear();
        n
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Net balance of every record. Saturates instead of overflowing.
    pub fn total(&self) -> Decimal {
        self.records
            .iter()
            .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.value))
    }
}

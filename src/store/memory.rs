use super::{RecordStore, UpsertOutcome};
use crate::errors::AppError;
use crate::record::Record;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-process store keeping insertion order. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<Vec<Record>>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = Record>) -> Self {
        let store = Self::new();
        store.records.write().extend(records);
        store
    }

    /// Make every call fail as if the server were unreachable.
    pub fn set_unavailable(&self, down: bool) {
        self.unavailable.store(down, Ordering::SeqCst);
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<Record> {
        self.records.read().clone()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Store("store unavailable".into()));
        }
        Ok(())
    }
}

impl RecordStore for MemoryStore {
    async fn find_all(&self, limit: i64) -> Result<Vec<Record>, AppError> {
        self.check()?;
        let take = usize::try_from(limit).unwrap_or(0);
        Ok(self.records.read().iter().take(take).cloned().collect())
    }

    async fn replace_or_insert(&self, record: Record) -> Result<UpsertOutcome, AppError> {
        self.check()?;
        let id = record
            .id()
            .cloned()
            .ok_or_else(|| AppError::Store("cannot upsert a record without _id".into()))?;
        let mut records = self.records.write();
        match records.iter_mut().find(|r| r.id() == Some(&id)) {
            Some(existing) => {
                *existing = record;
                Ok(UpsertOutcome::Replaced(id))
            }
            None => {
                records.push(record);
                Ok(UpsertOutcome::Inserted(id))
            }
        }
    }

    async fn count(&self) -> Result<u64, AppError> {
        self.check()?;
        Ok(self.records.read().len() as u64)
    }
}
